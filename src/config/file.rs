//! `protogen.yaml` configuration file
//!
//! Every key is optional; missing keys fall back to the built-in defaults
//! when the file is resolved into [`Settings`](super::Settings).

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ToolSpec;
use crate::error::{ProtogenError, Result};

/// Config file looked up in the working directory when none is named explicitly
pub const DEFAULT_CONFIG_FILE: &str = "protogen.yaml";

/// Raw contents of a `protogen.yaml` file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub proto_root: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_prefix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_dir: Option<PathBuf>,

    /// Directory the protoc archive is extracted into (contains `bin/` and `include/`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protoc_home: Option<PathBuf>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protoc_version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protoc_base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_suffix: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strip_token: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<Vec<ToolSpec>>,
}

impl ConfigFile {
    /// Parse a config file from YAML. An empty document yields all defaults.
    pub fn from_yaml(yaml: &str, path: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(yaml).map_err(|e| ProtogenError::ConfigParseFailed {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    /// Load the config file.
    ///
    /// An explicitly named file must exist. Without one, `protogen.yaml` in
    /// `cwd` is used when present and `None` is returned otherwise.
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Option<Self>> {
        let path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    return Err(ProtogenError::ConfigNotFound {
                        path: path.display().to_string(),
                    });
                }
                path.to_path_buf()
            }
            None => {
                let candidate = cwd.join(DEFAULT_CONFIG_FILE);
                if !candidate.is_file() {
                    tracing::debug!(path = %candidate.display(), "no config file");
                    return Ok(None);
                }
                candidate
            }
        };

        tracing::debug!(path = %path.display(), "loading config file");
        let content = fs::read_to_string(&path).map_err(|e| ProtogenError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;

        Self::from_yaml(&content, &path.display().to_string()).map(Some)
    }
}
