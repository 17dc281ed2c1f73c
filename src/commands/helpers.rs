//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::config::{ConfigFile, Overrides, Settings};
use crate::error::{ProtogenError, Result};
use crate::host::HostInfo;

/// Options shared by every command that reads settings
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    pub config: Option<PathBuf>,
    pub proto_root: Option<PathBuf>,
    pub install_dir: Option<PathBuf>,
}

/// Resolve settings for the current directory and host
pub fn load_settings(options: &GlobalOptions) -> Result<Settings> {
    let cwd = std::env::current_dir().map_err(|e| ProtogenError::IoError {
        message: format!("Failed to get current directory: {e}"),
    })?;
    load_settings_in(options, &cwd, HostInfo::detect())
}

/// Resolve settings relative to `cwd` for `host`
pub fn load_settings_in(options: &GlobalOptions, cwd: &Path, host: HostInfo) -> Result<Settings> {
    let file = ConfigFile::load(options.config.as_deref(), cwd)?;
    let overrides = Overrides {
        proto_root: options.proto_root.clone(),
        install_dir: options.install_dir.clone(),
    };
    let settings = Settings::resolve(host, file, overrides)?;
    tracing::debug!(
        proto_root = %settings.proto_root.display(),
        install_dir = %settings.install_dir.display(),
        protoc = %settings.protoc_path().display(),
        "settings resolved"
    );
    Ok(settings)
}
