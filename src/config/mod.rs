//! Configuration for protogen
//!
//! Settings are layered, later sources override earlier ones:
//! 1. Built-in defaults
//! 2. `protogen.yaml` (see [`file`])
//! 3. Environment variables and command-line flags (merged by clap)

pub mod file;

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use file::ConfigFile;

use crate::error::{ProtogenError, Result};
use crate::host::HostInfo;

pub const DEFAULT_PROTO_ROOT: &str = "./pkg/protocol";
pub const DEFAULT_MODULE_PREFIX: &str = "github.com/openimsdk/openim-project-template/pkg/protocol";
pub const DEFAULT_PROTOC_VERSION: &str = "26.1";
pub const DEFAULT_PROTOC_BASE_URL: &str =
    "https://github.com/protocolbuffers/protobuf/releases/download";
pub const DEFAULT_GENERATED_SUFFIX: &str = "*.pb.go";
pub const DEFAULT_STRIP_TOKEN: &str = ",omitempty";

/// A code-generator tool and the package reference `go install` builds it from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolSpec {
    /// Executable name, e.g. `protoc-gen-go`
    pub name: String,
    /// Install source, e.g. `google.golang.org/protobuf/cmd/protoc-gen-go@latest`
    pub source: String,
}

impl ToolSpec {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source: source.into(),
        }
    }
}

/// Generator tools installed when the config file does not list its own
pub fn default_tools() -> Vec<ToolSpec> {
    vec![
        ToolSpec::new(
            "protoc-gen-go",
            "google.golang.org/protobuf/cmd/protoc-gen-go@latest",
        ),
        ToolSpec::new(
            "protoc-gen-go-grpc",
            "google.golang.org/grpc/cmd/protoc-gen-go-grpc@latest",
        ),
    ]
}

/// protoc output plugins used when the config file does not list its own
pub fn default_plugins() -> Vec<String> {
    vec!["go".to_string(), "go-grpc".to_string()]
}

/// Values supplied on the command line or through environment variables
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub proto_root: Option<PathBuf>,
    pub install_dir: Option<PathBuf>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: HostInfo,
    pub proto_root: PathBuf,
    pub module_prefix: String,
    pub install_dir: PathBuf,
    pub protoc_home: PathBuf,
    pub protoc_version: String,
    pub protoc_base_url: String,
    pub generated_suffix: String,
    pub strip_token: String,
    pub plugins: Vec<String>,
    pub tools: Vec<ToolSpec>,
}

impl Settings {
    /// Merge defaults, an optional config file and overrides into settings
    pub fn resolve(host: HostInfo, file: Option<ConfigFile>, overrides: Overrides) -> Result<Self> {
        let file = file.unwrap_or_default();

        let install_dir = overrides
            .install_dir
            .or(file.install_dir)
            .unwrap_or_else(|| host.default_install_dir());

        let protoc_home = file
            .protoc_home
            .unwrap_or_else(|| default_protoc_home(&install_dir));

        let settings = Self {
            proto_root: overrides
                .proto_root
                .or(file.proto_root)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_PROTO_ROOT)),
            module_prefix: file
                .module_prefix
                .unwrap_or_else(|| DEFAULT_MODULE_PREFIX.to_string()),
            install_dir,
            protoc_home,
            protoc_version: file
                .protoc_version
                .unwrap_or_else(|| DEFAULT_PROTOC_VERSION.to_string()),
            protoc_base_url: file
                .protoc_base_url
                .unwrap_or_else(|| DEFAULT_PROTOC_BASE_URL.to_string()),
            generated_suffix: file
                .generated_suffix
                .unwrap_or_else(|| DEFAULT_GENERATED_SUFFIX.to_string()),
            strip_token: file
                .strip_token
                .unwrap_or_else(|| DEFAULT_STRIP_TOKEN.to_string()),
            plugins: file.plugins.unwrap_or_else(default_plugins),
            tools: file.tools.unwrap_or_else(default_tools),
            host,
        };

        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.plugins.is_empty() {
            return Err(invalid("plugins must name at least one protoc plugin"));
        }
        if self.plugins.iter().any(|p| p.trim().is_empty()) {
            return Err(invalid("plugin names must not be empty"));
        }
        if self.strip_token.is_empty() {
            return Err(invalid("strip_token must not be empty"));
        }
        if self.protoc_version.trim().is_empty() {
            return Err(invalid("protoc_version must not be empty"));
        }
        if let Some(tool) = self
            .tools
            .iter()
            .find(|t| t.name.trim().is_empty() || t.source.trim().is_empty())
        {
            return Err(invalid(format!(
                "tool entries need both a name and a source (got name '{}')",
                tool.name
            )));
        }
        Ok(())
    }

    /// Path the protoc binary has once its archive is extracted
    pub fn protoc_path(&self) -> PathBuf {
        self.host
            .executable_path(&self.protoc_home.join("bin"), "protoc")
    }
}

/// protoc archives carry `bin/` and `include/`.
///
/// An install directory named `bin` gets the archive extracted into its
/// parent so protoc lands beside the other tools. Any other install
/// directory receives the archive itself.
fn default_protoc_home(install_dir: &Path) -> PathBuf {
    if install_dir.file_name().is_some_and(|name| name == "bin") {
        match install_dir.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    } else {
        install_dir.to_path_buf()
    }
}

fn invalid(message: impl Into<String>) -> ProtogenError {
    ProtogenError::ConfigInvalid {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HostOs;

    fn linux_host() -> HostInfo {
        HostInfo {
            os: HostOs::Linux,
            arch: "x86_64".to_string(),
            home: Some(PathBuf::from("/home/dev")),
        }
    }

    #[test]
    fn test_resolve_defaults() {
        let settings = Settings::resolve(linux_host(), None, Overrides::default()).unwrap();
        assert_eq!(settings.proto_root, PathBuf::from("./pkg/protocol"));
        assert_eq!(settings.install_dir, PathBuf::from("/usr/local/bin"));
        assert_eq!(settings.protoc_home, PathBuf::from("/usr/local"));
        assert_eq!(settings.protoc_path(), PathBuf::from("/usr/local/bin/protoc"));
        assert_eq!(settings.protoc_version, "26.1");
        assert_eq!(settings.strip_token, ",omitempty");
        assert_eq!(settings.plugins, vec!["go", "go-grpc"]);
        assert_eq!(settings.tools, default_tools());
    }

    #[test]
    fn test_default_tools_order() {
        let names: Vec<_> = default_tools().into_iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["protoc-gen-go", "protoc-gen-go-grpc"]);
    }

    #[test]
    fn test_overrides_beat_config_file() {
        let file = ConfigFile {
            proto_root: Some(PathBuf::from("from-file")),
            install_dir: Some(PathBuf::from("/opt/file/bin")),
            ..ConfigFile::default()
        };
        let overrides = Overrides {
            proto_root: Some(PathBuf::from("from-cli")),
            install_dir: None,
        };

        let settings = Settings::resolve(linux_host(), Some(file), overrides).unwrap();
        assert_eq!(settings.proto_root, PathBuf::from("from-cli"));
        assert_eq!(settings.install_dir, PathBuf::from("/opt/file/bin"));
        assert_eq!(settings.protoc_home, PathBuf::from("/opt/file"));
    }

    #[test]
    fn test_explicit_protoc_home() {
        let file = ConfigFile {
            protoc_home: Some(PathBuf::from("/opt/protoc")),
            ..ConfigFile::default()
        };
        let settings = Settings::resolve(linux_host(), Some(file), Overrides::default()).unwrap();
        assert_eq!(settings.protoc_path(), PathBuf::from("/opt/protoc/bin/protoc"));
    }

    #[test]
    fn test_protoc_home_for_relative_install_dir() {
        let overrides = Overrides {
            proto_root: None,
            install_dir: Some(PathBuf::from("bin")),
        };
        let settings = Settings::resolve(linux_host(), None, overrides).unwrap();
        assert_eq!(settings.protoc_home, PathBuf::from("."));
        assert_eq!(settings.protoc_path(), PathBuf::from("./bin/protoc"));
    }

    #[test]
    fn test_protoc_home_stays_inside_non_bin_install_dir() {
        for dir in ["./tools", "/opt/tools", "/home/me/.local/mytools"] {
            let overrides = Overrides {
                proto_root: None,
                install_dir: Some(PathBuf::from(dir)),
            };
            let settings = Settings::resolve(linux_host(), None, overrides).unwrap();
            assert_eq!(settings.protoc_home, PathBuf::from(dir));
            assert_eq!(
                settings.protoc_path(),
                PathBuf::from(dir).join("bin").join("protoc")
            );
        }
    }

    #[test]
    fn test_windows_protoc_path() {
        let host = HostInfo {
            os: HostOs::Windows,
            arch: "x86_64".to_string(),
            home: Some(PathBuf::from("C:\\Users\\dev")),
        };
        let settings = Settings::resolve(host, None, Overrides::default()).unwrap();
        assert!(settings.protoc_path().ends_with("protoc.exe"));
        assert!(settings.install_dir.ends_with("bin"));
    }

    #[test]
    fn test_empty_plugins_rejected() {
        let file = ConfigFile {
            plugins: Some(vec![]),
            ..ConfigFile::default()
        };
        let result = Settings::resolve(linux_host(), Some(file), Overrides::default());
        assert!(matches!(result, Err(ProtogenError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_empty_strip_token_rejected() {
        let file = ConfigFile {
            strip_token: Some(String::new()),
            ..ConfigFile::default()
        };
        let result = Settings::resolve(linux_host(), Some(file), Overrides::default());
        assert!(matches!(result, Err(ProtogenError::ConfigInvalid { .. })));
    }

    #[test]
    fn test_empty_tool_list_allowed() {
        let file = ConfigFile {
            tools: Some(vec![]),
            ..ConfigFile::default()
        };
        let settings = Settings::resolve(linux_host(), Some(file), Overrides::default()).unwrap();
        assert!(settings.tools.is_empty());
    }

    #[test]
    fn test_tool_without_source_rejected() {
        let file = ConfigFile {
            tools: Some(vec![ToolSpec::new("protoc-gen-go", " ")]),
            ..ConfigFile::default()
        };
        let result = Settings::resolve(linux_host(), Some(file), Overrides::default());
        assert!(matches!(result, Err(ProtogenError::ConfigInvalid { .. })));
    }
}
