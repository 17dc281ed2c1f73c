//! Host description and the paths derived from it
//!
//! Everything here is a pure function of a [`HostInfo`] value so that
//! Windows and Unix layouts can be tested from any machine.

use std::path::{Path, PathBuf};

/// Default install directory on Unix-like hosts
const UNIX_INSTALL_DIR: &str = "/usr/local/bin";

/// Operating system family of the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostOs {
    Linux,
    MacOs,
    Windows,
    Other(String),
}

impl HostOs {
    /// Parse an OS name as reported by `std::env::consts::OS` (Go-style names are accepted too)
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "linux" => HostOs::Linux,
            "macos" | "darwin" | "osx" => HostOs::MacOs,
            "windows" | "win" => HostOs::Windows,
            other => HostOs::Other(other.to_string()),
        }
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, HostOs::Windows)
    }
}

/// Description of the machine protogen runs on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostInfo {
    pub os: HostOs,
    /// CPU architecture name, e.g. `x86_64` or `aarch64`
    pub arch: String,
    /// User profile directory, used for the Windows install layout
    pub home: Option<PathBuf>,
}

impl HostInfo {
    /// Describe the running machine
    pub fn detect() -> Self {
        Self {
            os: HostOs::from_name(std::env::consts::OS),
            arch: std::env::consts::ARCH.to_string(),
            home: dirs::home_dir(),
        }
    }

    /// Directory where tool binaries are installed by default.
    ///
    /// `<home>/go/bin` on Windows, `/usr/local/bin` elsewhere. A Windows host
    /// without a known profile directory falls back to a relative `go/bin`.
    pub fn default_install_dir(&self) -> PathBuf {
        if self.os.is_windows() {
            self.home
                .clone()
                .unwrap_or_default()
                .join("go")
                .join("bin")
        } else {
            PathBuf::from(UNIX_INSTALL_DIR)
        }
    }

    /// File name of an executable on this host (`.exe` appended on Windows)
    pub fn executable_name(&self, name: &str) -> String {
        if self.os.is_windows() && !name.ends_with(".exe") {
            format!("{name}.exe")
        } else {
            name.to_string()
        }
    }

    /// Full path of an executable inside `dir`
    pub fn executable_path(&self, dir: &Path, name: &str) -> PathBuf {
        dir.join(self.executable_name(name))
    }

    /// Separator used between entries of the `PATH` variable
    pub fn path_separator(&self) -> &'static str {
        if self.os.is_windows() { ";" } else { ":" }
    }
}

/// True if `path` is a regular file that can be executed.
///
/// On Unix at least one execute bit must be set; elsewhere existence is enough.
pub fn is_executable(path: &Path) -> bool {
    let Ok(metadata) = std::fs::metadata(path) else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn host(os: &str, home: Option<&str>) -> HostInfo {
        HostInfo {
            os: HostOs::from_name(os),
            arch: "x86_64".to_string(),
            home: home.map(PathBuf::from),
        }
    }

    #[test]
    fn test_host_os_from_name() {
        assert_eq!(HostOs::from_name("linux"), HostOs::Linux);
        assert_eq!(HostOs::from_name("darwin"), HostOs::MacOs);
        assert_eq!(HostOs::from_name("macos"), HostOs::MacOs);
        assert_eq!(HostOs::from_name("Windows"), HostOs::Windows);
        assert_eq!(
            HostOs::from_name("freebsd"),
            HostOs::Other("freebsd".to_string())
        );
    }

    #[test]
    fn test_default_install_dir_unix() {
        let linux = host("linux", Some("/home/dev"));
        assert_eq!(linux.default_install_dir(), PathBuf::from("/usr/local/bin"));

        let mac = host("macos", None);
        assert_eq!(mac.default_install_dir(), PathBuf::from("/usr/local/bin"));
    }

    #[test]
    fn test_default_install_dir_windows() {
        let win = host("windows", Some("C:\\Users\\dev"));
        assert_eq!(
            win.default_install_dir(),
            PathBuf::from("C:\\Users\\dev").join("go").join("bin")
        );
    }

    #[test]
    fn test_default_install_dir_windows_without_home() {
        let win = host("windows", None);
        assert_eq!(win.default_install_dir(), PathBuf::from("go").join("bin"));
    }

    #[test]
    fn test_executable_name() {
        assert_eq!(host("linux", None).executable_name("protoc"), "protoc");
        assert_eq!(host("windows", None).executable_name("protoc"), "protoc.exe");
        assert_eq!(
            host("windows", None).executable_name("protoc.exe"),
            "protoc.exe"
        );
    }

    #[test]
    fn test_is_executable_missing_file() {
        let temp = TempDir::new().unwrap();
        assert!(!is_executable(&temp.path().join("nope")));
    }

    #[test]
    fn test_is_executable_directory() {
        let temp = TempDir::new().unwrap();
        assert!(!is_executable(temp.path()));
    }

    #[cfg(unix)]
    #[test]
    fn test_is_executable_requires_exec_bit() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let tool = temp.path().join("protoc-gen-go");
        std::fs::write(&tool, "#!/bin/sh\n").unwrap();
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o644)).unwrap();
        assert!(!is_executable(&tool));

        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();
        assert!(is_executable(&tool));
    }
}
