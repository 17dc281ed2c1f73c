//! Common test utilities for protogen integration tests

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A scratch project directory for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Write an executable file in workspace
    #[allow(dead_code)]
    pub fn write_executable(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.write_file(path, content);
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&file_path, std::fs::Permissions::from_mode(0o755))
                .expect("Failed to make file executable");
        }
        file_path
    }

    /// Create a directory in workspace
    #[allow(dead_code)]
    pub fn create_dir(&self, path: &str) -> PathBuf {
        let dir = self.path.join(path);
        std::fs::create_dir_all(&dir).expect("Failed to create directory");
        dir
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// protogen command running inside this workspace with no inherited protogen settings
    pub fn protogen(&self) -> Command {
        let mut cmd = protogen_cmd();
        cmd.current_dir(&self.path)
            .env_remove("PROTOGEN_CONFIG")
            .env_remove("PROTOGEN_PROTO_ROOT")
            .env_remove("PROTOGEN_INSTALL_DIR")
            .env_remove("RUST_LOG");
        cmd
    }

    /// Lay out an install directory where every tool and protoc already exist.
    ///
    /// `protoc_script` becomes `<root>/local/bin/protoc`; returns the install directory.
    #[allow(dead_code)]
    pub fn install_toolchain(&self, protoc_script: &str) -> PathBuf {
        self.write_executable("local/bin/protoc-gen-go", "#!/bin/sh\nexit 0\n");
        self.write_executable("local/bin/protoc-gen-go-grpc", "#!/bin/sh\nexit 0\n");
        self.write_executable("local/bin/protoc", protoc_script);
        self.path.join("local").join("bin")
    }
}

/// Stand-in for protoc: writes `<name>.pb.go` next to the proto file given as
/// the last argument and appends the package name to `local/invocations.log`.
#[allow(dead_code)]
pub const FAKE_PROTOC: &str = r#"#!/bin/sh
for last; do :; done
dir=$(dirname "$last")
name=$(basename "$last" .proto)
echo "$name" >> "$(dirname "$0")/../invocations.log"
printf 'package %s\n\ntype Msg struct {\n\tField string `json:"field,omitempty"`\n}\n' "$name" > "$dir/$name.pb.go"
"#;

/// Stand-in for protoc that always fails
#[allow(dead_code)]
pub const FAILING_PROTOC: &str = "#!/bin/sh\necho 'user.proto:1:1: syntax error' >&2\nexit 1\n";

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn protogen_cmd() -> Command {
    Command::cargo_bin("protogen").expect("protogen binary")
}

#[allow(dead_code)]
pub fn path_str(path: &Path) -> String {
    path.display().to_string()
}
