//! Error types and handling for protogen
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for protogen operations
#[derive(Error, Diagnostic, Debug)]
pub enum ProtogenError {
    // Tool errors
    #[error("Failed to install {tool}: {reason}")]
    #[diagnostic(
        code(protogen::tool::install_failed),
        help("Check that the Go toolchain is on PATH and the install directory is writable")
    )]
    ToolInstallFailed { tool: String, reason: String },

    // Network errors
    #[error("Failed to download {url}: {reason}")]
    #[diagnostic(
        code(protogen::network::download_failed),
        help("Check your network connection and proxy settings")
    )]
    DownloadFailed { url: String, reason: String },

    #[error("Download of {url} returned HTTP {status}")]
    #[diagnostic(
        code(protogen::network::bad_status),
        help("Check that protoc_version names a published protoc release for this platform")
    )]
    DownloadStatus { url: String, status: u16 },

    #[error("Failed to set up HTTP client: {reason}")]
    #[diagnostic(code(protogen::network::client_failed))]
    HttpClientFailed { reason: String },

    // Archive errors
    #[error("Invalid archive {path}: {reason}")]
    #[diagnostic(code(protogen::archive::invalid))]
    ArchiveInvalid { path: String, reason: String },

    #[error("Archive entry escapes the destination directory: {entry}")]
    #[diagnostic(code(protogen::archive::unsafe_entry))]
    ArchiveEntryUnsafe { entry: String },

    #[error("Failed to extract {path}: {reason}")]
    #[diagnostic(code(protogen::archive::extract_failed))]
    ArchiveExtractFailed { path: String, reason: String },

    // Compile errors
    #[error("Failed to read protocol root {path}: {reason}")]
    #[diagnostic(
        code(protogen::compile::root_unreadable),
        help("Run protogen from the project root or pass --proto-root")
    )]
    ProtoRootUnreadable { path: String, reason: String },

    #[error("Protocol package '{package}' has no proto file (expected {path})")]
    #[diagnostic(
        code(protogen::compile::proto_missing),
        help("Each directory under the protocol root must contain <name>/<name>.proto")
    )]
    ProtoFileMissing { package: String, path: String },

    #[error("Failed to list generated files in {path}: {reason}")]
    #[diagnostic(code(protogen::compile::output_unreadable))]
    OutputDirUnreadable { path: String, reason: String },

    #[error("Failed to compile {proto}: {reason}")]
    #[diagnostic(code(protogen::compile::failed))]
    CompileFailed { proto: String, reason: String },

    // Patch errors
    #[error("Failed to patch {path}: {reason}")]
    #[diagnostic(code(protogen::patch::failed))]
    PatchFailed { path: String, reason: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(protogen::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(protogen::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(protogen::config::invalid))]
    ConfigInvalid { message: String },

    // User store errors
    #[error("User '{user_id}' not found")]
    #[diagnostic(code(protogen::user::not_found))]
    UserNotFound { user_id: String },

    #[error("User '{user_id}' already exists")]
    #[diagnostic(code(protogen::user::already_exists))]
    UserAlreadyExists { user_id: String },

    // File system errors
    #[error("IO error: {message}")]
    #[diagnostic(code(protogen::fs::io_error))]
    IoError { message: String },
}

impl From<std::io::Error> for ProtogenError {
    fn from(err: std::io::Error) -> Self {
        ProtogenError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for ProtogenError {
    fn from(err: serde_yaml::Error) -> Self {
        ProtogenError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ProtogenError>;

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_error_contains {
        ($test_name:ident, $err:expr, $($contains:expr),+ $(,)?) => {
            #[test]
            fn $test_name() {
                let err = $err;
                let error_string = err.to_string();
                $(
                    assert!(error_string.contains($contains),
                        "Error message should contain '{}', got: {}",
                        $contains,
                        error_string
                    );
                )+
            }
        };
    }

    #[test]
    fn test_error_display() {
        let err = ProtogenError::ToolInstallFailed {
            tool: "protoc-gen-go".to_string(),
            reason: "exit status: 1".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to install protoc-gen-go: exit status: 1"
        );
    }

    #[test]
    fn test_error_code() {
        let err = ProtogenError::ProtoFileMissing {
            package: "broken".to_string(),
            path: "pkg/protocol/broken/broken.proto".to_string(),
        };
        assert_eq!(
            err.code().map(|c| c.to_string()),
            Some("protogen::compile::proto_missing".to_string())
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ProtogenError = io_err.into();
        assert!(matches!(err, ProtogenError::IoError { .. }));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let parse_result: std::result::Result<serde_yaml::Value, _> =
            serde_yaml::from_str("invalid: yaml: content: [unclosed");
        let err: ProtogenError = parse_result.unwrap_err().into();
        assert!(matches!(err, ProtogenError::ConfigParseFailed { .. }));
    }

    test_error_contains!(
        test_download_status_error,
        ProtogenError::DownloadStatus {
            url: "https://example.invalid/protoc.zip".to_string(),
            status: 404,
        },
        "https://example.invalid/protoc.zip",
        "404"
    );

    test_error_contains!(
        test_proto_missing_names_package,
        ProtogenError::ProtoFileMissing {
            package: "broken".to_string(),
            path: "pkg/protocol/broken/broken.proto".to_string(),
        },
        "broken",
        "broken.proto"
    );

    test_error_contains!(
        test_http_client_error_has_no_empty_url,
        ProtogenError::HttpClientFailed {
            reason: "no TLS backend".to_string(),
        },
        "Failed to set up HTTP client: no TLS backend"
    );

    test_error_contains!(
        test_output_dir_error_names_directory,
        ProtogenError::OutputDirUnreadable {
            path: "pkg/protocol/user".to_string(),
            reason: "permission denied".to_string(),
        },
        "pkg/protocol/user",
        "permission denied"
    );

    test_error_contains!(
        test_unsafe_entry_error,
        ProtogenError::ArchiveEntryUnsafe {
            entry: "../evil".to_string(),
        },
        "../evil"
    );

    test_error_contains!(
        test_user_not_found_error,
        ProtogenError::UserNotFound {
            user_id: "u-1".to_string(),
        },
        "User 'u-1' not found"
    );
}
