//! Scratch files for downloads
//!
//! Temporary files are never created under the current working directory,
//! even when TMPDIR is relative (e.g. TMPDIR=tmp), so a download can't land
//! inside the protocol tree being generated.

use std::env;
use std::path::PathBuf;

use tempfile::NamedTempFile;

use crate::error::{ProtogenError, Result};

/// Returns an absolute directory suitable for temporary files
pub fn temp_dir_base() -> PathBuf {
    let t = env::temp_dir();
    if t.is_absolute() {
        t
    } else {
        #[cfg(windows)]
        {
            env::var("TEMP")
                .or_else(|_| env::var("TMP"))
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("C:\\Windows\\Temp"))
        }
        #[cfg(not(windows))]
        {
            PathBuf::from("/tmp")
        }
    }
}

/// Create a `protoc-*.zip` temporary file that is deleted when dropped
pub fn archive_temp_file() -> Result<NamedTempFile> {
    tempfile::Builder::new()
        .prefix("protoc-")
        .suffix(".zip")
        .tempfile_in(temp_dir_base())
        .map_err(|e| ProtogenError::IoError {
            message: format!("Failed to create temporary archive file: {e}"),
        })
}
