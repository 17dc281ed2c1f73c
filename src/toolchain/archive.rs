//! Zip archive extraction
//!
//! Entries are written below the destination directory with their stored
//! Unix permission bits. Entries whose names would escape the destination
//! are rejected before anything is written for them.

use std::fs::{self, File};
use std::io::{self, Read, Seek};
use std::path::Path;

use zip::ZipArchive;

use crate::error::{ProtogenError, Result};

/// Extract every entry of the zip archive at `archive_path` into `dest`.
///
/// Returns the number of entries extracted. The first failing entry aborts
/// extraction; entries written before it stay on disk.
pub fn extract_zip_file(archive_path: &Path, dest: &Path) -> Result<usize> {
    let file = File::open(archive_path).map_err(|e| ProtogenError::ArchiveInvalid {
        path: archive_path.display().to_string(),
        reason: e.to_string(),
    })?;
    extract_zip(file, &archive_path.display().to_string(), dest)
}

/// Extract a zip archive from any seekable reader; `label` names it in errors
pub fn extract_zip<R: Read + Seek>(reader: R, label: &str, dest: &Path) -> Result<usize> {
    let mut archive = ZipArchive::new(reader).map_err(|e| ProtogenError::ArchiveInvalid {
        path: label.to_string(),
        reason: e.to_string(),
    })?;

    fs::create_dir_all(dest).map_err(|e| extract_failed(dest, &e))?;

    for index in 0..archive.len() {
        let mut entry = archive
            .by_index(index)
            .map_err(|e| ProtogenError::ArchiveInvalid {
                path: label.to_string(),
                reason: e.to_string(),
            })?;

        let relative = entry
            .enclosed_name()
            .ok_or_else(|| ProtogenError::ArchiveEntryUnsafe {
                entry: entry.name().to_string(),
            })?;
        let out_path = dest.join(relative);

        if entry.is_dir() {
            fs::create_dir_all(&out_path).map_err(|e| extract_failed(&out_path, &e))?;
            continue;
        }

        if let Some(parent) = out_path.parent() {
            fs::create_dir_all(parent).map_err(|e| extract_failed(parent, &e))?;
        }

        let mut out_file = File::create(&out_path).map_err(|e| extract_failed(&out_path, &e))?;
        io::copy(&mut entry, &mut out_file).map_err(|e| extract_failed(&out_path, &e))?;
        drop(out_file);

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Some(mode) = entry.unix_mode() {
                fs::set_permissions(&out_path, fs::Permissions::from_mode(mode & 0o7777))
                    .map_err(|e| extract_failed(&out_path, &e))?;
            }
        }

        tracing::debug!(path = %out_path.display(), "extracted");
    }

    Ok(archive.len())
}

fn extract_failed(path: &Path, err: &dyn std::fmt::Display) -> ProtogenError {
    ProtogenError::ArchiveExtractFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
