//! Post-processing of generated sources
//!
//! Removes a serialization annotation token (`,omitempty` by default) from
//! every line of a generated file. Line terminators and every line without
//! the token are kept byte for byte.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{ProtogenError, Result};

/// Strips a token from generated files
#[derive(Debug, Clone)]
pub struct GeneratedSourcePatcher {
    token: String,
}

impl GeneratedSourcePatcher {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Remove the token from `content`, returning the new bytes and the number of removals.
    ///
    /// Works on raw bytes, so files that are not valid UTF-8 are patched too.
    pub fn strip(&self, content: &[u8]) -> (Vec<u8>, usize) {
        let token = self.token.as_bytes();
        if token.is_empty() {
            return (content.to_vec(), 0);
        }

        let mut removed = 0;
        let mut out = Vec::with_capacity(content.len());
        for line in content.split_inclusive(|&b| b == b'\n') {
            removed += remove_all(line, token, &mut out);
        }
        (out, removed)
    }

    /// Patch the file at `path` in place, returning the number of tokens removed.
    ///
    /// Files without the token are left untouched. Otherwise the new content
    /// is written to a sibling temporary file that then replaces the original.
    pub fn patch_file(&self, path: &Path) -> Result<usize> {
        let content = fs::read(path).map_err(|e| patch_failed(path, &e))?;

        let (patched, removed) = self.strip(&content);
        if removed == 0 {
            tracing::debug!(path = %path.display(), "nothing to patch");
            return Ok(0);
        }

        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let permissions = fs::metadata(path)
            .map_err(|e| patch_failed(path, &e))?
            .permissions();

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| patch_failed(path, &e))?;
        tmp.write_all(&patched).map_err(|e| patch_failed(path, &e))?;
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| patch_failed(path, &e))?;
        tmp.persist(path).map_err(|e| patch_failed(path, &e.error))?;

        tracing::debug!(path = %path.display(), removed, "patched");
        Ok(removed)
    }
}

/// Append `line` to `out` without any occurrence of `token`, returning how many were dropped
fn remove_all(line: &[u8], token: &[u8], out: &mut Vec<u8>) -> usize {
    let mut count = 0;
    let mut rest = line;
    while let Some(pos) = rest.windows(token.len()).position(|w| w == token) {
        out.extend_from_slice(&rest[..pos]);
        rest = &rest[pos + token.len()..];
        count += 1;
    }
    out.extend_from_slice(rest);
    count
}

fn patch_failed(path: &Path, err: &dyn std::fmt::Display) -> ProtogenError {
    ProtogenError::PatchFailed {
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}
