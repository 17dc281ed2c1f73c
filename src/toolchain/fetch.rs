//! Download and unpack protoc release archives
//!
//! This module handles:
//! - Resolving the release archive URL for a host
//! - Streaming the archive into a temporary file
//! - Extracting it into the protoc home directory
//!
//! The temporary archive is removed on every exit path.

use std::io::{Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use super::archive;
use super::descriptor::ArchiveDescriptor;
use crate::error::{ProtogenError, Result};
use crate::host::HostInfo;
use crate::progress::DownloadProgress;
use crate::temp;

/// Source of archive bytes
pub trait ArchiveSource {
    /// Write the resource at `url` into `sink`, returning the number of bytes written
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64>;
}

/// Fetches archives over HTTP(S) with a blocking client
pub struct HttpArchiveSource {
    client: reqwest::blocking::Client,
}

impl HttpArchiveSource {
    pub fn new() -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("protogen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProtogenError::HttpClientFailed {
                reason: e.to_string(),
            })?;
        Ok(Self { client })
    }
}

impl ArchiveSource for HttpArchiveSource {
    fn fetch(&self, url: &str, sink: &mut dyn Write) -> Result<u64> {
        tracing::debug!(url, "fetching");

        let mut response =
            self.client
                .get(url)
                .send()
                .map_err(|e| ProtogenError::DownloadFailed {
                    url: url.to_string(),
                    reason: e.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProtogenError::DownloadStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let file_name = url.rsplit('/').next().unwrap_or(url);
        let progress = DownloadProgress::new(file_name, response.content_length());
        let mut tracked = progress.wrap_write(sink);

        match response.copy_to(&mut tracked) {
            Ok(bytes) => {
                progress.finish();
                Ok(bytes)
            }
            Err(e) => {
                progress.abandon();
                Err(ProtogenError::DownloadFailed {
                    url: url.to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }
}

/// Downloads the protoc release for a host and extracts it
pub struct ProtocArchiveFetcher<'a> {
    source: &'a dyn ArchiveSource,
    base_url: String,
    version: String,
}

impl<'a> ProtocArchiveFetcher<'a> {
    pub fn new(
        source: &'a dyn ArchiveSource,
        base_url: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            source,
            base_url: base_url.into(),
            version: version.into(),
        }
    }

    /// Archive URL for `host`
    pub fn url_for(&self, host: &HostInfo) -> String {
        ArchiveDescriptor::for_host(&self.version, host).url(&self.base_url)
    }

    /// Download the archive for `host` and extract it into `dest`.
    ///
    /// Returns the path of the extracted protoc binary.
    pub fn fetch_and_extract(&self, host: &HostInfo, dest: &Path) -> Result<PathBuf> {
        let url = self.url_for(host);
        println!("URL: {url}");

        let mut tmp = temp::archive_temp_file()?;
        let bytes = self.source.fetch(&url, tmp.as_file_mut())?;
        tracing::debug!(url = %url, bytes, path = %tmp.path().display(), "archive downloaded");

        let file = tmp.as_file_mut();
        file.flush()?;
        file.seek(SeekFrom::Start(0))?;

        let entries = archive::extract_zip(&*file, &url, dest)?;
        tracing::debug!(entries, dest = %dest.display(), "archive extracted");

        Ok(host.executable_path(&dest.join("bin"), "protoc"))
    }
}
