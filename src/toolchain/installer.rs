//! Generator tool and protoc installation
//!
//! Tools are installed with `go install`, with `GOBIN` set on the child
//! process only. protoc is fetched from its release archive when its binary
//! is missing from the protoc home.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use console::Style;

use super::fetch::{ArchiveSource, ProtocArchiveFetcher};
use crate::config::{Settings, ToolSpec};
use crate::error::{ProtogenError, Result};
use crate::host::{self, HostInfo};
use crate::process::{CommandRunner, CommandSpec};

/// Outcome of an install pass
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InstallReport {
    /// Tools that were missing and got installed, in install order
    pub installed: Vec<String>,
    /// Tools found already present
    pub present: Vec<String>,
    /// Whether the protoc archive was downloaded
    pub protoc_fetched: bool,
    pub protoc_path: PathBuf,
}

/// Ensures generator tools and protoc exist in the install directory
pub struct ToolInstaller<'a> {
    host: &'a HostInfo,
    tools: &'a [ToolSpec],
    install_dir: &'a Path,
    protoc_home: &'a Path,
    fetcher: ProtocArchiveFetcher<'a>,
}

impl<'a> ToolInstaller<'a> {
    pub fn new(
        host: &'a HostInfo,
        tools: &'a [ToolSpec],
        install_dir: &'a Path,
        protoc_home: &'a Path,
        fetcher: ProtocArchiveFetcher<'a>,
    ) -> Self {
        Self {
            host,
            tools,
            install_dir,
            protoc_home,
            fetcher,
        }
    }

    /// Installer configured from resolved settings
    pub fn from_settings(settings: &'a Settings, source: &'a dyn ArchiveSource) -> Self {
        Self::new(
            &settings.host,
            &settings.tools,
            &settings.install_dir,
            &settings.protoc_home,
            ProtocArchiveFetcher::new(
                source,
                settings.protoc_base_url.as_str(),
                settings.protoc_version.as_str(),
            ),
        )
    }

    /// Path a tool's executable has in the install directory
    pub fn tool_path(&self, name: &str) -> PathBuf {
        self.host.executable_path(self.install_dir, name)
    }

    /// Path of the protoc binary inside the protoc home
    pub fn protoc_path(&self) -> PathBuf {
        self.host
            .executable_path(&self.protoc_home.join("bin"), "protoc")
    }

    /// Install every missing tool, then protoc if it is missing.
    ///
    /// The first failure aborts the pass.
    pub fn ensure_installed(&self, runner: &mut dyn CommandRunner) -> Result<InstallReport> {
        fs::create_dir_all(self.install_dir).map_err(|e| ProtogenError::IoError {
            message: format!(
                "Failed to create install directory {}: {}",
                self.install_dir.display(),
                e
            ),
        })?;

        let mut report = InstallReport::default();

        for tool in self.tools {
            let path = self.tool_path(&tool.name);
            if host::is_executable(&path) {
                println!(
                    "{} is already installed in {}.",
                    tool.name,
                    self.install_dir.display()
                );
                report.present.push(tool.name.clone());
                continue;
            }

            println!(
                "{} {} to {}...",
                Style::new().green().bold().apply_to("Installing"),
                tool.name,
                self.install_dir.display()
            );
            runner
                .run(&self.install_command(tool))
                .map_err(|reason| ProtogenError::ToolInstallFailed {
                    tool: tool.name.clone(),
                    reason,
                })?;
            report.installed.push(tool.name.clone());
        }

        let protoc = self.protoc_path();
        if host::is_executable(&protoc) {
            println!("protoc is already installed.");
        } else {
            println!(
                "{} protoc...",
                Style::new().green().bold().apply_to("Installing")
            );
            let extracted = self.fetcher.fetch_and_extract(self.host, self.protoc_home)?;
            if !extracted.is_file() {
                return Err(ProtogenError::ToolInstallFailed {
                    tool: "protoc".to_string(),
                    reason: format!("archive did not contain {}", extracted.display()),
                });
            }
            report.protoc_fetched = true;
        }
        report.protoc_path = protoc;

        Ok(report)
    }

    fn install_command(&self, tool: &ToolSpec) -> CommandSpec {
        CommandSpec::new("go")
            .arg("install")
            .arg(tool.source.as_str())
            .env("GOBIN", OsString::from(self.install_dir.as_os_str()))
    }
}
