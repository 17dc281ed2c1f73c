//! Install command implementation

use console::Style;

use super::helpers::{GlobalOptions, load_settings};
use crate::config::Settings;
use crate::error::Result;
use crate::process::SystemCommandRunner;
use crate::toolchain::{HttpArchiveSource, InstallReport, ToolInstaller};

/// Run install command
pub fn run(options: &GlobalOptions) -> Result<()> {
    let settings = load_settings(options)?;
    let report = install_tools(&settings)?;

    println!(
        "{} {} installed, {} already present{}",
        Style::new().green().bold().apply_to("Tools ready:"),
        report.installed.len(),
        report.present.len(),
        if report.protoc_fetched {
            ", protoc downloaded"
        } else {
            ""
        }
    );
    Ok(())
}

/// Install missing tools with the real network source and process runner
pub fn install_tools(settings: &Settings) -> Result<InstallReport> {
    let source = HttpArchiveSource::new()?;
    let installer = ToolInstaller::from_settings(settings, &source);
    installer.ensure_installed(&mut SystemCommandRunner)
}
