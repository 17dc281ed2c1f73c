//! Compile command implementation

use console::Style;

use super::helpers::{GlobalOptions, load_settings};
use crate::codegen::{CompileReport, ProtoCompiler};
use crate::config::Settings;
use crate::error::Result;
use crate::process::SystemCommandRunner;

/// Run compile command
pub fn run(options: &GlobalOptions) -> Result<()> {
    let settings = load_settings(options)?;
    let report = compile_packages(&settings)?;
    print_summary(&report);
    Ok(())
}

/// Compile every package with the real protoc
pub fn compile_packages(settings: &Settings) -> Result<CompileReport> {
    let compiler = ProtoCompiler::from_settings(settings);
    compiler.compile_all(&mut SystemCommandRunner)
}

pub fn print_summary(report: &CompileReport) {
    if report.packages.is_empty() {
        println!("No protocol packages found.");
        return;
    }
    println!(
        "{} {} package{}, {} file{} patched",
        Style::new().green().bold().apply_to("Generated"),
        report.packages.len(),
        if report.packages.len() == 1 { "" } else { "s" },
        report.files_patched(),
        if report.files_patched() == 1 { "" } else { "s" },
    );
}
