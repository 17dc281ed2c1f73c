//! Generate command implementation
//!
//! Installs missing tools once, then compiles every protocol package.

use super::compile::{compile_packages, print_summary};
use super::helpers::{GlobalOptions, load_settings};
use super::install::install_tools;
use crate::cli::GenerateArgs;
use crate::error::Result;

/// Run generate command
pub fn run(options: &GlobalOptions, args: &GenerateArgs) -> Result<()> {
    let settings = load_settings(options)?;

    if args.skip_install {
        tracing::debug!("tool installation skipped");
    } else {
        install_tools(&settings)?;
    }

    let report = compile_packages(&settings)?;
    print_summary(&report);
    Ok(())
}
