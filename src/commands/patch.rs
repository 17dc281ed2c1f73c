//! Patch command implementation

use super::helpers::{GlobalOptions, load_settings};
use crate::cli::PatchArgs;
use crate::codegen::GeneratedSourcePatcher;
use crate::error::Result;

/// Run patch command
pub fn run(options: &GlobalOptions, args: &PatchArgs) -> Result<()> {
    let settings = load_settings(options)?;
    let patcher = GeneratedSourcePatcher::new(settings.strip_token.as_str());

    for file in &args.files {
        let removed = patcher.patch_file(file)?;
        println!(
            "{}: removed {} occurrence{} of '{}'",
            file.display(),
            removed,
            if removed == 1 { "" } else { "s" },
            patcher.token()
        );
    }
    Ok(())
}
