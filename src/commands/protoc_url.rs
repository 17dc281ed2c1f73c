//! protoc-url command implementation

use super::helpers::{GlobalOptions, load_settings};
use crate::cli::ProtocUrlArgs;
use crate::error::Result;
use crate::host::HostOs;
use crate::toolchain::ArchiveDescriptor;

/// Run protoc-url command
pub fn run(options: &GlobalOptions, args: &ProtocUrlArgs) -> Result<()> {
    let settings = load_settings(options)?;
    println!("{}", url(&settings, args));
    Ok(())
}

fn url(settings: &crate::config::Settings, args: &ProtocUrlArgs) -> String {
    let os = args
        .os
        .as_deref()
        .map_or_else(|| settings.host.os.clone(), HostOs::from_name);
    let arch = args
        .arch
        .clone()
        .unwrap_or_else(|| settings.host.arch.clone());

    ArchiveDescriptor::new(settings.protoc_version.as_str(), os, arch).url(&settings.protoc_base_url)
}
