//! Version command implementation

use crate::config::DEFAULT_PROTOC_VERSION;
use crate::error::Result;
use crate::host::HostInfo;
use crate::toolchain::ArchiveDescriptor;

/// Print the protogen version with the host and protoc platform it targets
pub fn run() -> Result<()> {
    let host = HostInfo::detect();
    let descriptor = ArchiveDescriptor::for_host(DEFAULT_PROTOC_VERSION, &host);

    println!("protogen {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    println!(
        "  Profile: {}",
        if cfg!(debug_assertions) {
            "debug"
        } else {
            "release"
        }
    );
    println!();
    println!("Host:");
    println!("  Platform: {}/{}", std::env::consts::OS, host.arch);
    println!(
        "  Default protoc: {} ({})",
        DEFAULT_PROTOC_VERSION,
        descriptor.file_name()
    );

    Ok(())
}
