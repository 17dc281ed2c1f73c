//! Local protobuf toolchain management
//!
//! This module handles:
//! - Installing the Go code-generator plugins ([`installer`])
//! - Naming protoc release archives per platform ([`descriptor`])
//! - Downloading protoc ([`fetch`]) and unpacking it ([`archive`])

pub mod archive;
pub mod descriptor;
pub mod fetch;
pub mod installer;

pub use descriptor::{ArchiveDescriptor, protoc_arch};
pub use fetch::{ArchiveSource, HttpArchiveSource, ProtocArchiveFetcher};
pub use installer::{InstallReport, ToolInstaller};
