//! Code generation from protocol definitions
//!
//! - [`compiler`] runs protoc once per protocol package
//! - [`patcher`] strips annotation tokens from the generated sources

pub mod compiler;
pub mod patcher;

pub use compiler::{CompileReport, PackageReport, ProtoCompiler};
pub use patcher::GeneratedSourcePatcher;
