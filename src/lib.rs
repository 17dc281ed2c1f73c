//! protogen - protobuf toolchain bootstrapper and code generator
//!
//! Installs the Go protoc plugins and protoc itself, compiles every
//! `<name>/<name>.proto` package under a protocol root, and strips
//! `,omitempty` from the generated sources. Also carries the user-service
//! types the generated code is used with.

pub mod cli;
pub mod codegen;
pub mod commands;
pub mod config;
pub mod error;
pub mod host;
pub mod process;
pub mod progress;
pub mod temp;
pub mod toolchain;
pub mod user;

pub use error::{ProtogenError, Result};
