//! Command implementations for the protogen CLI

pub mod compile;
pub mod completions;
pub mod generate;
pub mod helpers;
pub mod install;
pub mod patch;
pub mod protoc_url;
pub mod version;
