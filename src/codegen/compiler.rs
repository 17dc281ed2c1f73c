//! protoc invocation over a protocol-definitions tree
//!
//! The tree is expected to look like `<root>/<name>/<name>.proto`. Each
//! package is compiled into its own directory and the generated files are
//! patched right after. Packages are processed in name order and the first
//! failure stops the run; packages already generated keep their output.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use console::Style;
use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use super::patcher::GeneratedSourcePatcher;
use crate::config::Settings;
use crate::error::{ProtogenError, Result};
use crate::process::{CommandRunner, CommandSpec};

/// Result of compiling one protocol package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageReport {
    pub name: String,
    pub patched_files: Vec<PathBuf>,
    pub tokens_removed: usize,
}

/// Result of a full compile run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CompileReport {
    pub packages: Vec<PackageReport>,
}

impl CompileReport {
    pub fn files_patched(&self) -> usize {
        self.packages.iter().map(|p| p.patched_files.len()).sum()
    }

    pub fn tokens_removed(&self) -> usize {
        self.packages.iter().map(|p| p.tokens_removed).sum()
    }
}

/// Compiles every package under a protocol root
#[derive(Debug, Clone)]
pub struct ProtoCompiler {
    protoc: PathBuf,
    proto_root: PathBuf,
    module_prefix: String,
    plugins: Vec<String>,
    generated_pattern: String,
    patcher: GeneratedSourcePatcher,
    /// `PATH` for the protoc child so it finds freshly installed plugins
    child_path: Option<OsString>,
}

impl ProtoCompiler {
    pub fn new(
        protoc: impl Into<PathBuf>,
        proto_root: impl Into<PathBuf>,
        module_prefix: impl Into<String>,
    ) -> Self {
        Self {
            protoc: protoc.into(),
            proto_root: proto_root.into(),
            module_prefix: module_prefix.into(),
            plugins: crate::config::default_plugins(),
            generated_pattern: crate::config::DEFAULT_GENERATED_SUFFIX.to_string(),
            patcher: GeneratedSourcePatcher::new(crate::config::DEFAULT_STRIP_TOKEN),
            child_path: None,
        }
    }

    /// Compiler configured from resolved settings.
    ///
    /// The installed protoc is used when present, otherwise `protoc` is looked up on `PATH`.
    pub fn from_settings(settings: &Settings) -> Self {
        let installed = settings.protoc_path();
        let protoc = if crate::host::is_executable(&installed) {
            installed
        } else {
            PathBuf::from(settings.host.executable_name("protoc"))
        };

        Self::new(protoc, &settings.proto_root, &settings.module_prefix)
            .with_plugins(settings.plugins.clone())
            .with_generated_pattern(&settings.generated_suffix)
            .with_patcher(GeneratedSourcePatcher::new(&settings.strip_token))
            .with_search_dir(&settings.install_dir)
    }

    pub fn with_plugins(mut self, plugins: Vec<String>) -> Self {
        self.plugins = plugins;
        self
    }

    pub fn with_generated_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.generated_pattern = pattern.into();
        self
    }

    pub fn with_patcher(mut self, patcher: GeneratedSourcePatcher) -> Self {
        self.patcher = patcher;
        self
    }

    /// Prepend `dir` to the `PATH` protoc runs with
    pub fn with_search_dir(mut self, dir: &Path) -> Self {
        let mut entries = vec![dir.to_path_buf()];
        if let Some(existing) = std::env::var_os("PATH") {
            entries.extend(std::env::split_paths(&existing));
        }
        self.child_path = std::env::join_paths(entries).ok();
        self
    }

    /// Names of the package directories under the protocol root, sorted
    pub fn packages(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in WalkDir::new(&self.proto_root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
        {
            let entry = entry.map_err(|e| ProtogenError::ProtoRootUnreadable {
                path: self.proto_root.display().to_string(),
                reason: e.to_string(),
            })?;
            if entry.file_type().is_dir() {
                names.push(entry.file_name().to_string_lossy().into_owned());
            }
        }
        Ok(names)
    }

    /// Compile and patch every package
    pub fn compile_all(&self, runner: &mut dyn CommandRunner) -> Result<CompileReport> {
        let glob = self.glob()?;
        let mut report = CompileReport::default();
        for name in self.packages()? {
            report
                .packages
                .push(self.compile_package_with(&name, &glob, runner)?);
        }
        Ok(report)
    }

    /// Compile and patch a single package
    pub fn compile_package(
        &self,
        name: &str,
        runner: &mut dyn CommandRunner,
    ) -> Result<PackageReport> {
        let glob = self.glob()?;
        self.compile_package_with(name, &glob, runner)
    }

    /// The protoc command for package `name`
    pub fn command_for(&self, name: &str) -> CommandSpec {
        let out_dir = self.proto_root.join(name);
        let module = format!("{}/{}", self.module_prefix.trim_end_matches('/'), name);

        let mut command = CommandSpec::new(&self.protoc);
        for plugin in &self.plugins {
            let mut out = OsString::from(format!("--{plugin}_out="));
            out.push(out_dir.as_os_str());
            command = command
                .arg(out)
                .arg(format!("--{plugin}_opt=module={module}"));
        }
        command = command.arg(self.proto_file(name).into_os_string());

        if let Some(path) = &self.child_path {
            command = command.env("PATH", path.clone());
        }
        command
    }

    fn proto_file(&self, name: &str) -> PathBuf {
        self.proto_root.join(name).join(format!("{name}.proto"))
    }

    fn glob(&self) -> Result<Glob<'_>> {
        Glob::new(&self.generated_pattern).map_err(|e| ProtogenError::ConfigInvalid {
            message: format!(
                "invalid generated file pattern '{}': {}",
                self.generated_pattern, e
            ),
        })
    }

    fn compile_package_with(
        &self,
        name: &str,
        glob: &Glob<'_>,
        runner: &mut dyn CommandRunner,
    ) -> Result<PackageReport> {
        let proto = self.proto_file(name);
        if !proto.is_file() {
            return Err(ProtogenError::ProtoFileMissing {
                package: name.to_string(),
                path: proto.display().to_string(),
            });
        }

        println!(
            "{} {}...",
            Style::new().green().bold().apply_to("Compiling"),
            proto.display()
        );
        runner
            .run(&self.command_for(name))
            .map_err(|reason| ProtogenError::CompileFailed {
                proto: proto.display().to_string(),
                reason,
            })?;

        let out_dir = self.proto_root.join(name);
        let mut report = PackageReport {
            name: name.to_string(),
            patched_files: Vec::new(),
            tokens_removed: 0,
        };
        for file in generated_files(&out_dir, glob)? {
            println!(
                "Fixing {} in {}...",
                self.patcher.token().trim_matches(','),
                file.display()
            );
            report.tokens_removed += self.patcher.patch_file(&file)?;
            report.patched_files.push(file);
        }
        Ok(report)
    }
}

/// Files directly inside `dir` whose names match `glob`, sorted
fn generated_files(dir: &Path, glob: &Glob<'_>) -> Result<Vec<PathBuf>> {
    let unreadable = |e: std::io::Error| ProtogenError::OutputDirUnreadable {
        path: dir.display().to_string(),
        reason: e.to_string(),
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(unreadable)? {
        let entry = entry.map_err(unreadable)?;
        if !entry.file_type().map_err(unreadable)?.is_file() {
            continue;
        }
        let name = entry.file_name();
        let name = name.to_string_lossy();
        if glob.matched(&CandidatePath::from(&*name)).is_some() {
            files.push(entry.path());
        }
    }
    files.sort();
    Ok(files)
}
