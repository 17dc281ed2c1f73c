//! External command execution
//!
//! Tool installs and protoc invocations go through [`CommandRunner`] so the
//! pipeline can be exercised without spawning real processes.

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

/// A command to run: program, arguments and extra environment for the child only
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: PathBuf,
    pub args: Vec<OsString>,
    pub env: Vec<(String, OsString)>,
}

impl CommandSpec {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            env: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn env(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }

    /// Space-separated rendering for log and error messages
    pub fn display(&self) -> String {
        let mut parts = vec![self.program.display().to_string()];
        parts.extend(self.args.iter().map(|a| a.to_string_lossy().into_owned()));
        parts.join(" ")
    }
}

/// Runs commands to completion, blocking the caller.
///
/// Returns `Err` with a human-readable reason when the program cannot be
/// started or exits unsuccessfully.
pub trait CommandRunner {
    fn run(&mut self, command: &CommandSpec) -> std::result::Result<(), String>;
}

/// Runs commands as child processes inheriting stdout and stderr
#[derive(Debug, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&mut self, command: &CommandSpec) -> std::result::Result<(), String> {
        tracing::debug!(command = %command.display(), "running");

        let status = Command::new(&command.program)
            .args(&command.args)
            .envs(command.env.iter().map(|(k, v)| (k.as_str(), v.as_os_str())))
            .status()
            .map_err(|e| format!("failed to start {}: {}", command.program.display(), e))?;

        if status.success() {
            Ok(())
        } else {
            Err(format!("{} exited with {}", command.program.display(), status))
        }
    }
}

/// Records every command and replays scripted outcomes; used by tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingRunner {
    pub commands: Vec<CommandSpec>,
    /// Commands whose rendering contains one of these strings fail
    pub fail_on: Vec<String>,
    /// Invoked for each successful command, e.g. to create expected output files
    pub on_success: Option<fn(&CommandSpec)>,
}

#[cfg(test)]
impl CommandRunner for RecordingRunner {
    fn run(&mut self, command: &CommandSpec) -> std::result::Result<(), String> {
        self.commands.push(command.clone());
        let rendered = command.display();
        if let Some(pattern) = self.fail_on.iter().find(|p| rendered.contains(p.as_str())) {
            return Err(format!("scripted failure for '{pattern}'"));
        }
        if let Some(hook) = self.on_success {
            hook(command);
        }
        Ok(())
    }
}
