//! External command execution

use std::fmt;
use std::path::Path;
use std::process::Command;

use crate::error::{ForgeError, Result};

/// A program and its arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    /// Executable name or path
    pub program: String,
    /// Arguments passed to the program
    pub args: Vec<String>,
}

impl CommandLine {
    /// Create a command line from a program and arguments
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Exit status of a finished command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    code: Option<i32>,
}

impl CommandStatus {
    /// Status for a process that exited with `code`
    #[must_use]
    pub const fn from_code(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// Status for a process killed before it could exit (e.g. by a signal)
    #[must_use]
    pub const fn terminated() -> Self {
        Self { code: None }
    }

    /// Whether the process exited with code zero
    #[must_use]
    pub const fn success(self) -> bool {
        matches!(self.code, Some(0))
    }

    /// Exit code, if the process exited normally
    #[must_use]
    pub const fn code(self) -> Option<i32> {
        self.code
    }
}

impl From<std::process::ExitStatus> for CommandStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {code}"),
            None => f.write_str("no exit code (terminated by signal)"),
        }
    }
}

/// Runs external commands to completion
///
/// The only seam between provisioning and the operating system. Implementations
/// block until the command exits.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner {
    /// Run `command` inside `working_dir` and wait for it to exit
    ///
    /// # Errors
    ///
    /// Returns [`ForgeError::Spawn`] if the command cannot be started. A
    /// non-zero exit is not an error here; it is reported in the status.
    fn run(&self, command: &CommandLine, working_dir: &Path) -> Result<CommandStatus>;
}

/// [`CommandRunner`] backed by `std::process::Command`
///
/// The child inherits stdin, stdout and stderr, so package manager output goes
/// straight to the operator's terminal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl CommandRunner for SystemCommandRunner {
    fn run(&self, command: &CommandLine, working_dir: &Path) -> Result<CommandStatus> {
        tracing::debug!(%command, cwd = %working_dir.display(), "running command");

        let status = Command::new(&command.program)
            .args(&command.args)
            .current_dir(working_dir)
            .status()
            .map_err(|source| ForgeError::Spawn {
                command: command.to_string(),
                source,
            })?;

        Ok(status.into())
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, command: &CommandLine, working_dir: &Path) -> Result<CommandStatus> {
        (**self).run(command, working_dir)
    }
}
