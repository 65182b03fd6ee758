//! # Command Dispatch
//!
//! Turns an invocation (first two command-line arguments) into an [`Action`],
//! runs it, and describes the result as an [`Outcome`]: what to print on each
//! stream and the exit code. Process termination is left to the binary, so
//! everything here can be tested in-process.
//!
//! ## Dispatch table
//!
//! The first matching rule wins:
//!
//! | First argument                 | Action    | Exit code                |
//! |--------------------------------|-----------|--------------------------|
//! | *(none or empty)*, `help`, `--help`, `-h` | `Help`    | 0             |
//! | `--version`, `-v`              | `Version` | 0                        |
//! | `init`                         | `Init`    | 0, 1, or git's own code  |
//! | anything else                  | `Unknown` | 1                        |
//!
//! Arguments after the second are ignored.

use std::path::Path;

use crate::config::Settings;
use crate::error::Error;
use crate::git::GitOperations;
use crate::{init, metadata};

/// Usage text printed for `help` and after an unknown command.
pub const USAGE: &str = "
astramig - AstraMig CLI

Usage:
  astramig init [dir]
  astramig --version
  astramig help

Commands:
  init [dir]    Clone the project into ./AstraMig (default) or ./<dir>
";

/// The single action selected for a process invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Help,
    Version,
    Init { dir: Option<String> },
    /// `init` was given a directory argument that is not valid UTF-8.
    UnreadableDir(String),
    Unknown(String),
}

impl Action {
    /// Classify the first two arguments according to the dispatch table.
    ///
    /// Matching is case-sensitive. An empty first argument counts as no
    /// argument.
    pub fn from_args(command: Option<&str>, argument: Option<&str>) -> Self {
        match command {
            None | Some("" | "help" | "--help" | "-h") => Action::Help,
            Some("--version" | "-v") => Action::Version,
            Some("init") => Action::Init {
                dir: argument.map(str::to_string),
            },
            Some(other) => Action::Unknown(other.to_string()),
        }
    }
}

/// What the process should print and how it should exit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Outcome {
    /// Text for standard output, written after `stderr`.
    pub stdout: Option<String>,
    /// Text for standard error.
    pub stderr: Option<String>,
    pub exit_code: i32,
}

impl Outcome {
    pub fn success() -> Self {
        Self::default()
    }

    pub fn print(text: impl Into<String>) -> Self {
        Self {
            stdout: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn from_error(error: &Error) -> Self {
        Self {
            stdout: None,
            stderr: Some(error.to_string()),
            exit_code: error.exit_code(),
        }
    }
}

/// Run `action` and report what happened.
///
/// `cwd` is the base for resolving the `init` destination. The clone itself
/// runs in the process working directory, so the two should agree.
pub fn dispatch(
    action: &Action,
    settings: &Settings,
    git: &dyn GitOperations,
    cwd: &Path,
) -> Outcome {
    log::debug!("Dispatching {:?}", action);

    match action {
        Action::Help => Outcome::print(USAGE),
        Action::Version => match metadata::read_version(&settings.metadata_path) {
            Ok(version) => Outcome::print(version),
            Err(e) => Outcome {
                stderr: Some(format!("Error: {}", e)),
                ..Outcome::from_error(&e)
            },
        },
        Action::Init { dir } => match init::run(settings, git, cwd, dir.as_deref()) {
            Ok(_) => Outcome::success(),
            // git already reported its own diagnostics on the inherited stderr
            Err(e @ Error::CloneFailed { .. }) => Outcome {
                stderr: None,
                ..Outcome::from_error(&e)
            },
            Err(e) => Outcome::from_error(&e),
        },
        Action::UnreadableDir(lossy) => Outcome {
            stdout: Some(USAGE.to_string()),
            stderr: Some(format!("Invalid directory argument for init: {}", lossy)),
            exit_code: 1,
        },
        Action::Unknown(token) => Outcome {
            stdout: Some(USAGE.to_string()),
            stderr: Some(format!("Unknown command: {}", token)),
            exit_code: 1,
        },
    }
}
