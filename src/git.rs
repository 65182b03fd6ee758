//! # Git Process Invoker
//!
//! All interaction with the external version-control tool goes through the
//! [`GitOperations`] trait. [`SystemGit`] is the real implementation, which
//! shells out to the system `git` command. Tests substitute recording mocks so
//! the dispatcher can be exercised without spawning processes.
//!
//! Both operations are blocking: they return only after the child has exited.
//! No timeout is applied, because `clone` inherits the terminal and may wait on
//! an interactive credential prompt.

use std::process::{Command, ExitStatus, Stdio};

/// The result of running the external tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitStatus {
    /// The process ran and exited with status 0.
    Success,
    /// The process ran and exited unsuccessfully. `None` when the status is
    /// indeterminate (e.g. terminated by a signal).
    Exited(Option<i32>),
    /// The process could not be started at all.
    LaunchFailed(String),
}

impl GitStatus {
    fn from_exit_status(status: ExitStatus) -> Self {
        if status.success() {
            GitStatus::Success
        } else {
            GitStatus::Exited(status.code())
        }
    }
}

/// Trait for git operations - allows mocking in tests
pub trait GitOperations {
    /// Runs the version query (`git --version`) with all output discarded.
    fn check_available(&self) -> GitStatus;

    /// Clones `url` into `dir` (relative to the current working directory),
    /// with standard streams connected to the calling process.
    fn clone_repo(&self, url: &str, dir: &str) -> GitStatus;
}

/// The default implementation of `GitOperations`, which uses the system's
/// `git` command.
///
/// This automatically picks up whatever authentication the user has set up
/// (SSH keys, credential helpers, tokens in ~/.gitconfig), and any prompts
/// reach the user because streams are inherited.
#[derive(Debug, Clone)]
pub struct SystemGit {
    program: String,
}

impl SystemGit {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn run(&self, command: &mut Command) -> GitStatus {
        match command.status() {
            Ok(status) => {
                log::debug!("{} exited with {}", self.program, status);
                GitStatus::from_exit_status(status)
            }
            Err(e) => {
                log::debug!("failed to launch {}: {}", self.program, e);
                GitStatus::LaunchFailed(e.to_string())
            }
        }
    }
}

impl GitOperations for SystemGit {
    fn check_available(&self) -> GitStatus {
        log::debug!("Probing {} --version", self.program);
        self.run(
            Command::new(&self.program)
                .arg("--version")
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null()),
        )
    }

    fn clone_repo(&self, url: &str, dir: &str) -> GitStatus {
        log::debug!("Running {} clone {} {}", self.program, url, dir);
        self.run(
            Command::new(&self.program)
                .args(["clone", url, dir])
                .stdin(Stdio::inherit())
                .stdout(Stdio::inherit())
                .stderr(Stdio::inherit()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_available_missing_binary() {
        let git = SystemGit::new("astramig-definitely-not-a-real-git-binary");
        assert!(matches!(git.check_available(), GitStatus::LaunchFailed(_)));
    }

    #[test]
    fn test_clone_missing_binary_is_launch_failure() {
        let git = SystemGit::new("astramig-definitely-not-a-real-git-binary");
        let status = git.clone_repo("https://example.com/repo.git", "target-dir");
        assert!(matches!(status, GitStatus::LaunchFailed(_)));
    }

    #[cfg(unix)]
    #[test]
    fn test_check_available_reports_exit_code() {
        // `false` ignores its arguments and exits 1
        let git = SystemGit::new("false");
        assert_eq!(git.check_available(), GitStatus::Exited(Some(1)));
    }

    #[cfg(unix)]
    #[test]
    fn test_check_available_success() {
        // `true` ignores its arguments and exits 0
        let git = SystemGit::new("true");
        assert_eq!(git.check_available(), GitStatus::Success);
    }
}
