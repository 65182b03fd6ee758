//! # Init Operation
//!
//! `astramig init [dir]` clones the configured remote into a new directory.
//!
//! ## Steps
//!
//! 1. **Resolve**: the trimmed `dir` argument, or the default directory name
//!    when it is absent or blank, joined onto the working directory.
//! 2. **Pre-flight**: refuse if anything already exists at the destination.
//!    Nothing is spawned in that case.
//! 3. **Git check**: run `git --version`; any failure means git is unavailable.
//! 4. **Clone**: run `git clone <url> <dir>` with inherited streams and
//!    propagate its exit status.
//!
//! The existence check and the clone are not atomic. A path created by
//! another process in between is left for `git clone` itself to reject.

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::git::{GitOperations, GitStatus};

/// Where `init` will clone to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Directory name handed to `git clone`, relative to the working directory.
    pub dir: String,
    /// Absolute destination, used for the pre-flight check and messages.
    pub destination: PathBuf,
}

/// Resolve the clone target from the optional CLI argument.
pub fn resolve_target(arg: Option<&str>, default_dir: &str, cwd: &Path) -> Target {
    let dir = arg
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .unwrap_or(default_dir)
        .to_string();
    let destination = cwd.join(&dir);

    Target { dir, destination }
}

/// Execute the init operation.
///
/// On success the destination has been populated by `git clone`.
pub fn run(
    settings: &Settings,
    git: &dyn GitOperations,
    cwd: &Path,
    arg: Option<&str>,
) -> Result<Target> {
    let target = resolve_target(arg, &settings.default_dir, cwd);
    log::debug!("Resolved destination {}", target.destination.display());

    if target.destination.try_exists()? {
        return Err(Error::TargetExists {
            path: target.destination,
        });
    }

    ensure_git(git)?;

    match git.clone_repo(&settings.repo_url, &target.dir) {
        GitStatus::Success => {
            log::info!("Cloned {} into {}", settings.repo_url, target.dir);
            Ok(target)
        }
        GitStatus::Exited(code) => Err(Error::CloneFailed {
            url: settings.repo_url.clone(),
            dir: target.dir,
            code,
        }),
        GitStatus::LaunchFailed(reason) => {
            log::warn!("git disappeared before clone: {}", reason);
            Err(Error::GitUnavailable)
        }
    }
}

fn ensure_git(git: &dyn GitOperations) -> Result<()> {
    match git.check_available() {
        GitStatus::Success => Ok(()),
        status => {
            log::debug!("git availability check failed: {:?}", status);
            Err(Error::GitUnavailable)
        }
    }
}
