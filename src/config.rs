//! # Start-up Configuration
//!
//! [`Settings`] gathers every value the dispatcher treats as fixed for the
//! lifetime of a process: the remote repository, the default directory name,
//! the `git` program, and the location of the version metadata.
//!
//! Values come from [`crate::defaults`] and can be overridden by environment
//! variables. Empty variables are ignored.
//!
//! | Variable               | Overrides        |
//! |------------------------|------------------|
//! | `ASTRAMIG_REPO_URL`    | remote URL       |
//! | `ASTRAMIG_DEFAULT_DIR` | default dir name |
//! | `ASTRAMIG_GIT`         | git program      |
//! | `ASTRAMIG_METADATA`    | metadata path    |

use std::env;
use std::path::PathBuf;

use crate::defaults;

pub const REPO_URL_ENV: &str = "ASTRAMIG_REPO_URL";
pub const DEFAULT_DIR_ENV: &str = "ASTRAMIG_DEFAULT_DIR";
pub const GIT_ENV: &str = "ASTRAMIG_GIT";
pub const METADATA_ENV: &str = "ASTRAMIG_METADATA";

/// Values the CLI needs to run, fixed at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Remote repository handed to `git clone`.
    pub repo_url: String,
    /// Directory name used when `init` gets no usable argument.
    pub default_dir: String,
    /// The version-control binary to invoke.
    pub git_program: String,
    /// Path of the JSON file holding the `version` field.
    pub metadata_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            repo_url: defaults::REPO_URL.to_string(),
            default_dir: defaults::DEFAULT_DIR.to_string(),
            git_program: defaults::GIT_PROGRAM.to_string(),
            metadata_path: defaults::default_metadata_path(),
        }
    }
}

impl Settings {
    /// Build settings from the defaults, applying any environment overrides.
    pub fn from_env() -> Self {
        Self::default().with_overrides(|key| env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup, so callers (and tests) are not
    /// tied to the process environment.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = lookup(REPO_URL_ENV) {
            self.repo_url = url;
        }
        if let Some(dir) = lookup(DEFAULT_DIR_ENV) {
            self.default_dir = dir.trim().to_string();
        }
        if let Some(git) = lookup(GIT_ENV) {
            self.git_program = git;
        }
        if let Some(path) = lookup(METADATA_ENV) {
            self.metadata_path = PathBuf::from(path);
        }

        log::debug!("Resolved settings: {:?}", self);
        self
    }
}
