//! Shared test utilities for E2E tests.
//!
//! ## Usage
//!
//! Add `mod common;` to your test file, then use the helpers:
//!
//! ```rust,ignore
//! mod common;
//! use common::prelude::*;
//!
//! #[test]
//! fn test_example() {
//!     let fixture = TestFixture::new().with_metadata(metadata::WITH_VERSION);
//!     fixture.command().arg("--version").assert().success();
//! }
//! ```
//!
//! Every command built by a fixture runs in an empty `work/` directory, with
//! colors disabled and all `ASTRAMIG_*` overrides cleared except the ones the
//! fixture sets itself.

use assert_fs::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Re-export commonly used test dependencies for convenience.
pub mod prelude {
    #[allow(unused_imports)]
    pub use assert_cmd::cargo::cargo_bin_cmd;
    #[allow(unused_imports)]
    pub use assert_fs::prelude::*;
    pub use predicates::prelude::*;

    #[allow(unused_imports)]
    pub use super::metadata;
    pub use super::TestFixture;
}

/// Metadata file contents for testing `--version`.
#[allow(dead_code)]
pub mod metadata {
    pub const WITH_VERSION: &str = r#"{"name": "astramig", "version": "1.2.3"}"#;

    pub const WITHOUT_VERSION: &str = r#"{"name": "astramig"}"#;

    pub const INVALID: &str = "{\"version\": ";
}

const OVERRIDES: [&str; 4] = [
    "ASTRAMIG_REPO_URL",
    "ASTRAMIG_DEFAULT_DIR",
    "ASTRAMIG_GIT",
    "ASTRAMIG_METADATA",
];

/// A temporary sandbox holding a working directory, a metadata file and,
/// optionally, a fake `git` program.
pub struct TestFixture {
    temp_dir: assert_fs::TempDir,
    git: Option<PathBuf>,
    repo_url: Option<String>,
}

#[allow(dead_code)]
impl TestFixture {
    /// Create a new fixture with an empty working directory.
    pub fn new() -> Self {
        let temp_dir = assert_fs::TempDir::new().expect("Failed to create temp directory");
        temp_dir
            .child("work")
            .create_dir_all()
            .expect("Failed to create work directory");
        Self {
            temp_dir,
            git: None,
            repo_url: None,
        }
    }

    /// Write the metadata file the binary reads for `--version`.
    pub fn with_metadata(self, content: &str) -> Self {
        self.temp_dir
            .child("metadata.json")
            .write_str(content)
            .expect("Failed to write metadata file");
        self
    }

    /// Create a directory inside the working directory.
    pub fn with_existing_dir(self, name: &str) -> Self {
        fs::create_dir_all(self.work().join(name)).expect("Failed to create directory");
        self
    }

    /// Create a file inside the working directory.
    pub fn with_existing_file(self, name: &str) -> Self {
        fs::write(self.work().join(name), "occupied").expect("Failed to write file");
        self
    }

    /// Use `program` as the git binary.
    pub fn with_git(mut self, program: impl Into<PathBuf>) -> Self {
        self.git = Some(program.into());
        self
    }

    /// Clone from `url` instead of the built-in remote.
    pub fn with_repo_url(mut self, url: impl Into<String>) -> Self {
        self.repo_url = Some(url.into());
        self
    }

    /// Install a shell script standing in for git.
    ///
    /// `--version` exits with `version_code`. Any other call records its
    /// arguments in `git-calls.log`; `clone` creates the target directory when
    /// `clone_code` is 0. The script then exits with `clone_code`.
    #[cfg(unix)]
    pub fn with_fake_git(self, version_code: i32, clone_code: i32) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let log = self.path().join("git-calls.log");
        let script = format!(
            r#"#!/bin/sh
if [ "$1" = "--version" ]; then
  exit {version_code}
fi
echo "$@" >> "{log}"
if [ "$1" = "clone" ] && [ {clone_code} -eq 0 ]; then
  mkdir -p "$3"
fi
exit {clone_code}
"#,
            version_code = version_code,
            clone_code = clone_code,
            log = log.display(),
        );

        let program = self.path().join("fake-git");
        fs::write(&program, script).expect("Failed to write fake git");
        fs::set_permissions(&program, fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake git executable");
        self.with_git(program)
    }

    /// Lines recorded by the fake git, empty if it was never asked to clone.
    pub fn git_calls(&self) -> Vec<String> {
        fs::read_to_string(self.path().join("git-calls.log"))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Root of the sandbox.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The working directory commands run in.
    pub fn work(&self) -> PathBuf {
        self.temp_dir.path().join("work")
    }

    /// Create a command configured to run in this fixture's working directory.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("astramig");
        cmd.current_dir(self.work());
        for key in OVERRIDES {
            cmd.env_remove(key);
        }
        cmd.env("NO_COLOR", "1")
            .env("ASTRAMIG_METADATA", self.path().join("metadata.json"));
        if let Some(git) = &self.git {
            cmd.env("ASTRAMIG_GIT", git);
        }
        if let Some(url) = &self.repo_url {
            cmd.env("ASTRAMIG_REPO_URL", url);
        }
        cmd
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
