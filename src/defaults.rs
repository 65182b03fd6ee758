//! Default values for astramig configuration.
//!
//! This module provides centralized default values used across the CLI,
//! ensuring consistency and avoiding duplication. Every value here can be
//! overridden at start-up through [`crate::config::Settings`].

use std::path::{Path, PathBuf};

/// Remote repository cloned by `astramig init`.
pub const REPO_URL: &str = "https://github.com/ArunachalamSelvam/LibraryManagement.git";

/// Directory name used when `init` is given no (or a blank) directory.
pub const DEFAULT_DIR: &str = "AstraMig";

/// Name of the version-control binary, resolved through `PATH`.
pub const GIT_PROGRAM: &str = "git";

/// File name of the bundled version metadata.
pub const METADATA_FILE: &str = "metadata.json";

/// Version reported when the metadata carries no `version` field.
pub const FALLBACK_VERSION: &str = "0.0.0";

/// Returns the default location of the bundled metadata file.
///
/// The file lives one directory above the folder containing the running
/// executable, e.g. `/opt/astramig/metadata.json` for
/// `/opt/astramig/bin/astramig`.
///
/// Falls back to `metadata.json` in the current directory if the executable
/// path cannot be determined.
///
/// Neither `cargo run` nor `cargo install` copies the repository's
/// `metadata.json` there: the lookup lands on `target/metadata.json` and
/// `~/.cargo/metadata.json` respectively. Install the file next to the `bin`
/// directory, or point `ASTRAMIG_METADATA` at it.
pub fn default_metadata_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .as_deref()
        .and_then(metadata_path_for_exe)
        .unwrap_or_else(|| PathBuf::from(METADATA_FILE))
}

/// Computes the metadata location for a given executable path.
pub fn metadata_path_for_exe(exe: &Path) -> Option<PathBuf> {
    let install_dir = exe.parent()?.parent()?;
    Some(install_dir.join(METADATA_FILE))
}
