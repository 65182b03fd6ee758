//! # Error Handling
//!
//! This module defines the centralized error type for `astramig`. Every
//! recoverable failure the CLI can report is a variant of [`Error`], and each
//! variant knows which process exit code it maps to.
//!
//! ## Taxonomy
//!
//! - **User input errors**: the clone destination already exists.
//! - **Environment errors**: the `git` binary is missing or broken.
//! - **External tool failures**: `git clone` exited non-zero. The exit code of
//!   the external tool is carried through unchanged.
//! - **Metadata errors**: the bundled version metadata could not be read or
//!   parsed.
//!
//! Unknown commands are not errors in this sense; they are a normal dispatch
//! outcome handled in [`crate::dispatch`].

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for astramig operations
#[derive(Error, Debug)]
pub enum Error {
    /// Something already exists at the clone destination.
    #[error("Target directory already exists: {}", path.display())]
    TargetExists { path: PathBuf },

    /// The `git --version` check did not complete successfully, or `git` could not be
    /// launched at all.
    #[error("Git is required but not found in PATH.")]
    GitUnavailable,

    /// `git clone` ran but did not exit successfully.
    ///
    /// `code` is `None` when the exit status is indeterminate, for example
    /// when the child was terminated by a signal.
    #[error("git clone of {url} into {dir} failed{}", code.map(|c| format!(" with exit code {}", c)).unwrap_or_default())]
    CloneFailed {
        url: String,
        dir: String,
        code: Option<i32>,
    },

    /// The version metadata file could not be read or parsed.
    #[error("failed to read version metadata at {}: {message}", path.display())]
    Metadata { path: PathBuf, message: String },

    /// An I/O error, wrapped from `std::io::Error`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON parsing error, wrapped from `serde_json::Error`.
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// The process exit code this error should terminate with.
    ///
    /// A failed clone propagates the external tool's own exit code. Anything
    /// else, including a clone whose status is indeterminate, exits with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::CloneFailed {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

/// A convenient type alias for `Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
