//! # AstraMig CLI Library
//!
//! This library holds the logic behind the `astramig` command-line tool, which
//! bootstraps a local AstraMig checkout by cloning the project repository with
//! the system `git`.
//!
//! ## Quick Example
//!
//! ```
//! use astramig::dispatch::{Action, USAGE};
//!
//! assert_eq!(Action::from_args(None, None), Action::Help);
//! assert_eq!(
//!     Action::from_args(Some("init"), Some("myproj")),
//!     Action::Init { dir: Some("myproj".to_string()) }
//! );
//! assert!(USAGE.contains("astramig init [dir]"));
//! ```
//!
//! ## Core Concepts
//!
//! - **Dispatch (`dispatch`)**: Classifies the command line into an `Action`
//!   and turns its execution into an `Outcome` (stream output plus exit code).
//! - **Init (`init`)**: Resolves the destination, runs the pre-flight
//!   existence check, checks that git runs, and clones.
//! - **Git (`git`)**: The `GitOperations` trait and its system implementation.
//! - **Metadata (`metadata`)**: Reads the version from the bundled JSON file.
//! - **Configuration (`config`, `defaults`)**: Start-up values with
//!   environment overrides.
//!
//! ## Installation
//!
//! `astramig --version` reads `metadata.json` from the directory above the
//! one holding the executable. `cargo install` only places the binary, so
//! copy the repository's `metadata.json` alongside the install prefix:
//!
//! ```text
//! cargo install --path . --root /opt/astramig
//! cp metadata.json /opt/astramig/metadata.json
//! ```
//!
//! Alternatively set `ASTRAMIG_METADATA` to the file's path.
//!
//! The binary is a thin shell: it parses arguments, calls
//! [`dispatch::dispatch`], prints the outcome, and exits with its code.

pub mod config;
pub mod defaults;
pub mod dispatch;
pub mod error;
pub mod git;
pub mod init;
pub mod metadata;
pub mod output;
