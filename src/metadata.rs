//! # Version Metadata
//!
//! The version printed by `astramig --version` comes from a JSON file shipped
//! next to the installation (see [`crate::defaults::default_metadata_path`]),
//! not from the compiled-in crate version. Only the `version` field is read;
//! other fields are ignored.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::defaults::FALLBACK_VERSION;
use crate::error::{Error, Result};

/// The subset of the metadata file astramig cares about.
#[derive(Debug, Deserialize)]
struct PackageMetadata {
    #[serde(default)]
    version: Option<String>,
}

/// Extract the version from raw metadata JSON.
///
/// Returns `0.0.0` when the `version` field is absent or `null`.
pub fn parse_version(raw: &str) -> Result<String> {
    let metadata: PackageMetadata = serde_json::from_str(raw)?;
    Ok(metadata
        .version
        .unwrap_or_else(|| FALLBACK_VERSION.to_string()))
}

/// Read the metadata file at `path` and return its version string.
///
/// Read and parse failures are reported as [`Error::Metadata`] naming the
/// offending path.
pub fn read_version(path: &Path) -> Result<String> {
    let to_metadata_error = |message: String| Error::Metadata {
        path: path.to_path_buf(),
        message,
    };

    let raw = fs::read_to_string(path).map_err(|e| to_metadata_error(e.to_string()))?;
    parse_version(&raw).map_err(|e| match e {
        Error::Json(json) => to_metadata_error(json.to_string()),
        other => other,
    })
}
