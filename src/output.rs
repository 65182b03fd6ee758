//! # Output Configuration
//!
//! Decides whether diagnostics written to stderr are colorized, based on
//! terminal capabilities and user preferences.
//!
//! ## Respecting User Preferences
//!
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals
//!
//! Colors never change the text itself, only its styling.

use std::env;

use console::style;

/// Output configuration for controlling colors.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Whether diagnostics should be colorized.
    pub use_color: bool,
}

impl OutputConfig {
    /// Create an output configuration from the environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var_os(key).map(|v| v.to_string_lossy().into_owned()))
            .unwrap_or_else(|| Self {
                use_color: console::Term::stderr().features().colors_supported(),
            })
    }

    /// Apply the environment rules through `lookup`.
    ///
    /// Returns `None` when no variable decides the question and terminal
    /// detection should be used instead.
    fn from_lookup<F>(lookup: F) -> Option<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // The presence of NO_COLOR (even if empty) disables colors
        if lookup("NO_COLOR").is_some() {
            return Some(Self { use_color: false });
        }

        if lookup("CLICOLOR").is_some_and(|v| v == "0") {
            return Some(Self { use_color: false });
        }

        if lookup("CLICOLOR_FORCE").is_some_and(|v| v != "0" && !v.is_empty()) {
            return Some(Self { use_color: true });
        }

        if lookup("TERM").is_some_and(|v| v == "dumb") {
            return Some(Self { use_color: false });
        }

        None
    }

    /// Create a configuration with colors always enabled.
    #[cfg(test)]
    pub fn with_color() -> Self {
        Self { use_color: true }
    }

    /// Create a configuration with colors always disabled.
    #[cfg(test)]
    pub fn without_color() -> Self {
        Self { use_color: false }
    }
}

/// Render a diagnostic for stderr, red when colors are enabled.
pub fn error_line(config: &OutputConfig, message: &str) -> String {
    if config.use_color {
        style(message).for_stderr().force_styling(true).red().to_string()
    } else {
        message.to_string()
    }
}
