//! `[paths]` section configuration.
//!
//! Base path and output directory for the build.
//!
//! # Example
//!
//! ```toml
//! [paths]
//! base = "/wxweguc54333.github.io"   # URL prefix for production (empty = site root)
//! output = "build"                   # Output directory (relative to project root)
//! ```
//!
//! `base` only applies to production builds; development always serves from
//! the site root.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Default production base path (GitHub Pages deployment prefix).
pub const DEFAULT_BASE: &str = "/wxweguc54333.github.io";

/// Build path settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// URL path prefix for production deployment.
    /// Overridden by the path component of `[site] url` when that is set.
    pub base: String,

    /// Build output directory.
    pub output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE.to_string(),
            output: PathBuf::from("build"),
        }
    }
}

impl PathsConfig {
    /// Validate path settings.
    ///
    /// # Checks
    /// - `base` is empty, or starts with `/` and contains no whitespace
    /// - `output` is a non-empty relative path
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.base == "/" {
            diag.error_with_hint(
                FieldPath::new("paths.base"),
                "a bare '/' is not a valid prefix",
                "use an empty string for a root deployment",
            );
        } else if !self.base.is_empty() {
            if !self.base.starts_with('/') {
                diag.error_with_hint(
                    FieldPath::new("paths.base"),
                    format!("must start with '/': {}", self.base),
                    format!("try \"/{}\"", self.base),
                );
            }
            if self.base.chars().any(char::is_whitespace) {
                diag.error(
                    FieldPath::new("paths.base"),
                    format!("must not contain whitespace: {:?}", self.base),
                );
            }
        }

        if self.output.as_os_str().is_empty() {
            diag.error(FieldPath::new("paths.output"), "must not be empty");
        } else if self.output.is_absolute() {
            diag.error(
                FieldPath::new("paths.output"),
                format!(
                    "must be relative to the project root: {}",
                    self.output.display()
                ),
            );
        }
    }
}
