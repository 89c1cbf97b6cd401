//! Build configuration resolution.
//!
//! Turns the project configuration and the invoking process's argument
//! list into the record the external build pipeline consumes: which
//! adapter to use and which URL prefix the site is served under.

use serde::Serialize;

use crate::config::SiteConfig;
use crate::core::{Adapter, BasePath, BuildMode};

/// Path settings of a resolved build configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildPaths {
    /// URL path prefix under which the site's assets are served.
    pub base: BasePath,
}

/// Resolved build configuration, produced once per build invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuildConfig {
    /// Output adapter handle.
    pub adapter: Adapter,

    /// Path settings.
    pub paths: BuildPaths,
}

impl BuildConfig {
    /// Resolve the build configuration for the given mode.
    ///
    /// Development builds serve from the site root; the configured base
    /// path only applies to production output.
    pub fn resolve(config: &SiteConfig, mode: BuildMode) -> Self {
        let base = if mode.is_dev() {
            BasePath::root()
        } else {
            config.production_base()
        };

        Self {
            adapter: Adapter::new(),
            paths: BuildPaths { base },
        }
    }

    /// Resolve from an argument list alone, with default configuration.
    ///
    /// The mode is detected from the presence of the literal `dev` token;
    /// everything else falls back to defaults. Pure and infallible: a
    /// malformed or empty argument list simply means production.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::resolve(&SiteConfig::default(), BuildMode::detect(args))
    }
}

// ============================================================================
// tests
// ============================================================================
