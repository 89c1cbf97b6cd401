//! Project configuration management for `sitebase.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/   # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── paths      # [paths]
//! │   └── adapter    # [adapter]
//! ├── types/     # Utility types (errors, field paths)
//! └── mod.rs     # SiteConfig (this file)
//! ```
//!
//! The config file is optional: `resolve` falls back to defaults when no
//! file is found, `check` requires one.

pub mod section;
pub mod types;
mod util;

use util::{extract_url_path, find_config_file};

// Re-export from section/
pub use section::{AdapterConfig, DEFAULT_BASE, PathsConfig, SiteSectionConfig};

// Re-export from types/
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands},
    core::BasePath,
    debug, log,
};
use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitebase.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Site metadata (title, url)
    #[serde(default)]
    pub site: SiteSectionConfig,

    /// Base path and output directory
    #[serde(default)]
    pub paths: PathsConfig,

    /// Output adapter settings
    #[serde(default)]
    pub adapter: AdapterConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// For non-Init commands, searches upward from cwd to find the config
    /// file. The project root is determined by the config file's parent
    /// directory. A missing file is an error for `check`, and falls back to
    /// defaults for `resolve`.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        if cli.is_check() && !exists {
            log!(
                "error";
                "Config file '{}' not found. Run 'sitebase init' to create one.",
                cli.config.display()
            );
            std::process::exit(1);
        }

        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            if !cli.is_init() {
                debug!("config"; "no config file found, using defaults");
            }
            Self::default()
        };

        config.config_path = config_path;
        config.finalize(cli);

        // Full validation (skip for init: no config file yet)
        if !cli.is_init() {
            config.validate()?;
        }

        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir()?;

        match &cli.command {
            Commands::Init { name: Some(name) } => {
                let path = cwd.join(name).join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            Commands::Init { name: None } => {
                let path = cwd.join(&cli.config);
                let exists = path.exists();
                Ok((path, exists))
            }
            _ => {
                // Search upward from cwd
                match find_config_file(&cli.config) {
                    Some(path) => Ok((path, true)),
                    None => Ok((cwd.join(&cli.config), false)),
                }
            }
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        // Resolve root path
        let root = match &cli.command {
            Commands::Init { name: Some(name) } => {
                std::env::current_dir().unwrap_or_default().join(name)
            }
            Commands::Init { name: None } => std::env::current_dir().unwrap_or_default(),
            _ => self
                .config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        };
        self.root = root;

        self.apply_command_options(cli);

        // Extract the base path from site.url
        // This ensures the override works for both:
        // - CLI: --site-url "https://example.github.io/my-project"
        // - Config: [site] url = "https://example.github.io/my-project"
        self.sync_base_from_url();
    }

    /// Apply command-specific configuration options.
    fn apply_command_options(&mut self, cli: &Cli) {
        match &cli.command {
            Commands::Resolve { args } => {
                // Override site URL if provided via CLI
                if let Some(url) = &args.site_url {
                    self.site.url = Some(url.clone());
                }
            }
            Commands::Init { .. } | Commands::Check => {}
        }
    }

    /// Derive the base path from site.url.
    ///
    /// The URL path component replaces `paths.base`, enabling subdirectory
    /// deployments (e.g. GitHub Pages project sites) to be configured with
    /// a single URL entry.
    fn sync_base_from_url(&mut self) {
        if let Some(url) = &self.site.url
            && let Some(path) = extract_url_path(url)
            && !path.is_empty()
        {
            self.paths.base = format!("/{path}");
        }
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
            if !Self::prompt_continue()? {
                bail!("Aborted due to unknown config fields");
            }
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    pub fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        // Show only the filename since the file sits at the project root
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        eprintln!();
        log!("warning"; "unknown fields in {}:", display_path);
        log!("warning"; "ignoring:");
        for field in fields {
            eprintln!("- {}", field);
        }
        eprintln!();
    }

    /// Prompt user to continue. Returns true only if user explicitly confirms.
    fn prompt_continue() -> Result<bool> {
        use std::io::{self, Write};

        eprint!("Continue? [y/N] ");
        io::stderr().flush()?;

        let mut input = String::new();
        io::stdin().read_line(&mut input)?;

        let input = input.trim().to_lowercase();
        // Default no (empty input), explicit "y" or "yes" to continue
        Ok(input == "y" || input == "yes")
    }

    /// Get the project root directory
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// The base path production builds deploy under.
    ///
    /// Development builds ignore this and serve from the root; the choice
    /// between the two happens at resolution time.
    pub fn production_base(&self) -> BasePath {
        BasePath::from_prefix(&self.paths.base)
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration.
    ///
    /// Collects all validation errors and returns them at once.
    pub fn validate(&self) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.site.validate(&mut diag);
        self.paths.validate(&mut diag);
        self.adapter.validate(&mut diag);

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_parse_config`)
// ============================================================================

/// Parse config from a TOML snippet.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SiteConfig {
    let (parsed, ignored) = SiteConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
