//! Init command implementation.
//!
//! Writes a commented default `sitebase.toml`. Refuses to overwrite an
//! existing config file.

use anyhow::{Context, Result};
use std::fs;

use crate::config::{DEFAULT_BASE, SiteConfig};
use crate::log;

/// Generate sitebase.toml content with comments
pub fn generate_config_template() -> String {
    format!(
        r#"# Sitebase configuration file (v{version})
# https://github.com/wxweguc54333/sitebase

[site]
title = ""                             # Site title (metadata only)
# url = "https://user.github.io/my-project"  # When set, the URL path becomes the base path

[paths]
base = "{base}"       # URL prefix for production builds (empty = site root)
output = "build"                       # Output directory (relative to project root)

[adapter]
kind = "static"                        # Output adapter (only `static` is implemented)
# fallback = "404.html"                # SPA fallback page written by the adapter
precompress = false                    # Emit precompressed variants next to assets
strict = true                          # Fail the build when pages are left unadapted
"#,
        version = env!("CARGO_PKG_VERSION"),
        base = DEFAULT_BASE,
    )
}

/// Create a new project config file
pub fn run_init(config: &SiteConfig, has_name: bool) -> Result<()> {
    let path = &config.config_path;

    if path.exists() {
        log!("error"; "'{}' already exists, refusing to overwrite", path.display());
        std::process::exit(1);
    }

    // `sitebase init <name>` may point into a directory that does not exist yet
    if has_name
        && let Some(parent) = path.parent()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory '{}'", parent.display()))?;
    }

    fs::write(path, generate_config_template())
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}
