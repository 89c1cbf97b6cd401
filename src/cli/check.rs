//! Check command implementation.
//!
//! Validation runs during config loading; reaching this command means the
//! config parsed and validated cleanly, so it prints a summary of what a
//! production build would get.

use anyhow::Result;

use crate::config::SiteConfig;
use crate::log;

/// Execute check command
pub fn run_check(config: &SiteConfig) -> Result<()> {
    let file_name = config
        .config_path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_else(|| config.config_path.to_string_lossy());

    log!("check"; "{} ok", file_name);
    log!("check"; "project root: {}", config.get_root().display());
    log!("check"; "adapter: {} (fallback: {}, precompress: {}, strict: {})",
        config.adapter.kind,
        config.adapter.fallback.as_deref().unwrap_or("none"),
        config.adapter.precompress,
        config.adapter.strict);

    let base = config.production_base();
    let shown = if base.is_root() { "/" } else { base.as_str() };
    log!("check"; "production base path: {}", shown);
    log!("check"; "output directory: {}", config.paths.output.display());

    Ok(())
}
