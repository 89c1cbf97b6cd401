//! Resolve command implementation.
//!
//! Detects the build mode from the invocation arguments, resolves the
//! build configuration against the loaded project config, and emits it as
//! JSON for the external build pipeline.

use std::fs;
use std::io::Write;

use anyhow::{Context, Result};

use crate::cli::args::ResolveArgs;
use crate::config::SiteConfig;
use crate::core::BuildMode;
use crate::resolver::BuildConfig;
use crate::{debug, log};

/// Execute resolve command
pub fn run_resolve(args: &ResolveArgs, config: &SiteConfig) -> Result<()> {
    // Mode detection inspects the full invocation argument list, so the
    // `dev` token works regardless of where the caller puts it.
    let argv: Vec<String> = std::env::args().collect();
    let mode = BuildMode::detect(&argv);

    if !args.tokens.is_empty() {
        debug!("resolve"; "build tool args: {:?}", args.tokens);
    }
    debug!("resolve"; "{} mode", mode.as_str());

    let resolved = BuildConfig::resolve(config, mode);
    debug!("resolve"; "adapter: {}, base path: {:?}",
        resolved.adapter.kind().as_str(), resolved.paths.base.as_str());
    output_resolved(&resolved, args)
}

/// Write the resolved config to the requested destination.
fn output_resolved(resolved: &BuildConfig, args: &ResolveArgs) -> Result<()> {
    let formatted = if args.pretty {
        serde_json::to_string_pretty(resolved)?
    } else {
        serde_json::to_string(resolved)?
    };

    // Output to file or stdout
    if let Some(output_path) = &args.output {
        let mut file = fs::File::create(output_path)
            .with_context(|| format!("Failed to create '{}'", output_path.display()))?;
        writeln!(file, "{}", formatted)?;
        log!("resolve"; "wrote resolved config to {}", output_path.display());
    } else {
        println!("{}", formatted);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn resolve_args(argv: &[&str]) -> ResolveArgs {
        let cli = crate::cli::Cli::parse_from(argv);
        match cli.command {
            crate::cli::Commands::Resolve { args } => args,
            _ => panic!("expected resolve command"),
        }
    }

    #[test]
    fn test_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("config.json");
        let out_str = out.to_string_lossy().into_owned();

        let args = resolve_args(&["sitebase", "resolve", "-o", &out_str]);
        let resolved = BuildConfig::from_args(["node", "build"]);
        output_resolved(&resolved, &args).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["adapter"], "static");
        assert_eq!(parsed["paths"]["base"], crate::config::DEFAULT_BASE);
    }

    #[test]
    fn test_pretty_output_is_multiline() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("config.json");
        let out_str = out.to_string_lossy().into_owned();

        let args = resolve_args(&["sitebase", "resolve", "--pretty", "-o", &out_str]);
        let resolved = BuildConfig::from_args(["dev"]);
        output_resolved(&resolved, &args).unwrap();

        let written = std::fs::read_to_string(&out).unwrap();
        assert!(written.lines().count() > 1);
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["paths"]["base"], "");
    }
}
