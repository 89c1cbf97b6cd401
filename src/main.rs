//! Sitebase - build configuration resolver for static site deployments.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod logger;
mod resolver;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    // Verbose must be set before config loading so its debug output shows
    if let Commands::Resolve { args } = &cli.command {
        logger::set_verbose(args.verbose);
    }

    let config = SiteConfig::load(&cli)?;

    match &cli.command {
        Commands::Init { name } => cli::init::run_init(&config, name.is_some()),
        Commands::Resolve { args } => cli::resolve::run_resolve(args, &config),
        Commands::Check => cli::check::run_check(&config),
    }
}
