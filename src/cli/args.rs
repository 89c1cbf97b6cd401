//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Sitebase build configuration resolver CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: sitebase.toml)
    #[arg(short = 'C', long, default_value = "sitebase.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a project config file
    #[command(visible_alias = "i")]
    Init {
        /// Project directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,
    },

    /// Resolve the build configuration and emit it as JSON
    #[command(visible_alias = "r")]
    Resolve {
        #[command(flatten)]
        args: ResolveArgs,
    },

    /// Check the project configuration for problems
    #[command(visible_alias = "c")]
    Check,
}

/// Resolve command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ResolveArgs {
    /// Build-tool arguments to pass along. The literal `dev` token selects
    /// development mode; anything else resolves to production.
    #[arg(value_name = "ARG")]
    pub tokens: Vec<String>,

    /// Override the site URL for deployment.
    ///
    /// Useful for CI/CD deployments where the production URL differs from
    /// what the config file says. The path component becomes the base path
    /// for subdirectory deployments.
    ///
    /// Example: sitebase resolve --site-url "https://user.github.io/my-project"
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'V', long)]
    pub verbose: bool,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_resolve(&self) -> bool {
        matches!(self.command, Commands::Resolve { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_resolve_with_dev_token() {
        let cli = Cli::parse_from(["sitebase", "resolve", "dev"]);
        match &cli.command {
            Commands::Resolve { args } => assert_eq!(args.tokens, vec!["dev"]),
            _ => panic!("expected resolve command"),
        }
    }

    #[test]
    fn test_parse_resolve_alias() {
        let cli = Cli::parse_from(["sitebase", "r", "--pretty"]);
        assert!(cli.is_resolve());
    }

    #[test]
    fn test_parse_check_alias() {
        let cli = Cli::parse_from(["sitebase", "c"]);
        assert!(cli.is_check());
    }

    #[test]
    fn test_parse_init_with_name() {
        let cli = Cli::parse_from(["sitebase", "init", "my-site"]);
        match &cli.command {
            Commands::Init { name } => {
                assert_eq!(name.as_deref(), Some(std::path::Path::new("my-site")));
            }
            _ => panic!("expected init command"),
        }
    }

    #[test]
    fn test_default_config_filename() {
        let cli = Cli::parse_from(["sitebase", "check"]);
        assert_eq!(cli.config, PathBuf::from("sitebase.toml"));
    }

    #[test]
    fn test_site_url_override() {
        let cli = Cli::parse_from([
            "sitebase",
            "resolve",
            "-U",
            "https://user.github.io/my-project",
        ]);
        match &cli.command {
            Commands::Resolve { args } => {
                assert_eq!(
                    args.site_url.as_deref(),
                    Some("https://user.github.io/my-project")
                );
            }
            _ => panic!("expected resolve command"),
        }
    }
}
