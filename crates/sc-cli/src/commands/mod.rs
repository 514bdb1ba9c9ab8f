//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod check;
pub mod config;
pub mod group;
pub mod show;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sc_core::comment::{CommentGrouper, GroupingOptions};
use sc_core::config::{Config, MissingDatePolicy};
use sc_storage::CommentDirectory;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default configuration file, relative to the working directory
pub const DEFAULT_CONFIG_FILE: &str = "static-comments.toml";

/// static-comments - group static comment files by post
#[derive(Debug, Parser)]
#[command(name = "static-comments")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Comments directory (overrides the configuration)
    #[arg(long, global = true, env = "STATIC_COMMENTS_DIR")]
    pub comments_dir: Option<PathBuf>,

    /// How to treat comments without a date: reject, earliest or latest
    /// (overrides the configuration)
    #[arg(long, global = true)]
    pub missing_date: Option<MissingDatePolicy>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print every post's comments
    Group(group::GroupArgs),

    /// Print the comments for one post
    Show(show::ShowArgs),

    /// Validate all comments and report counts
    Check,

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Effective configuration after command-line overrides
#[derive(Debug, Clone)]
pub struct Settings {
    /// Where the configuration was (or would be) read from
    pub config_path: PathBuf,
    /// Loaded configuration with overrides applied
    pub config: Config,
}

impl Settings {
    /// Load configuration and apply overrides from the command line
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config_path = cli
            .config
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        // `config init` writes a fresh file, so an existing one (even a broken
        // one) is never read. Otherwise an explicitly named file must exist.
        let creating = matches!(cli.command, Commands::Config(config::ConfigCommand::Init { .. }));
        let mut config = if creating {
            Config::default()
        } else if cli.config.is_some() {
            Config::load(&config_path)
                .with_context(|| format!("Failed to load configuration {}", config_path.display()))?
        } else {
            Config::load_or_default(&config_path)
                .with_context(|| format!("Failed to load configuration {}", config_path.display()))?
        };

        if let Some(dir) = &cli.comments_dir {
            config.comments.dir = dir.clone();
        }
        if let Some(policy) = cli.missing_date {
            config.comments.missing_date = policy;
        }

        debug!(
            "Comments directory {:?}, missing dates: {}",
            config.comments.dir, config.comments.missing_date
        );

        Ok(Self {
            config_path,
            config,
        })
    }

    /// Comments directory in effect
    pub fn comments_dir(&self) -> &Path {
        &self.config.comments.dir
    }

    /// Read the comments directory and group it
    pub fn build_grouping(&self) -> Result<CommentGrouper> {
        let comments = &self.config.comments;
        let raws = CommentDirectory::from_config(comments)
            .load()
            .with_context(|| format!("Failed to read comments from {}", comments.dir.display()))?;
        let grouper = CommentGrouper::build(raws, &GroupingOptions::from(comments)).map_err(|e| {
            let context = if e.is_missing_post_id() {
                "Failed to group comments (every comment needs a post_id header)"
            } else {
                "Failed to group comments"
            };
            anyhow::Error::new(e).context(context)
        })?;
        Ok(grouper)
    }
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    setup_logging(cli.verbose);

    // Handle color output
    if cli.no_color {
        colored::control::set_override(false);
    }

    let settings = Settings::from_cli(&cli)?;

    // Dispatch to command handler
    match cli.command {
        Commands::Group(args) => group::execute(args, &settings),
        Commands::Show(args) => show::execute(args, &settings),
        Commands::Check => check::execute(&settings),
        Commands::Config(cmd) => config::execute(cmd, &settings),
    }
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
