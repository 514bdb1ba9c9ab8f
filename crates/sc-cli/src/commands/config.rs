//! Config command
//!
//! Inspect and create the static-comments configuration.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::Colorize;
use sc_core::config::Config;
use std::fs;

use super::Settings;

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show {
        /// Show as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write a default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Execute the config command
pub fn execute(cmd: ConfigCommand, settings: &Settings) -> Result<()> {
    match cmd {
        ConfigCommand::Show { json } => show_config(settings, json),
        ConfigCommand::Init { force } => init_config(settings, force),
    }
}

fn show_config(settings: &Settings, as_json: bool) -> Result<()> {
    let comments = &settings.config.comments;

    if as_json {
        let json = serde_json::json!({
            "comments": {
                "dir": comments.dir,
                "extensions": comments.extensions,
                "missing_date": comments.missing_date.as_str(),
                "context_key": comments.context_key,
            }
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
        return Ok(());
    }

    println!("{}", "Configuration:".bold().underline());
    let source = if settings.config_path.exists() {
        settings.config_path.display().to_string()
    } else {
        "defaults".to_string()
    };
    println!("{}", source.dimmed());
    println!();
    print!("{}", settings.config.to_toml_string()?);

    Ok(())
}

fn init_config(settings: &Settings, force: bool) -> Result<()> {
    let path = &settings.config_path;

    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .context(format!("Failed to create {}", parent.display()))?;
    }

    let text = Config::default().to_toml_string()?;
    fs::write(path, text).context(format!("Failed to write {}", path.display()))?;
    println!("{} Created {}", "✓".green(), path.display());

    Ok(())
}
