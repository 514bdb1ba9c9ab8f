//! Group command
//!
//! Print the whole grouping, one post at a time.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use colored::Colorize;
use std::io::Write;
use std::path::PathBuf;

use super::show::print_comment;
use super::Settings;

/// Output format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GroupFormat {
    /// JSON object keyed by post ID
    Json,
    /// Human-readable listing
    Summary,
}

/// Arguments for the group command
#[derive(Debug, Args)]
pub struct GroupArgs {
    /// Output format
    #[arg(long, short, value_enum, default_value = "summary")]
    pub format: GroupFormat,

    /// Output file path for JSON (stdout if not specified)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Execute the group command
pub fn execute(args: GroupArgs, settings: &Settings) -> Result<()> {
    let grouper = settings.build_grouping()?;

    match args.format {
        GroupFormat::Json => {
            let json = serde_json::to_string_pretty(&grouper)?;
            if let Some(output_path) = args.output {
                std::fs::write(&output_path, json.as_bytes())
                    .context(format!("Failed to write to {}", output_path.display()))?;
                eprintln!("{} Wrote {}", "✓".green(), output_path.display());
            } else {
                let mut stdout = std::io::stdout();
                writeln!(stdout, "{}", json).context("Failed to write to stdout")?;
            }
        }
        GroupFormat::Summary => {
            if grouper.is_empty() {
                println!(
                    "No comments found in {}.",
                    settings.comments_dir().display()
                );
                return Ok(());
            }
            for (post_id, comments) in grouper.groups() {
                println!(
                    "{} ({} comments)",
                    post_id.to_string().bold().underline(),
                    comments.len()
                );
                println!();
                for comment in comments {
                    print_comment(comment);
                }
            }
        }
    }

    Ok(())
}
