//! Check command
//!
//! Build the grouping and report what it holds. Any invalid comment makes
//! the command fail, the same way it would fail a site build.

use anyhow::Result;
use colored::Colorize;

use super::Settings;

/// Execute the check command
pub fn execute(settings: &Settings) -> Result<()> {
    let grouper = settings.build_grouping()?;

    println!(
        "{} {} comments across {} posts in {}",
        "✓".green(),
        grouper.comment_count().to_string().yellow(),
        grouper.post_count().to_string().yellow(),
        settings.comments_dir().display()
    );

    Ok(())
}
