//! Show command
//!
//! Print the comments one post would receive.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use sc_core::comment::Comment;
use sc_core::context::CommentContext;

use super::Settings;

/// Arguments for the show command
#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Post slug (the comments' post_id)
    pub slug: String,

    /// Show as JSON, exactly as attached to the post context
    #[arg(long)]
    pub json: bool,
}

/// Execute the show command
pub fn execute(args: ShowArgs, settings: &Settings) -> Result<()> {
    let grouper = settings.build_grouping()?;

    if args.json {
        let injector = CommentContext::from(&settings.config.comments);
        let value = injector.render(&grouper, &args.slug)?;
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let comments = grouper.get(&args.slug);
    if comments.is_empty() {
        println!("No comments for {}.", args.slug.cyan());
        return Ok(());
    }

    println!(
        "{} ({} comments)",
        args.slug.bold().underline(),
        comments.len()
    );
    println!();
    for comment in comments {
        print_comment(comment);
    }

    Ok(())
}

/// Print one comment as an indented block
pub fn print_comment(comment: &Comment) {
    let author = if comment.has_author() {
        comment.author.green()
    } else {
        "anonymous".dimmed()
    };
    let date = comment
        .date
        .map(|d| d.format("%Y-%m-%d %H:%M").to_string())
        .unwrap_or_else(|| "undated".to_string());

    println!("  #{} {} {}", comment.cid, author, date.dimmed());
    for line in comment.content.lines() {
        println!("    {}", line);
    }
    println!();
}
