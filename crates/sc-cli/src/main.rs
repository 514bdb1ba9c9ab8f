//! static-comments - groups static comment files by post
//!
//! Runs the comment pipeline against a comments directory so the result a
//! site build would see can be inspected or checked from a shell.
//!
//! ## Quick Start
//!
//! ```bash
//! # Write a default configuration
//! static-comments config init
//!
//! # Fail if any comment is missing its post_id
//! static-comments check
//!
//! # Show the comments attached to one post
//! static-comments show hello-world
//! ```

mod commands;

fn main() {
    if let Err(err) = commands::run() {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
