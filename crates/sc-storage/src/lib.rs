//! sc-storage - Filesystem comment sources for static-comments
//!
//! Enumerates comment files under a directory and parses their header
//! blocks into raw comments for the grouper.

mod directory;
mod header;

pub use directory::CommentDirectory;
pub use header::HeaderParser;
