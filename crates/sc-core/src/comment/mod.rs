//! Comment system module
//!
//! Reads parsed sources into comment records and groups them by post.

pub mod builder;
pub mod date;
pub mod grouper;
pub mod model;
pub mod source;

pub use builder::CommentBuilder;
pub use date::parse_date;
pub use grouper::{CommentGrouper, GroupingOptions};
pub use model::Comment;
pub use source::{ParsedSource, RawComment};
