//! sc-core - Core library for static-comments
//!
//! Groups static comment files by the post they belong to, orders each
//! post's comments by date and numbers them, and attaches the result to a
//! post's rendering context.

pub mod comment;
pub mod config;
pub mod context;
pub mod error;
pub mod types;

pub use error::{CommentError, Result};
pub use types::*;
