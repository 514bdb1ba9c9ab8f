//! Core type definitions for static-comments

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Metadata key naming the parent post
pub const FIELD_POST_ID: &str = "post_id";

/// Metadata key naming the comment author
pub const FIELD_AUTHOR: &str = "author";

/// Metadata key carrying the comment timestamp
pub const FIELD_DATE: &str = "date";

/// Identifier of the post a comment belongs to
///
/// The consuming pipeline looks posts up by slug; a slug and a post ID are
/// compared verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub String);

impl PostId {
    /// Create a PostId from a string
    pub fn new(s: impl Into<String>) -> Self {
        PostId(s.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PostId {
    fn from(s: &str) -> Self {
        PostId(s.to_string())
    }
}

impl From<String> for PostId {
    fn from(s: String) -> Self {
        PostId(s)
    }
}

// Lets map lookups take a plain slug.
impl Borrow<str> for PostId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_post_id_display() {
        let id = PostId::from("hello-world");
        assert_eq!(id.to_string(), "hello-world");
        assert_eq!(id.as_str(), "hello-world");
    }

    #[test]
    fn test_post_id_lookup_by_slug() {
        let mut map = BTreeMap::new();
        map.insert(PostId::new("a"), 1);
        assert_eq!(map.get("a"), Some(&1));
        assert_eq!(map.get("b"), None);
    }

    #[test]
    fn test_post_id_serializes_as_string() {
        let json = serde_json::to_string(&PostId::from("a")).unwrap();
        assert_eq!(json, "\"a\"");
    }
}
