//! Parsed comment sources
//!
//! The grouper never parses files itself. Whatever reads a source hands it
//! over through [`ParsedSource`]: a name for diagnostics, the body, and a
//! lookup over the header fields.

use std::collections::BTreeMap;

/// A comment source after its header block has been parsed
pub trait ParsedSource {
    /// Identifies the source in errors and logs (usually a path)
    fn name(&self) -> &str;

    /// Body text, verbatim
    fn content(&self) -> &str;

    /// Look up a header field by key
    fn field(&self, key: &str) -> Option<&str>;
}

impl<T: ParsedSource + ?Sized> ParsedSource for &T {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn content(&self) -> &str {
        (**self).content()
    }

    fn field(&self, key: &str) -> Option<&str> {
        (**self).field(key)
    }
}

/// Owned (content, metadata) pair
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawComment {
    /// Source name
    pub name: String,
    /// Body text
    pub content: String,
    /// Header fields
    pub metadata: BTreeMap<String, String>,
}

impl RawComment {
    /// Create a raw comment with no metadata
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Set a metadata field
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

impl ParsedSource for RawComment {
    fn name(&self) -> &str {
        &self.name
    }

    fn content(&self) -> &str {
        &self.content
    }

    fn field(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_comment_fields() {
        let raw = RawComment::new("one.md", "hello")
            .with_field("post_id", "a")
            .with_field("author", "alice");

        assert_eq!(raw.name(), "one.md");
        assert_eq!(raw.content(), "hello");
        assert_eq!(raw.field("post_id"), Some("a"));
        assert_eq!(raw.field("date"), None);
    }

    #[test]
    fn test_reference_is_parsed_source() {
        fn name_of(source: impl ParsedSource) -> String {
            source.name().to_string()
        }

        let raw = RawComment::new("two.md", "");
        assert_eq!(name_of(&raw), "two.md");
    }
}
