//! Header-block metadata parser

use sc_core::comment::RawComment;
use sc_core::error::{CommentError, Result};
use std::fs;
use std::path::Path;

/// Fence line opening and closing a front matter block
const FENCE: &str = "---";

/// Parses comment files of the form
///
/// ```text
/// Post_Id: hello-world
/// Author: alice
/// Date: 2020-01-02 10:30
///
/// Comment body...
/// ```
///
/// A `---` fenced block is accepted as the header too. Keys are lowercased.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderParser;

impl HeaderParser {
    /// Create a new parser
    pub fn new() -> Self {
        Self
    }

    /// Parse a comment file
    pub fn parse_file(&self, path: &Path) -> Result<RawComment> {
        let text = fs::read_to_string(path).map_err(|e| {
            CommentError::Io(e).with_context(format!("Failed to read comment {}", path.display()))
        })?;
        Ok(self.parse_str(path.display().to_string(), &text))
    }

    /// Parse comment text; `name` identifies the source in errors
    pub fn parse_str(&self, name: impl Into<String>, text: &str) -> RawComment {
        let mut raw = RawComment::new(name, "");
        let mut lines = text.lines().peekable();
        let fenced = lines.peek().map(|l| l.trim_end() == FENCE).unwrap_or(false);
        if fenced {
            lines.next();
        }

        let mut last_key: Option<String> = None;
        let mut body_start: Option<&str> = None;

        while let Some(line) = lines.next() {
            if fenced && line.trim_end() == FENCE {
                break;
            }
            if !fenced && line.trim().is_empty() {
                break;
            }

            if line.starts_with([' ', '\t']) {
                if let Some(value) = last_key.as_ref().and_then(|k| raw.metadata.get_mut(k)) {
                    let extra = line.trim();
                    if !extra.is_empty() {
                        if !value.is_empty() {
                            value.push(' ');
                        }
                        value.push_str(extra);
                    }
                    continue;
                }
            }

            match split_field(line) {
                Some((key, value)) => {
                    raw.metadata.insert(key.clone(), value);
                    last_key = Some(key);
                }
                // Unfenced header ends at the first non-field line,
                // which belongs to the body
                None if !fenced => {
                    body_start = Some(line);
                    break;
                }
                None => {}
            }
        }

        let mut body: Vec<&str> = body_start.into_iter().collect();
        body.extend(lines);
        if fenced {
            while body.first().map(|l| l.trim().is_empty()).unwrap_or(false) {
                body.remove(0);
            }
        }

        raw.content = body.join("\n").trim_end().to_string();
        raw
    }
}

/// Split `Key: value` into a lowercased key and trimmed value
fn split_field(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once(':')?;
    let key = key.trim();
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-');
    if !valid {
        return None;
    }
    Some((key.to_lowercase(), value.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sc_core::comment::ParsedSource;

    #[test]
    fn test_plain_header() {
        let raw = HeaderParser::new().parse_str(
            "c.md",
            "Post_Id: hello\nAuthor: Alice\nDate: 2020-01-02\n\nFirst line.\n\nSecond paragraph.\n\n",
        );

        assert_eq!(raw.field("post_id"), Some("hello"));
        assert_eq!(raw.field("author"), Some("Alice"));
        assert_eq!(raw.field("date"), Some("2020-01-02"));
        assert_eq!(raw.content(), "First line.\n\nSecond paragraph.");
    }

    #[test]
    fn test_fenced_header() {
        let raw = HeaderParser::new().parse_str(
            "c.md",
            "---\npost_id: a\nauthor: bob\n---\n\nBody: with a colon\n",
        );

        assert_eq!(raw.field("post_id"), Some("a"));
        assert_eq!(raw.field("author"), Some("bob"));
        assert_eq!(raw.content(), "Body: with a colon");
    }

    #[test]
    fn test_value_keeps_colons() {
        let raw = HeaderParser::new().parse_str("c.md", "date: 2020-01-02 10:30\n\nx");
        assert_eq!(raw.field("date"), Some("2020-01-02 10:30"));
    }

    #[test]
    fn test_continuation_lines() {
        let raw = HeaderParser::new().parse_str(
            "c.md",
            "author: Alice\n    of Wonderland\npost_id: a\n\nbody",
        );
        assert_eq!(raw.field("author"), Some("Alice of Wonderland"));
        assert_eq!(raw.field("post_id"), Some("a"));
    }

    #[test]
    fn test_duplicate_key_last_wins() {
        let raw = HeaderParser::new().parse_str("c.md", "author: a\nauthor: b\n\n");
        assert_eq!(raw.field("author"), Some("b"));
        assert_eq!(raw.content(), "");
    }

    #[test]
    fn test_no_header() {
        let raw = HeaderParser::new().parse_str("c.md", "Just a body, no fields.\nMore.");
        assert!(raw.metadata.is_empty());
        assert_eq!(raw.content(), "Just a body, no fields.\nMore.");
    }

    #[test]
    fn test_sentence_with_colon_is_body() {
        let raw = HeaderParser::new().parse_str("c.md", "Note to self: great post\n");
        assert!(raw.metadata.is_empty());
        assert_eq!(raw.content(), "Note to self: great post");
    }

    #[test]
    fn test_parse_file_missing() {
        let temp = tempfile::TempDir::new().unwrap();
        let err = HeaderParser::new()
            .parse_file(&temp.path().join("gone.md"))
            .unwrap_err();
        assert!(err.to_string().contains("gone.md"));
    }
}
