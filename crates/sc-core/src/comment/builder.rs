//! Builds validated comment records from parsed sources

use super::date::parse_date;
use super::model::Comment;
use super::source::ParsedSource;
use crate::config::MissingDatePolicy;
use crate::error::{CommentError, Result};
use crate::types::{PostId, FIELD_AUTHOR, FIELD_DATE, FIELD_POST_ID};

/// Reads the known fields of a source into a [`Comment`]
///
/// `post_id` is required. `author` defaults to empty. `date` is governed by
/// the missing-date policy when absent and is an error when malformed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentBuilder {
    missing_date: MissingDatePolicy,
}

impl CommentBuilder {
    /// Create a builder with the default (rejecting) date policy
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the missing-date policy
    pub fn missing_date(mut self, policy: MissingDatePolicy) -> Self {
        self.missing_date = policy;
        self
    }

    /// Build a comment from a source; `cid` is left at 0 for the grouper
    pub fn build<S: ParsedSource + ?Sized>(&self, source: &S) -> Result<Comment> {
        let post_id = source
            .field(FIELD_POST_ID)
            .ok_or_else(|| CommentError::MissingField {
                source_name: source.name().to_string(),
                field: FIELD_POST_ID,
            })?;

        let date = match source.field(FIELD_DATE) {
            Some(value) => Some(parse_date(value).ok_or_else(|| CommentError::InvalidDate {
                source_name: source.name().to_string(),
                value: value.to_string(),
            })?),
            None if self.missing_date == MissingDatePolicy::Reject => {
                return Err(CommentError::MissingField {
                    source_name: source.name().to_string(),
                    field: FIELD_DATE,
                });
            }
            None => None,
        };

        Ok(Comment {
            content: source.content().to_string(),
            author: source.field(FIELD_AUTHOR).unwrap_or_default().to_string(),
            date,
            post_id: PostId::new(post_id),
            cid: 0,
            source: source.name().to_string(),
        })
    }
}
