//! Comment data model

use crate::config::MissingDatePolicy;
use crate::types::PostId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A reader comment attached to a post
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    /// Comment body, verbatim
    pub content: String,
    /// Author name (empty when the source gives none)
    #[serde(default)]
    pub author: String,
    /// When the comment was written
    pub date: Option<NaiveDateTime>,
    /// Post this comment belongs to
    pub post_id: PostId,
    /// Zero-based position within the post's sorted comment list
    pub cid: usize,
    /// Name of the source the comment was read from
    #[serde(skip_serializing_if = "String::is_empty", default)]
    pub source: String,
}

impl Comment {
    /// Timestamp used for ordering
    ///
    /// Dateless comments take the sentinel chosen by `policy`. Under
    /// `Reject` a dateless comment never reaches the grouper; `MIN` is
    /// returned so the function stays total.
    pub fn sort_date(&self, policy: MissingDatePolicy) -> NaiveDateTime {
        match (self.date, policy) {
            (Some(date), _) => date,
            (None, MissingDatePolicy::Latest) => NaiveDateTime::MAX,
            (None, _) => NaiveDateTime::MIN,
        }
    }

    /// Compare two comments by date alone
    ///
    /// Equal dates compare `Equal`; order between them is left to the
    /// (stable) sort.
    pub fn cmp_by_date(&self, other: &Comment, policy: MissingDatePolicy) -> Ordering {
        self.sort_date(policy).cmp(&other.sort_date(policy))
    }

    /// Whether an author was given
    pub fn has_author(&self) -> bool {
        !self.author.is_empty()
    }
}
