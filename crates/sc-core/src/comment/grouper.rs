//! Groups comments by post

use super::builder::CommentBuilder;
use super::model::Comment;
use super::source::ParsedSource;
use crate::config::{CommentsConfig, MissingDatePolicy};
use crate::error::Result;
use crate::types::PostId;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Options for a grouping build
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupingOptions {
    /// Handling of comments without a date
    pub missing_date: MissingDatePolicy,
}

impl From<&CommentsConfig> for GroupingOptions {
    fn from(config: &CommentsConfig) -> Self {
        Self {
            missing_date: config.missing_date,
        }
    }
}

/// Comments grouped by post, each group sorted by date and numbered
///
/// Built once per site build and read-only afterwards.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct CommentGrouper {
    groups: BTreeMap<PostId, Vec<Comment>>,
}

impl CommentGrouper {
    /// Group `items` by `post_id`
    ///
    /// Any invalid item aborts the build; no partial grouping is returned.
    pub fn build<I, S>(items: I, options: &GroupingOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: ParsedSource,
    {
        let builder = CommentBuilder::new().missing_date(options.missing_date);
        let mut groups: BTreeMap<PostId, Vec<Comment>> = BTreeMap::new();

        for item in items {
            let comment = builder.build(&item)?;
            debug!("Read comment {} for post {}", item.name(), comment.post_id);
            groups
                .entry(comment.post_id.clone())
                .or_default()
                .push(comment);
        }

        for comments in groups.values_mut() {
            // sort_by is stable: equal dates keep input order
            comments.sort_by(|a, b| a.cmp_by_date(b, options.missing_date));
            for (cid, comment) in comments.iter_mut().enumerate() {
                comment.cid = cid;
            }
        }

        let grouper = Self { groups };
        info!(
            "Grouped {} comments across {} posts",
            grouper.comment_count(),
            grouper.post_count()
        );
        Ok(grouper)
    }

    /// Comments for a post, oldest first; empty when the post has none
    pub fn get(&self, post_id: &str) -> &[Comment] {
        self.groups.get(post_id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Post IDs that have at least one comment, in ID order
    pub fn post_ids(&self) -> impl Iterator<Item = &PostId> {
        self.groups.keys()
    }

    /// Every group, in post ID order
    pub fn groups(&self) -> impl Iterator<Item = (&PostId, &[Comment])> {
        self.groups.iter().map(|(id, comments)| (id, comments.as_slice()))
    }

    /// Number of posts with comments
    pub fn post_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of comments
    pub fn comment_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Check if there are no comments at all
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}
