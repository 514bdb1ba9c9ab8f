//! Attaches grouped comments to a post's rendering context

use crate::comment::CommentGrouper;
use crate::config::{CommentsConfig, DEFAULT_CONTEXT_KEY};
use crate::error::Result;
use serde_json::{Map, Value};
use tracing::trace;

/// Injects a post's ordered comment list into its template context
#[derive(Debug, Clone)]
pub struct CommentContext {
    key: String,
}

impl CommentContext {
    /// Create an injector writing under `key`
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    /// Key the comment list is stored under
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The comments for `slug` as a JSON array (empty if none)
    pub fn render(&self, grouper: &CommentGrouper, slug: &str) -> Result<Value> {
        Ok(serde_json::to_value(grouper.get(slug))?)
    }

    /// Insert the comments for `slug` into `context`, replacing any previous value
    pub fn attach(
        &self,
        grouper: &CommentGrouper,
        slug: &str,
        context: &mut Map<String, Value>,
    ) -> Result<()> {
        let comments = self.render(grouper, slug)?;
        trace!("Attaching comments for {} under '{}'", slug, self.key);
        context.insert(self.key.clone(), comments);
        Ok(())
    }
}

impl Default for CommentContext {
    fn default() -> Self {
        Self::new(DEFAULT_CONTEXT_KEY)
    }
}

impl From<&CommentsConfig> for CommentContext {
    fn from(config: &CommentsConfig) -> Self {
        Self::new(config.context_key.clone())
    }
}
