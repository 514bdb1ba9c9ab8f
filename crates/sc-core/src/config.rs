//! Configuration management for static-comments

use crate::error::{CommentError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

/// Default directory holding comment sources
pub const DEFAULT_COMMENTS_DIR: &str = "comments";

/// Default key comments are attached under in a post's context
pub const DEFAULT_CONTEXT_KEY: &str = "comments";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Comment settings
    pub comments: CommentsConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|e| {
            CommentError::Io(e).with_context(format!("Failed to read {}", path.display()))
        })?;
        let config: Config =
            toml::from_str(&text).map_err(|e| CommentError::Toml(e.to_string()))?;
        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Load configuration, falling back to defaults when the file is absent
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!("No configuration at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Render as pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CommentError::Toml(e.to_string()))
    }
}

/// Comment-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CommentsConfig {
    /// Directory the source enumerator scans
    pub dir: PathBuf,
    /// File extensions treated as comment sources
    pub extensions: Vec<String>,
    /// What to do with a comment that has no date
    pub missing_date: MissingDatePolicy,
    /// Key the ordered comment list is attached under
    pub context_key: String,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_COMMENTS_DIR),
            extensions: vec![
                "md".to_string(),
                "markdown".to_string(),
                "txt".to_string(),
                "rst".to_string(),
            ],
            missing_date: MissingDatePolicy::default(),
            context_key: DEFAULT_CONTEXT_KEY.to_string(),
        }
    }
}

/// Handling of comments whose metadata has no `date`
///
/// A date that is present but malformed is always an error; this only
/// governs absence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingDatePolicy {
    /// Fail the whole build, like a missing `post_id`
    #[default]
    Reject,
    /// Sort dateless comments before every dated one
    Earliest,
    /// Sort dateless comments after every dated one
    Latest,
}

impl MissingDatePolicy {
    /// Lowercase name as used in config files
    pub fn as_str(&self) -> &'static str {
        match self {
            MissingDatePolicy::Reject => "reject",
            MissingDatePolicy::Earliest => "earliest",
            MissingDatePolicy::Latest => "latest",
        }
    }
}

impl fmt::Display for MissingDatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MissingDatePolicy {
    type Err = CommentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "reject" => Ok(MissingDatePolicy::Reject),
            "earliest" => Ok(MissingDatePolicy::Earliest),
            "latest" => Ok(MissingDatePolicy::Latest),
            other => Err(CommentError::Config(format!(
                "unknown missing_date policy '{}' (expected reject, earliest or latest)",
                other
            ))),
        }
    }
}
