//! Comment source enumeration

use crate::header::HeaderParser;
use sc_core::comment::RawComment;
use sc_core::config::CommentsConfig;
use sc_core::error::{CommentError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

/// A directory of comment files
pub struct CommentDirectory {
    /// Root directory scanned for comments
    root: PathBuf,
    /// Accepted file extensions (without the dot)
    extensions: Vec<String>,
    /// Parser for each file's header block
    parser: HeaderParser,
}

impl CommentDirectory {
    /// Create a source over `root` with the default extensions
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            extensions: CommentsConfig::default().extensions,
            parser: HeaderParser::new(),
        }
    }

    /// Create a source from configuration
    pub fn from_config(config: &CommentsConfig) -> Self {
        Self::new(config.dir.clone()).with_extensions(config.extensions.clone())
    }

    /// Set the accepted file extensions
    pub fn with_extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions
            .into_iter()
            .map(|e| e.trim_start_matches('.').to_lowercase())
            .collect();
        self
    }

    /// Get root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List comment files under the root, sorted by path
    ///
    /// A missing root means there are no comments.
    pub fn enumerate(&self) -> Result<Vec<PathBuf>> {
        if !self.root.exists() {
            warn!("Comments directory {:?} does not exist", self.root);
            return Ok(Vec::new());
        }
        if !self.root.is_dir() {
            return Err(CommentError::Config(format!(
                "comments path {} is not a directory",
                self.root.display()
            )));
        }

        let mut paths = Vec::new();
        // Symlinked comment files count like regular ones
        let walker = WalkDir::new(&self.root).follow_links(true);
        for entry in walker.into_iter().filter_entry(|e| {
            e.depth() == 0 || !e.file_name().to_string_lossy().starts_with('.')
        }) {
            let entry = entry.map_err(|e| {
                CommentError::Io(e.into())
                    .with_context(format!("Failed to scan {}", self.root.display()))
            })?;
            if entry.file_type().is_file() && self.accepts(entry.path()) {
                paths.push(entry.into_path());
            }
        }

        paths.sort();
        debug!("Found {} comment files under {:?}", paths.len(), self.root);
        Ok(paths)
    }

    /// Enumerate and parse every comment file
    pub fn load(&self) -> Result<Vec<RawComment>> {
        let raws = self
            .enumerate()?
            .iter()
            .map(|path| self.parser.parse_file(path))
            .collect::<Result<Vec<_>>>()?;
        info!("Loaded {} comment sources from {:?}", raws.len(), self.root);
        Ok(raws)
    }

    fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.extensions.iter().any(|x| x.eq_ignore_ascii_case(e)))
            .unwrap_or(false)
    }
}
