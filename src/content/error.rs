//! Content loading errors

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure while looking up or reading post sources
///
/// Malformed front matter is not an error; it degrades to defaults.
#[derive(Debug, Error)]
pub enum ContentError {
    /// No source file matches the requested slug
    #[error("post not found: {slug}")]
    NotFound { slug: String },

    /// A source file exists but could not be read as text
    #[error("failed to read {source_id}: {source}")]
    Read {
        source_id: String,
        #[source]
        source: io::Error,
    },

    /// The content root could not be enumerated
    #[error("failed to list {}: {source}", .root.display())]
    List {
        root: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ContentError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ContentError::NotFound { .. })
    }
}
