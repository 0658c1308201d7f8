//! Content error taxonomy
//!
//! Every section loader catches these locally: a failure degrades to "no
//! content rendered" for that section and never reaches a sibling section.

use thiserror::Error;

/// Errors raised while fetching or decoding content files
#[derive(Debug, Error)]
pub enum ContentError {
    /// The file exists but could not be read
    #[error("failed to fetch {path}: {source}")]
    Fetch {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file was read but is not valid YAML/JSON for its type
    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },

    /// The content file or item does not exist
    #[error("content not found: {0}")]
    NotFound(String),
}

impl ContentError {
    /// Build the right variant for an I/O failure on `path`
    pub fn from_io(path: &str, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            ContentError::NotFound(path.to_string())
        } else {
            ContentError::Fetch {
                path: path.to_string(),
                source,
            }
        }
    }
}
