//! Content store - fetches and decodes content files
//!
//! A path declares its format by extension: `.yml`/`.yaml` parse as YAML,
//! `.json` as JSON. Reads are async so independent sections can load
//! concurrently; each caller handles its own [`ContentError`].

use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use super::{BlogSummary, ContentError};

/// Declared format of a content file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Yaml,
    Json,
    Markdown,
}

fn format_of(path: &str) -> Option<Format> {
    let ext = Path::new(path).extension()?.to_str()?;
    match ext {
        "yml" | "yaml" => Some(Format::Yaml),
        "json" => Some(Format::Json),
        "md" | "markdown" => Some(Format::Markdown),
        _ => None,
    }
}

/// Wrapper shape of a JSON blog content file
#[derive(Debug, Deserialize)]
struct BlogContentFile {
    content: String,
}

/// Fetches content files relative to the content directory
#[derive(Debug, Clone)]
pub struct ContentStore {
    content_dir: PathBuf,
}

impl ContentStore {
    /// Create a store rooted at the content directory
    pub fn new<P: AsRef<Path>>(content_dir: P) -> Self {
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
        }
    }

    /// Read a file below the content root
    async fn read(&self, path: &str) -> Result<String, ContentError> {
        let full = self.content_dir.join(path);
        tokio::fs::read_to_string(&full)
            .await
            .map_err(|e| ContentError::from_io(path, e))
    }

    /// Fetch `path` and decode it per its declared format
    pub async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ContentError> {
        let text = self.read(path).await?;
        match format_of(path) {
            Some(Format::Yaml) => {
                serde_yaml::from_str(&text).map_err(|e| ContentError::Parse {
                    path: path.to_string(),
                    reason: e.to_string(),
                })
            }
            Some(Format::Json) => {
                serde_json::from_str(&text).map_err(|e| ContentError::Parse {
                    path: path.to_string(),
                    reason: e.to_string(),
                })
            }
            _ => Err(ContentError::Parse {
                path: path.to_string(),
                reason: "expected a .yml, .yaml or .json file".to_string(),
            }),
        }
    }

    /// Fetch the raw Markdown body of a blog post.
    ///
    /// A summary points either at a JSON wrapper file
    /// (`{ "content": "<markdown>" }`) or at a raw Markdown file; older index
    /// entries carry both, in which case the JSON wrapper wins.
    pub async fn fetch_blog_body(&self, summary: &BlogSummary) -> Result<String, ContentError> {
        if let Some(path) = summary.content_file.as_deref() {
            let wrapper: BlogContentFile = self.fetch(path).await?;
            return Ok(wrapper.content);
        }

        if let Some(path) = summary.markdown_file.as_deref() {
            if format_of(path) != Some(Format::Markdown) {
                return Err(ContentError::Parse {
                    path: path.to_string(),
                    reason: "expected a .md file".to_string(),
                });
            }
            return self.read(path).await;
        }

        Err(ContentError::NotFound(format!(
            "blog {} has no content_file or markdown_file",
            summary.id
        )))
    }
}
