//! Front-matter parsing
//!
//! Blog posts may start with a YAML block delimited by `---` lines. The
//! block is parsed into [`FrontMatter`] and excluded from rendered output.

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Front-matter data from a blog post
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FrontMatter {
    pub title: Option<String>,
    pub date: Option<String>,
    pub excerpt: Option<String>,
    pub thumbnail: Option<String>,

    /// Additional custom fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl FrontMatter {
    /// Parse front-matter from content string.
    /// Returns (front_matter, remaining_content).
    pub fn parse(content: &str) -> (Self, &str) {
        let trimmed = content.trim_start_matches(['\n', '\r']);
        if !trimmed.starts_with("---") {
            return (FrontMatter::default(), content);
        }

        let rest = trimmed[3..].trim_start_matches(['\n', '\r']);
        let Some(end_pos) = rest.find("\n---") else {
            return (FrontMatter::default(), content);
        };

        let yaml_content = &rest[..end_pos];
        let remaining = rest[end_pos + 4..].trim_start_matches(['\n', '\r']);

        if yaml_content.trim().is_empty() {
            return (FrontMatter::default(), remaining);
        }

        match serde_yaml::from_str::<FrontMatter>(yaml_content) {
            Ok(fm) => (fm, remaining),
            Err(e) => {
                // Not a metadata block after all, keep the document intact
                tracing::warn!("Failed to parse front-matter, treating as content: {}", e);
                (FrontMatter::default(), content)
            }
        }
    }

    /// Parse the date field as a calendar date
    pub fn parse_date(&self) -> Option<NaiveDate> {
        self.date
            .as_deref()
            .and_then(crate::helpers::date::parse_date)
    }
}

/// Drop a leading front-matter block, keeping only the document body
pub fn strip(content: &str) -> &str {
    FrontMatter::parse(content).1
}
