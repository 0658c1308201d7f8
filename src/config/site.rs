//! Site configuration (site.yml)

use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub author: String,

    // URL
    pub url: String,
    pub root: String,

    // Directory
    pub content_dir: String,
    pub public_dir: String,
    pub blogs_dir: String,

    // Content sources, one path per section
    #[serde(default)]
    pub sections: SectionsConfig,

    // Date / Time format
    pub date_format: String,

    // Table of contents
    #[serde(default)]
    pub toc: TocConfig,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Folio".to_string(),
            subtitle: String::new(),
            description: String::new(),
            author: "John Doe".to_string(),

            url: "http://example.com".to_string(),
            root: "/".to_string(),

            content_dir: "content".to_string(),
            public_dir: "public".to_string(),
            blogs_dir: "blogs".to_string(),

            sections: SectionsConfig::default(),

            date_format: "%B %-d, %Y".to_string(),

            toc: TocConfig::default(),

            extra: IndexMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Per-section content file paths, relative to the content directory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SectionsConfig {
    pub profile: String,
    pub timeline: String,
    pub publications: String,
    pub media: String,
    pub blogs: String,
}

impl Default for SectionsConfig {
    fn default() -> Self {
        Self {
            profile: "profile.yml".to_string(),
            timeline: "timeline.yml".to_string(),
            publications: "publications.yml".to_string(),
            media: "media.yml".to_string(),
            blogs: "blogs/blogs.yaml".to_string(),
        }
    }
}

/// Table-of-contents configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TocConfig {
    /// Smallest heading level included in the outline
    pub min_level: u8,
    /// Largest heading level included in the outline
    pub max_level: u8,
    /// Viewport offset (px) used by the scroll-spy highlight
    pub offset: u32,
}

impl Default for TocConfig {
    fn default() -> Self {
        Self {
            min_level: 2,
            max_level: 3,
            offset: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Folio");
        assert_eq!(config.content_dir, "content");
        assert_eq!(config.toc.offset, 100);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: My Site
author: Test User
sections:
  timeline: data/timeline.yml
toc:
  max_level: 4
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "My Site");
        assert_eq!(config.author, "Test User");
        assert_eq!(config.sections.timeline, "data/timeline.yml");
        assert_eq!(config.sections.media, "media.yml");
        assert_eq!(config.toc.max_level, 4);
        assert_eq!(config.toc.min_level, 2);
    }
}
