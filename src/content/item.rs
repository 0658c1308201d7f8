//! Content item models
//!
//! One struct per record kind loaded from the content files. All of them are
//! plain serde targets, immutable once loaded.

use serde::{Deserialize, Serialize};

/// One timeline entry (a position, degree, or appointment)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineEntry {
    /// Start of the period, `YYYY` or `YYYY-MM[-DD]`
    pub start_date: String,

    /// End of the period, same formats, or the literal "present"
    #[serde(default)]
    pub end_date: Option<String>,

    /// Description, limited inline Markdown
    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub organization: Option<String>,

    /// Logo image path, relative to the content directory
    #[serde(default)]
    pub logo: Option<String>,

    #[serde(default)]
    pub url: Option<String>,
}

impl TimelineEntry {
    /// True when the entry is ongoing
    pub fn is_present(&self) -> bool {
        self.end_date
            .as_deref()
            .map(|e| e.eq_ignore_ascii_case("present"))
            .unwrap_or(false)
    }
}

/// One publication record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    pub title: String,

    #[serde(default)]
    pub authors: String,

    /// Journal name; `conference` is the alternate field used by older files
    #[serde(default)]
    pub venue: Option<String>,

    #[serde(default)]
    pub conference: Option<String>,

    #[serde(default)]
    pub paper: Option<String>,

    #[serde(default)]
    pub link: Option<String>,

    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub poster: Option<String>,

    #[serde(default)]
    pub slides: Option<String>,

    #[serde(default)]
    pub video: Option<String>,

    #[serde(default)]
    pub demo: Option<String>,

    #[serde(default)]
    pub image: Option<String>,
}

impl Publication {
    /// The venue line, whichever field the content file used
    pub fn venue_line(&self) -> Option<&str> {
        self.venue.as_deref().or(self.conference.as_deref())
    }
}

/// One blog index entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogSummary {
    pub id: String,
    pub title: String,

    /// Publication date, `YYYY-MM-DD`
    pub date: String,

    #[serde(default)]
    pub excerpt: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail: Option<String>,

    /// JSON content file, `{ "content": "<markdown>" }`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_file: Option<String>,

    /// Raw Markdown file, used when no JSON content file exists
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub markdown_file: Option<String>,
}

/// One embedded video
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaEntry {
    pub video_id: String,

    /// Start offset: seconds, `MM:SS`, or `HH:MM:SS`
    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub description: String,
}

/// The profile card shown at the top of the index page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,

    #[serde(default)]
    pub tagline: String,

    /// Biography, block Markdown
    #[serde(default)]
    pub bio: String,

    #[serde(default)]
    pub avatar: Option<String>,

    #[serde(default)]
    pub links: Vec<ProfileLink>,
}

/// A labelled external link on the profile card
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileLink {
    pub label: String,
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeline_present() {
        let yaml = r#"
start_date: "2022-09"
end_date: Present
description: Working on **things**
organization: Example Lab
"#;
        let entry: TimelineEntry = serde_yaml::from_str(yaml).unwrap();
        assert!(entry.is_present());
        assert_eq!(entry.organization.as_deref(), Some("Example Lab"));
    }

    #[test]
    fn test_timeline_open_end() {
        let yaml = "start_date: '2020'\ndescription: hi\n";
        let entry: TimelineEntry = serde_yaml::from_str(yaml).unwrap();
        assert!(!entry.is_present());
        assert!(entry.end_date.is_none());
    }

    #[test]
    fn test_publication_venue_fallback() {
        let json = r#"{"title": "A Paper", "conference": "CVPR 2024"}"#;
        let publication: Publication = serde_json::from_str(json).unwrap();
        assert_eq!(publication.venue_line(), Some("CVPR 2024"));
    }

    #[test]
    fn test_blog_summary_roundtrip_omits_empty() {
        let summary = BlogSummary {
            id: "my-post-2024".to_string(),
            title: "My Post".to_string(),
            date: "2024-01-15".to_string(),
            excerpt: String::new(),
            thumbnail: None,
            content_file: Some("content/blogs/my-post-2024.json".to_string()),
            markdown_file: None,
        };
        let yaml = serde_yaml::to_string(&summary).unwrap();
        assert!(!yaml.contains("markdown_file"));
        assert!(yaml.contains("content_file"));
    }
}
