//! Media section formatter - embedded videos

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::config::SiteConfig;
use crate::content::MediaEntry;
use crate::helpers::html;
use crate::markdown;

/// Video ids and query values keep `-` and `_` unencoded
const EMBED_SET: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_');

/// Format media entries as embed fragments, in source order
pub fn render(_config: &SiteConfig, entries: &[MediaEntry]) -> Vec<String> {
    entries.iter().map(render_entry).collect()
}

fn render_entry(entry: &MediaEntry) -> String {
    let mut src = format!(
        "https://www.youtube.com/embed/{}",
        utf8_percent_encode(&entry.video_id, EMBED_SET),
    );
    if let Some(timestamp) = entry.timestamp.as_deref() {
        match parse_timestamp(timestamp) {
            Some(seconds) => src.push_str(&format!("?start={}", seconds)),
            None => tracing::warn!("Ignoring bad media timestamp: {}", timestamp),
        }
    }

    let mut out = String::from(r#"<figure class="media-entry">"#);
    out.push_str(&format!(
        r#"<iframe src="{}" title="{}" loading="lazy" allowfullscreen></iframe>"#,
        src,
        html::escape(&entry.title),
    ));
    out.push_str("<figcaption>");
    if !entry.title.is_empty() {
        out.push_str(&format!(
            r#"<span class="media-title">{}</span>"#,
            html::escape(&entry.title),
        ));
    }
    if !entry.description.is_empty() {
        out.push_str(&format!(
            r#"<p class="media-description">{}</p>"#,
            markdown::render_inline(&entry.description),
        ));
    }
    out.push_str("</figcaption></figure>");
    out
}

/// Parse a start offset: bare seconds, `MM:SS`, or `HH:MM:SS`
fn parse_timestamp(s: &str) -> Option<u64> {
    let parts: Vec<&str> = s.trim().split(':').collect();
    if parts.is_empty() || parts.len() > 3 {
        return None;
    }

    let mut seconds = 0u64;
    for part in &parts {
        seconds = seconds * 60 + part.parse::<u64>().ok()?;
    }
    Some(seconds)
}
