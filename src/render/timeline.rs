//! Timeline section formatter

use crate::config::SiteConfig;
use crate::content::TimelineEntry;
use crate::helpers::{date, html, url};
use crate::markdown;

/// Format timeline entries as list-item fragments, most recent first.
/// Entries with equal start dates keep their original order (stable sort).
pub fn render(config: &SiteConfig, entries: &[TimelineEntry]) -> Vec<String> {
    let mut sorted: Vec<&TimelineEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| date::sort_key(&b.start_date).cmp(&date::sort_key(&a.start_date)));

    sorted.iter().map(|e| render_entry(config, e)).collect()
}

fn render_entry(config: &SiteConfig, entry: &TimelineEntry) -> String {
    let mut out = String::from(r#"<li class="timeline-entry">"#);

    if let Some(logo) = entry.logo.as_deref() {
        out.push_str(&format!(
            r#"<img class="timeline-logo" src="{}" alt="{}">"#,
            url::url_for(config, logo),
            html::escape(entry.organization.as_deref().unwrap_or("")),
        ));
    }

    out.push_str(r#"<div class="timeline-body">"#);
    out.push_str(&format!(
        r#"<span class="timeline-period">{}</span>"#,
        date::year_span(&entry.start_date, entry.end_date.as_deref(), entry.is_present()),
    ));

    if let Some(org) = entry.organization.as_deref() {
        match entry.url.as_deref() {
            Some(link) => out.push_str(&format!(
                r#"<a class="timeline-org" href="{}" target="_blank" rel="noopener">{}</a>"#,
                html::escape(link),
                html::escape(org),
            )),
            None => out.push_str(&format!(
                r#"<span class="timeline-org">{}</span>"#,
                html::escape(org),
            )),
        }
    }

    out.push_str(&format!(
        r#"<p class="timeline-description">{}</p>"#,
        markdown::render_inline(&entry.description),
    ));
    out.push_str("</div></li>");
    out
}
