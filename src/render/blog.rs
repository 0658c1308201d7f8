//! Blog index section formatter

use crate::config::SiteConfig;
use crate::content::BlogSummary;
use crate::helpers::{date, html, url};

/// Format blog summaries as card fragments, newest first (stable sort)
pub fn render_index(config: &SiteConfig, summaries: &[BlogSummary]) -> Vec<String> {
    let mut sorted: Vec<&BlogSummary> = summaries.iter().collect();
    sorted.sort_by(|a, b| date::sort_key(&b.date).cmp(&date::sort_key(&a.date)));

    sorted.iter().map(|s| render_card(config, s)).collect()
}

/// URL path of a blog post page, relative to the site root
pub fn post_path(id: &str) -> String {
    format!("blog/{}/", id)
}

fn render_card(config: &SiteConfig, summary: &BlogSummary) -> String {
    let href = url::url_for(config, &post_path(&summary.id));
    let mut out = String::from(r#"<article class="blog-card">"#);

    if let Some(thumbnail) = summary.thumbnail.as_deref() {
        out.push_str(&format!(
            r#"<img class="blog-thumbnail" src="{}" alt="{}">"#,
            url::url_for(config, thumbnail),
            html::escape(&summary.title),
        ));
    }

    out.push_str(&format!(
        r#"<div class="blog-card-info"><a class="blog-card-title" href="{}">{}</a>"#,
        href,
        html::escape(&summary.title),
    ));
    out.push_str(&format!(
        r#"<time class="blog-card-date" datetime="{}">{}</time>"#,
        html::escape(&summary.date),
        date::format_date(&summary.date, &config.date_format),
    ));

    if !summary.excerpt.is_empty() {
        out.push_str(&format!(
            r#"<p class="blog-card-excerpt">{}</p>"#,
            html::escape(&summary.excerpt),
        ));
    }

    out.push_str("</div></article>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, date: &str) -> BlogSummary {
        BlogSummary {
            id: id.to_string(),
            title: format!("Post {}", id),
            date: date.to_string(),
            excerpt: String::new(),
            thumbnail: None,
            content_file: None,
            markdown_file: None,
        }
    }

    #[test]
    fn test_sorted_newest_first() {
        let config = SiteConfig::default();
        let fragments = render_index(
            &config,
            &[
                summary("a", "2023-05-01"),
                summary("b", "2024-02-10"),
                summary("c", "2023-11-20"),
            ],
        );
        assert!(fragments[0].contains("Post b"));
        assert!(fragments[1].contains("Post c"));
        assert!(fragments[2].contains("Post a"));
    }

    #[test]
    fn test_card_links_to_post_page() {
        let config = SiteConfig::default();
        let fragments = render_index(&config, &[summary("my-post-2024", "2024-01-01")]);
        assert!(fragments[0].contains(r#"href="/blog/my-post-2024/""#));
    }

    #[test]
    fn test_card_date_formatted() {
        let config = SiteConfig::default();
        let fragments = render_index(&config, &[summary("a", "2024-01-15")]);
        assert!(fragments[0].contains("January 15, 2024"));
        assert!(fragments[0].contains(r#"datetime="2024-01-15""#));
    }
}
