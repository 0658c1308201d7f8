//! Publications section formatter

use crate::config::SiteConfig;
use crate::content::Publication;
use crate::helpers::{html, url};

/// Fixed display order of the link row
const LINK_FIELDS: [(&str, fn(&Publication) -> Option<&str>); 7] = [
    ("Paper", |p| p.paper.as_deref()),
    ("Link", |p| p.link.as_deref()),
    ("Code", |p| p.code.as_deref()),
    ("Poster", |p| p.poster.as_deref()),
    ("Slides", |p| p.slides.as_deref()),
    ("Video", |p| p.video.as_deref()),
    ("Demo", |p| p.demo.as_deref()),
];

/// Format publications as card fragments, in source order
pub fn render(config: &SiteConfig, publications: &[Publication]) -> Vec<String> {
    publications
        .iter()
        .map(|p| render_publication(config, p))
        .collect()
}

fn render_publication(config: &SiteConfig, publication: &Publication) -> String {
    let mut out = String::from(r#"<div class="publication">"#);

    if let Some(image) = publication.image.as_deref() {
        out.push_str(&format!(
            r#"<img class="publication-image" src="{}" alt="{}">"#,
            url::url_for(config, image),
            html::escape(&publication.title),
        ));
    }

    out.push_str(r#"<div class="publication-info">"#);
    out.push_str(&format!(
        r#"<span class="publication-title">{}</span>"#,
        html::escape(&publication.title),
    ));

    if !publication.authors.is_empty() {
        out.push_str(&format!(
            r#"<span class="publication-authors">{}</span>"#,
            html::escape(&publication.authors),
        ));
    }

    if let Some(venue) = publication.venue_line() {
        out.push_str(&format!(
            r#"<span class="publication-venue">{}</span>"#,
            html::escape(venue),
        ));
    }

    let links: Vec<String> = LINK_FIELDS
        .iter()
        .filter_map(|(label, get)| {
            get(publication).map(|href| {
                format!(
                    r#"<a href="{}" target="_blank" rel="noopener">{}</a>"#,
                    html::escape(href),
                    label,
                )
            })
        })
        .collect();

    if !links.is_empty() {
        out.push_str(&format!(
            r#"<span class="publication-links">{}</span>"#,
            links.join(" "),
        ));
    }

    out.push_str("</div></div>");
    out
}
