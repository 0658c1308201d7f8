//! Profile card formatter

use crate::config::SiteConfig;
use crate::content::Profile;
use crate::helpers::{html, url};
use crate::markdown;

/// Format the profile card as a single fragment
pub fn render(config: &SiteConfig, profile: &Profile) -> String {
    let mut out = String::from(r#"<div class="profile-card">"#);

    if let Some(avatar) = profile.avatar.as_deref() {
        out.push_str(&format!(
            r#"<img class="profile-avatar" src="{}" alt="{}">"#,
            url::url_for(config, avatar),
            html::escape(&profile.name),
        ));
    }

    out.push_str(&format!(
        r#"<h1 class="profile-name">{}</h1>"#,
        html::escape(&profile.name),
    ));

    if !profile.tagline.is_empty() {
        out.push_str(&format!(
            r#"<p class="profile-tagline">{}</p>"#,
            html::escape(&profile.tagline),
        ));
    }

    if !profile.bio.is_empty() {
        out.push_str(&format!(
            r#"<div class="profile-bio">{}</div>"#,
            markdown::render_document(&profile.bio),
        ));
    }

    if !profile.links.is_empty() {
        out.push_str(r#"<ul class="profile-links">"#);
        for link in &profile.links {
            out.push_str(&format!(
                r#"<li><a href="{}" target="_blank" rel="noopener">{}</a></li>"#,
                html::escape(&link.url),
                html::escape(&link.label),
            ));
        }
        out.push_str("</ul>");
    }

    out.push_str("</div>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ProfileLink;

    #[test]
    fn test_profile_card() {
        let config = SiteConfig::default();
        let profile = Profile {
            name: "Jane Doe".to_string(),
            tagline: "Researcher".to_string(),
            bio: "I study **interesting** things.".to_string(),
            avatar: Some("images/me.jpg".to_string()),
            links: vec![ProfileLink {
                label: "GitHub".to_string(),
                url: "https://github.com/janedoe".to_string(),
            }],
        };

        let card = render(&config, &profile);
        assert!(card.contains("Jane Doe"));
        assert!(card.contains(r#"src="/images/me.jpg""#));
        assert!(card.contains("<strong>interesting</strong>"));
        assert!(card.contains("GitHub"));
    }
}
