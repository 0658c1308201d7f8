//! Host pages and render targets
//!
//! A [`HostPage`] wraps one of the embedded shell pages. Render targets are
//! elements with a stable `id` attribute; injection replaces a target's
//! inner content with the caller's fragments. A missing target is never an
//! error: the operation reports `false` and the rest of the page is
//! untouched.

/// A shell page with named render targets
#[derive(Debug, Clone)]
pub struct HostPage {
    html: String,
}

/// Byte offsets of one located target element
struct Target {
    /// End of the opening tag (after `>`)
    open_end: usize,
    /// Start of the closing tag
    close_start: usize,
}

impl HostPage {
    /// Wrap a shell page
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }

    /// True when the page has an element with this id
    pub fn contains(&self, target: &str) -> bool {
        self.locate(target).is_some()
    }

    /// Replace the target's inner content. Returns false when the target is
    /// absent.
    pub fn inject(&mut self, target: &str, content: &str) -> bool {
        match self.locate(target) {
            Some(t) => {
                self.html
                    .replace_range(t.open_end..t.close_start, content);
                true
            }
            None => false,
        }
    }

    /// Mark the target element hidden. Returns false when the target is
    /// absent.
    pub fn hide(&mut self, target: &str) -> bool {
        match self.locate(target) {
            Some(t) => {
                // insert before the closing `>` of the opening tag
                self.html.insert_str(t.open_end - 1, " hidden");
                true
            }
            None => false,
        }
    }

    /// The assembled page
    pub fn into_html(self) -> String {
        self.html
    }

    pub fn as_html(&self) -> &str {
        &self.html
    }

    /// Find the element carrying `id="<target>"`
    fn locate(&self, target: &str) -> Option<Target> {
        let needle = format!(r#"id="{}""#, target);
        let id_pos = self.html.find(&needle)?;

        // Opening tag surrounding the id attribute
        let open_start = self.html[..id_pos].rfind('<')?;
        let tag_name: String = self.html[open_start + 1..]
            .chars()
            .take_while(|c| c.is_ascii_alphanumeric())
            .collect();
        if tag_name.is_empty() {
            return None;
        }
        let open_end = id_pos + self.html[id_pos..].find('>')? + 1;

        // Matching closing tag, skipping nested elements of the same name
        let open_pat = format!("<{}", tag_name);
        let close_pat = format!("</{}>", tag_name);
        let mut depth = 1usize;
        let mut i = open_end;

        loop {
            let close = self.html[i..].find(&close_pat)?;
            match self.html[i..i + close].find(&open_pat) {
                Some(open) => {
                    // a nested element opens before this close; re-scan from
                    // past the nested opening tag
                    depth += 1;
                    i += open + open_pat.len();
                }
                None => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(Target {
                            open_end,
                            close_start: i + close,
                        });
                    }
                    i += close + close_pat.len();
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHELL: &str = r#"<html><body>
<ul id="timeline-list"></ul>
<div id="blog-list"><p>placeholder</p></div>
<nav id="blog-toc"></nav>
</body></html>"#;

    #[test]
    fn test_inject_replaces_content() {
        let mut page = HostPage::new(SHELL);
        assert!(page.inject("timeline-list", "<li>a</li><li>b</li>"));
        let html = page.into_html();
        assert!(html.contains(r#"<ul id="timeline-list"><li>a</li><li>b</li></ul>"#));
    }

    #[test]
    fn test_inject_discards_placeholder() {
        let mut page = HostPage::new(SHELL);
        assert!(page.inject("blog-list", "<article>x</article>"));
        let html = page.into_html();
        assert!(!html.contains("placeholder"));
        assert!(html.contains(r#"<div id="blog-list"><article>x</article></div>"#));
    }

    #[test]
    fn test_missing_target_is_silent() {
        let mut page = HostPage::new(SHELL);
        assert!(!page.inject("no-such-target", "<p>x</p>"));
        assert_eq!(page.into_html(), SHELL);
    }

    #[test]
    fn test_nested_same_tag() {
        let mut page = HostPage::new(r#"<div id="outer"><div>inner</div></div><div>after</div>"#);
        assert!(page.inject("outer", "replaced"));
        assert_eq!(
            page.into_html(),
            r#"<div id="outer">replaced</div><div>after</div>"#
        );
    }

    #[test]
    fn test_hide() {
        let mut page = HostPage::new(SHELL);
        assert!(page.hide("blog-toc"));
        assert!(page.into_html().contains(r#"<nav id="blog-toc" hidden>"#));
    }

    #[test]
    fn test_contains() {
        let page = HostPage::new(SHELL);
        assert!(page.contains("timeline-list"));
        assert!(!page.contains("profile"));
    }
}
