//! Table-of-contents generation
//!
//! Scans a rendered document for level-2/level-3 headings, assigns each the
//! positional anchor `section-<index>` (zero-based, document order), and
//! builds a linked outline. The generated blog pages carry a small script
//! that keeps the outline highlight in sync with the reading position; it is
//! a scroll-event subscription (passive, best-effort), not a timer.

use crate::helpers::html;

/// One outline entry
#[derive(Debug, Clone, PartialEq)]
pub struct TocEntry {
    /// Anchor id, `section-<index>`
    pub id: String,
    pub level: u8,
    /// Heading text, tags stripped
    pub text: String,
}

/// Rewrite headings with positional `section-<index>` ids and collect the
/// outline entries in document order.
pub fn assign_anchors(content: &str, min_level: u8, max_level: u8) -> (String, Vec<TocEntry>) {
    let mut out = String::with_capacity(content.len() + 64);
    let mut entries = Vec::new();
    let mut rest = content;

    while let Some(pos) = rest.find("<h") {
        let (before, tail) = rest.split_at(pos);
        out.push_str(before);

        let level = match tail[2..].chars().next().and_then(|c| c.to_digit(10)) {
            Some(l) => l as u8,
            None => {
                out.push_str("<h");
                rest = &tail[2..];
                continue;
            }
        };

        // `<h2>` or `<h2 ...>`; anything else is not a heading tag
        let after_digit = &tail[3..];
        let is_tag = matches!(after_digit.chars().next(), Some('>') | Some(' '));
        if !is_tag || level < min_level || level > max_level {
            out.push_str(&tail[..3]);
            rest = after_digit;
            continue;
        }

        let Some(open_len) = after_digit.find('>') else {
            out.push_str(tail);
            rest = "";
            break;
        };
        let close_tag = format!("</h{}>", level);
        let Some(inner_len) = after_digit[open_len + 1..].find(&close_tag) else {
            out.push_str(&tail[..3]);
            rest = after_digit;
            continue;
        };

        let attrs = &after_digit[..open_len];
        let inner = &after_digit[open_len + 1..open_len + 1 + inner_len];
        let id = format!("section-{}", entries.len());

        out.push_str(&format!(r#"<h{} id="{}"{}>"#, level, id, attrs));
        out.push_str(inner);
        out.push_str(&close_tag);

        entries.push(TocEntry {
            id,
            level,
            text: html::strip_html(inner),
        });

        rest = &after_digit[open_len + 1 + inner_len + close_tag.len()..];
    }
    out.push_str(rest);

    (out, entries)
}

/// Build the linked outline list for the collected entries
pub fn outline(entries: &[TocEntry]) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let mut html_out = String::from(r#"<ol class="toc">"#);
    for entry in entries {
        html_out.push_str(&format!(
            r##"<li class="toc-item toc-level-{}"><a class="toc-link" href="#{}"><span class="toc-text">{}</span></a></li>"##,
            entry.level,
            entry.id,
            html::escape(&entry.text)
        ));
    }
    html_out.push_str("</ol>");
    html_out
}

/// Scroll-spy script injected before `</body>` on pages with an outline.
///
/// Highlights the outline entry whose heading was last scrolled past
/// `offset` viewport units; re-evaluated on every scroll event.
pub fn scroll_spy_script(offset: u32) -> String {
    format!(
        r#"<script>
(function() {{
    var offset = {offset};
    var headings = Array.prototype.slice.call(
        document.querySelectorAll('[id^="section-"]'));
    var links = Array.prototype.slice.call(
        document.querySelectorAll('.toc-link'));
    if (!headings.length || !links.length) return;
    function highlight() {{
        var current = null;
        headings.forEach(function(h) {{
            if (h.getBoundingClientRect().top <= offset) current = h.id;
        }});
        links.forEach(function(l) {{
            l.classList.toggle('active', l.getAttribute('href') === '#' + current);
        }});
    }}
    window.addEventListener('scroll', highlight, {{ passive: true }});
    highlight();
}})();
</script>"#
    )
}
