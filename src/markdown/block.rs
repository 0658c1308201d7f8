//! Block-level document parsing and HTML emission
//!
//! A document is split on blank-line boundaries into chunks. Heading lines
//! (`#`, `##`, `###` plus a space, at line start) become heading blocks; the
//! remaining line runs become paragraphs, unless the run already begins with
//! a block-level tag (heading, figure, list, or a closing tag), in which
//! case it is emitted without a wrapper. The wrap decision is made on the
//! source text, before inline HTML is emitted.

use super::inline::{self, Span};
use crate::content::frontmatter;

/// One block of a parsed document
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: u8, spans: Vec<Span> },
    Paragraph { spans: Vec<Span> },
    /// A run that already starts with a block-level tag; inline markers
    /// inside it are still formatted, but no paragraph wrapper is added
    Raw { spans: Vec<Span> },
}

/// Convert a full Markdown document (optional leading front-matter included)
/// to HTML.
pub fn render_document(markdown: &str) -> String {
    let body = frontmatter::strip(markdown);
    let blocks = parse(body);

    let mut out = String::with_capacity(body.len());
    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        match block {
            Block::Heading { level, spans } => {
                out.push_str(&format!("<h{}>", level));
                inline::emit(spans, &mut out);
                out.push_str(&format!("</h{}>", level));
            }
            Block::Paragraph { spans } => {
                out.push_str("<p>");
                inline::emit(spans, &mut out);
                out.push_str("</p>");
            }
            Block::Raw { spans } => {
                inline::emit(spans, &mut out);
            }
        }
    }
    out
}

/// Parse a document body (front-matter already removed) into blocks
pub fn parse(body: &str) -> Vec<Block> {
    let mut blocks = Vec::new();

    for chunk in split_chunks(body) {
        let mut run: Vec<&str> = Vec::new();

        for line in chunk.lines() {
            if let Some((level, rest)) = heading_line(line) {
                flush_run(&mut run, &mut blocks);
                blocks.push(Block::Heading {
                    level,
                    spans: inline::parse(rest),
                });
            } else {
                run.push(line);
            }
        }
        flush_run(&mut run, &mut blocks);
    }

    blocks
}

/// Split a body into chunks separated by one or more blank lines
fn split_chunks(body: &str) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current = String::new();

    for line in body.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
            }
        } else {
            if !current.is_empty() {
                current.push('\n');
            }
            current.push_str(line);
        }
    }
    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

fn flush_run(run: &mut Vec<&str>, blocks: &mut Vec<Block>) {
    if run.is_empty() {
        return;
    }
    let text = run.join("\n");
    run.clear();

    let spans = inline::parse(&text);
    if starts_with_block_tag(&text) {
        blocks.push(Block::Raw { spans });
    } else {
        blocks.push(Block::Paragraph { spans });
    }
}

/// Heading rule: one to three `#` at line start, followed by a space
fn heading_line(line: &str) -> Option<(u8, &str)> {
    let hashes = line.bytes().take_while(|&b| b == b'#').count();
    if !(1..=3).contains(&hashes) {
        return None;
    }
    let rest = line[hashes..].strip_prefix(' ')?;
    Some((hashes as u8, rest))
}

/// True when a run already begins with a block-level tag
fn starts_with_block_tag(text: &str) -> bool {
    let text = text.trim_start();

    if text.starts_with("</") {
        return true;
    }

    // <h1> .. <h6>
    if let Some(rest) = text.strip_prefix("<h") {
        if rest
            .chars()
            .next()
            .map(|c| c.is_ascii_digit())
            .unwrap_or(false)
        {
            return true;
        }
    }

    ["<figure", "<ul", "<ol", "<li"]
        .iter()
        .any(|tag| text.starts_with(tag))
}
