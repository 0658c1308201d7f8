//! Convert Markdown blog posts into JSON content files
//!
//! A post is authored as Markdown with front-matter. Converting it produces
//! the `<id>.json` content file the renderer consumes and, on request,
//! upserts the post into the `blogs.yaml` index, which is kept sorted with
//! the newest post first.

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

use crate::content::{BlogSummary, FrontMatter};
use crate::helpers::date;
use crate::Folio;

/// Maximum excerpt length in characters
const EXCERPT_LENGTH: usize = 200;

/// Index file name inside the blogs directory
const INDEX_FILENAME: &str = "blogs.yaml";

/// Convert one Markdown file, optionally updating the blog index
pub fn run(folio: &Folio, file: &Path, update_index: bool) -> Result<()> {
    let summary = convert_file(folio, file)?;

    if update_index {
        update_blog_index(&index_path(folio), summary)?;
    }

    Ok(())
}

/// Convert every Markdown file in the blogs directory and rewrite the index
pub fn convert_all(folio: &Folio) -> Result<()> {
    let blogs_dir = folio.content_dir.join(&folio.config.blogs_dir);
    let pattern = blogs_dir.join("*.md");

    let mut summaries = Vec::new();
    for entry in glob::glob(&pattern.to_string_lossy())? {
        let path = entry?;
        match convert_file(folio, &path) {
            Ok(summary) => summaries.push(summary),
            Err(e) => tracing::warn!("Skipped {:?}: {}", path, e),
        }
    }

    if summaries.is_empty() {
        anyhow::bail!("no Markdown files converted in {:?}", blogs_dir);
    }

    let count = summaries.len();
    write_index(&index_path(folio), summaries)?;
    println!("Converted {} posts", count);

    Ok(())
}

fn index_path(folio: &Folio) -> PathBuf {
    folio
        .content_dir
        .join(&folio.config.blogs_dir)
        .join(INDEX_FILENAME)
}

/// Convert one Markdown file into a JSON content file next to it.
/// Returns the index entry describing the post.
fn convert_file(folio: &Folio, file: &Path) -> Result<BlogSummary> {
    let raw = fs::read_to_string(file).with_context(|| format!("cannot read {:?}", file))?;
    let (fm, body) = FrontMatter::parse(&raw);

    let title = fm
        .title
        .clone()
        .unwrap_or_else(|| title_from_filename(file));
    let post_date = fm
        .date
        .clone()
        .unwrap_or_else(|| chrono::Local::now().format("%Y-%m-%d").to_string());
    let id = blog_id(&title, &post_date);

    let content = serde_json::json!({
        "title": title,
        "date": post_date,
        "content": body.trim(),
    });

    let json_path = file.with_file_name(format!("{}.json", id));
    fs::write(&json_path, serde_json::to_string_pretty(&content)?)
        .with_context(|| format!("cannot write {:?}", json_path))?;
    println!("Converted: {} -> {}", file.display(), json_path.display());

    // Path the renderer will fetch, relative to the content directory
    let content_file = json_path
        .strip_prefix(&folio.content_dir)
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| json_path.to_string_lossy().to_string());

    let excerpt = match fm.excerpt.as_deref() {
        Some(e) if !e.trim().is_empty() => e.to_string(),
        _ => extract_excerpt(body, EXCERPT_LENGTH),
    };

    Ok(BlogSummary {
        id,
        title,
        date: post_date,
        excerpt,
        thumbnail: fm.thumbnail.clone().filter(|t| !t.trim().is_empty()),
        content_file: Some(content_file),
        markdown_file: None,
    })
}

/// Upsert one entry into the index, keeping it sorted newest first
pub fn update_blog_index(index_path: &Path, new_entry: BlogSummary) -> Result<()> {
    let mut entries: Vec<BlogSummary> = if index_path.exists() {
        let text = fs::read_to_string(index_path)?;
        match serde_yaml::from_str(&text) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!("Unreadable blog index, rebuilding it: {}", e);
                Vec::new()
            }
        }
    } else {
        Vec::new()
    };

    match entries.iter_mut().find(|e| e.id == new_entry.id) {
        Some(existing) => {
            println!("Updated post: {}", new_entry.title);
            *existing = new_entry;
        }
        None => {
            println!("Added post: {}", new_entry.title);
            entries.push(new_entry);
        }
    }

    write_index(index_path, entries)
}

fn write_index(index_path: &Path, mut entries: Vec<BlogSummary>) -> Result<()> {
    entries.sort_by(|a, b| date::sort_key(&b.date).cmp(&date::sort_key(&a.date)));

    if let Some(parent) = index_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(index_path, serde_yaml::to_string(&entries)?)?;
    println!("Updated index: {}", index_path.display());

    Ok(())
}

/// Blog id: slugified title plus publication year
fn blog_id(title: &str, post_date: &str) -> String {
    format!("{}-{}", slug::slugify(title), date::year_of(post_date))
}

/// Fallback title derived from the file name
fn title_from_filename(file: &Path) -> String {
    let stem = file
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("untitled");

    stem.split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

lazy_static! {
    static ref TAG_RE: Regex = Regex::new(r"<[^>]+>").unwrap();
    static ref BOLD_RE: Regex = Regex::new(r"\*\*([^*]+)\*\*").unwrap();
    static ref ITALIC_RE: Regex = Regex::new(r"\*([^*]+)\*").unwrap();
    static ref HEADING_RE: Regex = Regex::new(r"(?m)^#{1,3}\s+").unwrap();
    static ref LINK_RE: Regex = Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap();
}

/// Plain-text excerpt: first paragraph with markup removed, truncated at a
/// word boundary
fn extract_excerpt(body: &str, max_length: usize) -> String {
    let text = TAG_RE.replace_all(body, "");
    let text = BOLD_RE.replace_all(&text, "$1");
    let text = ITALIC_RE.replace_all(&text, "$1");
    let text = HEADING_RE.replace_all(&text, "");
    let text = LINK_RE.replace_all(&text, "$1");

    let first_paragraph = text.split("\n\n").next().unwrap_or("").trim();

    if first_paragraph.chars().count() <= max_length {
        return first_paragraph.to_string();
    }

    let cut: String = first_paragraph.chars().take(max_length).collect();
    let cut = cut.rsplit_once(' ').map(|(head, _)| head).unwrap_or(&cut);
    format!("{}...", cut)
}
