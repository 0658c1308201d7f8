//! Create a new Markdown blog post

use anyhow::Result;
use std::fs;

use crate::Folio;

/// Scaffold a post under the blogs directory
pub fn run(folio: &Folio, title: &str) -> Result<()> {
    let now = chrono::Local::now();
    let blogs_dir = folio.content_dir.join(&folio.config.blogs_dir);
    fs::create_dir_all(&blogs_dir)?;

    let filename = format!("{}.md", slug::slugify(title));
    let file_path = blogs_dir.join(&filename);

    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let content = format!(
        "---\ntitle: {}\ndate: {}\nexcerpt:\nthumbnail:\n---\n\n",
        title,
        now.format("%Y-%m-%d"),
    );
    fs::write(&file_path, content)?;

    println!("Created: {:?}", file_path);
    println!("Run `folio convert {} -u` when it is ready.", file_path.display());

    Ok(())
}
