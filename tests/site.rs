//! End-to-end generation over a temporary site

use std::fs;
use std::path::Path;

use folio_rs::Folio;

fn write(dir: &Path, name: &str, body: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, body).unwrap();
}

fn build_site(dir: &Path) {
    write(
        dir,
        "site.yml",
        r#"
title: Jane Doe
subtitle: notes and papers
author: Jane Doe
url: https://janedoe.example.com
"#,
    );

    write(
        dir,
        "content/profile.yml",
        r#"
name: Jane Doe
tagline: Researcher
bio: |
  I work on **rendering pipelines**.
links:
  - label: GitHub
    url: https://github.com/janedoe
"#,
    );

    write(
        dir,
        "content/timeline.yml",
        r#"
- start_date: "2020"
  end_date: "2021"
  description: Research intern
  organization: Old Lab
- start_date: "2022"
  end_date: present
  description: Scientist
  organization: New Lab
  url: https://newlab.example.com
- start_date: "2021"
  end_date: "2022"
  description: Engineer
  organization: Mid Corp
"#,
    );

    write(
        dir,
        "content/publications.yml",
        r#"
- title: A Study of Rendering
  authors: J. Doe, A. Nother
  conference: SIGGRAPH 2023
  paper: https://example.com/paper.pdf
  code: https://github.com/janedoe/study
"#,
    );

    write(
        dir,
        "content/blogs/blogs.yaml",
        r#"
- id: hello-world-2024
  title: Hello World
  date: "2024-02-01"
  excerpt: A first post.
  content_file: blogs/hello-world-2024.json
- id: older-post-2023
  title: Older Post
  date: "2023-06-01"
  excerpt: An older post.
  markdown_file: blogs/older-post.md
"#,
    );

    write(
        dir,
        "content/blogs/hello-world-2024.json",
        r#"{"title": "Hello World", "date": "2024-02-01", "content": "intro paragraph\n\n## Setup\n\nsome text\n\n### Details\n\nmore text"}"#,
    );

    write(
        dir,
        "content/blogs/older-post.md",
        "---\ntitle: Older Post\ndate: 2023-06-01\n---\n\nJust one paragraph, no headings.\n",
    );

    // media.yml is deliberately missing: the section must fail in isolation

    write(dir, "content/images/logo.png", "not really a png");
}

#[tokio::test]
async fn test_generate_full_site() {
    let tmp = tempfile::tempdir().unwrap();
    build_site(tmp.path());

    let folio = Folio::new(tmp.path()).unwrap();
    folio.generate().await.unwrap();

    let index = fs::read_to_string(tmp.path().join("public/index.html")).unwrap();

    // profile rendered with inline markdown in the bio
    assert!(index.contains("Jane Doe"));
    assert!(index.contains("<strong>rendering pipelines</strong>"));

    // timeline sorted newest first: 2022, 2021, 2020
    let new_lab = index.find("New Lab").unwrap();
    let mid_corp = index.find("Mid Corp").unwrap();
    let old_lab = index.find("Old Lab").unwrap();
    assert!(new_lab < mid_corp);
    assert!(mid_corp < old_lab);
    assert!(index.contains("2022 - Present"));

    // publications card with link row
    assert!(index.contains("A Study of Rendering"));
    assert!(index.contains("SIGGRAPH 2023"));
    assert!(index.contains(">Paper</a>"));

    // blog index newest first
    let hello = index.find("Hello World").unwrap();
    let older = index.find("Older Post").unwrap();
    assert!(hello < older);

    // missing media file degrades to the static message, nothing else broke
    assert!(index.contains("Error loading content."));
}

#[tokio::test]
async fn test_generate_blog_pages() {
    let tmp = tempfile::tempdir().unwrap();
    build_site(tmp.path());

    let folio = Folio::new(tmp.path()).unwrap();
    folio.generate().await.unwrap();

    // post with headings: anchors, outline, scroll-spy
    let post = fs::read_to_string(
        tmp.path()
            .join("public/blog/hello-world-2024/index.html"),
    )
    .unwrap();
    assert!(post.contains(r#"<h2 id="section-0">Setup</h2>"#));
    assert!(post.contains(r#"<h3 id="section-1">Details</h3>"#));
    assert!(post.contains(r##"href="#section-0""##));
    assert!(post.contains("addEventListener('scroll'"));
    assert!(post.contains("February 1, 2024"));

    // post without headings: outline container hidden, no scroll-spy
    let plain = fs::read_to_string(
        tmp.path().join("public/blog/older-post-2023/index.html"),
    )
    .unwrap();
    assert!(plain.contains(r#"id="blog-toc" hidden"#));
    assert!(!plain.contains("addEventListener('scroll'"));
    assert!(plain.contains("Just one paragraph, no headings."));
}

#[tokio::test]
async fn test_assets_copied_and_clean() {
    let tmp = tempfile::tempdir().unwrap();
    build_site(tmp.path());

    let folio = Folio::new(tmp.path()).unwrap();
    folio.generate().await.unwrap();

    // images copied through, content files not
    assert!(tmp.path().join("public/images/logo.png").exists());
    assert!(!tmp.path().join("public/timeline.yml").exists());
    assert!(!tmp.path().join("public/blogs/older-post.md").exists());

    folio.clean().unwrap();
    assert!(!tmp.path().join("public").exists());
}
