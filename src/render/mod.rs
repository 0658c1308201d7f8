//! The content renderer
//!
//! Assembles the site pages: each section of a page fetches its content
//! description, formats it into HTML fragments, and injects them into the
//! page's render target. A section moves through
//! `Unloaded -> Fetching -> (Rendered | Failed)`; `Failed` is terminal for
//! that section only and never reaches a sibling. A page whose target id is
//! absent stays `Unloaded` and is skipped silently.

pub mod page;
pub mod toc;

mod blog;
mod media;
mod profile;
mod publications;
mod timeline;

use anyhow::Result;
use serde::de::DeserializeOwned;
use std::fs;
use walkdir::WalkDir;

use crate::content::{
    BlogSummary, ContentError, ContentStore, MediaEntry, Profile, Publication, TimelineEntry,
};
use crate::helpers::{date, html, url};
use crate::{markdown, Folio};
use page::HostPage;

const INDEX_SHELL: &str = include_str!("shell/index.html");
const BLOG_SHELL: &str = include_str!("shell/blog.html");

/// Static fragment shown in a section whose content failed to load
const ERROR_FRAGMENT: &str = r#"<p class="content-error">Error loading content.</p>"#;
/// Static fragment shown for a blog post whose body is missing
const NOT_FOUND_FRAGMENT: &str = r#"<p class="content-error">Post not found.</p>"#;

/// Lifecycle of one section on one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionState {
    /// Render target absent; nothing fetched, nothing rendered
    Unloaded,
    /// Fetch in flight
    Fetching,
    /// Fragments injected into the target
    Rendered,
    /// Load failed; the target shows a static error message
    Failed,
}

/// Final state of one section after a render pass
#[derive(Debug, Clone)]
pub struct SectionReport {
    pub name: &'static str,
    pub state: SectionState,
}

/// Result of one section loader, applied to the page once all loaders finish
struct SectionOutput {
    report: SectionReport,
    target: &'static str,
    html: Option<String>,
}

impl SectionOutput {
    fn skipped(name: &'static str, target: &'static str) -> Self {
        Self {
            report: SectionReport {
                name,
                state: SectionState::Unloaded,
            },
            target,
            html: None,
        }
    }

    fn rendered(name: &'static str, target: &'static str, html: String) -> Self {
        Self {
            report: SectionReport {
                name,
                state: SectionState::Rendered,
            },
            target,
            html: Some(html),
        }
    }

    fn failed(name: &'static str, target: &'static str) -> Self {
        Self {
            report: SectionReport {
                name,
                state: SectionState::Failed,
            },
            target,
            html: Some(ERROR_FRAGMENT.to_string()),
        }
    }
}

/// Renders the site pages from the content files
pub struct Renderer {
    folio: Folio,
    store: ContentStore,
}

impl Renderer {
    /// Create a renderer for a site
    pub fn new(folio: &Folio) -> Self {
        Self {
            folio: folio.clone(),
            store: ContentStore::new(&folio.content_dir),
        }
    }

    /// Generate every page into the public directory
    pub async fn render_site(&self) -> Result<Vec<SectionReport>> {
        fs::create_dir_all(&self.folio.public_dir)?;
        self.copy_assets()?;

        let (index_html, mut reports) = self.render_index().await;
        fs::write(self.folio.public_dir.join("index.html"), index_html)?;
        tracing::debug!("Generated index.html");

        reports.extend(self.render_posts().await?);
        Ok(reports)
    }

    /// Render the index page. Sections load concurrently and independently;
    /// a failed or skipped section never affects the others.
    async fn render_index(&self) -> (String, Vec<SectionReport>) {
        let config = &self.folio.config;
        let sections = &config.sections;
        let mut page = HostPage::new(INDEX_SHELL);

        page.inject("page-title", &html::escape(&config.title));
        page.inject("site-title", &html::escape(&config.title));
        page.inject("site-subtitle", &html::escape(&config.subtitle));
        page.inject("site-footer", &html::escape(&config.author));

        let (profile_out, timeline_out, publications_out, media_out, blogs_out) = tokio::join!(
            self.load_section::<Profile, _>("profile", "profile", &sections.profile, &page, |p| {
                profile::render(config, &p)
            }),
            self.load_section::<Vec<TimelineEntry>, _>(
                "timeline",
                "timeline-list",
                &sections.timeline,
                &page,
                |e| timeline::render(config, &e).concat(),
            ),
            self.load_section::<Vec<Publication>, _>(
                "publications",
                "publication-list",
                &sections.publications,
                &page,
                |p| publications::render(config, &p).concat(),
            ),
            self.load_section::<Vec<MediaEntry>, _>(
                "media",
                "media-list",
                &sections.media,
                &page,
                |m| media::render(config, &m).concat(),
            ),
            self.load_section::<Vec<BlogSummary>, _>(
                "blogs",
                "blog-list",
                &sections.blogs,
                &page,
                |s| blog::render_index(config, &s).concat(),
            ),
        );

        let mut reports = Vec::new();
        for output in [
            profile_out,
            timeline_out,
            publications_out,
            media_out,
            blogs_out,
        ] {
            if let Some(fragment) = &output.html {
                page.inject(output.target, fragment);
            }
            reports.push(output.report);
        }

        (page.into_html(), reports)
    }

    /// Load one section: fetch its content file and format the fragments.
    /// All failures stop here.
    async fn load_section<T, F>(
        &self,
        name: &'static str,
        target: &'static str,
        path: &str,
        page: &HostPage,
        format: F,
    ) -> SectionOutput
    where
        T: DeserializeOwned,
        F: FnOnce(T) -> String,
    {
        if !page.contains(target) {
            tracing::debug!("render target '{}' absent, skipping {} section", target, name);
            return SectionOutput::skipped(name, target);
        }

        tracing::debug!("{} section: {:?} ({})", name, SectionState::Fetching, path);
        match self.store.fetch::<T>(path).await {
            Ok(items) => SectionOutput::rendered(name, target, format(items)),
            Err(e) => {
                tracing::warn!("Failed to load {} section: {}", name, e);
                SectionOutput::failed(name, target)
            }
        }
    }

    /// Render one page per blog post. Each post isolates its own failure; a
    /// post with a missing or broken body still gets a page carrying the
    /// static fallback message.
    async fn render_posts(&self) -> Result<Vec<SectionReport>> {
        let config = &self.folio.config;

        let summaries: Vec<BlogSummary> = match self.store.fetch(&config.sections.blogs).await {
            Ok(s) => s,
            Err(e) => {
                tracing::warn!("Failed to load blog index, no post pages: {}", e);
                return Ok(vec![SectionReport {
                    name: "posts",
                    state: SectionState::Failed,
                }]);
            }
        };

        let mut rendered = 0usize;
        let mut failed = 0usize;

        for summary in &summaries {
            let page_html = match self.render_post(summary).await {
                Ok(html_out) => {
                    rendered += 1;
                    html_out
                }
                Err(e) => {
                    tracing::warn!("Failed to render post {}: {}", summary.id, e);
                    failed += 1;
                    self.fallback_post_page(summary, &e)
                }
            };

            let output_path = self
                .folio
                .public_dir
                .join(blog::post_path(&summary.id))
                .join("index.html");
            if let Some(parent) = output_path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output_path, page_html)?;
            tracing::debug!("Generated post: {:?}", output_path);
        }

        tracing::info!("Generated {} post pages ({} failed)", rendered, failed);
        Ok(vec![SectionReport {
            name: "posts",
            state: if failed == 0 {
                SectionState::Rendered
            } else {
                SectionState::Failed
            },
        }])
    }

    /// Render one blog post page: body, anchors, outline, scroll-spy
    async fn render_post(&self, summary: &BlogSummary) -> Result<String, ContentError> {
        let config = &self.folio.config;

        let body = self.store.fetch_blog_body(summary).await?;
        let content = markdown::render_document(&body);
        let (content, entries) =
            toc::assign_anchors(&content, config.toc.min_level, config.toc.max_level);

        let mut page = self.blog_page(summary);
        page.inject("blog-body", &content);
        if entries.is_empty() {
            page.hide("blog-toc");
        } else {
            page.inject("blog-toc", &toc::outline(&entries));
        }

        let mut html_out = page.into_html();
        if !entries.is_empty() {
            if let Some(pos) = html_out.rfind("</body>") {
                html_out.insert_str(pos, &toc::scroll_spy_script(config.toc.offset));
            }
        }
        Ok(html_out)
    }

    /// A post page carrying the static fallback message instead of a body
    fn fallback_post_page(&self, summary: &BlogSummary, error: &ContentError) -> String {
        let fragment = match error {
            ContentError::NotFound(_) => NOT_FOUND_FRAGMENT,
            _ => ERROR_FRAGMENT,
        };
        let mut page = self.blog_page(summary);
        page.inject("blog-body", fragment);
        page.hide("blog-toc");
        page.into_html()
    }

    /// The blog shell with the shared chrome filled in
    fn blog_page(&self, summary: &BlogSummary) -> HostPage {
        let config = &self.folio.config;
        let mut page = HostPage::new(BLOG_SHELL);

        page.inject(
            "page-title",
            &format!(
                "{} - {}",
                html::escape(&summary.title),
                html::escape(&config.title)
            ),
        );
        page.inject(
            "home-link",
            &format!(
                r#"<a href="{}">&larr; {}</a>"#,
                url::url_for(config, ""),
                html::escape(&config.title),
            ),
        );
        page.inject("site-footer", &html::escape(&config.author));
        page.inject("blog-title", &html::escape(&summary.title));
        page.inject(
            "blog-date",
            &date::format_date(&summary.date, &config.date_format),
        );
        page
    }

    /// Copy non-content assets (images, etc.) to the public directory
    fn copy_assets(&self) -> Result<()> {
        let content_dir = &self.folio.content_dir;
        if !content_dir.exists() {
            return Ok(());
        }

        for entry in WalkDir::new(content_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            // Content files are rendered, not copied
            let ext = path.extension().and_then(|e| e.to_str());
            if matches!(
                ext,
                Some("md") | Some("markdown") | Some("yml") | Some("yaml") | Some("json")
            ) {
                continue;
            }

            let relative = path.strip_prefix(content_dir)?;
            let dest = self.folio.public_dir.join(relative);

            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(path, &dest)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    fn write(dir: &Path, name: &str, body: &str) {
        let path = dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, body).unwrap();
    }

    fn site(dir: &Path) -> Folio {
        write(
            dir,
            "site.yml",
            "title: Test Site\nauthor: Tester\n",
        );
        fs::create_dir_all(dir.join("content")).unwrap();
        Folio::new(dir).unwrap()
    }

    #[tokio::test]
    async fn test_failed_section_isolated() {
        let tmp = tempfile::tempdir().unwrap();
        let folio = site(tmp.path());
        // timeline present and valid, everything else missing
        write(
            tmp.path(),
            "content/timeline.yml",
            "- start_date: '2020'\n  description: a role\n",
        );

        let renderer = Renderer::new(&folio);
        let (html_out, reports) = renderer.render_index().await;

        assert!(html_out.contains("a role"));
        let timeline = reports.iter().find(|r| r.name == "timeline").unwrap();
        assert_eq!(timeline.state, SectionState::Rendered);
        let media = reports.iter().find(|r| r.name == "media").unwrap();
        assert_eq!(media.state, SectionState::Failed);
        // failed sections degrade to the static message
        assert!(html_out.contains("Error loading content."));
    }

    #[tokio::test]
    async fn test_missing_render_target_skips_section() {
        let tmp = tempfile::tempdir().unwrap();
        let folio = site(tmp.path());
        write(
            tmp.path(),
            "content/timeline.yml",
            "- start_date: '2020'\n  description: a role\n",
        );

        let renderer = Renderer::new(&folio);
        let page = HostPage::new("<html><body><p>no targets here</p></body></html>");

        let output = renderer
            .load_section::<Vec<TimelineEntry>, _>(
                "timeline",
                "timeline-list",
                &folio.config.sections.timeline,
                &page,
                |e| timeline::render(&folio.config, &e).concat(),
            )
            .await;

        assert_eq!(output.report.state, SectionState::Unloaded);
        assert!(output.html.is_none());
    }

    #[tokio::test]
    async fn test_malformed_section_isolated() {
        let tmp = tempfile::tempdir().unwrap();
        let folio = site(tmp.path());
        write(tmp.path(), "content/timeline.yml", ": : bad : :");
        write(
            tmp.path(),
            "content/publications.yml",
            "- title: A Paper\n  authors: Someone\n",
        );

        let renderer = Renderer::new(&folio);
        let (html_out, reports) = renderer.render_index().await;

        assert!(html_out.contains("A Paper"));
        let timeline = reports.iter().find(|r| r.name == "timeline").unwrap();
        assert_eq!(timeline.state, SectionState::Failed);
    }

    #[tokio::test]
    async fn test_post_page_with_toc() {
        let tmp = tempfile::tempdir().unwrap();
        let folio = site(tmp.path());
        write(
            tmp.path(),
            "content/blogs/post.json",
            r#"{"content": "intro\n\n## One\n\ntext\n\n### Two\n\nmore"}"#,
        );

        let summary = BlogSummary {
            id: "post".into(),
            title: "Post".into(),
            date: "2024-01-01".into(),
            excerpt: String::new(),
            thumbnail: None,
            content_file: Some("blogs/post.json".into()),
            markdown_file: None,
        };

        let renderer = Renderer::new(&folio);
        let html_out = renderer.render_post(&summary).await.unwrap();

        assert!(html_out.contains(r#"<h2 id="section-0">One</h2>"#));
        assert!(html_out.contains(r#"<h3 id="section-1">Two</h3>"#));
        assert!(html_out.contains(r##"href="#section-0""##));
        assert!(html_out.contains("addEventListener('scroll'"));
    }

    #[tokio::test]
    async fn test_post_page_without_headings_hides_outline() {
        let tmp = tempfile::tempdir().unwrap();
        let folio = site(tmp.path());
        write(
            tmp.path(),
            "content/blogs/plain.json",
            r#"{"content": "just a paragraph"}"#,
        );

        let summary = BlogSummary {
            id: "plain".into(),
            title: "Plain".into(),
            date: "2024-01-01".into(),
            excerpt: String::new(),
            thumbnail: None,
            content_file: Some("blogs/plain.json".into()),
            markdown_file: None,
        };

        let renderer = Renderer::new(&folio);
        let html_out = renderer.render_post(&summary).await.unwrap();

        assert!(html_out.contains(r#"id="blog-toc" hidden"#));
        assert!(!html_out.contains("addEventListener('scroll'"));
    }

    #[tokio::test]
    async fn test_missing_post_body_gets_fallback_page() {
        let tmp = tempfile::tempdir().unwrap();
        let folio = site(tmp.path());
        write(
            tmp.path(),
            "content/blogs/blogs.yaml",
            "- id: ghost\n  title: Ghost\n  date: '2024-01-01'\n  content_file: blogs/ghost.json\n",
        );

        let renderer = Renderer::new(&folio);
        renderer.render_site().await.unwrap();

        let page_html =
            fs::read_to_string(folio.public_dir.join("blog/ghost/index.html")).unwrap();
        assert!(page_html.contains("Post not found."));
    }
}
