//! List site content

use anyhow::Result;

use crate::content::{BlogSummary, ContentStore, MediaEntry, Publication, TimelineEntry};
use crate::Folio;

/// List site content by type
pub async fn run(folio: &Folio, content_type: &str) -> Result<()> {
    let store = ContentStore::new(&folio.content_dir);
    let sections = &folio.config.sections;

    match content_type {
        "blog" | "blogs" => {
            let summaries: Vec<BlogSummary> = store.fetch(&sections.blogs).await?;
            println!("Blog posts ({}):", summaries.len());
            for summary in summaries {
                println!("  {} - {} [{}]", summary.date, summary.title, summary.id);
            }
        }
        "timeline" => {
            let entries: Vec<TimelineEntry> = store.fetch(&sections.timeline).await?;
            println!("Timeline entries ({}):", entries.len());
            for entry in entries {
                println!(
                    "  {} - {}  {}",
                    entry.start_date,
                    entry.end_date.as_deref().unwrap_or(""),
                    entry.organization.as_deref().unwrap_or("-"),
                );
            }
        }
        "publication" | "publications" => {
            let publications: Vec<Publication> = store.fetch(&sections.publications).await?;
            println!("Publications ({}):", publications.len());
            for publication in publications {
                println!(
                    "  {} [{}]",
                    publication.title,
                    publication.venue_line().unwrap_or("-"),
                );
            }
        }
        "media" => {
            let entries: Vec<MediaEntry> = store.fetch(&sections.media).await?;
            println!("Media entries ({}):", entries.len());
            for entry in entries {
                println!("  {} [{}]", entry.title, entry.video_id);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: blogs, timeline, publications, media",
                content_type
            );
        }
    }

    Ok(())
}
