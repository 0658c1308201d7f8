//! Generate the static site

use anyhow::Result;

use crate::render::{Renderer, SectionState};
use crate::Folio;

/// Render every page into the public directory
pub async fn run(folio: &Folio) -> Result<()> {
    let start = std::time::Instant::now();

    let renderer = Renderer::new(folio);
    let reports = renderer.render_site().await?;

    let rendered = reports
        .iter()
        .filter(|r| r.state == SectionState::Rendered)
        .count();
    let failed: Vec<&str> = reports
        .iter()
        .filter(|r| r.state == SectionState::Failed)
        .map(|r| r.name)
        .collect();
    let skipped = reports
        .iter()
        .filter(|r| r.state == SectionState::Unloaded)
        .count();

    if failed.is_empty() {
        tracing::info!("Rendered {} sections ({} skipped)", rendered, skipped);
    } else {
        tracing::warn!(
            "Rendered {} sections, failed: {}",
            rendered,
            failed.join(", ")
        );
    }

    let duration = start.elapsed();
    tracing::info!("Generated in {:.2}s", duration.as_secs_f64());

    Ok(())
}
