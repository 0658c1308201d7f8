//! folio-rs: a static personal portfolio and blog site generator
//!
//! This crate loads YAML/JSON content descriptions (profile, timeline,
//! publications, blog index, media embeds), converts embedded Markdown to
//! HTML, and injects the resulting markup into named render targets in the
//! embedded shell pages.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod markdown;
pub mod render;
pub mod server;

use anyhow::Result;
use std::path::Path;

/// The main folio application handle.
///
/// Owns the site configuration and directory layout. The configuration is
/// loaded once here and passed explicitly to everything that needs it; there
/// is no module-level configuration state.
#[derive(Clone)]
pub struct Folio {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: std::path::PathBuf,
    /// Content directory (data files, blog posts, images)
    pub content_dir: std::path::PathBuf,
    /// Public (output) directory
    pub public_dir: std::path::PathBuf,
}

impl Folio {
    /// Create a new Folio instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("site.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let content_dir = base_dir.join(&config.content_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            content_dir,
            public_dir,
        })
    }

    /// Generate the static site
    pub async fn generate(&self) -> Result<()> {
        commands::generate::run(self).await
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
