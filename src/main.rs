//! CLI entry point for folio-rs

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = "0.1.0")]
#[command(about = "A static personal portfolio and blog site generator", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the static site
    #[command(alias = "g")]
    Generate,

    /// Start a local preview server
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,

        /// Disable watching and live reload
        #[arg(long)]
        r#static: bool,
    },

    /// Convert a Markdown blog post into a JSON content file
    Convert {
        /// Path to the Markdown file (omit with --all)
        file: Option<PathBuf>,

        /// Update the blog index after conversion
        #[arg(short, long)]
        update_index: bool,

        /// Convert every Markdown file in the blogs directory
        #[arg(long)]
        all: bool,
    },

    /// Create a new Markdown blog post
    New {
        /// Title of the new post
        title: String,
    },

    /// List site content
    List {
        /// Type of content to list (blogs, timeline, publications, media)
        #[arg(default_value = "blogs")]
        r#type: String,
    },

    /// Clean the public folder
    Clean,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "folio_rs=debug,info"
    } else {
        "folio_rs=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Generate => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Generating site...");
            folio.generate().await?;
            println!("Generated successfully!");
        }

        Commands::Serve { port, ip, r#static } => {
            let folio = folio_rs::Folio::new(&base_dir)?;

            // Generate first so there is something to serve
            tracing::info!("Generating site...");
            folio.generate().await?;

            tracing::info!("Starting server at http://{}:{}", ip, port);
            folio_rs::server::start(&folio, &ip, port, !r#static).await?;
        }

        Commands::Convert {
            file,
            update_index,
            all,
        } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            if all {
                folio_rs::commands::convert::convert_all(&folio)?;
            } else {
                let file = file
                    .ok_or_else(|| anyhow::anyhow!("missing Markdown file (or pass --all)"))?;
                folio_rs::commands::convert::run(&folio, &file, update_index)?;
            }
        }

        Commands::New { title } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Creating new post: {}", title);
            folio_rs::commands::new::run(&folio, &title)?;
        }

        Commands::List { r#type } => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            folio_rs::commands::list::run(&folio, &r#type).await?;
        }

        Commands::Clean => {
            let folio = folio_rs::Folio::new(&base_dir)?;
            tracing::info!("Cleaning public folder...");
            folio.clean()?;
            println!("Cleaned successfully!");
        }
    }

    Ok(())
}
