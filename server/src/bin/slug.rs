use anyhow::Result;
use clap::{Parser, Subcommand};

use server::config::SlugSettings;
use server::db;
use server::slug::{CreateSlugInput, create_slug, fetch_slug};
use server::store::SqliteStore;

#[derive(Parser)]
#[command(name = "slug")]
#[command(about = "Slug server admin CLI - Manage slug mappings", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a slug mapping for a deployment URL
    Create {
        /// Display name the slug is derived from
        name: String,
        /// Apps Script web app deployment URL
        url: String,
    },
    /// Look up a slug and print the stored record
    Get {
        /// Slug key to look up
        slug: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let (pool, _db_root) = db::init_pool().await?;
    let store = SqliteStore::new(pool);
    let settings = SlugSettings::default();

    match cli.command {
        Commands::Create { name, url } => {
            let created = create_slug(&store, CreateSlugInput { name, url }, &settings).await?;
            println!("✓ Slug created successfully!");
            println!("  Slug: {}", created.key);
            println!("  Name: {}", created.record.name);
            println!("  URL:  {}", created.record.url);
        }
        Commands::Get { slug } => {
            let record = fetch_slug(&store, &slug).await?;
            println!("  Name:    {}", record.name);
            println!("  URL:     {}", record.url);
            println!("  Created: {}", record.created_at.to_rfc3339());
        }
    }

    Ok(())
}
