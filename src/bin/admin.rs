//! CLI administration tool for slug-shortener.
//!
//! Creates and inspects links and checks the database without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a link (same validation as POST /url)
//! cargo run --bin admin -- link create https://example.com --slug promo
//!
//! # Show where a slug points
//! cargo run --bin admin -- link show promo
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection / apply migrations
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db migrate
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`slug_shortener::config`].

use slug_shortener::application::services::LinkService;
use slug_shortener::config::{self, Config};
use slug_shortener::infrastructure::persistence::PgLinkRepository;
use slug_shortener::server::connect_pool;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing slug-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Create a new short link
    Create {
        /// Destination URL
        url: String,

        /// Custom slug (generated if omitted)
        #[arg(short, long)]
        slug: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show the destination of a slug
    Show {
        /// Slug to look up (matched exactly)
        slug: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Link { action } => handle_link_action(action, &config, &pool).await?,
        Commands::Stats => handle_stats(&config, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

fn link_service(config: &Config, pool: &PgPool) -> LinkService {
    let repo = Arc::new(PgLinkRepository::new(Arc::new(pool.clone())));
    LinkService::new(repo, config.service_domain.clone())
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction, config: &Config, pool: &PgPool) -> Result<()> {
    let service = link_service(config, pool);

    match action {
        LinkAction::Create { url, slug, yes } => create_link(&service, url, slug, yes).await?,
        LinkAction::Show { slug } => show_link(&service, &slug).await?,
    }

    Ok(())
}

/// Creates a link after an optional confirmation prompt.
///
/// Runs the same pipeline as `POST /url`, so validation and conflict
/// errors read the same as over HTTP.
async fn create_link(
    service: &LinkService,
    url: String,
    slug: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🔗 Create Link".bright_blue().bold());
    println!();
    println!("  URL:  {}", url.cyan());
    println!(
        "  Slug: {}",
        slug.as_deref()
            .map(|s| s.cyan())
            .unwrap_or_else(|| "(generated)".bright_black())
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this link?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let link = service
        .create(&url, slug.as_deref())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!("{}", "✅ Link created".green().bold());
    println!("  ID:   {}", link.id.to_string().bright_black());
    println!("  Slug: {}", link.slug.bright_yellow().bold());
    println!();

    Ok(())
}

/// Prints the destination of a slug.
async fn show_link(service: &LinkService, slug: &str) -> Result<()> {
    let link = service
        .resolve(slug)
        .await
        .with_context(|| format!("No link with slug '{}'", slug))?;

    println!("  Slug:    {}", link.slug.cyan());
    println!("  URL:     {}", link.url.bright_white());
    println!(
        "  Created: {}",
        link.created_at
            .format("%Y-%m-%d %H:%M")
            .to_string()
            .bright_black()
    );
    println!();

    Ok(())
}

/// Displays the number of stored links.
async fn handle_stats(config: &Config, pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count = link_service(config, pool)
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    println!(
        "  Links: {}",
        links_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
        DbAction::Migrate => {
            println!("{}", "🛠  Applying migrations...".bright_blue());

            sqlx::migrate!("./migrations")
                .run(pool)
                .await
                .context("Failed to run migrations")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
    }

    Ok(())
}
