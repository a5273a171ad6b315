//! CLI administration tool for url-shortener.
//!
//! Works directly against the SQLite store, without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Save a URL under a generated alias
//! cargo run --bin admin -- url add https://example.com
//!
//! # Save under a chosen alias
//! cargo run --bin admin -- url add https://example.com --alias ex1
//!
//! # Resolve, list and delete
//! cargo run --bin admin -- url get ex1
//! cargo run --bin admin -- url list --limit 20
//! cargo run --bin admin -- url delete ex1
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `STORAGE_PATH`: SQLite database path (overridden by `--storage-path`)

use url_shortener::api::dto::save::SaveRequest;
use url_shortener::api::validation::ValidatedRequest;
use url_shortener::domain::repositories::{StorageError, UrlStorage};
use url_shortener::infrastructure::persistence::SqliteUrlStorage;
use url_shortener::utils::alias_generator::generate_alias;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing url-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// SQLite database path or `sqlite:` URL
    #[arg(long, env = "STORAGE_PATH", default_value = "./storage.db")]
    storage_path: String,

    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage short links
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Short link subcommands.
#[derive(Subcommand)]
enum UrlAction {
    /// Save a URL, generating an alias unless one is given
    Add {
        /// Target URL
        url: String,

        /// Alias to store the URL under
        #[arg(short, long)]
        alias: Option<String>,
    },

    /// Print the URL stored under an alias
    Get {
        alias: String,
    },

    /// Delete an alias
    Delete {
        alias: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List stored links
    List {
        /// Maximum number of rows to show
        #[arg(short, long, default_value_t = 50)]
        limit: i64,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let storage = SqliteUrlStorage::connect(&cli.storage_path, 1)
        .await
        .with_context(|| format!("Failed to open storage at {}", cli.storage_path))?;

    match cli.command {
        Commands::Url { action } => handle_url_action(action, &storage).await?,
        Commands::Db { action } => handle_db_action(action, &storage, &cli.storage_path).await?,
    }

    Ok(())
}

/// Dispatches short link commands.
async fn handle_url_action(action: UrlAction, storage: &SqliteUrlStorage) -> Result<()> {
    match action {
        UrlAction::Add { url, alias } => add_url(storage, url, alias).await,
        UrlAction::Get { alias } => get_url(storage, &alias).await,
        UrlAction::Delete { alias, yes } => delete_url(storage, &alias, yes).await,
        UrlAction::List { limit } => list_urls(storage, limit).await,
    }
}

async fn add_url(storage: &SqliteUrlStorage, url: String, alias: Option<String>) -> Result<()> {
    let request = SaveRequest {
        url: Some(url.clone()),
        alias: alias.filter(|a| !a.is_empty()),
    };
    if let Err(message) = request.check() {
        println!("{}", format!("❌ {}", message).red());
        return Ok(());
    }

    let alias = request.alias.unwrap_or_else(generate_alias);

    match storage.save_url(&url, &alias).await {
        Ok(id) => {
            println!("{}", "✅ Saved".green().bold());
            println!("  ID:    {}", id);
            println!("  Alias: {}", alias.bright_yellow().bold());
            println!("  URL:   {}", url.cyan());
            Ok(())
        }
        Err(StorageError::AlreadyExists) => {
            println!("{}", format!("❌ Alias '{}' is already taken", alias).red());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to save url: {}", e)),
    }
}

async fn get_url(storage: &SqliteUrlStorage, alias: &str) -> Result<()> {
    match storage.get_url(alias).await {
        Ok(url) => {
            println!("{}", url);
            Ok(())
        }
        Err(StorageError::NotFound) => {
            println!("{}", format!("Alias '{}' not found", alias).yellow());
            Ok(())
        }
        Err(e) => Err(anyhow::anyhow!("Failed to get url: {}", e)),
    }
}

/// Deletes an alias after confirmation (unless `--yes`).
async fn delete_url(storage: &SqliteUrlStorage, alias: &str, skip_confirm: bool) -> Result<()> {
    let url = match storage.get_url(alias).await {
        Ok(url) => url,
        Err(StorageError::NotFound) => {
            println!("{}", format!("Alias '{}' not found", alias).yellow());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Failed to get url: {}", e)),
    };

    println!("  Alias: {}", alias.bright_yellow());
    println!("  URL:   {}", url.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this alias?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    storage
        .delete_url(alias)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete alias: {}", e))?;

    println!("{}", "✅ Deleted".green().bold());

    Ok(())
}

/// Lists stored links.
///
/// # Output Format
///
/// ```text
///   ID     Alias          URL
///   ──────────────────────────────────────────────
///   1      ex1            https://example.com
/// ```
async fn list_urls(storage: &SqliteUrlStorage, limit: i64) -> Result<()> {
    let links = storage
        .list(limit)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<6} {:<14} {}",
        "ID".bright_white().bold(),
        "Alias".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for link in &links {
        println!("  {:<6} {:<14} {}", link.id, link.alias, link.target_url);
    }

    let total = storage
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

    println!();
    println!("  Showing {} of {}", links.len(), total);

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(
    action: DbAction,
    storage: &SqliteUrlStorage,
    storage_path: &str,
) -> Result<()> {
    match action {
        DbAction::Check => {
            storage
                .ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            let total = storage
                .count()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to count links: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  Path:  {}", storage_path.cyan());
            println!("  Links: {}", total);
        }
    }

    Ok(())
}
