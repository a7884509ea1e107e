//! CareFinder command line utilities.
//!
//! Runs the same lookup pipeline as the map feed service against a provider
//! database from the terminal: classify the location, build the bounded
//! filter set, search, and print the results as a listing or as the exact
//! feed JSON.

use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use carefinder_lib::{format_feed, FeedResponse, FilterSpec, MapFeedQuery, ProviderStore};

/// Database URL used when neither `--database-url` nor `DATABASE_URL` is set.
const DEFAULT_DATABASE_URL: &str = "sqlite:carefinder.db?mode=rwc";

#[derive(Parser, Debug)]
#[command(author, version, about = "CareFinder provider directory utilities")]
struct Cli {
    /// Override the provider database URL.
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the provider directory and print matching facilities.
    Search {
        /// Free-text search over organization names.
        #[arg(long)]
        q: Option<String>,
        /// Provider category filter.
        #[arg(long)]
        category: Option<String>,
        /// Postal code or "City, ST" location filter.
        #[arg(long)]
        location: Option<String>,
        /// Maximum number of results (clamped to 1..=200).
        #[arg(long)]
        limit: Option<String>,
        /// Print the raw map feed JSON instead of a listing.
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let database_url = cli
        .database_url
        .clone()
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

    match cli.command {
        Command::Search {
            q,
            category,
            location,
            limit,
            json,
        } => {
            let query = MapFeedQuery {
                q,
                category,
                location,
                limit,
            };
            handle_search(&database_url, query, json).await
        }
    }
}

async fn handle_search(database_url: &str, query: MapFeedQuery, json: bool) -> Result<()> {
    let started = Instant::now();

    let store = ProviderStore::connect(database_url, 1)
        .await
        .with_context(|| format!("failed to open provider database at {database_url}"))?;
    store
        .ping()
        .await
        .context("provider database is unreachable")?;
    store
        .init_schema()
        .await
        .context("failed to prepare provider schema")?;

    let filter = FilterSpec::build(&query);
    let records = store
        .search(&filter)
        .await
        .context("provider search failed")?;
    let items = format_feed(&records);

    if json {
        let generated_in = format!("{:.4}", started.elapsed().as_secs_f64());
        let response = FeedResponse::ok(items, generated_in);
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if items.is_empty() {
        println!("No providers matched the given filters.");
        return Ok(());
    }

    for item in &items {
        println!("{}. {}", item.id, item.title);
        println!("   {}", item.summary);
        if !item.address.is_empty() {
            println!("   {}", item.address);
        }
        println!("   ({}, {})", item.latitude, item.longitude);
    }

    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
