//! # Craftdex CLI
//!
//! Command-line interface for browsing a crafting catalog and growing it
//! against a combine service.
//!
//! ## Usage
//!
//! ```bash
//! # List every item in the catalog
//! craftdex items
//!
//! # Show one item with its resolved recipes
//! craftdex show Steam
//!
//! # Crawl the combine API for new items
//! craftdex discover --iterations 5
//!
//! # Download a catalog from a URL
//! craftdex fetch https://example.com/crafting_data.json
//!
//! # Summarize the catalog
//! craftdex stats --json
//! ```
//!
//! All commands read and write the catalog file given by `--catalog`
//! (default: `crafting_data.json` in the current directory).

use clap::{Parser, Subcommand};
use craftdex_catalog::{Catalog, CatalogStore, CatalogView, TextView, DEFAULT_CATALOG_FILE};
use craftdex_discover::{
    fetch_catalog, ApiConfig, Crawler, CrawlerConfig, PairApi, DEFAULT_BASE_URL,
};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "craftdex")]
#[command(author, version, about = "Browse and grow a crafting item catalog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the catalog file
    #[arg(short, long, global = true, default_value = DEFAULT_CATALOG_FILE)]
    catalog: PathBuf,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List every item in the catalog
    Items,

    /// Show one item with its resolved recipes
    Show {
        /// Item id to display
        id: String,
    },

    /// Crawl the combine service for new items
    Discover {
        /// Generate-and-sweep iterations to run
        #[arg(short, long, default_value = "3")]
        iterations: usize,

        /// Combine service root URL
        #[arg(long, default_value = DEFAULT_BASE_URL)]
        base_url: String,

        /// Delay between combine requests in milliseconds
        #[arg(long, default_value = "500")]
        delay_ms: u64,
    },

    /// Download a catalog document and save it locally
    Fetch {
        /// URL of the catalog document
        url: String,
    },

    /// Summarize the catalog
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Load the catalog or exit with an error message.
fn load_catalog(store: &CatalogStore) -> Catalog {
    match store.load() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error loading {}: {}", store.path().display(), e);
            std::process::exit(1);
        }
    }
}

fn list_items(store: &CatalogStore) {
    let catalog = load_catalog(store);
    let mut view = TextView::stdout();
    if let Err(e) = view.render_catalog(&catalog) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn show_item(store: &CatalogStore, id: &str) {
    let catalog = load_catalog(store);
    let item = match catalog.require(id) {
        Ok(item) => item,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    let mut view = TextView::stdout();
    if let Err(e) = view.show_detail(&catalog, item) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run_discover(
    store: &CatalogStore,
    iterations: usize,
    base_url: &str,
    delay_ms: u64,
    quiet: bool,
) {
    let catalog = match store.load_or_default() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error loading {}: {}", store.path().display(), e);
            std::process::exit(1);
        }
    };

    let config = ApiConfig::default()
        .with_base_url(base_url)
        .with_request_delay(Duration::from_millis(delay_ms));
    let provider = PairApi::with_config(config);

    let mut crawler = Crawler::with_config(provider, CrawlerConfig { iterations })
        .with_catalog(catalog)
        .seeded();

    if !quiet {
        crawler = crawler.with_log_callback(|level, msg| {
            println!("[{:?}] {}", level, msg);
        });
    }

    match crawler.run(Some(store)).await {
        Ok(report) => {
            println!(
                "Discovered {} new items in {} iterations ({} pairs tried, {} failed)",
                report.new_items, report.iterations, report.attempted, report.failed
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

async fn run_fetch(store: &CatalogStore, url: &str, quiet: bool) {
    if !quiet {
        println!("Fetching catalog from {}", url);
    }

    match fetch_catalog(url).await {
        Ok(catalog) => {
            if let Err(e) = store.save(&catalog) {
                eprintln!("Error saving {}: {}", store.path().display(), e);
                std::process::exit(1);
            }
            println!(
                "Saved {} items to {}",
                catalog.len(),
                store.path().display()
            );
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn show_stats(store: &CatalogStore, json: bool) {
    let catalog = load_catalog(store);
    let seeds = catalog.iter().filter(|item| item.is_seed()).count();

    if json {
        let stats = serde_json::json!({
            "path": store.path().display().to_string(),
            "items": catalog.len(),
            "recipes": catalog.recipe_count(),
            "seeds": seeds,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&stats).unwrap_or_default()
        );
    } else {
        println!("Catalog: {}", store.path().display());
        println!("  items:   {}", catalog.len());
        println!("  recipes: {}", catalog.recipe_count());
        println!("  seeds:   {}", seeds);
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let store = CatalogStore::new(&cli.catalog);

    match cli.command {
        Commands::Items => list_items(&store),
        Commands::Show { id } => show_item(&store, &id),
        Commands::Discover {
            iterations,
            base_url,
            delay_ms,
        } => run_discover(&store, iterations, &base_url, delay_ms, cli.quiet).await,
        Commands::Fetch { url } => run_fetch(&store, &url, cli.quiet).await,
        Commands::Stats { json } => show_stats(&store, json),
    }
}
