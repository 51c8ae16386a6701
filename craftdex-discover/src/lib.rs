//! # Craftdex Discover
//!
//! Pair discovery against a live crafting service:
//! 1. Seed the catalog with the four base items
//! 2. Generate every untried pair of known items
//! 3. Ask the combine endpoint what each pair makes
//! 4. Record the results and repeat, saving as it goes
//!
//! The provider is a trait, so the crawler runs against the real API or a
//! scripted stand-in in tests.

pub mod api;
pub mod crawler;
pub mod error;
pub mod fetch;

pub use api::{ApiConfig, CombineProvider, Crafted, PairApi, DEFAULT_BASE_URL};
pub use crawler::{
    seed_items, Crawler, CrawlerConfig, LogCallback, LogLevel, RunReport, SweepReport,
};
pub use error::{Error, ErrorKind, ErrorStatus, Result};
pub use fetch::fetch_catalog;
