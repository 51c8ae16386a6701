//! # Discovery Crawler
//!
//! Breadth-first discovery over the catalog: generate every untried pair
//! of known items, ask the provider what each pair makes, record the
//! results, repeat. The catalog is saved after each iteration so a crawl
//! can be stopped and resumed.

use crate::api::CombineProvider;
use crate::error::Result;
use craftdex_catalog::{Catalog, CatalogStore, Pair, PairSet};

/// Log levels for crawl progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Callback receiving crawl progress messages
pub type LogCallback = Box<dyn Fn(LogLevel, &str) + Send + Sync>;

/// The items every crawl starts from
pub fn seed_items() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Earth", "🌎"),
        ("Water", "💧"),
        ("Fire", "🔥"),
        ("Wind", "🌬️"),
    ]
}

/// Configuration for a crawl
#[derive(Debug, Clone)]
pub struct CrawlerConfig {
    /// Number of generate-and-sweep iterations to run
    pub iterations: usize,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self { iterations: 3 }
    }
}

/// Outcome of one sweep over the pending pairs
#[derive(Debug, Clone, Copy, Default)]
pub struct SweepReport {
    /// Pairs attempted this sweep
    pub attempted: usize,
    /// Pairs that produced an item
    pub discovered: usize,
    /// Items not previously in the catalog
    pub new_items: usize,
    /// Pairs dropped after a permanent failure
    pub failed: usize,
}

/// Accumulated outcome of a full crawl
#[derive(Debug, Clone, Copy, Default)]
pub struct RunReport {
    /// Iterations completed
    pub iterations: usize,
    /// Pairs attempted across all sweeps
    pub attempted: usize,
    /// Pairs that produced an item
    pub discovered: usize,
    /// Items added to the catalog
    pub new_items: usize,
    /// Pairs dropped after a permanent failure
    pub failed: usize,
}

impl RunReport {
    fn absorb(&mut self, sweep: SweepReport) {
        self.attempted += sweep.attempted;
        self.discovered += sweep.discovered;
        self.new_items += sweep.new_items;
        self.failed += sweep.failed;
    }
}

/// Drives discovery against a combine provider
pub struct Crawler<P: CombineProvider> {
    provider: P,
    catalog: Catalog,
    /// Pairs already generated, in either order
    seen: PairSet,
    /// Pairs generated but not yet resolved
    pending: Vec<Pair>,
    config: CrawlerConfig,
    log_callback: Option<LogCallback>,
}

impl<P: CombineProvider> Crawler<P> {
    /// Create a crawler with default configuration
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, CrawlerConfig::default())
    }

    /// Create a crawler with custom configuration
    pub fn with_config(provider: P, config: CrawlerConfig) -> Self {
        Self {
            provider,
            catalog: Catalog::new(),
            seen: PairSet::new(),
            pending: Vec::new(),
            config,
            log_callback: None,
        }
    }

    /// Use an existing catalog, marking its recorded recipes as tried.
    ///
    /// Recipe texts that are not two-id pairs are left alone; they only
    /// matter for display, not for discovery.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        for item in self.catalog.iter() {
            for recipe in item.crafted_recipes() {
                if let Ok(pair) = Pair::parse(recipe) {
                    self.seen.insert(&pair);
                }
            }
        }
        self
    }

    /// Install a progress callback
    pub fn with_log_callback(
        mut self,
        callback: impl Fn(LogLevel, &str) + Send + Sync + 'static,
    ) -> Self {
        self.log_callback = Some(Box::new(callback));
        self
    }

    /// Ensure the seed items are present
    pub fn seeded(mut self) -> Self {
        for (name, emoji) in seed_items() {
            self.catalog.add_item(name, emoji, "");
        }
        self
    }

    /// The catalog as discovered so far
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Consume the crawler and take the catalog
    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }

    /// Pairs waiting to be resolved
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    fn log(&self, level: LogLevel, message: &str) {
        if let Some(callback) = &self.log_callback {
            callback(level, message);
        }
    }

    /// Queue every untried combination of two known items.
    ///
    /// Combinations are unordered; "Water+Fire" is not queued again once
    /// "Fire+Water" has been. Returns the number of pairs added.
    pub fn generate_pairs(&mut self) -> usize {
        let ids: Vec<String> = self.catalog.ids().map(|s| s.to_string()).collect();
        let mut added = 0;

        for (i, first) in ids.iter().enumerate() {
            for second in &ids[i + 1..] {
                if let Ok(pair) = Pair::new(first.as_str(), second.as_str()) {
                    if self.seen.insert(&pair) {
                        self.pending.push(pair);
                        added += 1;
                    }
                }
            }
        }

        added
    }

    /// Resolve every pending pair once.
    ///
    /// A pair that produces nothing is spent and never retried. A pair
    /// that fails with a retryable error stays pending for the next
    /// sweep; a permanent failure drops it.
    pub async fn sweep(&mut self) -> SweepReport {
        let mut report = SweepReport::default();
        let pending = std::mem::take(&mut self.pending);

        for pair in pending {
            report.attempted += 1;

            match self.provider.combine(&pair).await {
                Ok(Some(crafted)) => {
                    report.discovered += 1;
                    let is_new = self.catalog.add_item(
                        crafted.name.as_str(),
                        crafted.emoji.as_str(),
                        pair.key(),
                    );
                    if is_new {
                        report.new_items += 1;
                        self.log(
                            LogLevel::Info,
                            &format!("Found new item: {} {}", crafted.emoji, crafted.name),
                        );
                    } else {
                        self.log(
                            LogLevel::Debug,
                            &format!("Known item {} via {}", crafted.name, pair.key()),
                        );
                    }
                    if crafted.is_new {
                        self.log(
                            LogLevel::Info,
                            &format!("First discovery: {} {}", crafted.emoji, crafted.name),
                        );
                    }
                }
                Ok(None) => {
                    self.log(LogLevel::Debug, &format!("No result for {}", pair.key()));
                }
                Err(e) if e.is_retryable() => {
                    self.log(
                        LogLevel::Warn,
                        &format!("Retrying {} later: {}", pair.key(), e),
                    );
                    self.pending.push(pair);
                }
                Err(e) => {
                    report.failed += 1;
                    self.log(LogLevel::Error, &format!("Dropping {}: {}", pair.key(), e));
                }
            }
        }

        report
    }

    /// Run the full crawl: `iterations` rounds of generate and sweep,
    /// saving the catalog after each round when a store is given.
    pub async fn run(&mut self, store: Option<&CatalogStore>) -> Result<RunReport> {
        let mut run_report = RunReport::default();

        for iteration in 1..=self.config.iterations {
            let generated = self.generate_pairs();
            self.log(
                LogLevel::Debug,
                &format!("Iteration {}: generated {} pairs", iteration, generated),
            );

            // Keep sweeping while discoveries come in; retry-laters that
            // make no progress carry over to the next iteration.
            loop {
                if self.pending.is_empty() {
                    break;
                }
                let report = self.sweep().await;
                run_report.absorb(report);
                if report.discovered == 0 {
                    break;
                }
            }

            if let Some(store) = store {
                store.save(&self.catalog)?;
            }

            run_report.iterations = iteration;
            self.log(
                LogLevel::Info,
                &format!(
                    "Iteration {}: items {}, pairs tried {}",
                    iteration,
                    self.catalog.len(),
                    self.seen.len()
                ),
            );
        }

        Ok(run_report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Crafted;
    use crate::error::{Error, ErrorKind};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    enum Reply {
        Item(&'static str, &'static str),
        Nothing,
        Fail(ErrorKind),
    }

    /// Scripted provider keyed by canonical pair key
    struct ScriptedProvider {
        replies: HashMap<String, Reply>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedProvider {
        fn new() -> Self {
            Self {
                replies: HashMap::new(),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn on(mut self, first: &str, second: &str, reply: Reply) -> Self {
            let pair = Pair::new(first, second).unwrap();
            self.replies.insert(pair.canonical_key(), reply);
            self
        }
    }

    impl CombineProvider for ScriptedProvider {
        fn name(&self) -> &str {
            "scripted"
        }

        async fn combine(&self, pair: &Pair) -> Result<Option<Crafted>> {
            self.calls.lock().unwrap().push(pair.canonical_key());

            match self.replies.get(&pair.canonical_key()) {
                Some(Reply::Item(name, emoji)) => Ok(Some(Crafted {
                    name: name.to_string(),
                    emoji: emoji.to_string(),
                    is_new: false,
                })),
                Some(Reply::Fail(kind)) => Err(Error::new(*kind, "scripted failure")),
                Some(Reply::Nothing) | None => Ok(None),
            }
        }
    }

    #[test]
    fn test_seeded_catalog() {
        let crawler = Crawler::new(ScriptedProvider::new()).seeded();

        let catalog = crawler.catalog();
        assert_eq!(catalog.len(), 4);
        assert!(catalog.iter().all(|item| item.is_seed()));

        let ids: Vec<_> = catalog.ids().collect();
        assert_eq!(ids, vec!["Earth", "Water", "Fire", "Wind"]);
    }

    #[test]
    fn test_generate_pairs_dedups_unordered() {
        let mut crawler = Crawler::new(ScriptedProvider::new()).seeded();

        // 4 seeds give C(4,2) combinations
        assert_eq!(crawler.generate_pairs(), 6);
        assert_eq!(crawler.pending_count(), 6);

        // Nothing new to combine
        assert_eq!(crawler.generate_pairs(), 0);
    }

    #[test]
    fn test_with_catalog_marks_recipes_seen() {
        let mut catalog = Catalog::new();
        catalog.add_item("Fire", "🔥", "");
        catalog.add_item("Water", "💧", "");
        catalog.add_item("Steam", "💨", "Fire+Water");

        let mut crawler = Crawler::new(ScriptedProvider::new()).with_catalog(catalog);

        // Fire+Water is already recorded, only the Steam pairs remain
        assert_eq!(crawler.generate_pairs(), 2);
    }

    #[tokio::test]
    async fn test_sweep_records_discovery() {
        let provider = ScriptedProvider::new().on("Fire", "Water", Reply::Item("Steam", "💨"));
        let mut crawler = Crawler::new(provider).seeded();

        crawler.generate_pairs();
        let report = crawler.sweep().await;

        assert_eq!(report.attempted, 6);
        assert_eq!(report.discovered, 1);
        assert_eq!(report.new_items, 1);
        assert_eq!(report.failed, 0);

        // The recipe text keeps the order the pair was generated in
        let steam = crawler.catalog().get("Steam").unwrap();
        assert_eq!(steam.recipes, vec!["Water+Fire".to_string()]);

        // And it resolves against the grown catalog
        let badge = craftdex_catalog::resolve_recipe(crawler.catalog(), "Water+Fire").unwrap();
        assert_eq!(badge, "💧 Water + 🔥 Fire");
    }

    #[tokio::test]
    async fn test_exhausted_pairs_are_not_retried() {
        let mut crawler = Crawler::new(ScriptedProvider::new()).seeded();

        crawler.generate_pairs();
        let report = crawler.sweep().await;
        assert_eq!(report.attempted, 6);
        assert_eq!(crawler.pending_count(), 0);

        // Spent pairs are neither regenerated nor re-swept
        assert_eq!(crawler.generate_pairs(), 0);
        let report = crawler.sweep().await;
        assert_eq!(report.attempted, 0);
        assert_eq!(crawler.provider.calls.lock().unwrap().len(), 6);
    }

    #[tokio::test]
    async fn test_retryable_failure_stays_pending() {
        let provider = ScriptedProvider::new().on("Earth", "Water", Reply::Fail(ErrorKind::RateLimited));
        let mut crawler = Crawler::new(provider).seeded();

        crawler.generate_pairs();
        let report = crawler.sweep().await;

        assert_eq!(report.attempted, 6);
        assert_eq!(report.failed, 0);
        assert_eq!(crawler.pending_count(), 1);

        let report = crawler.sweep().await;
        assert_eq!(report.attempted, 1);
    }

    #[tokio::test]
    async fn test_permanent_failure_drops_pair() {
        let provider = ScriptedProvider::new().on("Earth", "Water", Reply::Fail(ErrorKind::Unexpected));
        let mut crawler = Crawler::new(provider).seeded();

        crawler.generate_pairs();
        let report = crawler.sweep().await;

        assert_eq!(report.failed, 1);
        assert_eq!(crawler.pending_count(), 0);
    }

    #[tokio::test]
    async fn test_run_discovers_across_iterations() {
        let dir = tempfile::tempdir().unwrap();
        let store = CatalogStore::new(dir.path().join("catalog.json"));

        let provider = ScriptedProvider::new()
            .on("Fire", "Water", Reply::Item("Steam", "💨"))
            .on("Steam", "Wind", Reply::Item("Cloud", "☁️"));
        let mut crawler =
            Crawler::with_config(provider, CrawlerConfig { iterations: 2 }).seeded();

        let report = crawler.run(Some(&store)).await.unwrap();

        assert_eq!(report.iterations, 2);
        assert_eq!(report.new_items, 2);
        assert_eq!(crawler.catalog().len(), 6);

        // Second iteration found Cloud through the newly added Steam
        assert!(crawler.catalog().contains("Cloud"));

        let saved = store.load().unwrap();
        assert_eq!(saved.len(), 6);
    }

    #[tokio::test]
    async fn test_log_callback_receives_discoveries() {
        let messages: Arc<Mutex<Vec<String>>> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&messages);

        let provider = ScriptedProvider::new().on("Fire", "Water", Reply::Item("Steam", "💨"));
        let mut crawler = Crawler::new(provider)
            .seeded()
            .with_log_callback(move |_, msg| sink.lock().unwrap().push(msg.to_string()));

        crawler.generate_pairs();
        crawler.sweep().await;

        let messages = messages.lock().unwrap();
        assert!(messages.iter().any(|m| m.contains("Found new item: 💨 Steam")));
    }
}
