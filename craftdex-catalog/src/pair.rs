//! # Ingredient Pairs
//!
//! An unordered combination of two distinct item ids. Pairs drive
//! discovery: generation walks every two-item combination once, equality
//! and dedup ignore ingredient order, and the stored "First+Second" key
//! keeps the order the pair was created in.

use crate::error::{self, Result};
use crate::recipe::INGREDIENT_SEPARATOR;
use std::collections::HashSet;

/// An unordered pair of item ids to combine
#[derive(Debug, Clone)]
pub struct Pair {
    first: String,
    second: String,
}

impl Pair {
    /// Create a pair. The two ids must be non-empty and distinct.
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Result<Self> {
        let first = first.into();
        let second = second.into();

        if first.is_empty() || second.is_empty() {
            return Err(error::invalid_pair("pair ids must be non-empty").with_operation("pair::new"));
        }
        if first == second {
            return Err(error::invalid_pair(format!("cannot pair '{}' with itself", first))
                .with_operation("pair::new")
                .with_context("item_id", first));
        }

        Ok(Self { first, second })
    }

    /// Parse a "First+Second" key back into a pair
    pub fn parse(key: &str) -> Result<Self> {
        let mut parts = key.split(INGREDIENT_SEPARATOR);
        match (parts.next(), parts.next(), parts.next()) {
            (Some(first), Some(second), None) => Self::new(first, second),
            _ => Err(error::invalid_pair(format!("expected exactly two ids in '{}'", key))
                .with_operation("pair::parse")
                .with_context("key", key)),
        }
    }

    /// First ingredient id
    pub fn first(&self) -> &str {
        &self.first
    }

    /// Second ingredient id
    pub fn second(&self) -> &str {
        &self.second
    }

    /// "First+Second" key in the order the pair was created
    pub fn key(&self) -> String {
        format!("{}{}{}", self.first, INGREDIENT_SEPARATOR, self.second)
    }

    /// Order-insensitive key: the lexically smaller id comes first.
    ///
    /// "Water+Fire" and "Fire+Water" share the canonical key "Fire+Water".
    pub fn canonical_key(&self) -> String {
        if self.first <= self.second {
            self.key()
        } else {
            format!("{}{}{}", self.second, INGREDIENT_SEPARATOR, self.first)
        }
    }
}

/// Equality ignores ingredient order
impl PartialEq for Pair {
    fn eq(&self, other: &Self) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

impl Eq for Pair {}

/// Tracks which pairs have been tried, ignoring ingredient order
#[derive(Debug, Clone, Default)]
pub struct PairSet {
    seen: HashSet<String>,
}

impl PairSet {
    /// Create an empty set
    pub fn new() -> Self {
        Self {
            seen: HashSet::new(),
        }
    }

    /// Number of distinct pairs recorded
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Check if no pairs have been recorded
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Check whether a pair (in either order) was recorded
    pub fn contains(&self, pair: &Pair) -> bool {
        self.seen.contains(&pair.canonical_key())
    }

    /// Record a pair. Returns false if it was already present.
    pub fn insert(&mut self, pair: &Pair) -> bool {
        self.seen.insert(pair.canonical_key())
    }
}
