//! # Crafting Catalog
//!
//! The item catalog at the core of craftdex. Items are keyed by their id
//! (the name the crafting service returns) and remember every recipe text
//! that has produced them.

use crate::error::{self, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single catalog item.
///
/// `recipes` holds raw "First+Second" texts. Seed items carry a single
/// empty string in place of a recipe, marking them as givens rather than
/// crafted results. Empty slots are kept on disk and filtered at display
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Emoji shown next to the item name
    pub emoji: String,
    /// Item id, also used as the display name
    pub name: String,
    /// Recipe texts that have produced this item
    #[serde(default)]
    pub recipes: Vec<String>,
}

impl Item {
    /// Create a new item with a single recipe slot
    pub fn new(
        name: impl Into<String>,
        emoji: impl Into<String>,
        recipe: impl Into<String>,
    ) -> Self {
        Self {
            emoji: emoji.into(),
            name: name.into(),
            recipes: vec![recipe.into()],
        }
    }

    /// Check whether this item is a seed (no recipe ever produced it)
    pub fn is_seed(&self) -> bool {
        self.recipes.iter().all(|r| r.is_empty())
    }

    /// Recipe texts that describe an actual combination, empty slots skipped
    pub fn crafted_recipes(&self) -> impl Iterator<Item = &str> {
        self.recipes.iter().filter(|r| !r.is_empty()).map(|r| r.as_str())
    }

    /// One-line "emoji name" label used in listings
    pub fn label(&self) -> String {
        format!("{} {}", self.emoji, self.name)
    }
}

/// The full set of known items, keyed by item id.
///
/// Keys keep insertion order, so a catalog renders in discovery order and
/// round-trips through JSON without shuffling. Serializes as the wrapped
/// `{"items": {...}}` document; unknown top-level keys are ignored on load.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    items: IndexMap<String, Item>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check if an item exists
    pub fn contains(&self, id: &str) -> bool {
        self.items.contains_key(id)
    }

    /// Get an item by id
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.get(id)
    }

    /// Get an item by id, or fail with ItemNotFound
    pub fn require(&self, id: &str) -> Result<&Item> {
        self.items.get(id).ok_or_else(|| error::item_not_found(id))
    }

    /// All item ids in insertion order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.items.keys().map(|s| s.as_str())
    }

    /// All items in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Record an item, or a new recipe for an existing item.
    ///
    /// Returns true when the item was not in the catalog before. An
    /// existing item keeps its original emoji; the recipe text is appended
    /// unless already recorded.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        emoji: impl Into<String>,
        recipe: impl Into<String>,
    ) -> bool {
        let name = name.into();
        let recipe = recipe.into();

        if let Some(item) = self.items.get_mut(&name) {
            if !item.recipes.iter().any(|r| r == &recipe) {
                item.recipes.push(recipe);
            }
            return false;
        }

        self.items.insert(name.clone(), Item::new(name, emoji, recipe));
        true
    }

    /// Total recipe texts across all items, empty slots excluded
    pub fn recipe_count(&self) -> usize {
        self.items.values().map(|i| i.crafted_recipes().count()).sum()
    }

    /// Parse a catalog from a JSON document
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| {
            error::load_failed("catalog is not valid json")
                .with_operation("catalog::from_json")
                .set_source(e)
        })
    }

    /// Serialize the catalog to pretty-printed JSON
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| error::serialization_error(e.to_string()).with_operation("catalog::to_json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_add_item_new() {
        let mut catalog = Catalog::new();

        assert!(catalog.add_item("Steam", "💨", "Fire+Water"));
        assert_eq!(catalog.len(), 1);

        let item = catalog.get("Steam").unwrap();
        assert_eq!(item.name, "Steam");
        assert_eq!(item.emoji, "💨");
        assert_eq!(item.recipes, vec!["Fire+Water".to_string()]);
    }

    #[test]
    fn test_add_item_appends_new_recipe() {
        let mut catalog = Catalog::new();

        assert!(catalog.add_item("Steam", "💨", "Fire+Water"));
        assert!(!catalog.add_item("Steam", "💨", "Water+Lava"));

        let item = catalog.get("Steam").unwrap();
        assert_eq!(item.recipes.len(), 2);
    }

    #[test]
    fn test_add_item_skips_duplicate_recipe() {
        let mut catalog = Catalog::new();

        catalog.add_item("Steam", "💨", "Fire+Water");
        catalog.add_item("Steam", "💨", "Fire+Water");

        assert_eq!(catalog.get("Steam").unwrap().recipes.len(), 1);
    }

    #[test]
    fn test_add_item_keeps_original_emoji() {
        let mut catalog = Catalog::new();

        catalog.add_item("Steam", "💨", "Fire+Water");
        catalog.add_item("Steam", "🌫️", "Water+Lava");

        assert_eq!(catalog.get("Steam").unwrap().emoji, "💨");
    }

    #[test]
    fn test_require_missing_item() {
        let catalog = Catalog::new();

        let result = catalog.require("Steam");
        assert!(result.is_err_and(|e| e.kind() == ErrorKind::ItemNotFound));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut catalog = Catalog::new();

        catalog.add_item("Wind", "🌬️", "");
        catalog.add_item("Earth", "🌎", "");
        catalog.add_item("Fire", "🔥", "");

        let ids: Vec<_> = catalog.ids().collect();
        assert_eq!(ids, vec!["Wind", "Earth", "Fire"]);
    }

    #[test]
    fn test_seed_detection() {
        let mut catalog = Catalog::new();

        catalog.add_item("Water", "💧", "");
        catalog.add_item("Steam", "💨", "Fire+Water");

        assert!(catalog.get("Water").unwrap().is_seed());
        assert!(!catalog.get("Steam").unwrap().is_seed());
    }

    #[test]
    fn test_recipe_count_skips_empty_slots() {
        let mut catalog = Catalog::new();

        catalog.add_item("Water", "💧", "");
        catalog.add_item("Fire", "🔥", "");
        catalog.add_item("Steam", "💨", "Fire+Water");

        assert_eq!(catalog.recipe_count(), 1);
    }

    #[test]
    fn test_from_json_wrapped_document() {
        let json = r#"{
            "items": {
                "Water": {"emoji": "💧", "name": "Water", "recipes": [""]},
                "Steam": {"emoji": "💨", "name": "Steam", "recipes": ["Fire+Water"]}
            },
            "recipes": {
                "Fire+Water": {"first": "Fire", "second": "Water", "result": "Steam"}
            }
        }"#;

        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("Steam").unwrap().emoji, "💨");
    }

    #[test]
    fn test_from_json_invalid() {
        let result = Catalog::from_json("not json");
        assert!(result.is_err_and(|e| e.kind() == ErrorKind::LoadFailed));
    }

    #[test]
    fn test_json_round_trip_keeps_order() {
        let mut catalog = Catalog::new();
        catalog.add_item("Earth", "🌎", "");
        catalog.add_item("Water", "💧", "");
        catalog.add_item("Steam", "💨", "Earth+Water");

        let json = catalog.to_json().unwrap();
        let reloaded = Catalog::from_json(&json).unwrap();

        let ids: Vec<_> = reloaded.ids().collect();
        assert_eq!(ids, vec!["Earth", "Water", "Steam"]);
    }

    #[test]
    fn test_item_label() {
        let item = Item::new("Steam", "💨", "Fire+Water");
        assert_eq!(item.label(), "💨 Steam");
    }
}
