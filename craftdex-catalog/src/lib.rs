//! # Craftdex Catalog
//!
//! Core data model for a crafting-game item catalog.
//!
//! ## Core Concepts
//! - **Item**: A craftable element with an emoji and the recipe texts that produced it
//! - **Catalog**: The full set of known items, keyed by item id (insertion-ordered)
//! - **Recipes**: "First+Second" strings resolved against the catalog into display badges
//! - **Pairs**: Unordered ingredient combinations that drive discovery
//! - **Store**: JSON file persistence for the catalog
//! - **View**: Trait-based rendering of the catalog to a terminal or any writer

pub mod catalog;
pub mod error;
pub mod pair;
pub mod recipe;
pub mod store;
pub mod view;

pub use catalog::{Catalog, Item};
pub use error::{Error, ErrorKind, ErrorStatus, Result};
pub use pair::{Pair, PairSet};
pub use recipe::{
    resolve_item, resolve_recipe, split_ingredients, BADGE_SEPARATOR, INGREDIENT_SEPARATOR,
};
pub use store::{CatalogStore, DEFAULT_CATALOG_FILE};
pub use view::{CatalogView, TextView};
