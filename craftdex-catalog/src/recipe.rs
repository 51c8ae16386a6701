//! # Recipe Resolution
//!
//! Recipes are stored as flat "First+Second" texts whose segments are item
//! ids. Resolution turns a text into a display badge by looking each
//! ingredient up in the catalog: "Fire+Water" becomes "🔥 Fire + 💧 Water".
//!
//! Ids pass through verbatim. Names containing spaces are fine because
//! '+' is the only separator; nothing is trimmed or case-folded.

use crate::catalog::{Catalog, Item};
use crate::error::{self, Result};

/// Separator between ingredient ids inside a stored recipe text
pub const INGREDIENT_SEPARATOR: char = '+';

/// Separator between resolved badges in display output
pub const BADGE_SEPARATOR: &str = " + ";

/// Split a recipe text into its ingredient ids
pub fn split_ingredients(recipe: &str) -> impl Iterator<Item = &str> {
    recipe.split(INGREDIENT_SEPARATOR)
}

/// Resolve a recipe text into a display badge.
///
/// Each ingredient id is looked up in the catalog and rendered as
/// "emoji id"; the parts are joined with [`BADGE_SEPARATOR`]. The emoji
/// comes from the catalog entry, the id from the recipe text itself.
///
/// An ingredient missing from the catalog is a data defect in the catalog
/// file and surfaces as an UnknownIngredient error naming both the
/// ingredient and the full recipe text.
pub fn resolve_recipe(catalog: &Catalog, recipe: &str) -> Result<String> {
    if recipe.is_empty() {
        return Err(
            error::invalid_recipe(recipe, "recipe text is empty").with_operation("recipe::resolve")
        );
    }

    let mut badges = Vec::new();
    for ingredient in split_ingredients(recipe) {
        if ingredient.is_empty() {
            return Err(error::invalid_recipe(recipe, "empty ingredient segment")
                .with_operation("recipe::resolve"));
        }
        let item = catalog.get(ingredient).ok_or_else(|| {
            error::unknown_ingredient(ingredient, recipe).with_operation("recipe::resolve")
        })?;
        badges.push(format!("{} {}", item.emoji, ingredient));
    }

    Ok(badges.join(BADGE_SEPARATOR))
}

/// Resolve every displayable recipe of an item.
///
/// Empty slots (seed markers) are skipped. Each recipe resolves
/// independently, so one defective recipe does not hide the others.
pub fn resolve_item<'a>(catalog: &Catalog, item: &'a Item) -> Vec<(&'a str, Result<String>)> {
    item.crafted_recipes()
        .map(|recipe| (recipe, resolve_recipe(catalog, recipe)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn sample_catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add_item("Earth", "🌎", "");
        catalog.add_item("Water", "💧", "");
        catalog.add_item("Fire", "🔥", "");
        catalog.add_item("Steam", "💨", "Fire+Water");
        catalog
    }

    #[test]
    fn test_split_ingredients() {
        let parts: Vec<_> = split_ingredients("Fire+Water").collect();
        assert_eq!(parts, vec!["Fire", "Water"]);
    }

    #[test]
    fn test_split_keeps_spaces_in_ids() {
        let parts: Vec<_> = split_ingredients("Hot Spring+Water").collect();
        assert_eq!(parts, vec!["Hot Spring", "Water"]);
    }

    #[test]
    fn test_resolve_pair() {
        let catalog = sample_catalog();
        let badge = resolve_recipe(&catalog, "Fire+Water").unwrap();
        assert_eq!(badge, "🔥 Fire + 💧 Water");
    }

    #[test]
    fn test_resolve_repeated_ingredient() {
        let mut catalog = Catalog::new();
        catalog.add_item("wood", "🪵", "");
        catalog.add_item("axe", "🪓", "wood+wood");

        let badge = resolve_recipe(&catalog, "wood+wood").unwrap();
        assert_eq!(badge, "🪵 wood + 🪵 wood");
    }

    #[test]
    fn test_resolve_three_ingredients() {
        let catalog = sample_catalog();
        let badge = resolve_recipe(&catalog, "Earth+Fire+Water").unwrap();
        assert_eq!(badge, "🌎 Earth + 🔥 Fire + 💧 Water");
    }

    #[test]
    fn test_resolve_unknown_ingredient() {
        let catalog = sample_catalog();

        let err = resolve_recipe(&catalog, "Lava+Water").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownIngredient);
        assert!(err.message().contains("Lava"));
    }

    #[test]
    fn test_resolve_empty_text() {
        let catalog = sample_catalog();

        let err = resolve_recipe(&catalog, "").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRecipe);
    }

    #[test]
    fn test_resolve_empty_segment() {
        let catalog = sample_catalog();

        let err = resolve_recipe(&catalog, "Fire+").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidRecipe);
    }

    #[test]
    fn test_resolve_item_skips_seed_slots() {
        let catalog = sample_catalog();
        let item = catalog.get("Steam").unwrap();

        let resolved = resolve_item(&catalog, item);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].0, "Fire+Water");
        assert!(resolved[0].1.is_ok());

        let seed = catalog.get("Water").unwrap();
        assert!(resolve_item(&catalog, seed).is_empty());
    }

    #[test]
    fn test_resolve_item_skips_empty_slot_among_valid() {
        let mut catalog = sample_catalog();
        catalog.add_item("Steam", "💨", "");

        let item = catalog.get("Steam").unwrap();
        assert_eq!(item.recipes.len(), 2);

        // The empty slot produces no entry, not an empty badge
        let resolved = resolve_item(&catalog, item);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].0, "Fire+Water");
    }

    #[test]
    fn test_resolve_item_isolates_failures() {
        let mut catalog = sample_catalog();
        catalog.add_item("Steam", "💨", "Lava+Water");

        let item = catalog.get("Steam").unwrap();
        let resolved = resolve_item(&catalog, item);

        assert_eq!(resolved.len(), 2);
        assert!(resolved[0].1.is_ok());
        assert!(resolved[1].1.as_ref().is_err_and(|e| e.kind() == ErrorKind::UnknownIngredient));
    }
}
