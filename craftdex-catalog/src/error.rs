//! Catalog error types
//!
//! Re-exports craftdex-error and provides catalog-specific conveniences.

// Re-export the core error types
pub use craftdex_error::{Error, ErrorKind, ErrorStatus, Result};

// =============================================================================
// Catalog-specific error constructors
// =============================================================================

/// Create an ItemNotFound error
pub fn item_not_found(item_id: impl Into<String>) -> Error {
    Error::item_not_found(item_id)
}

/// Create an UnknownIngredient error
pub fn unknown_ingredient(ingredient_id: impl Into<String>, recipe: impl Into<String>) -> Error {
    Error::unknown_ingredient(ingredient_id, recipe)
}

/// Create an InvalidRecipe error
pub fn invalid_recipe(recipe: impl Into<String>, reason: impl Into<String>) -> Error {
    Error::invalid_recipe(reason).with_context("recipe", recipe)
}

/// Create an InvalidPair error
pub fn invalid_pair(reason: impl Into<String>) -> Error {
    Error::invalid_pair(reason)
}

/// Create a LoadFailed error
pub fn load_failed(reason: impl Into<String>) -> Error {
    Error::load_failed(reason)
}

/// Create a SerializationFailed error
pub fn serialization_error(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::SerializationFailed, message)
}
