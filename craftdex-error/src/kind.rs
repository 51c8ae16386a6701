//! Error classification

use crate::ErrorStatus;
use std::fmt;

/// Classifies what went wrong.
///
/// Callers match on the kind to pick a recovery path: skip the recipe,
/// retry the request, give up on the file. The list is non-exhaustive so
/// new kinds can be added without breaking downstream matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ErrorKind {
    // General
    /// Catch-all for failures no other kind describes
    Unexpected,

    /// A caller passed an argument that makes no sense
    InvalidArgument,

    // Catalog and recipe data
    /// The item id is not a key in the catalog
    ItemNotFound,

    /// A recipe names an ingredient the catalog does not have
    UnknownIngredient,

    /// A recipe text that cannot be split into ingredient ids
    InvalidRecipe,

    /// A pair text with the wrong shape, or an item paired with itself
    InvalidPair,

    // Persistence
    /// The catalog document could not be read or parsed
    LoadFailed,

    /// The catalog could not be turned into JSON
    SerializationFailed,

    // Discovery
    /// The combine service rejected a request
    CraftFailed,

    /// The combine service asked the crawl to slow down
    RateLimited,

    /// The request never got a usable response
    NetworkFailed,

    /// A response body did not parse
    ParseFailed,

    // Filesystem
    /// File not found
    FileNotFound,

    /// Permission denied
    PermissionDenied,

    /// Any other IO failure
    IoFailed,
}

impl ErrorKind {
    /// Static name of the kind, used in log lines
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Unexpected => "Unexpected",
            ErrorKind::InvalidArgument => "InvalidArgument",
            ErrorKind::ItemNotFound => "ItemNotFound",
            ErrorKind::UnknownIngredient => "UnknownIngredient",
            ErrorKind::InvalidRecipe => "InvalidRecipe",
            ErrorKind::InvalidPair => "InvalidPair",
            ErrorKind::LoadFailed => "LoadFailed",
            ErrorKind::SerializationFailed => "SerializationFailed",
            ErrorKind::CraftFailed => "CraftFailed",
            ErrorKind::RateLimited => "RateLimited",
            ErrorKind::NetworkFailed => "NetworkFailed",
            ErrorKind::ParseFailed => "ParseFailed",
            ErrorKind::FileNotFound => "FileNotFound",
            ErrorKind::PermissionDenied => "PermissionDenied",
            ErrorKind::IoFailed => "IoFailed",
        }
    }

    /// Whether a retry could plausibly succeed for this kind.
    ///
    /// Only transport-shaped failures qualify; data defects like an
    /// unknown ingredient stay broken however often they are retried.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ErrorKind::CraftFailed | ErrorKind::NetworkFailed | ErrorKind::RateLimited
        )
    }

    /// The status a fresh error of this kind starts with
    pub fn default_status(&self) -> ErrorStatus {
        if self.is_retryable() {
            ErrorStatus::Temporary
        } else {
            ErrorStatus::Permanent
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
