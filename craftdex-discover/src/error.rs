//! Discovery error types
//!
//! Re-exports craftdex-error and provides discovery-specific conveniences.

// Re-export the core error types
pub use craftdex_error::{Error, ErrorKind, ErrorStatus, Result};

// =============================================================================
// Discovery-specific error constructors
// =============================================================================

/// Create a CraftFailed error for a rejected combine request
pub fn craft_failed(status: u16, body: impl Into<String>) -> Error {
    Error::craft_failed(format!("combine request failed with status {}", status))
        .with_context("status", status.to_string())
        .with_context("body", body)
}

/// Create a RateLimited error
pub fn rate_limited() -> Error {
    Error::rate_limited("combine request was rate limited")
}

/// Create a NetworkFailed error
pub fn network_failed(message: impl Into<String>) -> Error {
    Error::new(ErrorKind::NetworkFailed, message)
}

/// Create a ParseFailed error
pub fn parse_failed(message: impl Into<String>) -> Error {
    Error::parse_failed(message)
}

/// Create a LoadFailed error
pub fn load_failed(message: impl Into<String>) -> Error {
    Error::load_failed(message)
}
