//! # craftdex-error
//!
//! Unified error handling for craftdex, patterned after OpenDAL's error
//! design.
//!
//! Every fallible operation in the workspace returns the one [`Error`]
//! type defined here. The pieces:
//!
//! - [`ErrorKind`] says what went wrong, and is what callers match on
//! - [`ErrorStatus`] says whether retrying is worthwhile
//! - operation tags and context pairs say where and with which inputs
//! - an optional `anyhow` source holds the lower-level error, wrapped
//!   rather than leaked
//!
//! ## Usage
//!
//! ```rust
//! use craftdex_error::{Error, ErrorKind};
//!
//! fn example() -> Result<(), Error> {
//!     Err(Error::new(ErrorKind::UnknownIngredient, "ingredient 'Lava' not in catalog")
//!         .with_operation("recipe::resolve")
//!         .with_context("ingredient_id", "Lava")
//!         .with_context("recipe", "Fire+Water"))
//! }
//! ```
//!
//! Conventions: an external error is wrapped exactly once with
//! `set_source`; layers above only retag the operation and append
//! context. `From` impls exist only for errors that cannot leak foreign
//! detail (`std::io::Error`).

mod error;
mod kind;
mod status;

pub use error::Error;
pub use kind::ErrorKind;
pub use status::ErrorStatus;

/// Result type alias using craftdex Error
pub type Result<T> = std::result::Result<T, Error>;
