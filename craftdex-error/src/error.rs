//! The craftdex Error type

use crate::{ErrorKind, ErrorStatus};
use std::fmt;

/// The error type every craftdex operation returns.
///
/// An error is a kind plus a message, and picks up structure as it
/// travels: the operation that failed, key-value context naming the
/// inputs, a retry status, and optionally the lower-level error that
/// started it all.
///
/// # Example
///
/// ```rust
/// use craftdex_error::{Error, ErrorKind, ErrorStatus};
///
/// let err = Error::new(ErrorKind::CraftFailed, "service returned status 500")
///     .with_operation("api::combine")
///     .with_status(ErrorStatus::Temporary)
///     .with_context("first", "Fire")
///     .with_context("second", "Water");
///
/// assert_eq!(err.kind(), ErrorKind::CraftFailed);
/// assert!(err.status().is_retryable());
/// ```
pub struct Error {
    kind: ErrorKind,
    message: String,
    status: ErrorStatus,
    operation: &'static str,
    context: Vec<(&'static str, String)>,
    source: Option<anyhow::Error>,
}

impl Error {
    /// Build an error of the given kind. The retry status starts at the
    /// kind's default and can be overridden.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: kind.default_status(),
            operation: "",
            context: Vec::new(),
            source: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The category of this error
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// How this error should be treated with respect to retries
    pub fn status(&self) -> ErrorStatus {
        self.status
    }

    /// Human-readable description
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The operation that raised the error, "" when never tagged
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    /// Context pairs in the order they were attached
    pub fn context(&self) -> &[(&'static str, String)] {
        &self.context
    }

    /// The wrapped lower-level error, if one was recorded
    pub fn source_ref(&self) -> Option<&anyhow::Error> {
        self.source.as_ref()
    }

    /// Shorthand for `status().is_retryable()`
    pub fn is_retryable(&self) -> bool {
        self.status.is_retryable()
    }

    // =========================================================================
    // Chainable builders
    // =========================================================================

    /// Override the retry status
    pub fn with_status(mut self, status: ErrorStatus) -> Self {
        self.status = status;
        self
    }

    /// Mark as temporary (worth retrying)
    pub fn temporary(mut self) -> Self {
        self.status = ErrorStatus::Temporary;
        self
    }

    /// Mark as permanent (retrying will not help)
    pub fn permanent(mut self) -> Self {
        self.status = ErrorStatus::Permanent;
        self
    }

    /// Mark as persistent once retries have been given up on
    pub fn persist(mut self) -> Self {
        self.status = self.status.persist();
        self
    }

    /// Tag the error with the operation that raised it.
    ///
    /// Retagging at a higher layer keeps the old tag: the previous
    /// operation moves into context under "called", so the chain of
    /// operations stays readable in the output.
    pub fn with_operation(mut self, operation: &'static str) -> Self {
        if !self.operation.is_empty() {
            self.context.push(("called", self.operation.to_string()));
        }
        self.operation = operation;
        self
    }

    /// Attach one context pair
    pub fn with_context(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.context.push((key, value.into()));
        self
    }

    /// Record the lower-level error this one wraps.
    ///
    /// A source is recorded once, where the failure first crosses into
    /// craftdex; debug builds assert against a second call.
    pub fn set_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        debug_assert!(self.source.is_none(), "source error already set");
        self.source = Some(source.into());
        self
    }
}

// =============================================================================
// Formatting
// =============================================================================

/// Compact single-line form for log output
impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.kind, self.status)?;
        if !self.operation.is_empty() {
            write!(f, " at {}", self.operation)?;
        }

        if !self.context.is_empty() {
            write!(f, ", context {{ ")?;
            for (i, (key, value)) in self.context.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}: {}", key, value)?;
            }
            write!(f, " }}")?;
        }

        if !self.message.is_empty() {
            write!(f, " => {}", self.message)?;
        }

        Ok(())
    }
}

/// Multi-line form with the full structure spelled out
impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({})", self.kind, self.status)?;
        if !self.operation.is_empty() {
            writeln!(f, "    at: {}", self.operation)?;
        }
        if !self.message.is_empty() {
            writeln!(f, "    message: {}", self.message)?;
        }
        if !self.context.is_empty() {
            writeln!(f, "    context:")?;
            for (key, value) in &self.context {
                writeln!(f, "        {}: {}", key, value)?;
            }
        }
        if let Some(source) = &self.source {
            writeln!(f, "    source: {:?}", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

// =============================================================================
// Conversions - raw errors stay wrapped, never exposed as our type
// =============================================================================

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        use std::io::ErrorKind as Io;

        let kind = match err.kind() {
            Io::NotFound => ErrorKind::FileNotFound,
            Io::PermissionDenied => ErrorKind::PermissionDenied,
            _ => ErrorKind::IoFailed,
        };
        Error::new(kind, err.to_string())
            .with_operation("io")
            .set_source(err)
    }
}

// =============================================================================
// Domain constructors
// =============================================================================

impl Error {
    /// An Unexpected error
    pub fn unexpected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unexpected, message)
    }

    /// An InvalidArgument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    /// An ItemNotFound error naming the missing id
    pub fn item_not_found(item_id: impl Into<String>) -> Self {
        let item_id = item_id.into();
        Self::new(ErrorKind::ItemNotFound, format!("item '{}' not found in catalog", item_id))
            .with_context("item_id", item_id)
    }

    /// An UnknownIngredient error.
    ///
    /// Carries the full recipe text as context so the defective catalog
    /// entry can be located.
    pub fn unknown_ingredient(ingredient_id: impl Into<String>, recipe: impl Into<String>) -> Self {
        let ingredient_id = ingredient_id.into();
        Self::new(
            ErrorKind::UnknownIngredient,
            format!("ingredient '{}' not in catalog", ingredient_id),
        )
        .with_context("ingredient_id", ingredient_id)
        .with_context("recipe", recipe)
    }

    /// An InvalidRecipe error
    pub fn invalid_recipe(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidRecipe, message)
    }

    /// An InvalidPair error
    pub fn invalid_pair(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidPair, message)
    }

    /// A LoadFailed error
    pub fn load_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::LoadFailed, message)
    }

    /// A CraftFailed error
    pub fn craft_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::CraftFailed, message)
    }

    /// A RateLimited error
    pub fn rate_limited(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::RateLimited, message)
    }

    /// A ParseFailed error
    pub fn parse_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::ParseFailed, message)
    }
}
