//! Classified error model.
//!
//! Every failure in the catalog is one of three kinds. Two are classified and
//! carry a caller-visible message; everything else is unclassified and its
//! detail is never shown to callers.

use thiserror::Error;

/// Result type used across the catalog.
pub type CatalogResult<T> = Result<T, CatalogError>;

pub const PRODUCT_NOT_FOUND: &str = "Product not found";
pub const MISSING_REQUIRED_FIELDS: &str = "Missing required fields";
pub const INVALID_PRICE: &str = "Price must be a positive number";
pub const INVALID_IN_STOCK: &str = "inStock must be a boolean";
pub const SEARCH_QUERY_REQUIRED: &str = "Search query is required";

/// Phrase returned in place of the message of an unclassified failure.
pub const INTERNAL_SERVER_ERROR: &str = "Internal Server Error";

/// Discriminant of a [`CatalogError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A lookup by identifier found nothing.
    NotFound,
    /// Caller-supplied data failed a precondition.
    Validation,
    /// Anything else, including programming faults.
    Unclassified,
}

impl ErrorKind {
    /// HTTP status code this kind maps to.
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::Validation => 400,
            ErrorKind::Unclassified => 500,
        }
    }

    pub fn is_classified(self) -> bool {
        !matches!(self, ErrorKind::Unclassified)
    }
}

/// Catalog-level error.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Unclassified(#[from] anyhow::Error),
}

impl CatalogError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn unclassified(msg: impl Into<String>) -> Self {
        Self::Unclassified(anyhow::Error::msg::<String>(msg.into()))
    }

    /// Shorthand for the error every id lookup raises.
    pub fn product_not_found() -> Self {
        Self::not_found(PRODUCT_NOT_FOUND)
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::NotFound(_) => ErrorKind::NotFound,
            CatalogError::Validation(_) => ErrorKind::Validation,
            CatalogError::Unclassified(_) => ErrorKind::Unclassified,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }

    /// Message safe to hand to a caller.
    ///
    /// Classified errors expose their own message; unclassified ones collapse
    /// to [`INTERNAL_SERVER_ERROR`].
    pub fn public_message(&self) -> &str {
        match self {
            CatalogError::NotFound(msg) | CatalogError::Validation(msg) => msg,
            CatalogError::Unclassified(_) => INTERNAL_SERVER_ERROR,
        }
    }
}
