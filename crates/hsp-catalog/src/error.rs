//! Catalog errors.

use thiserror::Error;

use crate::Category;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised by catalog lookups and mutations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    /// Name absent in the requested category.
    #[error("{category} '{name}' not found")]
    NotFound { category: Category, name: String },

    /// Rejected before any mutation took place.
    #[error("Invalid input: {what}")]
    InvalidInput { what: &'static str },
}
