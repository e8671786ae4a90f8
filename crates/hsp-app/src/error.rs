//! Error types for the hsp-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the library crates
/// and provides a unified error interface for front ends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read config file: {path}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config: {0}")]
    ConfigParse(String),

    #[error("Config validation failed: {0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for hsp-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<hsp_catalog::CatalogError> for AppError {
    fn from(err: hsp_catalog::CatalogError) -> Self {
        match &err {
            hsp_catalog::CatalogError::NotFound { .. } => AppError::NotFound(err.to_string()),
            hsp_catalog::CatalogError::InvalidInput { what } => {
                AppError::InvalidInput(what.to_string())
            }
        }
    }
}

impl From<hsp_core::HspError> for AppError {
    fn from(err: hsp_core::HspError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
