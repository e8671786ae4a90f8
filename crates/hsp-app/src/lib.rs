//! Shared application service layer for the HSP calculator.
//!
//! This crate is what a front end talks to: it owns one session's catalog and
//! classification policy, loads configuration, and shapes comparison results
//! for display.

pub mod config;
pub mod error;
pub mod query;
pub mod session;

// Re-export key types for convenience
pub use config::{HspConfig, load_config};
pub use error::{AppError, AppResult};
pub use query::{SortColumn, SortOrder, sort_rows};
pub use session::{CheckReport, Session};
