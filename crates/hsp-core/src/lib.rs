//! hsp-core: stable foundation for the HSP calculator.
//!
//! Contains:
//! - params (the Hansen parameter triple)
//! - numeric (Real + finiteness check)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod params;

// Re-exports: nice ergonomics for downstream crates
pub use error::{HspError, HspResult};
pub use numeric::{Real, ensure_finite};
pub use params::ParameterTriple;
