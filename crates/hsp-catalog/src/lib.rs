//! hsp-catalog: named resin and solvent parameter sets.
//!
//! Provides:
//! - Material categories (resin, solvent)
//! - Catalog entries with Hansen parameters
//! - The reference seed table
//! - An insertion-ordered catalog supporting lookup, user additions and search
//!
//! # Example
//!
//! ```
//! use hsp_catalog::{Category, MaterialCatalog};
//! use hsp_core::ParameterTriple;
//!
//! let mut catalog = MaterialCatalog::seed();
//! catalog
//!     .add(Category::Solvent, "MEK", ParameterTriple::new(16.0, 9.0, 5.1))
//!     .unwrap();
//!
//! assert_eq!(catalog.list(Category::Solvent).last(), Some(&"MEK"));
//! ```

pub mod catalog;
pub mod category;
pub mod entry;
pub mod error;
pub mod seed;

// Re-exports for ergonomics
pub use catalog::MaterialCatalog;
pub use category::Category;
pub use entry::MaterialEntry;
pub use error::{CatalogError, CatalogResult};
pub use seed::{SeedEntry, reference_seed};
