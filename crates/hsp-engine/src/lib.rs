//! hsp-engine: Hansen distance scoring and compatibility classification.
//!
//! Provides:
//! - `distance`: the weighted HSP distance Ra between two parameter triples
//! - `ClassificationPolicy` / `classify`: Ra to compatibility tier
//! - `rank`: every candidate scored against one resin, nearest first
//! - `HansenPlot`: δD/δP plot geometry for a resin/solvent pair
//!
//! Nothing here fails or allocates shared state; the engine is a set of pure
//! functions over `ParameterTriple`.
//!
//! # Example
//!
//! ```
//! use hsp_core::ParameterTriple;
//! use hsp_engine::{ClassificationPolicy, Tier, compare};
//!
//! let acrylic = ParameterTriple::new(16.2, 9.4, 6.8);
//! let acetone = ParameterTriple::new(15.5, 10.4, 7.0);
//!
//! let result = compare(acrylic, acetone, ClassificationPolicy::default());
//! assert!((result.distance - 3.0_f64.sqrt()).abs() < 1e-9);
//! assert_eq!(result.tier, Tier::Compatible);
//! ```

pub mod classify;
pub mod distance;
pub mod plot;
pub mod rank;

// Re-exports for ergonomics
pub use classify::{
    ClassificationPolicy, DEFAULT_MARGIN, DEFAULT_THRESHOLD, Tier, classify,
};
pub use distance::{CompatibilityResult, DISPERSION_WEIGHT, compare, distance};
pub use plot::{HansenPlot, PlotBounds, PlotPoint};
pub use rank::{RankedRow, rank, rank_with_policy};
