//! Hansen distance.

use hsp_core::{ParameterTriple, Real};
use serde::{Deserialize, Serialize};

use crate::{ClassificationPolicy, Tier};

/// Weight on the squared dispersion difference.
pub const DISPERSION_WEIGHT: Real = 4.0;

/// Ra = sqrt(4·ΔδD² + ΔδP² + ΔδH²)
///
/// Symmetric, non-negative, and zero only for identical triples. NaN or
/// infinite components propagate into the result.
pub fn distance(a: ParameterTriple, b: ParameterTriple) -> Real {
    let d_d = a.dd() - b.dd();
    let d_p = a.dp() - b.dp();
    let d_h = a.dh() - b.dh();
    (DISPERSION_WEIGHT * d_d * d_d + d_p * d_p + d_h * d_h).sqrt()
}

/// Outcome of one resin/solvent comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub distance: Real,
    pub tier: Tier,
}

pub fn compare(
    resin: ParameterTriple,
    solvent: ParameterTriple,
    policy: ClassificationPolicy,
) -> CompatibilityResult {
    let distance = distance(resin, solvent);
    CompatibilityResult {
        distance,
        tier: policy.classify(distance),
    }
}
