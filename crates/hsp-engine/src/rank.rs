//! Ranking candidate solvents against one resin.
//!
//! Feeds the comparison table (Solvent, δD, δP, δH, Ra, Match).

use core::cmp::Ordering;

use hsp_core::{ParameterTriple, Real};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{ClassificationPolicy, Tier, distance};

/// One table row: a candidate with its distance and tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRow {
    pub name: String,
    pub params: ParameterTriple,
    pub distance: Real,
    pub tier: Tier,
}

/// Score every candidate against `resin` at `threshold` (default margin).
pub fn rank<I, S>(resin: ParameterTriple, candidates: I, threshold: Real) -> Vec<RankedRow>
where
    I: IntoIterator<Item = (S, ParameterTriple)>,
    S: Into<String>,
{
    rank_with_policy(resin, candidates, ClassificationPolicy::new(threshold))
}

/// Score every candidate against `resin`, nearest first.
///
/// The sort is stable: equal distances keep candidate order. NaN distances
/// sort after every finite one.
pub fn rank_with_policy<I, S>(
    resin: ParameterTriple,
    candidates: I,
    policy: ClassificationPolicy,
) -> Vec<RankedRow>
where
    I: IntoIterator<Item = (S, ParameterTriple)>,
    S: Into<String>,
{
    let mut rows: Vec<RankedRow> = candidates
        .into_iter()
        .map(|(name, params)| {
            let distance = distance(resin, params);
            RankedRow {
                name: name.into(),
                params,
                distance,
                tier: policy.classify(distance),
            }
        })
        .collect();

    rows.sort_by(|a, b| ascending_nan_last(a.distance, b.distance));
    debug!(
        candidates = rows.len(),
        threshold = policy.threshold,
        "ranked candidates"
    );
    rows
}

fn ascending_nan_last(a: Real, b: Real) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn output_is_sorted_and_complete(
            params in prop::collection::vec((0.0_f64..30.0, 0.0_f64..30.0, 0.0_f64..30.0), 0..12),
        ) {
            let resin = ParameterTriple::new(17.0, 10.0, 8.0);
            let candidates: Vec<(String, ParameterTriple)> = params
                .iter()
                .enumerate()
                .map(|(i, &(dd, dp, dh))| (format!("s{i}"), ParameterTriple::new(dd, dp, dh)))
                .collect();

            let rows = rank(resin, candidates.clone(), 7.0);
            prop_assert_eq!(rows.len(), candidates.len());
            for pair in rows.windows(2) {
                prop_assert!(pair[0].distance <= pair[1].distance);
            }
        }
    }
}
