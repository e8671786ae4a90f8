//! Compatibility tiers and the policy mapping Ra onto them.

use core::fmt;

use hsp_core::Real;
use serde::{Deserialize, Serialize};

/// Default Ra threshold at or below which a pair counts as compatible.
pub const DEFAULT_THRESHOLD: Real = 7.0;

/// Width of the borderline band above the threshold.
pub const DEFAULT_MARGIN: Real = 2.0;

/// Predicted compatibility of a resin/solvent pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Compatible,
    Borderline,
    Incompatible,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Compatible => "Highly Compatible",
            Tier::Borderline => "Borderline Compatibility",
            Tier::Incompatible => "Incompatible",
        }
    }

    /// Badge colour name used by renderers.
    pub fn badge_color(self) -> &'static str {
        match self {
            Tier::Compatible => "green",
            Tier::Borderline => "yellow",
            Tier::Incompatible => "red",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Tier::Compatible => "🟢",
            Tier::Borderline => "🟡",
            Tier::Incompatible => "🔴",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Threshold and borderline margin applied to Ra.
///
/// - `ra <= threshold` is compatible
/// - `threshold < ra <= threshold + margin` is borderline
/// - anything else (including NaN) is incompatible
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassificationPolicy {
    pub threshold: Real,
    pub margin: Real,
}

impl Default for ClassificationPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            margin: DEFAULT_MARGIN,
        }
    }
}

impl ClassificationPolicy {
    /// Policy with the given threshold and the default margin.
    pub fn new(threshold: Real) -> Self {
        Self {
            threshold,
            margin: DEFAULT_MARGIN,
        }
    }

    pub fn with_margin(self, margin: Real) -> Self {
        Self { margin, ..self }
    }

    /// Fixed bands: compatible up to 4, borderline up to 7.
    pub fn fixed_bands() -> Self {
        Self {
            threshold: 4.0,
            margin: 3.0,
        }
    }

    /// Upper edge of the borderline band.
    pub fn borderline_limit(&self) -> Real {
        self.threshold + self.margin
    }

    pub fn classify(&self, ra: Real) -> Tier {
        if ra <= self.threshold {
            Tier::Compatible
        } else if ra <= self.borderline_limit() {
            Tier::Borderline
        } else {
            Tier::Incompatible
        }
    }
}

/// Classify `ra` against `threshold` with the default margin.
pub fn classify(ra: Real, threshold: Real) -> Tier {
    ClassificationPolicy::new(threshold).classify(ra)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_are_closed_below() {
        assert_eq!(classify(7.0, 7.0), Tier::Compatible);
        assert_eq!(classify(7.000_001, 7.0), Tier::Borderline);
        assert_eq!(classify(9.0, 7.0), Tier::Borderline);
        assert_eq!(classify(9.000_001, 7.0), Tier::Incompatible);
        assert_eq!(classify(0.0, 7.0), Tier::Compatible);
    }

    #[test]
    fn fixed_bands_match_four_and_seven() {
        let policy = ClassificationPolicy::fixed_bands();
        assert_eq!(policy.classify(4.0), Tier::Compatible);
        assert_eq!(policy.classify(5.5), Tier::Borderline);
        assert_eq!(policy.classify(7.0), Tier::Borderline);
        assert_eq!(policy.classify(7.1), Tier::Incompatible);
    }

    #[test]
    fn zero_margin_has_no_borderline_band() {
        let policy = ClassificationPolicy::new(5.0).with_margin(0.0);
        assert_eq!(policy.classify(5.0), Tier::Compatible);
        assert_eq!(policy.classify(5.01), Tier::Incompatible);
    }

    #[test]
    fn nan_is_incompatible() {
        assert_eq!(classify(f64::NAN, 7.0), Tier::Incompatible);
    }

    #[test]
    fn labels() {
        assert_eq!(Tier::Compatible.to_string(), "Highly Compatible");
        assert_eq!(Tier::Borderline.badge_color(), "yellow");
        assert_eq!(Tier::Incompatible.symbol(), "🔴");
    }
}
