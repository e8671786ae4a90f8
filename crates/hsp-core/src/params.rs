//! Hansen solubility parameter triple.

use core::fmt;

use crate::numeric::{Real, ensure_finite};
use crate::HspResult;

/// Hansen solubility parameters of one material, in MPa^0.5.
///
/// - `dd`: dispersion (δD)
/// - `dp`: polar (δP)
/// - `dh`: hydrogen bonding (δH)
///
/// Values are usually within 0..30 but no bound is enforced.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParameterTriple {
    dd: Real,
    dp: Real,
    dh: Real,
}

impl ParameterTriple {
    pub const fn new(dd: Real, dp: Real, dh: Real) -> Self {
        Self { dd, dp, dh }
    }

    pub fn dd(&self) -> Real {
        self.dd
    }

    pub fn dp(&self) -> Real {
        self.dp
    }

    pub fn dh(&self) -> Real {
        self.dh
    }

    /// Components as `[δD, δP, δH]`.
    pub fn as_array(&self) -> [Real; 3] {
        [self.dd, self.dp, self.dh]
    }

    /// Rejects NaN and infinite components. Range is not checked.
    pub fn ensure_finite(self) -> HspResult<Self> {
        ensure_finite(self.dd, "dd")?;
        ensure_finite(self.dp, "dp")?;
        ensure_finite(self.dh, "dh")?;
        Ok(self)
    }
}

impl From<(Real, Real, Real)> for ParameterTriple {
    fn from((dd, dp, dh): (Real, Real, Real)) -> Self {
        Self::new(dd, dp, dh)
    }
}

impl fmt::Display for ParameterTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(δD={:.1}, δP={:.1}, δH={:.1})", self.dd, self.dp, self.dh)
    }
}
