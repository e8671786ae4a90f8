use crate::HspError;

/// Floating point type used throughout system
pub type Real = f64;

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, HspError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(HspError::NonFinite { what, value: v })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_finite_detects_nan_and_infinity() {
        let err = ensure_finite(Real::NAN, "dd").unwrap_err();
        assert!(format!("{err}").contains("Non-finite"));
        assert!(ensure_finite(Real::NEG_INFINITY, "dh").is_err());
    }
}
