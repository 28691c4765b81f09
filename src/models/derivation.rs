//! Base logistic constants from the birth and puberty-onset anchors.
//!
//! The pre-puberty segment `m = K / (1 + A·exp(-a·t))` must pass through
//! `(0, m_0)` and `(t_0, m_1)`, which pins both constants:
//!
//! ```text
//! A = K/m_0 - 1
//! a = -(1/t_0) · ln((K - m_1) / (A · m_1))
//! ```

use crate::domain::BaseConstants;
use crate::error::ModelError;

/// Derive `(a, A)` from the ceiling mass and the two anchor observations.
///
/// # Errors
/// Returns [`ModelError::InvalidParameter`] when an input is non-finite,
/// `m_0 <= 0`, `t_0 <= 0`, `K <= m_1`, or the logarithm argument is not positive.
pub fn derive_base_constants(
    ceiling: f64,
    birth_mass: f64,
    onset_mass: f64,
    onset_age: f64,
) -> Result<BaseConstants, ModelError> {
    if !(ceiling.is_finite() && birth_mass.is_finite() && onset_mass.is_finite() && onset_age.is_finite()) {
        return Err(ModelError::invalid(format!(
            "anchors must be finite: K={ceiling}, m_0={birth_mass}, m_1={onset_mass}, t_0={onset_age}"
        )));
    }
    if birth_mass <= 0.0 {
        return Err(ModelError::invalid(format!("birth mass m_0={birth_mass} must be > 0")));
    }
    if onset_age <= 0.0 {
        return Err(ModelError::invalid(format!("puberty onset t_0={onset_age} must be > 0")));
    }
    if ceiling <= onset_mass {
        return Err(ModelError::invalid(format!(
            "ceiling mass K={ceiling} must exceed puberty-onset mass m_1={onset_mass}"
        )));
    }

    let offset = ceiling / birth_mass - 1.0;
    let denom = offset * onset_mass;
    if denom <= 0.0 {
        return Err(ModelError::invalid(format!(
            "logarithm argument is not positive (A·m_1={denom}); check K and m_0"
        )));
    }
    let rate = -(1.0 / onset_age) * ((ceiling - onset_mass) / denom).ln();

    Ok(BaseConstants { rate, offset })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::logistic;
    use approx::assert_relative_eq;

    #[test]
    fn male_anchor_scenario() {
        let base = derive_base_constants(25.5, 0.45, 6.5, 0.5).unwrap();
        assert_relative_eq!(base.offset, 55.667, epsilon = 1e-3);
        assert_relative_eq!(base.rate, 5.893, epsilon = 1e-3);
    }

    #[test]
    fn derived_curve_passes_through_anchors() {
        let base = derive_base_constants(14.5, 0.45, 6.5, 0.5).unwrap();
        let at_birth = logistic(14.5, base.offset, 0.0);
        let at_onset = logistic(14.5, base.offset, -base.rate * 0.5);
        assert_relative_eq!(at_birth, 0.45, epsilon = 1e-12);
        assert_relative_eq!(at_onset, 6.5, epsilon = 1e-9);
    }

    #[test]
    fn rejects_inconsistent_anchors() {
        for (k, m0, m1, t0) in [
            (25.5, 0.0, 6.5, 0.5),
            (25.5, -1.0, 6.5, 0.5),
            (6.5, 0.45, 6.5, 0.5),
            (5.0, 0.45, 6.5, 0.5),
            (25.5, 0.45, 6.5, 0.0),
            (25.5, 0.45, -1.0, 0.5),
            (f64::INFINITY, 0.45, 6.5, 0.5),
        ] {
            let err = derive_base_constants(k, m0, m1, t0).unwrap_err();
            assert!(matches!(err, ModelError::InvalidParameter { .. }), "K={k} m0={m0} m1={m1} t0={t0}");
        }
    }
}
