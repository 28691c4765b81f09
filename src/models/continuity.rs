//! Continuity matching at the maturity boundary.
//!
//! After `T` the non-harem curve switches to a new exponent
//! `½β·t² − β·t_2·t` with its own offset `A_3`. Choosing
//!
//! ```text
//! A_3 = A · exp(E),   E = e_3(T) − (½β·T² − β·t_2·T)
//! ```
//!
//! makes `A_3·exp(e_5(T)) == A·exp(e_3(T))`, so the mass has no jump at `T`.
//! `E` is accumulated as the six per-regime terms below.

use crate::domain::{AgeBoundaries, GrowthRates};
use crate::error::ModelError;

/// Slope `β` of the maturity plateau ramp.
///
/// Raw arithmetic: with `t_2 == T` this divides by zero. [`plateau_offset`]
/// rejects that case before it gets here.
pub fn plateau_slope(rates: &GrowthRates, bounds: &AgeBoundaries) -> f64 {
    let GrowthRates { a, c, alpha } = *rates;
    a * (1.0 - c * alpha * bounds.t_1 + c * alpha * bounds.t_0) / (bounds.t_2 - bounds.maturity)
}

/// Compute `A_3` for the given rates, boundaries and initial offset `A`.
///
/// `ceiling` (`K`) is part of the contract so callers pass the full regime
/// parameter set; it must be finite and positive but does not enter `E`.
///
/// # Errors
/// - [`ModelError::InvalidParameter`] when the boundaries are out of order
///   (including `t_2 == T`) or the inputs are not finite.
/// - [`ModelError::NumericOverflow`] when `A_3` is not a finite positive number.
pub fn plateau_offset(
    ceiling: f64,
    rates: &GrowthRates,
    bounds: &AgeBoundaries,
    offset: f64,
) -> Result<f64, ModelError> {
    bounds.validate()?;
    if !(ceiling.is_finite() && ceiling > 0.0) {
        return Err(ModelError::invalid(format!("ceiling mass K={ceiling} must be finite and > 0")));
    }
    if !(rates.a.is_finite() && rates.c.is_finite() && rates.alpha.is_finite() && offset.is_finite()) {
        return Err(ModelError::invalid(format!(
            "rates and offset must be finite: a={}, c={}, alpha={}, A={offset}",
            rates.a, rates.c, rates.alpha
        )));
    }

    let GrowthRates { a, c, alpha } = *rates;
    let AgeBoundaries {
        t_0,
        t_1,
        maturity: big_t,
        t_2,
    } = *bounds;
    let beta = plateau_slope(rates, bounds);

    let f1 = 0.5 * a * c * alpha * t_0 * t_0;
    let f2 = -0.5 * a * c * alpha * t_1 * t_1;
    let f3 = -a * big_t;
    let f4 = a * c * alpha * t_1 * big_t;
    let f5 = -a * c * alpha * t_0 * big_t;
    let f6 = -beta * (0.5 * big_t * big_t - t_2 * big_t);
    let exponent = f1 + f2 + f3 + f4 + f5 + f6;

    let plateau = offset * exponent.exp();
    if !(plateau.is_finite() && plateau > 0.0) {
        return Err(ModelError::overflow(format!(
            "plateau offset A_3={plateau} (A={offset}, E={exponent}) is not a finite positive number"
        )));
    }
    Ok(plateau)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::logistic;
    use crate::models::body_mass::post_puberty_exponent;
    use approx::assert_relative_eq;

    fn male_rates(c: f64) -> GrowthRates {
        GrowthRates { a: 5.893489442967593, c, alpha: 2.0 }
    }

    #[test]
    fn plateau_matches_post_puberty_value_at_maturity() {
        let bounds = AgeBoundaries::new(0.5, 0.75, 1.0, 1.1).unwrap();
        let rates = male_rates(0.5);
        let offset = 55.666666666666664;
        let a3 = plateau_offset(25.5, &rates, &bounds, offset).unwrap();

        let beta = plateau_slope(&rates, &bounds);
        let before = logistic(25.5, offset, post_puberty_exponent(&rates, &bounds, 1.0));
        let after = logistic(25.5, a3, 0.5 * beta * 1.0 - beta * 1.1);
        assert_relative_eq!(before, after, epsilon = 1e-9);
    }

    #[test]
    fn rejects_degenerate_plateau() {
        let bounds = AgeBoundaries { t_0: 0.5, t_1: 0.75, maturity: 1.0, t_2: 1.0 };
        let err = plateau_offset(25.5, &male_rates(0.5), &bounds, 55.0).unwrap_err();
        assert!(matches!(err, ModelError::InvalidParameter { .. }));
    }

    #[test]
    fn rejects_unordered_boundaries() {
        let bounds = AgeBoundaries { t_0: 0.9, t_1: 0.75, maturity: 1.0, t_2: 1.1 };
        assert!(plateau_offset(25.5, &male_rates(0.5), &bounds, 55.0).is_err());
    }

    #[test]
    fn surfaces_overflow() {
        let bounds = AgeBoundaries::new(0.5, 0.75, 1.0, 1.0 + 1e-12).unwrap();
        let err = plateau_offset(25.5, &male_rates(0.5), &bounds, 55.0).unwrap_err();
        assert!(matches!(err, ModelError::NumericOverflow { .. }));
    }
}
