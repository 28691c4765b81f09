//! Piecewise logistic body-mass model.
//!
//! Six time-ordered regimes share the logistic kernel `K / (1 + A_eff·exp(e))`
//! and differ only in their exponent `e(t)` and offset `A_eff`:
//!
//! | regime              | when                       | offset |
//! |---------------------|----------------------------|--------|
//! | `PrePuberty`        | `t < t_0`                  | `A`    |
//! | `PubertyRamp`       | `t_0 <= t < t_1`           | `A`    |
//! | `PostPuberty`       | `t_1 <= t <= T`            | `A`    |
//! | `HaremContinuation` | `t > T`, harem             | `A`    |
//! | `MaturityRamp`      | `T < t < t_2`, not harem   | `A_3`  |
//! | `Senescence`        | `t >= t_2`, not harem      | `A_3`  |

use serde::{Deserialize, Serialize};

use crate::domain::{AgeBoundaries, GrowthRates, LogisticShape, Status};
use crate::math::logistic;
use crate::models::continuity::plateau_slope;

/// One segment of the piecewise mass curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Regime {
    PrePuberty,
    PubertyRamp,
    PostPuberty,
    HaremContinuation,
    MaturityRamp,
    Senescence,
}

impl Regime {
    /// Select the regime for age `t`.
    ///
    /// Arms are checked in order: `t_0`, `t_1`, `T`, harem, `t_2`.
    /// A NaN age falls through every comparison into one of the two last arms,
    /// so callers that accept untrusted ages should reject NaN first.
    pub fn select(t: f64, bounds: &AgeBoundaries, status: Status) -> Regime {
        match status {
            _ if t < bounds.t_0 => Regime::PrePuberty,
            _ if t < bounds.t_1 => Regime::PubertyRamp,
            _ if t <= bounds.maturity => Regime::PostPuberty,
            Status::Harem => Regime::HaremContinuation,
            Status::NonHarem | Status::Female if t < bounds.t_2 => Regime::MaturityRamp,
            Status::NonHarem | Status::Female => Regime::Senescence,
        }
    }

    /// Exponent `e(t)` of this regime.
    pub fn exponent(self, t: f64, rates: &GrowthRates, bounds: &AgeBoundaries) -> f64 {
        match self {
            Regime::PrePuberty => -rates.a * t,
            Regime::PubertyRamp => puberty_ramp_exponent(rates, bounds, t),
            Regime::PostPuberty | Regime::HaremContinuation => {
                post_puberty_exponent(rates, bounds, t)
            }
            Regime::MaturityRamp => {
                let beta = plateau_slope(rates, bounds);
                0.5 * beta * t * t - beta * bounds.t_2 * t
            }
            Regime::Senescence => {
                // Flat asymptote: both terms use t_2, not the live age.
                let beta = plateau_slope(rates, bounds);
                0.5 * beta * bounds.t_2 * bounds.t_2 - beta * bounds.t_2 * bounds.t_2
            }
        }
    }

    /// Logistic offset used by this regime.
    pub fn offset(self, shape: &LogisticShape) -> f64 {
        match self {
            Regime::PrePuberty
            | Regime::PubertyRamp
            | Regime::PostPuberty
            | Regime::HaremContinuation => shape.offset,
            Regime::MaturityRamp | Regime::Senescence => shape.plateau_offset,
        }
    }

    /// True for the three regimes every status shares up to `T`.
    pub fn is_pre_maturity(self) -> bool {
        matches!(self, Regime::PrePuberty | Regime::PubertyRamp | Regime::PostPuberty)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Regime::PrePuberty => "pre-puberty",
            Regime::PubertyRamp => "puberty ramp",
            Regime::PostPuberty => "post-puberty",
            Regime::HaremContinuation => "harem continuation",
            Regime::MaturityRamp => "maturity ramp",
            Regime::Senescence => "senescence plateau",
        }
    }
}

pub(crate) fn puberty_ramp_exponent(rates: &GrowthRates, bounds: &AgeBoundaries, t: f64) -> f64 {
    let GrowthRates { a, c, alpha } = *rates;
    let t_0 = bounds.t_0;
    0.5 * a * c * alpha * t_0 * t_0 + 0.5 * a * c * alpha * t * t - a * t * (1.0 + c * alpha * t_0)
}

/// Exponent of the post-puberty segment, also followed by harem males past `T`.
pub fn post_puberty_exponent(rates: &GrowthRates, bounds: &AgeBoundaries, t: f64) -> f64 {
    let GrowthRates { a, c, alpha } = *rates;
    let AgeBoundaries { t_0, t_1, .. } = *bounds;
    0.5 * a * c * alpha * t_0 * t_0 - 0.5 * a * c * alpha * t_1 * t_1 - a * t
        + a * c * alpha * t_1 * t
        - a * c * alpha * t_0 * t
}

/// Evaluate the body mass at age `t`.
///
/// Pure IEEE arithmetic; see [`crate::models::GrowthParams::mass_at`] for the
/// checked variant.
pub fn body_mass(
    t: f64,
    rates: &GrowthRates,
    bounds: &AgeBoundaries,
    shape: &LogisticShape,
    status: Status,
) -> f64 {
    let regime = Regime::select(t, bounds, status);
    logistic(shape.ceiling, regime.offset(shape), regime.exponent(t, rates, bounds))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::continuity::plateau_offset;
    use crate::models::derivation::derive_base_constants;
    use approx::assert_relative_eq;

    struct Fixture {
        rates: GrowthRates,
        bounds: AgeBoundaries,
        shape: LogisticShape,
    }

    fn fixture(ceiling: f64, c: f64, t_1: f64, maturity: f64) -> Fixture {
        let base = derive_base_constants(ceiling, 0.45, 6.5, 0.5).unwrap();
        let alpha = 1.0 / (maturity - 0.5);
        let rates = GrowthRates { a: base.rate, c, alpha };
        let bounds = AgeBoundaries::new(0.5, t_1, maturity, maturity + 0.1).unwrap();
        let plateau = plateau_offset(ceiling, &rates, &bounds, base.offset).unwrap();
        Fixture {
            rates,
            bounds,
            shape: LogisticShape { ceiling, offset: base.offset, plateau_offset: plateau },
        }
    }

    fn mass(f: &Fixture, t: f64, status: Status) -> f64 {
        body_mass(t, &f.rates, &f.bounds, &f.shape, status)
    }

    #[test]
    fn regime_selection_order() {
        let b = AgeBoundaries::new(0.5, 0.75, 1.0, 1.1).unwrap();
        let nh = Status::NonHarem;
        assert_eq!(Regime::select(0.0, &b, nh), Regime::PrePuberty);
        assert_eq!(Regime::select(0.5, &b, nh), Regime::PubertyRamp);
        assert_eq!(Regime::select(0.75, &b, nh), Regime::PostPuberty);
        assert_eq!(Regime::select(1.0, &b, nh), Regime::PostPuberty);
        assert_eq!(Regime::select(1.05, &b, nh), Regime::MaturityRamp);
        assert_eq!(Regime::select(1.1, &b, nh), Regime::Senescence);
        assert_eq!(Regime::select(1.05, &b, Status::Female), Regime::MaturityRamp);
        assert_eq!(Regime::select(1.05, &b, Status::Harem), Regime::HaremContinuation);
        assert_eq!(Regime::select(5.0, &b, Status::Harem), Regime::HaremContinuation);
    }

    #[test]
    fn equal_onset_and_end_skips_ramp() {
        let b = AgeBoundaries::new(0.5, 0.5, 1.0, 1.1).unwrap();
        assert_eq!(Regime::select(0.5, &b, Status::Female), Regime::PostPuberty);
    }

    #[test]
    fn continuous_at_every_boundary() {
        let eps = 1e-9;
        for status in Status::ALL {
            let f = if status.is_male() {
                fixture(25.5, 0.5, 0.75, 1.0)
            } else {
                fixture(14.5, 0.5, 0.6, 0.75)
            };
            let mut edges = vec![f.bounds.t_0, f.bounds.t_1, f.bounds.maturity];
            if status != Status::Harem {
                edges.push(f.bounds.t_2);
            }
            for edge in edges {
                let below = mass(&f, edge - eps, status);
                let above = mass(&f, edge + eps, status);
                assert!(
                    (below - above).abs() < 1e-6,
                    "{status:?} jumps at {edge}: {below} vs {above}"
                );
            }
        }
    }

    #[test]
    fn mass_stays_inside_bounds() {
        for &c in &[0.01, 0.5, 0.99] {
            for &t_1 in &[0.5, 0.75, 1.0] {
                let f = fixture(25.5, c, t_1, 1.0);
                for i in 0..=200 {
                    let t = i as f64 * 0.01;
                    for status in [Status::Harem, Status::NonHarem] {
                        let m = mass(&f, t, status);
                        assert!(m > 0.0 && m < 25.5, "m={m} at t={t} c={c} t_1={t_1}");
                    }
                }
            }
        }
    }

    #[test]
    fn harem_follows_post_puberty_past_maturity() {
        let f = fixture(25.5, 0.5, 0.75, 1.0);
        for &t in &[1.01, 1.05, 1.1, 1.5, 2.0] {
            let expected = logistic(25.5, f.shape.offset, post_puberty_exponent(&f.rates, &f.bounds, t));
            assert_eq!(mass(&f, t, Status::Harem), expected);
        }
    }

    #[test]
    fn non_harem_divergence_grows_toward_senescence() {
        let f = fixture(25.5, 0.5, 0.75, 1.0);
        let gap = |t: f64| mass(&f, t, Status::Harem) - mass(&f, t, Status::NonHarem);
        let near = gap(1.02);
        let mid = gap(1.05);
        let far = gap(1.09);
        assert!(near > 0.0);
        assert!(near < mid && mid < far, "{near} {mid} {far}");
    }

    #[test]
    fn senescence_is_flat() {
        let f = fixture(25.5, 0.99, 0.9, 1.0);
        let at_onset = mass(&f, 1.1, Status::NonHarem);
        assert_eq!(mass(&f, 1.6, Status::NonHarem), at_onset);
        assert_eq!(mass(&f, 2.0, Status::NonHarem), at_onset);
        let beta = plateau_slope(&f.rates, &f.bounds);
        assert_relative_eq!(
            Regime::Senescence.exponent(2.0, &f.rates, &f.bounds),
            -0.5 * beta * 1.1 * 1.1,
            epsilon = 1e-9
        );
    }

    #[test]
    fn evaluation_is_bit_identical() {
        let f = fixture(14.5, 0.01, 0.6, 0.75);
        for &t in &[0.1, 0.55, 0.7, 0.8, 1.9] {
            let first = mass(&f, t, Status::Female);
            let second = mass(&f, t, Status::Female);
            assert_eq!(first.to_bits(), second.to_bits());
        }
    }
}
