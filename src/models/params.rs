//! Fully resolved parameter set for one `(status, c, t_1)` combination.
//!
//! Building a [`GrowthParams`] runs the continuity calculation once; every
//! subsequent age evaluation is plain arithmetic.

use serde::{Deserialize, Serialize};

use crate::domain::{AgeBoundaries, BaseConstants, GrowthRates, LogisticShape, Observation, Status};
use crate::error::ModelError;
use crate::models::body_mass::{Regime, body_mass};
use crate::models::canine::canine_size;
use crate::models::continuity::plateau_offset;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthParams {
    pub status: Status,
    pub rates: GrowthRates,
    pub bounds: AgeBoundaries,
    pub shape: LogisticShape,
}

impl GrowthParams {
    /// Resolve `A_3` and bundle everything the evaluators need.
    pub fn build(
        status: Status,
        ceiling: f64,
        base: BaseConstants,
        cost: f64,
        alpha: f64,
        bounds: AgeBoundaries,
    ) -> Result<Self, ModelError> {
        let rates = GrowthRates {
            a: base.rate,
            c: cost,
            alpha,
        };
        let plateau = plateau_offset(ceiling, &rates, &bounds, base.offset)?;
        Ok(Self {
            status,
            rates,
            bounds,
            shape: LogisticShape {
                ceiling,
                offset: base.offset,
                plateau_offset: plateau,
            },
        })
    }

    pub fn regime_at(&self, t: f64) -> Regime {
        Regime::select(t, &self.bounds, self.status)
    }

    /// Checked body-mass evaluation.
    ///
    /// # Errors
    /// [`ModelError::InvalidParameter`] for a non-finite age and
    /// [`ModelError::NumericOverflow`] when the mass is not finite and positive.
    pub fn mass_at(&self, t: f64) -> Result<f64, ModelError> {
        if !t.is_finite() {
            return Err(ModelError::invalid(format!("age t={t} must be finite")));
        }
        let m = body_mass(t, &self.rates, &self.bounds, &self.shape, self.status);
        if !(m.is_finite() && m > 0.0) {
            return Err(ModelError::overflow(format!(
                "body mass at t={t} evaluated to {m} ({} regime)",
                self.regime_at(t).display_name()
            )));
        }
        Ok(m)
    }

    pub fn canine_at(&self, t: f64) -> f64 {
        canine_size(t, self.bounds.t_0, self.bounds.t_1, self.rates.c, self.rates.alpha)
    }

    /// Evaluate both traits at `t` into an observation record.
    pub fn observe(&self, t: f64) -> Result<Observation, ModelError> {
        let mass = self.mass_at(t)?;
        Ok(Observation {
            status: self.status,
            cost: self.rates.c,
            puberty_end: self.bounds.t_1,
            age: t,
            mass,
            canine: self.canine_at(t),
            regime: self.regime_at(t),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::derivation::derive_base_constants;

    fn male(status: Status) -> GrowthParams {
        let base = derive_base_constants(25.5, 0.45, 6.5, 0.5).unwrap();
        let bounds = AgeBoundaries::new(0.5, 0.8, 1.0, 1.1).unwrap();
        GrowthParams::build(status, 25.5, base, 0.5, 2.0, bounds).unwrap()
    }

    #[test]
    fn observe_combines_both_traits() {
        let p = male(Status::NonHarem);
        let obs = p.observe(0.6).unwrap();
        assert_eq!(obs.regime, Regime::PubertyRamp);
        assert!((obs.canine - 0.2).abs() < 1e-12);
        assert!(obs.mass > 6.5 && obs.mass < 25.5);
        assert_eq!(obs.puberty_end, 0.8);
        assert_eq!(obs.cost, 0.5);
    }

    #[test]
    fn harem_and_non_harem_share_plateau_offset() {
        let h = male(Status::Harem);
        let n = male(Status::NonHarem);
        assert_eq!(h.shape.plateau_offset, n.shape.plateau_offset);
        assert_eq!(h.mass_at(0.9).unwrap(), n.mass_at(0.9).unwrap());
        assert_ne!(h.mass_at(1.05).unwrap(), n.mass_at(1.05).unwrap());
    }

    #[test]
    fn rejects_nan_age() {
        let p = male(Status::Female);
        assert!(matches!(p.mass_at(f64::NAN), Err(ModelError::InvalidParameter { .. })));
    }

    #[test]
    fn surfaces_mass_overflow() {
        let base = BaseConstants { rate: -800.0, offset: 1.0 };
        let bounds = AgeBoundaries::new(0.5, 0.8, 1.0, 100.0).unwrap();
        let p = GrowthParams::build(Status::Harem, 25.5, base, 0.0, 2.0, bounds).unwrap();
        assert!(matches!(p.mass_at(0.99), Err(ModelError::NumericOverflow { .. })));
    }
}
