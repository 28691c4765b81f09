//! Per-status boundary constants.
//!
//! Males share one set of constants; harem and non-harem males only diverge in
//! which regimes they enter after maturity. Females reach maturity earlier
//! (around six years, `T = 6/8` on the normalized axis) at a lighter ceiling
//! mass, with a scaled-down canine growth rate.

use serde::{Deserialize, Serialize};

use crate::domain::{AgeBoundaries, Anchors, BaseConstants, Status};
use crate::error::ModelError;
use crate::math::linspace;
use crate::models::{GrowthParams, derive_base_constants};

/// Asymptotic body mass (kg) for males.
pub const MALE_CEILING_KG: f64 = 25.5;
/// Asymptotic body mass (kg) for females.
pub const FEMALE_CEILING_KG: f64 = 14.5;
/// Normalized maturity age for males.
pub const MALE_MATURITY: f64 = 1.0;
/// Normalized maturity age for females.
pub const FEMALE_MATURITY: f64 = 6.0 / 8.0;

/// Cost levels used by the reference sweeps.
pub const DEFAULT_COSTS: [f64; 3] = [0.01, 0.50, 0.99];
/// Age (≈ 8 years) at which endpoint sweeps are evaluated.
pub const DEFAULT_ENDPOINT_AGE: f64 = 2.0;

/// Constants that depend only on status (and the anchors).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatusConstants {
    pub status: Status,
    /// `K`.
    pub ceiling: f64,
    /// `T`.
    pub maturity: f64,
    /// `t_2`.
    pub senescence: f64,
    pub alpha: f64,
    /// `t_0`.
    pub onset_age: f64,
    pub base: BaseConstants,
}

impl StatusConstants {
    /// Initialize the constants for `status` and derive `(a, A)`.
    pub fn for_status(status: Status, anchors: &Anchors) -> Result<Self, ModelError> {
        let (ceiling, maturity) = if status.is_male() {
            (MALE_CEILING_KG, MALE_MATURITY)
        } else {
            (FEMALE_CEILING_KG, FEMALE_MATURITY)
        };
        Self::with_ceiling(status, ceiling, maturity, anchors)
    }

    pub fn with_ceiling(
        status: Status,
        ceiling: f64,
        maturity: f64,
        anchors: &Anchors,
    ) -> Result<Self, ModelError> {
        let onset_age = anchors.onset_age;
        if !(maturity.is_finite() && maturity > onset_age) {
            return Err(ModelError::invalid(format!(
                "maturity T={maturity} must come after puberty onset t_0={onset_age}"
            )));
        }
        if !(anchors.senescence_lag.is_finite() && anchors.senescence_lag > 0.0) {
            return Err(ModelError::invalid(format!(
                "senescence lag {} must be finite and > 0",
                anchors.senescence_lag
            )));
        }
        if !(anchors.canine_ratio.is_finite() && anchors.canine_ratio > 0.0) {
            return Err(ModelError::invalid(format!(
                "canine ratio {} must be finite and > 0",
                anchors.canine_ratio
            )));
        }

        let male_alpha = 1.0 / (maturity - onset_age);
        let alpha = if status.is_male() {
            male_alpha
        } else {
            male_alpha * anchors.canine_ratio
        };
        let base = derive_base_constants(ceiling, anchors.birth_mass, anchors.onset_mass, onset_age)?;

        Ok(Self {
            status,
            ceiling,
            maturity,
            senescence: maturity + anchors.senescence_lag,
            alpha,
            onset_age,
            base,
        })
    }

    pub fn bounds(&self, puberty_end: f64) -> Result<AgeBoundaries, ModelError> {
        AgeBoundaries::new(self.onset_age, puberty_end, self.maturity, self.senescence)
    }

    /// Build the resolved parameter set for one `(c, t_1)` pair.
    pub fn params(&self, cost: f64, puberty_end: f64) -> Result<GrowthParams, ModelError> {
        GrowthParams::build(
            self.status,
            self.ceiling,
            self.base,
            cost,
            self.alpha,
            self.bounds(puberty_end)?,
        )
    }

    /// `t_1` values from `t_0` to `T`, endpoints included.
    pub fn puberty_end_grid(&self, steps: usize) -> Vec<f64> {
        linspace(self.onset_age, self.maturity, steps)
    }

    /// Early, midpoint and late `t_1` used for trajectory figures.
    pub fn trajectory_puberty_ends(&self) -> [f64; 3] {
        [
            self.onset_age + 0.01,
            (self.onset_age + self.maturity) / 2.0,
            self.maturity - 0.01,
        ]
    }
}
