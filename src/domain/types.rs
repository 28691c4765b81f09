//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during sweeps
//! - exported to JSON/CSV
//! - reloaded later for plotting

use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Social status of an individual.
///
/// Harem-holding males keep following the pre-maturity curve past `T`; the
/// other two statuses enter the maturity plateau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Harem,
    NonHarem,
    Female,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Harem, Status::NonHarem, Status::Female];

    /// Human-readable label for terminal output and figure legends.
    pub fn display_name(self) -> &'static str {
        match self {
            Status::Harem => "Harem",
            Status::NonHarem => "Non-harem",
            Status::Female => "Female",
        }
    }

    /// Single-character marker used by the ASCII plots.
    pub fn marker(self) -> char {
        match self {
            Status::Harem => 'H',
            Status::NonHarem => 'N',
            Status::Female => 'F',
        }
    }

    pub fn is_male(self) -> bool {
        matches!(self, Status::Harem | Status::NonHarem)
    }
}

/// Regime-switch points on the normalized age axis.
///
/// Required ordering: `t_0 <= t_1 <= maturity < t_2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeBoundaries {
    /// Puberty onset.
    pub t_0: f64,
    /// End of puberty growth deceleration.
    pub t_1: f64,
    /// Maturity (`T`).
    pub maturity: f64,
    /// Senescence onset.
    pub t_2: f64,
}

impl AgeBoundaries {
    pub fn new(t_0: f64, t_1: f64, maturity: f64, t_2: f64) -> Result<Self, ModelError> {
        let bounds = Self {
            t_0,
            t_1,
            maturity,
            t_2,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    /// Check finiteness and ordering of the boundaries.
    pub fn validate(&self) -> Result<(), ModelError> {
        let Self {
            t_0,
            t_1,
            maturity,
            t_2,
        } = *self;
        if !(t_0.is_finite() && t_1.is_finite() && maturity.is_finite() && t_2.is_finite()) {
            return Err(ModelError::invalid(format!(
                "age boundaries must be finite: t_0={t_0}, t_1={t_1}, T={maturity}, t_2={t_2}"
            )));
        }
        if t_0 > t_1 {
            return Err(ModelError::invalid(format!(
                "puberty onset t_0={t_0} is after t_1={t_1}"
            )));
        }
        if t_1 > maturity {
            return Err(ModelError::invalid(format!(
                "t_1={t_1} is after maturity T={maturity}"
            )));
        }
        if maturity == t_2 {
            return Err(ModelError::invalid(format!(
                "senescence onset t_2 equals maturity T={maturity}; plateau slope is undefined"
            )));
        }
        if maturity > t_2 {
            return Err(ModelError::invalid(format!(
                "maturity T={maturity} is after senescence onset t_2={t_2}"
            )));
        }
        Ok(())
    }
}

/// Growth-rate parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GrowthRates {
    /// Base intrinsic growth rate `a`.
    pub a: f64,
    /// Cost coefficient `c`, conventionally in `[0, 1]`.
    pub c: f64,
    /// Canine growth rate per unit age.
    pub alpha: f64,
}

/// The two constants derived from the birth and puberty-onset anchors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BaseConstants {
    /// Intrinsic growth rate `a`.
    pub rate: f64,
    /// Initial logistic offset `A`.
    pub offset: f64,
}

/// Logistic shape parameters of the body-mass curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LogisticShape {
    /// Asymptotic mass `K`.
    pub ceiling: f64,
    /// Initial offset `A`.
    pub offset: f64,
    /// Post-maturity offset `A_3`.
    pub plateau_offset: f64,
}

/// Anchor observations and sex-specific adjustments used to initialize the
/// per-status constants.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Anchors {
    /// Mass at age 0 (kg).
    pub birth_mass: f64,
    /// Mass at puberty onset (kg).
    pub onset_mass: f64,
    /// Normalized age of puberty onset.
    pub onset_age: f64,
    /// Gap between maturity and senescence onset.
    pub senescence_lag: f64,
    /// Female-to-male canine growth ratio.
    pub canine_ratio: f64,
}

impl Default for Anchors {
    fn default() -> Self {
        Self {
            birth_mass: 0.45,
            onset_mass: 6.5,
            onset_age: 0.5,
            senescence_lag: 0.1,
            canine_ratio: 10.0 / 24.0,
        }
    }
}

/// One evaluated `(t, m, z)` point with the parameters that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub status: Status,
    pub cost: f64,
    pub puberty_end: f64,
    pub age: f64,
    pub mass: f64,
    pub canine: f64,
    pub regime: crate::models::Regime,
}

/// A mass trajectory for one `(status, c, t_1)` combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trajectory {
    pub status: Status,
    pub cost: f64,
    pub puberty_end: f64,
    pub points: Vec<Observation>,
}

/// Endpoint sweep configuration.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub anchors: Anchors,
    pub statuses: Vec<Status>,
    pub costs: Vec<f64>,
    /// Age at which every grid point is evaluated.
    pub endpoint_age: f64,
    /// Number of `t_1` values between `t_0` and `T` (inclusive).
    pub puberty_end_steps: usize,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_csv: Option<PathBuf>,
    pub export_run: Option<PathBuf>,
    pub figure_dir: Option<PathBuf>,
}

/// Trajectory sweep configuration.
#[derive(Debug, Clone)]
pub struct GrowthConfig {
    pub anchors: Anchors,
    pub statuses: Vec<Status>,
    pub costs: Vec<f64>,
    pub max_age: f64,
    pub age_steps: usize,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export_csv: Option<PathBuf>,
    pub export_run: Option<PathBuf>,
    pub figure: Option<PathBuf>,
}

/// Synthetic sample configuration.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    pub anchors: Anchors,
    pub statuses: Vec<Status>,
    pub cost: f64,
    pub sample_count: usize,
    pub seed: u64,
    pub age_min: f64,
    pub age_max: f64,
    /// Log-scale standard deviation of the mass noise.
    pub mass_sigma: f64,
    /// Additive standard deviation of the canine noise.
    pub canine_sigma: f64,
    pub export_csv: Option<PathBuf>,
}

/// A saved run file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunFile {
    pub tool: String,
    pub generated_at: chrono::DateTime<chrono::Utc>,
    pub anchors: Anchors,
    pub constants: Vec<crate::data::StatusConstants>,
    #[serde(default)]
    pub observations: Vec<Observation>,
    #[serde(default)]
    pub trajectories: Vec<Trajectory>,
}
