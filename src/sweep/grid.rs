//! Parameter grid generation.
//!
//! A sweep is a flat list of `(status, c, t_1)` cells; each cell is evaluated
//! independently, so the list can be processed in any order or in parallel.
//! Cell order is still deterministic so exported tables are stable.

use crate::data::StatusConstants;
use crate::error::AppError;
use crate::math::linspace;

/// One `(status, c, t_1)` combination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridCell {
    pub constants: StatusConstants,
    pub cost: f64,
    pub puberty_end: f64,
}

/// Reject non-finite costs; warn about costs outside the conventional `[0, 1]`.
pub fn validate_costs(costs: &[f64]) -> Result<(), AppError> {
    if costs.is_empty() {
        return Err(AppError::new(2, "At least one cost value is required."));
    }
    for &c in costs {
        if !c.is_finite() {
            return Err(AppError::new(2, format!("Invalid cost value: {c} (must be finite).")));
        }
        if !(0.0..=1.0).contains(&c) {
            tracing::warn!(cost = c, "cost outside the conventional [0, 1] range");
        }
    }
    Ok(())
}

/// Endpoint grid: for each status, every `t_1` in `linspace(t_0, T, steps)`
/// crossed with every cost.
pub fn endpoint_grid(
    constants: &[StatusConstants],
    costs: &[f64],
    steps: usize,
) -> Result<Vec<GridCell>, AppError> {
    validate_costs(costs)?;
    if steps < 1 {
        return Err(AppError::new(2, "Puberty-end steps must be >= 1."));
    }

    let mut out = Vec::with_capacity(constants.len() * costs.len() * steps);
    for sc in constants {
        for puberty_end in sc.puberty_end_grid(steps) {
            for &cost in costs {
                out.push(GridCell {
                    constants: *sc,
                    cost,
                    puberty_end,
                });
            }
        }
    }
    Ok(out)
}

/// Trajectory grid: for each status and cost, the early/mid/late `t_1` values.
pub fn trajectory_grid(constants: &[StatusConstants], costs: &[f64]) -> Result<Vec<GridCell>, AppError> {
    validate_costs(costs)?;

    let mut out = Vec::with_capacity(constants.len() * costs.len() * 3);
    for sc in constants {
        for &cost in costs {
            for puberty_end in sc.trajectory_puberty_ends() {
                out.push(GridCell {
                    constants: *sc,
                    cost,
                    puberty_end,
                });
            }
        }
    }
    Ok(out)
}

/// Evenly spaced ages from 0 to `max_age` (inclusive).
pub fn age_grid(max_age: f64, steps: usize) -> Result<Vec<f64>, AppError> {
    if !(max_age.is_finite() && max_age > 0.0) {
        return Err(AppError::new(2, format!("Invalid max age: {max_age} (must be finite and >0).")));
    }
    if steps < 2 {
        return Err(AppError::new(2, "Age steps must be >= 2."));
    }
    Ok(linspace(0.0, max_age, steps))
}
