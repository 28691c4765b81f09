//! Sweep execution.
//!
//! Given a list of grid cells we:
//! - resolve the per-cell parameters (one `A_3` per `(c, t_1)`)
//! - evaluate mass and canine size at the requested ages
//!
//! Cells are independent, so evaluation runs on the rayon pool. Results are
//! collected in cell order.

use rayon::prelude::*;

use crate::data::StatusConstants;
use crate::domain::{Anchors, Observation, Status, Trajectory};
use crate::error::AppError;
use crate::models::GrowthParams;
use crate::sweep::grid::GridCell;

/// Initialize and derive the constants for each status, in the given order.
///
/// An empty status list means all statuses.
pub fn resolve_constants(anchors: &Anchors, statuses: &[Status]) -> Result<Vec<StatusConstants>, AppError> {
    let statuses: Vec<Status> = if statuses.is_empty() {
        Status::ALL.to_vec()
    } else {
        statuses.to_vec()
    };

    let mut out = Vec::with_capacity(statuses.len());
    for status in statuses {
        let sc = StatusConstants::for_status(status, anchors)?;
        tracing::info!(
            status = status.display_name(),
            a = format_args!("{:.3}", sc.base.rate),
            offset = format_args!("{:.3}", sc.base.offset),
            "derived base constants"
        );
        out.push(sc);
    }
    Ok(out)
}

fn resolve_params(cell: &GridCell) -> Result<GrowthParams, AppError> {
    let params = cell.constants.params(cell.cost, cell.puberty_end)?;
    tracing::debug!(
        status = cell.constants.status.display_name(),
        cost = cell.cost,
        t_1 = cell.puberty_end,
        a_3 = format_args!("{:.3}", params.shape.plateau_offset),
        "resolved plateau offset"
    );
    Ok(params)
}

/// Evaluate every cell at a single age.
pub fn run_endpoint_sweep(cells: &[GridCell], age: f64) -> Result<Vec<Observation>, AppError> {
    if !age.is_finite() {
        return Err(AppError::new(2, format!("Invalid endpoint age: {age}.")));
    }
    if cells.is_empty() {
        return Err(AppError::new(3, "Sweep grid is empty."));
    }

    cells
        .par_iter()
        .map(|cell| -> Result<Observation, AppError> {
            let params = resolve_params(cell)?;
            Ok(params.observe(age)?)
        })
        .collect()
}

/// Evaluate every cell along an age grid.
pub fn run_trajectory_sweep(cells: &[GridCell], ages: &[f64]) -> Result<Vec<Trajectory>, AppError> {
    if cells.is_empty() || ages.is_empty() {
        return Err(AppError::new(3, "Trajectory grid is empty."));
    }

    cells
        .par_iter()
        .map(|cell| -> Result<Trajectory, AppError> {
            let params = resolve_params(cell)?;
            let points = ages
                .iter()
                .map(|&t| params.observe(t))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(Trajectory {
                status: cell.constants.status,
                cost: cell.cost,
                puberty_end: cell.puberty_end,
                points,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Regime;
    use crate::sweep::grid::{age_grid, endpoint_grid, trajectory_grid};

    #[test]
    fn endpoint_sweep_matches_sequential_evaluation() {
        let constants = resolve_constants(&Anchors::default(), &[]).unwrap();
        let cells = endpoint_grid(&constants, &[0.01, 0.5, 0.99], 10).unwrap();
        let obs = run_endpoint_sweep(&cells, 2.0).unwrap();
        assert_eq!(obs.len(), cells.len());

        for (cell, o) in cells.iter().zip(&obs) {
            let params = cell.constants.params(cell.cost, cell.puberty_end).unwrap();
            assert_eq!(o.mass.to_bits(), params.mass_at(2.0).unwrap().to_bits());
            assert_eq!(o.status, cell.constants.status);
            assert_eq!(o.puberty_end, cell.puberty_end);
        }
    }

    #[test]
    fn endpoint_regimes_follow_status() {
        let constants = resolve_constants(&Anchors::default(), &[]).unwrap();
        let cells = endpoint_grid(&constants, &[0.5], 5).unwrap();
        for o in run_endpoint_sweep(&cells, 2.0).unwrap() {
            let expected = match o.status {
                Status::Harem => Regime::HaremContinuation,
                Status::NonHarem | Status::Female => Regime::Senescence,
            };
            assert_eq!(o.regime, expected);
            assert!(o.canine > 0.0 || o.puberty_end == 0.5);
        }
    }

    #[test]
    fn trajectories_start_at_birth_mass() {
        let constants = resolve_constants(&Anchors::default(), &[Status::Female]).unwrap();
        let cells = trajectory_grid(&constants, &[0.99]).unwrap();
        let ages = age_grid(2.0, 50).unwrap();
        let trajectories = run_trajectory_sweep(&cells, &ages).unwrap();
        assert_eq!(trajectories.len(), 3);
        for tr in &trajectories {
            assert_eq!(tr.points.len(), 50);
            assert!((tr.points[0].mass - 0.45).abs() < 1e-9);
            assert!(tr.points.iter().all(|p| p.mass < 14.5));
        }
    }

    #[test]
    fn empty_grid_is_an_error() {
        assert_eq!(run_endpoint_sweep(&[], 2.0).unwrap_err().exit_code(), 3);
    }
}
