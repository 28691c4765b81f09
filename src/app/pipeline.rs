//! Shared sweep pipelines used by the CLI commands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! anchors -> per-status constants -> grid -> parallel evaluation
//!
//! The command handlers can then focus on presentation (printing, exports, figures).

use crate::data::StatusConstants;
use crate::domain::{GrowthConfig, Observation, SweepConfig, Trajectory};
use crate::error::AppError;
use crate::sweep::{
    age_grid, endpoint_grid, resolve_constants, run_endpoint_sweep, run_trajectory_sweep,
    trajectory_grid,
};

/// All computed outputs of a single `nasalis sweep` run.
#[derive(Debug, Clone)]
pub struct SweepOutput {
    pub constants: Vec<StatusConstants>,
    pub observations: Vec<Observation>,
}

/// All computed outputs of a single `nasalis growth` run.
#[derive(Debug, Clone)]
pub struct GrowthOutput {
    pub constants: Vec<StatusConstants>,
    pub trajectories: Vec<Trajectory>,
}

/// Execute the endpoint sweep and return the computed outputs.
pub fn run_sweep(config: &SweepConfig) -> Result<SweepOutput, AppError> {
    // 1) Per-status constants.
    let constants = resolve_constants(&config.anchors, &config.statuses)?;

    // 2) status x t_1 x cost grid.
    let cells = endpoint_grid(&constants, &config.costs, config.puberty_end_steps)?;
    tracing::info!(
        cells = cells.len(),
        age = config.endpoint_age,
        "running endpoint sweep"
    );

    // 3) Evaluate.
    let observations = run_endpoint_sweep(&cells, config.endpoint_age)?;

    Ok(SweepOutput {
        constants,
        observations,
    })
}

/// Execute the trajectory sweep and return the computed outputs.
pub fn run_growth(config: &GrowthConfig) -> Result<GrowthOutput, AppError> {
    let constants = resolve_constants(&config.anchors, &config.statuses)?;
    let cells = trajectory_grid(&constants, &config.costs)?;
    let ages = age_grid(config.max_age, config.age_steps)?;
    tracing::info!(
        trajectories = cells.len(),
        ages = ages.len(),
        "running trajectory sweep"
    );

    let trajectories = run_trajectory_sweep(&cells, &ages)?;

    Ok(GrowthOutput {
        constants,
        trajectories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Anchors, Status};

    fn sweep_config(statuses: Vec<Status>) -> SweepConfig {
        SweepConfig {
            anchors: Anchors::default(),
            statuses,
            costs: vec![0.01, 0.5, 0.99],
            endpoint_age: 2.0,
            puberty_end_steps: 10,
            plot: false,
            plot_width: 80,
            plot_height: 20,
            export_csv: None,
            export_run: None,
            figure_dir: None,
        }
    }

    #[test]
    fn sweep_covers_every_cell() {
        let out = run_sweep(&sweep_config(Vec::new())).unwrap();
        assert_eq!(out.constants.len(), 3);
        assert_eq!(out.observations.len(), 3 * 10 * 3);
        assert!(out.observations.iter().all(|o| o.age == 2.0));
    }

    #[test]
    fn sweep_respects_status_selection() {
        let out = run_sweep(&sweep_config(vec![Status::Female])).unwrap();
        assert!(out.observations.iter().all(|o| o.status == Status::Female));
        assert_eq!(out.observations.len(), 10 * 3);
    }

    #[test]
    fn sweep_rejects_bad_anchors() {
        let mut config = sweep_config(Vec::new());
        config.anchors.birth_mass = 30.0;
        let err = run_sweep(&config).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn growth_builds_three_curves_per_status_and_cost() {
        let config = GrowthConfig {
            anchors: Anchors::default(),
            statuses: vec![Status::Harem, Status::NonHarem],
            costs: vec![0.5],
            max_age: 2.0,
            age_steps: 50,
            plot: false,
            plot_width: 80,
            plot_height: 20,
            export_csv: None,
            export_run: None,
            figure: None,
        };
        let out = run_growth(&config).unwrap();
        assert_eq!(out.trajectories.len(), 2 * 3);
        assert!(out.trajectories.iter().all(|tr| tr.points.len() == 50));
        let last = out.trajectories[0].points.last().unwrap();
        assert_eq!(last.age, 2.0);
    }
}
