//! Read/write run JSON files.
//!
//! A run JSON is the "portable" representation of a sweep:
//! - anchors and the derived per-status constants
//! - the evaluated observations and/or trajectories
//!
//! It can be re-plotted later without re-running the sweep. The schema is
//! defined by `domain::RunFile`.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use chrono::Utc;

use crate::data::StatusConstants;
use crate::domain::{Anchors, Observation, RunFile, Trajectory};
use crate::error::AppError;

/// Assemble a run file stamped with the current time.
pub fn build_run_file(
    anchors: &Anchors,
    constants: &[StatusConstants],
    observations: Vec<Observation>,
    trajectories: Vec<Trajectory>,
) -> RunFile {
    RunFile {
        tool: "nasalis".to_string(),
        generated_at: Utc::now(),
        anchors: *anchors,
        constants: constants.to_vec(),
        observations,
        trajectories,
    }
}

/// Write a run JSON file.
pub fn write_run_json(path: &Path, run: &RunFile) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create run JSON '{}': {e}", path.display())))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, run)
        .map_err(|e| AppError::new(2, format!("Failed to write run JSON: {e}")))?;
    writer
        .flush()
        .map_err(|e| AppError::new(2, format!("Failed to write run JSON: {e}")))?;
    Ok(())
}

/// Read a run JSON file.
pub fn read_run_json(path: &Path) -> Result<RunFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open run JSON '{}': {e}", path.display())))?;
    let run: RunFile = serde_json::from_reader(BufReader::new(file))
        .map_err(|e| AppError::new(2, format!("Invalid run JSON: {e}")))?;
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Status;
    use crate::sweep::{endpoint_grid, resolve_constants, run_endpoint_sweep};

    #[test]
    fn run_file_survives_disk() {
        let anchors = Anchors::default();
        let constants = resolve_constants(&anchors, &[Status::Harem, Status::Female]).unwrap();
        let cells = endpoint_grid(&constants, &[0.5], 4).unwrap();
        let observations = run_endpoint_sweep(&cells, 2.0).unwrap();
        let run = build_run_file(&anchors, &constants, observations.clone(), Vec::new());

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        write_run_json(&path, &run).unwrap();
        let back = read_run_json(&path).unwrap();

        assert_eq!(back.tool, "nasalis");
        assert_eq!(back.constants.len(), 2);
        assert_eq!(back.constants[1].status, Status::Female);
        assert!((back.constants[0].base.rate - constants[0].base.rate).abs() < 1e-12);
        assert_eq!(back.observations.len(), observations.len());
        assert_eq!(back.observations[0].status, Status::Harem);
        assert!(back.trajectories.is_empty());
    }

    #[test]
    fn invalid_json_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = read_run_json(&path).unwrap_err();
        assert!(err.to_string().starts_with("Invalid run JSON"));
    }
}
