//! Export observations and synthetic samples to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::data::SampleIndividual;
use crate::domain::{Observation, Trajectory};
use crate::error::AppError;

const OBSERVATION_HEADER: &str = "status,c,t_1,t,m,z,regime";

/// Write observation records to a CSV file.
pub fn write_observations_csv(path: &Path, observations: &[Observation]) -> Result<(), AppError> {
    let mut file = create(path)?;
    writeln!(file, "{OBSERVATION_HEADER}").map_err(header_err)?;
    for o in observations {
        write_observation_row(&mut file, o)?;
    }
    file.flush().map_err(row_err)?;
    Ok(())
}

/// Write every trajectory point to a CSV file (same columns as observations).
pub fn write_trajectories_csv(path: &Path, trajectories: &[Trajectory]) -> Result<(), AppError> {
    let mut file = create(path)?;
    writeln!(file, "{OBSERVATION_HEADER}").map_err(header_err)?;
    for tr in trajectories {
        for o in &tr.points {
            write_observation_row(&mut file, o)?;
        }
    }
    file.flush().map_err(row_err)?;
    Ok(())
}

/// Write a synthetic sample to a CSV file.
pub fn write_sample_csv(path: &Path, individuals: &[SampleIndividual]) -> Result<(), AppError> {
    let mut file = create(path)?;
    writeln!(
        file,
        "id,status,t,t_1,regime,m_true,z_true,m_obs,z_obs"
    )
    .map_err(header_err)?;

    for i in individuals {
        writeln!(
            file,
            "{},{},{:.10},{:.10},{},{:.10},{:.10},{:.10},{:.10}",
            i.id,
            label(&i.status),
            i.age,
            i.puberty_end,
            label(&i.regime),
            i.mass_true,
            i.canine_true,
            i.mass_obs,
            i.canine_obs,
        )
        .map_err(row_err)?;
    }
    file.flush().map_err(row_err)?;
    Ok(())
}

fn write_observation_row(file: &mut impl Write, o: &Observation) -> Result<(), AppError> {
    writeln!(
        file,
        "{},{:.4},{:.10},{:.10},{:.10},{:.10},{}",
        label(&o.status),
        o.cost,
        o.puberty_end,
        o.age,
        o.mass,
        o.canine,
        label(&o.regime),
    )
    .map_err(row_err)
}

/// Serialized (serde) name of a unit enum, so CSV and JSON agree.
fn label<T: Serialize>(value: &T) -> String {
    serde_json::to_value(value)
        .ok()
        .and_then(|v| v.as_str().map(str::to_string))
        .unwrap_or_default()
}

fn create(path: &Path) -> Result<BufWriter<File>, AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    Ok(BufWriter::new(file))
}

fn header_err(e: std::io::Error) -> AppError {
    AppError::new(2, format!("Failed to write export CSV header: {e}"))
}

fn row_err(e: std::io::Error) -> AppError {
    AppError::new(2, format!("Failed to write export CSV row: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Status;
    use crate::models::Regime;

    #[test]
    fn observations_csv_layout() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("obs.csv");
        let rows = vec![Observation {
            status: Status::NonHarem,
            cost: 0.99,
            puberty_end: 0.75,
            age: 2.0,
            mass: 21.5,
            canine: 0.5,
            regime: Regime::Senescence,
        }];
        write_observations_csv(&path, &rows).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "status,c,t_1,t,m,z,regime");
        assert_eq!(
            lines[1],
            "non-harem,0.9900,0.7500000000,2.0000000000,21.5000000000,0.5000000000,senescence"
        );
    }

    #[test]
    fn export_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("obs.csv");
        let err = write_observations_csv(&path, &[]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
