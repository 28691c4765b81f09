//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the status variant and the model's value types (`AgeBoundaries`, `GrowthRates`, ...)
//! - evaluated outputs (`Observation`, `Trajectory`)
//! - run configuration (`SweepConfig`, `GrowthConfig`, `SampleConfig`) and the saved `RunFile`

pub mod types;

pub use types::*;
