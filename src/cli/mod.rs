//! Command-line parsing for the canine / body-mass growth model.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the modeling/math code.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::{Anchors, Status};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "nasalis",
    version,
    about = "Canine size / body mass growth model for proboscis monkeys"
)]
pub struct Cli {
    /// Debug-level logging (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Evaluate every status x t_1 x cost cell at the endpoint age.
    Sweep(SweepArgs),
    /// Evaluate growth curves from birth to the maximum age.
    Growth(GrowthArgs),
    /// Evaluate a single (status, c, t_1, t) point and show the regime details.
    Eval(EvalArgs),
    /// Draw a synthetic sample of noisy individuals.
    Sample(SampleArgs),
    /// Re-plot a previously exported run JSON.
    Plot(PlotArgs),
}

/// Boundary anchors shared by every model command.
#[derive(Debug, Args, Clone)]
pub struct AnchorArgs {
    /// Body mass at birth, m_0 (kg).
    #[arg(long, default_value_t = 0.45)]
    pub birth_mass: f64,

    /// Body mass at puberty onset, m_1 (kg).
    #[arg(long, default_value_t = 6.5)]
    pub onset_mass: f64,

    /// Normalized age at puberty onset, t_0.
    #[arg(long, default_value_t = 0.5)]
    pub onset_age: f64,

    /// Gap between maturity T and senescence onset t_2.
    #[arg(long, default_value_t = 0.1)]
    pub senescence_lag: f64,

    /// Female/male canine growth-rate ratio.
    #[arg(long, default_value_t = 10.0 / 24.0)]
    pub canine_ratio: f64,
}

impl AnchorArgs {
    pub fn to_anchors(&self) -> Anchors {
        Anchors {
            birth_mass: self.birth_mass,
            onset_mass: self.onset_mass,
            onset_age: self.onset_age,
            senescence_lag: self.senescence_lag,
            canine_ratio: self.canine_ratio,
        }
    }
}

/// Options for the endpoint sweep.
#[derive(Debug, Parser, Clone)]
pub struct SweepArgs {
    #[command(flatten)]
    pub anchors: AnchorArgs,

    /// Statuses to include (comma separated). Defaults to all.
    #[arg(short = 's', long, value_enum, value_delimiter = ',')]
    pub status: Vec<Status>,

    /// Cost parameters c (comma separated).
    #[arg(short = 'c', long, value_delimiter = ',', default_values_t = [0.01, 0.50, 0.99])]
    pub costs: Vec<f64>,

    /// Age at which each cell is evaluated.
    #[arg(long, default_value_t = 2.0)]
    pub age: f64,

    /// Number of t_1 values per status, evenly spaced on [t_0, T].
    #[arg(long, default_value_t = 50)]
    pub steps: usize,

    /// Render an ASCII scatter in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export observations to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the run (anchors + constants + observations) to JSON.
    #[arg(long = "export-run")]
    pub export_run: Option<PathBuf>,

    /// Write SVG figures into this directory.
    #[arg(long = "figure-dir")]
    pub figure_dir: Option<PathBuf>,
}

/// Options for growth trajectories.
#[derive(Debug, Parser, Clone)]
pub struct GrowthArgs {
    #[command(flatten)]
    pub anchors: AnchorArgs,

    /// Statuses to include (comma separated). Defaults to all.
    #[arg(short = 's', long, value_enum, value_delimiter = ',')]
    pub status: Vec<Status>,

    /// Cost parameters c (comma separated).
    #[arg(short = 'c', long, value_delimiter = ',', default_values_t = [0.01, 0.50, 0.99])]
    pub costs: Vec<f64>,

    /// Last age of each trajectory.
    #[arg(long, default_value_t = 2.0)]
    pub max_age: f64,

    /// Number of ages per trajectory.
    #[arg(long, default_value_t = 50)]
    pub age_steps: usize,

    /// Render ASCII growth curves in the terminal (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Disable the terminal plot.
    #[arg(long)]
    pub no_plot: bool,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Export every trajectory point to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,

    /// Export the run (anchors + constants + trajectories) to JSON.
    #[arg(long = "export-run")]
    pub export_run: Option<PathBuf>,

    /// Write the status x cost growth grid to this SVG file.
    #[arg(long)]
    pub figure: Option<PathBuf>,
}

/// Options for a single evaluation.
#[derive(Debug, Parser, Clone)]
pub struct EvalArgs {
    #[command(flatten)]
    pub anchors: AnchorArgs,

    /// Social status of the individual.
    #[arg(short = 's', long, value_enum)]
    pub status: Status,

    /// Cost parameter c.
    #[arg(short = 'c', long, default_value_t = 0.5)]
    pub cost: f64,

    /// End of the puberty ramp, t_1. Defaults to the midpoint of [t_0, T].
    #[arg(long = "t1")]
    pub puberty_end: Option<f64>,

    /// Normalized age t.
    #[arg(short = 't', long)]
    pub age: f64,
}

/// Options for synthetic samples.
#[derive(Debug, Parser, Clone)]
pub struct SampleArgs {
    #[command(flatten)]
    pub anchors: AnchorArgs,

    /// Statuses to draw from (comma separated). Defaults to all.
    #[arg(short = 's', long, value_enum, value_delimiter = ',')]
    pub status: Vec<Status>,

    /// Cost parameter c shared by every individual.
    #[arg(short = 'c', long, default_value_t = 0.5)]
    pub cost: f64,

    /// Number of synthetic individuals.
    #[arg(short = 'n', long, default_value_t = 200)]
    pub sample_count: usize,

    /// Random seed.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Youngest normalized age.
    #[arg(long, default_value_t = 0.0)]
    pub age_min: f64,

    /// Oldest normalized age.
    #[arg(long, default_value_t = 2.0)]
    pub age_max: f64,

    /// Log-scale standard deviation of the mass noise.
    #[arg(long, default_value_t = 0.05)]
    pub mass_sigma: f64,

    /// Standard deviation of the additive canine noise.
    #[arg(long, default_value_t = 0.02)]
    pub canine_sigma: f64,

    /// Export the sample to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// Options for plotting a saved run.
#[derive(Debug, Parser)]
pub struct PlotArgs {
    /// Run JSON file produced by `nasalis sweep|growth --export-run`.
    #[arg(long, value_name = "JSON")]
    pub run: PathBuf,

    /// Only plot observations with this cost.
    #[arg(short = 'c', long)]
    pub cost: Option<f64>,

    /// Plot width (columns).
    #[arg(long, default_value_t = 100)]
    pub width: usize,

    /// Plot height (rows).
    #[arg(long, default_value_t = 25)]
    pub height: usize,

    /// Also write SVG figures into this directory.
    #[arg(long = "figure-dir")]
    pub figure_dir: Option<PathBuf>,
}
