//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - installs the log subscriber
//! - runs sweeps, single evaluations and sample generation
//! - prints reports/plots
//! - writes optional exports and figures

use std::path::Path;

use clap::Parser;

use crate::cli::{Command, EvalArgs, GrowthArgs, PlotArgs, SampleArgs, SweepArgs};
use crate::data::{DEFAULT_COSTS, StatusConstants, generate_sample};
use crate::domain::{GrowthConfig, Observation, SampleConfig, SweepConfig};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `nasalis` binary.
pub fn run() -> Result<(), AppError> {
    let cli = crate::cli::Cli::parse();
    crate::logging::init_cli_logger(cli.verbose);

    match cli.command {
        Command::Sweep(args) => handle_sweep(args),
        Command::Growth(args) => handle_growth(args),
        Command::Eval(args) => handle_eval(args),
        Command::Sample(args) => handle_sample(args),
        Command::Plot(args) => handle_plot(args),
    }
}

fn handle_sweep(args: SweepArgs) -> Result<(), AppError> {
    let config = sweep_config_from_args(&args);
    let run = pipeline::run_sweep(&config)?;

    println!(
        "{}",
        crate::report::format_constants(&config.anchors, &run.constants)
    );
    println!(
        "{}",
        crate::report::format_endpoint_summary(&run.observations)
    );

    if config.plot {
        let plot = crate::plot::render_scatter(
            &run.observations,
            config.plot_width,
            config.plot_height,
        );
        println!("{plot}");
    }

    // Optional exports.
    if let Some(path) = &config.export_csv {
        crate::io::write_observations_csv(path, &run.observations)?;
        tracing::info!(path = %path.display(), "wrote observations CSV");
    }
    if let Some(path) = &config.export_run {
        let file = crate::io::build_run_file(
            &config.anchors,
            &run.constants,
            run.observations.clone(),
            Vec::new(),
        );
        crate::io::write_run_json(path, &file)?;
        tracing::info!(path = %path.display(), "wrote run JSON");
    }
    if let Some(dir) = &config.figure_dir {
        write_endpoint_figures(dir, &run.observations, &config.costs)?;
    }

    Ok(())
}

fn handle_growth(args: GrowthArgs) -> Result<(), AppError> {
    let config = growth_config_from_args(&args);
    let run = pipeline::run_growth(&config)?;

    println!(
        "{}",
        crate::report::format_constants(&config.anchors, &run.constants)
    );
    println!(
        "{}",
        crate::report::format_trajectory_summary(&run.trajectories)
    );

    if config.plot {
        // One terminal plot per (status, c) group, matching the figure grid.
        for group in run.trajectories.chunks(3) {
            let plot = crate::plot::render_trajectories(group, config.plot_width, config.plot_height);
            println!("{plot}");
        }
    }

    if let Some(path) = &config.export_csv {
        crate::io::write_trajectories_csv(path, &run.trajectories)?;
        tracing::info!(path = %path.display(), "wrote trajectories CSV");
    }
    if let Some(path) = &config.export_run {
        let file = crate::io::build_run_file(
            &config.anchors,
            &run.constants,
            Vec::new(),
            run.trajectories.clone(),
        );
        crate::io::write_run_json(path, &file)?;
        tracing::info!(path = %path.display(), "wrote run JSON");
    }
    if let Some(path) = &config.figure {
        let statuses: Vec<_> = run.constants.iter().map(|sc| sc.status).collect();
        crate::plot::write_growth_figure(path, &run.trajectories, &statuses, &config.costs)?;
        tracing::info!(path = %path.display(), "wrote growth figure");
    }

    Ok(())
}

fn handle_eval(args: EvalArgs) -> Result<(), AppError> {
    let anchors = args.anchors.to_anchors();
    let constants = StatusConstants::for_status(args.status, &anchors)?;
    let puberty_end = args
        .puberty_end
        .unwrap_or((constants.onset_age + constants.maturity) / 2.0);

    let params = constants.params(args.cost, puberty_end)?;
    let obs = params.observe(args.age)?;

    println!("{}", crate::report::format_evaluation(&params, &obs));
    Ok(())
}

fn handle_sample(args: SampleArgs) -> Result<(), AppError> {
    let config = sample_config_from_args(&args);
    let sample = generate_sample(&config)?;

    println!("{}", crate::report::format_sample_summary(&sample));

    if let Some(path) = &config.export_csv {
        crate::io::write_sample_csv(path, &sample.individuals)?;
        tracing::info!(path = %path.display(), "wrote sample CSV");
    }
    Ok(())
}

fn handle_plot(args: PlotArgs) -> Result<(), AppError> {
    let run = crate::io::read_run_json(&args.run)?;
    if run.observations.is_empty() && run.trajectories.is_empty() {
        return Err(AppError::new(
            3,
            format!("Run JSON '{}' has nothing to plot.", args.run.display()),
        ));
    }

    let observations: Vec<Observation> = match args.cost {
        Some(cost) => run
            .observations
            .iter()
            .copied()
            .filter(|o| (o.cost - cost).abs() < 1e-9)
            .collect(),
        None => run.observations.clone(),
    };

    if observations.is_empty() && !run.observations.is_empty() {
        tracing::warn!(cost = ?args.cost, "no observations match the requested cost");
    }
    if !observations.is_empty() {
        println!(
            "{}",
            crate::report::format_endpoint_summary(&observations)
        );
        println!(
            "{}",
            crate::plot::render_scatter(&observations, args.width, args.height)
        );
    }
    for group in run.trajectories.chunks(3) {
        println!(
            "{}",
            crate::plot::render_trajectories(group, args.width, args.height)
        );
    }

    if let Some(dir) = &args.figure_dir {
        let costs = distinct_costs(&run.observations, &run.trajectories);
        if !run.observations.is_empty() {
            write_endpoint_figures(dir, &run.observations, &costs)?;
        }
        if !run.trajectories.is_empty() {
            let statuses: Vec<_> = run.constants.iter().map(|sc| sc.status).collect();
            let path = dir.join("growth.svg");
            crate::plot::write_growth_figure(&path, &run.trajectories, &statuses, &costs)?;
            tracing::info!(path = %path.display(), "wrote growth figure");
        }
    }
    Ok(())
}

/// Write the single-cost scatter (highest cost) and the per-cost panel row.
fn write_endpoint_figures(dir: &Path, observations: &[Observation], costs: &[f64]) -> Result<(), AppError> {
    std::fs::create_dir_all(dir).map_err(|e| {
        AppError::new(
            2,
            format!("Failed to create figure directory '{}': {e}", dir.display()),
        )
    })?;

    let headline = costs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    if headline.is_finite() {
        let path = dir.join("endpoint.svg");
        crate::plot::write_endpoint_figure(&path, observations, headline)?;
        tracing::info!(path = %path.display(), cost = headline, "wrote endpoint figure");
    }

    let path = dir.join("endpoint_by_cost.svg");
    crate::plot::write_cost_panels(&path, observations, costs)?;
    tracing::info!(path = %path.display(), "wrote cost panels");
    Ok(())
}

/// Costs present in a run, in first-seen order.
fn distinct_costs(observations: &[Observation], trajectories: &[crate::domain::Trajectory]) -> Vec<f64> {
    let mut out: Vec<f64> = Vec::new();
    let seen = observations
        .iter()
        .map(|o| o.cost)
        .chain(trajectories.iter().map(|tr| tr.cost));
    for cost in seen {
        if !out.iter().any(|&c| (c - cost).abs() < 1e-12) {
            out.push(cost);
        }
    }
    if out.is_empty() {
        out.extend(DEFAULT_COSTS);
    }
    out
}

pub fn sweep_config_from_args(args: &SweepArgs) -> SweepConfig {
    SweepConfig {
        anchors: args.anchors.to_anchors(),
        statuses: args.status.clone(),
        costs: args.costs.clone(),
        endpoint_age: args.age,
        puberty_end_steps: args.steps,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_csv: args.export.clone(),
        export_run: args.export_run.clone(),
        figure_dir: args.figure_dir.clone(),
    }
}

pub fn growth_config_from_args(args: &GrowthArgs) -> GrowthConfig {
    GrowthConfig {
        anchors: args.anchors.to_anchors(),
        statuses: args.status.clone(),
        costs: args.costs.clone(),
        max_age: args.max_age,
        age_steps: args.age_steps,
        plot: args.plot && !args.no_plot,
        plot_width: args.width,
        plot_height: args.height,
        export_csv: args.export.clone(),
        export_run: args.export_run.clone(),
        figure: args.figure.clone(),
    }
}

pub fn sample_config_from_args(args: &SampleArgs) -> SampleConfig {
    SampleConfig {
        anchors: args.anchors.to_anchors(),
        statuses: args.status.clone(),
        cost: args.cost,
        sample_count: args.sample_count,
        seed: args.seed,
        age_min: args.age_min,
        age_max: args.age_max,
        mass_sigma: args.mass_sigma,
        canine_sigma: args.canine_sigma,
        export_csv: args.export.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use crate::models::Regime;

    #[test]
    fn no_plot_overrides_plot() {
        let cli = Cli::parse_from(["nasalis", "sweep", "--no-plot", "--steps", "5"]);
        let Command::Sweep(args) = cli.command else {
            panic!("expected sweep");
        };
        let config = sweep_config_from_args(&args);
        assert!(!config.plot);
        assert_eq!(config.puberty_end_steps, 5);
        assert!(config.statuses.is_empty());
    }

    #[test]
    fn sample_args_map_to_config() {
        let cli = Cli::parse_from(["nasalis", "sample", "-n", "12", "--seed", "7", "-s", "female"]);
        let Command::Sample(args) = cli.command else {
            panic!("expected sample");
        };
        let config = sample_config_from_args(&args);
        assert_eq!(config.sample_count, 12);
        assert_eq!(config.seed, 7);
        assert_eq!(config.statuses, vec![crate::domain::Status::Female]);
    }

    #[test]
    fn distinct_costs_keep_first_seen_order() {
        let obs = |cost| Observation {
            status: crate::domain::Status::Harem,
            cost,
            puberty_end: 0.75,
            age: 2.0,
            mass: 20.0,
            canine: 0.5,
            regime: Regime::HaremContinuation,
        };
        let rows = vec![obs(0.99), obs(0.01), obs(0.99), obs(0.5)];
        assert_eq!(distinct_costs(&rows, &[]), vec![0.99, 0.01, 0.5]);
        assert_eq!(distinct_costs(&[], &[]), DEFAULT_COSTS.to_vec());
    }

    #[test]
    fn sweep_exports_csv_run_and_figures() {
        let dir = tempfile::tempdir().unwrap();
        let csv = dir.path().join("obs.csv");
        let json = dir.path().join("run.json");
        let figures = dir.path().join("figs");
        let cli = Cli::parse_from([
            "nasalis".to_string(),
            "sweep".to_string(),
            "--no-plot".to_string(),
            "--steps".to_string(),
            "4".to_string(),
            "--export".to_string(),
            csv.display().to_string(),
            "--export-run".to_string(),
            json.display().to_string(),
            "--figure-dir".to_string(),
            figures.display().to_string(),
        ]);
        let Command::Sweep(args) = cli.command else {
            panic!("expected sweep");
        };
        handle_sweep(args).unwrap();

        let text = std::fs::read_to_string(&csv).unwrap();
        assert_eq!(text.lines().count(), 1 + 3 * 4 * 3);
        let run = crate::io::read_run_json(&json).unwrap();
        assert_eq!(run.observations.len(), 3 * 4 * 3);
        assert!(figures.join("endpoint.svg").exists());
        assert!(figures.join("endpoint_by_cost.svg").exists());
    }
}
