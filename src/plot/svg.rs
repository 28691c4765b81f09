//! SVG figures rendered with Plotters.
//!
//! Three figures are produced:
//! - body mass vs canine size at the endpoint age, for one cost
//! - the same scatter as a row of panels, one per cost
//! - a status x cost grid of growth curves

use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::data::MALE_CEILING_KG;
use crate::domain::{Observation, Status, Trajectory};
use crate::error::AppError;

type DrawResult = Result<(), Box<dyn std::error::Error>>;
type SvgArea<'a> = DrawingArea<SVGBackend<'a>, Shift>;

const MASS_MIN: f64 = 8.0;
const MASS_MAX: f64 = 26.0;
const CANINE_MIN: f64 = -0.05;
const CANINE_MAX: f64 = 1.05;

/// Line colors for the trajectories of one panel, in order.
const SERIES_COLORS: [RGBColor; 3] = [
    RGBColor(31, 119, 180), // blue
    RGBColor(255, 127, 14), // orange
    RGBColor(44, 160, 44), // green
];

/// Write the endpoint scatter for a single cost.
pub fn write_endpoint_figure(
    path: &Path,
    observations: &[Observation],
    cost: f64,
) -> Result<(), AppError> {
    render_endpoint(path, observations, cost).map_err(|e| figure_err(path, e))
}

/// Write one endpoint scatter panel per cost, side by side.
pub fn write_cost_panels(
    path: &Path,
    observations: &[Observation],
    costs: &[f64],
) -> Result<(), AppError> {
    if costs.is_empty() {
        return Err(AppError::new(2, "Cost panel figure needs at least one cost."));
    }
    render_cost_panels(path, observations, costs).map_err(|e| figure_err(path, e))
}

/// Write the growth-curve grid: one row per status, one column per cost.
pub fn write_growth_figure(
    path: &Path,
    trajectories: &[Trajectory],
    statuses: &[Status],
    costs: &[f64],
) -> Result<(), AppError> {
    if statuses.is_empty() || costs.is_empty() {
        return Err(AppError::new(
            2,
            "Growth figure needs at least one status and one cost.",
        ));
    }
    render_growth(path, trajectories, statuses, costs).map_err(|e| figure_err(path, e))
}

fn render_endpoint(path: &Path, observations: &[Observation], cost: f64) -> DrawResult {
    let root = SVGBackend::new(path, (500, 500)).into_drawing_area();
    root.fill(&WHITE)?;
    draw_scatter_panel(&root, observations, cost)?;
    root.present()?;
    Ok(())
}

fn render_cost_panels(path: &Path, observations: &[Observation], costs: &[f64]) -> DrawResult {
    let width = 300 * costs.len() as u32;
    let root = SVGBackend::new(path, (width, 300)).into_drawing_area();
    root.fill(&WHITE)?;
    let panels = root.split_evenly((1, costs.len()));
    for (panel, &cost) in panels.iter().zip(costs) {
        draw_scatter_panel(panel, observations, cost)?;
    }
    root.present()?;
    Ok(())
}

fn render_growth(
    path: &Path,
    trajectories: &[Trajectory],
    statuses: &[Status],
    costs: &[f64],
) -> DrawResult {
    let size = (300 * costs.len() as u32, 300 * statuses.len() as u32);
    let root = SVGBackend::new(path, size).into_drawing_area();
    root.fill(&WHITE)?;

    let max_age = trajectories
        .iter()
        .flat_map(|tr| tr.points.iter().map(|p| p.age))
        .fold(0.0_f64, f64::max);
    let max_age = if max_age > 0.0 { max_age } else { 2.0 };

    // split_evenly is row-major.
    let panels = root.split_evenly((statuses.len(), costs.len()));
    let cells = statuses
        .iter()
        .flat_map(|&status| costs.iter().map(move |&cost| (status, cost)));
    for (panel, (status, cost)) in panels.iter().zip(cells) {
        let group: Vec<&Trajectory> = trajectories
            .iter()
            .filter(|tr| tr.status == status && same_cost(tr.cost, cost))
            .collect();
        draw_growth_panel(panel, &group, status, cost, max_age)?;
    }
    root.present()?;
    Ok(())
}

fn draw_scatter_panel(area: &SvgArea<'_>, observations: &[Observation], cost: f64) -> DrawResult {
    let mut chart = ChartBuilder::on(area)
        .caption(format!("Cost parameter: {cost:.2}"), ("sans-serif", 16))
        .margin(8)
        .x_label_area_size(32)
        .y_label_area_size(40)
        .build_cartesian_2d(MASS_MIN..MASS_MAX, CANINE_MIN..CANINE_MAX)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("Simulated body mass (kg)")
        .y_desc("Normalized canine size")
        .x_labels(5)
        .y_labels(5)
        .draw()?;

    for status in Status::ALL {
        let color = status_color(status);
        let points = observations
            .iter()
            .filter(|o| o.status == status && same_cost(o.cost, cost))
            .map(|o| (o.mass, o.canine));

        let series = match status {
            Status::Harem => {
                chart.draw_series(points.map(|p| Circle::new(p, 3, color.filled())))?
            }
            Status::NonHarem => {
                chart.draw_series(points.map(|p| TriangleMarker::new(p, 4, color.filled())))?
            }
            Status::Female => {
                chart.draw_series(points.map(|p| Cross::new(p, 3, color.stroke_width(1))))?
            }
        };
        series
            .label(status.display_name())
            .legend(move |(x, y)| Circle::new((x, y), 3, color.filled()));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

fn draw_growth_panel(
    area: &SvgArea<'_>,
    trajectories: &[&Trajectory],
    status: Status,
    cost: f64,
    max_age: f64,
) -> DrawResult {
    let mut chart = ChartBuilder::on(area)
        .caption(
            format!("{} at {cost:.2} cost", status.display_name()),
            ("sans-serif", 14),
        )
        .margin(8)
        .x_label_area_size(32)
        .y_label_area_size(40)
        .build_cartesian_2d(0.0..max_age, 0.0..MALE_CEILING_KG + 1.0)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("t, normalized age")
        .y_desc("m, simulated body mass (kg)")
        .x_labels(5)
        .y_labels(6)
        .draw()?;

    for (i, tr) in trajectories.iter().enumerate() {
        let color = SERIES_COLORS[i % SERIES_COLORS.len()];
        let curve: Vec<(f64, f64)> = tr.points.iter().map(|p| (p.age, p.mass)).collect();

        chart
            .draw_series(LineSeries::new(curve.iter().copied(), &color))?
            .label(format!("t_1={:.3}", tr.puberty_end))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 12, y)], color));
        chart.draw_series(curve.iter().map(|&p| Circle::new(p, 2, color.filled())))?;
    }

    if !trajectories.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::LowerRight)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;
    }
    Ok(())
}

fn status_color(status: Status) -> RGBColor {
    match status {
        Status::Harem => RGBColor(214, 39, 40),
        Status::NonHarem => RGBColor(31, 119, 180),
        Status::Female => RGBColor(44, 160, 44),
    }
}

fn same_cost(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

fn figure_err(path: &Path, e: Box<dyn std::error::Error>) -> AppError {
    AppError::new(4, format!("Failed to render figure '{}': {e}", path.display()))
}
