//! ASCII/Unicode plotting for terminal output.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a terminal
//! - deterministic output (helpful for golden tests)
//!
//! Plot elements:
//! - endpoint scatter: one marker per status (`H`, `N`, `F`)
//! - growth curves: one line character per trajectory

use crate::domain::{Observation, Trajectory};

/// Line characters assigned to trajectories in order.
const SERIES_CHARS: [char; 6] = ['.', '*', '#', '+', 'x', 'o'];

/// Render body mass (x) against canine size (y), one marker per status.
pub fn render_scatter(observations: &[Observation], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let points: Vec<(f64, f64)> = observations.iter().map(|o| (o.mass, o.canine)).collect();
    let (m_min, m_max) = range(points.iter().map(|p| p.0)).unwrap_or((0.0, 1.0));
    let (z_min, z_max) = range(points.iter().map(|p| p.1)).unwrap_or((0.0, 1.0));
    let (m_min, m_max) = pad_range(m_min, m_max, 0.05);
    let (z_min, z_max) = pad_range(z_min, z_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];
    for o in observations {
        let x = map_x(o.mass, m_min, m_max, width);
        let y = map_y(o.canine, z_min, z_max, height);
        grid[y][x] = o.status.marker();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: m=[{m_min:.2}, {m_max:.2}] kg | z=[{z_min:.3}, {z_max:.3}]\n"
    ));
    push_grid(&mut out, grid);
    out
}

/// Render growth curves (age on x, mass on y).
pub fn render_trajectories(trajectories: &[Trajectory], width: usize, height: usize) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let all = trajectories.iter().flat_map(|tr| tr.points.iter());
    let (t_min, t_max) = range(all.clone().map(|p| p.age)).unwrap_or((0.0, 1.0));
    let (m_min, m_max) = range(all.map(|p| p.mass)).unwrap_or((0.0, 1.0));
    let (m_min, m_max) = pad_range(m_min, m_max, 0.05);

    let mut grid = vec![vec![' '; width]; height];
    for (i, tr) in trajectories.iter().enumerate() {
        let curve: Vec<(f64, f64)> = tr.points.iter().map(|p| (p.age, p.mass)).collect();
        let ch = SERIES_CHARS[i % SERIES_CHARS.len()];
        draw_curve(&mut grid, &curve, (t_min, t_max), (m_min, m_max), ch);
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Plot: t=[{t_min:.3}, {t_max:.3}] | m=[{m_min:.2}, {m_max:.2}] kg\n"
    ));
    push_grid(&mut out, grid);
    for (i, tr) in trajectories.iter().enumerate() {
        out.push_str(&format!(
            "  {} {} c={:.2} t_1={:.3}\n",
            SERIES_CHARS[i % SERIES_CHARS.len()],
            tr.status.display_name(),
            tr.cost,
            tr.puberty_end
        ));
    }
    out
}

fn push_grid(out: &mut String, grid: Vec<Vec<char>>) {
    for row in grid {
        out.push_str(&row.into_iter().collect::<String>());
        out.push('\n');
    }
}

fn range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for v in values {
        min = min.min(v);
        max = max.max(v);
    }
    if min.is_finite() && max.is_finite() && max > min {
        Some((min, max))
    } else if min.is_finite() && max.is_finite() {
        Some((min - 0.5, max + 0.5))
    } else {
        None
    }
}

fn pad_range(min: f64, max: f64, frac: f64) -> (f64, f64) {
    let span = (max - min).abs();
    let pad = (span * frac).max(1e-12);
    (min - pad, max + pad)
}

fn map_x(x: f64, x_min: f64, x_max: f64, width: usize) -> usize {
    let width = width.max(2);
    let u = ((x - x_min) / (x_max - x_min)).clamp(0.0, 1.0);
    (u * (width as f64 - 1.0)).round() as usize
}

fn map_y(y: f64, y_min: f64, y_max: f64, height: usize) -> usize {
    let height = height.max(2);
    let u = ((y - y_min) / (y_max - y_min)).clamp(0.0, 1.0);
    // y=top is max -> row 0
    (height as f64 - 1.0 - (u * (height as f64 - 1.0))).round() as usize
}

fn draw_curve(
    grid: &mut [Vec<char>],
    curve: &[(f64, f64)],
    x_range: (f64, f64),
    y_range: (f64, f64),
    ch: char,
) {
    if curve.len() < 2 {
        return;
    }
    let height = grid.len();
    let width = grid[0].len();

    let mut prev = None;
    for &(x, y) in curve {
        let col = map_x(x, x_range.0, x_range.1, width);
        let row = map_y(y, y_range.0, y_range.1, height);
        if let Some((c0, r0)) = prev {
            draw_line(grid, c0, r0, col, row, ch);
        } else {
            grid[row][col] = ch;
        }
        prev = Some((col, row));
    }
}

/// Integer line drawing (Bresenham-ish).
fn draw_line(grid: &mut [Vec<char>], x0: usize, y0: usize, x1: usize, y1: usize, ch: char) {
    let mut x0 = x0 as isize;
    let mut y0 = y0 as isize;
    let x1 = x1 as isize;
    let y1 = y1 as isize;

    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        if y0 >= 0
            && (y0 as usize) < grid.len()
            && x0 >= 0
            && (x0 as usize) < grid[0].len()
            && grid[y0 as usize][x0 as usize] == ' '
        {
            grid[y0 as usize][x0 as usize] = ch;
        }

        if x0 == x1 && y0 == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}
