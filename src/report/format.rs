//! Formatted terminal output for sweeps, single evaluations and samples.

use crate::data::{SampleData, StatusConstants};
use crate::domain::{Anchors, Observation, Trajectory};
use crate::models::GrowthParams;
use crate::report::{GroupSummary, summarize_groups};

/// Format the per-status constants table.
pub fn format_constants(anchors: &Anchors, constants: &[StatusConstants]) -> String {
    let mut out = String::new();

    out.push_str("=== nasalis - canine / body-mass growth model ===\n");
    out.push_str(&format!(
        "Anchors: m_0={:.3}kg | m_1={:.3}kg | t_0={:.3} | lag={:.3} | canine ratio={:.4}\n",
        anchors.birth_mass,
        anchors.onset_mass,
        anchors.onset_age,
        anchors.senescence_lag,
        anchors.canine_ratio,
    ));
    out.push('\n');

    out.push_str(
        format!(
            "{:<10} {:>8} {:>8} {:>8} {:>8} {:>8} {:>10}\n",
            "status", "K", "T", "t_2", "alpha", "a", "A"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<10} {:-<8} {:-<8} {:-<8} {:-<8} {:-<8} {:-<10}\n",
            "", "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for sc in constants {
        out.push_str(
            format!(
                "{:<10} {:>8.2} {:>8.3} {:>8.3} {:>8.4} {:>8.3} {:>10.3}\n",
                sc.status.display_name(),
                sc.ceiling,
                sc.maturity,
                sc.senescence,
                sc.alpha,
                sc.base.rate,
                sc.base.offset,
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// Format the `(status, c)` summary of an endpoint sweep.
pub fn format_endpoint_summary(observations: &[Observation]) -> String {
    let mut out = String::new();
    let age = observations.first().map(|o| o.age).unwrap_or(f64::NAN);

    out.push_str(&format!("Endpoint sweep at t={age:.3} (n={}):\n", observations.len()));
    out.push_str(&format_group_table(&summarize_groups(observations)));
    out
}

/// Format the final masses of each trajectory.
pub fn format_trajectory_summary(trajectories: &[Trajectory]) -> String {
    let mut out = String::new();

    out.push_str("Growth trajectories:\n");
    out.push_str(
        format!(
            "{:<10} {:>6} {:>8} {:>10} {:>10} {:>10}\n",
            "status", "c", "t_1", "m(T)", "m(end)", "z(end)"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(format!("{:-<10} {:-<6} {:-<8} {:-<10} {:-<10} {:-<10}\n", "", "", "", "", "", "").trim_end());
    out.push('\n');

    for tr in trajectories {
        let Some(last) = tr.points.last() else {
            continue;
        };
        // Last sample at or before maturity, i.e. still in the shared pre-maturity curve.
        let at_maturity = tr
            .points
            .iter()
            .rev()
            .find(|p| p.regime.is_pre_maturity())
            .map(|p| p.mass)
            .unwrap_or(f64::NAN);
        out.push_str(
            format!(
                "{:<10} {:>6.2} {:>8.3} {:>10.3} {:>10.3} {:>10.3}\n",
                tr.status.display_name(),
                tr.cost,
                tr.puberty_end,
                at_maturity,
                last.mass,
                last.canine,
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}

/// Format a single evaluation.
pub fn format_evaluation(params: &GrowthParams, obs: &Observation) -> String {
    let mut out = String::new();
    let b = &params.bounds;
    let r = &params.rates;
    let s = &params.shape;

    out.push_str(&format!("Status: {}\n", obs.status.display_name()));
    out.push_str(&format!(
        "Boundaries: t_0={:.3} t_1={:.3} T={:.3} t_2={:.3}\n",
        b.t_0, b.t_1, b.maturity, b.t_2
    ));
    out.push_str(&format!("Rates: a={:.6} c={:.4} alpha={:.6}\n", r.a, r.c, r.alpha));
    out.push_str(&format!(
        "Shape: K={:.3} A={:.6} A_3={:.6}\n",
        s.ceiling, s.offset, s.plateau_offset
    ));
    out.push_str(&format!("Regime at t={:.4}: {}\n", obs.age, obs.regime.display_name()));
    out.push_str(&format!("m = {:.6} kg\n", obs.mass));
    out.push_str(&format!("z = {:.6}\n", obs.canine));
    out
}

/// Format a short description of a synthetic sample.
pub fn format_sample_summary(sample: &SampleData) -> String {
    let mut out = String::new();
    out.push_str(&format!("Synthetic sample: n={}\n", sample.individuals.len()));
    for sc in &sample.constants {
        let rows: Vec<_> = sample
            .individuals
            .iter()
            .filter(|i| i.status == sc.status)
            .collect();
        if rows.is_empty() {
            continue;
        }
        let mean_mass = rows.iter().map(|i| i.mass_obs).sum::<f64>() / rows.len() as f64;
        let mean_canine = rows.iter().map(|i| i.canine_obs).sum::<f64>() / rows.len() as f64;
        out.push_str(&format!(
            "- {:<10} n={:<5} mean m={:.3}kg mean z={:.3}\n",
            sc.status.display_name(),
            rows.len(),
            mean_mass,
            mean_canine
        ));
    }
    out
}

fn format_group_table(groups: &[GroupSummary]) -> String {
    let mut out = String::new();
    out.push_str(
        format!(
            "{:<10} {:>6} {:>5} {:>10} {:>10} {:>8} {:>8}\n",
            "status", "c", "n", "m_min", "m_max", "z_min", "z_max"
        )
        .trim_end(),
    );
    out.push('\n');
    out.push_str(
        format!(
            "{:-<10} {:-<6} {:-<5} {:-<10} {:-<10} {:-<8} {:-<8}\n",
            "", "", "", "", "", "", ""
        )
        .trim_end(),
    );
    out.push('\n');

    for g in groups {
        out.push_str(
            format!(
                "{:<10} {:>6.2} {:>5} {:>10.3} {:>10.3} {:>8.3} {:>8.3}\n",
                g.status.display_name(),
                g.cost,
                g.n,
                g.mass_min,
                g.mass_max,
                g.canine_min,
                g.canine_max,
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out
}
