//! Reporting utilities: grouped summaries and formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the model/sweep code stays clean and testable
//! - output changes are localized

pub mod format;

pub use format::*;

use crate::domain::{Observation, Status};

/// Min/max of both traits over one `(status, c)` group.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupSummary {
    pub status: Status,
    pub cost: f64,
    pub n: usize,
    pub mass_min: f64,
    pub mass_max: f64,
    pub canine_min: f64,
    pub canine_max: f64,
}

/// Group observations by `(status, c)` in first-seen order.
pub fn summarize_groups(observations: &[Observation]) -> Vec<GroupSummary> {
    let mut out: Vec<GroupSummary> = Vec::new();
    for o in observations {
        let existing = out
            .iter_mut()
            .find(|g| g.status == o.status && g.cost.to_bits() == o.cost.to_bits());
        match existing {
            Some(g) => {
                g.n += 1;
                g.mass_min = g.mass_min.min(o.mass);
                g.mass_max = g.mass_max.max(o.mass);
                g.canine_min = g.canine_min.min(o.canine);
                g.canine_max = g.canine_max.max(o.canine);
            }
            None => out.push(GroupSummary {
                status: o.status,
                cost: o.cost,
                n: 1,
                mass_min: o.mass,
                mass_max: o.mass,
                canine_min: o.canine,
                canine_max: o.canine,
            }),
        }
    }
    out
}
