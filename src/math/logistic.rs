//! Logistic evaluation shared by every body-mass regime.
//!
//! Each regime only differs in its exponent `e(t)` and its offset; the mass is
//! always
//!
//! ```text
//! m = K / (1 + A_eff · exp(e))
//! ```
//!
//! Numerical notes:
//! - Plain IEEE semantics: for very large `e` the product overflows to `+inf`
//!   and `m` collapses to `0`; for very negative `e` the curve saturates at `K`.
//!   Callers that need a guarantee use the checked paths in `models`.

/// Evaluate `K / (1 + offset · exp(exponent))`.
pub fn logistic(ceiling: f64, offset: f64, exponent: f64) -> f64 {
    ceiling / (1.0 + offset * exponent.exp())
}

/// Generate `steps` evenly spaced points between `min` and `max` (inclusive).
///
/// Matches the usual `linspace` contract: `steps == 1` yields `[min]`.
pub fn linspace(min: f64, max: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let step = (max - min) / (steps as f64 - 1.0);
            let mut out: Vec<f64> = (0..steps).map(|i| min + step * i as f64).collect();
            // Pin the last point so the upper boundary is hit exactly.
            out[steps - 1] = max;
            out
        }
    }
}
