//! Piecewise-linear canine growth.
//!
//! Zero before puberty onset, a linear ramp of slope `alpha` until `t_1`, then
//! clamped at the value reached at `t_1`.

/// Evaluate the normalized canine size at age `t`.
///
/// `_cost` is unused by the current functional form; it stays in the
/// positional signature so callers can pass the same tuple they pass to the
/// body-mass model.
pub fn canine_size(t: f64, t_0: f64, t_1: f64, _cost: f64, alpha: f64) -> f64 {
    match t {
        t if t < t_0 => 0.0,
        t if t < t_1 => alpha * (t - t_0),
        _ => alpha * (t_1 - t_0),
    }
}
