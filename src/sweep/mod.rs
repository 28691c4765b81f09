//! Parameter sweep orchestration.
//!
//! Responsibilities:
//!
//! - build `(status, c, t_1)` grids
//! - evaluate each cell (parallel)
//! - return observation records in deterministic order

pub mod grid;
pub mod runner;

pub use grid::*;
pub use runner::*;
