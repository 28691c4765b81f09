//! Mathematical utilities: the logistic kernel and evenly spaced grids.

pub mod logistic;

pub use logistic::*;
