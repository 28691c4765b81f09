//! `nasalis-growth` library crate.
//!
//! A piecewise logistic model of body-mass growth and canine development in
//! proboscis monkeys, with a parameter-sweep driver on top.
//!
//! The binary (`nasalis`) is a thin wrapper around this library so that:
//!
//! - core logic is testable without spawning processes
//! - the model can be reused from other drivers (notebooks, fitting code, etc.)
//! - code stays easy to navigate as the project grows

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod io;
pub mod logging;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
pub mod sweep;
