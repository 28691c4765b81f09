//! Input/output helpers.
//!
//! - observation and sample exports (CSV) (`export`)
//! - run JSON read/write (`run`)

pub mod export;
pub mod run;

pub use export::*;
pub use run::*;
