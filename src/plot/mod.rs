//! Terminal and SVG plotting.

pub mod ascii;
pub mod svg;

pub use ascii::*;
pub use svg::*;
