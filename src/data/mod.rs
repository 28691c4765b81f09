//! Model inputs that are not part of the core curves.
//!
//! - per-status boundary constants (`presets`)
//! - synthetic individual samples for inference checks (`sample`)

pub mod presets;
pub mod sample;

pub use presets::*;
pub use sample::*;
