//! Growth model implementations.
//!
//! Models are implemented as small, pure functions so that sweep and plotting
//! code can stay generic:
//!
//! - `derivation`: base constants `(a, A)` from the anchor observations
//! - `continuity`: the plateau offset `A_3` that keeps the mass curve continuous at `T`
//! - `body_mass`: the six-regime logistic mass curve
//! - `canine`: the three-regime linear canine curve

pub mod body_mass;
pub mod canine;
pub mod continuity;
pub mod derivation;
pub mod params;

pub use body_mass::*;
pub use canine::*;
pub use continuity::*;
pub use derivation::*;
pub use params::*;
