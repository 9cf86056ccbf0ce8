//! Core cube types: faces, colors, coordinates, facelet addresses, RNG.
//!
//! These are the fundamental building blocks shared by the state engine
//! and the gesture resolver. None of them know anything about screen space.

pub mod color;
pub mod coords;
pub mod face;
pub mod facelet;
pub mod rng;

pub use color::FaceletColor;
pub use coords::{Axis, CubieCoord, Sign};
pub use face::Face;
pub use facelet::FaceletAddr;
pub use rng::{CubeRng, CubeRngState};
