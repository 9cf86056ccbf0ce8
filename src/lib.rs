//! # rust-cube
//!
//! A 3×3×3 twisty-cube engine for host puzzle applications.
//!
//! ## Design Principles
//!
//! 1. **Symbolic, Not Visual**: The engine models stickers as six symbolic
//!    colors on a 6×3×3 grid. Meshes, RGB values, animation, and audio are
//!    the host's concern; the engine returns a snapshot to repaint from and
//!    a move id to animate.
//!
//! 2. **Table-Driven Moves**: Each of the 18 quarter turns is a declarative
//!    permutation of the 54 cells, built once from enumerated ring tables.
//!    No per-move copy blocks, so mirrored moves cannot drift apart and
//!    invertibility is directly testable.
//!
//! 3. **Injected Randomness**: Scrambles draw from a seeded `CubeRng` the
//!    host passes in, so any scramble is reproducible from its seed or
//!    replayable from the move log.
//!
//! ## Architecture
//!
//! The host reports a drag as a start and end facelet address. The
//! resolver maps the pair to a move (or nothing), the state engine applies
//! the move as an atomic permutation, and the returned `(Grid, Move)` pair
//! drives repaint, animation, and sound upstream. One gesture, at most one
//! move; the engine does no I/O and holds no timers.
//!
//! ## Modules
//!
//! - `core`: faces, colors, cubie coordinates, facelet addresses, RNG
//! - `moves`: the 18-move enumeration, move log records, permutation tables
//! - `state`: the color grid and the cube-state engine
//! - `gesture`: drag-to-move resolution over the net layout

pub mod core;
pub mod gesture;
pub mod moves;
pub mod state;

// Re-export commonly used types
pub use crate::core::{
    Axis, CubeRng, CubeRngState, CubieCoord, Face, FaceletAddr, FaceletColor, Sign,
};

pub use crate::gesture::MoveResolver;

pub use crate::moves::{Move, MoveRecord, MoveTables, Permutation, Spin};

pub use crate::state::{CubeState, Grid};
