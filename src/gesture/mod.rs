//! Gesture resolution: from a drag between two facelets to a move.
//!
//! The host's input layer reports where a drag started and ended, each as
//! a facelet address. This module turns that pair into one of the 18
//! moves, or nothing — drags that miss the cube, release in place, or cut
//! diagonally are inert, never errors.

pub mod resolve;
mod table;

pub use resolve::MoveResolver;
