//! The 18 canonical quarter-turn moves.
//!
//! A move is either a face turn (one of the six outer layers) or a
//! middle-slice turn (the central layer along one axis), each in two
//! directions. There is no 180° move; hosts express a half turn as two
//! applications.
//!
//! ## Spin conventions
//!
//! - Face turn `Cw` rotates the face's own 3×3 grid clockwise as seen from
//!   outside that face (`new[i][j] = old[2-j][i]`).
//! - Slice turn `Cw` rotates the middle layer clockwise as seen from the
//!   *positive* end of its axis, matching the cw turn of the outer face at
//!   that end (Slice Y cw twists like Top cw).

use serde::{Deserialize, Serialize};

use crate::core::{Axis, Face};

/// Rotation direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Spin {
    Cw,
    Ccw,
}

impl Spin {
    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Spin {
        match self {
            Spin::Cw => Spin::Ccw,
            Spin::Ccw => Spin::Cw,
        }
    }

    /// Spin index, 0..2.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One of the 18 legal moves.
///
/// The enumeration is closed on purpose: there is no way to hand the
/// engine an out-of-range move id, so `apply` has no failure mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// 90° turn of one outer face layer.
    Face(Face, Spin),
    /// 90° turn of the middle layer along one axis.
    Slice(Axis, Spin),
}

impl Move {
    /// Number of distinct moves.
    pub const COUNT: usize = 18;

    /// All 18 moves, in index order: the twelve face turns (face-major,
    /// cw before ccw), then the six slice turns (axis-major).
    pub const ALL: [Move; 18] = [
        Move::Face(Face::Top, Spin::Cw),
        Move::Face(Face::Top, Spin::Ccw),
        Move::Face(Face::Bottom, Spin::Cw),
        Move::Face(Face::Bottom, Spin::Ccw),
        Move::Face(Face::Right, Spin::Cw),
        Move::Face(Face::Right, Spin::Ccw),
        Move::Face(Face::Left, Spin::Cw),
        Move::Face(Face::Left, Spin::Ccw),
        Move::Face(Face::Front, Spin::Cw),
        Move::Face(Face::Front, Spin::Ccw),
        Move::Face(Face::Back, Spin::Cw),
        Move::Face(Face::Back, Spin::Ccw),
        Move::Slice(Axis::X, Spin::Cw),
        Move::Slice(Axis::X, Spin::Ccw),
        Move::Slice(Axis::Y, Spin::Cw),
        Move::Slice(Axis::Y, Spin::Ccw),
        Move::Slice(Axis::Z, Spin::Cw),
        Move::Slice(Axis::Z, Spin::Ccw),
    ];

    /// Stable move index, 0..18, consistent with [`Move::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Move::Face(face, spin) => face.index() * 2 + spin.index(),
            Move::Slice(axis, spin) => 12 + axis.index() * 2 + spin.index(),
        }
    }

    /// The move that undoes this one: same layer, reversed spin.
    ///
    /// ```
    /// use rust_cube::core::Face;
    /// use rust_cube::moves::{Move, Spin};
    ///
    /// let m = Move::Face(Face::Top, Spin::Cw);
    /// assert_eq!(m.inverse(), Move::Face(Face::Top, Spin::Ccw));
    /// assert_eq!(m.inverse().inverse(), m);
    /// ```
    #[must_use]
    pub const fn inverse(self) -> Move {
        match self {
            Move::Face(face, spin) => Move::Face(face, spin.reversed()),
            Move::Slice(axis, spin) => Move::Slice(axis, spin.reversed()),
        }
    }

    /// Whether this is a middle-slice turn.
    #[must_use]
    pub const fn is_slice(self) -> bool {
        matches!(self, Move::Slice(_, _))
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let spin = |s: Spin| match s {
            Spin::Cw => "cw",
            Spin::Ccw => "ccw",
        };
        match self {
            Move::Face(face, s) => write!(f, "{}-{}", face, spin(*s)),
            Move::Slice(axis, s) => {
                let axis = match axis {
                    Axis::X => "x",
                    Axis::Y => "y",
                    Axis::Z => "z",
                };
                write!(f, "mid-{}-{}", axis, spin(*s))
            }
        }
    }
}
