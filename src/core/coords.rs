//! Cubie-space coordinates.
//!
//! The 27 cubies live at `(x, y, z) ∈ {0,1,2}³`. `x` grows toward the
//! Right face, `y` toward the Top face, `z` toward the Back face. Gesture
//! resolution only ever needs the *delta* between two cubie positions and
//! the position along a single axis, so that is all this module offers.

use serde::{Deserialize, Serialize};

/// One of the three cube axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Axis index, 0..3.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Direction along an axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sign {
    Pos,
    Neg,
}

/// Position of a cubie, each component in 0..3.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CubieCoord {
    pub x: u8,
    pub y: u8,
    pub z: u8,
}

impl CubieCoord {
    /// Create a cubie coordinate.
    ///
    /// Panics if any component is out of 0..3; coordinates are only ever
    /// derived from validated facelet addresses.
    #[must_use]
    pub const fn new(x: u8, y: u8, z: u8) -> Self {
        assert!(x < 3 && y < 3 && z < 3, "cubie component out of range");
        Self { x, y, z }
    }

    /// Component along the given axis.
    #[must_use]
    pub const fn component(self, axis: Axis) -> u8 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Direction of `other - self` if it is a unit step along exactly one
    /// axis; `None` for zero or diagonal deltas.
    ///
    /// ```
    /// use rust_cube::core::{Axis, CubieCoord, Sign};
    ///
    /// let a = CubieCoord::new(1, 2, 0);
    /// let b = CubieCoord::new(2, 2, 0);
    /// assert_eq!(a.unit_delta(b), Some((Axis::X, Sign::Pos)));
    /// assert_eq!(b.unit_delta(a), Some((Axis::X, Sign::Neg)));
    /// assert_eq!(a.unit_delta(a), None);
    /// ```
    #[must_use]
    pub fn unit_delta(self, other: CubieCoord) -> Option<(Axis, Sign)> {
        let dx = i16::from(other.x) - i16::from(self.x);
        let dy = i16::from(other.y) - i16::from(self.y);
        let dz = i16::from(other.z) - i16::from(self.z);

        match (dx, dy, dz) {
            (1, 0, 0) => Some((Axis::X, Sign::Pos)),
            (-1, 0, 0) => Some((Axis::X, Sign::Neg)),
            (0, 1, 0) => Some((Axis::Y, Sign::Pos)),
            (0, -1, 0) => Some((Axis::Y, Sign::Neg)),
            (0, 0, 1) => Some((Axis::Z, Sign::Pos)),
            (0, 0, -1) => Some((Axis::Z, Sign::Neg)),
            _ => None,
        }
    }
}

impl std::fmt::Display for CubieCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}
