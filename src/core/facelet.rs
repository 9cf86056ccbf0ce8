//! Facelet addressing.
//!
//! A facelet is one of the 54 stickers, addressed by `(face, row, col)`.
//! Every face's grid reads like an image seen from outside the cube: row 0
//! on top, column 0 on the left, when the cube's net is unfolded as
//!
//! ```text
//!        Top
//! Left | Front | Right | Back
//!        Bottom
//! ```
//!
//! The mapping from a facelet to the cubie carrying it encodes that net
//! layout and is the only geometric knowledge the gesture resolver needs.

use serde::{Deserialize, Serialize};

use super::coords::CubieCoord;
use super::face::Face;

/// Address of a single facelet.
///
/// `row` and `col` are only meaningful in 0..3; the address type itself
/// admits any `u8` so that raw host input can be carried around, and
/// [`FaceletAddr::cubie`] reports out-of-range addresses as `None` instead
/// of panicking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FaceletAddr {
    pub face: Face,
    pub row: u8,
    pub col: u8,
}

impl FaceletAddr {
    /// Create a facelet address.
    #[must_use]
    pub const fn new(face: Face, row: u8, col: u8) -> Self {
        Self { face, row, col }
    }

    /// Whether the address actually lies on the tracked cube.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < 3 && self.col < 3
    }

    /// The cubie carrying this facelet, or `None` for an out-of-range
    /// address.
    ///
    /// ```
    /// use rust_cube::core::{CubieCoord, Face, FaceletAddr};
    ///
    /// // Top row 0 is the row bordering the Back face.
    /// let addr = FaceletAddr::new(Face::Top, 0, 2);
    /// assert_eq!(addr.cubie(), Some(CubieCoord::new(2, 2, 2)));
    ///
    /// assert_eq!(FaceletAddr::new(Face::Top, 5, 0).cubie(), None);
    /// ```
    #[must_use]
    pub fn cubie(self) -> Option<CubieCoord> {
        if !self.in_bounds() {
            return None;
        }
        let (i, j) = (self.row, self.col);
        let coord = match self.face {
            Face::Top => CubieCoord::new(j, 2, 2 - i),
            Face::Bottom => CubieCoord::new(j, 0, i),
            Face::Right => CubieCoord::new(2, 2 - i, j),
            Face::Left => CubieCoord::new(0, 2 - i, 2 - j),
            Face::Front => CubieCoord::new(j, 2 - i, 0),
            Face::Back => CubieCoord::new(2 - j, 2 - i, 2),
        };
        Some(coord)
    }
}

impl std::fmt::Display for FaceletAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({}, {})", self.face, self.row, self.col)
    }
}
