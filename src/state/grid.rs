//! The 6×3×3 color grid.
//!
//! A `Grid` is the complete visible surface of the cube: six 3×3 panels in
//! face-index order. It is the snapshot format the host repaints from —
//! 54 symbolic colors grouped by face, then row, then column — and it is
//! `Copy`, so handing snapshots out never aliases engine state.

use serde::{Deserialize, Serialize};

use crate::core::{Face, FaceletColor};
use crate::moves::{Permutation, CELL_COUNT};

/// The full sticker surface of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    faces: [[[FaceletColor; 3]; 3]; Face::COUNT],
}

impl Grid {
    /// The solved grid: every face uniformly its home color.
    ///
    /// ```
    /// use rust_cube::core::{Face, FaceletColor};
    /// use rust_cube::state::Grid;
    ///
    /// let grid = Grid::solved();
    /// assert_eq!(grid.get(Face::Top, 1, 1), FaceletColor::White);
    /// ```
    #[must_use]
    pub fn solved() -> Self {
        Self {
            faces: Face::ALL.map(|face| [[face.home_color(); 3]; 3]),
        }
    }

    /// Color at `(face, row, col)`.
    ///
    /// Panics on out-of-range `row`/`col`; use [`FaceletAddr`] for
    /// unvalidated host input.
    ///
    /// [`FaceletAddr`]: crate::core::FaceletAddr
    #[must_use]
    pub fn get(&self, face: Face, row: usize, col: usize) -> FaceletColor {
        self.faces[face.index()][row][col]
    }

    /// One face's 3×3 panel.
    #[must_use]
    pub fn face(&self, face: Face) -> &[[FaceletColor; 3]; 3] {
        &self.faces[face.index()]
    }

    /// Color at a flat cell index (`face*9 + row*3 + col`).
    ///
    /// Panics if `idx >= 54`.
    #[must_use]
    pub fn cell(&self, idx: usize) -> FaceletColor {
        self.faces[idx / 9][(idx % 9) / 3][idx % 3]
    }

    pub(crate) fn set_cell(&mut self, idx: usize, color: FaceletColor) {
        self.faces[idx / 9][(idx % 9) / 3][idx % 3] = color;
    }

    /// All 54 colors, by face, then row, then column.
    pub fn cells(&self) -> impl Iterator<Item = FaceletColor> + '_ {
        (0..CELL_COUNT).map(|idx| self.cell(idx))
    }

    /// How many cells hold each color, indexed by [`FaceletColor::index`].
    ///
    /// Moves permute cells, so on any reachable grid this is `[9; 6]`.
    #[must_use]
    pub fn color_counts(&self) -> [usize; FaceletColor::COUNT] {
        let mut counts = [0usize; FaceletColor::COUNT];
        for color in self.cells() {
            counts[color.index()] += 1;
        }
        counts
    }

    /// Whether this grid is the solved grid.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        *self == Self::solved()
    }

    /// The grid produced by a permutation: `new[d] = old[source_of(d)]`.
    ///
    /// Reads entirely from `self` and writes a fresh grid, so aliased
    /// cells within one move can never observe half-applied state.
    #[must_use]
    pub fn permuted(&self, perm: &Permutation) -> Grid {
        let mut next = *self;
        for dst in 0..CELL_COUNT {
            next.set_cell(dst, self.cell(perm.source_of(dst)));
        }
        next
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::solved()
    }
}
