//! Table-driven move permutations.
//!
//! Every move is a bijection of the 54 facelet cells. Instead of one block
//! of copy code per move, each move's permutation is built once from two
//! pieces of declarative data:
//!
//! - the face-pattern rotation formula (`new[i][j] = old[2-j][i]` for cw),
//!   applied only by face turns;
//! - a *ring table*: the four 3-cell strips on the surrounding faces that
//!   cycle one step per quarter turn.
//!
//! Ring semantics: `new[ring[k][t]] = old[ring[k+1][t]]`, with `k` wrapping.
//! The nine rings below encode the cube's physical adjacency and were
//! derived once from the net layout; the unit tests pin them down so a
//! sign slip in one strip cannot survive unnoticed. Counterclockwise
//! permutations are the exact inverses of the clockwise ones, which makes
//! the undo property hold by construction.

use crate::core::{Axis, Face};

use super::turn::{Move, Spin};

/// Total number of facelet cells.
pub const CELL_COUNT: usize = 54;

/// Flat cell index of `(face, row, col)`.
#[must_use]
pub const fn cell_index(face: Face, row: usize, col: usize) -> usize {
    face.index() * 9 + row * 3 + col
}

/// Four 3-cell strips in cycle order.
type Ring = [[(Face, usize, usize); 3]; 4];

/// Top cw: Left(0,t) ← Front(0,t) ← Right(0,t) ← Back(0,t) ← …
const TOP_RING: Ring = [
    [(Face::Left, 0, 0), (Face::Left, 0, 1), (Face::Left, 0, 2)],
    [(Face::Front, 0, 0), (Face::Front, 0, 1), (Face::Front, 0, 2)],
    [(Face::Right, 0, 0), (Face::Right, 0, 1), (Face::Right, 0, 2)],
    [(Face::Back, 0, 0), (Face::Back, 0, 1), (Face::Back, 0, 2)],
];

/// Bottom cw: Front(2,t) ← Left(2,t) ← Back(2,t) ← Right(2,t) ← …
const BOTTOM_RING: Ring = [
    [(Face::Front, 2, 0), (Face::Front, 2, 1), (Face::Front, 2, 2)],
    [(Face::Left, 2, 0), (Face::Left, 2, 1), (Face::Left, 2, 2)],
    [(Face::Back, 2, 0), (Face::Back, 2, 1), (Face::Back, 2, 2)],
    [(Face::Right, 2, 0), (Face::Right, 2, 1), (Face::Right, 2, 2)],
];

/// Right cw: Top(t,2) ← Front(t,2) ← Bottom(t,2) ← Back(t,0) ← …
const RIGHT_RING: Ring = [
    [(Face::Top, 0, 2), (Face::Top, 1, 2), (Face::Top, 2, 2)],
    [(Face::Front, 0, 2), (Face::Front, 1, 2), (Face::Front, 2, 2)],
    [(Face::Bottom, 0, 2), (Face::Bottom, 1, 2), (Face::Bottom, 2, 2)],
    [(Face::Back, 0, 0), (Face::Back, 1, 0), (Face::Back, 2, 0)],
];

/// Left cw: Front(t,0) ← Top(t,0) ← Back(2-t,2) ← Bottom(t,0) ← …
const LEFT_RING: Ring = [
    [(Face::Front, 0, 0), (Face::Front, 1, 0), (Face::Front, 2, 0)],
    [(Face::Top, 0, 0), (Face::Top, 1, 0), (Face::Top, 2, 0)],
    [(Face::Back, 2, 2), (Face::Back, 1, 2), (Face::Back, 0, 2)],
    [(Face::Bottom, 0, 0), (Face::Bottom, 1, 0), (Face::Bottom, 2, 0)],
];

/// Front cw: Top(2,t) ← Left(2-t,2) ← Bottom(0,2-t) ← Right(t,0) ← …
const FRONT_RING: Ring = [
    [(Face::Top, 2, 0), (Face::Top, 2, 1), (Face::Top, 2, 2)],
    [(Face::Left, 2, 2), (Face::Left, 1, 2), (Face::Left, 0, 2)],
    [(Face::Bottom, 0, 2), (Face::Bottom, 0, 1), (Face::Bottom, 0, 0)],
    [(Face::Right, 0, 0), (Face::Right, 1, 0), (Face::Right, 2, 0)],
];

/// Back cw: Right(t,2) ← Bottom(2,2-t) ← Left(2-t,0) ← Top(0,t) ← …
const BACK_RING: Ring = [
    [(Face::Right, 0, 2), (Face::Right, 1, 2), (Face::Right, 2, 2)],
    [(Face::Bottom, 2, 2), (Face::Bottom, 2, 1), (Face::Bottom, 2, 0)],
    [(Face::Left, 2, 0), (Face::Left, 1, 0), (Face::Left, 0, 0)],
    [(Face::Top, 0, 0), (Face::Top, 0, 1), (Face::Top, 0, 2)],
];

/// Slice X cw: Top(t,1) ← Front(t,1) ← Bottom(t,1) ← Back(2-t,1) ← …
const SLICE_X_RING: Ring = [
    [(Face::Top, 0, 1), (Face::Top, 1, 1), (Face::Top, 2, 1)],
    [(Face::Front, 0, 1), (Face::Front, 1, 1), (Face::Front, 2, 1)],
    [(Face::Bottom, 0, 1), (Face::Bottom, 1, 1), (Face::Bottom, 2, 1)],
    [(Face::Back, 2, 1), (Face::Back, 1, 1), (Face::Back, 0, 1)],
];

/// Slice Y cw: Left(1,t) ← Front(1,t) ← Right(1,t) ← Back(1,t) ← …
const SLICE_Y_RING: Ring = [
    [(Face::Left, 1, 0), (Face::Left, 1, 1), (Face::Left, 1, 2)],
    [(Face::Front, 1, 0), (Face::Front, 1, 1), (Face::Front, 1, 2)],
    [(Face::Right, 1, 0), (Face::Right, 1, 1), (Face::Right, 1, 2)],
    [(Face::Back, 1, 0), (Face::Back, 1, 1), (Face::Back, 1, 2)],
];

/// Slice Z cw: Left(2-t,1) ← Top(1,t) ← Right(t,1) ← Bottom(1,2-t) ← …
const SLICE_Z_RING: Ring = [
    [(Face::Left, 2, 1), (Face::Left, 1, 1), (Face::Left, 0, 1)],
    [(Face::Top, 1, 0), (Face::Top, 1, 1), (Face::Top, 1, 2)],
    [(Face::Right, 0, 1), (Face::Right, 1, 1), (Face::Right, 2, 1)],
    [(Face::Bottom, 1, 2), (Face::Bottom, 1, 1), (Face::Bottom, 1, 0)],
];

const fn face_ring(face: Face) -> &'static Ring {
    match face {
        Face::Top => &TOP_RING,
        Face::Bottom => &BOTTOM_RING,
        Face::Right => &RIGHT_RING,
        Face::Left => &LEFT_RING,
        Face::Front => &FRONT_RING,
        Face::Back => &BACK_RING,
    }
}

const fn slice_ring(axis: Axis) -> &'static Ring {
    match axis {
        Axis::X => &SLICE_X_RING,
        Axis::Y => &SLICE_Y_RING,
        Axis::Z => &SLICE_Z_RING,
    }
}

/// A total permutation of the 54 facelet cells.
///
/// `source_of(d)` names the old-grid cell whose color lands in new-grid
/// cell `d`; cells a move does not touch map to themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Permutation {
    src_of: [u8; CELL_COUNT],
}

impl Permutation {
    fn identity() -> Self {
        let mut src_of = [0u8; CELL_COUNT];
        for (i, slot) in src_of.iter_mut().enumerate() {
            *slot = i as u8;
        }
        Self { src_of }
    }

    /// Old-grid cell feeding new-grid cell `dst`.
    #[must_use]
    pub fn source_of(&self, dst: usize) -> usize {
        self.src_of[dst] as usize
    }

    /// The permutation undoing this one.
    #[must_use]
    pub fn inverse(&self) -> Self {
        let mut inv = Self::identity();
        for (dst, &src) in self.src_of.iter().enumerate() {
            inv.src_of[src as usize] = dst as u8;
        }
        inv
    }

    /// Whether every cell appears exactly once as a source.
    #[must_use]
    pub fn is_bijection(&self) -> bool {
        let mut seen = [false; CELL_COUNT];
        for &src in &self.src_of {
            let src = src as usize;
            if src >= CELL_COUNT || seen[src] {
                return false;
            }
            seen[src] = true;
        }
        true
    }

    fn cycle_ring(&mut self, ring: &Ring) {
        for k in 0..4 {
            let next = ring[(k + 1) % 4];
            for t in 0..3 {
                let (df, dr, dc) = ring[k][t];
                let (sf, sr, sc) = next[t];
                self.src_of[cell_index(df, dr, dc)] = cell_index(sf, sr, sc) as u8;
            }
        }
    }

    fn rotate_face_cw(&mut self, face: Face) {
        for i in 0..3 {
            for j in 0..3 {
                self.src_of[cell_index(face, i, j)] = cell_index(face, 2 - j, i) as u8;
            }
        }
    }
}

fn face_turn_cw(face: Face) -> Permutation {
    let mut perm = Permutation::identity();
    perm.rotate_face_cw(face);
    perm.cycle_ring(face_ring(face));
    perm
}

fn slice_turn_cw(axis: Axis) -> Permutation {
    let mut perm = Permutation::identity();
    perm.cycle_ring(slice_ring(axis));
    perm
}

/// The 18 move permutations, built once and indexed by [`Move::index`].
#[derive(Clone, Debug)]
pub struct MoveTables {
    perms: [Permutation; Move::COUNT],
}

impl MoveTables {
    /// Build the full table set.
    #[must_use]
    pub fn new() -> Self {
        let mut perms: [Permutation; Move::COUNT] =
            std::array::from_fn(|_| Permutation::identity());

        for face in Face::ALL {
            let cw = face_turn_cw(face);
            perms[Move::Face(face, Spin::Ccw).index()] = cw.inverse();
            perms[Move::Face(face, Spin::Cw).index()] = cw;
        }
        for axis in Axis::ALL {
            let cw = slice_turn_cw(axis);
            perms[Move::Slice(axis, Spin::Ccw).index()] = cw.inverse();
            perms[Move::Slice(axis, Spin::Cw).index()] = cw;
        }

        Self { perms }
    }

    /// The permutation for a move.
    #[must_use]
    pub fn permutation(&self, mv: Move) -> &Permutation {
        &self.perms[mv.index()]
    }
}

impl Default for MoveTables {
    fn default() -> Self {
        Self::new()
    }
}
