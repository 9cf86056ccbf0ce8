//! Drag-gesture resolution.

use rustc_hash::FxHashMap;

use crate::core::{Axis, Face, FaceletAddr, Sign};
use crate::moves::Move;

use super::table::GESTURE_TABLE;

/// Resolves a completed drag into a move.
///
/// Built once; holds the gesture table keyed by
/// `(start face, drag axis, drag sign)`.
///
/// ```
/// use rust_cube::core::{Face, FaceletAddr};
/// use rust_cube::gesture::MoveResolver;
/// use rust_cube::moves::{Move, Spin};
///
/// let resolver = MoveResolver::new();
///
/// // Drag along the Top face's front edge, toward the Right face.
/// let start = FaceletAddr::new(Face::Top, 2, 0);
/// let end = FaceletAddr::new(Face::Top, 2, 1);
/// assert_eq!(
///     resolver.resolve(start, end),
///     Some(Move::Face(Face::Front, Spin::Cw))
/// );
/// ```
#[derive(Clone, Debug)]
pub struct MoveResolver {
    table: FxHashMap<(Face, Axis, Sign), (Axis, [Move; 3])>,
}

impl MoveResolver {
    /// Build the resolver from the gesture table.
    #[must_use]
    pub fn new() -> Self {
        let mut table = FxHashMap::default();
        for entry in &GESTURE_TABLE {
            table.insert(
                (entry.face, entry.axis, entry.sign),
                (entry.layer_axis, entry.layers),
            );
        }
        Self { table }
    }

    /// Resolve a drag from `start` to `end` into a move, or `None`.
    ///
    /// `None` covers every way a drag can fail to name a turn: identical
    /// addresses, addresses off the tracked cube, zero or diagonal
    /// same-face deltas, and end faces that are not reachable from the
    /// start face (its opposite). A drag that crosses onto an adjacent
    /// face resolves exactly like the within-face drag in the same
    /// direction: the crossing direction is the end face's outward normal,
    /// and the in-face landing offset is deliberately ignored.
    #[must_use]
    pub fn resolve(&self, start: FaceletAddr, end: FaceletAddr) -> Option<Move> {
        if start == end {
            return None;
        }

        let start_cubie = start.cubie()?;
        let end_cubie = end.cubie()?;

        let (axis, sign) = if start.face == end.face {
            start_cubie.unit_delta(end_cubie)?
        } else {
            end.face.outward()
        };

        let (layer_axis, layers) = self.table.get(&(start.face, axis, sign))?;
        let layer = start_cubie.component(*layer_axis) as usize;
        Some(layers[layer])
    }
}

impl Default for MoveResolver {
    fn default() -> Self {
        Self::new()
    }
}
