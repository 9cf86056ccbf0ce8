//! The gesture lookup table.
//!
//! One entry per `(start face, drag direction)` pair — 6 faces × 4 in-face
//! directions, 24 entries. Each names the layer-selection axis and the
//! three moves for layers 0, 1, 2 along it: near outer turn, middle slice,
//! far outer turn in the reversed sense (twisting the far layer one way
//! reads the same as twisting the near layer the other way).
//!
//! The entries are enumerated in full rather than derived at runtime: they
//! encode the net's winding, mirrored-face rows differ only by direction
//! inversion, and a computed version would be one sign slip away from
//! turning the wrong layer. The table tests cross-check the mirror
//! symmetry instead.

use crate::core::{Axis, Face, Sign};
use crate::moves::{Move, Spin};

const TOP_CW: Move = Move::Face(Face::Top, Spin::Cw);
const TOP_CCW: Move = Move::Face(Face::Top, Spin::Ccw);
const BOTTOM_CW: Move = Move::Face(Face::Bottom, Spin::Cw);
const BOTTOM_CCW: Move = Move::Face(Face::Bottom, Spin::Ccw);
const RIGHT_CW: Move = Move::Face(Face::Right, Spin::Cw);
const RIGHT_CCW: Move = Move::Face(Face::Right, Spin::Ccw);
const LEFT_CW: Move = Move::Face(Face::Left, Spin::Cw);
const LEFT_CCW: Move = Move::Face(Face::Left, Spin::Ccw);
const FRONT_CW: Move = Move::Face(Face::Front, Spin::Cw);
const FRONT_CCW: Move = Move::Face(Face::Front, Spin::Ccw);
const BACK_CW: Move = Move::Face(Face::Back, Spin::Cw);
const BACK_CCW: Move = Move::Face(Face::Back, Spin::Ccw);
const MID_X_CW: Move = Move::Slice(Axis::X, Spin::Cw);
const MID_X_CCW: Move = Move::Slice(Axis::X, Spin::Ccw);
const MID_Y_CW: Move = Move::Slice(Axis::Y, Spin::Cw);
const MID_Y_CCW: Move = Move::Slice(Axis::Y, Spin::Ccw);
const MID_Z_CW: Move = Move::Slice(Axis::Z, Spin::Cw);
const MID_Z_CCW: Move = Move::Slice(Axis::Z, Spin::Ccw);

/// One `(start face, direction) → layer moves` row.
#[derive(Clone, Copy, Debug)]
pub(crate) struct GestureEntry {
    /// Face the drag started on.
    pub face: Face,
    /// Drag direction in cubie space.
    pub axis: Axis,
    pub sign: Sign,
    /// Axis whose start coordinate selects the layer.
    pub layer_axis: Axis,
    /// Moves for layer 0, 1, 2 along `layer_axis`.
    pub layers: [Move; 3],
}

const fn row(
    face: Face,
    axis: Axis,
    sign: Sign,
    layer_axis: Axis,
    layers: [Move; 3],
) -> GestureEntry {
    GestureEntry {
        face,
        axis,
        sign,
        layer_axis,
        layers,
    }
}

/// All 24 gesture rows.
#[rustfmt::skip]
pub(crate) const GESTURE_TABLE: [GestureEntry; 24] = [
    row(Face::Top,    Axis::X, Sign::Pos, Axis::Z, [FRONT_CW,   MID_Z_CCW, BACK_CCW]),
    row(Face::Top,    Axis::X, Sign::Neg, Axis::Z, [FRONT_CCW,  MID_Z_CW,  BACK_CW]),
    row(Face::Top,    Axis::Z, Sign::Pos, Axis::X, [LEFT_CCW,   MID_X_CW,  RIGHT_CW]),
    row(Face::Top,    Axis::Z, Sign::Neg, Axis::X, [LEFT_CW,    MID_X_CCW, RIGHT_CCW]),

    row(Face::Bottom, Axis::X, Sign::Pos, Axis::Z, [FRONT_CCW,  MID_Z_CW,  BACK_CW]),
    row(Face::Bottom, Axis::X, Sign::Neg, Axis::Z, [FRONT_CW,   MID_Z_CCW, BACK_CCW]),
    row(Face::Bottom, Axis::Z, Sign::Pos, Axis::X, [LEFT_CW,    MID_X_CCW, RIGHT_CCW]),
    row(Face::Bottom, Axis::Z, Sign::Neg, Axis::X, [LEFT_CCW,   MID_X_CW,  RIGHT_CW]),

    row(Face::Right,  Axis::Y, Sign::Pos, Axis::Z, [FRONT_CCW,  MID_Z_CW,  BACK_CW]),
    row(Face::Right,  Axis::Y, Sign::Neg, Axis::Z, [FRONT_CW,   MID_Z_CCW, BACK_CCW]),
    row(Face::Right,  Axis::Z, Sign::Pos, Axis::Y, [BOTTOM_CW,  MID_Y_CCW, TOP_CCW]),
    row(Face::Right,  Axis::Z, Sign::Neg, Axis::Y, [BOTTOM_CCW, MID_Y_CW,  TOP_CW]),

    row(Face::Left,   Axis::Y, Sign::Pos, Axis::Z, [FRONT_CW,   MID_Z_CCW, BACK_CCW]),
    row(Face::Left,   Axis::Y, Sign::Neg, Axis::Z, [FRONT_CCW,  MID_Z_CW,  BACK_CW]),
    row(Face::Left,   Axis::Z, Sign::Pos, Axis::Y, [BOTTOM_CCW, MID_Y_CW,  TOP_CW]),
    row(Face::Left,   Axis::Z, Sign::Neg, Axis::Y, [BOTTOM_CW,  MID_Y_CCW, TOP_CCW]),

    row(Face::Front,  Axis::X, Sign::Pos, Axis::Y, [BOTTOM_CW,  MID_Y_CCW, TOP_CCW]),
    row(Face::Front,  Axis::X, Sign::Neg, Axis::Y, [BOTTOM_CCW, MID_Y_CW,  TOP_CW]),
    row(Face::Front,  Axis::Y, Sign::Pos, Axis::X, [LEFT_CCW,   MID_X_CW,  RIGHT_CW]),
    row(Face::Front,  Axis::Y, Sign::Neg, Axis::X, [LEFT_CW,    MID_X_CCW, RIGHT_CCW]),

    row(Face::Back,   Axis::X, Sign::Pos, Axis::Y, [BOTTOM_CCW, MID_Y_CW,  TOP_CW]),
    row(Face::Back,   Axis::X, Sign::Neg, Axis::Y, [BOTTOM_CW,  MID_Y_CCW, TOP_CCW]),
    row(Face::Back,   Axis::Y, Sign::Pos, Axis::X, [LEFT_CW,    MID_X_CCW, RIGHT_CCW]),
    row(Face::Back,   Axis::Y, Sign::Neg, Axis::X, [LEFT_CCW,   MID_X_CW,  RIGHT_CW]),
];
