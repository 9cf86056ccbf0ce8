//! Gesture resolution integration tests.
//!
//! These exercise the resolver the way a host does: raw drag endpoints in,
//! at most one move out, and the resulting move applied to the engine.

use rust_cube::core::{Axis, Face, FaceletAddr, FaceletColor};
use rust_cube::gesture::MoveResolver;
use rust_cube::moves::{Move, Spin};
use rust_cube::state::CubeState;

fn addr(face: Face, row: u8, col: u8) -> FaceletAddr {
    FaceletAddr::new(face, row, col)
}

// =============================================================================
// Inert Gestures
// =============================================================================

/// Releasing on the start facelet never resolves, for all 54 facelets.
#[test]
fn test_release_in_place_is_inert() {
    let resolver = MoveResolver::new();
    for face in Face::ALL {
        for row in 0..3 {
            for col in 0..3 {
                let a = addr(face, row, col);
                assert_eq!(resolver.resolve(a, a), None, "{a}");
            }
        }
    }
}

/// Drags that miss the tracked cube are inert, not fatal.
#[test]
fn test_malformed_endpoints_are_inert() {
    let resolver = MoveResolver::new();

    assert_eq!(
        resolver.resolve(addr(Face::Front, 0, 0), addr(Face::Front, 200, 0)),
        None
    );
    assert_eq!(
        resolver.resolve(addr(Face::Back, 3, 3), addr(Face::Back, 1, 1)),
        None
    );
}

/// A drag "through" the cube to the opposite face is unresolvable.
#[test]
fn test_opposite_face_is_unreachable() {
    let resolver = MoveResolver::new();
    for face in Face::ALL {
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(
                    resolver.resolve(addr(face, row, col), addr(face.opposite(), row, col)),
                    None
                );
            }
        }
    }
}

// =============================================================================
// Layer Selection
// =============================================================================

/// A crossing drag that starts on a face's center facelet always turns the
/// middle slice: the center sits at layer 1 of every in-face direction.
#[test]
fn test_center_start_always_resolves_to_a_slice() {
    let resolver = MoveResolver::new();
    for face in Face::ALL {
        for end_face in Face::ALL {
            if end_face == face || end_face == face.opposite() {
                continue;
            }
            let resolved = resolver.resolve(addr(face, 1, 1), addr(end_face, 1, 1));
            let mv = resolved.unwrap_or_else(|| panic!("{face} → {end_face} must resolve"));
            assert!(mv.is_slice(), "{face} → {end_face} resolved {mv}");
        }
    }
}

/// Within one face, parallel drags on the three lanes turn three different
/// parallel layers.
#[test]
fn test_three_lanes_three_layers() {
    let resolver = MoveResolver::new();

    // Front face, downward drags, lanes col 0/1/2 (x = 0/1/2).
    let lane = |col| resolver.resolve(addr(Face::Front, 0, col), addr(Face::Front, 1, col));

    assert_eq!(lane(0), Some(Move::Face(Face::Left, Spin::Cw)));
    assert_eq!(lane(1), Some(Move::Slice(Axis::X, Spin::Ccw)));
    assert_eq!(lane(2), Some(Move::Face(Face::Right, Spin::Ccw)));
}

// =============================================================================
// Crossing Equivalence
// =============================================================================

/// Dragging from Top(0,2) across the shared edge onto Right resolves like
/// the within-Top rightward drag at the far layer, and applying it carries
/// Top's row-0 colors onto Right's column 2.
#[test]
fn test_top_to_right_crossing_scenario() {
    let resolver = MoveResolver::new();

    let crossing = resolver.resolve(addr(Face::Top, 0, 2), addr(Face::Right, 0, 0));
    let within = resolver.resolve(addr(Face::Top, 0, 0), addr(Face::Top, 0, 1));

    assert_eq!(crossing, within);
    assert_eq!(crossing, Some(Move::Face(Face::Back, Spin::Ccw)));

    let mut cube = CubeState::new();
    let (grid, _) = cube.apply(crossing.unwrap());

    for t in 0..3 {
        // Top's stickers (white) land on Right's back column.
        assert_eq!(grid.get(Face::Right, t, 2), FaceletColor::White);
        // Left's stickers (green) land on Top's back row.
        assert_eq!(grid.get(Face::Top, 0, t), FaceletColor::Green);
    }
}

/// Crossing direction is the end face, layer is still the start facelet.
#[test]
fn test_crossing_is_direction_only() {
    let resolver = MoveResolver::new();

    // Any landing cell on Right gives the same answer for the same start.
    let expected = resolver.resolve(addr(Face::Top, 1, 2), addr(Face::Right, 0, 0));
    assert_eq!(expected, Some(Move::Slice(Axis::Z, Spin::Ccw)));

    for row in 0..3 {
        for col in 0..3 {
            assert_eq!(
                resolver.resolve(addr(Face::Top, 1, 2), addr(Face::Right, row, col)),
                expected
            );
        }
    }
}

// =============================================================================
// Gesture → Engine Round Trips
// =============================================================================

/// A resolved gesture feeds straight into the engine, and the opposite
/// drag undoes it.
#[test]
fn test_drag_apply_reverse_drag_round_trip() {
    let resolver = MoveResolver::new();
    let mut cube = CubeState::new();

    let forward = resolver
        .resolve(addr(Face::Front, 2, 1), addr(Face::Front, 2, 2))
        .unwrap();
    let backward = resolver
        .resolve(addr(Face::Front, 2, 2), addr(Face::Front, 2, 1))
        .unwrap();

    assert_eq!(backward, forward.inverse());

    cube.apply(forward);
    assert!(!cube.is_solved());
    cube.apply(backward);
    assert!(cube.is_solved());
}

/// Every same-face unit drag resolves, and to a move whose layer contains
/// the dragged sticker's own layer coordinate.
#[test]
fn test_all_unit_drags_resolve() {
    let resolver = MoveResolver::new();
    let mut resolved = 0;

    for face in Face::ALL {
        for r1 in 0..3u8 {
            for c1 in 0..3u8 {
                for r2 in 0..3u8 {
                    for c2 in 0..3u8 {
                        let manhattan =
                            r1.abs_diff(r2) + c1.abs_diff(c2);
                        let outcome =
                            resolver.resolve(addr(face, r1, c1), addr(face, r2, c2));
                        if manhattan == 1 {
                            assert!(outcome.is_some(), "{face}({r1},{c1})→({r2},{c2})");
                            resolved += 1;
                        } else {
                            assert_eq!(outcome, None);
                        }
                    }
                }
            }
        }
    }

    // 24 ordered unit drags per 3×3 face, 6 faces.
    assert_eq!(resolved, 144);
}
