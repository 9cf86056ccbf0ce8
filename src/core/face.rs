//! The six cube faces.
//!
//! Faces are indexed `Top=0, Bottom, Right, Left, Front, Back` and that
//! order is load-bearing: the grid stores its six 3×3 panels in face-index
//! order, and each face's solved color is the color at the same index.

use serde::{Deserialize, Serialize};

use super::color::FaceletColor;
use super::coords::{Axis, Sign};

/// One of the six faces of the cube.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    Top,
    Bottom,
    Right,
    Left,
    Front,
    Back,
}

impl Face {
    /// Number of faces.
    pub const COUNT: usize = 6;

    /// All faces in index order.
    pub const ALL: [Face; 6] = [
        Face::Top,
        Face::Bottom,
        Face::Right,
        Face::Left,
        Face::Front,
        Face::Back,
    ];

    /// Face index, 0..6.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The face on the opposite side of the cube.
    ///
    /// ```
    /// use rust_cube::core::Face;
    ///
    /// assert_eq!(Face::Top.opposite(), Face::Bottom);
    /// assert_eq!(Face::Front.opposite(), Face::Back);
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Face {
        match self {
            Face::Top => Face::Bottom,
            Face::Bottom => Face::Top,
            Face::Right => Face::Left,
            Face::Left => Face::Right,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    /// The color this face holds in the solved configuration.
    #[must_use]
    pub const fn home_color(self) -> FaceletColor {
        match self {
            Face::Top => FaceletColor::White,
            Face::Bottom => FaceletColor::Orange,
            Face::Right => FaceletColor::Red,
            Face::Left => FaceletColor::Green,
            Face::Front => FaceletColor::Yellow,
            Face::Back => FaceletColor::Blue,
        }
    }

    /// Outward normal direction of this face.
    ///
    /// `Front` sits at `z = 0` and `Back` at `z = 2`, so `Front` points
    /// along `-Z` and `Back` along `+Z`.
    #[must_use]
    pub const fn outward(self) -> (Axis, Sign) {
        match self {
            Face::Top => (Axis::Y, Sign::Pos),
            Face::Bottom => (Axis::Y, Sign::Neg),
            Face::Right => (Axis::X, Sign::Pos),
            Face::Left => (Axis::X, Sign::Neg),
            Face::Front => (Axis::Z, Sign::Neg),
            Face::Back => (Axis::Z, Sign::Pos),
        }
    }
}

impl std::fmt::Display for Face {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Face::Top => "top",
            Face::Bottom => "bottom",
            Face::Right => "right",
            Face::Left => "left",
            Face::Front => "front",
            Face::Back => "back",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_order() {
        for (i, face) in Face::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }

    #[test]
    fn test_opposite_is_involution() {
        for face in Face::ALL {
            assert_eq!(face.opposite().opposite(), face);
            assert_ne!(face.opposite(), face);
        }
    }

    #[test]
    fn test_home_colors_are_distinct() {
        for a in Face::ALL {
            for b in Face::ALL {
                if a != b {
                    assert_ne!(a.home_color(), b.home_color());
                }
            }
        }
    }

    #[test]
    fn test_outward_of_opposites() {
        for face in Face::ALL {
            let (axis, sign) = face.outward();
            let (opp_axis, opp_sign) = face.opposite().outward();
            assert_eq!(axis, opp_axis);
            assert_ne!(sign, opp_sign);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Face::Top), "top");
        assert_eq!(format!("{}", Face::Back), "back");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Face::Front).unwrap();
        let back: Face = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Face::Front);
    }
}
