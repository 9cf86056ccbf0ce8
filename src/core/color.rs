//! Symbolic facelet colors.
//!
//! Colors are symbolic, not RGB: mapping them to pixels is the host's
//! concern. The solved assignment (which color lives on which face) is
//! defined by [`Face::home_color`](super::Face::home_color).

use serde::{Deserialize, Serialize};

/// One of the six sticker colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FaceletColor {
    White,
    Orange,
    Red,
    Green,
    Yellow,
    Blue,
}

impl FaceletColor {
    /// Number of colors.
    pub const COUNT: usize = 6;

    /// All colors in index order.
    pub const ALL: [FaceletColor; 6] = [
        FaceletColor::White,
        FaceletColor::Orange,
        FaceletColor::Red,
        FaceletColor::Green,
        FaceletColor::Yellow,
        FaceletColor::Blue,
    ];

    /// Color index, 0..6.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for FaceletColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            FaceletColor::White => "white",
            FaceletColor::Orange => "orange",
            FaceletColor::Red => "red",
            FaceletColor::Green => "green",
            FaceletColor::Yellow => "yellow",
            FaceletColor::Blue => "blue",
        };
        write!(f, "{name}")
    }
}
