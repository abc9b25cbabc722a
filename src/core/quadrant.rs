//! The four tap regions of the game board.
//!
//! A `Quadrant` identifies one of the four fixed on-screen regions the
//! player taps. The ordinal is stable: the presentation layer uses it to
//! index view and color tables, so variant order must never change.

use serde::{Deserialize, Serialize};

/// One of the four fixed on-screen regions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Quadrant {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Quadrant {
    /// All quadrants in declaration order. `ALL[q.ordinal()] == q`.
    pub const ALL: [Quadrant; 4] = [
        Quadrant::TopLeft,
        Quadrant::TopRight,
        Quadrant::BottomLeft,
        Quadrant::BottomRight,
    ];

    /// Number of quadrant variants.
    pub const COUNT: usize = 4;

    /// Stable ordinal for view/color lookup by the presentation layer.
    #[must_use]
    pub const fn ordinal(self) -> usize {
        self as usize
    }

    /// Look up a quadrant by ordinal. Returns `None` for indices >= 4.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Quadrant> {
        match index {
            0 => Some(Quadrant::TopLeft),
            1 => Some(Quadrant::TopRight),
            2 => Some(Quadrant::BottomLeft),
            3 => Some(Quadrant::BottomRight),
            _ => None,
        }
    }
}

impl std::fmt::Display for Quadrant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Quadrant::TopLeft => "top-left",
            Quadrant::TopRight => "top-right",
            Quadrant::BottomLeft => "bottom-left",
            Quadrant::BottomRight => "bottom-right",
        };
        write!(f, "{}", name)
    }
}
