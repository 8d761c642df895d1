//! Board coordinates.
//!
//! `(0, 0)` is the left corner of black's back rank. `x` grows to the
//! right, `y` grows downward toward white's side of the default setup.

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

/// Width and height of the board.
pub const BOARD_SIZE: i32 = 8;

/// A tile coordinate. May lie off the board; use [`Coord::on_board`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    #[inline]
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// True iff both components lie in `[0, BOARD_SIZE)`.
    #[inline]
    #[must_use]
    pub const fn on_board(self) -> bool {
        self.x >= 0 && self.x < BOARD_SIZE && self.y >= 0 && self.y < BOARD_SIZE
    }

    /// Row-major index into a tile array. Only meaningful on the board.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.y * BOARD_SIZE + self.x) as usize
    }

    /// Inverse of [`Coord::index`].
    #[inline]
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self::new(index as i32 % BOARD_SIZE, index as i32 / BOARD_SIZE)
    }

    #[inline]
    #[must_use]
    pub fn chebyshev_norm(self) -> i32 {
        self.x.abs().max(self.y.abs())
    }

    /// Component-wise sign, i.e. the unit step from the origin toward `self`.
    #[inline]
    #[must_use]
    pub fn signum(self) -> Self {
        Self::new(self.x.signum(), self.y.signum())
    }

    /// Iterate every on-board coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..(BOARD_SIZE * BOARD_SIZE) as usize).map(Coord::from_index)
    }
}

impl Add for Coord {
    type Output = Coord;

    #[inline]
    fn add(self, rhs: Coord) -> Self::Output {
        Coord::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Coord {
    type Output = Coord;

    #[inline]
    fn sub(self, rhs: Coord) -> Self::Output {
        Coord::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four orthogonal unit steps.
pub const CARDINAL_STEPS: [Coord; 4] = [
    Coord { x: 0, y: -1 },
    Coord { x: 1, y: 0 },
    Coord { x: 0, y: 1 },
    Coord { x: -1, y: 0 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_board() {
        assert!(Coord::new(0, 0).on_board());
        assert!(Coord::new(7, 7).on_board());
        assert!(!Coord::new(8, 0).on_board());
        assert!(!Coord::new(0, -1).on_board());
    }

    #[test]
    fn test_index_roundtrip() {
        for coord in Coord::all() {
            assert_eq!(Coord::from_index(coord.index()), coord);
        }
        assert_eq!(Coord::all().count(), 64);
        assert_eq!(Coord::new(3, 2).index(), 19);
    }

    #[test]
    fn test_signum_and_norm() {
        let d = Coord::new(5, 3) - Coord::new(2, 6);
        assert_eq!(d, Coord::new(3, -3));
        assert_eq!(d.signum(), Coord::new(1, -1));
        assert_eq!(d.chebyshev_norm(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Coord::new(4, 6)), "(4, 6)");
    }
}
