//! Grid coordinates: [`Coord`].
//!
//! Rows grow downward and columns grow to the right. Both are zero-based.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Coord
// ---------------------------------------------------------------------------

/// A cell position on the board, as `(row, col)`.
///
/// Coordinates are signed so that neighbor arithmetic can step off the board
/// and be rejected by a bounds check instead of wrapping.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { row: 0, col: 0 };

    /// Create a new coordinate.
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Return a coordinate shifted by (drow, dcol).
    #[inline]
    pub const fn shift(self, drow: i32, dcol: i32) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
        }
    }

    /// Whether the coordinate lies inside a square board of side `size`.
    #[inline]
    pub const fn in_square(self, size: i32) -> bool {
        self.row >= 0 && self.col >= 0 && self.row < size && self.col < size
    }

    /// The four orthogonal neighbours, in the order down, up, right, left.
    ///
    /// The order is observable: it fixes which of several equal-priority
    /// cells a search enqueues first.
    #[inline]
    pub const fn neighbors_4(self) -> [Coord; 4] {
        [
            Self::new(self.row + 1, self.col),
            Self::new(self.row - 1, self.col),
            Self::new(self.row, self.col + 1),
            Self::new(self.row, self.col - 1),
        ]
    }

    /// Row-major flat index on a square board of side `size`, or `None` when
    /// the coordinate is off the board.
    #[inline]
    pub fn index(self, size: i32) -> Option<usize> {
        if !self.in_square(size) {
            return None;
        }
        Some(self.row as usize * size as usize + self.col as usize)
    }

    /// Inverse of [`index`](Coord::index).
    #[inline]
    pub fn from_index(idx: usize, size: i32) -> Self {
        let side = size.max(1) as usize;
        Self::new((idx / side) as i32, (idx % side) as i32)
    }
}

// --- trait impls for Coord ---

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.row.cmp(&other.row).then(self.col.cmp(&other.col))
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl Add for Coord {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.row + rhs.row, self.col + rhs.col)
    }
}

impl Sub for Coord {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.row - rhs.row, self.col - rhs.col)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}
