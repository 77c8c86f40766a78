//! The [`Cell`] type: one square of the board.

use crate::geom::Coord;

/// A board cell: its position, passability and cached neighbor list.
///
/// Pixel geometry (`x`, `y`, `size`) is carried for renderers only; the
/// search never reads it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub coord: Coord,
    /// Left pixel edge, `row * size`.
    pub x: i32,
    /// Top pixel edge, `col * size`.
    pub y: i32,
    /// Side length in pixels.
    pub size: i32,
    pub(crate) passable: bool,
    #[cfg_attr(feature = "serde", serde(skip))]
    pub(crate) neighbors: Vec<Coord>,
}

impl Cell {
    /// A passable cell at `coord` with no neighbors computed yet.
    pub fn new(coord: Coord, size: i32) -> Self {
        Self {
            coord,
            x: coord.row * size,
            y: coord.col * size,
            size,
            passable: true,
            neighbors: Vec::new(),
        }
    }

    /// Whether the cell can be entered.
    #[inline]
    pub fn is_passable(&self) -> bool {
        self.passable
    }

    /// Neighbor list as of the last [`Grid::update_neighbors`](crate::Grid::update_neighbors).
    #[inline]
    pub fn neighbors(&self) -> &[Coord] {
        &self.neighbors
    }
}
