use gridstar_core::{Coord, Grid};

use crate::distance::manhattan;

/// Minimal pathfinding interface: board extent and neighbor enumeration.
pub trait Pather {
    /// Side length of the square board; valid cells lie in `[0, size)`.
    fn size(&self) -> i32;

    /// Append the cells reachable in one step from `c` into `buf`. The caller
    /// clears `buf` before calling.
    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>);
}

/// Pather with an admissible heuristic. Every step costs 1.
pub trait AstarPather: Pather {
    /// Heuristic estimate of the number of steps from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Coord, to: Coord) -> i32 {
        manhattan(from, to)
    }
}

/// Searches read the grid's cached neighbor lists; refresh them with
/// [`Grid::update_neighbors`] first (or use [`search_grid`](crate::search_grid)).
/// Debug builds panic when the lists are stale.
impl Pather for Grid {
    fn size(&self) -> i32 {
        Grid::size(self)
    }

    fn neighbors(&self, c: Coord, buf: &mut Vec<Coord>) {
        debug_assert!(
            !self.neighbors_stale(),
            "grid edited since the last update_neighbors"
        );
        if let Ok(list) = self.neighbors_of(c) {
            buf.extend_from_slice(list);
        }
    }
}

impl AstarPather for Grid {}
