//! The [`Grid`] type: an owned N×N board of [`Cell`]s.
//!
//! Each cell caches the list of its passable orthogonal neighbours. Edits
//! only mark the cache stale; [`Grid::update_neighbors`] rebuilds every list
//! in one pass and is what a search calls before it starts.

use crate::cell::Cell;
use crate::config::BoardConfig;
use crate::error::GridError;
use crate::geom::Coord;

/// A square board of cells stored row-major.
#[derive(Debug, Clone)]
pub struct Grid {
    size: i32,
    cell_size: i32,
    cells: Vec<Cell>,
    stale: bool,
}

impl Grid {
    /// Create an `n`×`n` grid of passable cells. Negative sizes yield an
    /// empty grid.
    pub fn new(n: i32, cell_size: i32) -> Self {
        let size = n.max(0);
        let cells = (0..cell_count(size))
            .map(|i| Cell::new(Coord::from_index(i, size), cell_size))
            .collect();
        Self {
            size,
            cell_size,
            cells,
            stale: true,
        }
    }

    /// Create a grid from a [`BoardConfig`].
    pub fn from_config(config: &BoardConfig) -> Self {
        Self::new(config.size, config.cell_size)
    }

    /// Side length in cells.
    #[inline]
    pub fn size(&self) -> i32 {
        self.size
    }

    /// Side length of one cell in pixels.
    #[inline]
    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    /// Total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `c` is on the board.
    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        c.in_square(self.size)
    }

    fn index(&self, c: Coord) -> Result<usize, GridError> {
        c.index(self.size).ok_or(GridError::OutOfBounds {
            coord: c,
            size: self.size,
        })
    }

    /// The cell at `c`.
    pub fn cell(&self, c: Coord) -> Result<&Cell, GridError> {
        let i = self.index(c)?;
        Ok(&self.cells[i])
    }

    /// Whether the cell at `c` is passable.
    pub fn is_passable(&self, c: Coord) -> Result<bool, GridError> {
        self.cell(c).map(Cell::is_passable)
    }

    /// Set the passability of one cell. Fails without mutating anything when
    /// `c` is off the board.
    pub fn set_passable(&mut self, c: Coord, passable: bool) -> Result<(), GridError> {
        let i = self.index(c)?;
        if self.cells[i].passable != passable {
            self.cells[i].passable = passable;
            self.stale = true;
        }
        Ok(())
    }

    /// Whether an edit happened since the last [`update_neighbors`](Grid::update_neighbors).
    #[inline]
    pub fn neighbors_stale(&self) -> bool {
        self.stale
    }

    /// Rebuild the neighbor list of every cell from current passability.
    pub fn update_neighbors(&mut self) {
        for i in 0..self.cells.len() {
            let c = self.cells[i].coord;
            let mut list = std::mem::take(&mut self.cells[i].neighbors);
            list.clear();
            list.extend(self.open_neighbors(c));
            self.cells[i].neighbors = list;
        }
        self.stale = false;
    }

    /// The cached neighbor list of `c`.
    ///
    /// The list reflects passability as of the last
    /// [`update_neighbors`](Grid::update_neighbors) call.
    pub fn neighbors_of(&self, c: Coord) -> Result<&[Coord], GridError> {
        self.cell(c).map(Cell::neighbors)
    }

    /// Freshly computed passable orthogonal neighbours of `c`, ignoring the
    /// cache.
    pub fn passable_neighbors(&self, c: Coord) -> Result<Vec<Coord>, GridError> {
        self.index(c)?;
        Ok(self.open_neighbors(c).collect())
    }

    fn open_neighbors(&self, c: Coord) -> impl Iterator<Item = Coord> + '_ {
        c.neighbors_4().into_iter().filter(move |&n| {
            n.index(self.size)
                .is_some_and(|i| self.cells[i].passable)
        })
    }

    /// Number of impassable cells.
    pub fn count_blocked(&self) -> usize {
        self.cells.iter().filter(|c| !c.passable).count()
    }

    /// Row-major iterator over the cells.
    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }
}

/// Number of cells on a board of side `n`, computed without `i32` overflow.
fn cell_count(n: i32) -> usize {
    let side = n.max(0) as usize;
    side * side
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
