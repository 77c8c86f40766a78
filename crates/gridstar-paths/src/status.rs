//! Per-cell search status, decoupled from any visual encoding.
//!
//! [`StatusMap`] is an observer that folds search events into one
//! [`CellStatus`] per cell. A renderer maps the statuses to whatever it draws.

use gridstar_core::Coord;

use crate::observer::SearchObserver;

/// Where a cell stands with respect to the last search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellStatus {
    #[default]
    Unseen,
    Frontier,
    Finalized,
    OnPath,
    Start,
    Goal,
}

/// Row-major table of [`CellStatus`] for a square board.
///
/// Search transitions are monotonic: `Unseen -> Frontier -> Finalized`. A
/// finalized cell ignores later `entered_frontier` events, and `Start` /
/// `Goal` markers are never overwritten by search events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMap {
    size: i32,
    cells: Vec<CellStatus>,
}

impl StatusMap {
    /// All cells `Unseen`.
    pub fn new(size: i32) -> Self {
        let len = (size.max(0) as usize).pow(2);
        Self {
            size,
            cells: vec![CellStatus::Unseen; len],
        }
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    /// Status of `c`; off-board cells read as `Unseen`.
    pub fn get(&self, c: Coord) -> CellStatus {
        c.index(self.size)
            .map(|i| self.cells[i])
            .unwrap_or_default()
    }

    /// Overwrite the status of `c`. No-op off the board.
    pub fn set(&mut self, c: Coord, status: CellStatus) {
        if let Some(i) = c.index(self.size) {
            self.cells[i] = status;
        }
    }

    /// Reset every cell to `Unseen`.
    pub fn clear(&mut self) {
        self.cells.fill(CellStatus::Unseen);
    }

    /// Mark the endpoints so renderers can draw them distinctly.
    pub fn mark_endpoints(&mut self, start: Coord, goal: Coord) {
        self.set(start, CellStatus::Start);
        self.set(goal, CellStatus::Goal);
    }

    /// Number of cells currently in `status`.
    pub fn count(&self, status: CellStatus) -> usize {
        self.cells.iter().filter(|&&s| s == status).count()
    }

    /// Row-major iterator over `(Coord, CellStatus)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, CellStatus)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &s)| (Coord::from_index(i, size), s))
    }

    fn is_endpoint(&self, c: Coord) -> bool {
        matches!(self.get(c), CellStatus::Start | CellStatus::Goal)
    }
}

impl SearchObserver for StatusMap {
    fn entered_frontier(&mut self, c: Coord) {
        if self.get(c) == CellStatus::Unseen {
            self.set(c, CellStatus::Frontier);
        }
    }

    fn finalized(&mut self, c: Coord) {
        if !self.is_endpoint(c) {
            self.set(c, CellStatus::Finalized);
        }
    }

    fn on_path(&mut self, c: Coord) {
        if !self.is_endpoint(c) {
            self.set(c, CellStatus::OnPath);
        }
    }
}
