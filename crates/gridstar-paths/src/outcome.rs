//! Search results and errors.

use std::fmt;

use gridstar_core::{Coord, GridError};
use thiserror::Error;

/// An ordered, non-empty list of cells from start to goal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    cells: Vec<Coord>,
}

impl Path {
    /// Wrap a list of cells. Returns `None` for an empty list.
    pub fn new(cells: Vec<Coord>) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        Some(Self { cells })
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Number of cells, endpoints included.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// A `Path` always holds at least its start.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Number of steps, `len() - 1`.
    pub fn cost(&self) -> i32 {
        self.cells.len() as i32 - 1
    }

    pub fn start(&self) -> Coord {
        self.cells[0]
    }

    pub fn goal(&self) -> Coord {
        self.cells[self.cells.len() - 1]
    }

    pub fn contains(&self, c: Coord) -> bool {
        self.cells.contains(&c)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.cells.iter()
    }

    pub fn into_cells(self) -> Vec<Coord> {
        self.cells
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// How a search ended.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchOutcome {
    /// The goal was reached; the path is optimal.
    PathFound(Path),
    /// The reachable region was exhausted without reaching the goal.
    NoPathExists,
    /// The cancellation token was raised before the search finished.
    Cancelled,
}

impl SearchOutcome {
    /// The path, if one was found.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::PathFound(p) => Some(p),
            _ => None,
        }
    }

    pub fn into_path(self) -> Option<Path> {
        match self {
            Self::PathFound(p) => Some(p),
            _ => None,
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::PathFound(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl fmt::Display for SearchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PathFound(p) => write!(f, "path found ({} steps)", p.cost()),
            Self::NoPathExists => f.write_str("no path exists"),
            Self::Cancelled => f.write_str("cancelled"),
        }
    }
}

/// Why a search could not be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// An endpoint is missing, or start and goal are the same cell.
    #[error("invalid endpoints: start {start:?}, goal {goal:?}")]
    InvalidEndpoints {
        start: Option<Coord>,
        goal: Option<Coord>,
    },
    /// An endpoint is off the board.
    #[error(transparent)]
    Grid(#[from] GridError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_accessors() {
        let p = Path::new(vec![Coord::new(0, 0), Coord::new(0, 1), Coord::new(1, 1)]).unwrap();
        assert_eq!(p.len(), 3);
        assert_eq!(p.cost(), 2);
        assert_eq!(p.start(), Coord::new(0, 0));
        assert_eq!(p.goal(), Coord::new(1, 1));
        assert!(p.contains(Coord::new(0, 1)));
        assert!(!p.is_empty());
        assert!(Path::new(Vec::new()).is_none());
    }

    #[test]
    fn outcome_display() {
        let p = Path::new(vec![Coord::new(0, 0), Coord::new(0, 1)]).unwrap();
        assert_eq!(SearchOutcome::PathFound(p).to_string(), "path found (1 steps)");
        assert_eq!(SearchOutcome::NoPathExists.to_string(), "no path exists");
        assert!(SearchOutcome::Cancelled.is_cancelled());
        assert!(SearchOutcome::NoPathExists.path().is_none());
    }

    #[test]
    fn error_messages() {
        let e = SearchError::InvalidEndpoints {
            start: Some(Coord::new(1, 2)),
            goal: None,
        };
        assert!(e.to_string().starts_with("invalid endpoints"));
        let e: SearchError = GridError::OutOfBounds {
            coord: Coord::new(9, 0),
            size: 3,
        }
        .into();
        assert_eq!(e.to_string(), "cell (9, 0) is outside the 3x3 grid");
    }
}
