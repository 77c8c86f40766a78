//! An editing session over one grid: endpoint placement, barrier painting,
//! erase, reset and run.
//!
//! The rules follow a click-driven editor: the first primary placement sets
//! the start, the second sets the goal, and later ones paint barriers.
//! Secondary placement erases whatever was there.

use gridstar_core::{BoardConfig, Coord, Grid, GridError};
use gridstar_paths::{
    CancelToken, CellStatus, NoopObserver, SearchError, SearchObserver, SearchOutcome, StatusMap,
    search_grid,
};
use log::info;
use thiserror::Error;

/// Errors raised while editing, parsing or running a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("start is already placed at {0}")]
    StartAlreadySet(Coord),
    #[error("goal is already placed at {0}")]
    GoalAlreadySet(Coord),
    #[error("{0} is already an endpoint")]
    Occupied(Coord),
    #[error("board row {row} has {found} cells, expected {expected}")]
    InconsistentSize {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("board has {rows} rows of {cols} cells; it must be square")]
    NotSquare { rows: usize, cols: usize },
    #[error("board contains invalid character \u{201c}{ch}\u{201d} at {coord}")]
    InvalidRune { ch: char, coord: Coord },
    #[error("second {marker} marker at {coord}")]
    DuplicateMarker { marker: char, coord: Coord },
}

/// What a primary placement did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Start,
    Goal,
    Barrier,
    /// The cell is an endpoint; nothing changed.
    Ignored,
}

/// A grid plus at most one start, at most one goal, and the status of each
/// cell as of the last run.
#[derive(Debug, Clone)]
pub struct Board {
    config: BoardConfig,
    grid: Grid,
    start: Option<Coord>,
    goal: Option<Coord>,
    status: StatusMap,
}

impl Board {
    /// A blank board built from `config`.
    pub fn new(config: BoardConfig) -> Self {
        let grid = Grid::from_config(&config);
        let status = StatusMap::new(grid.size());
        Self {
            config,
            grid,
            start: None,
            goal: None,
            status,
        }
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Option<Coord> {
        self.start
    }

    pub fn goal(&self) -> Option<Coord> {
        self.goal
    }

    /// Cell statuses from the last [`run`](Board::run).
    pub fn status(&self) -> &StatusMap {
        &self.status
    }

    fn is_endpoint(&self, c: Coord) -> bool {
        self.start == Some(c) || self.goal == Some(c)
    }

    /// Primary placement at `c`: start first, then goal, then barriers.
    pub fn primary(&mut self, c: Coord) -> Result<Placement, BoardError> {
        self.grid.cell(c)?;
        if self.start.is_none() && self.goal != Some(c) {
            self.set_start(c)?;
            Ok(Placement::Start)
        } else if self.goal.is_none() && self.start != Some(c) {
            self.set_goal(c)?;
            Ok(Placement::Goal)
        } else if !self.is_endpoint(c) {
            self.grid.set_passable(c, false)?;
            Ok(Placement::Barrier)
        } else {
            Ok(Placement::Ignored)
        }
    }

    /// Secondary placement at `c`: make it passable and drop it as an
    /// endpoint if it was one.
    pub fn secondary(&mut self, c: Coord) -> Result<(), BoardError> {
        self.grid.set_passable(c, true)?;
        if self.start == Some(c) {
            self.start = None;
        } else if self.goal == Some(c) {
            self.goal = None;
        }
        Ok(())
    }

    /// Designate the start. Rejected while a start exists or when `c` is
    /// the goal. The cell becomes passable.
    pub fn set_start(&mut self, c: Coord) -> Result<(), BoardError> {
        if let Some(s) = self.start {
            return Err(BoardError::StartAlreadySet(s));
        }
        if self.goal == Some(c) {
            return Err(BoardError::Occupied(c));
        }
        self.grid.set_passable(c, true)?;
        self.start = Some(c);
        Ok(())
    }

    /// Designate the goal. Rejected while a goal exists or when `c` is the
    /// start. The cell becomes passable.
    pub fn set_goal(&mut self, c: Coord) -> Result<(), BoardError> {
        if let Some(g) = self.goal {
            return Err(BoardError::GoalAlreadySet(g));
        }
        if self.start == Some(c) {
            return Err(BoardError::Occupied(c));
        }
        self.grid.set_passable(c, true)?;
        self.goal = Some(c);
        Ok(())
    }

    /// Paint or erase a barrier without touching endpoints.
    pub fn set_barrier(&mut self, c: Coord, blocked: bool) -> Result<(), BoardError> {
        if self.is_endpoint(c) {
            return Err(BoardError::Occupied(c));
        }
        self.grid.set_passable(c, !blocked)?;
        Ok(())
    }

    /// Throw away the grid, endpoints and statuses and start over from the
    /// config.
    pub fn reset(&mut self) {
        *self = Self::new(self.config);
    }

    /// Search from start to goal, recording progress in [`status`](Board::status).
    pub fn run(&mut self, cancel: &CancelToken) -> Result<SearchOutcome, BoardError> {
        self.run_with(&mut NoopObserver, cancel)
    }

    /// Like [`run`](Board::run), also forwarding every event to `observer`.
    pub fn run_with<O: SearchObserver + ?Sized>(
        &mut self,
        observer: &mut O,
        cancel: &CancelToken,
    ) -> Result<SearchOutcome, BoardError> {
        let (Some(start), Some(goal)) = (self.start, self.goal) else {
            return Err(SearchError::InvalidEndpoints {
                start: self.start,
                goal: self.goal,
            }
            .into());
        };
        self.status.clear();
        let mut tee = Tee {
            a: &mut self.status,
            b: observer,
        };
        let outcome = search_grid(&mut self.grid, start, goal, &mut tee, cancel)?;
        self.status.mark_endpoints(start, goal);
        info!("{start} -> {goal}: {outcome}");
        Ok(outcome)
    }

    /// One character per cell, one line per row.
    ///
    /// `S`/`G` endpoints, `#` barrier, `*` on path, `x` finalized,
    /// `o` frontier, `.` untouched.
    pub fn render(&self) -> String {
        let n = self.grid.size();
        let mut out = String::with_capacity(self.grid.len() + n.max(0) as usize);
        for row in 0..n {
            for col in 0..n {
                out.push(self.glyph(Coord::new(row, col)));
            }
            out.push('\n');
        }
        out
    }

    fn glyph(&self, c: Coord) -> char {
        if self.start == Some(c) {
            return 'S';
        }
        if self.goal == Some(c) {
            return 'G';
        }
        if !self.grid.is_passable(c).unwrap_or(false) {
            return '#';
        }
        match self.status.get(c) {
            CellStatus::OnPath => '*',
            CellStatus::Finalized => 'x',
            CellStatus::Frontier => 'o',
            CellStatus::Unseen | CellStatus::Start | CellStatus::Goal => '.',
        }
    }
}

struct Tee<'a, A: ?Sized, B: ?Sized> {
    a: &'a mut A,
    b: &'a mut B,
}

impl<A: SearchObserver + ?Sized, B: SearchObserver + ?Sized> SearchObserver for Tee<'_, A, B> {
    fn entered_frontier(&mut self, c: Coord) {
        self.a.entered_frontier(c);
        self.b.entered_frontier(c);
    }

    fn finalized(&mut self, c: Coord) {
        self.a.finalized(c);
        self.b.finalized(c);
    }

    fn on_path(&mut self, c: Coord) {
        self.a.on_path(c);
        self.b.on_path(c);
    }
}
