//! Observable A* search over square grids.
//!
//! The engine explores 4-connected, unit-cost boards with the Manhattan
//! heuristic and reports each cell's progress to a [`SearchObserver`] so a
//! renderer can animate it:
//!
//! - **A\*** shortest-path search ([`Search`], [`astar`], [`search_grid`])
//! - **Progress hooks** ([`SearchObserver`], [`EventRecorder`], [`StatusMap`])
//! - **Cancellation** polled once per iteration ([`CancelToken`])
//! - **BFS** exact distance maps for verification ([`bfs_distances`])
//!
//! Open-set ties on `f` are broken by insertion order, so identical inputs
//! always produce identical paths and identical event traces.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | BFS |
//! | [`AstarPather`] : [`Pather`] | A* |

mod astar;
mod bfs;
mod cancel;
mod distance;
mod observer;
mod open_set;
mod outcome;
mod state;
mod status;
mod traits;

pub use astar::{Search, astar, search_grid};
pub use bfs::{bfs_distance, bfs_distances};
pub use cancel::CancelToken;
pub use distance::manhattan;
pub use observer::{EventRecorder, NoopObserver, SearchEvent, SearchObserver};
pub use outcome::{Path, SearchError, SearchOutcome};
pub use state::UNREACHABLE;
pub use status::{CellStatus, StatusMap};
pub use traits::{AstarPather, Pather};
