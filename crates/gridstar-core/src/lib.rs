//! **gridstar-core**: the board that gridstar searches run on.
//!
//! This crate provides the grid model: [`Coord`] positions, [`Cell`]s with a
//! passability flag and a cached list of orthogonal neighbours, the owned
//! square [`Grid`], and the [`BoardConfig`] used to build one.

pub mod cell;
pub mod config;
pub mod error;
pub mod geom;
pub mod grid;

pub use cell::Cell;
pub use config::BoardConfig;
pub use error::GridError;
pub use geom::Coord;
pub use grid::Grid;
