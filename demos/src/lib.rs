//! Caller-side pieces around the gridstar engine.
//!
//! Demonstrates: click-style board editing ([`Board`]), text boards
//! ([`parse_board`]), running a search with progress recorded per cell, and
//! rendering the result as text.

pub mod ascii;
pub mod board;

pub use ascii::parse_board;
pub use board::{Board, BoardError, Placement};
