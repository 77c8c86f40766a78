use thiserror::Error;

use crate::geom::Coord;

/// Errors raised by grid bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// The coordinate lies outside `[0, size)` on either axis.
    #[error("cell {coord} is outside the {size}x{size} grid")]
    OutOfBounds { coord: Coord, size: i32 },
}
