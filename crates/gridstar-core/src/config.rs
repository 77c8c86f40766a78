//! Board construction parameters.

/// Default number of rows (and columns) on a fresh board.
pub const DEFAULT_SIZE: i32 = 50;

/// Default cell side in pixels: an 800 px window split into 50 rows.
pub const DEFAULT_CELL_SIZE: i32 = 16;

/// Configuration for building a [`Grid`](crate::Grid).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BoardConfig {
    /// Side length of the square board, in cells.
    pub size: i32,
    /// Side length of one cell, in pixels.
    pub cell_size: i32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl BoardConfig {
    /// Set the board side (builder).
    pub const fn with_size(mut self, size: i32) -> Self {
        self.size = size;
        self
    }

    /// Set the cell side in pixels (builder).
    pub const fn with_cell_size(mut self, cell_size: i32) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Derive the cell size from a window width, the way a square window is
    /// divided into `size` rows. A zero-sized board keeps the whole width.
    pub fn fit_width(mut self, width: i32) -> Self {
        self.cell_size = if self.size > 0 { width / self.size } else { width };
        self
    }
}
