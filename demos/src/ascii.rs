//! Boards written as text.
//!
//! One line per row, one character per cell:
//!
//! ```text
//! S..#
//! .#.#
//! .#..
//! ...G
//! ```
//!
//! `.` is passable, `#` is a barrier, `S` the start and `G` the goal. The
//! board must be square. Leading and trailing blank lines are ignored, as is
//! trailing whitespace on each line.

use gridstar_core::{BoardConfig, Coord};

use crate::board::{Board, BoardError};

/// Parse a text board. `cell_size` only affects pixel geometry.
pub fn parse_board(text: &str, cell_size: i32) -> Result<Board, BoardError> {
    let lines: Vec<&str> = text.trim_matches('\n').lines().map(str::trim_end).collect();
    let rows = lines.len();
    let cols = lines.first().map_or(0, |l| l.chars().count());

    for (row, line) in lines.iter().enumerate() {
        let found = line.chars().count();
        if found != cols {
            return Err(BoardError::InconsistentSize {
                row,
                expected: cols,
                found,
            });
        }
    }
    if rows != cols {
        return Err(BoardError::NotSquare { rows, cols });
    }

    let config = BoardConfig::default()
        .with_size(rows as i32)
        .with_cell_size(cell_size);
    let mut board = Board::new(config);

    for (row, line) in lines.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            let coord = Coord::new(row as i32, col as i32);
            match ch {
                '.' => {}
                '#' => board.set_barrier(coord, true)?,
                'S' => board.set_start(coord).map_err(|e| duplicate(e, 'S', coord))?,
                'G' => board.set_goal(coord).map_err(|e| duplicate(e, 'G', coord))?,
                _ => return Err(BoardError::InvalidRune { ch, coord }),
            }
        }
    }
    Ok(board)
}

fn duplicate(err: BoardError, marker: char, coord: Coord) -> BoardError {
    match err {
        BoardError::StartAlreadySet(_) | BoardError::GoalAlreadySet(_) => {
            BoardError::DuplicateMarker { marker, coord }
        }
        other => other,
    }
}
