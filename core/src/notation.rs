/// Compact text notation for boards, in the spirit of FEN.
///
/// Eight rows separated by `/`, top row first. `A`/`X` is a piece of A,
/// `B`/`O` a piece of B, `.` one empty cell and a digit 1-8 a run of empty
/// cells. An empty board is `8/8/8/8/8/8/8/8`.
use crate::board::Board;
use crate::error::NotationError;
use crate::types::{Cell, Coordinate, BOARD_SIZE};
use std::str::FromStr;

pub mod positions {
    /// Empty board.
    pub const EMPTY: &str = "8/8/8/8/8/8/8/8";

    /// Opening cross in the centre.
    pub const CROSS: &str = "8/8/8/3BA3/3AB3/8/8/8";

    /// A hole at (4, 4) surrounded by A on all four sides.
    pub const SURROUNDED_HOLE: &str = "8/8/8/4A3/3A1A2/4A3/8/8";
}

impl Board {
    /// Parses a board from notation.
    pub fn from_notation(text: &str) -> Result<Self, NotationError> {
        let text = text.trim();
        let rows: Vec<&str> = text.split('/').collect();

        if rows.len() != BOARD_SIZE as usize {
            return Err(NotationError::InvalidFormat(format!(
                "Expected 8 rows, got {}",
                rows.len()
            )));
        }

        let mut board = Board::empty();

        for (row_idx, row_str) in rows.iter().enumerate() {
            let mut col = 0usize;

            for ch in row_str.chars() {
                let run = match ch {
                    '1'..='8' => ch as usize - '0' as usize,
                    _ => 1,
                };
                if col + run > BOARD_SIZE as usize {
                    return Err(NotationError::RowLength {
                        row: row_idx,
                        len: col + run,
                    });
                }

                let cell = match ch {
                    '1'..='8' | '.' => Cell::Empty,
                    'A' | 'a' | 'X' | 'x' => Cell::A,
                    'B' | 'b' | 'O' | 'o' => Cell::B,
                    _ => return Err(NotationError::InvalidCell(ch)),
                };

                for _ in 0..run {
                    let c = Coordinate::new(row_idx as u8, col as u8)
                        .ok_or_else(|| NotationError::InvalidFormat(row_str.to_string()))?;
                    board.set(c, cell);
                    col += 1;
                }
            }

            if col != BOARD_SIZE as usize {
                return Err(NotationError::RowLength {
                    row: row_idx,
                    len: col,
                });
            }
        }

        Ok(board)
    }

    /// Serializes the board, collapsing empty runs into digits.
    pub fn to_notation(&self) -> String {
        let mut out = String::with_capacity(72);

        for row in 0..BOARD_SIZE {
            if row > 0 {
                out.push('/');
            }
            let mut empty_run = 0;
            for c in Coordinate::all().filter(|c| c.row() == row) {
                match self.get(c) {
                    Cell::Empty => empty_run += 1,
                    cell => {
                        if empty_run > 0 {
                            out.push_str(&empty_run.to_string());
                            empty_run = 0;
                        }
                        out.push(cell.to_char());
                    }
                }
            }
            if empty_run > 0 {
                out.push_str(&empty_run.to_string());
            }
        }

        out
    }
}

impl FromStr for Board {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Board::from_notation(s)
    }
}
