/// Grid representation and the two scoring functions used by the strategies.
/// Boards are plain `Copy` values, so exploring a hypothetical future is a
/// 64-byte copy and never touches the caller's snapshot.
use crate::capture::{self, CaptureRule};
use crate::types::*;
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Board {
    /// 64 cells, indexed by Coordinate::index()
    cells: [Cell; NUM_CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    /// Creates an empty board.
    pub const fn empty() -> Self {
        Self {
            cells: [Cell::Empty; NUM_CELLS],
        }
    }

    /// Builds a board from rows, top row first.
    pub const fn from_rows(rows: [[Cell; 8]; 8]) -> Self {
        let mut cells = [Cell::Empty; NUM_CELLS];
        let mut i = 0;
        while i < NUM_CELLS {
            cells[i] = rows[i / 8][i % 8];
            i += 1;
        }
        Self { cells }
    }

    pub fn get(&self, c: Coordinate) -> Cell {
        self.cells[c.index()]
    }

    /// Sets a cell directly, without running the capture rule.
    /// Used for position setup; moves go through `apply_move`.
    pub fn set(&mut self, c: Coordinate, cell: Cell) {
        self.cells[c.index()] = cell;
    }

    pub fn is_empty(&self, c: Coordinate) -> bool {
        self.get(c).is_empty()
    }

    /// Returns true if no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Iterates over empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        Coordinate::all().filter(move |&c| self.is_empty(c))
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    /// Number of cells held by `player`.
    pub fn count(&self, player: Player) -> i32 {
        let target = player.cell();
        self.cells.iter().filter(|&&cell| cell == target).count() as i32
    }

    /// count(B) - count(A).
    pub fn global_score(&self) -> i32 {
        self.score_for(Player::B)
    }

    /// Material difference from `player`'s point of view.
    pub fn score_for(&self, player: Player) -> i32 {
        let score_b = self.cells.iter().fold(0i32, |acc, cell| match cell {
            Cell::B => acc + 1,
            Cell::A => acc - 1,
            Cell::Empty => acc,
        });
        match player {
            Player::B => score_b,
            Player::A => -score_b,
        }
    }

    /// Number of up/down/left/right neighbours of `c` held by `opponent` (0-4).
    /// Diagonals are ignored and no capture is simulated.
    pub fn local_adjacency(&self, c: Coordinate, opponent: Player) -> i32 {
        let target = opponent.cell();
        c.neighbors().filter(|&n| self.get(n) == target).count() as i32
    }

    /// Applies a move with the standard capture rule, returning a new board.
    pub fn apply_move(&self, mv: Move) -> Self {
        capture::apply_move(self, mv, CaptureRule::Orthogonal)
    }

    /// Applies a move with an explicit capture rule, returning a new board.
    pub fn apply_move_with(&self, mv: Move, rule: CaptureRule) -> Self {
        capture::apply_move(self, mv, rule)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if col > 0 {
                    write!(f, " ")?;
                }
                let c = Coordinate::new(row, col).ok_or(fmt::Error)?;
                write!(f, "{}", self.get(c).to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: u8, col: u8) -> Coordinate {
        Coordinate::new(row, col).unwrap()
    }

    #[test]
    fn test_empty_board() {
        let board = Board::empty();
        assert_eq!(board.empty_count(), 64);
        assert_eq!(board.global_score(), 0);
        assert!(!board.is_full());
        assert_eq!(board.empty_cells().next(), Some(at(0, 0)));
    }

    #[test]
    fn test_scores() {
        let mut board = Board::empty();
        board.set(at(0, 0), Cell::B);
        board.set(at(0, 1), Cell::B);
        board.set(at(5, 5), Cell::A);

        assert_eq!(board.global_score(), 1);
        assert_eq!(board.score_for(Player::B), 1);
        assert_eq!(board.score_for(Player::A), -1);

        // Calling again on the unmodified board gives the same answer.
        assert_eq!(board.global_score(), 1);
    }

    #[test]
    fn test_local_adjacency() {
        let mut board = Board::empty();
        for c in at(4, 4).neighbors() {
            board.set(c, Cell::A);
        }
        board.set(at(3, 3), Cell::A); // diagonal, not counted

        assert_eq!(board.local_adjacency(at(4, 4), Player::A), 4);
        assert_eq!(board.local_adjacency(at(4, 4), Player::B), 0);
        assert_eq!(board.local_adjacency(at(3, 4), Player::A), 1);
        assert_eq!(board.local_adjacency(at(3, 4), Player::A), 1);

        board.set(at(0, 1), Cell::A);
        board.set(at(1, 0), Cell::A);
        assert_eq!(board.local_adjacency(at(0, 0), Player::A), 2);
    }

    #[test]
    fn test_full_board() {
        let board = Board::from_rows([[Cell::A; 8]; 8]);
        assert!(board.is_full());
        assert_eq!(board.empty_cells().count(), 0);
        assert_eq!(board.global_score(), -64);
    }

    #[test]
    fn test_display() {
        let mut board = Board::empty();
        board.set(at(0, 0), Cell::A);
        board.set(at(0, 7), Cell::B);
        let text = board.to_string();
        assert_eq!(text.lines().next(), Some("A . . . . . . B"));
        assert_eq!(text.lines().count(), 8);
    }
}
