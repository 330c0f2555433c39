use std::fmt;

/// Width and height of the grid.
pub const BOARD_SIZE: u8 = 8;

/// Number of cells on the grid.
pub const NUM_CELLS: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// One of the two players.
/// `A` is the opponent seat ("X"), `B` is the seat the bots play by default ("O").
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Player {
    A,
    B,
}

impl Player {
    /// Returns the opposite player.
    pub const fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }

    /// Returns the cell value this player places.
    pub const fn cell(self) -> Cell {
        match self {
            Player::A => Cell::A,
            Player::B => Cell::B,
        }
    }

    pub const fn to_char(self) -> char {
        match self {
            Player::A => 'A',
            Player::B => 'B',
        }
    }

    /// Index into per-player arrays.
    pub const fn index(self) -> usize {
        match self {
            Player::A => 0,
            Player::B => 1,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// State of a single grid cell.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    A,
    B,
}

impl Cell {
    /// Returns the player occupying this cell, if any.
    pub const fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::A => Some(Player::A),
            Cell::B => Some(Player::B),
        }
    }

    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::A => 'A',
            Cell::B => 'B',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.cell()
    }
}

/// A cell position on the grid.
/// The fields are private so that every coordinate is in range by construction.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Coordinate {
    row: u8,
    col: u8,
}

/// Orthogonal offsets in the order up, down, left, right.
const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

impl Coordinate {
    /// Creates a coordinate from row and column (0-7).
    /// Returns None if either is out of range.
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Coordinate { row, col })
        } else {
            None
        }
    }

    /// Creates a coordinate, reducing row and column modulo the board size.
    pub const fn wrapping(row: u8, col: u8) -> Self {
        Coordinate {
            row: row % BOARD_SIZE,
            col: col % BOARD_SIZE,
        }
    }

    /// Creates a coordinate from a row-major index (0-63).
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < NUM_CELLS {
            Some(Coordinate {
                row: (index / BOARD_SIZE as usize) as u8,
                col: (index % BOARD_SIZE as usize) as u8,
            })
        } else {
            None
        }
    }

    pub const fn row(self) -> u8 {
        self.row
    }

    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major index (0-63).
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Returns the coordinate shifted by the given deltas, if still on the grid.
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if row >= 0 && row < BOARD_SIZE as i8 && col >= 0 && col < BOARD_SIZE as i8 {
            Some(Coordinate {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Iterates over the in-bounds up/down/left/right neighbours.
    pub fn neighbors(self) -> impl Iterator<Item = Coordinate> {
        ORTHOGONAL
            .into_iter()
            .filter_map(move |(dr, dc)| self.offset(dr, dc))
    }

    /// Iterates over every coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        (0..NUM_CELLS).filter_map(Coordinate::from_index)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A placement: where a piece goes and who places it.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Move {
    pub to: Coordinate,
    pub player: Player,
}

impl Move {
    pub const fn new(to: Coordinate, player: Player) -> Self {
        Self { to, player }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.player, self.to)
    }
}
