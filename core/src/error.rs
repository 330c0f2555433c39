use crate::types::Coordinate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The board has no empty cell, so no placement is possible.
    #[error("No legal move: the board is full")]
    NoLegalMove,

    #[error("Cell {0} is already occupied")]
    Occupied(Coordinate),

    #[error("Game is over")]
    GameOver,
}

/// Board notation parsing errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    #[error("Invalid notation format: {0}")]
    InvalidFormat(String),

    #[error("Invalid cell character: '{0}'")]
    InvalidCell(char),

    #[error("Row {row} has {len} cells, expected 8")]
    RowLength { row: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, GameError>;
