use alloc::string::String;
use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Unknown move {token:?} at position {index}")]
    InvalidMoveToken { index: usize, token: String },
    #[error("No moves remaining")]
    OutOfMoves,
    #[error("Nothing to undo")]
    NothingToUndo,
    #[error("Round already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Round is still in progress")]
    RoundInProgress,
    #[error("Board must be a non-empty rectangle")]
    InvalidBoardShape,
    #[error("Unknown cell {glyph:?} at row {row}, column {col}")]
    InvalidCell { row: Coord, col: Coord, glyph: char },
    #[error("Remaining moves exceed the move budget")]
    MovesExceedBudget,
    #[error("Unknown level {0:?}")]
    UnknownLevel(String),
}

pub type Result<T> = core::result::Result<T, GameError>;
