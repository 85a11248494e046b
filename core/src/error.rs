use thiserror::Error;

use crate::{MAX_MINES, MIN_MINES};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid number of mines, expected between {} and {}", MIN_MINES, MAX_MINES)]
    InvalidConfiguration,
    #[error("Game is over, no more moves allowed")]
    GameAlreadyOver,
    #[error("Invalid move, out of bounds")]
    OutOfBounds,
    #[error("Cell already revealed")]
    CellAlreadyRevealed,
}

pub type Result<T> = core::result::Result<T, GameError>;
