use thiserror::Error;

use crate::position::Player;

/// Reasons a move is refused. None of these change the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Invalid move, column {column} out of range for a board of {columns} columns")]
    ColumnOutOfRange { column: usize, columns: usize },

    #[error("Invalid move, column {column} full")]
    ColumnFull { column: usize },

    #[error("Invalid move, the game is already over")]
    GameOver,

    #[error("Invalid move, it is {expected}'s turn")]
    NotYourTurn { expected: Player },
}
