//! A drop-piece connection game ('Connect 4') with a minimax opponent
//!
//! The automated side chooses its moves with a depth-limited minimax search
//! using alpha-beta pruning over a windowed heuristic evaluation of the board.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{session::GameSession, outcome::GameStatus};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut session = GameSession::new();
//! let status = session.on_human_move(3)?;
//! assert_eq!(status, GameStatus::InProgress);
//!
//! let reply = session.play_automated_move()?;
//! assert!(reply.is_some());
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod position;

pub mod outcome;

pub mod evaluation;

pub mod search;

pub mod session;


pub use error::GameError;
pub use position::{Cell, Player, Position};

/// The number of rows of the game board
pub const ROWS: usize = 6;

/// The number of columns of the game board
pub const COLUMNS: usize = 7;

/// The fixed search depth of the automated player, in plies
pub const AI_DEPTH: usize = 4;

/// A position with the configured board dimensions
pub type Board = Position<ROWS, COLUMNS>;

// a line of four has to fit on the board in every direction
const_assert!(ROWS >= 4 && COLUMNS >= 4);
const_assert!(AI_DEPTH >= 1);
