//! Detection of finished games

use crate::position::{Player, Position};

/// Forward steps from an origin cell, as `(row delta, column delta)`:
/// horizontal, vertical, diagonal down-right and diagonal up-right
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// The state of a game as seen by the players
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum GameStatus {
    InProgress,
    /// `origin` is the `(row, column)` cell the winning line was found from
    Win {
        player: Player,
        origin: (usize, usize),
    },
    Draw,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Scans the whole board for a finished game
///
/// Every non-empty cell is tried as the start of a line of four in each of
/// the forward directions, rows top to bottom and columns left to right. The
/// first line found decides the winner. A draw is only reported when no line
/// exists and every column is full.
pub fn check_result<const ROWS: usize, const COLUMNS: usize>(
    position: &Position<ROWS, COLUMNS>,
) -> GameStatus {
    let grid = position.grid();

    for (row, cells) in grid.iter().enumerate() {
        for (column, cell) in cells.iter().enumerate() {
            let player = match cell.player() {
                Some(player) => player,
                None => continue,
            };

            for &(dr, dc) in DIRECTIONS.iter() {
                let aligned = (1..4).all(|step| {
                    let r = row as isize + dr * step;
                    let c = column as isize + dc * step;
                    r >= 0
                        && c >= 0
                        && position.cell(r as usize, c as usize) == Some(*cell)
                });
                if aligned {
                    return GameStatus::Win {
                        player,
                        origin: (row, column),
                    };
                }
            }
        }
    }

    if position.is_full() {
        GameStatus::Draw
    } else {
        GameStatus::InProgress
    }
}
