//! Heuristic scoring of board positions

use crate::position::{Cell, Player, Position};

/// Bonus for each piece in the middle column
pub const CENTER_WEIGHT: i32 = 6;
/// A completed line of four
pub const FOUR_SCORE: i32 = 1000;
/// Three pieces and an empty cell in a window
pub const THREE_SCORE: i32 = 50;
/// Two pieces and two empty cells in a window
pub const TWO_SCORE: i32 = 10;
/// Penalty for an opponent's three with an empty cell
pub const OPPONENT_THREE_PENALTY: i32 = 80;
/// Penalty for an opponent's line of four
pub const OPPONENT_FOUR_PENALTY: i32 = 1000;

/// Scores a window of four cells for `player`
///
/// At most one of the rewards and one of the penalties apply to a window.
pub fn evaluate_window(window: &[Cell; 4], player: Player) -> i32 {
    let own = Cell::from(player);
    let opponent = Cell::from(player.opponent());
    let count = |target: Cell| window.iter().filter(|&&cell| cell == target).count();

    let (mine, theirs, empty) = (count(own), count(opponent), count(Cell::Empty));
    let mut score = 0;

    if mine == 4 {
        score += FOUR_SCORE;
    } else if mine == 3 && empty == 1 {
        score += THREE_SCORE;
    } else if mine == 2 && empty == 2 {
        score += TWO_SCORE;
    }

    if theirs == 3 && empty == 1 {
        score -= OPPONENT_THREE_PENALTY;
    }
    if theirs == 4 {
        score -= OPPONENT_FOUR_PENALTY;
    }

    score
}

/// Evaluates a position from the point of view of `player`, higher is better
///
/// The score is the middle column bonus plus the sum of [`evaluate_window`]
/// over every horizontal, vertical and diagonal window of four cells.
pub fn evaluate<const ROWS: usize, const COLUMNS: usize>(
    position: &Position<ROWS, COLUMNS>,
    player: Player,
) -> i32 {
    let grid = position.grid();
    let own = Cell::from(player);

    // middle column, just right of centre for an even number of columns
    let center = COLUMNS / 2;
    let center_count = grid.iter().filter(|row| row[center] == own).count() as i32;
    let mut score = center_count * CENTER_WEIGHT;

    // horizontal
    for r in 0..ROWS {
        for c in 0..COLUMNS.saturating_sub(3) {
            let window = [grid[r][c], grid[r][c + 1], grid[r][c + 2], grid[r][c + 3]];
            score += evaluate_window(&window, player);
        }
    }

    // vertical
    for c in 0..COLUMNS {
        for r in 0..ROWS.saturating_sub(3) {
            let window = [grid[r][c], grid[r + 1][c], grid[r + 2][c], grid[r + 3][c]];
            score += evaluate_window(&window, player);
        }
    }

    // diagonal \
    for r in 0..ROWS.saturating_sub(3) {
        for c in 0..COLUMNS.saturating_sub(3) {
            let window = [
                grid[r][c],
                grid[r + 1][c + 1],
                grid[r + 2][c + 2],
                grid[r + 3][c + 3],
            ];
            score += evaluate_window(&window, player);
        }
    }

    // diagonal /
    for r in 3..ROWS {
        for c in 0..COLUMNS.saturating_sub(3) {
            let window = [
                grid[r][c],
                grid[r - 1][c + 1],
                grid[r - 2][c + 2],
                grid[r - 3][c + 3],
            ];
            score += evaluate_window(&window, player);
        }
    }

    score
}
