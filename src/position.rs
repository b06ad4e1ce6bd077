use anyhow::{anyhow, Result};

use std::fmt;

use crate::error::GameError;

/// One of the two sides of the game
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Player {
    Red,
    Yellow,
}

impl Player {
    pub fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Yellow,
            Player::Yellow => Player::Red,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Red => write!(f, "Red"),
            Player::Yellow => write!(f, "Yellow"),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The owner of the piece in this cell, if any
    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }

    fn symbol(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Red => 'R',
            Cell::Yellow => 'Y',
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }
}

/// A game board together with the fill pointer of every column
///
/// # Notes
/// Row 0 is the top of the board and pieces fall towards row `ROWS - 1`.
/// The fill pointer of a column is the row the next piece dropped there will
/// land on, or `None` once the column is full. Cells and pointers are only
/// ever changed together.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub struct Position<const ROWS: usize, const COLUMNS: usize> {
    cells: [[Cell; COLUMNS]; ROWS],
    fill_pointers: [Option<usize>; COLUMNS],
}

impl<const ROWS: usize, const COLUMNS: usize> Position<ROWS, COLUMNS> {
    /// Creates an empty board with every pointer on the bottom row
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; COLUMNS]; ROWS],
            fill_pointers: [ROWS.checked_sub(1); COLUMNS],
        }
    }

    /// Builds a position from a string of 1-indexed column digits,
    /// Yellow playing first and the players alternating
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self> {
        let mut position = Self::new();
        let mut player = Player::Yellow;

        for column_char in moves.as_ref().chars() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column) if column >= 1 => {
                    position.play(column - 1, player)?;
                    player = player.opponent();
                }
                _ => return Err(anyhow!("could not parse '{}' as a valid move", column_char)),
            }
        }
        Ok(position)
    }

    /// Returns the cell at `(row, column)`, or `None` outside the board
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|cells| cells.get(column)).copied()
    }

    /// Returns the fill pointer of `column`, `None` for a full or missing column
    pub fn fill_pointer(&self, column: usize) -> Option<usize> {
        self.fill_pointers.get(column).copied().flatten()
    }

    pub fn playable(&self, column: usize) -> bool {
        self.fill_pointer(column).is_some()
    }

    /// All playable columns in ascending order
    pub fn valid_moves(&self) -> Vec<usize> {
        self.open_cells().map(|(column, _)| column).collect()
    }

    /// Every playable column in ascending order, with the row its next piece lands on
    pub fn open_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.fill_pointers
            .iter()
            .enumerate()
            .filter_map(|(column, pointer)| pointer.map(|row| (column, row)))
    }

    /// Whether every column is full
    pub fn is_full(&self) -> bool {
        self.fill_pointers.iter().all(Option::is_none)
    }

    /// Drops a piece of `player` into `column` in place, returning the row it landed on
    pub fn play(&mut self, column: usize, player: Player) -> Result<usize, GameError> {
        if column >= COLUMNS {
            return Err(GameError::ColumnOutOfRange {
                column,
                columns: COLUMNS,
            });
        }
        let row = self.fill_pointers[column].ok_or(GameError::ColumnFull { column })?;
        self.drop_at(column, row, player);
        Ok(row)
    }

    /// Returns a copy of this position with a piece of `player` on the open
    /// `(column, row)` pair reported by [`open_cells`](Position::open_cells)
    pub fn with_drop(&self, (column, row): (usize, usize), player: Player) -> Self {
        debug_assert_eq!(self.fill_pointers[column], Some(row));
        let mut next = *self;
        next.drop_at(column, row, player);
        next
    }

    fn drop_at(&mut self, column: usize, row: usize, player: Player) {
        self.cells[row][column] = player.into();
        self.fill_pointers[column] = row.checked_sub(1);
    }

    /// Returns a copy of this position with a piece of `player` dropped into `column`,
    /// leaving `self` untouched
    pub fn apply_move(&self, column: usize, player: Player) -> Result<Self, GameError> {
        let mut next = *self;
        next.play(column, player)?;
        Ok(next)
    }

    /// Returns this position with the colour of every piece exchanged
    pub fn swap_players(&self) -> Self {
        let mut swapped = *self;
        for cell in swapped.cells.iter_mut().flat_map(|row| row.iter_mut()) {
            *cell = match cell.player() {
                Some(player) => player.opponent().into(),
                None => Cell::Empty,
            };
        }
        swapped
    }

    pub(crate) fn grid(&self) -> &[[Cell; COLUMNS]; ROWS] {
        &self.cells
    }
}

impl<const ROWS: usize, const COLUMNS: usize> Default for Position<ROWS, COLUMNS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ROWS: usize, const COLUMNS: usize> fmt::Display for Position<ROWS, COLUMNS> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.iter() {
            let line: String = row.iter().map(Cell::symbol).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Small = Position<4, 5>;

    #[test]
    fn new_board_pointers_at_bottom() {
        let board = Small::new();
        assert_eq!(board.valid_moves(), vec![0, 1, 2, 3, 4]);
        assert!((0..5).all(|c| board.fill_pointer(c) == Some(3)));
    }

    #[test]
    fn column_fills_up() {
        let mut board = Small::new();
        for expected_row in (0..4).rev() {
            assert_eq!(board.play(2, Player::Red), Ok(expected_row));
        }
        assert_eq!(board.fill_pointer(2), None);
        assert_eq!(board.valid_moves(), vec![0, 1, 3, 4]);
        assert_eq!(
            board.play(2, Player::Yellow),
            Err(GameError::ColumnFull { column: 2 })
        );
    }

    #[test]
    fn out_of_range_rejected_without_change() {
        let board = Small::new();
        assert_eq!(
            board.apply_move(5, Player::Red),
            Err(GameError::ColumnOutOfRange {
                column: 5,
                columns: 5
            })
        );
        assert_eq!(board, Small::new());
    }

    #[test]
    fn open_cells_follow_pointers() -> Result<()> {
        let board = Small::from_moves("1111223")?;
        assert_eq!(
            board.open_cells().collect::<Vec<_>>(),
            vec![(1, 1), (2, 2), (3, 3), (4, 3)]
        );
        for (column, row) in board.open_cells() {
            assert_eq!(
                board.with_drop((column, row), Player::Red),
                board.apply_move(column, Player::Red)?
            );
        }
        Ok(())
    }

    #[test]
    fn display_shows_pieces() -> Result<()> {
        let board = Small::from_moves("12")?;
        assert_eq!(board.to_string(), ".....\n.....\n.....\nYR...\n");
        Ok(())
    }

    #[test]
    fn bad_move_string() {
        assert!(Small::from_moves("1x").is_err());
        assert!(Small::from_moves("0").is_err());
        assert!(Small::from_moves("11111").is_err());
    }
}
