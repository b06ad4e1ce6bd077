//! A single human versus computer game

use log::{info, warn};

use crate::{
    error::GameError,
    outcome::{check_result, GameStatus},
    position::{Cell, Player},
    search::Searcher,
    Board, AI_DEPTH,
};

/// The side controlled by the person at the keyboard, who moves first
pub const HUMAN: Player = Player::Yellow;
/// The side controlled by the search
pub const AUTOMATED: Player = Player::Red;

/// The state of one game, owned by whoever drives the user interface
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    status: GameStatus,
    depth: usize,
}

impl GameSession {
    /// Starts a game on an empty board with the human to move
    pub fn new() -> Self {
        Self::with_depth(AI_DEPTH)
    }

    /// Starts a game where the automated player searches `depth` plies,
    /// at least one
    pub fn with_depth(depth: usize) -> Self {
        Self {
            board: Board::new(),
            current_player: HUMAN,
            status: GameStatus::InProgress,
            depth: depth.max(1),
        }
    }

    /// Continues a game from `board` with `current_player` to move
    #[cfg(test)]
    pub(crate) fn resume(board: Board, current_player: Player) -> Self {
        Self {
            board,
            current_player,
            status: check_result(&board),
            depth: AI_DEPTH,
        }
    }

    pub fn position(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the content of a cell, `None` outside the board
    pub fn cell_state(&self, row: usize, column: usize) -> Option<Cell> {
        self.board.cell(row, column)
    }

    /// Plays the human's piece into `column`
    ///
    /// On success the turn passes to the automated player unless the move
    /// finished the game. A refused move leaves the session unchanged.
    pub fn on_human_move(&mut self, column: usize) -> Result<GameStatus, GameError> {
        self.apply(column, HUMAN)
    }

    /// Asks the search for the automated player's move without playing it
    ///
    /// Returns `None` if the game is over or no column is playable.
    pub fn on_automated_move_requested(&self) -> Option<usize> {
        if self.status.is_over() {
            return None;
        }
        let result = Searcher::new(AUTOMATED).best_move_at_depth(&self.board, self.depth);
        result.column.filter(|&column| self.board.playable(column))
    }

    /// Searches for and plays the automated player's move
    ///
    /// Returns the column played, or `None` when there was no legal move, in
    /// which case the turn is handed back to the human. With a depth of at
    /// least one the search only finds no column on a full board, which the
    /// status check above already refuses as a draw.
    pub fn play_automated_move(&mut self) -> Result<Option<usize>, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if self.current_player != AUTOMATED {
            return Err(GameError::NotYourTurn {
                expected: self.current_player,
            });
        }

        match self.on_automated_move_requested() {
            Some(column) => {
                self.apply(column, AUTOMATED)?;
                Ok(Some(column))
            }
            None => {
                warn!("{} has no legal move, skipping its turn", AUTOMATED);
                self.current_player = HUMAN;
                Ok(None)
            }
        }
    }

    /// Clears the board for a new game with the human to move
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = HUMAN;
        self.status = GameStatus::InProgress;
    }

    fn apply(&mut self, column: usize, player: Player) -> Result<GameStatus, GameError> {
        if self.status.is_over() {
            return Err(GameError::GameOver);
        }
        if player != self.current_player {
            return Err(GameError::NotYourTurn {
                expected: self.current_player,
            });
        }

        let row = self.board.play(column, player)?;
        info!("{} played column {} (row {})", player, column, row);

        self.status = check_result(&self.board);
        match self.status {
            GameStatus::InProgress => self.current_player = player.opponent(),
            GameStatus::Win { player, origin } => {
                info!("{} wins with a line starting at {:?}", player, origin)
            }
            GameStatus::Draw => info!("game drawn"),
        }
        Ok(self.status)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn human_moves_first() {
        let mut session = GameSession::new();
        assert_eq!(
            session.play_automated_move(),
            Err(GameError::NotYourTurn { expected: HUMAN })
        );
        assert_eq!(session.on_human_move(0), Ok(GameStatus::InProgress));
        assert_eq!(session.current_player(), AUTOMATED);
        assert_eq!(
            session.on_human_move(1),
            Err(GameError::NotYourTurn {
                expected: AUTOMATED
            })
        );
    }

    #[test]
    fn zero_depth_still_answers() {
        let mut session = GameSession::with_depth(0);
        session.on_human_move(0).unwrap();
        assert_eq!(session.play_automated_move(), Ok(Some(3)));
        assert_eq!(session.current_player(), HUMAN);
    }

    #[test]
    fn no_automated_move_on_drawn_board() {
        let board = Board::from_moves("455714637617614767242476316455122212535333").unwrap();
        let mut session = GameSession::resume(board, AUTOMATED);
        assert_eq!(session.status(), GameStatus::Draw);
        assert_eq!(session.on_automated_move_requested(), None);
        assert_eq!(session.play_automated_move(), Err(GameError::GameOver));
        assert_eq!(session.position(), &board);
    }

    #[test]
    fn refused_move_keeps_turn() {
        let mut session = GameSession::new();
        assert_eq!(
            session.on_human_move(7),
            Err(GameError::ColumnOutOfRange {
                column: 7,
                columns: 7
            })
        );
        assert_eq!(session.current_player(), HUMAN);
        assert_eq!(session.position(), &Board::new());
    }
}
