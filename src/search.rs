//! An agent choosing moves with depth-limited minimax search

use log::debug;

use crate::{evaluation::evaluate, position::Player, position::Position, AI_DEPTH};

/// Lower bound of every search window
pub const NEG_INFINITY: i32 = i32::MIN;
/// Upper bound of every search window
pub const INFINITY: i32 = i32::MAX;

/// The outcome of a search: the best column found and its minimax score
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    /// `None` when the searched position had no legal move, or at the depth limit
    pub column: Option<usize>,
    pub score: i32,
}

/// An agent searching positions on behalf of one player
///
/// # Notes
/// The maximizing side is always `player`, and every leaf is scored with
/// [`evaluate`] from `player`'s point of view, whichever side is to move
/// there. The recursion stops only at the depth limit or when no column is
/// playable; finished games are not detected inside the tree, the +/-1000
/// window terms of the evaluation stand in for them.
///
/// Columns are tried in ascending order and only a strictly better score
/// replaces the current best, so ties go to the lowest column.
#[derive(Clone, Debug)]
pub struct Searcher {
    player: Player,
    pruning: bool,

    /// The number of nodes searched by this `Searcher` so far (for diagnostics only)
    pub node_count: usize,
}

impl Searcher {
    /// Creates a new `Searcher` for `player` with alpha-beta pruning enabled
    pub fn new(player: Player) -> Self {
        Self {
            player,
            pruning: true,
            node_count: 0,
        }
    }

    /// Disables alpha-beta cutoffs, searching the full minimax tree
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    /// Searches `position` to [`AI_DEPTH`] with the widest window
    pub fn best_move<const ROWS: usize, const COLUMNS: usize>(
        &mut self,
        position: &Position<ROWS, COLUMNS>,
    ) -> SearchResult {
        self.best_move_at_depth(position, AI_DEPTH)
    }

    /// Searches `position` to `depth` plies with the widest window
    pub fn best_move_at_depth<const ROWS: usize, const COLUMNS: usize>(
        &mut self,
        position: &Position<ROWS, COLUMNS>,
        depth: usize,
    ) -> SearchResult {
        let nodes_before = self.node_count;
        let result = self.minimax(position, depth, NEG_INFINITY, INFINITY, true);
        debug!(
            "{} searched {} nodes at depth {}: column {:?}, score {}",
            self.player,
            self.node_count - nodes_before,
            depth,
            result.column,
            result.score
        );
        result
    }

    /// Performs minimax search with alpha-beta pruning
    ///
    /// `maximizing` is true when `player` is the side to move in `position`.
    pub fn minimax<const ROWS: usize, const COLUMNS: usize>(
        &mut self,
        position: &Position<ROWS, COLUMNS>,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> SearchResult {
        self.node_count += 1;

        let mut open_cells = position.open_cells().peekable();
        if depth == 0 || open_cells.peek().is_none() {
            return SearchResult {
                column: None,
                score: evaluate(position, self.player),
            };
        }

        let mover = if maximizing {
            self.player
        } else {
            self.player.opponent()
        };
        let mut best = SearchResult {
            column: None,
            score: if maximizing { NEG_INFINITY } else { INFINITY },
        };

        for (column, row) in open_cells {
            let next = position.with_drop((column, row), mover);
            let score = self
                .minimax(&next, depth - 1, alpha, beta, !maximizing)
                .score;

            if maximizing {
                if score > best.score {
                    best = SearchResult {
                        column: Some(column),
                        score,
                    };
                }
                alpha = alpha.max(score);
            } else {
                if score < best.score {
                    best = SearchResult {
                        column: Some(column),
                        score,
                    };
                }
                beta = beta.min(score);
            }

            // the other side will never allow this branch
            if self.pruning && beta <= alpha {
                break;
            }
        }

        best
    }
}
