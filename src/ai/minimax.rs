use crate::game::{Board, Cell, GameState, Player};

use super::agent::Agent;

/// Default search horizon in plies below the AI's candidate move.
pub const DEFAULT_DEPTH: usize = 4;

/// Position value from the AI's point of view: -1 loss, 0 draw or unknown, +1 win.
pub type Score = i32;

pub const AI_WIN: Score = 1;
pub const NEUTRAL: Score = 0;
pub const AI_LOSS: Score = -1;

/// Column picked at the root of the search, with its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub column: usize,
    pub score: Score,
}

/// Plain depth-limited minimax. `maximizing` is true when the AI is to move.
///
/// A win already on the board belongs to the side that just moved, so it is
/// scored as a loss for the side to move. Draws and an exhausted horizon are
/// both neutral. Children are explored left to right; full columns are skipped.
/// The board is handed back exactly as it was received.
pub fn minimax(board: &mut Board, maximizing: bool, depth: usize) -> Score {
    if board.is_win() {
        return if maximizing { AI_LOSS } else { AI_WIN };
    }
    if board.is_draw() || depth == 0 {
        return NEUTRAL;
    }

    let mark = if maximizing { Cell::Ai } else { Cell::Human };
    let mut best: Option<Score> = None;

    for (col, row) in board.playable_columns().legal() {
        let score = {
            let mut child = board.place(row, col, mark);
            minimax(&mut child, !maximizing, depth - 1)
        };
        best = Some(match best {
            None => score,
            Some(b) if maximizing => b.max(score),
            Some(b) => b.min(score),
        });
    }

    best.unwrap_or(NEUTRAL)
}

/// Try every playable column for the AI and keep the first one with the
/// highest score. `None` if no column is playable.
pub fn choose_move(board: &mut Board, depth: usize) -> Option<SearchResult> {
    let mut best: Option<SearchResult> = None;

    for (col, row) in board.playable_columns().legal() {
        let score = {
            let mut child = board.place(row, col, Cell::Ai);
            // The human replies next.
            minimax(&mut child, false, depth)
        };
        if best.is_none_or(|b| score > b.score) {
            best = Some(SearchResult { column: col, score });
        }
    }

    best
}

/// Computer opponent driven by [`choose_move`]. It only ever plays the AI
/// side; asking it to move for the human is a bug in the caller.
pub struct MinimaxAgent {
    depth: usize,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        MinimaxAgent { depth }
    }

    fn best_move(&self, state: &GameState) -> SearchResult {
        assert_eq!(
            state.current_player(),
            Player::Ai,
            "minimax only searches for the AI side"
        );
        // Search on a private copy; the game's own board is never touched.
        let mut board = *state.board();
        let Some(result) = choose_move(&mut board, self.depth) else {
            panic!("No legal actions available");
        };
        debug_assert_eq!(&board, state.board());
        result
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        let result = self.best_move(state);
        log::debug!(
            "minimax depth {} chose column {} (score {})",
            self.depth,
            result.column,
            result.score
        );
        result.column
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
