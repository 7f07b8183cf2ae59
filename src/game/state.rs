use super::{Board, GridShape, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// Result of a single half-move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Continue,
    Win(Player),
    Draw,
}

impl From<Option<GameOutcome>> for Verdict {
    fn from(outcome: Option<GameOutcome>) -> Self {
        match outcome {
            None => Verdict::Continue,
            Some(GameOutcome::Winner(player)) => Verdict::Win(player),
            Some(GameOutcome::Draw) => Verdict::Draw,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column index {column} is out of range for a {cols}-column board")]
    InvalidColumn { column: usize, cols: usize },

    #[error("column {} is full", .0 + 1)]
    ColumnFull(usize),

    #[error("please choose a column between 1 and {cols} (got {choice})")]
    OutOfRange { choice: usize, cols: usize },

    #[error("'{0}' is not a column number")]
    NotANumber(String),

    #[error("the game is over")]
    GameOver,
}

/// Turn a 1-based column typed by the human into a 0-based column index.
pub fn parse_column(input: &str, cols: usize) -> Result<usize, MoveError> {
    let input = input.trim();
    let choice: usize = input
        .parse()
        .map_err(|_| MoveError::NotANumber(input.to_string()))?;
    if choice == 0 || choice > cols {
        return Err(MoveError::OutOfRange { choice, cols });
    }
    Ok(choice - 1)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial(shape: GridShape, first: Player) -> Self {
        GameState {
            board: Board::new(shape),
            current_player: first,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        self.board
            .playable_columns()
            .legal()
            .map(|(col, _)| col)
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Drop the current player's piece in `column` and report the verdict.
    /// The turn passes to the other player unless the game ended.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<Verdict, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board.drop_piece(column, self.current_player.to_cell())?;

        // A win can only have been completed by the player who just moved.
        // Checked before draw so a board-filling win is not reported as a draw.
        if self.board.is_win() {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_draw() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_player = self.current_player.other();
        }

        Ok(self.outcome.into())
    }
}
