//! Core game logic: the gravity board with win/draw detection, the two
//! sides, and the turn-by-turn state machine the terminal front ends drive.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, GridShape, Placement, PlayableColumns, MAX_COLS, MAX_ROWS};
pub use player::Player;
pub use state::{parse_column, GameOutcome, GameState, MoveError, Verdict};
