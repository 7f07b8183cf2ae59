//! Line-oriented play: the board is printed as text and the human types a
//! 1-based column number at a prompt.

use std::io::{self, BufRead, Write};

use crate::ai::Agent;
use crate::game::{parse_column, Board, Cell, GameOutcome, GameState, Player};

fn symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => '-',
        Cell::Human => 'X',
        Cell::Ai => 'O',
    }
}

/// Text rendering of the board: a header of 1-based column numbers, then one
/// line per row, top first.
pub fn render_board(board: &Board) -> String {
    let header: Vec<String> = (1..=board.num_cols()).map(|c| c.to_string()).collect();
    let mut out = header.join(" ");
    out.push('\n');
    for row in board.grid() {
        let line: Vec<String> = row.iter().map(|&cell| symbol(cell).to_string()).collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }
    out
}

/// Announcement for a finished game.
pub fn outcome_message(outcome: GameOutcome) -> &'static str {
    match outcome {
        GameOutcome::Winner(Player::Human) => "Human wins!",
        GameOutcome::Winner(Player::Ai) => "AI wins!",
        GameOutcome::Draw => "Draw!",
    }
}

/// Play one game on `input`/`output`, alternating between prompted human
/// moves and `agent`. Invalid or full columns are reported and re-prompted.
/// Returns the outcome, or `None` if input ran out first.
pub fn run_prompt<R: BufRead, W: Write>(
    input: R,
    output: &mut W,
    mut state: GameState,
    agent: &mut dyn Agent,
) -> io::Result<Option<GameOutcome>> {
    let mut lines = input.lines();
    let cols = state.board().num_cols();

    write!(output, "{}", render_board(state.board()))?;

    while !state.is_terminal() {
        match state.current_player() {
            Player::Human => {
                write!(output, "Choose a column (1-{cols}): ")?;
                output.flush()?;
                let Some(line) = lines.next().transpose()? else {
                    writeln!(output)?;
                    return Ok(None);
                };
                let played = parse_column(&line, cols).and_then(|col| state.apply_move_mut(col));
                if let Err(err) = played {
                    writeln!(output, "{err}")?;
                    continue;
                }
            }
            Player::Ai => {
                let col = agent.select_action(&state);
                if let Err(err) = state.apply_move_mut(col) {
                    let msg = format!("{} chose column {col}: {err}", agent.name());
                    return Err(io::Error::other(msg));
                }
                writeln!(output, "{} plays column {}", agent.name(), col + 1)?;
            }
        }
        write!(output, "{}", render_board(state.board()))?;
    }

    let outcome = state.outcome();
    if let Some(outcome) = outcome {
        log::info!("game over: {outcome:?}");
        writeln!(output, "{}", outcome_message(outcome))?;
    }
    Ok(outcome)
}
