use crate::game::{Board, Cell, GameOutcome, GameState, Player};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::prompt::outcome_message;

const HUMAN_COLOR: Color = Color::Red;
const AI_COLOR: Color = Color::Yellow;
const CURSOR_COLOR: Color = Color::Cyan;

/// Each cell is three characters wide.
const CELL_WIDTH: usize = 3;

/// Column numbers, top rule, bottom rule and the cursor line around the rows.
const BOARD_FRAME_LINES: u16 = 4;

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    game_mode: &str,
) {
    let board = game_state.board();
    let board_height = board.num_rows() as u16 + BOARD_FRAME_LINES;
    let [header, board_area, status, controls] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(board_height),
        Constraint::Length(4),
        Constraint::Length(3),
    ])
    .areas(frame.area());

    render_header(frame, game_state, game_mode, header);
    render_board(frame, board, selected_column, board_area);
    render_status(frame, game_state.outcome(), message, status);
    render_controls(frame, board.num_cols(), controls);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Human => HUMAN_COLOR,
        Player::Ai => AI_COLOR,
    }
}

fn cell_span(cell: Cell) -> Span<'static> {
    match cell {
        Cell::Empty => Span::styled(" · ", Style::default().fg(Color::DarkGray)),
        Cell::Human => Span::styled(" ● ", Style::default().fg(HUMAN_COLOR)),
        Cell::Ai => Span::styled(" ● ", Style::default().fg(AI_COLOR)),
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, game_mode: &str, area: Rect) {
    let moves_played = game_state
        .board()
        .grid()
        .flatten()
        .filter(|&&cell| cell != Cell::Empty)
        .count();

    let (turn, color) = match game_state.outcome() {
        Some(_) => ("Game over".to_string(), Color::Gray),
        None => {
            let player = game_state.current_player();
            (format!("{} to move", player.name()), player_color(player))
        }
    };

    let line = Line::from(vec![
        Span::styled(turn, Style::default().fg(color).add_modifier(Modifier::BOLD)),
        Span::raw(format!("  ·  move {}  ·  {game_mode}", moves_played + 1)),
    ]);
    let header = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Connect Four "));

    frame.render_widget(header, area);
}

/// One line of per-column markers, aligned with the cells below it.
fn column_line(cols: usize, marker: impl Fn(usize) -> Span<'static>) -> Line<'static> {
    let mut spans = vec![Span::raw(" ")];
    spans.extend((0..cols).map(marker));
    spans.push(Span::raw(" "));
    Line::from(spans)
}

fn render_board(frame: &mut Frame, board: &Board, selected_column: usize, area: Rect) {
    let cols = board.num_cols();
    let rule = "─".repeat(cols * CELL_WIDTH);
    let cursor = Style::default().fg(CURSOR_COLOR).add_modifier(Modifier::BOLD);

    let mut lines = vec![column_line(cols, |col| {
        let label = format!(" {} ", col + 1);
        if col == selected_column {
            Span::styled(label, cursor.add_modifier(Modifier::UNDERLINED))
        } else {
            Span::raw(label)
        }
    })];

    lines.push(Line::from(format!("┌{rule}┐")));
    for row in board.grid() {
        let mut spans = vec![Span::raw("│")];
        spans.extend(row.iter().map(|&cell| cell_span(cell)));
        spans.push(Span::raw("│"));
        lines.push(Line::from(spans));
    }
    lines.push(Line::from(format!("└{rule}┘")));

    lines.push(column_line(cols, |col| {
        if col == selected_column {
            Span::styled(" ▲ ", cursor)
        } else {
            Span::raw(" ".repeat(CELL_WIDTH))
        }
    }));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Verdict line (once the game is decided) above the last message.
fn render_status(
    frame: &mut Frame,
    outcome: Option<GameOutcome>,
    message: &Option<String>,
    area: Rect,
) {
    let verdict = match outcome {
        Some(outcome @ GameOutcome::Winner(player)) => {
            Line::from(outcome_message(outcome)).fg(player_color(player)).bold()
        }
        Some(GameOutcome::Draw) => Line::from(outcome_message(GameOutcome::Draw)).bold(),
        None => Line::default(),
    };
    let note = Line::from(message.clone().unwrap_or_default()).fg(Color::Gray);

    let status = Paragraph::new(vec![verdict, note])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(status, area);
}

fn render_controls(frame: &mut Frame, cols: usize, area: Rect) {
    let line = Line::from(vec![
        Span::styled("●", Style::default().fg(HUMAN_COLOR)),
        Span::raw(" you  "),
        Span::styled("●", Style::default().fg(AI_COLOR)),
        Span::raw(format!(" AI   ←/→ 1-{cols} pick · Enter drop · r restart · q quit")),
    ]);

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(controls, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GridShape;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(state: &GameState, message: Option<String>, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| render(f, state, 1, &message, "3x3 vs Minimax"))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_small_board_fits_short_terminal() {
        let state = GameState::initial(GridShape::Small, Player::Human);
        let text = draw(&state, None, 60, 17);
        assert!(text.contains("Human to move"));
        assert!(text.contains("move 1"));
        assert!(text.contains(" 1  2  3 "));
        assert!(text.contains("└─────────┘"));
        assert!(text.contains(" ▲ "));
    }

    #[test]
    fn test_verdict_line_shown_when_decided() {
        let mut state = GameState::initial(GridShape::Small, Player::Human);
        for col in [2, 0, 2, 1, 1, 0] {
            state.apply_move_mut(col).unwrap();
        }
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Ai)));

        let text = draw(&state, Some("Press 'r' to restart.".to_string()), 60, 17);
        assert!(text.contains("Game over"));
        assert!(text.contains("AI wins!"));
        assert!(text.contains("Press 'r' to restart."));
    }
}
