use crate::ai::Agent;
use crate::game::{GameState, GridShape, MoveError, Player, Verdict};
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

use super::prompt::outcome_message;

pub struct App {
    game_state: GameState,
    agent: Box<dyn Agent>,
    first_player: Player,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(shape: GridShape, first_player: Player, agent: Box<dyn Agent>) -> Self {
        let mut app = App {
            game_state: GameState::initial(shape, first_player),
            agent,
            first_player,
            selected_column: shape.cols() / 2, // Start in middle
            should_quit: false,
            message: None,
        };
        app.ai_turn();
        app
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                self.handle_key(key);
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.shape().cols() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // Digits pick a column directly, 1-based like the prompt.
                let choice = c.to_digit(10).unwrap_or(0) as usize;
                if (1..=self.shape().cols()).contains(&choice) {
                    self.selected_column = choice - 1;
                    self.drop_piece();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.game_state = GameState::initial(self.shape(), self.first_player);
                self.selected_column = self.shape().cols() / 2;
                self.message = Some("New game started!".to_string());
                self.ai_turn();
            }
            _ => {}
        }
    }

    /// Drop the human's piece in the selected column, then let the AI answer.
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game_state.apply_move_mut(self.selected_column) {
            Ok(Verdict::Continue) => self.ai_turn(),
            Ok(_) => self.announce_outcome(),
            Err(err @ MoveError::ColumnFull(_)) => {
                self.message = Some(format!("{}!", capitalize(&err.to_string())));
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    /// Play the computer's reply if it is the AI's turn.
    fn ai_turn(&mut self) {
        if self.game_state.is_terminal() || self.game_state.current_player() != Player::Ai {
            return;
        }

        let col = self.agent.select_action(&self.game_state);
        match self.game_state.apply_move_mut(col) {
            Ok(Verdict::Continue) => {
                self.message = Some(format!("{} played column {}", self.agent.name(), col + 1));
            }
            Ok(_) => self.announce_outcome(),
            Err(err) => {
                log::error!("{} chose an illegal column {col}: {err}", self.agent.name());
                self.message = Some(format!("{} failed to move: {err}", self.agent.name()));
            }
        }
    }

    fn shape(&self) -> GridShape {
        self.game_state.board().shape()
    }

    fn announce_outcome(&mut self) {
        if let Some(outcome) = self.game_state.outcome() {
            log::info!("game over: {outcome:?}");
            self.message = Some(format!("{} Press 'r' to restart.", outcome_message(outcome)));
        }
    }

    fn mode_label(&self) -> String {
        let shape = self.shape();
        format!("{}x{} vs {}", shape.rows(), shape.cols(), self.agent.name())
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &self.message,
            &self.mode_label(),
        );
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
