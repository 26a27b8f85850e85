use crossterm::event::{self, Event, KeyCode, KeyEvent};
use ratatui::{backend::Backend, Terminal};
use std::io;

use crate::config::AppConfig;
use crate::game::{GameEngine, GameError, MoveResult};

pub struct App {
    engine: GameEngine,
    config: AppConfig,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    /// Build the app from a validated configuration.
    pub fn new(config: AppConfig) -> Result<Self, GameError> {
        let engine = GameEngine::new(config.board.rows, config.board.columns)?;
        let selected_column = config.board.columns / 2;
        Ok(App {
            engine,
            config,
            selected_column,
            should_quit: false,
            message: None,
        })
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

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
                if self.selected_column + 1 < self.engine.board().columns() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.engine.reset();
                self.selected_column = self.engine.board().columns() / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop a piece in the selected column
    fn drop_piece(&mut self) {
        match self.engine.apply_move(self.selected_column) {
            Ok(MoveResult::Continue(_)) => {}
            Ok(MoveResult::Win { winner, .. }) => {
                self.message = Some(format!(
                    "{} wins! Press 'r' to play again.",
                    winner.name()
                ));
            }
            Ok(MoveResult::Tie) => {
                self.message = Some("It's a tie! Press 'r' to play again.".to_string());
            }
            Err(GameError::ColumnFull) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(GameError::InvalidColumn) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(GameError::GameOver) => {
                self.message = Some("Game over! Press 'r' to play again.".to_string());
            }
            Err(GameError::InvalidConfiguration { .. }) => {
                unreachable!("apply_move never reports a configuration error")
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.engine,
            &self.config.players,
            self.selected_column,
            &self.message,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_run_accepts_any_backend() {
        // The loop must be usable with every ratatui backend, TestBackend
        // included, with no extra bounds on the backend's error type.
        let _: fn(&mut App, &mut Terminal<TestBackend>) -> io::Result<()> = App::run;
    }

    #[test]
    fn test_draw_frame_to_test_backend() {
        let app = App::new(AppConfig::default()).unwrap();
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
    }

    #[test]
    fn test_keys_move_selection_and_drop() {
        let mut app = App::new(AppConfig::default()).unwrap();
        assert_eq!(app.selected_column, 3);

        app.handle_key(key(KeyCode::Left));
        assert_eq!(app.selected_column, 2);

        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.engine.occupant_at(5, 2), Cell::One);
    }

    #[test]
    fn test_drop_after_game_over_reports_game_over() {
        let mut app = App::new(AppConfig::default()).unwrap();

        // Player 1 stacks column 0 to a vertical win; Player 2 answers in
        // column 1.
        for _ in 0..3 {
            app.selected_column = 0;
            app.drop_piece();
            app.selected_column = 1;
            app.drop_piece();
        }
        app.selected_column = 0;
        app.drop_piece();
        assert_eq!(
            app.message.as_deref(),
            Some("Player 1 wins! Press 'r' to play again.")
        );

        app.drop_piece();
        assert_eq!(
            app.message.as_deref(),
            Some("Game over! Press 'r' to play again.")
        );
    }
}
