//! TUI application state and logic

use crate::core::Pos;
use crate::puzzles::maze::{Maze, MazeGame, Move, MoveOutcome};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

const MAX_MESSAGES: usize = 5;

/// Builds a fresh maze when the player asks for a new one
pub type MazeFactory<'a> = Box<dyn FnMut() -> Result<Maze, String> + 'a>;

/// Application state
pub struct MazeApp<'a> {
    pub game: MazeGame,
    pub messages: Vec<Message>,
    /// Route to the next word, shown while hints are on
    pub hint: Option<Vec<Pos>>,
    pub stats: Statistics,
    pub should_quit: bool,
    factory: MazeFactory<'a>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub mazes_played: usize,
    pub mazes_solved: usize,
    pub best_moves: Option<usize>,
}

impl<'a> MazeApp<'a> {
    /// # Errors
    ///
    /// Returns an error if the factory cannot build the first maze.
    pub fn new(mut factory: MazeFactory<'a>) -> Result<Self, String> {
        let game = MazeGame::new(factory()?);
        let mut app = Self {
            game,
            messages: Vec::new(),
            hint: None,
            stats: Statistics {
                mazes_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
            factory,
        };
        app.greet();
        Ok(app)
    }

    fn greet(&mut self) {
        self.add_message(
            "Walk from the green start to the red end, collecting the sentence in order.",
            MessageStyle::Info,
        );
        if let Some(next) = self.game.expected_next() {
            let text = format!("Find the word '{next}' next.");
            self.add_message(&text, MessageStyle::Info);
        }
    }

    pub fn handle_move(&mut self, mv: Move) {
        match self.game.step(mv) {
            MoveOutcome::Ignored => return,
            MoveOutcome::Moved => {}
            MoveOutcome::Collected(word) => {
                let text = match self.game.expected_next() {
                    Some(next) => format!("Got '{word}'! Now find '{next}'."),
                    None => format!("Got '{word}'! Head for the end."),
                };
                self.add_message(&text, MessageStyle::Success);
            }
            MoveOutcome::OutOfOrder { found, expected } => {
                self.add_message(
                    &format!("'{found}' isn't next. Look for '{expected}'."),
                    MessageStyle::Error,
                );
            }
            MoveOutcome::Incomplete { collected, needed } => {
                self.add_message(
                    &format!("You reached the end with {collected} of {needed} words. Keep looking!"),
                    MessageStyle::Error,
                );
            }
            MoveOutcome::Completed => {
                self.stats.mazes_solved += 1;
                let moves = self.game.moves();
                self.stats.best_moves = Some(self.stats.best_moves.map_or(moves, |b| b.min(moves)));
                self.add_message(
                    &format!("🎉 Sentence complete in {moves} moves!"),
                    MessageStyle::Success,
                );
                self.add_message("Press 'n' for a new maze or 'q' to quit.", MessageStyle::Info);
            }
        }

        if self.hint.is_some() {
            self.hint = self.game.hint_route();
        }
    }

    pub fn toggle_hint(&mut self) {
        if self.hint.take().is_some() {
            return;
        }
        self.hint = self.game.hint_route();
        if self.hint.is_none() {
            self.add_message("No route from here.", MessageStyle::Error);
        }
    }

    pub fn new_maze(&mut self) {
        match (self.factory)() {
            Ok(maze) => {
                self.game = MazeGame::new(maze);
                self.hint = None;
                self.messages.clear();
                self.stats.mazes_played += 1;
                self.greet();
            }
            Err(e) => self.add_message(&format!("Could not build a maze: {e}"), MessageStyle::Error),
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.new_maze(),
            KeyCode::Char('h') => self.toggle_hint(),
            KeyCode::Up | KeyCode::Char('w') => self.handle_move(Move::Up),
            KeyCode::Down | KeyCode::Char('s') => self.handle_move(Move::Down),
            KeyCode::Left | KeyCode::Char('a') => self.handle_move(Move::Left),
            KeyCode::Right | KeyCode::Char('d') => self.handle_move(Move::Right),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: MazeApp) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: MazeApp) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzles::maze::generate_maze;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn app() -> MazeApp<'static> {
        let mut rng = StdRng::seed_from_u64(21);
        let factory: MazeFactory<'static> = Box::new(move || {
            generate_maze(6, &["the", "cat", "can", "jump"], &["sun", "moon"], &mut rng)
                .map_err(|e| e.to_string())
        });
        MazeApp::new(factory).unwrap()
    }

    fn play_route(app: &mut MazeApp) {
        while !app.game.is_complete() {
            let route = app.game.hint_route().unwrap();
            let mv = Move::between(route[0], route[1]).unwrap();
            app.handle_key(
                match mv {
                    Move::Up => KeyCode::Up,
                    Move::Down => KeyCode::Down,
                    Move::Left => KeyCode::Left,
                    Move::Right => KeyCode::Right,
                },
                KeyModifiers::NONE,
            );
        }
    }

    #[test]
    fn greets_with_first_target() {
        let app = app();
        assert!(app.messages.iter().any(|m| m.text.contains("'cat'")));
        assert_eq!(app.stats.mazes_played, 1);
    }

    #[test]
    fn following_hints_solves_the_maze() {
        let mut app = app();
        play_route(&mut app);

        assert_eq!(app.stats.mazes_solved, 1);
        assert_eq!(app.stats.best_moves, Some(app.game.moves()));
        assert!(
            app.messages
                .iter()
                .any(|m| m.style == MessageStyle::Success && m.text.contains("complete"))
        );
    }

    #[test]
    fn hint_toggles() {
        let mut app = app();
        app.handle_key(KeyCode::Char('h'), KeyModifiers::NONE);
        assert!(app.hint.is_some());
        app.handle_key(KeyCode::Char('h'), KeyModifiers::NONE);
        assert!(app.hint.is_none());
    }

    #[test]
    fn new_maze_resets_progress() {
        let mut app = app();
        play_route(&mut app);
        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);

        assert!(!app.game.is_complete());
        assert_eq!(app.game.moves(), 0);
        assert_eq!(app.stats.mazes_played, 2);
    }

    #[test]
    fn quit_keys() {
        let mut app = app();
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);

        let mut app = self::app();
        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for i in 0..10 {
            app.add_message(&format!("note {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "note 9");
    }
}
