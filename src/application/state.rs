//! Application state management for the terminal lemonade game.
//!
//! This module contains the main application state and mode management
//! for the terminal user interface.

use crate::domain::{GameState, Step, StepEngine};

/// Represents the current mode of the application.
///
/// The application can be in different modes that determine how user input
/// is interpreted and what UI elements are displayed.
#[derive(Debug)]
pub enum AppMode {
    /// Playing mode - taps advance the lemonade cycle
    Playing,
    /// Help screen is displayed
    Help,
}

/// Main application state containing the game and UI state.
///
/// This structure holds all the data needed to render the terminal UI
/// and feed taps into the step engine. It owns the single [`GameState`]
/// instance for the lifetime of the process.
///
/// # Examples
///
/// ```
/// use lemonade::application::App;
/// use lemonade::domain::Step;
///
/// let app = App::default();
/// assert_eq!(app.game.step, Step::PickLemon);
/// assert_eq!(app.glasses_served, 0);
/// ```
#[derive(Debug)]
pub struct App {
    /// Current game state (step and squeeze counter)
    pub game: GameState,
    /// Step engine producing successor states
    pub engine: StepEngine,
    /// Current application mode
    pub mode: AppMode,
    /// Scroll position in help text
    pub help_scroll: usize,
    /// Temporary status message to display
    pub status_message: Option<String>,
    /// Glasses of lemonade finished this session
    pub glasses_served: u32,
}

impl Default for App {
    fn default() -> Self {
        Self {
            game: GameState::default(),
            engine: StepEngine::new(),
            mode: AppMode::Playing,
            help_scroll: 0,
            status_message: None,
            glasses_served: 0,
        }
    }
}

impl App {
    /// Delivers one tap on the displayed image to the step engine.
    ///
    /// Any pending status message is cleared. Finishing the drink step
    /// counts one more glass for the session and announces it in the
    /// status bar.
    pub fn tap(&mut self) {
        let before = self.game.step;
        self.game = self.engine.tap(self.game);
        self.status_message = None;

        if before == Step::DrinkLemonade {
            self.glasses_served += 1;
            self.status_message = Some(format!(
                "Glass no. {} finished! Tap the empty glass to start over.",
                self.glasses_served
            ));
        }
    }

    /// Opens the help screen, starting at the top of the help text.
    pub fn open_help(&mut self) {
        self.mode = AppMode::Help;
        self.help_scroll = 0;
    }

    /// Closes the help screen and returns to playing.
    ///
    /// The game state is untouched; the user resumes exactly where
    /// they left off.
    pub fn close_help(&mut self) {
        self.mode = AppMode::Playing;
    }
}
