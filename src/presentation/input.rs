use crate::application::{App, AppMode};
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, _modifiers: KeyModifiers) {
        match app.mode {
            AppMode::Playing => Self::handle_playing_mode(app, key),
            AppMode::Help => Self::handle_help_mode(app, key),
        }
    }

    /// A left click anywhere on the screen counts as a tap on the
    /// displayed image; there are no other tap targets to miss.
    pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            match app.mode {
                AppMode::Playing => app.tap(),
                AppMode::Help => app.close_help(),
            }
        }
    }

    fn handle_playing_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Char(' ') | KeyCode::Enter => {
                app.tap();
            }
            KeyCode::F(1) | KeyCode::Char('?') => {
                app.open_help();
            }
            KeyCode::Char('q') => {
                // Will be handled by main loop
            }
            _ => {}
        }
    }

    fn handle_help_mode(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                app.close_help();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if app.help_scroll > 0 {
                    app.help_scroll -= 1;
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                app.help_scroll += 1;
            }
            KeyCode::PageUp => {
                app.help_scroll = app.help_scroll.saturating_sub(5);
            }
            KeyCode::PageDown => {
                app.help_scroll += 5;
            }
            KeyCode::Home => {
                app.help_scroll = 0;
            }
            _ => {}
        }
    }
}
