//! Keyboard input handling for the TUI.
//!
//! Translates key and mouse events into application state changes. Enter,
//! Space and a left click are interchangeable everywhere an item can be
//! activated.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ttt_core::Route;

use crate::app::{App, AppState};

/// Keys that act like a click on the focused item.
pub fn is_activation_key(code: KeyCode) -> bool {
    matches!(code, KeyCode::Enter | KeyCode::Char(' '))
}

/// Handle keyboard input. Returns true if the app should quit.
pub async fn handle_input(app: &mut App, key: KeyEvent) -> Result<bool> {
    // Handle help overlay
    if matches!(app.state, AppState::ShowingHelp) {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.state = AppState::Normal;
        }
        return Ok(false);
    }

    // Handle quit confirmation
    if matches!(app.state, AppState::ConfirmingQuit) {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.state = AppState::Quitting;
                return Ok(true);
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.state = AppState::Normal;
            }
            _ => {}
        }
        return Ok(false);
    }

    if is_activation_key(key.code) {
        app.activate();
        return Ok(false);
    }

    match key.code {
        KeyCode::Char('q') => {
            app.state = AppState::ConfirmingQuit;
        }
        KeyCode::Char('?') => {
            app.state = AppState::ShowingHelp;
        }
        KeyCode::Char('r') => {
            app.refresh_all_background();
        }
        KeyCode::Tab => app.next_route(),
        KeyCode::BackTab => app.prev_route(),
        KeyCode::Char(c @ '1'..='7') => {
            let index = c as usize - '1' as usize;
            if let Some(route) = Route::ALL.get(index) {
                app.navigate(route.path());
            }
        }
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::Left | KeyCode::Char('h') if app.current_route == Route::Home => {
            app.slideshow.prev(Instant::now());
        }
        KeyCode::Right | KeyCode::Char('l') if app.current_route == Route::Home => {
            app.slideshow.next(Instant::now());
        }
        KeyCode::Esc => {
            app.roster_state.collapse_all();
            app.status_message = None;
        }
        _ => {}
    }

    Ok(false)
}

/// Handle mouse input: a left click activates the item under the pointer,
/// the wheel moves the selection. Ignored while an overlay is open.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    if !matches!(app.state, AppState::Normal) {
        return;
    }
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            app.click(mouse.column, mouse.row);
        }
        MouseEventKind::ScrollDown => app.select_next(),
        MouseEventKind::ScrollUp => app.select_prev(),
        _ => {}
    }
}
