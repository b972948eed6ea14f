//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::App;
use crate::config::HouseholdConfig;

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => app.select_next(),
        KeyCode::Char('+' | '=') | KeyCode::Right => app.increase(),
        KeyCode::Char('-') | KeyCode::Left => app.decrease(),
        KeyCode::Char(' ') | KeyCode::Enter => app.toggle(),
        KeyCode::Char('r') => app.reset(),
        KeyCode::Char(c @ '1'..='9') => {
            let idx = c as usize - '1' as usize;
            if let Some(name) = HouseholdConfig::PRESETS.get(idx) {
                app.switch_preset(name);
            }
        }
        _ => {}
    }
}
