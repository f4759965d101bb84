use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::{App, Focus};

/// Keys while the text field has focus
pub(super) fn handle_entry(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_from_key(key.code),
        KeyCode::Esc => app.focus = Focus::List,
        KeyCode::Backspace => app.entry.backspace(),
        KeyCode::Delete => app.entry.delete(),
        KeyCode::Left => app.entry.move_left(),
        KeyCode::Right => app.entry.move_right(),
        KeyCode::Home => app.entry.move_home(),
        KeyCode::End => app.entry.move_end(),
        KeyCode::Char('a') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.entry.move_home()
        }
        KeyCode::Char('e') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.entry.move_end()
        }
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => app.entry.reset(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.entry.insert_char(c)
        }
        _ => {}
    }
}

/// Keys while the Add button has focus
pub(super) fn handle_add_button(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') => app.click_add(),
        KeyCode::Esc => app.focus = Focus::List,
        _ => {}
    }
}
