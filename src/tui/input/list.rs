use crossterm::event::{KeyCode, KeyEvent};

use crate::model::Filter;
use crate::tui::app::{App, Focus};

/// Keys while the task list has focus
pub(super) fn handle_list(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.show_help = true,
        KeyCode::Char('a') | KeyCode::Char('i') => app.focus = Focus::Input,

        // Cursor within the page
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-1),

        // Pages
        KeyCode::Char('l') | KeyCode::Right | KeyCode::PageDown => app.next_page(),
        KeyCode::Char('h') | KeyCode::Left | KeyCode::PageUp => app.prev_page(),
        KeyCode::Char('g') | KeyCode::Home => app.first_page(),
        KeyCode::Char('G') | KeyCode::End => app.last_page(),

        // Items
        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => app.toggle_selected(),
        KeyCode::Char('D') => app.remove_completed(),

        // Tabs
        KeyCode::Char('1') => app.select_tab(Filter::All),
        KeyCode::Char('2') => app.select_tab(Filter::Active),
        KeyCode::Char('3') => app.select_tab(Filter::Completed),
        KeyCode::Char(']') => app.cycle_tab(true),
        KeyCode::Char('[') => app.cycle_tab(false),
        _ => {}
    }
}
