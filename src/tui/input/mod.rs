mod entry;
mod list;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Focus};

use entry::{handle_add_button, handle_entry};
use list::handle_list;

/// Handle a key event for whatever has focus
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    app.status_message = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Help overlay swallows everything until closed
    if app.show_help {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.show_help = false;
        }
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return;
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return;
        }
        _ => {}
    }

    match app.focus {
        Focus::Input => handle_entry(app, key),
        Focus::AddButton => handle_add_button(app, key),
        Focus::List => handle_list(app, key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AppConfig, Filter};

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app() -> App {
        let mut config = AppConfig::default();
        config.list.items_per_page = 2;
        App::new(&config)
    }

    #[test]
    fn typing_and_enter_adds_a_todo() {
        let mut app = app();
        type_str(&mut app, "  buy milk ");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.todos()[0].title, "buy milk");
        assert_eq!(app.entry.value(), "");
    }

    #[test]
    fn enter_on_blank_input_keeps_it() {
        let mut app = app();
        type_str(&mut app, "   ");
        press(&mut app, KeyCode::Enter);
        assert!(app.store.is_empty());
        assert_eq!(app.entry.value(), "   ");
    }

    #[test]
    fn list_letters_are_text_while_typing() {
        let mut app = app();
        type_str(&mut app, "q?x");
        assert!(!app.should_quit);
        assert!(!app.show_help);
        assert_eq!(app.entry.value(), "q?x");
    }

    #[test]
    fn add_button_submits_through_tab_focus() {
        let mut app = app();
        type_str(&mut app, "call mom");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::AddButton);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.store.len(), 1);
        assert_eq!(app.entry.value(), "");
    }

    #[test]
    fn list_keys_toggle_page_and_remove() {
        let mut app = app();
        for t in ["a", "b", "c"] {
            type_str(&mut app, t);
            press(&mut app, KeyCode::Enter);
        }
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.focus, Focus::List);

        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.list().current_page(), 2);
        press(&mut app, KeyCode::Char(' '));
        assert!(app.store.todos()[2].completed);

        press(&mut app, KeyCode::Char('D'));
        assert_eq!(app.store.len(), 2);
        assert_eq!(app.list().current_page(), 1);
    }

    #[test]
    fn number_keys_pick_tabs() {
        let mut app = app();
        app.focus = Focus::List;
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_filter, Filter::Completed);
        press(&mut app, KeyCode::Char('['));
        assert_eq!(app.active_filter, Filter::Active);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.active_filter, Filter::All);
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let mut app = app();
        app.focus = Focus::List;
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_filter, Filter::All);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);
    }

    #[test]
    fn ctrl_c_quits_from_input() {
        let mut app = app();
        handle_key(&mut app, KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
        assert_eq!(app.entry.value(), "");
    }
}
