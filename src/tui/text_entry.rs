use crossterm::event::KeyCode;

use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

/// Decides whether the current value may be submitted
pub type Validator = Box<dyn Fn(&str) -> bool>;

/// Key that submits the entry
pub const CONFIRM_KEY: KeyCode = KeyCode::Enter;

/// Default rule: something other than whitespace was typed
pub fn non_blank(value: &str) -> bool {
    !value.trim().is_empty()
}

/// A single-line editable value with a validity rule and submit-on-Enter.
///
/// Validity is always recomputed from `value`; the cursor is a byte offset on
/// a grapheme boundary and has no effect on what gets submitted.
pub struct TextEntry {
    value: String,
    cursor: usize,
    validator: Validator,
}

impl Default for TextEntry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TextEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextEntry")
            .field("value", &self.value)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

impl TextEntry {
    pub fn new() -> Self {
        Self::with_initial("")
    }

    pub fn with_initial(value: &str) -> Self {
        TextEntry {
            value: value.to_string(),
            cursor: value.len(),
            validator: Box::new(non_blank),
        }
    }

    /// Replace the validity rule
    pub fn with_validator(mut self, validator: impl Fn(&str) -> bool + 'static) -> Self {
        self.validator = Box::new(validator);
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_valid(&self) -> bool {
        (self.validator)(&self.value)
    }

    /// Replace the whole value
    pub fn on_change(&mut self, new_value: &str) {
        self.value = new_value.to_string();
        self.cursor = self.value.len();
    }

    /// Submit on the confirm key.
    ///
    /// When the value is valid and `on_submit` is given, it is called with the
    /// value and the entry is cleared. Anything else leaves the value as is.
    /// Returns whether a submit happened.
    pub fn on_key_down(&mut self, key: KeyCode, on_submit: Option<&mut dyn FnMut(&str)>) -> bool {
        if key != CONFIRM_KEY || !self.is_valid() {
            return false;
        }
        let Some(submit) = on_submit else {
            return false;
        };
        submit(&self.value);
        self.reset();
        true
    }

    pub fn reset(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    // -- cursor editing -----------------------------------------------------

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Delete the grapheme before the cursor
    pub fn backspace(&mut self) {
        if let Some(prev) = prev_grapheme_boundary(&self.value, self.cursor) {
            self.value.replace_range(prev..self.cursor, "");
            self.cursor = prev;
        }
    }

    /// Delete the grapheme under the cursor
    pub fn delete(&mut self) {
        if let Some(next) = next_grapheme_boundary(&self.value, self.cursor) {
            self.value.replace_range(self.cursor..next, "");
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = prev_grapheme_boundary(&self.value, self.cursor) {
            self.cursor = prev;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = next_grapheme_boundary(&self.value, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty_and_invalid() {
        let entry = TextEntry::new();
        assert_eq!(entry.value(), "");
        assert!(!entry.is_valid());
    }

    #[test]
    fn initial_value_is_kept() {
        let entry = TextEntry::with_initial("initial value");
        assert_eq!(entry.value(), "initial value");
        assert_eq!(entry.cursor(), "initial value".len());
        assert!(entry.is_valid());
    }

    #[test]
    fn on_change_replaces_value() {
        let mut entry = TextEntry::with_initial("old");
        entry.on_change("new value");
        assert_eq!(entry.value(), "new value");
        entry.on_change("   ");
        assert_eq!(entry.value(), "   ");
        assert!(!entry.is_valid());
    }

    #[test]
    fn reset_clears_value() {
        let mut entry = TextEntry::with_initial("test");
        entry.reset();
        assert_eq!(entry.value(), "");
        assert_eq!(entry.cursor(), 0);
    }

    #[test]
    fn enter_submits_valid_value_and_clears() {
        let mut entry = TextEntry::with_initial("test value");
        let mut submitted = Vec::new();
        let mut sink = |v: &str| submitted.push(v.to_string());

        assert!(entry.on_key_down(KeyCode::Enter, Some(&mut sink)));
        assert_eq!(submitted, vec!["test value"]);
        assert_eq!(entry.value(), "");
    }

    #[test]
    fn enter_with_invalid_value_does_nothing() {
        let mut entry = TextEntry::with_initial("  ");
        let mut calls = 0;
        let mut sink = |_: &str| calls += 1;

        assert!(!entry.on_key_down(KeyCode::Enter, Some(&mut sink)));
        assert_eq!(calls, 0);
        assert_eq!(entry.value(), "  ");
    }

    #[test]
    fn other_keys_do_not_submit() {
        let mut entry = TextEntry::with_initial("test value");
        let mut calls = 0;
        let mut sink = |_: &str| calls += 1;

        assert!(!entry.on_key_down(KeyCode::Char('a'), Some(&mut sink)));
        assert!(!entry.on_key_down(KeyCode::Esc, Some(&mut sink)));
        assert_eq!(calls, 0);
        assert_eq!(entry.value(), "test value");
    }

    #[test]
    fn enter_without_callback_keeps_value() {
        let mut entry = TextEntry::with_initial("test value");
        assert!(!entry.on_key_down(KeyCode::Enter, None));
        assert_eq!(entry.value(), "test value");
    }

    #[test]
    fn custom_validator() {
        let mut entry = TextEntry::new().with_validator(|v| v.len() >= 3);
        entry.on_change("ab");
        assert!(!entry.is_valid());
        entry.on_change("abc");
        assert!(entry.is_valid());
        // whitespace counts for this validator
        entry.on_change("   ");
        assert!(entry.is_valid());
    }

    #[test]
    fn editing_at_cursor() {
        let mut entry = TextEntry::new();
        for c in "bd".chars() {
            entry.insert_char(c);
        }
        entry.move_left();
        entry.insert_char('c');
        entry.move_home();
        entry.insert_char('a');
        assert_eq!(entry.value(), "abcd");
        assert_eq!(entry.cursor(), 1);

        entry.delete();
        assert_eq!(entry.value(), "acd");
        entry.move_end();
        entry.backspace();
        assert_eq!(entry.value(), "ac");
        assert_eq!(entry.cursor(), 2);
    }

    #[test]
    fn backspace_removes_whole_grapheme() {
        let mut entry = TextEntry::with_initial("cafe\u{301}");
        entry.backspace();
        assert_eq!(entry.value(), "caf");
        entry.move_home();
        entry.backspace();
        assert_eq!(entry.value(), "caf");
        entry.move_end();
        entry.move_right();
        assert_eq!(entry.cursor(), 3);
    }
}
