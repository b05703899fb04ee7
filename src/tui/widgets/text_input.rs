use crossterm::event::KeyCode;

/// Manages the value and cursor of a single text input.
///
/// The cursor is a character index, so multi-byte input behaves correctly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInputState {
    value: String,
    cursor: usize,
}

impl TextInputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the current value
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the cursor position as a character index
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True if the value is empty after trimming
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Replace the value and move the cursor to the end
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    /// Clear the value and reset the cursor
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Handle an editing key, returns true if handled
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char(c) => {
                self.value.insert(self.byte_index(), c);
                self.cursor += 1;
                true
            }
            KeyCode::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    self.value.remove(self.byte_index());
                }
                true
            }
            KeyCode::Delete => {
                if self.cursor < self.char_count() {
                    self.value.remove(self.byte_index());
                }
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                if self.cursor < self.char_count() {
                    self.cursor += 1;
                }
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.char_count();
                true
            }
            _ => false,
        }
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(index, _)| index)
            .unwrap_or(self.value.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(input: &mut TextInputState, text: &str) {
        for c in text.chars() {
            input.handle_key(KeyCode::Char(c));
        }
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut input = TextInputState::new();
        type_str(&mut input, "Jane Doe");
        assert_eq!(input.value(), "Jane Doe");
        assert_eq!(input.cursor(), 8);
    }

    #[test]
    fn edits_in_the_middle() {
        let mut input = TextInputState::new();
        type_str(&mut input, "Jne");
        input.handle_key(KeyCode::Home);
        input.handle_key(KeyCode::Right);
        type_str(&mut input, "a");
        assert_eq!(input.value(), "Jane");

        input.handle_key(KeyCode::Backspace);
        assert_eq!(input.value(), "Jne");
        input.handle_key(KeyCode::Delete);
        assert_eq!(input.value(), "Je");
    }

    #[test]
    fn handles_multibyte_input() {
        let mut input = TextInputState::new();
        type_str(&mut input, "José");
        assert_eq!(input.value(), "José");
        input.handle_key(KeyCode::Backspace);
        assert_eq!(input.value(), "Jos");
    }

    #[test]
    fn whitespace_only_is_blank() {
        let mut input = TextInputState::new();
        type_str(&mut input, "   ");
        assert!(input.is_blank());
        type_str(&mut input, "x");
        assert!(!input.is_blank());
        input.clear();
        assert!(input.is_blank());
        assert_eq!(input.cursor(), 0);
    }
}
