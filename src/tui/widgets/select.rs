use crossterm::event::KeyCode;

/// Manages selection over a fixed option list, cycled with Left/Right.
///
/// Starts with nothing selected so an untouched select fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectState {
    options: &'static [&'static str],
    selected: Option<usize>,
}

impl SelectState {
    pub fn new(options: &'static [&'static str]) -> Self {
        Self {
            options,
            selected: None,
        }
    }

    pub fn options(&self) -> &'static [&'static str] {
        self.options
    }

    /// Get the selected option, if any
    pub fn value(&self) -> Option<&'static str> {
        self.selected.map(|index| self.options[index])
    }

    /// Set selected index (useful for initialization)
    pub fn select(&mut self, index: usize) {
        if index < self.options.len() {
            self.selected = Some(index);
        }
    }

    /// Clear the selection
    pub fn clear(&mut self) {
        self.selected = None;
    }

    pub fn select_next(&mut self) {
        self.selected = Some(match self.selected {
            Some(index) => (index + 1) % self.options.len(),
            None => 0,
        });
    }

    pub fn select_previous(&mut self) {
        self.selected = Some(match self.selected {
            Some(index) => (index + self.options.len() - 1) % self.options.len(),
            None => self.options.len() - 1,
        });
    }

    /// Handle a navigation key, returns true if handled
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        if self.options.is_empty() {
            return false;
        }

        match key {
            KeyCode::Right | KeyCode::Char(' ') => {
                self.select_next();
                true
            }
            KeyCode::Left => {
                self.select_previous();
                true
            }
            _ => false,
        }
    }
}
