/// Single-line text input with a byte-level cursor.
#[derive(Debug, Clone, Default)]
pub struct InputField {
    pub value: String,
    pub cursor: usize,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole text and park the cursor at the end.
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.len();
    }

    pub fn insert_char(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    /// Returns `true` if a character was removed.
    pub fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let prev = self.value[..self.cursor]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0);
        self.value.remove(prev);
        self.cursor = prev;
        true
    }

    /// Returns `true` if a character was removed.
    pub fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.value.len() {
            return false;
        }
        self.value.remove(self.cursor);
        true
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.value[..self.cursor]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.value.len() {
            self.cursor = self.value[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.value.len());
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Cursor position in terminal columns (one per char).
    pub fn cursor_column(&self) -> usize {
        self.value[..self.cursor].chars().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_multibyte_text() {
        let mut field = InputField::new();
        for c in "Zoë".chars() {
            field.insert_char(c);
        }
        assert_eq!(field.cursor_column(), 3);

        field.move_left();
        assert!(field.delete_forward());
        assert_eq!(field.value, "Zo");
        assert!(field.delete_back());
        assert_eq!(field.value, "Z");
    }

    #[test]
    fn delete_at_edges_is_noop() {
        let mut field = InputField::new();
        assert!(!field.delete_back());
        field.set("ab");
        assert!(!field.delete_forward());
        field.home();
        assert!(!field.delete_back());
        field.move_right();
        assert_eq!(field.cursor, 1);
        field.end();
        assert_eq!(field.cursor, 2);
    }
}
