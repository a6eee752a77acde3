/// Text-entry control backing the draft text. The cursor is a byte offset
/// into `buffer` and always sits on a char boundary.
#[derive(Debug, Default, Clone)]
pub struct DraftInput {
    buffer: String,
    cursor: usize,
}

impl DraftInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.buffer
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Replaces the buffer verbatim and puts the cursor at the end.
    pub fn set(&mut self, value: impl Into<String>) {
        self.buffer = value.into();
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.buffer.remove(prev);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(prev) = self.prev_boundary() {
            self.cursor = prev;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(c) = self.buffer[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn delete_word_backward(&mut self) {
        let start = self.previous_word_start();
        if start < self.cursor {
            self.buffer.replace_range(start..self.cursor, "");
            self.cursor = start;
        }
    }

    pub fn move_to_previous_word(&mut self) {
        self.cursor = self.previous_word_start();
    }

    pub fn move_to_next_word(&mut self) {
        let rest = &self.buffer[self.cursor..];
        let mut chars = rest.char_indices().peekable();

        // Skip the rest of the current word, then the whitespace after it.
        while chars.next_if(|(_, c)| !c.is_whitespace()).is_some() {}
        while chars.next_if(|(_, c)| c.is_whitespace()).is_some() {}

        self.cursor += chars.peek().map_or(rest.len(), |(i, _)| *i);
    }

    fn prev_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }

    fn previous_word_start(&self) -> usize {
        let before = &self.buffer[..self.cursor];
        let trimmed = before.trim_end();
        trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map_or(0, |(i, c)| i + c.len_utf8())
    }
}
