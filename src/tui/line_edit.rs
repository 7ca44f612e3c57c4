use crate::util::unicode::{next_grapheme_boundary, prev_grapheme_boundary};

/// Cursor over a single-line text buffer owned elsewhere (a draft field).
/// The cursor is a byte offset, always on a grapheme boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineEdit {
    pub cursor: usize,
}

impl LineEdit {
    /// Cursor placed at the end of `buf`
    pub fn at_end(buf: &str) -> Self {
        LineEdit { cursor: buf.len() }
    }

    pub fn insert_char(&mut self, buf: &mut String, c: char) {
        self.clamp(buf);
        buf.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn insert_str(&mut self, buf: &mut String, s: &str) {
        self.clamp(buf);
        let clean: String = s.chars().filter(|c| !c.is_control()).collect();
        buf.insert_str(self.cursor, &clean);
        self.cursor += clean.len();
    }

    /// Delete the grapheme before the cursor. Returns false at the start.
    pub fn backspace(&mut self, buf: &mut String) -> bool {
        self.clamp(buf);
        match prev_grapheme_boundary(buf, self.cursor) {
            Some(prev) => {
                buf.replace_range(prev..self.cursor, "");
                self.cursor = prev;
                true
            }
            None => false,
        }
    }

    /// Delete the grapheme under the cursor
    pub fn delete(&mut self, buf: &mut String) {
        self.clamp(buf);
        if let Some(next) = next_grapheme_boundary(buf, self.cursor) {
            buf.replace_range(self.cursor..next, "");
        }
    }

    pub fn left(&mut self, buf: &str) {
        if let Some(prev) = prev_grapheme_boundary(buf, self.cursor.min(buf.len())) {
            self.cursor = prev;
        }
    }

    pub fn right(&mut self, buf: &str) {
        if let Some(next) = next_grapheme_boundary(buf, self.cursor) {
            self.cursor = next;
        }
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self, buf: &str) {
        self.cursor = buf.len();
    }

    /// Delete from the start of the line to the cursor
    pub fn clear_to_start(&mut self, buf: &mut String) {
        self.clamp(buf);
        buf.replace_range(..self.cursor, "");
        self.cursor = 0;
    }

    fn clamp(&mut self, buf: &str) {
        if self.cursor > buf.len() {
            self.cursor = buf.len();
        }
    }
}
