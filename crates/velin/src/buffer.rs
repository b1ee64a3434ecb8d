use std::cmp;

/// Line-vector text buffer with a (row, col) cursor.
///
/// Lines hold no embedded newlines. The buffer is never empty: a document
/// with no content is a single empty line. Columns are char indices, one
/// code point per cell.
#[derive(Clone, Debug)]
pub struct TextBuffer {
    lines: Vec<String>,
    cursor_row: usize,
    cursor_col: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor_row: 0,
            cursor_col: 0,
        }
    }

    pub fn set_from_text(&mut self, text: &str) {
        let lines: Vec<String> = text.lines().map(String::from).collect();
        self.lines = if lines.is_empty() {
            vec![String::new()]
        } else {
            lines
        };
        self.cursor_row = 0;
        self.cursor_col = 0;
    }

    /// Joins lines with newlines; no trailing newline is appended.
    pub fn to_text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.cursor_row, self.cursor_col)
    }

    fn current_line_len(&self) -> usize {
        self.lines[self.cursor_row].chars().count()
    }

    fn char_to_byte(line: &str, col: usize) -> usize {
        line.char_indices()
            .nth(col)
            .map(|(i, _)| i)
            .unwrap_or(line.len())
    }

    pub fn insert_char(&mut self, c: char) {
        let line = &mut self.lines[self.cursor_row];
        let at = Self::char_to_byte(line, self.cursor_col);
        line.insert(at, c);
        self.cursor_col += 1;
    }

    /// Removes the char left of the cursor, joining with the previous line
    /// when the cursor sits at column 0. No-op at the start of the buffer.
    pub fn delete_before_cursor(&mut self) {
        if self.cursor_col > 0 {
            let line = &mut self.lines[self.cursor_row];
            let at = Self::char_to_byte(line, self.cursor_col - 1);
            line.remove(at);
            self.cursor_col -= 1;
        } else if self.cursor_row > 0 {
            let removed = self.lines.remove(self.cursor_row);
            self.cursor_row -= 1;
            let prev_len = self.current_line_len();
            self.lines[self.cursor_row].push_str(&removed);
            self.cursor_col = prev_len;
        }
    }

    /// Truncates the current line at the cursor and inserts the remainder
    /// as a new line below; cursor moves to the start of that line.
    pub fn split_line(&mut self) {
        let line = &mut self.lines[self.cursor_row];
        let at = Self::char_to_byte(line, self.cursor_col);
        let rest = line.split_off(at);
        self.lines.insert(self.cursor_row + 1, rest);
        self.cursor_row += 1;
        self.cursor_col = 0;
    }

    pub fn move_horizontal(&mut self, delta: isize) {
        let len = self.current_line_len();
        let target = self.cursor_col as isize + delta;
        self.cursor_col = target.clamp(0, len as isize) as usize;
    }

    /// Moves the cursor across rows, re-clamping the column to the new
    /// line's length on every move (no remembered column).
    pub fn move_vertical(&mut self, delta: isize) {
        let max_row = self.lines.len() as isize - 1;
        let target = (self.cursor_row as isize + delta).clamp(0, max_row);
        self.cursor_row = target as usize;
        self.cursor_col = cmp::min(self.cursor_col, self.current_line_len());
    }

    /// Places the cursor at an absolute position, clamped into bounds.
    pub fn set_cursor(&mut self, row: usize, col: usize) {
        self.cursor_row = cmp::min(row, self.lines.len() - 1);
        self.cursor_col = cmp::min(col, self.current_line_len());
    }

    pub fn clear(&mut self) {
        self.lines = vec![String::new()];
        self.cursor_row = 0;
        self.cursor_col = 0;
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_creation() {
        let buffer = TextBuffer::new();
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.cursor(), (0, 0));
        assert_eq!(buffer.to_text(), "");
    }

    #[test]
    fn test_char_insertion() {
        let mut buffer = TextBuffer::new();
        buffer.insert_char('H');
        buffer.insert_char('i');

        assert_eq!(buffer.to_text(), "Hi");
        assert_eq!(buffer.cursor(), (0, 2));
    }

    #[test]
    fn test_insert_mid_line() {
        let mut buffer = TextBuffer::new();
        buffer.set_from_text("abc");
        buffer.set_cursor(0, 1);
        buffer.insert_char('x');

        assert_eq!(buffer.to_text(), "axbc");
        assert_eq!(buffer.cursor(), (0, 2));
    }

    #[test]
    fn test_backspace_mid_line() {
        let mut buffer = TextBuffer::new();
        buffer.set_from_text("hello\nworld");
        buffer.set_cursor(0, 5);
        buffer.delete_before_cursor();

        assert_eq!(buffer.lines(), &["hell".to_string(), "world".to_string()]);
        assert_eq!(buffer.cursor(), (0, 4));
    }

    #[test]
    fn test_backspace_joins_lines() {
        let mut buffer = TextBuffer::new();
        buffer.set_from_text("hello\nworld");
        buffer.set_cursor(1, 0);
        buffer.delete_before_cursor();

        assert_eq!(buffer.lines(), &["helloworld".to_string()]);
        assert_eq!(buffer.cursor(), (0, 5));
    }

    #[test]
    fn test_backspace_at_origin_is_noop() {
        let mut buffer = TextBuffer::new();
        buffer.set_from_text("abc");
        buffer.delete_before_cursor();

        assert_eq!(buffer.to_text(), "abc");
        assert_eq!(buffer.cursor(), (0, 0));
    }

    #[test]
    fn test_split_line() {
        let mut buffer = TextBuffer::new();
        buffer.set_from_text("hello");
        buffer.set_cursor(0, 2);
        buffer.split_line();

        assert_eq!(buffer.lines(), &["he".to_string(), "llo".to_string()]);
        assert_eq!(buffer.cursor(), (1, 0));
    }

    #[test]
    fn test_split_then_backspace_round_trips() {
        let mut buffer = TextBuffer::new();
        buffer.set_from_text("hello world");
        buffer.set_cursor(0, 5);
        buffer.split_line();
        buffer.delete_before_cursor();

        assert_eq!(buffer.lines(), &["hello world".to_string()]);
        assert_eq!(buffer.cursor(), (0, 5));
    }

    #[test]
    fn test_horizontal_movement_clamps() {
        let mut buffer = TextBuffer::new();
        buffer.set_from_text("ab");

        buffer.move_horizontal(-1);
        assert_eq!(buffer.cursor(), (0, 0));

        buffer.move_horizontal(1);
        buffer.move_horizontal(1);
        buffer.move_horizontal(1);
        assert_eq!(buffer.cursor(), (0, 2));
    }

    #[test]
    fn test_vertical_movement_clamps_column() {
        let mut buffer = TextBuffer::new();
        buffer.set_from_text("long line here\nhi\nanother long line");
        buffer.set_cursor(0, 10);

        buffer.move_vertical(1);
        assert_eq!(buffer.cursor(), (1, 2));

        // Column is not remembered across shorter lines.
        buffer.move_vertical(1);
        assert_eq!(buffer.cursor(), (2, 2));
    }

    #[test]
    fn test_vertical_movement_clamps_rows() {
        let mut buffer = TextBuffer::new();
        buffer.set_from_text("a\nb");

        buffer.move_vertical(-1);
        assert_eq!(buffer.cursor(), (0, 0));

        buffer.move_vertical(5);
        assert_eq!(buffer.cursor(), (1, 0));
    }

    #[test]
    fn test_clear() {
        let mut buffer = TextBuffer::new();
        buffer.set_from_text("one\ntwo\nthree");
        buffer.set_cursor(2, 3);
        buffer.clear();

        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.to_text(), "");
        assert_eq!(buffer.cursor(), (0, 0));
    }

    #[test]
    fn test_set_from_empty_text() {
        let mut buffer = TextBuffer::new();
        buffer.set_from_text("");
        assert_eq!(buffer.line_count(), 1);
        assert_eq!(buffer.lines(), &[String::new()]);
    }

    #[test]
    fn test_text_round_trip_has_no_trailing_newline() {
        let mut buffer = TextBuffer::new();
        buffer.set_from_text("one\ntwo");
        assert_eq!(buffer.to_text(), "one\ntwo");
    }

    #[test]
    fn test_never_fewer_than_one_line() {
        let mut buffer = TextBuffer::new();
        buffer.set_from_text("a\nb\nc");
        buffer.set_cursor(2, 0);
        buffer.delete_before_cursor(); // join c into b
        buffer.delete_before_cursor(); // delete 'b'
        buffer.delete_before_cursor(); // join into a
        buffer.delete_before_cursor(); // delete 'a'
        buffer.delete_before_cursor(); // no-op at origin

        assert!(buffer.line_count() >= 1);
        assert_eq!(buffer.to_text(), "c");
    }

    #[test]
    fn test_multibyte_chars_count_as_one_column() {
        let mut buffer = TextBuffer::new();
        buffer.insert_char('é');
        buffer.insert_char('x');
        assert_eq!(buffer.cursor(), (0, 2));

        buffer.delete_before_cursor();
        buffer.delete_before_cursor();
        assert_eq!(buffer.to_text(), "");
    }
}
