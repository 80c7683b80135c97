//! Cursor and position types for text navigation.
//!
//! ## Column hint
//!
//! The cursor keeps two columns:
//! - `col`: where the cursor actually is
//! - `col_hint`: the column the user last chose explicitly
//!
//! Every explicit column write (`set_col`, horizontal motion, edits) sets
//! both. Vertical motion only reads the hint and derives
//! `col = min(col_hint, line_len)`, so walking through a short line and back
//! onto a long one restores the original column.

use crate::LineBuffer;

/// A position in the text buffer (row and column).
///
/// Both row and column are 0-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    /// Line index (0-indexed)
    pub row: usize,
    /// Column (0-indexed, in characters not bytes)
    pub col: usize,
}

impl Position {
    /// Creates a new position.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Position at the start of the document.
    pub const ZERO: Position = Position { row: 0, col: 0 };
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.row.cmp(&other.row) {
            std::cmp::Ordering::Equal => self.col.cmp(&other.col),
            other => other,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Display as 1-indexed for user-facing output
        write!(f, "Ln {}, Col {}", self.row + 1, self.col + 1)
    }
}

/// The editing cursor.
///
/// Invariant (maintained by the motion methods): `row <= buffer.bottom()`
/// and `col <= len(buffer[row])`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    row: usize,
    col: usize,
    col_hint: usize,
}

impl Cursor {
    /// Creates a cursor whose hint equals its column.
    pub fn new(row: usize, col: usize) -> Self {
        Self::with_hint(row, col, col)
    }

    /// Creates a cursor with an explicit column hint.
    pub fn with_hint(row: usize, col: usize, col_hint: usize) -> Self {
        Self { row, col, col_hint }
    }

    /// Creates a cursor at row 0, column 0.
    pub fn at_start() -> Self {
        Self::default()
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn col_hint(&self) -> usize {
        self.col_hint
    }

    /// Returns the cursor as a plain position.
    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    /// Sets the column explicitly; the hint follows.
    pub fn set_col(&mut self, col: usize) {
        self.col = col;
        self.col_hint = col;
    }

    /// Sets the row without touching either column.
    ///
    /// Callers must follow up with [`Cursor::clamp_to_hint`] if the new
    /// line may be shorter than `col`.
    pub fn set_row(&mut self, row: usize) {
        self.row = row;
    }

    /// Re-derives `col` from the hint for the current line.
    pub fn clamp_to_hint(&mut self, buffer: &LineBuffer) {
        self.col = self.col_hint.min(buffer.char_len(self.row));
    }

    /// Moves up one line, keeping the hint.
    pub fn up(&mut self, buffer: &LineBuffer) {
        if self.row > 0 {
            self.row -= 1;
            self.clamp_to_hint(buffer);
        }
    }

    /// Moves down one line, keeping the hint.
    pub fn down(&mut self, buffer: &LineBuffer) {
        if self.row < buffer.bottom() {
            self.row += 1;
            self.clamp_to_hint(buffer);
        }
    }

    /// Moves left one character, wrapping to the end of the previous line.
    pub fn left(&mut self, buffer: &LineBuffer) {
        if self.col > 0 {
            self.set_col(self.col - 1);
        } else if self.row > 0 {
            self.row -= 1;
            self.set_col(buffer.char_len(self.row));
        }
    }

    /// Moves right one character, wrapping to the start of the next line.
    pub fn right(&mut self, buffer: &LineBuffer) {
        if self.col < buffer.char_len(self.row) {
            self.set_col(self.col + 1);
        } else if self.row < buffer.bottom() {
            self.row += 1;
            self.set_col(0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(lines: &[&str]) -> LineBuffer {
        LineBuffer::from_lines(lines.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_position_ordering() {
        let p1 = Position::new(1, 5);
        let p2 = Position::new(2, 3);
        let p3 = Position::new(1, 10);

        assert!(p1 < p2);
        assert!(p1 < p3);
        assert!(p2 > p3);
        assert!(Position::new(0, 1) > Position::ZERO);
    }

    #[test]
    fn test_position_display_is_one_based() {
        assert_eq!(Position::new(0, 4).to_string(), "Ln 1, Col 5");
    }

    #[test]
    fn test_set_col_updates_hint() {
        let mut cursor = Cursor::with_hint(0, 1, 7);
        cursor.set_col(3);
        assert_eq!(cursor.col(), 3);
        assert_eq!(cursor.col_hint(), 3);
    }

    #[test]
    fn test_vertical_motion_keeps_hint() {
        let buffer = buffer(&["a long line", "ab", "another long line"]);
        let mut cursor = Cursor::new(0, 8);

        cursor.down(&buffer);
        assert_eq!(cursor.position(), Position::new(1, 2));
        assert_eq!(cursor.col_hint(), 8);

        cursor.down(&buffer);
        assert_eq!(cursor.position(), Position::new(2, 8));

        cursor.up(&buffer);
        cursor.up(&buffer);
        assert_eq!(cursor.position(), Position::new(0, 8));
    }

    #[test]
    fn test_vertical_motion_stops_at_edges() {
        let buffer = buffer(&["ab", "cd"]);
        let mut cursor = Cursor::new(0, 1);
        cursor.up(&buffer);
        assert_eq!(cursor.position(), Position::new(0, 1));

        cursor.down(&buffer);
        cursor.down(&buffer);
        assert_eq!(cursor.position(), Position::new(1, 1));
    }

    #[test]
    fn test_left_wraps_to_previous_line_end() {
        let buffer = buffer(&["abc", "de"]);
        let mut cursor = Cursor::new(1, 0);
        cursor.left(&buffer);
        assert_eq!(cursor.position(), Position::new(0, 3));
        assert_eq!(cursor.col_hint(), 3);
    }

    #[test]
    fn test_left_at_origin_stays() {
        let buffer = buffer(&["abc"]);
        let mut cursor = Cursor::at_start();
        cursor.left(&buffer);
        assert_eq!(cursor.position(), Position::ZERO);
    }

    #[test]
    fn test_right_wraps_to_next_line_start() {
        let buffer = buffer(&["ab", "cd"]);
        let mut cursor = Cursor::new(0, 2);
        cursor.right(&buffer);
        assert_eq!(cursor.position(), Position::new(1, 0));
    }

    #[test]
    fn test_right_at_end_of_buffer_stays() {
        let buffer = buffer(&["ab", "cd"]);
        let mut cursor = Cursor::new(1, 2);
        cursor.right(&buffer);
        assert_eq!(cursor.position(), Position::new(1, 2));
    }

    #[test]
    fn test_horizontal_motion_resets_hint() {
        let buffer = buffer(&["abcdef", "ab"]);
        let mut cursor = Cursor::new(0, 6);
        cursor.down(&buffer);
        cursor.left(&buffer);
        assert_eq!(cursor.col_hint(), 1);

        cursor.up(&buffer);
        assert_eq!(cursor.position(), Position::new(0, 1));
    }

    #[test]
    fn test_clamp_to_hint_after_row_jump() {
        let buffer = buffer(&["abcdef", "", "abcdefgh"]);
        let mut cursor = Cursor::new(0, 5);
        cursor.set_row(1);
        cursor.clamp_to_hint(&buffer);
        assert_eq!(cursor.col(), 0);

        cursor.set_row(2);
        cursor.clamp_to_hint(&buffer);
        assert_eq!(cursor.col(), 5);
    }
}
