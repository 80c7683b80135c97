//! Line-oriented text buffer.
//!
//! ## Why a vector of lines?
//!
//! Every operation the editor performs is addressed by `(row, col)`:
//! - **Row access** is a plain index, so rendering a viewport slice is O(rows)
//! - **Edits** only ever touch one or two adjacent lines
//! - **Saving** is a single join
//!
//! ## Invariant
//!
//! The buffer is never empty. An empty file still yields one empty line,
//! because cursor rows index lines directly.

use std::ops::Index;

use crate::{BufferError, BufferResult, Cursor};

/// An ordered sequence of text lines with no embedded line breaks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineBuffer {
    /// The document, one entry per line
    lines: Vec<String>,

    /// Whether the buffer changed since it was loaded or last saved
    modified: bool,
}

impl LineBuffer {
    /// Creates a buffer holding a single empty line.
    ///
    /// # Example
    /// ```
    /// use teditor_buffer::LineBuffer;
    ///
    /// let buffer = LineBuffer::new();
    /// assert_eq!(buffer.len(), 1);
    /// ```
    pub fn new() -> Self {
        Self::from_lines(Vec::new())
    }

    /// Creates a buffer from already-split lines.
    ///
    /// An empty vector becomes a buffer with one empty line.
    pub fn from_lines(mut lines: Vec<String>) -> Self {
        if lines.is_empty() {
            lines.push(String::new());
        }
        Self {
            lines,
            modified: false,
        }
    }

    /// Creates a buffer by splitting text on line breaks (`\n` or `\r\n`).
    ///
    /// A trailing line break does not produce an extra empty line.
    pub fn from_text(text: &str) -> Self {
        Self::from_lines(text.lines().map(str::to_owned).collect())
    }

    // ==================== Text Access ====================

    /// Returns the line at `index`.
    pub fn line(&self, index: usize) -> BufferResult<&str> {
        self.lines
            .get(index)
            .map(String::as_str)
            .ok_or(BufferError::IndexOutOfRange {
                index,
                len: self.lines.len(),
            })
    }

    /// Returns the length of the line at `index` in characters.
    pub fn line_len(&self, index: usize) -> BufferResult<usize> {
        self.line(index).map(|line| line.chars().count())
    }

    /// Iterates over all lines in order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(String::as_str)
    }

    /// Returns the whole document with lines joined by a single `\n`.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    // ==================== Measurements ====================

    /// Returns the number of lines.
    #[inline]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Always false once constructed; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Index of the last line.
    #[inline]
    pub fn bottom(&self) -> usize {
        self.lines.len() - 1
    }

    /// Length in characters of a line the caller knows exists.
    ///
    /// # Panics
    /// Panics if `row` is out of range.
    pub(crate) fn char_len(&self, row: usize) -> usize {
        self[row].chars().count()
    }

    // ==================== Mutations ====================

    /// Inserts `text` at the cursor: `line[..col] + text + line[col..]`.
    ///
    /// When the cursor row is one past the last line, a new line is
    /// appended and the text becomes its content.
    ///
    /// # Panics
    /// Panics if `text` contains a line break; use [`LineBuffer::split`]
    /// for that.
    pub fn insert(&mut self, cursor: &Cursor, text: &str) {
        assert!(
            !text.contains(['\n', '\r']),
            "insert text must not contain a line break"
        );

        let row = cursor.row();
        if row >= self.lines.len() {
            self.lines.push(text.to_owned());
        } else {
            let line = &mut self.lines[row];
            let at = byte_offset(line, cursor.col());
            line.insert_str(at, text);
        }
        self.modified = true;
    }

    /// Splits the cursor's line in two at the cursor column.
    ///
    /// The prefix stays at `row`, the suffix becomes line `row + 1`.
    ///
    /// # Panics
    /// Panics if the cursor row does not exist.
    pub fn split(&mut self, cursor: &Cursor) {
        let row = cursor.row();
        assert!(
            row < self.lines.len(),
            "split at row {row} outside buffer of {} lines",
            self.lines.len()
        );

        let line = &mut self.lines[row];
        let at = byte_offset(line, cursor.col());
        let suffix = line.split_off(at);
        self.lines.insert(row + 1, suffix);
        self.modified = true;
    }

    /// Deletes forward from the cursor.
    ///
    /// - Removes the character at `col` when there is one.
    /// - At the end of a line that is not the last, joins the next line
    ///   onto it (even when the next line is empty).
    /// - At the end of the last line, does nothing.
    /// - A stale cursor (row or column out of range) does nothing.
    pub fn delete(&mut self, cursor: &Cursor) {
        let (row, col) = (cursor.row(), cursor.col());
        if row > self.bottom() {
            return;
        }
        let len = self.char_len(row);
        if col > len {
            return;
        }

        if col < len {
            let line = &mut self.lines[row];
            let at = byte_offset(line, col);
            line.remove(at);
        } else if row < self.bottom() {
            let next = self.lines.remove(row + 1);
            self.lines[row].push_str(&next);
        } else {
            return;
        }
        self.modified = true;
    }

    // ==================== State Queries ====================

    /// Returns true if the buffer changed since load or the last save.
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Marks the buffer as matching what is on disk.
    pub fn mark_saved(&mut self) {
        self.modified = false;
    }
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for LineBuffer {
    type Output = str;

    fn index(&self, row: usize) -> &str {
        &self.lines[row]
    }
}

impl From<&str> for LineBuffer {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}

impl From<Vec<String>> for LineBuffer {
    fn from(lines: Vec<String>) -> Self {
        Self::from_lines(lines)
    }
}

/// Byte offset of character column `col`, or the line length past the end.
fn byte_offset(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map_or(line.len(), |(offset, _)| offset)
}
