//! Viewport: the visible rectangle of the buffer.
//!
//! The viewport maps buffer coordinates to screen cells. Its only mutable
//! state is the top-left offset `(row, col)`; the size is fixed at startup.
//!
//! Vertical scrolling is incremental: the offset moves by one line exactly
//! when the cursor has just stepped one line past an edge. Horizontal
//! scrolling pages: the column offset is recomputed from scratch and jumps
//! in fixed-width steps.
//!
//! A cursor can briefly sit outside the rectangle (for example after a Home
//! or End jump followed by a wheel scroll). Renderers must go through
//! [`Viewport::visible_cell`] rather than trusting [`Viewport::translate`].

use teditor_buffer::{Cursor, LineBuffer};

/// The visible window into a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    row: usize,
    col: usize,
    n_rows: usize,
    n_cols: usize,
}

impl Viewport {
    /// Creates a viewport at the buffer origin.
    ///
    /// # Panics
    /// Panics if either dimension is zero.
    pub fn new(n_rows: usize, n_cols: usize) -> Self {
        Self::with_offset(n_rows, n_cols, 0, 0)
    }

    /// Creates a viewport with an explicit top-left offset.
    pub fn with_offset(n_rows: usize, n_cols: usize, row: usize, col: usize) -> Self {
        assert!(n_rows > 0 && n_cols > 0, "viewport must be at least 1x1");
        Self {
            row,
            col,
            n_rows,
            n_cols,
        }
    }

    /// First visible buffer row.
    pub fn row(&self) -> usize {
        self.row
    }

    /// First visible buffer column.
    pub fn col(&self) -> usize {
        self.col
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Last visible buffer row.
    pub fn bottom(&self) -> usize {
        self.row + self.n_rows - 1
    }

    /// Scrolls up one line if the cursor just stepped above the top edge.
    pub fn scroll_up_if_needed(&mut self, cursor: &Cursor) {
        if self.row > 0 && cursor.row() == self.row - 1 {
            self.row -= 1;
        }
    }

    /// Scrolls down one line if the cursor just stepped below the bottom
    /// edge and the buffer has more lines.
    pub fn scroll_down_if_needed(&mut self, buffer: &LineBuffer, cursor: &Cursor) {
        if cursor.row() == self.bottom() + 1 && self.bottom() < buffer.bottom() {
            self.row += 1;
        }
    }

    /// Recomputes the column offset as a whole number of pages.
    ///
    /// A page is `n_cols - left_margin - right_margin` columns wide (at
    /// least one). The offset is the number of full pages the cursor has
    /// advanced past `left_margin`, times the page width.
    pub fn horizontal_scroll(&mut self, cursor: &Cursor, left_margin: usize, right_margin: usize) {
        let page = self
            .n_cols
            .saturating_sub(left_margin + right_margin)
            .max(1);
        let pages = cursor.col().saturating_sub(left_margin) / page;
        self.col = pages * page;
    }

    /// Sets the column offset directly (Home/End jumps).
    pub fn set_col(&mut self, col: usize) {
        self.col = col;
    }

    /// Moves the window up one line for a wheel notch.
    ///
    /// Returns false when already at the top.
    pub fn shift_up(&mut self) -> bool {
        if self.row > 0 {
            self.row -= 1;
            true
        } else {
            false
        }
    }

    /// Moves the window down one line for a wheel notch.
    ///
    /// Returns false when the last buffer line is already visible.
    pub fn shift_down(&mut self, buffer: &LineBuffer) -> bool {
        if self.bottom() < buffer.bottom() {
            self.row += 1;
            true
        } else {
            false
        }
    }

    /// Screen offset of the cursor relative to the top-left corner.
    ///
    /// The result may be negative or beyond the rectangle.
    pub fn translate(&self, cursor: &Cursor) -> (isize, isize) {
        (
            cursor.row() as isize - self.row as isize,
            cursor.col() as isize - self.col as isize,
        )
    }

    /// Screen cell of the cursor, or `None` when it is outside the viewport.
    pub fn visible_cell(&self, cursor: &Cursor) -> Option<(usize, usize)> {
        let (y, x) = self.translate(cursor);
        let y = usize::try_from(y).ok().filter(|y| *y < self.n_rows)?;
        let x = usize::try_from(x).ok().filter(|x| *x < self.n_cols)?;
        Some((y, x))
    }

    /// Range of buffer rows on screen, clipped to the buffer.
    pub fn visible_rows(&self, buffer: &LineBuffer) -> std::ops::Range<usize> {
        let end = (self.row + self.n_rows).min(buffer.len());
        self.row.min(end)..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer(n: usize) -> LineBuffer {
        LineBuffer::from_lines((0..n).map(|i| format!("line {i}")).collect())
    }

    #[test]
    fn test_bottom() {
        let viewport = Viewport::with_offset(10, 80, 3, 0);
        assert_eq!(viewport.bottom(), 12);
    }

    #[test]
    fn test_scroll_down_at_boundary_only() {
        let buffer = buffer(20);
        let mut viewport = Viewport::new(5, 80);

        viewport.scroll_down_if_needed(&buffer, &Cursor::new(4, 0));
        assert_eq!(viewport.row(), 0);

        viewport.scroll_down_if_needed(&buffer, &Cursor::new(5, 0));
        assert_eq!(viewport.row(), 1);

        // A jump of more than one row is not followed
        viewport.scroll_down_if_needed(&buffer, &Cursor::new(9, 0));
        assert_eq!(viewport.row(), 1);
    }

    #[test]
    fn test_scroll_down_stops_at_buffer_end() {
        let buffer = buffer(5);
        let mut viewport = Viewport::new(5, 80);
        viewport.scroll_down_if_needed(&buffer, &Cursor::new(5, 0));
        assert_eq!(viewport.row(), 0);
    }

    #[test]
    fn test_scroll_up_at_boundary_only() {
        let mut viewport = Viewport::with_offset(5, 80, 3, 0);

        viewport.scroll_up_if_needed(&Cursor::new(3, 0));
        assert_eq!(viewport.row(), 3);

        viewport.scroll_up_if_needed(&Cursor::new(2, 0));
        assert_eq!(viewport.row(), 2);

        let mut top = Viewport::new(5, 80);
        top.scroll_up_if_needed(&Cursor::new(0, 0));
        assert_eq!(top.row(), 0);
    }

    #[test]
    fn test_horizontal_scroll_pages() {
        // page width = 20 - 5 - 2 = 13
        let mut viewport = Viewport::new(5, 20);

        viewport.horizontal_scroll(&Cursor::new(0, 3), 5, 2);
        assert_eq!(viewport.col(), 0);

        viewport.horizontal_scroll(&Cursor::new(0, 17), 5, 2);
        assert_eq!(viewport.col(), 0);

        viewport.horizontal_scroll(&Cursor::new(0, 18), 5, 2);
        assert_eq!(viewport.col(), 13);

        viewport.horizontal_scroll(&Cursor::new(0, 31), 5, 2);
        assert_eq!(viewport.col(), 26);

        viewport.horizontal_scroll(&Cursor::new(0, 0), 5, 2);
        assert_eq!(viewport.col(), 0);
    }

    #[test]
    fn test_horizontal_scroll_is_idempotent() {
        let mut viewport = Viewport::with_offset(5, 20, 4, 0);
        let cursor = Cursor::new(6, 40);

        viewport.horizontal_scroll(&cursor, 5, 2);
        let first = (viewport.row(), viewport.col());
        viewport.horizontal_scroll(&cursor, 5, 2);
        assert_eq!((viewport.row(), viewport.col()), first);
    }

    #[test]
    fn test_horizontal_scroll_narrow_viewport() {
        let mut viewport = Viewport::new(5, 4);
        viewport.horizontal_scroll(&Cursor::new(0, 9), 5, 2);
        assert_eq!(viewport.col(), 4);
    }

    #[test]
    fn test_translate_and_visible_cell() {
        let viewport = Viewport::with_offset(5, 10, 2, 13);

        assert_eq!(viewport.translate(&Cursor::new(3, 15)), (1, 2));
        assert_eq!(viewport.visible_cell(&Cursor::new(3, 15)), Some((1, 2)));

        assert_eq!(viewport.translate(&Cursor::new(3, 0)), (1, -13));
        assert_eq!(viewport.visible_cell(&Cursor::new(3, 0)), None);
        assert_eq!(viewport.visible_cell(&Cursor::new(7, 15)), None);
        assert_eq!(viewport.visible_cell(&Cursor::new(3, 23)), None);
    }

    #[test]
    fn test_wheel_shifts() {
        let buffer = buffer(7);
        let mut viewport = Viewport::new(5, 10);

        assert!(!viewport.shift_up());
        assert!(viewport.shift_down(&buffer));
        assert!(viewport.shift_down(&buffer));
        assert!(!viewport.shift_down(&buffer));
        assert_eq!(viewport.row(), 2);
        assert!(viewport.shift_up());
        assert_eq!(viewport.row(), 1);
    }

    #[test]
    fn test_visible_rows_clipped_to_buffer() {
        let buffer = buffer(3);
        let viewport = Viewport::new(5, 10);
        assert_eq!(viewport.visible_rows(&buffer), 0..3);

        let scrolled = Viewport::with_offset(2, 10, 1, 0);
        assert_eq!(scrolled.visible_rows(&buffer), 1..3);
    }

    #[test]
    #[should_panic(expected = "at least 1x1")]
    fn test_zero_size_rejected() {
        Viewport::new(0, 10);
    }
}
