//! Frame composition and drawing.
//!
//! [`compose`] turns the session state into a [`Frame`]: the text of every
//! screen row split into colored fragments, the cursor cell and the status
//! bar. [`draw`] writes a frame to any `Write` through crossterm commands.
//!
//! ## Screen layout
//!
//! ```text
//! row 0 .. n_rows-1   buffer lines (viewport rows)
//! row n_rows          status bar, reverse video
//! ```
//!
//! A line longer than the viewport ends in `»`. On the cursor's line, when
//! the view is scrolled right, the line starts with `«` and shows the text
//! from just past the column offset.

use std::io::Write;

use crossterm::{
    cursor::MoveTo,
    queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use teditor_core::EditSession;
use teditor_syntax::{Highlighter, LineTokens, TokenClass};

use crate::theme::Theme;

/// A run of text drawn in one color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub class: TokenClass,
}

/// The highlighted cursor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorCell {
    pub row: usize,
    pub col: usize,
    /// Character under the cursor, or a space past the line end
    pub glyph: char,
}

/// Everything drawn for one state of the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Fragments per screen row, top to bottom
    pub rows: Vec<Vec<Fragment>>,
    pub cursor: Option<CursorCell>,
    pub status: String,
    pub status_row: usize,
}

impl Frame {
    /// Plain text of a screen row.
    pub fn row_text(&self, row: usize) -> String {
        self.rows
            .get(row)
            .map(|fragments| fragments.iter().map(|f| f.text.as_str()).collect())
            .unwrap_or_default()
    }
}

/// Builds the frame for the current session state.
///
/// Without a highlighter every line is a single default fragment.
pub fn compose(session: &EditSession, mut highlighter: Option<&mut Highlighter>) -> Frame {
    let buffer = session.buffer();
    let cursor = session.cursor();
    let viewport = session.viewport();
    let n_cols = viewport.n_cols();

    let rows = viewport
        .visible_rows(buffer)
        .map(|row| {
            let shifted = row == cursor.row() && viewport.col() > 0;
            let line = display_line(&buffer[row], shifted, viewport.col(), n_cols);
            let tokens = match highlighter.as_deref_mut() {
                Some(highlighter) => highlighter.highlight_line(&line),
                None => LineTokens::plain(&line),
            };
            clip(tokens, n_cols)
        })
        .collect();

    let cursor_cell = viewport.visible_cell(cursor).map(|(row, col)| CursorCell {
        row,
        col,
        glyph: buffer[cursor.row()].chars().nth(cursor.col()).unwrap_or(' '),
    });

    Frame {
        rows,
        cursor: cursor_cell,
        status: session
            .status_line()
            .chars()
            .take(n_cols.saturating_sub(1))
            .collect(),
        status_row: viewport.n_rows(),
    }
}

/// Applies the scroll marker and the overflow marker to one buffer line.
fn display_line(line: &str, shifted: bool, offset: usize, n_cols: usize) -> String {
    let line: String = if shifted {
        std::iter::once('«')
            .chain(line.chars().skip(offset + 1))
            .collect()
    } else {
        line.to_string()
    };

    if line.chars().count() > n_cols {
        line.chars()
            .take(n_cols.saturating_sub(1))
            .chain(std::iter::once('»'))
            .collect()
    } else {
        line
    }
}

/// Collects fragments, cutting off everything past `n_cols` characters.
fn clip(tokens: LineTokens<'_>, n_cols: usize) -> Vec<Fragment> {
    let mut fragments = Vec::new();
    let mut col = 0;

    for (text, class) in tokens {
        if col >= n_cols {
            break;
        }
        let text: String = text.chars().take(n_cols - col).collect();
        col += text.chars().count();
        fragments.push(Fragment { text, class });
    }
    fragments
}

/// Writes a frame to the terminal.
pub fn draw(frame: &Frame, theme: &Theme, out: &mut impl Write) -> std::io::Result<()> {
    queue!(out, Clear(ClearType::All))?;

    for (row, fragments) in frame.rows.iter().enumerate() {
        queue!(out, MoveTo(0, cell(row)))?;
        for fragment in fragments {
            queue!(
                out,
                SetForegroundColor(theme.color(fragment.class)),
                Print(&fragment.text)
            )?;
        }
    }
    queue!(out, ResetColor)?;

    if let Some(cursor) = frame.cursor {
        queue!(
            out,
            MoveTo(cell(cursor.col), cell(cursor.row)),
            SetAttribute(Attribute::Reverse),
            Print(cursor.glyph),
            SetAttribute(Attribute::NoReverse)
        )?;
    }

    queue!(
        out,
        MoveTo(0, cell(frame.status_row)),
        SetAttribute(Attribute::Reverse),
        Print(&frame.status),
        SetAttribute(Attribute::Reset)
    )?;

    out.flush()
}

fn cell(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
