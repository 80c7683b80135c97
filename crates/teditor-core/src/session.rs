//! The edit session: one document, one cursor, one viewport.
//!
//! ## Per-keystroke contract
//!
//! `EditSession::handle` processes exactly one input event. Every branch
//! that moves the cursor also adjusts the viewport before returning, so
//! the state handed to the renderer is always reconciled.
//!
//! The session never draws. Frontends read it through `buffer()`,
//! `cursor()`, `viewport()` and `status_line()`.

use std::path::Path;

use teditor_buffer::{Cursor, LineBuffer, Position};

use crate::command::Command;
use crate::config::Config;
use crate::document::Document;
use crate::event::{InputEvent, ScrollDirection};
use crate::keymap::Keymap;
use crate::viewport::Viewport;
use crate::CoreResult;

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Render and wait for the next event
    Continue,
    /// Leave the editor without saving
    Quit,
}

/// The editor state for a single open file.
#[derive(Debug, Clone)]
pub struct EditSession {
    buffer: LineBuffer,
    cursor: Cursor,
    viewport: Viewport,
    document: Document,
    config: Config,
    keymap: Keymap,

    /// Set by a save and cleared by the next event, so the confirmation
    /// shows for exactly one render
    saved: bool,

    /// Message from the frontend, cleared by the next event like `saved`
    notice: Option<String>,
}

impl EditSession {
    /// Opens `path` in a viewport of `n_rows` x `n_cols` cells.
    pub fn open(
        path: impl AsRef<Path>,
        n_rows: usize,
        n_cols: usize,
        config: Config,
    ) -> CoreResult<Self> {
        let (document, buffer) = Document::load(path)?;
        Ok(Self::new(
            document,
            buffer,
            Viewport::new(n_rows, n_cols),
            config,
        ))
    }

    /// Creates a session over an existing buffer, cursor at the origin.
    pub fn new(document: Document, buffer: LineBuffer, viewport: Viewport, config: Config) -> Self {
        Self {
            buffer,
            cursor: Cursor::at_start(),
            viewport,
            document,
            config,
            keymap: Keymap::new(),
            saved: false,
            notice: None,
        }
    }

    // ==================== Read-only View ====================

    pub fn buffer(&self) -> &LineBuffer {
        &self.buffer
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// True for the single render following a successful save.
    pub fn is_saved(&self) -> bool {
        self.saved
    }

    /// Shows `message` on the status bar until the next event.
    pub fn report(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
    }

    /// The text of the status bar.
    pub fn status_line(&self) -> String {
        let hint = |command: Command, label: &str| {
            self.keymap
                .key_for(command)
                .map(|key| format!("{key}: {label}"))
                .unwrap_or_default()
        };

        let mut status = format!(
            "<< Teditor >>   File: {} | {} | {}  {}",
            self.document.name(),
            self.cursor.position(),
            hint(Command::Save, "Save"),
            hint(Command::Quit, "Quit"),
        );
        if self.saved {
            status.push_str("   File Saved");
        }
        if let Some(notice) = &self.notice {
            status.push_str("   ");
            status.push_str(notice);
        }
        status
    }

    // ==================== Event Handling ====================

    /// Processes one input event.
    ///
    /// Events with no meaning (unbound chords) are ignored. A failed save
    /// is returned as an error and leaves the buffer untouched; the caller
    /// decides whether to `report` it and carry on.
    pub fn handle(&mut self, event: InputEvent) -> CoreResult<Control> {
        self.saved = false;
        self.notice = None;

        let command = match event {
            InputEvent::Key(key) => match self.keymap.resolve(&key) {
                Some(command) => command,
                None => {
                    tracing::trace!(%key, "Ignoring unbound key");
                    return Ok(Control::Continue);
                }
            },
            InputEvent::Scroll(ScrollDirection::Up) => Command::ScrollUp,
            InputEvent::Scroll(ScrollDirection::Down) => Command::ScrollDown,
        };

        self.apply(command)
    }

    /// Executes a command against the session.
    pub fn apply(&mut self, command: Command) -> CoreResult<Control> {
        tracing::debug!(%command, "Applying command");

        match command {
            Command::Quit => {
                if self.buffer.is_modified() {
                    tracing::warn!(
                        path = %self.document.path().display(),
                        "Quitting with unsaved changes"
                    );
                }
                return Ok(Control::Quit);
            }
            Command::Save => self.save()?,

            Command::MoveLeft => self.move_left(),
            Command::MoveRight => self.move_right(),
            Command::MoveUp => self.move_up(),
            Command::MoveDown => self.move_down(),
            Command::MoveToLineStart => self.move_to_line_start(),
            Command::MoveToLineEnd => self.move_to_line_end(),

            Command::Newline => {
                self.buffer.split(&self.cursor);
                self.move_right();
            }
            Command::DeleteForward => self.buffer.delete(&self.cursor),
            Command::Backspace => {
                if self.cursor.position() > Position::ZERO {
                    self.move_left();
                    self.buffer.delete(&self.cursor);
                }
            }
            Command::Indent => {
                let indent = self.config.indent();
                self.insert_and_advance(&indent, self.config.tab_width);
            }
            Command::InsertChar(c) => match self.config.closing_pair(c) {
                Some(close) => {
                    let pair: String = [c, close].into_iter().collect();
                    self.insert_and_advance(&pair, 1);
                }
                None => {
                    let mut utf8 = [0u8; 4];
                    self.insert_and_advance(c.encode_utf8(&mut utf8), 1);
                }
            },

            Command::ScrollUp => self.wheel(ScrollDirection::Up),
            Command::ScrollDown => self.wheel(ScrollDirection::Down),
        }

        if command.is_edit() {
            tracing::trace!(lines = self.buffer.len(), cursor = %self.cursor.position(), "Buffer edited");
        }
        Ok(Control::Continue)
    }

    // ==================== File ====================

    fn save(&mut self) -> CoreResult<()> {
        self.document.save(&self.buffer)?;
        self.buffer.mark_saved();
        self.saved = true;
        Ok(())
    }

    // ==================== Motion ====================

    fn scroll_horizontally(&mut self) {
        self.viewport.horizontal_scroll(
            &self.cursor,
            self.config.left_margin,
            self.config.right_margin,
        );
    }

    fn move_left(&mut self) {
        self.cursor.left(&self.buffer);
        self.viewport.scroll_up_if_needed(&self.cursor);
        self.scroll_horizontally();
    }

    fn move_right(&mut self) {
        self.cursor.right(&self.buffer);
        self.viewport.scroll_down_if_needed(&self.buffer, &self.cursor);
        self.scroll_horizontally();
    }

    fn move_up(&mut self) {
        self.cursor.up(&self.buffer);
        self.viewport.scroll_up_if_needed(&self.cursor);
        self.scroll_horizontally();
    }

    fn move_down(&mut self) {
        self.cursor.down(&self.buffer);
        self.viewport.scroll_down_if_needed(&self.buffer, &self.cursor);
        self.scroll_horizontally();
    }

    fn move_to_line_start(&mut self) {
        self.cursor.set_col(0);
        self.viewport.set_col(0);
    }

    fn move_to_line_end(&mut self) {
        let len = self.buffer[self.cursor.row()].chars().count();
        self.cursor.set_col(len);
        // Show the line end against the right edge
        let offset = (len + 1).saturating_sub(self.viewport.n_cols());
        self.viewport.set_col(offset);
    }

    /// Inserts `text` at the cursor and steps right `steps` times.
    fn insert_and_advance(&mut self, text: &str, steps: usize) {
        self.buffer.insert(&self.cursor, text);
        for _ in 0..steps {
            self.move_right();
        }
    }

    /// Shifts the viewport and cursor together by up to `wheel_step` lines.
    fn wheel(&mut self, direction: ScrollDirection) {
        let start = self.cursor.position();
        for _ in 0..self.config.wheel_step {
            match direction {
                ScrollDirection::Up => {
                    if self.viewport.shift_up() {
                        self.cursor.set_row(self.cursor.row().saturating_sub(1));
                    }
                }
                ScrollDirection::Down => {
                    if self.viewport.shift_down(&self.buffer) {
                        let row = (self.cursor.row() + 1).min(self.buffer.bottom());
                        self.cursor.set_row(row);
                    }
                }
            }
        }

        self.cursor.clamp_to_hint(&self.buffer);
        if self.cursor.position() != start {
            self.scroll_horizontally();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::{Key, KeyPress, Modifiers};
    use crate::CoreError;

    fn session(lines: &[&str]) -> EditSession {
        session_sized(lines, 10, 40)
    }

    fn session_sized(lines: &[&str], n_rows: usize, n_cols: usize) -> EditSession {
        let buffer = LineBuffer::from_lines(lines.iter().map(|s| s.to_string()).collect());
        EditSession::new(
            Document::new("test.txt"),
            buffer,
            Viewport::new(n_rows, n_cols),
            Config::default(),
        )
    }

    fn at(mut session: EditSession, row: usize, col: usize) -> EditSession {
        session.cursor = Cursor::new(row, col);
        session
    }

    fn press(session: &mut EditSession, key: Key) -> Control {
        session.handle(KeyPress::plain(key).into()).unwrap()
    }

    fn type_char(session: &mut EditSession, c: char) {
        press(session, Key::Char(c));
    }

    fn lines(session: &EditSession) -> Vec<&str> {
        session.buffer().lines().collect()
    }

    #[test]
    fn test_enter_at_end_of_line() {
        let mut s = at(session(&["hello", "world"]), 0, 5);
        press(&mut s, Key::Enter);
        assert_eq!(lines(&s), vec!["hello", "", "world"]);
        assert_eq!(s.cursor().position(), Position::new(1, 0));
    }

    #[test]
    fn test_enter_splits_line() {
        let mut s = at(session(&["hello"]), 0, 2);
        press(&mut s, Key::Enter);
        assert_eq!(lines(&s), vec!["he", "llo"]);
        assert_eq!(s.cursor().position(), Position::new(1, 0));
    }

    #[test]
    fn test_backspace_twice() {
        let mut s = at(session(&["ab"]), 0, 2);
        press(&mut s, Key::Backspace);
        press(&mut s, Key::Backspace);
        assert_eq!(lines(&s), vec![""]);
        assert_eq!(s.cursor().position(), Position::ZERO);
    }

    #[test]
    fn test_backspace_merges_with_previous_line() {
        let mut s = at(session(&["a", "b"]), 1, 0);
        press(&mut s, Key::Backspace);
        assert_eq!(lines(&s), vec!["ab"]);
        assert_eq!(s.cursor().position(), Position::new(0, 1));
    }

    #[test]
    fn test_backspace_at_origin_is_noop() {
        let mut s = session(&["ab"]);
        press(&mut s, Key::Backspace);
        assert_eq!(lines(&s), vec!["ab"]);
        assert!(!s.buffer().is_modified());
    }

    #[test]
    fn test_auto_pair() {
        let mut s = session(&["x"]);
        type_char(&mut s, '(');
        assert_eq!(lines(&s), vec!["()x"]);
        assert_eq!(s.cursor().position(), Position::new(0, 1));

        type_char(&mut s, '"');
        assert_eq!(lines(&s), vec!["(\"\")x"]);
        assert_eq!(s.cursor().position(), Position::new(0, 2));
    }

    #[test]
    fn test_typing_plain_characters() {
        let mut s = session(&[""]);
        for c in "héllo".chars() {
            type_char(&mut s, c);
        }
        assert_eq!(lines(&s), vec!["héllo"]);
        assert_eq!(s.cursor().position(), Position::new(0, 5));
    }

    #[test]
    fn test_tab_inserts_spaces() {
        let mut s = at(session(&["x"]), 0, 1);
        press(&mut s, Key::Tab);
        assert_eq!(lines(&s), vec!["x    "]);
        assert_eq!(s.cursor().position(), Position::new(0, 5));
    }

    #[test]
    fn test_delete_forward_joins_lines() {
        let mut s = at(session(&["ab", "cd"]), 0, 2);
        press(&mut s, Key::Delete);
        assert_eq!(lines(&s), vec!["abcd"]);
        assert_eq!(s.cursor().position(), Position::new(0, 2));

        s.handle(KeyPress::new(Key::Char('d'), Modifiers::CTRL).into())
            .unwrap();
        assert_eq!(lines(&s), vec!["abd"]);
    }

    #[test]
    fn test_home_and_end() {
        let long = "x".repeat(100);
        let mut s = session_sized(&[&long], 5, 20);

        press(&mut s, Key::End);
        assert_eq!(s.cursor().position(), Position::new(0, 100));
        assert_eq!(s.cursor().col_hint(), 100);
        assert_eq!(s.viewport().col(), 81);
        assert_eq!(s.viewport().visible_cell(s.cursor()), Some((0, 19)));

        press(&mut s, Key::Home);
        assert_eq!(s.cursor().position(), Position::ZERO);
        assert_eq!(s.viewport().col(), 0);
    }

    #[test]
    fn test_end_on_short_line_keeps_offset_zero() {
        let mut s = session(&["short"]);
        press(&mut s, Key::End);
        assert_eq!(s.viewport().col(), 0);
    }

    #[test]
    fn test_arrow_down_scrolls_viewport() {
        let rows: Vec<String> = (0..10).map(|i| i.to_string()).collect();
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let mut s = session_sized(&refs, 3, 20);

        press(&mut s, Key::Down);
        press(&mut s, Key::Down);
        assert_eq!(s.viewport().row(), 0);

        press(&mut s, Key::Down);
        assert_eq!(s.cursor().row(), 3);
        assert_eq!(s.viewport().row(), 1);

        press(&mut s, Key::Up);
        press(&mut s, Key::Up);
        press(&mut s, Key::Up);
        assert_eq!(s.cursor().row(), 0);
        assert_eq!(s.viewport().row(), 0);
    }

    #[test]
    fn test_arrow_right_across_line_scrolls_viewport() {
        let mut s = at(session_sized(&["ab", "cd", "ef"], 2, 20), 1, 2);
        press(&mut s, Key::Right);
        assert_eq!(s.cursor().position(), Position::new(2, 0));
        assert_eq!(s.viewport().row(), 1);

        press(&mut s, Key::Left);
        press(&mut s, Key::Left);
        press(&mut s, Key::Left);
        press(&mut s, Key::Left);
        assert_eq!(s.cursor().position(), Position::new(0, 2));
        assert_eq!(s.viewport().row(), 0);
    }

    #[test]
    fn test_typing_pages_horizontally() {
        // page width = 20 - 5 - 2 = 13
        let mut s = session_sized(&[""], 5, 20);
        for _ in 0..18 {
            type_char(&mut s, 'a');
        }
        assert_eq!(s.cursor().col(), 18);
        assert_eq!(s.viewport().col(), 13);
    }

    #[test]
    fn test_zero_margins_page_by_full_width() {
        let mut s = EditSession::new(
            Document::new("test.txt"),
            LineBuffer::from(""),
            Viewport::new(5, 10),
            Config::default().with_margins(0, 0),
        );
        for _ in 0..9 {
            type_char(&mut s, 'a');
        }
        assert_eq!(s.viewport().col(), 0);
        type_char(&mut s, 'a');
        assert_eq!(s.cursor().col(), 10);
        assert_eq!(s.viewport().col(), 10);
    }

    #[test]
    fn test_vertical_motion_restores_column() {
        let mut s = at(session(&["abcdefgh", "ab", "abcdefgh"]), 0, 6);
        press(&mut s, Key::Down);
        assert_eq!(s.cursor().col(), 2);
        press(&mut s, Key::Down);
        assert_eq!(s.cursor().col(), 6);
        press(&mut s, Key::Up);
        press(&mut s, Key::Up);
        assert_eq!(s.cursor().position(), Position::new(0, 6));
    }

    #[test]
    fn test_wheel_scrolls_viewport_and_cursor() {
        let rows: Vec<String> = (0..20).map(|i| format!("line {i}")).collect();
        let refs: Vec<&str> = rows.iter().map(String::as_str).collect();
        let mut s = at(session_sized(&refs, 5, 40), 2, 3);

        s.handle(InputEvent::Scroll(ScrollDirection::Down)).unwrap();
        assert_eq!(s.viewport().row(), 4);
        assert_eq!(s.cursor().position(), Position::new(6, 3));

        s.handle(InputEvent::Scroll(ScrollDirection::Up)).unwrap();
        s.handle(InputEvent::Scroll(ScrollDirection::Up)).unwrap();
        assert_eq!(s.viewport().row(), 0);
        assert_eq!(s.cursor().position(), Position::new(2, 3));
    }

    #[test]
    fn test_wheel_step_is_configurable() {
        let rows: Vec<String> = (0..20).map(|i| format!("line {i}")).collect();
        let mut s = EditSession::new(
            Document::new("test.txt"),
            LineBuffer::from(rows),
            Viewport::new(5, 40),
            Config::default().with_wheel_step(1),
        );

        s.handle(InputEvent::Scroll(ScrollDirection::Down)).unwrap();
        assert_eq!(s.viewport().row(), 1);
        assert_eq!(s.cursor().row(), 1);
    }

    #[test]
    fn test_wheel_stops_at_buffer_end() {
        let mut s = session_sized(&["a", "b", "c", "d", "e", "f"], 5, 40);
        s.handle(InputEvent::Scroll(ScrollDirection::Down)).unwrap();
        assert_eq!(s.viewport().row(), 1);
        assert_eq!(s.cursor().row(), 1);
    }

    #[test]
    fn test_wheel_clamps_column_to_shorter_line() {
        let mut s = at(session_sized(&["long line", "x", "y", "z", "w", "v"], 1, 40), 0, 8);
        s.handle(InputEvent::Scroll(ScrollDirection::Down)).unwrap();
        assert_eq!(s.cursor().row(), 4);
        assert_eq!(s.cursor().col(), 1);
        assert_eq!(s.cursor().col_hint(), 8);
    }

    #[test]
    fn test_unbound_chord_is_ignored() {
        let mut s = session(&["ab"]);
        let control = s
            .handle(KeyPress::new(Key::Char('x'), Modifiers::CTRL).into())
            .unwrap();
        assert_eq!(control, Control::Continue);
        assert_eq!(lines(&s), vec!["ab"]);
    }

    #[test]
    fn test_quit() {
        let mut s = session(&["ab"]);
        let control = s
            .handle(KeyPress::new(Key::Char('q'), Modifiers::CTRL).into())
            .unwrap();
        assert_eq!(control, Control::Quit);
    }

    #[test]
    fn test_status_line() {
        let s = at(session(&["abc"]), 0, 2);
        assert_eq!(
            s.status_line(),
            "<< Teditor >>   File: test.txt | Ln 1, Col 3 | Ctrl+S: Save  Ctrl+Q: Quit"
        );
    }

    #[test]
    fn test_save_flag_lasts_one_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, "ab").unwrap();

        let mut s = EditSession::open(&path, 5, 40, Config::default()).unwrap();
        type_char(&mut s, 'x');
        assert!(s.buffer().is_modified());

        s.handle(KeyPress::new(Key::Char('s'), Modifiers::CTRL).into())
            .unwrap();
        assert!(s.is_saved());
        assert!(!s.buffer().is_modified());
        assert!(s.status_line().ends_with("   File Saved"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "xab");

        press(&mut s, Key::Right);
        assert!(!s.is_saved());
    }

    #[test]
    fn test_save_failure_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let mut s = EditSession::new(
            Document::new(dir.path().join("missing-dir").join("doc.txt")),
            LineBuffer::from_text("ab"),
            Viewport::new(5, 40),
            Config::default(),
        );

        let err = s
            .handle(KeyPress::new(Key::Char('s'), Modifiers::CTRL).into())
            .unwrap_err();
        assert!(matches!(err, CoreError::Save { .. }));
        assert!(!s.is_saved());
        assert_eq!(lines(&s), vec!["ab"]);
    }

    #[test]
    fn test_report_lasts_one_event() {
        let mut s = session(&["ab"]);
        s.report("Could not save 'test.txt'");
        assert!(s.status_line().ends_with("Ctrl+Q: Quit   Could not save 'test.txt'"));

        press(&mut s, Key::Right);
        assert!(!s.status_line().contains("Could not save"));
    }

    #[test]
    fn test_open_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = EditSession::open(dir.path().join("nope.rs"), 5, 40, Config::default())
            .unwrap_err();
        assert!(matches!(err, CoreError::FileNotFound(_)));
    }
}
