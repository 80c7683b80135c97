//! Editor commands.
//!
//! A command is the resolved meaning of one input event. Key bindings
//! produce commands and `EditSession::apply` executes them, which keeps
//! key decoding and editing logic apart.

/// Built-in editor commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    // File commands
    Save,
    Quit,

    // Cursor movement
    MoveUp,
    MoveDown,
    MoveLeft,
    MoveRight,
    MoveToLineStart,
    MoveToLineEnd,

    // Edit commands
    Newline,
    DeleteForward,
    Backspace,
    Indent,
    InsertChar(char),

    // View
    ScrollUp,
    ScrollDown,
}

impl Command {
    /// Returns a stable name for logging.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Save => "file.save",
            Command::Quit => "app.quit",
            Command::MoveUp => "cursor.up",
            Command::MoveDown => "cursor.down",
            Command::MoveLeft => "cursor.left",
            Command::MoveRight => "cursor.right",
            Command::MoveToLineStart => "cursor.line_start",
            Command::MoveToLineEnd => "cursor.line_end",
            Command::Newline => "edit.newline",
            Command::DeleteForward => "edit.delete",
            Command::Backspace => "edit.backspace",
            Command::Indent => "edit.indent",
            Command::InsertChar(_) => "edit.insert",
            Command::ScrollUp => "view.scroll_up",
            Command::ScrollDown => "view.scroll_down",
        }
    }

    /// Parses a command name as produced by [`Command::name`].
    ///
    /// `edit.insert` has no fixed character and is not parseable.
    pub fn parse(name: &str) -> Option<Self> {
        let command = match name {
            "file.save" => Command::Save,
            "app.quit" => Command::Quit,
            "cursor.up" => Command::MoveUp,
            "cursor.down" => Command::MoveDown,
            "cursor.left" => Command::MoveLeft,
            "cursor.right" => Command::MoveRight,
            "cursor.line_start" => Command::MoveToLineStart,
            "cursor.line_end" => Command::MoveToLineEnd,
            "edit.newline" => Command::Newline,
            "edit.delete" => Command::DeleteForward,
            "edit.backspace" => Command::Backspace,
            "edit.indent" => Command::Indent,
            "view.scroll_up" => Command::ScrollUp,
            "view.scroll_down" => Command::ScrollDown,
            _ => return None,
        };
        Some(command)
    }

    /// Returns true if the command can change buffer contents.
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Command::Newline
                | Command::DeleteForward
                | Command::Backspace
                | Command::Indent
                | Command::InsertChar(_)
        )
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::InsertChar(c) => write!(f, "{}({:?})", self.name(), c),
            _ => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_round_trip() {
        for command in [Command::Save, Command::Backspace, Command::ScrollDown] {
            assert_eq!(Command::parse(command.name()), Some(command));
        }
        assert_eq!(Command::parse("edit.insert"), None);
    }

    #[test]
    fn test_display_insert() {
        assert_eq!(Command::InsertChar('x').to_string(), "edit.insert('x')");
    }

    #[test]
    fn test_is_edit() {
        assert!(Command::Indent.is_edit());
        assert!(!Command::MoveLeft.is_edit());
    }
}
