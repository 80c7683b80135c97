//! Keyboard mapping.
//!
//! Bindings are exact `KeyPress -> Command` pairs. A key with no binding
//! falls back to text insertion when it is a plain printable character,
//! and is ignored otherwise.

use crate::command::Command;
use std::collections::HashMap;

/// Keyboard modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl Modifiers {
    /// No modifiers pressed.
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
    };

    /// Ctrl modifier.
    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        alt: false,
        shift: false,
    };

    /// Shift modifier.
    pub const SHIFT: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: true,
    };

    /// Alt modifier.
    pub const ALT: Modifiers = Modifiers {
        ctrl: false,
        alt: true,
        shift: false,
    };

    /// Returns true if no modifiers are pressed.
    pub fn is_empty(&self) -> bool {
        !self.ctrl && !self.alt && !self.shift
    }

    /// Parses modifiers from a string like "ctrl+shift".
    pub fn parse(s: &str) -> Self {
        let mut mods = Modifiers::NONE;
        let lower = s.to_lowercase();
        if lower.contains("ctrl") || lower.contains("control") {
            mods.ctrl = true;
        }
        if lower.contains("alt") || lower.contains("option") {
            mods.alt = true;
        }
        if lower.contains("shift") {
            mods.shift = true;
        }
        mods
    }
}

impl std::fmt::Display for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.alt {
            parts.push("Alt");
        }
        if self.shift {
            parts.push("Shift");
        }
        write!(f, "{}", parts.join("+"))
    }
}

/// A key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    Backspace,
    Delete,
    Escape,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
}

impl Key {
    /// Parses a key from a string.
    pub fn parse(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        match lower.as_str() {
            "enter" | "return" => Some(Key::Enter),
            "tab" => Some(Key::Tab),
            "backspace" | "bs" => Some(Key::Backspace),
            "delete" | "del" => Some(Key::Delete),
            "escape" | "esc" => Some(Key::Escape),
            "up" => Some(Key::Up),
            "down" => Some(Key::Down),
            "left" => Some(Key::Left),
            "right" => Some(Key::Right),
            "home" => Some(Key::Home),
            "end" => Some(Key::End),
            "space" => Some(Key::Char(' ')),
            _ => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(Key::Char(c)),
                    _ => None,
                }
            }
        }
    }
}

impl std::fmt::Display for Key {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Key::Char(' ') => write!(f, "Space"),
            Key::Char(c) => write!(f, "{}", c.to_uppercase()),
            Key::Enter => write!(f, "Enter"),
            Key::Tab => write!(f, "Tab"),
            Key::Backspace => write!(f, "Backspace"),
            Key::Delete => write!(f, "Delete"),
            Key::Escape => write!(f, "Escape"),
            Key::Up => write!(f, "Up"),
            Key::Down => write!(f, "Down"),
            Key::Left => write!(f, "Left"),
            Key::Right => write!(f, "Right"),
            Key::Home => write!(f, "Home"),
            Key::End => write!(f, "End"),
        }
    }
}

/// A key press event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub key: Key,
    pub modifiers: Modifiers,
}

impl KeyPress {
    /// Creates a new key press.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// A key press without modifiers.
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }

    /// Parses a key binding string like "ctrl+s" or "home".
    pub fn parse(s: &str) -> Option<Self> {
        // "ctrl++" binds the plus key itself
        let (mod_str, key_str) = match s.strip_suffix("++") {
            Some(mods) => (mods, "+"),
            None => match s.rsplit_once('+') {
                Some((mods, key)) => (mods, key),
                None => ("", s),
            },
        };

        let key = Key::parse(key_str)?;
        let modifiers = Modifiers::parse(mod_str);

        Some(Self { key, modifiers })
    }

    /// The character this key press types, if it types one.
    ///
    /// Shift is allowed (the terminal already applied it to the character);
    /// Ctrl and Alt chords never type.
    pub fn printable(&self) -> Option<char> {
        match self.key {
            Key::Char(c) if !self.modifiers.ctrl && !self.modifiers.alt && !c.is_control() => {
                Some(c)
            }
            _ => None,
        }
    }
}

impl std::fmt::Display for KeyPress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.modifiers.is_empty() {
            write!(f, "{}", self.key)
        } else {
            write!(f, "{}+{}", self.modifiers, self.key)
        }
    }
}

/// Default bindings as `(key, command)` strings.
const DEFAULT_BINDINGS: &[(&str, &str)] = &[
    // File operations
    ("ctrl+q", "app.quit"),
    ("ctrl+s", "file.save"),
    // Cursor movement
    ("left", "cursor.left"),
    ("right", "cursor.right"),
    ("up", "cursor.up"),
    ("down", "cursor.down"),
    ("home", "cursor.line_start"),
    ("end", "cursor.line_end"),
    // Editing
    ("enter", "edit.newline"),
    ("delete", "edit.delete"),
    ("ctrl+d", "edit.delete"),
    ("backspace", "edit.backspace"),
    ("ctrl+h", "edit.backspace"),
    ("tab", "edit.indent"),
];

/// Keyboard mapping configuration.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<KeyPress, Command>,
}

impl Keymap {
    /// Creates a keymap with the default bindings.
    pub fn new() -> Self {
        let mut keymap = Self {
            bindings: HashMap::new(),
        };
        for (key_str, cmd_str) in DEFAULT_BINDINGS {
            match (KeyPress::parse(key_str), Command::parse(cmd_str)) {
                (Some(key), Some(command)) => keymap.bind(key, command),
                _ => unreachable!("invalid default binding {key_str} -> {cmd_str}"),
            }
        }
        keymap
    }

    /// Adds or replaces a binding.
    pub fn bind(&mut self, key: KeyPress, command: Command) {
        self.bindings.insert(key, command);
    }

    /// Resolves a key press to a command.
    ///
    /// Returns `None` for keys that are neither bound nor printable.
    pub fn resolve(&self, key: &KeyPress) -> Option<Command> {
        if let Some(command) = self.bindings.get(key) {
            return Some(*command);
        }
        key.printable().map(Command::InsertChar)
    }

    /// Returns the key bound to a command, for help text.
    pub fn key_for(&self, command: Command) -> Option<KeyPress> {
        let mut keys: Vec<&KeyPress> = self
            .bindings
            .iter()
            .filter(|(_, c)| **c == command)
            .map(|(k, _)| k)
            .collect();
        // Chords first, then alphabetical, so the result is stable
        keys.sort_by_key(|k| (k.modifiers.is_empty(), k.to_string()));
        keys.first().map(|k| **k)
    }
}

impl Default for Keymap {
    fn default() -> Self {
        Self::new()
    }
}
