//! Input events delivered to an edit session.
//!
//! The terminal frontend decodes raw backend events into these values, so
//! the session never depends on a particular terminal library.

use crate::keymap::KeyPress;

/// Direction of a mouse wheel notch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

/// A decoded, logical input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A key press (with modifiers)
    Key(KeyPress),
    /// One mouse wheel notch
    Scroll(ScrollDirection),
}

impl From<KeyPress> for InputEvent {
    fn from(key: KeyPress) -> Self {
        InputEvent::Key(key)
    }
}

/// A backend event that could not be turned into an [`InputEvent`].
///
/// Decode errors are recoverable: the event loop logs and drops them.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeError {
    #[error("Unsupported key: {0}")]
    UnsupportedKey(String),

    #[error("Unsupported mouse event: {0}")]
    UnsupportedMouse(String),
}
