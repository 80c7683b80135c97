//! Translation from crossterm events to session input.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent, MouseEventKind,
};
use teditor_core::{DecodeError, InputEvent, Key, KeyPress, Modifiers, ScrollDirection};

/// Decodes one terminal event.
///
/// Returns `Ok(None)` for events the editor deliberately ignores (key
/// releases and repeats, focus changes, resizes, pastes) and an error for
/// keys and mouse actions it has no mapping for.
pub fn decode(event: &Event) -> Result<Option<InputEvent>, DecodeError> {
    match event {
        Event::Key(key) => decode_key(key),
        Event::Mouse(mouse) => decode_mouse(mouse).map(Some),
        Event::FocusGained | Event::FocusLost | Event::Paste(_) | Event::Resize(..) => Ok(None),
    }
}

fn decode_key(event: &KeyEvent) -> Result<Option<InputEvent>, DecodeError> {
    if event.kind != KeyEventKind::Press {
        return Ok(None);
    }

    let key = match event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Esc => Key::Escape,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        other => return Err(DecodeError::UnsupportedKey(format!("{other:?}"))),
    };

    let modifiers = Modifiers {
        ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
        alt: event.modifiers.contains(KeyModifiers::ALT),
        shift: event.modifiers.contains(KeyModifiers::SHIFT),
    };

    Ok(Some(KeyPress::new(key, modifiers).into()))
}

fn decode_mouse(event: &MouseEvent) -> Result<InputEvent, DecodeError> {
    match event.kind {
        MouseEventKind::ScrollUp => Ok(InputEvent::Scroll(ScrollDirection::Up)),
        MouseEventKind::ScrollDown => Ok(InputEvent::Scroll(ScrollDirection::Down)),
        other => Err(DecodeError::UnsupportedMouse(format!("{other:?}"))),
    }
}
