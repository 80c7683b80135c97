//! # teditor Core
//!
//! Editor state and the per-keystroke control loop.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                     EditSession                       │
//! │  ┌──────────┐ ┌────────────┐ ┌──────────┐ ┌────────┐ │
//! │  │  Keymap  │ │ LineBuffer │ │  Cursor  │ │Viewport│ │
//! │  └──────────┘ └────────────┘ └──────────┘ └────────┘ │
//! │        │             ▲             ▲           ▲      │
//! │        └── Command ──┴─────────────┴───────────┘      │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! One `InputEvent` resolves to one `Command`; the session applies it to
//! the cursor and buffer, then adjusts the viewport within the same call.
//! Rendering only ever sees the session through shared references.

pub mod command;
pub mod config;
pub mod document;
pub mod event;
pub mod keymap;
pub mod session;
pub mod viewport;

pub use command::Command;
pub use config::Config;
pub use document::Document;
pub use event::{DecodeError, InputEvent, ScrollDirection};
pub use keymap::{Key, KeyPress, Keymap, Modifiers};
pub use session::{Control, EditSession};
pub use viewport::Viewport;

use std::path::PathBuf;

/// Result type for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur in core operations
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("File '{}' not found", .0.display())]
    FileNotFound(PathBuf),

    #[error("Could not save '{}': {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
