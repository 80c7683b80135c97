//! # Teditor UI
//!
//! Full-screen terminal frontend built on crossterm.
//!
//! ## Architecture
//!
//! One frame per event, in three steps:
//! - **Decode**: `input::decode` turns a crossterm event into an `InputEvent`
//! - **Update**: `EditSession::handle` applies it
//! - **Render**: `render::compose` builds a `Frame` from the session, and
//!   `render::draw` writes it to the terminal
//!
//! `compose` never touches the terminal, so everything the user sees can be
//! asserted in plain unit tests.

pub mod app;
pub mod input;
pub mod render;
pub mod theme;

pub use app::{Flags, run};
pub use theme::Theme;
