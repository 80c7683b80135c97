//! The terminal event loop.

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use crossterm::{
    cursor::{Hide, Show},
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use teditor_core::{Config, Control, CoreError, EditSession, InputEvent};
use teditor_syntax::Highlighter;

use crate::{input, render, theme::Theme};

/// Launch options.
#[derive(Debug, Clone)]
pub struct Flags {
    pub file: PathBuf,
    pub config: Config,
    pub theme: Theme,
}

impl Flags {
    /// Flags for `file` with the default configuration and theme.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        Self {
            file: file.into(),
            config: Config::default(),
            theme: Theme::default(),
        }
    }
}

/// Puts the terminal in editor mode and restores it when dropped.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> anyhow::Result<Self> {
        terminal::enable_raw_mode().context("Failed to enable raw mode")?;
        // Restore raw mode even if the screen setup below fails
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture, Hide)
            .context("Failed to set up the terminal")?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

/// Viewport size for a terminal of `rows` x `cols`: one row for the
/// status bar and one spare column, never less than 1x1.
fn viewport_size(rows: u16, cols: u16) -> (usize, usize) {
    (
        usize::from(rows.saturating_sub(1)).max(1),
        usize::from(cols.saturating_sub(1)).max(1),
    )
}

fn highlighter_for(session: &EditSession) -> Option<Highlighter> {
    let language = session.document().language()?;
    match Highlighter::new(language) {
        Ok(highlighter) => Some(highlighter),
        Err(e) => {
            tracing::debug!(language, "No highlighting: {e}");
            None
        }
    }
}

/// Hands one input to the session.
///
/// A failed save is shown on the status bar and editing continues, so the
/// buffer is never lost to a write error. Any other error ends the session.
fn dispatch(session: &mut EditSession, input: InputEvent) -> anyhow::Result<Control> {
    match session.handle(input) {
        Ok(control) => Ok(control),
        Err(e @ CoreError::Save { .. }) => {
            tracing::error!("{e}");
            session.report(e.to_string());
            Ok(Control::Continue)
        }
        Err(e) => Err(e.into()),
    }
}

/// Runs the editor until the user quits.
///
/// The file is opened before the terminal is switched over, so a missing
/// file is reported on the normal screen.
pub fn run(flags: Flags) -> anyhow::Result<()> {
    let (cols, rows) = terminal::size().context("Failed to read the terminal size")?;
    let (n_rows, n_cols) = viewport_size(rows, cols);

    let mut session = EditSession::open(&flags.file, n_rows, n_cols, flags.config)
        .with_context(|| format!("Failed to open {}", flags.file.display()))?;
    let mut highlighter = highlighter_for(&session);

    tracing::info!(
        file = %flags.file.display(),
        n_rows,
        n_cols,
        highlighted = highlighter.is_some(),
        "Starting edit session"
    );

    let _guard = TerminalGuard::enter()?;
    let mut stdout = io::stdout().lock();

    loop {
        let frame = render::compose(&session, highlighter.as_mut());
        render::draw(&frame, &flags.theme, &mut stdout).context("Failed to draw")?;

        let event = event::read().context("Failed to read input")?;
        let input = match input::decode(&event) {
            Ok(Some(input)) => input,
            Ok(None) => continue,
            Err(e) => {
                tracing::trace!("Dropping input: {e}");
                continue;
            }
        };

        if dispatch(&mut session, input)? == Control::Quit {
            break;
        }
    }

    stdout.flush()?;
    tracing::info!("Edit session closed");
    Ok(())
}
