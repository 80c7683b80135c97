//! # Teditor - A Small Terminal Text Editor
//!
//! Opens one existing file full-screen, with syntax highlighting for Rust,
//! JavaScript, Python and JSON.
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- path/to/file.rs
//!
//! # With a debug log (the screen belongs to the editor)
//! TEDITOR_LOG=/tmp/teditor.log RUST_LOG=debug cargo run -- path/to/file.rs
//! ```
//!
//! Ctrl+S saves, Ctrl+Q quits.

use clap::Parser;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use teditor_ui::{Flags, Theme, run};

/// Environment variable naming the log file.
const LOG_ENV: &str = "TEDITOR_LOG";

/// Teditor - a small terminal text editor
#[derive(Parser, Debug)]
#[command(name = "teditor")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to edit (must exist)
    #[arg(value_name = "FILE")]
    file: PathBuf,
}

/// Sends tracing output to `path`, filtered by `RUST_LOG` (default `info`).
fn init_logging(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Could not create log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(false)
                .with_level(true),
        )
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Logging is opt-in: stderr is hidden behind the alternate screen
    if let Some(path) = std::env::var_os(LOG_ENV) {
        init_logging(Path::new(&path))?;
    }

    tracing::info!("Starting Teditor v{}", env!("CARGO_PKG_VERSION"));

    let mut flags = Flags::new(args.file);
    if std::env::var_os("NO_COLOR").is_some() {
        flags.theme = Theme::monochrome();
    }

    run(flags)
}
