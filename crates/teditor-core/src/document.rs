//! The file being edited.
//!
//! `Document` carries what the session knows about its backing file: the
//! path it saves to, the name shown in the status line and the language id
//! used for highlighting. Loading and saving are whole-file operations.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use teditor_buffer::LineBuffer;

use crate::{CoreError, CoreResult};

/// Metadata for the edited file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path the buffer is read from and saved to
    path: PathBuf,

    /// Display name
    name: String,

    /// Language id derived from the extension (None = plain text)
    language: Option<&'static str>,
}

impl Document {
    /// Describes a file without reading it.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("Unknown")
            .to_string();
        let language = path
            .extension()
            .and_then(|e| e.to_str())
            .and_then(language_from_extension);

        Self {
            path,
            name,
            language,
        }
    }

    /// Reads a file into a new buffer.
    ///
    /// A missing file is reported as [`CoreError::FileNotFound`].
    pub fn load(path: impl AsRef<Path>) -> CoreResult<(Self, LineBuffer)> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => CoreError::FileNotFound(path.to_path_buf()),
            _ => CoreError::Io(e),
        })?;

        let buffer = LineBuffer::from_text(&content);
        tracing::info!(path = %path.display(), lines = buffer.len(), "Loaded file");
        Ok((Self::new(path), buffer))
    }

    /// Overwrites the file with the buffer's lines joined by `\n`.
    pub fn save(&self, buffer: &LineBuffer) -> CoreResult<()> {
        std::fs::write(&self.path, buffer.text()).map_err(|source| CoreError::Save {
            path: self.path.clone(),
            source,
        })?;
        tracing::info!(path = %self.path.display(), lines = buffer.len(), "Saved file");
        Ok(())
    }

    // ==================== Getters ====================

    /// Returns the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the detected language id.
    pub fn language(&self) -> Option<&'static str> {
        self.language
    }
}

/// Maps a file extension to a language id.
fn language_from_extension(ext: &str) -> Option<&'static str> {
    let lang = match ext.to_lowercase().as_str() {
        "py" => "python",
        "c" => "c",
        "js" => "javascript",
        "css" => "css",
        "html" => "html",
        "md" => "markdown",
        "rs" => "rust",
        "cpp" | "cxx" | "cc" => "cpp",
        "java" => "java",
        "kt" | "kts" => "kotlin",
        "cs" => "csharp",
        "go" => "go",
        "bf" => "brainfuck",
        "sh" => "bash",
        "vim" => "vim",
        "json" => "json",
        _ => return None,
    };
    Some(lang)
}
