//! # teditor Buffer
//!
//! The editing data model: an ordered sequence of text lines and the cursor
//! that walks over it.
//!
//! ## Key Concepts
//!
//! ### Ownership & Borrowing
//! - `LineBuffer` owns every line as a `String`
//! - `Cursor` owns nothing; each motion borrows the buffer (`&LineBuffer`)
//!   only to read line lengths
//! - Mutations (`insert`, `split`, `delete`) require `&mut LineBuffer` and
//!   read the cursor through a shared borrow
//!
//! ### Columns
//! Columns count `char`s (Unicode scalar values), never bytes. Byte offsets
//! are derived on demand when a line is sliced.

mod buffer;
mod cursor;

pub use buffer::LineBuffer;
pub use cursor::{Cursor, Position};

/// Result type for buffer operations
pub type BufferResult<T> = Result<T, BufferError>;

/// Errors that can occur during buffer operations
#[derive(Debug, thiserror::Error)]
pub enum BufferError {
    #[error("Line {index} is out of range (buffer has {len} lines)")]
    IndexOutOfRange { index: usize, len: usize },
}
