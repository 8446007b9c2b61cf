//! Scrolling character grid
//!
//! Fixed-size buffer of colored character cells with a single write cursor.
//! Text is written left to right; newlines move to the next row and scroll
//! the grid once the last row is reached.

pub mod buffer;
pub mod cell;
pub mod sink;

pub use buffer::{GridError, TextGrid, NUM_CHARS_WIDE, NUM_ROWS};
pub use cell::{Cell, NEWLINE};
pub use sink::GridSink;
