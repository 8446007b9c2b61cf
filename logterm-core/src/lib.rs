//! Colored log terminal core
//!
//! This crate turns a stream of log bytes into something a small pixel
//! display can draw:
//!
//! - ANSI color palettes (normal and bright)
//! - Escape-sequence decoder for `ESC [ ... m` color sequences
//! - Fixed-size scrolling grid of colored character cells
//! - Terminal facade wiring the decoder to the grid
//! - Lock-protected terminal shared between a log producer and a renderer
//! - Configuration types
//!
//! # Data flow
//!
//! ```text
//! bytes ──► AnsiDecoder ──► GridSink ──► TextGrid ◄── renderer (get_cell)
//! ```
//!
//! Nothing here touches hardware. Glyph drawing lives in the display crate.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod ansi;
pub mod config;
pub mod grid;
pub mod shared;
pub mod terminal;

// Re-export key types
pub use ansi::{AnsiColor, AnsiDecoder, ColorSink, DecoderState, Rgb};
pub use config::TerminalConfig;
pub use grid::{Cell, GridError, GridSink, TextGrid, NUM_CHARS_WIDE, NUM_ROWS};
pub use shared::SharedTerminal;
pub use terminal::Terminal;
