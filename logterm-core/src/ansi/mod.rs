//! ANSI color escape handling
//!
//! Splits a byte stream into literal characters and `ESC [ ... m`
//! (Select Graphic Rendition) color sequences.

pub mod decoder;
pub mod palette;

pub use decoder::{AnsiDecoder, ColorSink, DecoderState, MAX_PARAMS, MAX_RAW_BYTES};
pub use palette::{AnsiColor, Rgb, BRIGHT_PALETTE, NORMAL_PALETTE};
