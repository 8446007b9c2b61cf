//! Terminal facade
//!
//! An [`AnsiDecoder`] wired to a [`GridSink`]: bytes in, colored cells out.
//! Implements [`core::fmt::Write`] so log formatting can target it directly.

use core::fmt;

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

use crate::ansi::{AnsiDecoder, DecoderState};
use crate::config::TerminalConfig;
use crate::grid::{Cell, GridError, GridSink, TextGrid, NEWLINE, NUM_CHARS_WIDE, NUM_ROWS};

/// Log terminal: escape decoder feeding a scrolling grid
#[derive(Debug, Clone)]
pub struct Terminal<const W: usize = NUM_CHARS_WIDE, const H: usize = NUM_ROWS> {
    decoder: AnsiDecoder<GridSink<W, H>>,
    default_fg: Rgb565,
    default_bg: Rgb565,
}

impl<const W: usize, const H: usize> Default for Terminal<W, H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const W: usize, const H: usize> Terminal<W, H> {
    /// Create a terminal with default settings (no wrap, white on black)
    pub const fn new() -> Self {
        Self {
            decoder: AnsiDecoder::new(GridSink::new(TextGrid::new())),
            default_fg: Rgb565::WHITE,
            default_bg: Rgb565::BLACK,
        }
    }

    /// Create a terminal from stored settings
    pub fn from_config(config: &TerminalConfig) -> Self {
        let default_fg = config.foreground.to_rgb565();
        let default_bg = config.background.to_rgb565();

        let mut sink = GridSink::new(TextGrid::with_wrap(config.wrap_enabled));
        sink.set_colors(default_fg, default_bg);

        Self {
            decoder: AnsiDecoder::new(sink),
            default_fg,
            default_bg,
        }
    }

    /// Feed a single byte
    pub fn process_byte(&mut self, c: u8) {
        self.decoder.process_byte(c);
    }

    /// Feed a run of bytes
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.decoder.process_bytes(bytes);
    }

    /// Feed one log line followed by a newline
    pub fn write_line(&mut self, line: &str) {
        self.write_bytes(line.as_bytes());
        self.process_byte(NEWLINE);
    }

    /// Get access to the grid
    pub fn grid(&self) -> &TextGrid<W, H> {
        self.decoder.sink().grid()
    }

    /// Read the cell at (x, y)
    pub fn get_cell(&self, x: i32, y: i32) -> Result<Cell, GridError> {
        self.grid().get_cell(x, y)
    }

    /// Size in characters as (width, height)
    pub const fn get_size(&self) -> (usize, usize) {
        (W, H)
    }

    /// Current (foreground, background) pair
    pub fn colors(&self) -> (Rgb565, Rgb565) {
        self.decoder.sink().colors()
    }

    /// Current decoder parse state
    pub fn decoder_state(&self) -> DecoderState {
        self.decoder.state()
    }

    /// Clear the grid, restore default colors and drop any partial sequence
    pub fn clear(&mut self) {
        self.decoder.reset();
        let sink = self.decoder.sink_mut();
        sink.grid_mut().clear();
        sink.set_colors(self.default_fg, self.default_bg);
    }
}

impl<const W: usize, const H: usize> fmt::Write for Terminal<W, H> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.write_bytes(s.as_bytes());
        Ok(())
    }
}
