//! Grid-backed color sink
//!
//! Tracks the decoder's current color pair in display format and writes
//! every emitted character into a [`TextGrid`].

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

use super::buffer::TextGrid;
use super::cell::Cell;
use crate::ansi::{ColorSink, Rgb};

/// Color sink that draws into a text grid
#[derive(Debug, Clone)]
pub struct GridSink<const W: usize, const H: usize> {
    grid: TextGrid<W, H>,
    foreground: Rgb565,
    background: Rgb565,
}

impl<const W: usize, const H: usize> Default for GridSink<W, H> {
    fn default() -> Self {
        Self::new(TextGrid::new())
    }
}

impl<const W: usize, const H: usize> GridSink<W, H> {
    /// Wrap a grid, starting with white on black
    pub const fn new(grid: TextGrid<W, H>) -> Self {
        Self {
            grid,
            foreground: Rgb565::WHITE,
            background: Rgb565::BLACK,
        }
    }

    /// Get access to the grid
    pub fn grid(&self) -> &TextGrid<W, H> {
        &self.grid
    }

    /// Get mutable access to the grid
    pub fn grid_mut(&mut self) -> &mut TextGrid<W, H> {
        &mut self.grid
    }

    /// Current (foreground, background) pair
    pub fn colors(&self) -> (Rgb565, Rgb565) {
        (self.foreground, self.background)
    }

    /// Override the current color pair
    pub fn set_colors(&mut self, foreground: Rgb565, background: Rgb565) {
        self.foreground = foreground;
        self.background = background;
    }
}

impl<const W: usize, const H: usize> ColorSink for GridSink<W, H> {
    fn set_foreground(&mut self, color: Rgb) {
        self.foreground = color.to_rgb565();
    }

    fn set_background(&mut self, color: Rgb) {
        self.background = color.to_rgb565();
    }

    fn emit_character(&mut self, c: u8) {
        self.grid
            .write_cell(Cell::new(c, self.foreground, self.background));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ansi::{AnsiColor, AnsiDecoder};

    #[test]
    fn test_emits_with_current_colors() {
        let mut sink: GridSink<8, 2> = GridSink::default();
        sink.emit_character(b'a');
        sink.set_foreground(AnsiColor::Cyan.normal());
        sink.set_background(AnsiColor::Red.bright());
        sink.emit_character(b'b');

        let grid = sink.grid();
        assert_eq!(grid.get_cell(0, 0), Ok(Cell::new(b'a', Rgb565::WHITE, Rgb565::BLACK)));
        assert_eq!(
            grid.get_cell(1, 0),
            Ok(Cell::new(
                b'b',
                AnsiColor::Cyan.normal().to_rgb565(),
                AnsiColor::Red.bright().to_rgb565()
            ))
        );
    }

    #[test]
    fn test_decoder_into_grid() {
        let mut decoder = AnsiDecoder::new(GridSink::<8, 3>::default());
        decoder.process_bytes(b"ok\n\x1b[31;44mE");

        let red = AnsiColor::Red.normal().to_rgb565();
        let blue = AnsiColor::Blue.normal().to_rgb565();
        let grid = decoder.sink().grid();
        assert_eq!(grid.get_cell(0, 0), Ok(Cell::new(b'o', Rgb565::WHITE, Rgb565::BLACK)));
        assert_eq!(grid.get_cell(1, 0), Ok(Cell::new(b'k', Rgb565::WHITE, Rgb565::BLACK)));
        assert_eq!(grid.get_cell(0, 1), Ok(Cell::new(b'E', red, blue)));
        assert_eq!(decoder.sink().colors(), (red, blue));
    }
}
