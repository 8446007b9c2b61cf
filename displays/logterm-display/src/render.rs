//! Full-frame render pass
//!
//! Reads every cell of a grid in row-major order and hands it to a
//! [`GlyphRenderer`].

use embassy_sync::blocking_mutex::raw::RawMutex;
use logterm_core::{SharedTerminal, TextGrid};

use crate::backend::{DisplayError, GlyphRenderer};

/// Draw every cell of `grid`
///
/// Stops at the first renderer error.
pub fn render_grid<R, const W: usize, const H: usize>(
    grid: &TextGrid<W, H>,
    renderer: &mut R,
) -> Result<(), DisplayError>
where
    R: GlyphRenderer + ?Sized,
{
    let (width, height) = grid.get_size();
    for row in 0..height {
        for col in 0..width {
            let y = i32::try_from(row).map_err(|_| DisplayError::InvalidCoordinates)?;
            let x = i32::try_from(col).map_err(|_| DisplayError::InvalidCoordinates)?;
            let cell = grid
                .get_cell(x, y)
                .map_err(|_| DisplayError::InvalidCoordinates)?;
            renderer.draw_glyph(col, row, &cell)?;
        }
    }
    Ok(())
}

/// Draw every cell of a shared terminal while holding its lock
///
/// The log producer is blocked for the whole pass, so the frame never shows
/// a half-written line.
pub fn render_shared<M, R, const W: usize, const H: usize>(
    terminal: &SharedTerminal<M, W, H>,
    renderer: &mut R,
) -> Result<(), DisplayError>
where
    M: RawMutex,
    R: GlyphRenderer + ?Sized,
{
    let result = terminal.with_grid(|grid| render_grid(grid, renderer));

    #[cfg(feature = "defmt")]
    if let Err(e) = result {
        defmt::warn!("Terminal render failed: {:?}", e);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use logterm_core::{Cell, Terminal};
    use std::vec::Vec;

    /// Records every draw call
    struct Recorder {
        calls: Vec<(usize, usize, u8)>,
        fail_at: Option<(usize, usize)>,
    }

    impl Recorder {
        fn new() -> Self {
            Self {
                calls: Vec::new(),
                fail_at: None,
            }
        }
    }

    impl GlyphRenderer for Recorder {
        fn draw_glyph(&mut self, col: usize, row: usize, cell: &Cell) -> Result<(), DisplayError> {
            if self.fail_at == Some((col, row)) {
                return Err(DisplayError::Draw);
            }
            self.calls.push((col, row, cell.character));
            Ok(())
        }

        fn cell_size(&self) -> (u32, u32) {
            (6, 10)
        }
    }

    #[test]
    fn test_row_major_order() {
        let mut term: Terminal<3, 2> = Terminal::new();
        term.write_bytes(b"ab\nc");

        let mut recorder = Recorder::new();
        render_grid(term.grid(), &mut recorder).unwrap();

        assert_eq!(
            recorder.calls,
            [
                (0, 0, b'a'),
                (1, 0, b'b'),
                (2, 0, 0),
                (0, 1, b'c'),
                (1, 1, 0),
                (2, 1, 0),
            ]
        );
    }

    #[test]
    fn test_error_stops_pass() {
        let term: Terminal<3, 2> = Terminal::new();
        let mut recorder = Recorder::new();
        recorder.fail_at = Some((1, 0));

        assert_eq!(render_grid(term.grid(), &mut recorder), Err(DisplayError::Draw));
        assert_eq!(recorder.calls.len(), 1);
    }

    #[test]
    fn test_render_shared() {
        let shared: SharedTerminal<NoopRawMutex, 4, 2> = SharedTerminal::new();
        shared.write_line("hey");

        let mut recorder = Recorder::new();
        render_shared(&shared, &mut recorder).unwrap();

        assert_eq!(recorder.calls.len(), 8);
        assert_eq!(recorder.calls[2], (2, 0, b'y'));
    }
}
