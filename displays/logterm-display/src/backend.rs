//! Glyph renderer trait
//!
//! Defines the drawing contract between the terminal grid and a display.

use logterm_core::Cell;

/// Display rendering errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Cell position does not map to a pixel position
    InvalidCoordinates,
    /// The underlying draw target failed
    Draw,
}

/// Draws one colored character cell at a time
///
/// Implementations map a (column, row) cell position to pixels and draw the
/// glyph for `cell.character` using the cell's two colors.
pub trait GlyphRenderer {
    /// Draw `cell` at the given character position
    ///
    /// - `col`: Column number (0-based)
    /// - `row`: Row number (0-based)
    fn draw_glyph(&mut self, col: usize, row: usize, cell: &Cell) -> Result<(), DisplayError>;

    /// Size of one character cell in pixels as (width, height)
    fn cell_size(&self) -> (u32, u32);
}

impl<R: GlyphRenderer + ?Sized> GlyphRenderer for &mut R {
    fn draw_glyph(&mut self, col: usize, row: usize, cell: &Cell) -> Result<(), DisplayError> {
        (**self).draw_glyph(col, row, cell)
    }

    fn cell_size(&self) -> (u32, u32) {
        (**self).cell_size()
    }
}
