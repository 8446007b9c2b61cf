//! embedded-graphics renderer
//!
//! Draws grid cells onto any RGB565 `DrawTarget` with a monospace font.
//! Printable cells become a glyph on its background; NUL and other
//! non-printable bytes only fill the cell background.

use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::{MonoFont, MonoTextStyleBuilder};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Baseline, Text};
use logterm_core::Cell;

use crate::backend::{DisplayError, GlyphRenderer};

/// Glyph renderer for an RGB565 draw target
pub struct GraphicsRenderer<D> {
    target: D,
    origin: Point,
    font: &'static MonoFont<'static>,
}

impl<D> GraphicsRenderer<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    /// Render with the 6x10 font, grid top-left at `origin`
    pub fn new(target: D, origin: Point) -> Self {
        Self::with_font(target, origin, &FONT_6X10)
    }

    /// Render with a custom font
    pub fn with_font(target: D, origin: Point, font: &'static MonoFont<'static>) -> Self {
        Self {
            target,
            origin,
            font,
        }
    }

    /// Get access to the draw target
    pub fn target(&self) -> &D {
        &self.target
    }

    /// Get mutable access to the draw target
    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    /// Consume the renderer and return the draw target
    pub fn release(self) -> D {
        self.target
    }

    /// Pixel position of a cell's top-left corner
    fn cell_origin(&self, col: usize, row: usize) -> Result<Point, DisplayError> {
        let (w, h) = self.cell_size();
        let x = offset(self.origin.x, col, w).ok_or(DisplayError::InvalidCoordinates)?;
        let y = offset(self.origin.y, row, h).ok_or(DisplayError::InvalidCoordinates)?;
        Ok(Point::new(x, y))
    }
}

fn offset(start: i32, index: usize, step: u32) -> Option<i32> {
    let index = i32::try_from(index).ok()?;
    let step = i32::try_from(step).ok()?;
    index.checked_mul(step)?.checked_add(start)
}

impl<D> GlyphRenderer for GraphicsRenderer<D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn draw_glyph(&mut self, col: usize, row: usize, cell: &Cell) -> Result<(), DisplayError> {
        let top_left = self.cell_origin(col, row)?;

        if cell.is_printable() {
            let style = MonoTextStyleBuilder::new()
                .font(self.font)
                .text_color(cell.foreground)
                .background_color(cell.background)
                .build();

            let buf = [cell.character];
            // Printable cells are always ASCII
            let text = core::str::from_utf8(&buf).unwrap_or(" ");

            Text::with_baseline(text, top_left, style, Baseline::Top)
                .draw(&mut self.target)
                .map_err(|_| DisplayError::Draw)?;
        } else {
            let (w, h) = self.cell_size();
            Rectangle::new(top_left, Size::new(w, h))
                .into_styled(PrimitiveStyle::with_fill(cell.background))
                .draw(&mut self.target)
                .map_err(|_| DisplayError::Draw)?;
        }

        Ok(())
    }

    fn cell_size(&self) -> (u32, u32) {
        let size = self.font.character_size;
        (size.width + self.font.character_spacing, size.height)
    }
}
