//! Colored character cell

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

/// Byte that moves the cursor to the next row
pub const NEWLINE: u8 = b'\n';

/// An ASCII character with a foreground and background color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cell {
    pub character: u8,
    pub foreground: Rgb565,
    pub background: Rgb565,
}

impl Cell {
    /// Cleared cell: NUL, white on black
    pub const EMPTY: Self = Self {
        character: 0,
        foreground: Rgb565::WHITE,
        background: Rgb565::BLACK,
    };

    pub const fn new(character: u8, foreground: Rgb565, background: Rgb565) -> Self {
        Self {
            character,
            foreground,
            background,
        }
    }

    /// Set to the cleared default state
    pub fn reset(&mut self) {
        *self = Self::EMPTY;
    }

    /// Whether the cell holds a drawable ASCII character
    pub fn is_printable(&self) -> bool {
        self.character.is_ascii_graphic() || self.character == b' '
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_cleared() {
        let cell = Cell::default();
        assert_eq!(cell.character, 0);
        assert_eq!(cell.foreground, Rgb565::WHITE);
        assert_eq!(cell.background, Rgb565::BLACK);
        assert!(!cell.is_printable());
    }

    #[test]
    fn test_reset() {
        let mut cell = Cell::new(b'Q', Rgb565::RED, Rgb565::BLUE);
        assert!(cell.is_printable());
        cell.reset();
        assert_eq!(cell, Cell::EMPTY);
    }
}
