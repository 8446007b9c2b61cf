//! ANSI color palettes
//!
//! Standard VGA-style terminal colors. SGR parameters 30-37 / 40-47 index
//! the normal palette, 90-97 / 100-107 the bright one.

use embedded_graphics::pixelcolor::{Rgb565, Rgb888};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of entries in each palette
pub const PALETTE_SIZE: usize = 8;

/// 8-bit per channel color as produced by the decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to the display's native 16-bit format
    pub fn to_rgb565(self) -> Rgb565 {
        Rgb565::from(Rgb888::new(self.r, self.g, self.b))
    }
}

impl From<Rgb> for Rgb565 {
    fn from(color: Rgb) -> Self {
        color.to_rgb565()
    }
}

/// Normal intensity palette
pub const NORMAL_PALETTE: [Rgb; PALETTE_SIZE] = [
    Rgb::new(0, 0, 0),       // Black
    Rgb::new(170, 0, 0),     // Red
    Rgb::new(0, 170, 0),     // Green
    Rgb::new(170, 85, 0),    // Yellow
    Rgb::new(0, 0, 170),     // Blue
    Rgb::new(170, 0, 170),   // Magenta
    Rgb::new(0, 170, 170),   // Cyan
    Rgb::new(170, 170, 170), // White
];

/// High intensity palette
pub const BRIGHT_PALETTE: [Rgb; PALETTE_SIZE] = [
    Rgb::new(85, 85, 85),    // Black
    Rgb::new(255, 85, 85),   // Red
    Rgb::new(85, 255, 85),   // Green
    Rgb::new(255, 255, 85),  // Yellow
    Rgb::new(85, 85, 255),   // Blue
    Rgb::new(255, 85, 255),  // Magenta
    Rgb::new(85, 255, 255),  // Cyan
    Rgb::new(255, 255, 255), // White
];

/// Palette index names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AnsiColor {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
}

impl AnsiColor {
    /// Look up a palette index (0-7)
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            0 => Some(Self::Black),
            1 => Some(Self::Red),
            2 => Some(Self::Green),
            3 => Some(Self::Yellow),
            4 => Some(Self::Blue),
            5 => Some(Self::Magenta),
            6 => Some(Self::Cyan),
            7 => Some(Self::White),
            _ => None,
        }
    }

    /// Palette index of this color
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Normal intensity variant
    pub const fn normal(self) -> Rgb {
        NORMAL_PALETTE[self.index()]
    }

    /// High intensity variant
    pub const fn bright(self) -> Rgb {
        BRIGHT_PALETTE[self.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::RgbColor;

    #[test]
    fn test_index_lookup() {
        assert_eq!(AnsiColor::from_index(1), Some(AnsiColor::Red));
        assert_eq!(AnsiColor::from_index(7), Some(AnsiColor::White));
        assert_eq!(AnsiColor::from_index(8), None);
    }

    #[test]
    fn test_bright_is_brighter() {
        for i in 0..PALETTE_SIZE {
            let n = NORMAL_PALETTE[i];
            let b = BRIGHT_PALETTE[i];
            assert!(b.r >= n.r && b.g >= n.g && b.b >= n.b);
            assert_ne!(n, b);
        }
    }

    #[test]
    fn test_rgb565_extremes() {
        assert_eq!(AnsiColor::Black.normal().to_rgb565(), Rgb565::BLACK);
        assert_eq!(AnsiColor::White.bright().to_rgb565(), Rgb565::WHITE);
        assert_eq!(Rgb565::from(AnsiColor::Red.bright()).r(), 31);
    }
}
