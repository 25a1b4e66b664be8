//! Color constants and the two demo palettes.
//!
//! ## Rgb565 Color Format
//!
//! Rgb565 uses 16 bits per pixel: 5 bits red, 6 bits green, 5 bits blue.
//! - Red: 0-31 (5 bits)
//! - Green: 0-63 (6 bits)
//! - Blue: 0-31 (5 bits)
//!
//! This format is native to the ST7789 and requires no conversion when
//! writing to the display buffer.

use embedded_graphics::pixelcolor::{Rgb565, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait - guaranteed optimal values)
// =============================================================================

/// Pure black (0, 0, 0).
pub const BLACK: Rgb565 = Rgb565::BLACK;

/// Pure white (31, 63, 31).
pub const WHITE: Rgb565 = Rgb565::WHITE;

/// Pure red (31, 0, 0).
pub const RED: Rgb565 = Rgb565::RED;

/// Pure green (0, 63, 0). Also the "pressed" status color.
pub const GREEN: Rgb565 = Rgb565::GREEN;

/// Pure yellow (31, 63, 0).
pub const YELLOW: Rgb565 = Rgb565::YELLOW;

/// Pure cyan (0, 63, 31).
pub const CYAN: Rgb565 = Rgb565::CYAN;

/// Pure magenta (31, 0, 31).
pub const MAGENTA: Rgb565 = Rgb565::MAGENTA;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Dark navy blue background. RGB565: (0, 0, 15).
pub const NAVY: Rgb565 = Rgb565::new(0, 0, 15);

/// Dark green background. RGB565: (0, 31, 0) - half-brightness green.
pub const DARK_GREEN: Rgb565 = Rgb565::new(0, 31, 0);

/// Maroon background. RGB565: (15, 0, 0) - half-brightness red.
pub const MAROON: Rgb565 = Rgb565::new(15, 0, 0);

/// Purple background. RGB565: (15, 0, 15).
pub const PURPLE: Rgb565 = Rgb565::new(15, 0, 15);

/// Olive background. RGB565: (15, 31, 0).
pub const OLIVE: Rgb565 = Rgb565::new(15, 31, 0);

/// Dark grey. Background palette entry and the "released" status color.
/// RGB565: (15, 31, 15) - roughly 50% brightness.
pub const DARK_GREY: Rgb565 = Rgb565::new(15, 31, 15);

/// Orange text color. RGB565: (31, 45, 0).
pub const ORANGE: Rgb565 = Rgb565::new(31, 45, 0);

// =============================================================================
// Palettes
// =============================================================================

/// Background palette, cycled by button A. Dark tones so the text palette
/// stays readable on every combination.
pub const BG_PALETTE: [Rgb565; 7] = [BLACK, NAVY, DARK_GREEN, MAROON, PURPLE, OLIVE, DARK_GREY];

/// Text (foreground) palette, cycled by button B.
pub const FG_PALETTE: [Rgb565; 7] = [GREEN, YELLOW, CYAN, WHITE, MAGENTA, ORANGE, RED];

/// Number of background palette entries.
pub const BG_COUNT: usize = BG_PALETTE.len();

/// Number of text palette entries.
pub const FG_COUNT: usize = FG_PALETTE.len();

/// Status label color while the button is held down.
pub const STATUS_PRESSED: Rgb565 = GREEN;

/// Status label color while the button is released.
pub const STATUS_RELEASED: Rgb565 = DARK_GREY;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_counts() {
        assert_eq!(BG_COUNT, 7);
        assert_eq!(FG_COUNT, 7);
    }

    #[test]
    fn test_palettes_have_no_duplicates() {
        for (i, a) in BG_PALETTE.iter().enumerate() {
            for b in &BG_PALETTE[i + 1..] {
                assert_ne!(a, b);
            }
        }
        for (i, a) in FG_PALETTE.iter().enumerate() {
            for b in &FG_PALETTE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
