//! Board and layout configuration constants.
//!
//! # Optimization: Pre-computed Layout Constants
//!
//! Layout positions like `SCREEN_WIDTH / 2` are computed at compile time as
//! `const`, avoiding per-frame arithmetic in the drawing code.

// =============================================================================
// Display Configuration
// =============================================================================

/// Display width in pixels (ST7789 on the Lilygo T-Display RP2040, landscape).
pub const SCREEN_WIDTH: u32 = 240;

/// Display height in pixels.
pub const SCREEN_HEIGHT: u32 = 135;

/// Height of the status band at the top of the screen.
pub const STATUS_BAND_HEIGHT: u32 = 24;

// =============================================================================
// Pre-computed Layout Constants (Optimization)
// =============================================================================

/// Screen center X coordinate. Used for centering the title and hint line.
/// Pre-computed as i32 to avoid casts in drawing code.
pub const CENTER_X: i32 = (SCREEN_WIDTH / 2) as i32;

/// Screen center Y coordinate.
pub const CENTER_Y: i32 = (SCREEN_HEIGHT / 2) as i32;

/// Vertical anchor of the centered title, nudged up to leave room for the
/// hint line underneath.
pub const TITLE_Y: i32 = CENTER_Y - 10;

/// Baseline of the bottom-centered hint line.
pub const HINT_BASELINE_Y: i32 = SCREEN_HEIGHT as i32 - 5;

/// Horizontal inset of the status labels from the screen edges.
pub const STATUS_INSET_X: i32 = 8;

/// Top anchor of the status labels inside the band.
pub const STATUS_TEXT_Y: i32 = 4;

// =============================================================================
// Timing Configuration
// =============================================================================

/// Debounce window in milliseconds. A raw level must hold this long before a
/// change is committed. Shorter windows reduce input latency but risk passing
/// mechanical bounce.
pub const DEBOUNCE_WINDOW_MS: u64 = 30;

/// Minimum interval between status band checks. Drawing occupies the SPI bus,
/// so the band is rate-limited rather than repainted every tick.
pub const STATUS_INTERVAL_MS: u64 = 50;

/// Interval between periodic health reports.
pub const HEALTH_INTERVAL_MS: u64 = 10_000;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_constants() {
        assert_eq!(CENTER_X, 120);
        assert_eq!(CENTER_Y, 67);
        assert_eq!(HINT_BASELINE_Y, 130);
        assert!(STATUS_BAND_HEIGHT < SCREEN_HEIGHT);
    }

    #[test]
    fn test_status_interval_exceeds_debounce() {
        // The band may legitimately show sub-debounce flicker, but its check
        // cadence must not outrun the bus.
        assert!(STATUS_INTERVAL_MS >= DEBOUNCE_WINDOW_MS);
    }
}
