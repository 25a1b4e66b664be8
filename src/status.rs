//! Status band draw suppression.
//!
//! The band shows the live physical level of both buttons. Repainting it
//! when nothing changed wastes bus time and causes visible flicker, so the
//! last-drawn visual state is cached and compared before every draw. A
//! forced check bypasses the comparison; the full redraw uses it because
//! clearing the screen wipes the band regardless of what it showed.
//!
//! The cache lives on this struct rather than in function-local statics so
//! multiple instances (and tests) stay independent.

/// Cached last-drawn visual state of the status band.
pub struct StatusSnapshot {
    prev_a: bool,
    prev_b: bool,
    drawn: bool,
}

impl StatusSnapshot {
    /// Create a snapshot that has never been drawn.
    pub const fn new() -> Self {
        Self {
            prev_a: false,
            prev_b: false,
            drawn: false,
        }
    }

    /// Decide whether the band must be drawn for the given live pressed
    /// levels.
    ///
    /// Returns the levels to draw, or `None` when the band already shows
    /// them and the draw is not forced. A `Some` return updates the cache;
    /// the caller is expected to actually draw.
    pub fn check(
        &mut self,
        a_pressed: bool,
        b_pressed: bool,
        forced: bool,
    ) -> Option<(bool, bool)> {
        if !forced && self.drawn && a_pressed == self.prev_a && b_pressed == self.prev_b {
            return None;
        }

        self.prev_a = a_pressed;
        self.prev_b = b_pressed;
        self.drawn = true;
        Some((a_pressed, b_pressed))
    }
}

impl Default for StatusSnapshot {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================
