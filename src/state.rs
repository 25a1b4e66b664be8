//! Shared UI state, mutated only by the button press handlers.
//!
//! One explicit struct owned by the loop driver; the press handlers are the
//! only writers and the renderer is the only other reader, all within a
//! single execution context, so no synchronization is needed.

use crate::colors::{BG_COUNT, FG_COUNT};

/// Palette indices, redraw flag, and press counters.
pub struct AppState {
    /// Index into the background palette, always in `[0, BG_COUNT)`.
    pub bg_index: usize,
    /// Index into the text palette, always in `[0, FG_COUNT)`.
    pub fg_index: usize,
    /// Set by the press handlers, cleared once per full redraw.
    pub dirty: bool,
    /// Total presses of button A since boot (observability only).
    pub press_count_a: u32,
    /// Total presses of button B since boot (observability only).
    pub press_count_b: u32,
}

impl AppState {
    /// Initial state. `dirty` starts set so the first tick performs the
    /// initial full redraw through the normal scheduler path.
    pub const fn new() -> Self {
        Self {
            bg_index: 0,
            fg_index: 0,
            dirty: true,
            press_count_a: 0,
            press_count_b: 0,
        }
    }

    /// Press handler for button A: advance the background palette.
    pub fn on_press_a(&mut self) {
        self.bg_index = (self.bg_index + 1) % BG_COUNT;
        self.dirty = true;
        self.press_count_a = self.press_count_a.wrapping_add(1);
    }

    /// Press handler for button B: advance the text palette.
    pub fn on_press_b(&mut self) {
        self.fg_index = (self.fg_index + 1) % FG_COUNT;
        self.dirty = true;
        self.press_count_b = self.press_count_b.wrapping_add(1);
    }

    /// Acknowledge a completed full redraw.
    #[inline]
    pub fn clear_dirty(&mut self) { self.dirty = false; }
}

impl Default for AppState {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_dirty() {
        let state = AppState::new();
        assert_eq!(state.bg_index, 0);
        assert_eq!(state.fg_index, 0);
        assert!(state.dirty);
    }

    #[test]
    fn test_press_a_advances_background_modulo() {
        let mut state = AppState::new();
        for n in 1..=(3 * BG_COUNT as u32) {
            state.on_press_a();
            assert_eq!(state.bg_index, n as usize % BG_COUNT);
        }
        assert_eq!(state.press_count_a, 3 * BG_COUNT as u32);
        assert_eq!(state.fg_index, 0);
    }

    #[test]
    fn test_press_b_advances_text_modulo() {
        let mut state = AppState::new();
        for n in 1..=(2 * FG_COUNT as u32) {
            state.on_press_b();
            assert_eq!(state.fg_index, n as usize % FG_COUNT);
        }
        assert_eq!(state.press_count_b, 2 * FG_COUNT as u32);
        assert_eq!(state.bg_index, 0);
    }

    #[test]
    fn test_seven_presses_wrap_to_zero() {
        let mut state = AppState::new();
        for _ in 0..BG_COUNT {
            state.on_press_a();
        }
        assert_eq!(state.bg_index, 0);
    }

    #[test]
    fn test_press_marks_dirty() {
        let mut state = AppState::new();
        state.clear_dirty();
        state.on_press_a();
        assert!(state.dirty);

        state.clear_dirty();
        state.on_press_b();
        assert!(state.dirty);
    }
}
