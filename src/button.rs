//! Button press detection on top of the debounced input channel.
//!
//! Wraps one [`InputChannel`] in a two-state machine (`Idle`/`Pressed`) and
//! emits exactly one press event per debounced falling edge. The release
//! edge only returns the machine to `Idle`; nothing downstream cares about
//! releases, so no event is emitted for them.
//!
//! Events are delivered synchronously: the loop driver drains the returned
//! `Option` and runs the press handler to completion before polling the next
//! channel, so a press can never be lost to a slow redraw elsewhere in the
//! tick.

use crate::input::{InputChannel, Level};

/// A debounced press, delivered the instant the active level is committed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PressEvent {
    /// Timestamp of the poll that committed the press (ms since boot).
    pub at_ms: u64,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum ButtonState {
    Idle,
    Pressed,
}

/// One physical button: a debounced channel plus press-edge detection.
pub struct Button {
    channel: InputChannel,
    state: ButtonState,
}

impl Button {
    /// Create a button in the idle (released) state.
    pub const fn new(debounce_ms: u64) -> Self {
        Self {
            channel: InputChannel::new(debounce_ms),
            state: ButtonState::Idle,
        }
    }

    /// Sample the raw pin level.
    ///
    /// Returns a press event on the `Idle -> Pressed` edge of the debounced
    /// signal; the `Pressed -> Idle` edge is silent.
    pub fn poll(
        &mut self,
        raw: Level,
        now_ms: u64,
    ) -> Option<PressEvent> {
        let transition = self.channel.poll(raw, now_ms)?;

        match (self.state, transition.to) {
            (ButtonState::Idle, Level::Low) => {
                self.state = ButtonState::Pressed;
                Some(PressEvent { at_ms: now_ms })
            }
            (ButtonState::Pressed, Level::High) => {
                self.state = ButtonState::Idle;
                None
            }
            _ => None,
        }
    }

    /// True while the debounced signal sits at the active level.
    #[inline]
    pub const fn is_pressed(&self) -> bool { matches!(self.state, ButtonState::Pressed) }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: u64 = 30;

    /// Drive a full press-and-release cycle, returning emitted press events.
    fn press_cycle(
        btn: &mut Button,
        start_ms: u64,
    ) -> usize {
        let mut events = 0;
        // Hold low well past the window, then release well past it again.
        for t in [start_ms, start_ms + WINDOW, start_ms + WINDOW + 5] {
            if btn.poll(Level::Low, t).is_some() {
                events += 1;
            }
        }
        for t in [start_ms + 100, start_ms + 100 + WINDOW] {
            if btn.poll(Level::High, t).is_some() {
                events += 1;
            }
        }
        events
    }

    #[test]
    fn test_one_event_per_press() {
        let mut btn = Button::new(WINDOW);
        assert_eq!(press_cycle(&mut btn, 0), 1);
        assert_eq!(press_cycle(&mut btn, 1000), 1);
        assert_eq!(press_cycle(&mut btn, 2000), 1);
    }

    #[test]
    fn test_release_is_silent() {
        let mut btn = Button::new(WINDOW);
        btn.poll(Level::Low, 0);
        assert!(btn.poll(Level::Low, WINDOW).is_some());
        assert!(btn.is_pressed());

        btn.poll(Level::High, 100);
        assert_eq!(btn.poll(Level::High, 100 + WINDOW), None);
        assert!(!btn.is_pressed());
    }

    #[test]
    fn test_event_carries_commit_timestamp() {
        let mut btn = Button::new(WINDOW);
        btn.poll(Level::Low, 10);
        let event = btn.poll(Level::Low, 55).expect("press should commit");
        assert_eq!(event.at_ms, 55);
    }

    #[test]
    fn test_bounce_fires_nothing() {
        let mut btn = Button::new(WINDOW);
        for (level, t) in [
            (Level::Low, 0),
            (Level::High, 4),
            (Level::Low, 7),
            (Level::High, 10),
            (Level::High, 200),
        ] {
            assert_eq!(btn.poll(level, t), None);
        }
        assert!(!btn.is_pressed());
    }
}
