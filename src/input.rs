//! Debounced sampling of a single GPIO line.
//!
//! Mechanical buttons bounce: the raw electrical level flickers for a few
//! milliseconds around every press and release. [`InputChannel`] samples the
//! raw level at whatever rate the loop polls it and commits a level change
//! only after the signal has held steady for the debounce window.
//!
//! Timestamps are passed in by the caller (milliseconds since boot), so the
//! channel is a pure function of time and signal history and tests run on
//! the host without a clock.

/// Logic level of a GPIO line.
///
/// Both buttons are wired active-low (pull-up to 3V3, pressed shorts to
/// ground), so `Low` means pressed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Level {
    High,
    Low,
}

impl Level {
    /// True for the active (pressed) level.
    #[inline]
    pub const fn is_low(self) -> bool { matches!(self, Self::Low) }
}

/// A committed level change on a debounced channel.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Transition {
    pub from: Level,
    pub to: Level,
}

/// Debounces one GPIO line.
///
/// Created once at startup and polled every tick; internal state persists
/// across ticks, so a tick delayed by a slow display flush still observes
/// the correct raw/stable history on the next poll.
pub struct InputChannel {
    debounce_ms: u64,
    stable: Level,
    last_raw: Level,
    last_raw_change_ms: u64,
}

impl InputChannel {
    /// Create a channel in the released state.
    pub const fn new(debounce_ms: u64) -> Self {
        Self {
            debounce_ms,
            stable: Level::High,
            last_raw: Level::High,
            last_raw_change_ms: 0,
        }
    }

    /// Sample the raw line level.
    ///
    /// A raw change restarts the debounce timer. Once the raw level has held
    /// for at least the debounce window since the last raw change and differs
    /// from the committed stable level, the new level is committed and the
    /// transition returned. Otherwise returns `None`.
    pub fn poll(
        &mut self,
        raw: Level,
        now_ms: u64,
    ) -> Option<Transition> {
        if raw != self.last_raw {
            self.last_raw = raw;
            self.last_raw_change_ms = now_ms;
            return None;
        }

        if raw != self.stable && now_ms.wrapping_sub(self.last_raw_change_ms) >= self.debounce_ms {
            let from = self.stable;
            self.stable = raw;
            return Some(Transition { from, to: raw });
        }

        None
    }

    /// The last committed (debounced) level.
    #[inline]
    pub const fn stable_level(&self) -> Level { self.stable }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: u64 = 30;

    #[test]
    fn test_sustained_low_commits_once() {
        let mut ch = InputChannel::new(WINDOW);
        assert_eq!(ch.poll(Level::Low, 10), None); // raw change, timer restarts
        assert_eq!(ch.poll(Level::Low, 20), None); // only 10ms held
        assert_eq!(
            ch.poll(Level::Low, 40),
            Some(Transition {
                from: Level::High,
                to: Level::Low
            })
        );
        // Already committed; holding further produces nothing.
        assert_eq!(ch.poll(Level::Low, 80), None);
        assert_eq!(ch.stable_level(), Level::Low);
    }

    #[test]
    fn test_commit_exactly_at_window_boundary() {
        let mut ch = InputChannel::new(WINDOW);
        ch.poll(Level::Low, 100);
        assert_eq!(ch.poll(Level::Low, 129), None);
        assert!(ch.poll(Level::Low, 130).is_some());
    }

    #[test]
    fn test_bounce_within_window_is_ignored() {
        let mut ch = InputChannel::new(WINDOW);
        // High/Low/High flicker inside 10ms: every change restarts the timer
        // and the line is back at the stable level before the window elapses.
        assert_eq!(ch.poll(Level::Low, 0), None);
        assert_eq!(ch.poll(Level::High, 5), None);
        assert_eq!(ch.poll(Level::Low, 8), None);
        assert_eq!(ch.poll(Level::High, 10), None);
        assert_eq!(ch.poll(Level::High, 100), None);
        assert_eq!(ch.stable_level(), Level::High);
    }

    #[test]
    fn test_change_restarts_timer() {
        let mut ch = InputChannel::new(WINDOW);
        ch.poll(Level::Low, 0);
        assert_eq!(ch.poll(Level::Low, 25), None);
        // Glitch back high at 26ms: the press must re-qualify from scratch.
        assert_eq!(ch.poll(Level::High, 26), None);
        assert_eq!(ch.poll(Level::Low, 27), None);
        assert_eq!(ch.poll(Level::Low, 50), None); // only 23ms since restart
        assert!(ch.poll(Level::Low, 57).is_some());
    }

    #[test]
    fn test_release_reported_as_transition() {
        let mut ch = InputChannel::new(WINDOW);
        ch.poll(Level::Low, 0);
        ch.poll(Level::Low, 30);
        assert_eq!(ch.stable_level(), Level::Low);

        ch.poll(Level::High, 100);
        assert_eq!(
            ch.poll(Level::High, 130),
            Some(Transition {
                from: Level::Low,
                to: Level::High
            })
        );
    }

    #[test]
    fn test_held_level_equal_to_stable_never_fires() {
        let mut ch = InputChannel::new(WINDOW);
        for t in 0..200 {
            assert_eq!(ch.poll(Level::High, t), None);
        }
    }
}
