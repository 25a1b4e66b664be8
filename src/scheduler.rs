//! Render scheduling: full redraws are event-driven, status updates are
//! time-driven.
//!
//! The full redraw repaints every pixel and is by far the most expensive bus
//! operation, so it runs only when the dirty flag says the palette state
//! changed. The status band is cheap but would still starve input polling if
//! repainted every tick, so its check runs on a minimum interval.

/// What the loop driver should render this tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RenderAction {
    /// Palette state changed: repaint the whole screen (which includes a
    /// forced status band pass).
    FullRedraw,
    /// Interval elapsed: give the status band a chance to update.
    StatusCheck,
    /// Nothing due.
    Idle,
}

/// Multiplexes the two redraw cadences onto the cooperative loop.
pub struct RenderScheduler {
    status_interval_ms: u64,
    last_status_ms: u64,
}

impl RenderScheduler {
    pub const fn new(status_interval_ms: u64) -> Self {
        Self {
            status_interval_ms,
            last_status_ms: 0,
        }
    }

    /// Decide what render work is due this tick.
    ///
    /// A full redraw repaints the status band too, so it also resets the
    /// status interval; the band is never checked twice for one repaint.
    pub fn decide(
        &mut self,
        dirty: bool,
        now_ms: u64,
    ) -> RenderAction {
        if dirty {
            self.last_status_ms = now_ms;
            return RenderAction::FullRedraw;
        }

        if now_ms.wrapping_sub(self.last_status_ms) >= self.status_interval_ms {
            self.last_status_ms = now_ms;
            return RenderAction::StatusCheck;
        }

        RenderAction::Idle
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
