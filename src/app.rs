//! Cooperative loop driver: one tick of input polling, state mutation, and
//! render/health scheduling.
//!
//! Each tick runs the same fixed order: poll channel A, then B, run any
//! press handlers to completion, then decide render work, then check the
//! health cadence. Polling always precedes drawing, and channel state
//! persists across ticks, so a tick stretched by a slow flush can never
//! cost a press.
//!
//! The driver owns no hardware. It returns a [`TickPlan`] describing the
//! I/O the binary must perform, which keeps every scheduling decision
//! testable on the host.

use crate::button::Button;
use crate::config::{DEBOUNCE_WINDOW_MS, HEALTH_INTERVAL_MS, STATUS_INTERVAL_MS};
use crate::health::HealthTicker;
use crate::input::Level;
use crate::scheduler::{RenderAction, RenderScheduler};
use crate::state::AppState;
use crate::status::StatusSnapshot;

/// Render work the caller must execute after a tick.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum RenderCommand {
    /// Repaint the whole screen, then the status band with the given live
    /// levels, then flush the full frame.
    Full { a_pressed: bool, b_pressed: bool },
    /// Repaint only the status band with the given live levels and flush it.
    Status { a_pressed: bool, b_pressed: bool },
}

/// Outcome of one tick.
#[derive(Clone, Copy, Debug)]
pub struct TickPlan {
    /// Button A fired a debounced press this tick.
    pub pressed_a: bool,
    /// Button B fired a debounced press this tick.
    pub pressed_b: bool,
    /// Render work due, if any.
    pub render: Option<RenderCommand>,
    /// A health report is due.
    pub health_due: bool,
}

/// The demo application: all coordination state in one place.
pub struct DemoApp {
    pub state: AppState,
    button_a: Button,
    button_b: Button,
    scheduler: RenderScheduler,
    snapshot: StatusSnapshot,
    health: HealthTicker,
}

impl DemoApp {
    pub const fn new() -> Self {
        Self {
            state: AppState::new(),
            button_a: Button::new(DEBOUNCE_WINDOW_MS),
            button_b: Button::new(DEBOUNCE_WINDOW_MS),
            scheduler: RenderScheduler::new(STATUS_INTERVAL_MS),
            snapshot: StatusSnapshot::new(),
            health: HealthTicker::new(HEALTH_INTERVAL_MS),
        }
    }

    /// One cooperative tick.
    ///
    /// `raw_a`/`raw_b` are the live pin levels sampled by the caller this
    /// tick. They feed both the debounced press path (palette state) and the
    /// status band (live indication); the two paths stay deliberately
    /// separate, so the band may show sub-debounce flicker.
    pub fn tick(
        &mut self,
        raw_a: Level,
        raw_b: Level,
        now_ms: u64,
    ) -> TickPlan {
        let pressed_a = self.button_a.poll(raw_a, now_ms).is_some();
        if pressed_a {
            self.state.on_press_a();
        }

        let pressed_b = self.button_b.poll(raw_b, now_ms).is_some();
        if pressed_b {
            self.state.on_press_b();
        }

        let a_live = raw_a.is_low();
        let b_live = raw_b.is_low();

        let render = match self.scheduler.decide(self.state.dirty, now_ms) {
            RenderAction::FullRedraw => {
                self.state.clear_dirty();
                // Forced pass keeps the snapshot in step with the band the
                // full redraw is about to repaint.
                self.snapshot.check(a_live, b_live, true);
                Some(RenderCommand::Full {
                    a_pressed: a_live,
                    b_pressed: b_live,
                })
            }
            RenderAction::StatusCheck => self
                .snapshot
                .check(a_live, b_live, false)
                .map(|(a_pressed, b_pressed)| RenderCommand::Status { a_pressed, b_pressed }),
            RenderAction::Idle => None,
        };

        TickPlan {
            pressed_a,
            pressed_b,
            render,
            health_due: self.health.due(now_ms),
        }
    }
}

impl Default for DemoApp {
    fn default() -> Self { Self::new() }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors::BG_COUNT;

    /// Run the initial tick that consumes the boot-time dirty flag.
    fn boot(app: &mut DemoApp) {
        let plan = app.tick(Level::High, Level::High, 0);
        assert!(matches!(plan.render, Some(RenderCommand::Full { .. })));
        assert!(!app.state.dirty);
    }

    #[test]
    fn test_first_tick_performs_initial_redraw() {
        let mut app = DemoApp::new();
        boot(&mut app);
        // And only once.
        let plan = app.tick(Level::High, Level::High, 1);
        assert_eq!(plan.render, None);
    }

    #[test]
    fn test_press_cycles_background_and_redraws_once() {
        let mut app = DemoApp::new();
        boot(&mut app);

        // Raw level on pin A goes low at t=100 and holds. 30ms window:
        // the press commits at t=140, within the 40ms hold.
        let plan = app.tick(Level::Low, Level::High, 100);
        assert!(!plan.pressed_a);

        let plan = app.tick(Level::Low, Level::High, 140);
        assert!(plan.pressed_a);
        assert_eq!(app.state.bg_index, 1);
        // Same tick: the scheduler sees the dirty flag, orders one full
        // redraw, and the flag is cleared exactly once.
        assert!(matches!(plan.render, Some(RenderCommand::Full { a_pressed: true, .. })));
        assert!(!app.state.dirty);

        // No second redraw for the same press.
        let plan = app.tick(Level::Low, Level::High, 141);
        assert!(!plan.pressed_a);
        assert_eq!(plan.render, None);
    }

    #[test]
    fn test_seven_presses_wrap_background_to_zero() {
        let mut app = DemoApp::new();
        boot(&mut app);

        let mut t = 1000;
        for _ in 0..BG_COUNT {
            app.tick(Level::Low, Level::High, t);
            let plan = app.tick(Level::Low, Level::High, t + 30);
            assert!(plan.pressed_a);
            app.tick(Level::High, Level::High, t + 100);
            app.tick(Level::High, Level::High, t + 130);
            t += 200;
        }
        assert_eq!(app.state.bg_index, 0);
        assert_eq!(app.state.press_count_a, BG_COUNT as u32);
    }

    #[test]
    fn test_bounce_on_both_buttons_fires_nothing() {
        let mut app = DemoApp::new();
        boot(&mut app);

        for (level, t) in [
            (Level::Low, 10),
            (Level::High, 14),
            (Level::Low, 17),
            (Level::High, 20),
            (Level::High, 200),
        ] {
            let plan = app.tick(level, level, t);
            assert!(!plan.pressed_a);
            assert!(!plan.pressed_b);
        }
        assert_eq!(app.state.bg_index, 0);
        assert_eq!(app.state.fg_index, 0);
    }

    #[test]
    fn test_status_band_shows_latest_level_once_per_interval() {
        let mut app = DemoApp::new();
        boot(&mut app); // band drawn (released/released), interval starts at 0

        // Two physical presses 10ms apart inside one 50ms interval: no
        // drawing happens between checks.
        let plan = app.tick(Level::Low, Level::High, 10);
        assert_eq!(plan.render, None);
        let plan = app.tick(Level::High, Level::High, 15);
        assert_eq!(plan.render, None);
        let plan = app.tick(Level::Low, Level::High, 20);
        assert_eq!(plan.render, None);

        // Next scheduled check reflects only the latest physical level.
        let plan = app.tick(Level::Low, Level::High, 55);
        assert_eq!(
            plan.render,
            Some(RenderCommand::Status {
                a_pressed: true,
                b_pressed: false
            })
        );
    }

    #[test]
    fn test_unchanged_status_suppressed_at_check() {
        let mut app = DemoApp::new();
        boot(&mut app);

        // Interval elapses but both levels still match the drawn band.
        let plan = app.tick(Level::High, Level::High, 60);
        assert_eq!(plan.render, None);
        let plan = app.tick(Level::High, Level::High, 120);
        assert_eq!(plan.render, None);
    }

    #[test]
    fn test_full_redraw_reports_live_levels() {
        let mut app = DemoApp::new();
        // Button A held at boot: the initial redraw's band must show it
        // pressed even though no debounced press fired yet.
        let plan = app.tick(Level::Low, Level::High, 0);
        assert_eq!(
            plan.render,
            Some(RenderCommand::Full {
                a_pressed: true,
                b_pressed: false
            })
        );
        assert!(!plan.pressed_a);
    }

    #[test]
    fn test_health_cadence() {
        let mut app = DemoApp::new();
        boot(&mut app);

        assert!(!app.tick(Level::High, Level::High, 5_000).health_due);
        assert!(app.tick(Level::High, Level::High, 10_000).health_due);
        assert!(!app.tick(Level::High, Level::High, 15_000).health_due);
        assert!(app.tick(Level::High, Level::High, 20_000).health_due);
    }

    #[test]
    fn test_press_survives_a_stalled_tick() {
        let mut app = DemoApp::new();
        boot(&mut app);

        // Button goes down at t=100; the next poll only happens at t=400
        // (a long blocking flush elsewhere). Channel state is retained, so
        // the press still fires on the first poll that sees it held.
        app.tick(Level::Low, Level::High, 100);
        let plan = app.tick(Level::Low, Level::High, 400);
        assert!(plan.pressed_a);
        assert_eq!(app.state.bg_index, 1);
    }
}
