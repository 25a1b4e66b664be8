//! Periodic health reporting: uptime, free memory, press counters.
//!
//! Every report carries a three-tier classification derived from the free
//! memory estimate. The classification is informational only; nothing in
//! the control path reacts to it.

use core::fmt::Write;

use heapless::String;

use crate::memory::MemoryStats;
use crate::state::AppState;

/// Free memory below this is reported as a warning.
pub const FREE_WARNING_BYTES: u32 = 32 * 1024;

/// Free memory below this is reported as critical.
pub const FREE_CRITICAL_BYTES: u32 = 8 * 1024;

/// Maximum characters in a formatted report line.
pub const REPORT_LINE_LEN: usize = 96;

/// Qualitative health classification.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum HealthClass {
    Nominal,
    Warning,
    Critical,
}

impl HealthClass {
    /// Classify a free-memory estimate.
    pub const fn classify(free_bytes: u32) -> Self {
        if free_bytes < FREE_CRITICAL_BYTES {
            Self::Critical
        } else if free_bytes < FREE_WARNING_BYTES {
            Self::Warning
        } else {
            Self::Nominal
        }
    }

    /// Label used in the report line.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Nominal => "nominal",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

/// One periodic health report.
#[derive(Clone, Copy)]
pub struct HealthReport {
    pub uptime_s: u32,
    pub free_bytes: u32,
    pub press_count_a: u32,
    pub press_count_b: u32,
    pub class: HealthClass,
}

impl HealthReport {
    /// Assemble a report from the current state.
    pub fn build(
        now_ms: u64,
        mem: &MemoryStats,
        state: &AppState,
    ) -> Self {
        Self {
            uptime_s: (now_ms / 1000) as u32,
            free_bytes: mem.free_estimate,
            press_count_a: state.press_count_a,
            press_count_b: state.press_count_b,
            class: HealthClass::classify(mem.free_estimate),
        }
    }

    /// Render the report as a single log line.
    pub fn line(&self) -> String<REPORT_LINE_LEN> {
        let mut line = String::new();
        let _ = write!(
            line,
            "health {}: up {}s, free {}B, presses A={} B={}",
            self.class.label(),
            self.uptime_s,
            self.free_bytes,
            self.press_count_a,
            self.press_count_b,
        );
        line
    }
}

/// Rate limiter for the periodic reports.
pub struct HealthTicker {
    interval_ms: u64,
    last_report_ms: u64,
}

impl HealthTicker {
    pub const fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            last_report_ms: 0,
        }
    }

    /// True at most once per interval; the first report lands one full
    /// interval after boot (the startup banner covers t=0).
    pub fn due(
        &mut self,
        now_ms: u64,
    ) -> bool {
        if now_ms.wrapping_sub(self.last_report_ms) >= self.interval_ms {
            self.last_report_ms = now_ms;
            return true;
        }
        false
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_thresholds() {
        assert_eq!(HealthClass::classify(200_000), HealthClass::Nominal);
        assert_eq!(HealthClass::classify(FREE_WARNING_BYTES), HealthClass::Nominal);
        assert_eq!(HealthClass::classify(FREE_WARNING_BYTES - 1), HealthClass::Warning);
        assert_eq!(HealthClass::classify(FREE_CRITICAL_BYTES), HealthClass::Warning);
        assert_eq!(HealthClass::classify(FREE_CRITICAL_BYTES - 1), HealthClass::Critical);
        assert_eq!(HealthClass::classify(0), HealthClass::Critical);
    }

    #[test]
    fn test_report_line_contents() {
        let mem = MemoryStats {
            stack_used: 4096,
            static_ram: 80_000,
            free_estimate: 150_000,
            ram_total: 270_336,
        };
        let mut state = AppState::new();
        state.on_press_a();
        state.on_press_a();
        state.on_press_b();

        let report = HealthReport::build(42_500, &mem, &state);
        assert_eq!(report.uptime_s, 42);
        assert_eq!(report.class, HealthClass::Nominal);

        let line = report.line();
        assert_eq!(
            line.as_str(),
            "health nominal: up 42s, free 150000B, presses A=2 B=1"
        );
    }

    #[test]
    fn test_ticker_cadence() {
        let mut ticker = HealthTicker::new(10_000);
        assert!(!ticker.due(0));
        assert!(!ticker.due(9_999));
        assert!(ticker.due(10_000));
        assert!(!ticker.due(15_000));
        assert!(ticker.due(20_500));
        // Interval restarts from the report that ran.
        assert!(!ticker.due(30_000));
        assert!(ticker.due(30_500));
    }
}
