//! Memory usage estimation for the RP2040.
//!
//! # Memory Layout (RP2040)
//!
//! - RAM: 264KB at 0x20000000 (SRAM0-3 striped, SRAM4/5 direct mapped)
//!
//! # Stack
//!
//! Embassy uses a single main stack growing downward from the top of RAM.
//! Usage is measured by comparing MSP to the top-of-RAM address. The free
//! estimate feeds the health classification and is deliberately coarse: it
//! is reported, never acted upon.

/// RP2040 RAM configuration.
const RAM_START: u32 = 0x2000_0000;
const RAM_SIZE: u32 = 264 * 1024; // 264KB
const RAM_END: u32 = RAM_START + RAM_SIZE;

/// Known static allocations in this firmware.
///
/// The one large buffer is the 240x135 RGB565 framebuffer.
pub const FRAMEBUFFER_SIZE: usize = 240 * 135 * 2; // 64,800 bytes

/// Estimated statics outside the framebuffer (executor, RTT buffer, misc).
const STATIC_OVERHEAD: u32 = 16 * 1024;

/// Memory statistics snapshot.
#[derive(Clone, Copy, Default)]
pub struct MemoryStats {
    /// Estimated stack usage in bytes.
    pub stack_used: u32,
    /// Known static RAM usage (framebuffer + estimated overhead).
    pub static_ram: u32,
    /// Estimated free RAM in bytes.
    pub free_estimate: u32,
    /// Total RAM available.
    pub ram_total: u32,
}

impl MemoryStats {
    /// Collect current memory statistics.
    ///
    /// # Note
    /// Stack usage is measured from the current MSP value; the static total
    /// is estimated since we don't have precise linker symbol access.
    pub fn collect() -> Self {
        let stack_used = RAM_END.saturating_sub(read_msp());
        let static_ram = FRAMEBUFFER_SIZE as u32 + STATIC_OVERHEAD;
        let free_estimate = RAM_SIZE.saturating_sub(static_ram).saturating_sub(stack_used);

        Self {
            stack_used,
            static_ram,
            free_estimate,
            ram_total: RAM_SIZE,
        }
    }

    /// Get free RAM as a percentage of total.
    pub fn free_percent(&self) -> u32 {
        if self.ram_total > 0 {
            (self.free_estimate * 100) / self.ram_total
        } else {
            0
        }
    }
}

/// Read the current main stack pointer.
#[cfg(target_arch = "arm")]
fn read_msp() -> u32 { cortex_m::register::msp::read() }

/// Placeholder for non-ARM targets (tests): pretend 4KB of stack in use.
#[cfg(not(target_arch = "arm"))]
fn read_msp() -> u32 { RAM_END - 4 * 1024 }

// =============================================================================
// Unit Tests
// =============================================================================
