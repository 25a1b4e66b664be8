//! Palette demo for the Lilygo T-Display RP2040 - testable modules.
//!
//! This library contains the coordination logic that can be tested on the
//! host machine: debounced input, button state machines, shared UI state,
//! render scheduling, and health reporting. The binary (`main.rs`) uses this
//! library and adds the embedded-specific code (ST7789 driver, GPIO,
//! executor).
//!
//! # Testing
//!
//! Run tests on host with:
//! ```bash
//! cargo test --lib
//! ```
//!
//! Tests run with `std` enabled (via `cfg_attr`), allowing use of the
//! standard test framework while the actual firmware runs as `no_std`.

// Use no_std only when NOT testing (tests need std for the test harness)
#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod button;
pub mod colors;
pub mod config;
pub mod health;
pub mod input;
pub mod memory;
pub mod scheduler;
pub mod state;
pub mod status;
pub mod ui;
