//! Palette demo firmware for the Lilygo T-Display RP2040.
//!
//! Two buttons, one ST7789 240x135 panel: **A** (GPIO6) cycles the
//! background palette, **B** (GPIO7) cycles the text palette. A status band
//! along the top mirrors the live pin level of both buttons while full
//! redraws stay event-driven.
//!
//! # Architecture
//!
//! All coordination logic (debouncing, press handling, render scheduling,
//! health cadence) lives in the `tdisplay_demo` library and is driven here
//! as one cooperative tick per millisecond. This binary owns the hardware:
//! GPIO, SPI, the framebuffer, and the log sink.
//!
//! # Pinout (T-Display RP2040)
//!
//! - Display: CS=5, DC=1, RST=0, CLK=2, MOSI=3, Backlight=4
//! - Buttons: A=6, B=7 (active-low with internal pull-up)

#![no_std]
#![no_main]

mod st7789;

use defmt::{error, info, warn};
use embassy_executor::Spawner;
use embassy_rp::gpio::{Input, Level as PinLevel, Output, Pull};
use embassy_rp::spi::{Config as SpiConfig, Spi};
use embassy_time::{Instant, Timer};
use static_cell::ConstStaticCell;
use {defmt_rtt as _, panic_probe as _};

use tdisplay_demo::app::{DemoApp, RenderCommand};
use tdisplay_demo::colors::BG_PALETTE;
use tdisplay_demo::config::STATUS_BAND_HEIGHT;
use tdisplay_demo::health::{HealthClass, HealthReport};
use tdisplay_demo::input::Level;
use tdisplay_demo::memory::MemoryStats;
use tdisplay_demo::ui::{draw_full_screen, draw_status_band};

use crate::st7789::{BUFFER_SIZE, St7789Flusher, St7789Renderer};

// Program metadata for `picotool info`
#[unsafe(link_section = ".bi_entries")]
#[used]
pub static PICOTOOL_ENTRIES: [embassy_rp::binary_info::EntryAddr; 4] = [
    embassy_rp::binary_info::rp_program_name!(c"tdisplay-palette-demo"),
    embassy_rp::binary_info::rp_program_description!(c"Two-button palette demo on the T-Display RP2040"),
    embassy_rp::binary_info::rp_cargo_version!(),
    embassy_rp::binary_info::rp_program_build_attribute!(),
];

/// Single RGB565 framebuffer for the 240x135 panel.
static FRAMEBUFFER: ConstStaticCell<[u8; BUFFER_SIZE]> = ConstStaticCell::new([0; BUFFER_SIZE]);

/// SPI configuration for the ST7789 (62.5 MHz is the controller maximum).
fn display_spi_config() -> SpiConfig {
    let mut config = SpiConfig::default();
    config.frequency = 62_500_000;
    config
}

#[inline]
fn pin_level(input: &Input<'_>) -> Level {
    if input.is_low() { Level::Low } else { Level::High }
}

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("T-Display palette demo starting...");

    let p = embassy_rp::init(Default::default());

    // Backlight on before the first flush so the boot fill is visible
    let mut _backlight = Output::new(p.PIN_4, PinLevel::High);

    // Display control pins
    let cs = Output::new(p.PIN_5, PinLevel::High);
    let dc = Output::new(p.PIN_1, PinLevel::Low);
    let rst = Output::new(p.PIN_0, PinLevel::High);

    // Async SPI with DMA (TX-only, the display has no MISO)
    let spi = Spi::new_txonly(p.SPI0, p.PIN_2, p.PIN_3, p.DMA_CH0, display_spi_config());

    let mut flusher = St7789Flusher::new(spi, dc, cs, rst);
    flusher.init().await;
    info!("Display initialized");

    // Buttons (active-low with internal pull-up)
    let btn_a = Input::new(p.PIN_6, Pull::Up);
    let btn_b = Input::new(p.PIN_7, Pull::Up);
    info!("Buttons initialized");

    let framebuffer = FRAMEBUFFER.take();

    // AppState boots dirty, so the first tick paints the initial screen
    // through the ordinary full-redraw path.
    let mut app = DemoApp::new();
    let boot = Instant::now();

    info!("Main loop starting");

    loop {
        let now_ms = boot.elapsed().as_millis();
        let raw_a = pin_level(&btn_a);
        let raw_b = pin_level(&btn_b);

        let plan = app.tick(raw_a, raw_b, now_ms);

        if plan.pressed_a {
            info!("button A -> bg #{}", app.state.bg_index);
        }
        if plan.pressed_b {
            info!("button B -> fg #{}", app.state.fg_index);
        }

        match plan.render {
            Some(RenderCommand::Full { a_pressed, b_pressed }) => {
                {
                    let mut display = St7789Renderer::new(&mut framebuffer[..]);
                    draw_full_screen(&mut display, &app.state);
                    draw_status_band(&mut display, a_pressed, b_pressed, BG_PALETTE[app.state.bg_index]);
                }
                flusher.flush_full(&framebuffer[..]).await;
            }
            Some(RenderCommand::Status { a_pressed, b_pressed }) => {
                {
                    let mut display = St7789Renderer::new(&mut framebuffer[..]);
                    draw_status_band(&mut display, a_pressed, b_pressed, BG_PALETTE[app.state.bg_index]);
                }
                flusher.flush_band(&framebuffer[..], 0, STATUS_BAND_HEIGHT).await;
            }
            None => {}
        }

        if plan.health_due {
            let report = HealthReport::build(now_ms, &MemoryStats::collect(), &app.state);
            let line = report.line();
            match report.class {
                HealthClass::Nominal => info!("{=str}", line.as_str()),
                HealthClass::Warning => warn!("{=str}", line.as_str()),
                HealthClass::Critical => error!("{=str}", line.as_str()),
            }
        }

        // Keep the poll cadence fast; the flushes above are the only
        // blocking cost a tick can carry.
        Timer::after_millis(1).await;
    }
}
