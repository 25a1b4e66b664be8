//! Async ST7789 driver for the T-Display's 1.14" panel (240x135 landscape).
//!
//! The driver is split into two components:
//! - [`St7789Renderer`]: implements `DrawTarget`, writes to a framebuffer
//! - [`St7789Flusher`]: owns the SPI peripheral and control pins, pushes
//!   framebuffer contents to the display via async DMA
//!
//! Full redraws flush the whole frame; status updates flush only the top
//! band, keeping the frequent cheap path off the full-frame bus cost.
//!
//! # Panel Window
//!
//! The 135x240 glass sits inside the controller's 240x320 RAM. In landscape
//! (MADCTL MX|MV) the visible window starts at column 40, row 53; both
//! offsets are applied when setting the drawing window.

use embassy_rp::gpio::Output;
use embassy_rp::peripherals::SPI0;
use embassy_rp::spi::{Async, Spi};
use embassy_time::Timer;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;

/// Display dimensions (landscape mode after 90° rotation).
pub const WIDTH: usize = 240;
pub const HEIGHT: usize = 135;

/// Framebuffer size in bytes (RGB565, 2 bytes per pixel).
pub const BUFFER_SIZE: usize = WIDTH * HEIGHT * 2;

const ROW_BYTES: usize = WIDTH * 2;

/// Visible-window offsets of the 135x240 glass in landscape orientation.
const X_OFFSET: u16 = 40;
const Y_OFFSET: u16 = 53;

// ST7789 commands
const SWRESET: u8 = 0x01;
const SLPOUT: u8 = 0x11;
const NORON: u8 = 0x13;
const INVON: u8 = 0x21;
const DISPON: u8 = 0x29;
const CASET: u8 = 0x2A;
const RASET: u8 = 0x2B;
const RAMWR: u8 = 0x2C;
const MADCTL: u8 = 0x36;
const COLMOD: u8 = 0x3A;

// MADCTL flags
const MADCTL_MX: u8 = 0x40; // Column address order
const MADCTL_MV: u8 = 0x20; // Row/column exchange

/// ST7789 flusher - owns SPI and control pins, handles async DMA transfers.
pub struct St7789Flusher<'d> {
    spi: Spi<'d, SPI0, Async>,
    dc: Output<'d>,
    cs: Output<'d>,
    rst: Output<'d>,
}

impl<'d> St7789Flusher<'d> {
    /// Create a new flusher from SPI and control pins.
    pub fn new(
        spi: Spi<'d, SPI0, Async>,
        dc: Output<'d>,
        cs: Output<'d>,
        rst: Output<'d>,
    ) -> Self {
        Self { spi, dc, cs, rst }
    }

    /// Initialize the display hardware.
    pub async fn init(&mut self) {
        // Hardware reset (the T-Display routes RST to a GPIO)
        self.rst.set_low();
        Timer::after_millis(10).await;
        self.rst.set_high();
        Timer::after_millis(120).await;

        // Software reset
        self.write_command(SWRESET).await;
        Timer::after_millis(150).await;

        // Exit sleep mode
        self.write_command(SLPOUT).await;
        Timer::after_millis(10).await;

        // Set pixel format to RGB565 (16-bit)
        self.write_command(COLMOD).await;
        self.write_data(&[0x55]).await;

        // Set memory access control for 90° rotation (landscape)
        // MV=1 (row/col exchange), MX=1 (mirror X) = 0x60
        self.write_command(MADCTL).await;
        self.write_data(&[MADCTL_MV | MADCTL_MX]).await;

        // Inversion on (required for this panel)
        self.write_command(INVON).await;
        Timer::after_millis(10).await;

        // Normal display mode
        self.write_command(NORON).await;
        Timer::after_millis(10).await;

        // Display on
        self.write_command(DISPON).await;
        Timer::after_millis(10).await;
    }

    /// Send a command byte (DC low, CS low during transfer).
    async fn write_command(
        &mut self,
        cmd: u8,
    ) {
        self.cs.set_low();
        self.dc.set_low();
        self.spi.write(&[cmd]).await.ok();
        self.cs.set_high();
    }

    /// Send data bytes (DC high, CS low during transfer).
    async fn write_data(
        &mut self,
        data: &[u8],
    ) {
        self.cs.set_low();
        self.dc.set_high();
        self.spi.write(data).await.ok();
        self.cs.set_high();
    }

    /// Set the drawing window in panel coordinates (offsets applied here).
    async fn set_window(
        &mut self,
        x: u16,
        y: u16,
        w: u16,
        h: u16,
    ) {
        let x0 = x + X_OFFSET;
        let y0 = y + Y_OFFSET;
        let x1 = x0 + w - 1;
        let y1 = y0 + h - 1;

        self.write_command(CASET).await;
        self.write_data(&[(x0 >> 8) as u8, x0 as u8, (x1 >> 8) as u8, x1 as u8])
            .await;

        self.write_command(RASET).await;
        self.write_data(&[(y0 >> 8) as u8, y0 as u8, (y1 >> 8) as u8, y1 as u8])
            .await;
    }

    /// Flush the whole framebuffer to the display via async DMA.
    pub async fn flush_full(
        &mut self,
        buffer: &[u8],
    ) {
        self.set_window(0, 0, WIDTH as u16, HEIGHT as u16).await;
        self.write_pixels(buffer).await;
    }

    /// Flush a horizontal band of framebuffer rows `[y, y + h)`.
    ///
    /// Rows are contiguous in the framebuffer, so a band is a single slice
    /// and one DMA transfer.
    pub async fn flush_band(
        &mut self,
        buffer: &[u8],
        y: u32,
        h: u32,
    ) {
        let start = y as usize * ROW_BYTES;
        let end = (y + h) as usize * ROW_BYTES;

        self.set_window(0, y as u16, WIDTH as u16, h as u16).await;
        self.write_pixels(&buffer[start..end]).await;
    }

    /// RAMWR command then one large data transfer with CS held low.
    async fn write_pixels(
        &mut self,
        data: &[u8],
    ) {
        self.cs.set_low();
        self.dc.set_low();
        // Blocking write for the single command byte (faster than DMA setup)
        self.spi.blocking_write(&[RAMWR]).ok();
        self.dc.set_high();
        self.spi.write(data).await.ok();
        self.cs.set_high();
    }
}

/// ST7789 renderer - implements `DrawTarget`, writes to a framebuffer.
///
/// Does not own any hardware; create one whenever there is drawing to do
/// and let it go before flushing.
pub struct St7789Renderer<'a> {
    framebuffer: &'a mut [u8],
}

impl<'a> St7789Renderer<'a> {
    /// Create a renderer targeting the given framebuffer.
    pub fn new(framebuffer: &'a mut [u8]) -> Self { Self { framebuffer } }

    #[inline]
    fn set_pixel(
        &mut self,
        x: i32,
        y: i32,
        color: Rgb565,
    ) {
        if x >= 0 && x < WIDTH as i32 && y >= 0 && y < HEIGHT as i32 {
            let idx = (y as usize * WIDTH + x as usize) * 2;
            let raw: RawU16 = color.into();
            let bytes = raw.into_inner().to_be_bytes();
            self.framebuffer[idx] = bytes[0];
            self.framebuffer[idx + 1] = bytes[1];
        }
    }
}

impl OriginDimensions for St7789Renderer<'_> {
    fn size(&self) -> Size { Size::new(WIDTH as u32, HEIGHT as u32) }
}

impl DrawTarget for St7789Renderer<'_> {
    type Color = Rgb565;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &embedded_graphics::primitives::Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.bounding_box());
        if drawable_area.size == Size::zero() {
            return Ok(());
        }

        let raw: RawU16 = color.into();
        let bytes = raw.into_inner().to_be_bytes();

        let x_start = drawable_area.top_left.x as usize * 2;
        let x_end = x_start + drawable_area.size.width as usize * 2;

        for y in drawable_area.rows() {
            let row_start = y as usize * ROW_BYTES;
            let row = &mut self.framebuffer[row_start + x_start..row_start + x_end];
            for pixel in row.chunks_exact_mut(2) {
                pixel.copy_from_slice(&bytes);
            }
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let raw: RawU16 = color.into();
        let bytes = raw.into_inner().to_be_bytes();
        for pixel in self.framebuffer.chunks_exact_mut(2) {
            pixel.copy_from_slice(&bytes);
        }
        Ok(())
    }
}
