//! Screen drawing: the full redraw and the status band.
//!
//! All routines are generic over `DrawTarget<Color = Rgb565>`, so they render
//! into the firmware framebuffer and into any test double alike. Draw results
//! are infallible for the framebuffer target; `.ok()` discards them.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{PrimitiveStyle, Rectangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use profont::{PROFONT_12_POINT, PROFONT_18_POINT};

use crate::colors::{BG_PALETTE, FG_PALETTE, STATUS_PRESSED, STATUS_RELEASED};
use crate::config::{
    CENTER_X,
    HINT_BASELINE_Y,
    SCREEN_WIDTH,
    STATUS_BAND_HEIGHT,
    STATUS_INSET_X,
    STATUS_TEXT_Y,
    TITLE_Y,
};
use crate::state::AppState;

/// Centered title text.
pub const TITLE: &str = "Hello T-Display!";

/// Hint line naming the two button actions.
pub const HINT: &str = "A:bg  B:text";

const LABEL_A_PRESSED: &str = "A: PRESSED";
const LABEL_A_RELEASED: &str = "A: ---";
const LABEL_B_PRESSED: &str = "B: PRESSED";
const LABEL_B_RELEASED: &str = "B: ---";

/// Full redraw: background fill, centered title, bottom hint line.
///
/// The status band is not drawn here; the caller follows up with a forced
/// status pass so the band always reflects the live pin levels.
pub fn draw_full_screen<D>(
    display: &mut D,
    state: &AppState,
) where
    D: DrawTarget<Color = Rgb565>,
{
    let bg = BG_PALETTE[state.bg_index];
    let fg = FG_PALETTE[state.fg_index];

    display.clear(bg).ok();

    Text::with_text_style(
        TITLE,
        Point::new(CENTER_X, TITLE_Y),
        MonoTextStyle::new(&PROFONT_18_POINT, fg),
        TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Middle)
            .build(),
    )
    .draw(display)
    .ok();

    Text::with_text_style(
        HINT,
        Point::new(CENTER_X, HINT_BASELINE_Y),
        MonoTextStyle::new(&PROFONT_12_POINT, fg),
        TextStyleBuilder::new()
            .alignment(Alignment::Center)
            .baseline(Baseline::Bottom)
            .build(),
    )
    .draw(display)
    .ok();
}

/// Repaint the status band only: clear the top region, then draw both
/// button labels with a color encoding pressed/released.
pub fn draw_status_band<D>(
    display: &mut D,
    a_pressed: bool,
    b_pressed: bool,
    bg: Rgb565,
) where
    D: DrawTarget<Color = Rgb565>,
{
    Rectangle::new(Point::zero(), Size::new(SCREEN_WIDTH, STATUS_BAND_HEIGHT))
        .into_styled(PrimitiveStyle::with_fill(bg))
        .draw(display)
        .ok();

    let (label_a, color_a) = if a_pressed {
        (LABEL_A_PRESSED, STATUS_PRESSED)
    } else {
        (LABEL_A_RELEASED, STATUS_RELEASED)
    };
    let (label_b, color_b) = if b_pressed {
        (LABEL_B_PRESSED, STATUS_PRESSED)
    } else {
        (LABEL_B_RELEASED, STATUS_RELEASED)
    };

    // Button A status (top-left)
    Text::with_text_style(
        label_a,
        Point::new(STATUS_INSET_X, STATUS_TEXT_Y),
        MonoTextStyle::new(&PROFONT_12_POINT, color_a),
        TextStyleBuilder::new()
            .alignment(Alignment::Left)
            .baseline(Baseline::Top)
            .build(),
    )
    .draw(display)
    .ok();

    // Button B status (top-right)
    Text::with_text_style(
        label_b,
        Point::new(SCREEN_WIDTH as i32 - STATUS_INSET_X, STATUS_TEXT_Y),
        MonoTextStyle::new(&PROFONT_12_POINT, color_b),
        TextStyleBuilder::new()
            .alignment(Alignment::Right)
            .baseline(Baseline::Top)
            .build(),
    )
    .draw(display)
    .ok();
}
