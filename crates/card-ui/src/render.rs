//! Screen drawing — app bar, profile cards, status rings.

#![allow(clippy::doc_markdown)] // UI docs reference types that are clearer without enforced backtick formatting
// UI rendering code casts display dimensions (u32 from embedded-graphics) to i32
// for coordinate arithmetic.  Display sizes are at most 800×480, which fit safely
// in i32.  Arithmetic operations on small display coordinates cannot overflow i32.
#![allow(
    clippy::cast_possible_wrap,
    clippy::cast_possible_truncation,
    clippy::arithmetic_side_effects,
)]

use embedded_graphics::mono_font::ascii::{FONT_10X20, FONT_6X10, FONT_9X18};
use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::{Gray2, PixelColor};
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, Rectangle};
use embedded_graphics::text::Text;

use roster::Profile;

/// App bar height in pixels.
const APP_BAR_H: u32 = 24;
/// List card height in pixels.
const CARD_H: u32 = 48;
/// Horizontal card margin.
const CARD_MARGIN: i32 = 4;
/// Status ring diameter on the list screen.
const RING_D: u32 = 28;
/// Status ring diameter on the detail screen.
const DETAIL_RING_D: u32 = 96;

/// Caption for an online profile.
const CAPTION_ONLINE: &str = "Active Now";
/// Caption for an offline profile.
const CAPTION_OFFLINE: &str = "Offline";

/// Render the list screen: app bar plus one card per profile, in order.
///
/// Rows that do not fit the display height are truncated silently
/// (small-display reality); callers scroll by re-rendering a sub-slice.
///
/// # Errors
///
/// Returns `D::Error` if any drawing operation fails.
pub fn list_screen<D, C>(display: &mut D, profiles: &[Profile]) -> Result<(), D::Error>
where
    D: DrawTarget<Color = C>,
    C: PixelColor + From<Gray2>,
{
    let bounds = display.bounding_box();
    clear(display, &bounds)?;
    app_bar(display, &bounds, "Profiles")?;

    let mut y = APP_BAR_H as i32 + CARD_MARGIN;
    for profile in profiles {
        if y + CARD_H as i32 > bounds.size.height as i32 {
            break;
        }
        card(display, &bounds, profile, y)?;
        y += CARD_H as i32 + CARD_MARGIN;
    }
    Ok(())
}

/// Render the detail screen: app bar, enlarged status ring with the
/// profile's initial, centered name and status caption.
///
/// # Errors
///
/// Returns `D::Error` if any drawing operation fails.
pub fn detail_screen<D, C>(display: &mut D, profile: &Profile) -> Result<(), D::Error>
where
    D: DrawTarget<Color = C>,
    C: PixelColor + From<Gray2>,
{
    let bounds = display.bounding_box();
    clear(display, &bounds)?;
    app_bar(display, &bounds, "Profile")?;

    let center_x = bounds.center().x;
    let ring_top = APP_BAR_H as i32 + 16;

    status_ring(
        display,
        Point::new(center_x, ring_top + DETAIL_RING_D as i32 / 2),
        DETAIL_RING_D,
        profile,
        &FONT_10X20,
    )?;

    let name_style = MonoTextStyle::new(&FONT_10X20, C::from(Gray2::BLACK));
    let name_y = ring_top + DETAIL_RING_D as i32 + 28;
    Text::new(
        profile.name.as_str(),
        Point::new(centered_x(center_x, profile.name.len(), 10), name_y),
        name_style,
    )
    .draw(display)?;

    let caption = status_caption(profile);
    let caption_style = MonoTextStyle::new(&FONT_6X10, C::from(Gray2::new(0x1)));
    Text::new(
        caption,
        Point::new(centered_x(center_x, caption.len(), 6), name_y + 18),
        caption_style,
    )
    .draw(display)?;

    Ok(())
}

/// Clear the whole display to white.
fn clear<D, C>(display: &mut D, bounds: &Rectangle) -> Result<(), D::Error>
where
    D: DrawTarget<Color = C>,
    C: PixelColor + From<Gray2>,
{
    Rectangle::new(bounds.top_left, bounds.size)
        .into_styled(PrimitiveStyle::with_fill(C::from(Gray2::WHITE)))
        .draw(display)
}

/// Draw the top app bar with `title`.
fn app_bar<D, C>(display: &mut D, bounds: &Rectangle, title: &str) -> Result<(), D::Error>
where
    D: DrawTarget<Color = C>,
    C: PixelColor + From<Gray2>,
{
    Rectangle::new(bounds.top_left, Size::new(bounds.size.width, APP_BAR_H))
        .into_styled(PrimitiveStyle::with_fill(C::from(Gray2::BLACK)))
        .draw(display)?;

    let style = MonoTextStyle::new(&FONT_9X18, C::from(Gray2::WHITE));
    Text::new(title, Point::new(8, 17), style).draw(display)?;
    Ok(())
}

/// Draw one list card: border, status ring, name, status caption.
fn card<D, C>(
    display: &mut D,
    bounds: &Rectangle,
    profile: &Profile,
    y: i32,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = C>,
    C: PixelColor + From<Gray2>,
{
    let card_w = bounds.size.width.saturating_sub(2 * CARD_MARGIN as u32);
    Rectangle::new(Point::new(CARD_MARGIN, y), Size::new(card_w, CARD_H))
        .into_styled(PrimitiveStyle::with_stroke(C::from(Gray2::BLACK), 1))
        .draw(display)?;

    status_ring(
        display,
        Point::new(CARD_MARGIN + 8 + RING_D as i32 / 2, y + CARD_H as i32 / 2),
        RING_D,
        profile,
        &FONT_9X18,
    )?;

    let text_x = CARD_MARGIN + 16 + RING_D as i32;
    let name_style = MonoTextStyle::new(&FONT_9X18, C::from(Gray2::BLACK));
    Text::new(profile.name.as_str(), Point::new(text_x, y + 20), name_style).draw(display)?;

    let caption_style = MonoTextStyle::new(&FONT_6X10, C::from(Gray2::new(0x1)));
    Text::new(
        status_caption(profile),
        Point::new(text_x, y + 36),
        caption_style,
    )
    .draw(display)?;

    Ok(())
}

/// Draw a status ring with the profile's initial in the middle.
///
/// The reference design borders the picture green (online) or red
/// (offline); in grayscale that becomes a solid black ring vs. a light one.
/// The picture reference itself is opaque to this renderer, so the initial
/// letter stands in for the image.
fn status_ring<D, C>(
    display: &mut D,
    center: Point,
    diameter: u32,
    profile: &Profile,
    font: &embedded_graphics::mono_font::MonoFont<'static>,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = C>,
    C: PixelColor + From<Gray2>,
{
    let ring_color = if profile.online {
        C::from(Gray2::BLACK)
    } else {
        C::from(Gray2::new(0x1))
    };
    let stroke = if profile.online { 3 } else { 1 };
    Circle::with_center(center, diameter)
        .into_styled(PrimitiveStyle::with_stroke(ring_color, stroke))
        .draw(display)?;

    let mut buf = [0u8; 4];
    let initial = profile
        .name
        .chars()
        .next()
        .unwrap_or('?')
        .encode_utf8(&mut buf);
    let glyph_w = font.character_size.width as i32;
    let glyph_h = font.character_size.height as i32;
    let style = MonoTextStyle::new(font, C::from(Gray2::BLACK));
    Text::new(
        initial,
        Point::new(center.x - glyph_w / 2, center.y + glyph_h / 3),
        style,
    )
    .draw(display)?;

    Ok(())
}

/// Presence caption for `profile`.
fn status_caption(profile: &Profile) -> &'static str {
    if profile.online {
        CAPTION_ONLINE
    } else {
        CAPTION_OFFLINE
    }
}

/// Approximate x for centering `len` monospace glyphs of width `glyph_w`
/// around `center_x`.
fn centered_x(center_x: i32, len: usize, glyph_w: i32) -> i32 {
    center_x - (len as i32 * glyph_w) / 2
}
