//! Profile-card rendering for small grayscale displays.
//!
//! Implements the core's [`ScreenRenderer`] contract with
//! `embedded-graphics`: a card per profile on the list screen, an enlarged
//! card on the detail screen. Works against any [`DrawTarget`] whose color
//! converts from [`Gray2`] — e-paper drivers, emulators, mock displays.
//!
//! [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget
//! [`Gray2`]: embedded_graphics::pixelcolor::Gray2

#![cfg_attr(not(test), no_std)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]
#![deny(clippy::expect_used)]

pub mod render;

use embedded_graphics::draw_target::DrawTarget;
use embedded_graphics::pixelcolor::{Gray2, PixelColor};

use roster::Profile;
use ui::ScreenRenderer;

/// Profile-card renderer borrowing a display for its lifetime.
pub struct CardUi<'d, D> {
    display: &'d mut D,
}

impl<'d, D> CardUi<'d, D> {
    /// Wrap `display` as the render target.
    pub fn new(display: &'d mut D) -> Self {
        CardUi { display }
    }
}

impl<'d, D, C> ScreenRenderer for CardUi<'d, D>
where
    D: DrawTarget<Color = C>,
    D::Error: core::fmt::Debug,
    C: PixelColor + From<Gray2>,
{
    type Error = D::Error;

    fn render_list(&mut self, profiles: &[Profile]) -> Result<(), Self::Error> {
        render::list_screen(self.display, profiles)
    }

    fn render_detail(&mut self, profile: &Profile) -> Result<(), Self::Error> {
        render::detail_screen(self.display, profile)
    }
}
