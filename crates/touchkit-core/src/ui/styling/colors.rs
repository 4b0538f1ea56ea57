//! Color definitions
//!
//! Buttons take `Option<Rgb565>` for every color they paint; `None` means the
//! element is not drawn and whatever is underneath shows through. Callers
//! that store colors as packed 16-bit integers can convert through
//! [`color_from_raw`], which maps [`TRANSPARENT_RAW`] to `None`.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::pixelcolor::raw::RawU16;
use embedded_graphics::prelude::*;

use crate::config::TRANSPARENT_RAW;

pub const BLACK: Rgb565 = Rgb565::BLACK;
pub const WHITE: Rgb565 = Rgb565::WHITE;
pub const RED: Rgb565 = Rgb565::RED;
pub const GREEN: Rgb565 = Rgb565::GREEN;
pub const BLUE: Rgb565 = Rgb565::BLUE;
pub const YELLOW: Rgb565 = Rgb565::YELLOW;
pub const CYAN: Rgb565 = Rgb565::CYAN;

/// Medium-dark gray, handy for outlines
pub const DARK_GRAY: Rgb565 = Rgb565::new(64 >> 3, 64 >> 2, 64 >> 3);

/// Light gray, handy for idle fills
pub const LIGHT_GRAY: Rgb565 = Rgb565::new(200 >> 3, 200 >> 2, 200 >> 3);

/// Convert a packed 5-6-5 value into a paint color.
///
/// Returns `None` for [`TRANSPARENT_RAW`].
pub fn color_from_raw(raw: u16) -> Option<Rgb565> {
    if raw == TRANSPARENT_RAW {
        None
    } else {
        Some(Rgb565::from(RawU16::new(raw)))
    }
}

/// Inverse of [`color_from_raw`].
pub fn color_to_raw(color: Option<Rgb565>) -> u16 {
    match color {
        Some(c) => c.into_storage(),
        None => TRANSPARENT_RAW,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinel_is_transparent() {
        assert_eq!(color_from_raw(TRANSPARENT_RAW), None);
        assert_eq!(color_to_raw(None), TRANSPARENT_RAW);
    }

    #[test]
    fn test_packed_white_and_red() {
        assert_eq!(color_from_raw(0xFFFF), Some(WHITE));
        assert_eq!(color_from_raw(0xF800), Some(RED));
        assert_eq!(color_to_raw(Some(RED)), 0xF800);
    }
}
