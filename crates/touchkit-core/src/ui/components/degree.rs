//! Degree symbol drawn after a label
//!
//! Fonts rarely carry a usable `°`, so the symbol is drawn as a ring: a disk
//! in the text color with a smaller disk in the fill color punched out of
//! it. Its size is derived from the `"` glyph, which sits at the right
//! height and has roughly the right width.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;

use crate::config::{DEGREE_MIN_INNER_RADIUS, DEGREE_MIN_OUTER_RADIUS};
use crate::ui::font::{Font, FontFace, TextMetrics, builtin};
use crate::ui::surface::{DrawError, Surface};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeSymbol {
    /// Cursor to the symbol's top-left corner
    pub dx: i16,
    pub dy: i16,
    pub advance: i16,
    pub diameter: u16,
    pub outer_radius: u16,
    pub inner_radius: u16,
}

impl DegreeSymbol {
    pub fn for_font(font: &Font<'_>) -> Self {
        let quote = match font.face() {
            FontFace::Builtin => builtin::quote_metrics(font.size_x(), font.size_y()),
            FontFace::Glyphs(_) => font.glyph_metrics('"').unwrap_or_default(),
        };

        let min_outer = u16::from(DEGREE_MIN_OUTER_RADIUS);
        let mut diameter = quote.height;
        let mut advance = quote.x_advance;
        let mut outer_radius = diameter / 2;
        if outer_radius < min_outer {
            outer_radius = min_outer;
            if diameter < 2 * min_outer {
                advance += (2 * min_outer - diameter) as i16;
                diameter = 2 * min_outer;
            }
        }
        let ring = (3 * diameter / 11).min(outer_radius);
        let inner_radius = (outer_radius - ring).max(u16::from(DEGREE_MIN_INNER_RADIUS));

        Self {
            dx: quote.x_offset,
            dy: quote.y_offset,
            advance,
            diameter,
            outer_radius,
            inner_radius,
        }
    }

    /// Metrics in the same form as [`Font::text_bounds_and_offset`], so the
    /// symbol can be appended to a label with [`TextMetrics::followed_by`].
    pub fn metrics(&self) -> TextMetrics {
        TextMetrics {
            dx: self.dx,
            dy: self.dy,
            width: self.diameter,
            height: self.diameter,
            advance: self.advance,
        }
    }

    /// Draw with the text cursor at `cursor`. The hole is skipped when
    /// `hole` is `None`.
    pub fn draw(
        &self,
        surface: &mut dyn Surface,
        cursor: Point,
        ring: Rgb565,
        hole: Option<Rgb565>,
    ) -> Result<(), DrawError> {
        let r = i32::from(self.outer_radius);
        let center = cursor + Point::new(i32::from(self.dx) + r, i32::from(self.dy) + r);
        surface.fill_circle(center, self.outer_radius, ring)?;
        if let Some(color) = hole {
            surface.fill_circle(center, self.inner_radius, color)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::styling::{BLACK, WHITE};
    use crate::ui::testing::{DrawOp, RecordingSurface, TEST_FONT};

    #[test]
    fn test_small_font_gets_minimum_ring() {
        let d = DegreeSymbol::for_font(&Font::builtin());
        assert_eq!(
            d,
            DegreeSymbol {
                dx: 1,
                dy: 0,
                advance: 11,
                diameter: 8,
                outer_radius: 4,
                inner_radius: 2,
            }
        );
    }

    #[test]
    fn test_large_font_keeps_quote_size() {
        // '"' is 4x4 in the test font, 12x12 at size 3
        let d = DegreeSymbol::for_font(&Font::new(&TEST_FONT).with_size(3, 3));
        assert_eq!(d.diameter, 12);
        assert_eq!(d.outer_radius, 6);
        assert_eq!(d.inner_radius, 3);
        assert_eq!(d.advance, 18);
        assert_eq!((d.dx, d.dy), (3, -30));
    }

    #[test]
    fn test_draw_ring_then_hole() {
        let d = DegreeSymbol::for_font(&Font::builtin());
        let mut surface = RecordingSurface::new();
        d.draw(&mut surface, Point::new(10, 10), WHITE, Some(BLACK))
            .unwrap();
        assert_eq!(
            surface.take(),
            [
                DrawOp::FillCircle(Point::new(15, 14), 4, WHITE),
                DrawOp::FillCircle(Point::new(15, 14), 2, BLACK),
            ]
        );

        d.draw(&mut surface, Point::new(10, 10), WHITE, None).unwrap();
        assert_eq!(surface.take().len(), 1);
    }
}
