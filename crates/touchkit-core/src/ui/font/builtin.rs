//! The built-in classic fixed-width font
//!
//! Characters come from the embedded-graphics 5x7 ASCII font, drawn in the
//! top-left of a 6x8 cell so that one column and one row of spacing separate
//! neighbours. Magnification is applied by [`CellCanvas`], which turns every
//! font pixel into a `size_x` x `size_y` block.

use embedded_graphics::mono_font::{MonoTextStyle, ascii::FONT_5X7};
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};

use super::GlyphMetrics;
use crate::config::{BUILTIN_CELL_HEIGHT, BUILTIN_CELL_WIDTH};

/// Metrics of a full character cell at the given magnification.
pub fn cell_metrics(size_x: u8, size_y: u8) -> GlyphMetrics {
    let width = u16::from(BUILTIN_CELL_WIDTH) * u16::from(size_x);
    GlyphMetrics {
        x_offset: 0,
        y_offset: 0,
        width,
        height: u16::from(BUILTIN_CELL_HEIGHT) * u16::from(size_y),
        x_advance: width as i16,
    }
}

/// Ink box of the `"` character, relative to the cell's top-left corner.
///
/// The two strokes of `"` span columns 1-3 and rows 0-2 of the cell.
pub fn quote_metrics(size_x: u8, size_y: u8) -> GlyphMetrics {
    let sx = i16::from(size_x);
    GlyphMetrics {
        x_offset: sx,
        y_offset: 0,
        width: 3 * u16::from(size_x),
        height: 3 * u16::from(size_y),
        x_advance: i16::from(BUILTIN_CELL_WIDTH) * sx,
    }
}

/// Draw one character with its cell's top-left corner at `cursor` and return
/// the cursor for the next character.
pub fn draw_char<D>(
    target: &mut D,
    c: char,
    cursor: Point,
    size_x: u8,
    size_y: u8,
    color: Rgb565,
) -> Result<Point, D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut buf = [0u8; 4];
    let text = c.encode_utf8(&mut buf);
    let mut canvas = CellCanvas {
        target,
        origin: cursor,
        scale_x: u32::from(size_x.max(1)),
        scale_y: u32::from(size_y.max(1)),
    };
    Text::with_baseline(
        text,
        Point::zero(),
        MonoTextStyle::new(&FONT_5X7, color),
        Baseline::Top,
    )
    .draw(&mut canvas)?;

    Ok(cursor + Point::new(i32::from(BUILTIN_CELL_WIDTH) * canvas.scale_x as i32, 0))
}

/// One character cell mapped onto a larger target with integer scaling.
struct CellCanvas<'t, D> {
    target: &'t mut D,
    origin: Point,
    scale_x: u32,
    scale_y: u32,
}

impl<D> OriginDimensions for CellCanvas<'_, D> {
    fn size(&self) -> Size {
        Size::new(
            u32::from(BUILTIN_CELL_WIDTH),
            u32::from(BUILTIN_CELL_HEIGHT),
        )
    }
}

impl<D> DrawTarget for CellCanvas<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    type Color = Rgb565;
    type Error = D::Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let block = Size::new(self.scale_x, self.scale_y);
        for Pixel(p, color) in pixels {
            let top_left = Point::new(
                self.origin.x + p.x * self.scale_x as i32,
                self.origin.y + p.y * self.scale_y as i32,
            );
            self.target
                .fill_solid(&Rectangle::new(top_left, block), color)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;

    #[test]
    fn test_cell_metrics_scale() {
        let m = cell_metrics(2, 3);
        assert_eq!((m.width, m.height, m.x_advance), (12, 24, 12));
    }

    #[test]
    fn test_quote_ink_box() {
        let m = quote_metrics(1, 1);
        assert_eq!((m.x_offset, m.y_offset, m.width, m.height), (1, 0, 3, 3));
        assert_eq!(m.x_advance, 6);
    }

    #[test]
    fn test_draw_char_stays_in_cell_and_advances() {
        let mut fb = FrameBuffer::new(40, 40);
        let next = draw_char(&mut fb, 'H', Point::new(4, 4), 2, 2, Rgb565::WHITE).unwrap();
        assert_eq!(next, Point::new(16, 4));

        let mut lit = 0;
        for y in 0..40 {
            for x in 0..40 {
                if fb.pixel(x, y) == Some(Rgb565::WHITE) {
                    assert!((4..16).contains(&x) && (4..20).contains(&y));
                    lit += 1;
                }
            }
        }
        // Magnified pixels come in 2x2 blocks
        assert!(lit > 0);
        assert_eq!(lit % 4, 0);
    }
}
