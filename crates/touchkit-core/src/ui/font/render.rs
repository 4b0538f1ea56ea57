//! Glyph rasterisation onto any `DrawTarget`

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::{Font, FontFace, GlyphFont, builtin};

/// Draw `text` with the cursor starting at `cursor` and return the cursor
/// position after the last character.
///
/// A newline returns to the starting column on the next line. Characters a
/// glyph font doesn't cover are skipped.
pub fn draw_text<D>(
    target: &mut D,
    text: &str,
    cursor: Point,
    font: &Font<'_>,
    color: Rgb565,
) -> Result<Point, D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut pos = cursor;
    for c in text.chars() {
        match c {
            '\n' => {
                pos.x = cursor.x;
                pos.y += i32::from(font.line_height());
            }
            '\r' => {}
            _ => {
                pos = match font.face() {
                    FontFace::Builtin => builtin::draw_char(
                        target,
                        c,
                        pos,
                        font.size_x(),
                        font.size_y(),
                        color,
                    )?,
                    FontFace::Glyphs(glyphs) => draw_glyph(target, glyphs, c, pos, font, color)?,
                }
            }
        }
    }
    Ok(pos)
}

fn draw_glyph<D>(
    target: &mut D,
    glyphs: &GlyphFont<'_>,
    c: char,
    cursor: Point,
    font: &Font<'_>,
    color: Rgb565,
) -> Result<Point, D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let Some(glyph) = glyphs.glyph(c) else {
        return Ok(cursor);
    };
    let sx = i32::from(font.size_x());
    let sy = i32::from(font.size_y());
    let block = Size::new(sx as u32, sy as u32);

    let mut bit = usize::from(glyph.bitmap_offset) * 8;
    for row in 0..i32::from(glyph.height) {
        for col in 0..i32::from(glyph.width) {
            let byte = glyphs.bitmap.get(bit / 8).copied().unwrap_or(0);
            if byte & (0x80 >> (bit % 8)) != 0 {
                let top_left = Point::new(
                    cursor.x + (i32::from(glyph.x_offset) + col) * sx,
                    cursor.y + (i32::from(glyph.y_offset) + row) * sy,
                );
                target.fill_solid(&Rectangle::new(top_left, block), color)?;
            }
            bit += 1;
        }
    }

    Ok(cursor + Point::new(i32::from(glyph.x_advance) * sx, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framebuffer::FrameBuffer;
    use crate::ui::testing::TEST_FONT;

    #[test]
    fn test_glyph_box_matches_measured_bounds() {
        let font = Font::new(&TEST_FONT);
        let mut fb = FrameBuffer::new(64, 32);
        let end = draw_text(&mut fb, "1", Point::new(5, 20), &font, Rgb565::RED).unwrap();
        assert_eq!(end, Point::new(13, 20));

        // Test glyphs are solid, so the lit area is exactly the glyph box
        let b = font.text_bounds("1", Point::new(5, 20));
        for y in 0..32 {
            for x in 0..64 {
                let inside = x >= i32::from(b.left)
                    && x < i32::from(b.left) + i32::from(b.width)
                    && y >= i32::from(b.top)
                    && y < i32::from(b.top) + i32::from(b.height);
                let lit = fb.pixel(x, y) == Some(Rgb565::RED);
                assert_eq!(lit, inside, "pixel ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_newline_returns_to_start_column() {
        let font = Font::builtin();
        let mut fb = FrameBuffer::new(64, 32);
        let end = draw_text(&mut fb, "ab\nc", Point::new(10, 2), &font, Rgb565::WHITE).unwrap();
        assert_eq!(end, Point::new(16, 10));
    }

    #[test]
    fn test_uncovered_characters_do_not_move_cursor() {
        let font = Font::new(&TEST_FONT);
        let mut fb = FrameBuffer::new(8, 8);
        let end = draw_text(&mut fb, "AB", Point::new(3, 3), &font, Rgb565::WHITE).unwrap();
        assert_eq!(end, Point::new(3, 3));
        assert!(!fb.is_dirty());
    }
}
