//! Test doubles shared by the unit tests.

use alloc::string::String;
use alloc::vec::Vec;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::font::{Font, Glyph, GlyphFont};
use crate::ui::surface::{DrawError, Surface};

/// One recorded [`Surface`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    FillRect(Rectangle, Rgb565),
    StrokeRect(Rectangle, Rgb565),
    FillRoundedRect(Rectangle, u16, Rgb565),
    StrokeRoundedRect(Rectangle, u16, Rgb565),
    FillTriangle([Point; 3], Rgb565),
    StrokeTriangle([Point; 3], Rgb565),
    FillCircle(Point, u16, Rgb565),
    Text(String, Point, Rgb565),
}

/// Surface that records calls instead of drawing them.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<DrawOp> {
        core::mem::take(&mut self.ops)
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), DrawError> {
        self.ops.push(DrawOp::FillRect(area, color));
        Ok(())
    }

    fn stroke_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), DrawError> {
        self.ops.push(DrawOp::StrokeRect(area, color));
        Ok(())
    }

    fn fill_rounded_rect(
        &mut self,
        area: Rectangle,
        radius: u16,
        color: Rgb565,
    ) -> Result<(), DrawError> {
        self.ops.push(DrawOp::FillRoundedRect(area, radius, color));
        Ok(())
    }

    fn stroke_rounded_rect(
        &mut self,
        area: Rectangle,
        radius: u16,
        color: Rgb565,
    ) -> Result<(), DrawError> {
        self.ops.push(DrawOp::StrokeRoundedRect(area, radius, color));
        Ok(())
    }

    fn fill_triangle(&mut self, vertices: [Point; 3], color: Rgb565) -> Result<(), DrawError> {
        self.ops.push(DrawOp::FillTriangle(vertices, color));
        Ok(())
    }

    fn stroke_triangle(&mut self, vertices: [Point; 3], color: Rgb565) -> Result<(), DrawError> {
        self.ops.push(DrawOp::StrokeTriangle(vertices, color));
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: u16, color: Rgb565) -> Result<(), DrawError> {
        self.ops.push(DrawOp::FillCircle(center, radius, color));
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        cursor: Point,
        font: &Font<'_>,
        color: Rgb565,
    ) -> Result<Point, DrawError> {
        self.ops.push(DrawOp::Text(String::from(text), cursor, color));
        Ok(font.text_bounds(text, cursor).end)
    }
}

const fn g(width: u8, height: u8, x_advance: u8, x_offset: i8, y_offset: i8) -> Glyph {
    Glyph {
        bitmap_offset: 0,
        width,
        height,
        x_advance,
        x_offset,
        y_offset,
    }
}

/// Solid glyphs: every glyph shares one all-ones bitmap.
const TEST_BITMAP: [u8; 16] = [0xFF; 16];

/// Glyphs for `' '..='9'`. Digit widths differ so that `'4'` is the widest
/// digit and `'1'` the narrowest.
const TEST_GLYPHS: [Glyph; 26] = [
    g(0, 0, 4, 0, 1),   // ' '
    g(2, 10, 4, 1, -10), // '!'
    g(4, 4, 6, 1, -10), // '"'
    g(6, 10, 8, 1, -10), // '#'
    g(6, 10, 8, 1, -10), // '$'
    g(6, 10, 8, 1, -10), // '%'
    g(6, 10, 8, 1, -10), // '&'
    g(2, 4, 4, 1, -10), // '\''
    g(3, 12, 5, 1, -10), // '('
    g(3, 12, 5, 1, -10), // ')'
    g(5, 5, 7, 1, -9),  // '*'
    g(6, 6, 8, 1, -7),  // '+'
    g(2, 3, 4, 1, -1),  // ','
    g(5, 2, 7, 1, -5),  // '-'
    g(2, 2, 4, 1, -2),  // '.'
    g(5, 10, 7, 1, -10), // '/'
    g(6, 10, 8, 1, -10), // '0'
    g(4, 10, 8, 1, -10), // '1'
    g(6, 10, 8, 1, -10), // '2'
    g(6, 10, 8, 1, -10), // '3'
    g(7, 10, 9, 1, -10), // '4'
    g(6, 10, 8, 1, -10), // '5'
    g(6, 10, 8, 1, -10), // '6'
    g(6, 10, 8, 1, -10), // '7'
    g(6, 10, 8, 1, -10), // '8'
    g(6, 10, 8, 1, -10), // '9'
];

pub static TEST_FONT: GlyphFont<'static> = GlyphFont {
    bitmap: &TEST_BITMAP,
    glyphs: &TEST_GLYPHS,
    first: 0x20,
    last: 0x39,
    y_advance: 14,
};
