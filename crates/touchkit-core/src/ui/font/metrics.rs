//! Text measurement and alignment
//!
//! Bounds are accumulated in `i32` and narrowed to the 16-bit coordinate
//! space of the panel at the end, saturating rather than wrapping.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use super::{Font, FontFace};
use crate::config::{BUILTIN_CELL_HEIGHT, BUILTIN_CELL_WIDTH};
use crate::ui::styling::{Align, HAlign, VAlign};

/// Running min/max of glyph boxes.
///
/// Starts "inverted" (min above max) so an accumulator nothing was added to
/// can be recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundsAccumulator {
    pub min_x: i32,
    pub min_y: i32,
    pub max_x: i32,
    pub max_y: i32,
}

impl Default for BoundsAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

impl BoundsAccumulator {
    pub const fn new() -> Self {
        Self {
            min_x: 0x7FFF,
            min_y: 0x7FFF,
            max_x: -0x7FFF,
            max_y: -0x7FFF,
        }
    }

    /// Grow to include the inclusive box `(x1, y1)..=(x2, y2)`.
    pub fn include(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.min_x = self.min_x.min(x1);
        self.min_y = self.min_y.min(y1);
        self.max_x = self.max_x.max(x2);
        self.max_y = self.max_y.max(y2);
    }
}

/// Bounding box of a rendered string and where the cursor ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i16,
    pub top: i16,
    pub width: u16,
    pub height: u16,
    pub end: Point,
}

/// Cursor-relative size of a string, padded by one pixel on every side.
///
/// `dx`/`dy` run from the cursor to the top-left of the padded box, so a box
/// placed at `(x, y)` needs the cursor at `(x - dx, y - dy)`. `advance` is
/// the horizontal distance to the cursor position after the string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextMetrics {
    pub dx: i16,
    pub dy: i16,
    pub width: u16,
    pub height: u16,
    pub advance: i16,
}

impl TextMetrics {
    /// Metrics of this string immediately followed by `next`, which starts
    /// where this one's cursor ends.
    pub fn followed_by(&self, next: &TextMetrics) -> TextMetrics {
        let (dx, dy) = (i32::from(self.dx), i32::from(self.dy));
        let (dx2, dy2) = (i32::from(next.dx), i32::from(next.dy));
        let width = i32::from(self.advance) - dx + dx2 + i32::from(next.width);
        let bottom = (dy + i32::from(self.height)).max(dy2 + i32::from(next.height));
        let top = dy.min(dy2);
        TextMetrics {
            dx: self.dx,
            dy: saturate_i16(top),
            width: saturate_u16(width),
            height: saturate_u16(bottom - top),
            advance: saturate_i16(i32::from(self.advance) + i32::from(next.advance)),
        }
    }
}

impl Font<'_> {
    /// Add the box of character `c` drawn at `cursor` to `bounds` and move
    /// the cursor past it.
    ///
    /// `'\n'` moves the cursor to column 0 of the next line and `'\r'` is
    /// ignored. Characters a glyph font doesn't cover add nothing and don't
    /// move the cursor.
    pub fn char_bounds(&self, c: char, cursor: &mut Point, bounds: &mut BoundsAccumulator) {
        let sx = i32::from(self.size_x());
        let sy = i32::from(self.size_y());
        match c {
            '\n' => {
                cursor.x = 0;
                cursor.y += i32::from(self.line_height());
            }
            '\r' => {}
            _ => match self.face() {
                FontFace::Builtin => {
                    let w = i32::from(BUILTIN_CELL_WIDTH) * sx;
                    let h = i32::from(BUILTIN_CELL_HEIGHT) * sy;
                    bounds.include(cursor.x, cursor.y, cursor.x + w - 1, cursor.y + h - 1);
                    cursor.x += w;
                }
                FontFace::Glyphs(font) => {
                    if let Some(g) = font.glyph(c) {
                        let x1 = cursor.x + i32::from(g.x_offset) * sx;
                        let y1 = cursor.y + i32::from(g.y_offset) * sy;
                        let x2 = x1 + i32::from(g.width) * sx - 1;
                        let y2 = y1 + i32::from(g.height) * sy - 1;
                        bounds.include(x1, y1, x2, y2);
                        cursor.x += i32::from(g.x_advance) * sx;
                    }
                }
            },
        }
    }

    /// Bounding box of `text` drawn with the cursor starting at `origin`.
    ///
    /// An axis nothing was drawn along collapses to zero size at the origin.
    pub fn text_bounds(&self, text: &str, origin: Point) -> TextBounds {
        let mut cursor = origin;
        let mut acc = BoundsAccumulator::new();
        for c in text.chars() {
            self.char_bounds(c, &mut cursor, &mut acc);
        }

        let (left, width) = if acc.max_x >= acc.min_x {
            (acc.min_x, acc.max_x - acc.min_x + 1)
        } else {
            (origin.x, 0)
        };
        let (top, height) = if acc.max_y >= acc.min_y {
            (acc.min_y, acc.max_y - acc.min_y + 1)
        } else {
            (origin.y, 0)
        };

        TextBounds {
            left: saturate_i16(left),
            top: saturate_i16(top),
            width: saturate_u16(width),
            height: saturate_u16(height),
            end: cursor,
        }
    }

    /// Padded, cursor-relative metrics of `text`. All zero for `""`.
    pub fn text_bounds_and_offset(&self, text: &str) -> TextMetrics {
        if text.is_empty() {
            return TextMetrics::default();
        }
        let b = self.text_bounds(text, Point::zero());
        TextMetrics {
            dx: b.left.saturating_sub(1),
            dy: b.top.saturating_sub(1),
            width: b.width.saturating_add(2),
            height: b.height.saturating_add(2),
            advance: saturate_i16(b.end.x + 1),
        }
    }
}

/// Cursor position that places a string with `metrics` inside `area`
/// according to `align`.
pub fn align_cursor(area: &Rectangle, metrics: &TextMetrics, align: Align) -> Point {
    let w = area.size.width as i32;
    let h = area.size.height as i32;
    let wt = i32::from(metrics.width);
    let ht = i32::from(metrics.height);

    let mut x = area.top_left.x - i32::from(metrics.dx);
    match align.horizontal {
        HAlign::Left => {}
        HAlign::Center => x += w / 2 - wt / 2,
        HAlign::Right => x += w - wt,
    }

    let mut y = area.top_left.y - i32::from(metrics.dy);
    match align.vertical {
        VAlign::Top => {}
        VAlign::Center => y += h / 2 - ht / 2,
        VAlign::Bottom => y += h - ht,
    }

    Point::new(x, y)
}

fn saturate_i16(v: i32) -> i16 {
    v.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}

fn saturate_u16(v: i32) -> u16 {
    v.clamp(0, i32::from(u16::MAX)) as u16
}
