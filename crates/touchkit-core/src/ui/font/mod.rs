//! Font definitions and text measurement
//!
//! Two kinds of font are supported:
//!
//! - the built-in classic fixed-width font: every character occupies a 6x8
//!   cell and the cursor marks the cell's top-left corner;
//! - a [`GlyphFont`]: a variable-width glyph table where the cursor sits on
//!   the text baseline and each glyph carries its own box offset, size and
//!   advance.
//!
//! A [`Font`] pairs one of those faces with an integer magnification. It is
//! small and `Copy`; glyph tables are borrowed, never owned, so one table can
//! back any number of buttons.
//!
//! Text wrapping is not supported.

pub mod builtin;
pub mod metrics;
pub mod render;

pub use metrics::{BoundsAccumulator, TextBounds, TextMetrics, align_cursor};
pub use render::draw_text;

/// One glyph of a [`GlyphFont`].
///
/// Offsets are measured from the cursor position (on the baseline) to the
/// glyph box's top-left corner, so `y_offset` is usually negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Glyph {
    /// Byte offset of this glyph's first row in [`GlyphFont::bitmap`]
    pub bitmap_offset: u16,
    pub width: u8,
    pub height: u8,
    /// Distance to move the cursor after drawing this glyph
    pub x_advance: u8,
    pub x_offset: i8,
    pub y_offset: i8,
}

/// Variable-width font described by a glyph table.
///
/// Glyph bitmaps are packed one bit per pixel, most significant bit first,
/// row after row with no padding between rows. Each glyph starts on a byte
/// boundary.
#[derive(Debug)]
pub struct GlyphFont<'a> {
    pub bitmap: &'a [u8],
    /// Glyphs for code points `first..=last`, in order
    pub glyphs: &'a [Glyph],
    pub first: u8,
    pub last: u8,
    /// Line height: how far a newline moves the cursor down
    pub y_advance: u8,
}

impl GlyphFont<'_> {
    /// Glyph for `c`, or `None` if the font does not cover it.
    pub fn glyph(&self, c: char) -> Option<&Glyph> {
        let code = u32::from(c);
        let first = u32::from(self.first);
        if code < first || code > u32::from(self.last) {
            return None;
        }
        self.glyphs.get((code - first) as usize)
    }
}

/// Typeface selector
#[derive(Debug, Clone, Copy)]
pub enum FontFace<'a> {
    /// The classic 6x8 fixed-width font
    Builtin,
    Glyphs(&'a GlyphFont<'a>),
}

/// Scaled metrics of a single glyph, relative to the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GlyphMetrics {
    pub x_offset: i16,
    pub y_offset: i16,
    pub width: u16,
    pub height: u16,
    pub x_advance: i16,
}

/// A typeface together with its X/Y magnification.
#[derive(Debug, Clone, Copy)]
pub struct Font<'a> {
    face: FontFace<'a>,
    size_x: u8,
    size_y: u8,
}

impl Default for Font<'_> {
    fn default() -> Self {
        Self::builtin()
    }
}

impl PartialEq for Font<'_> {
    /// Same table (by identity) at the same magnification.
    fn eq(&self, other: &Self) -> bool {
        let same_face = match (self.face, other.face) {
            (FontFace::Builtin, FontFace::Builtin) => true,
            (FontFace::Glyphs(a), FontFace::Glyphs(b)) => core::ptr::eq(a, b),
            _ => false,
        };
        same_face && self.size_x == other.size_x && self.size_y == other.size_y
    }
}

impl Eq for Font<'_> {}

impl<'a> Font<'a> {
    /// The built-in fixed-width font at magnification 1.
    pub const fn builtin() -> Self {
        Self {
            face: FontFace::Builtin,
            size_x: 1,
            size_y: 1,
        }
    }

    /// A glyph-table font at magnification 1.
    pub const fn new(glyphs: &'a GlyphFont<'a>) -> Self {
        Self {
            face: FontFace::Glyphs(glyphs),
            size_x: 1,
            size_y: 1,
        }
    }

    /// Set the magnification. Zero is treated as one.
    pub fn with_size(mut self, size_x: u8, size_y: u8) -> Self {
        self.size_x = size_x.max(1);
        self.size_y = size_y.max(1);
        self
    }

    pub fn face(&self) -> FontFace<'a> {
        self.face
    }

    pub fn size_x(&self) -> u8 {
        self.size_x
    }

    pub fn size_y(&self) -> u8 {
        self.size_y
    }

    /// Vertical cursor movement for a newline, in pixels.
    pub fn line_height(&self) -> i16 {
        let unscaled = match self.face {
            FontFace::Builtin => crate::config::BUILTIN_CELL_HEIGHT,
            FontFace::Glyphs(g) => g.y_advance,
        };
        i16::from(unscaled) * i16::from(self.size_y)
    }

    /// Scaled metrics of `c`, or `None` when a glyph font doesn't cover it.
    ///
    /// For the built-in font this is the full character cell.
    pub fn glyph_metrics(&self, c: char) -> Option<GlyphMetrics> {
        let sx = i16::from(self.size_x);
        let sy = i16::from(self.size_y);
        match self.face {
            FontFace::Builtin => Some(builtin::cell_metrics(self.size_x, self.size_y)),
            FontFace::Glyphs(font) => font.glyph(c).map(|g| GlyphMetrics {
                x_offset: i16::from(g.x_offset) * sx,
                y_offset: i16::from(g.y_offset) * sy,
                width: u16::from(g.width) * self.size_x as u16,
                height: u16::from(g.height) * self.size_y as u16,
                x_advance: i16::from(g.x_advance) * sx,
            }),
        }
    }
}
