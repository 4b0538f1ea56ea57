//! Drawing surface abstraction
//!
//! Buttons never talk to a display driver directly. They render through the
//! object-safe [`Surface`] trait so that a button can live behind
//! `dyn Button` and still draw. [`GfxSurface`] adapts any embedded-graphics
//! `DrawTarget<Color = Rgb565>` (a panel driver, the simulator window or a
//! [`FrameBuffer`](crate::framebuffer::FrameBuffer)) to it.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{
    Circle, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, RoundedRectangle, StrokeAlignment,
    Triangle,
};
use thiserror_no_std::Error;

use crate::ui::font::{self, Font};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    #[error("display target rejected a draw operation")]
    Target,
}

/// Minimal set of drawing primitives needed by the buttons.
///
/// Outlines are one pixel wide and lie inside the given area.
pub trait Surface {
    fn fill_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), DrawError>;
    fn stroke_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), DrawError>;
    fn fill_rounded_rect(
        &mut self,
        area: Rectangle,
        radius: u16,
        color: Rgb565,
    ) -> Result<(), DrawError>;
    fn stroke_rounded_rect(
        &mut self,
        area: Rectangle,
        radius: u16,
        color: Rgb565,
    ) -> Result<(), DrawError>;
    fn fill_triangle(&mut self, vertices: [Point; 3], color: Rgb565) -> Result<(), DrawError>;
    fn stroke_triangle(&mut self, vertices: [Point; 3], color: Rgb565) -> Result<(), DrawError>;
    /// Filled disk of `2 * radius + 1` pixels across.
    fn fill_circle(&mut self, center: Point, radius: u16, color: Rgb565) -> Result<(), DrawError>;
    /// Draw `text` starting at `cursor`; returns the cursor after the text.
    fn draw_text(
        &mut self,
        text: &str,
        cursor: Point,
        font: &Font<'_>,
        color: Rgb565,
    ) -> Result<Point, DrawError>;
}

/// [`Surface`] over an embedded-graphics draw target.
///
/// # Examples
/// ```ignore
/// let mut fb = FrameBuffer::new(320, 240);
/// let mut surface = GfxSurface::new(&mut fb);
/// button.draw(&mut surface)?;
/// ```
pub struct GfxSurface<'d, D> {
    target: &'d mut D,
}

impl<'d, D> GfxSurface<'d, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    pub fn new(target: &'d mut D) -> Self {
        Self { target }
    }

    pub fn target(&mut self) -> &mut D {
        &mut *self.target
    }

    fn draw<P>(&mut self, primitive: P) -> Result<(), DrawError>
    where
        P: Drawable<Color = Rgb565>,
    {
        primitive
            .draw(&mut *self.target)
            .map(|_| ())
            .map_err(|_| DrawError::Target)
    }
}

fn outline(color: Rgb565) -> PrimitiveStyle<Rgb565> {
    PrimitiveStyleBuilder::new()
        .stroke_color(color)
        .stroke_width(1)
        .stroke_alignment(StrokeAlignment::Inside)
        .build()
}

fn corners(area: Rectangle, radius: u16) -> RoundedRectangle {
    let r = u32::from(radius);
    RoundedRectangle::with_equal_corners(area, Size::new(r, r))
}

impl<D> Surface for GfxSurface<'_, D>
where
    D: DrawTarget<Color = Rgb565>,
{
    fn fill_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), DrawError> {
        self.target
            .fill_solid(&area, color)
            .map_err(|_| DrawError::Target)
    }

    fn stroke_rect(&mut self, area: Rectangle, color: Rgb565) -> Result<(), DrawError> {
        self.draw(area.into_styled(outline(color)))
    }

    fn fill_rounded_rect(
        &mut self,
        area: Rectangle,
        radius: u16,
        color: Rgb565,
    ) -> Result<(), DrawError> {
        self.draw(corners(area, radius).into_styled(PrimitiveStyle::with_fill(color)))
    }

    fn stroke_rounded_rect(
        &mut self,
        area: Rectangle,
        radius: u16,
        color: Rgb565,
    ) -> Result<(), DrawError> {
        self.draw(corners(area, radius).into_styled(outline(color)))
    }

    fn fill_triangle(&mut self, vertices: [Point; 3], color: Rgb565) -> Result<(), DrawError> {
        let [a, b, c] = vertices;
        self.draw(Triangle::new(a, b, c).into_styled(PrimitiveStyle::with_fill(color)))
    }

    fn stroke_triangle(&mut self, vertices: [Point; 3], color: Rgb565) -> Result<(), DrawError> {
        let [a, b, c] = vertices;
        self.draw(Triangle::new(a, b, c).into_styled(PrimitiveStyle::with_stroke(color, 1)))
    }

    fn fill_circle(&mut self, center: Point, radius: u16, color: Rgb565) -> Result<(), DrawError> {
        let diameter = 2 * u32::from(radius) + 1;
        self.draw(Circle::with_center(center, diameter).into_styled(PrimitiveStyle::with_fill(color)))
    }

    fn draw_text(
        &mut self,
        text: &str,
        cursor: Point,
        font: &Font<'_>,
        color: Rgb565,
    ) -> Result<Point, DrawError> {
        font::draw_text(&mut *self.target, text, cursor, font, color).map_err(|_| DrawError::Target)
    }
}
