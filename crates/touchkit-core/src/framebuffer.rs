//! RAM framebuffer with per-pixel change detection.
//!
//! Buttons draw into this buffer instead of the panel. After a batch of
//! drawing, only the rectangle that encloses changed pixels is pushed to the
//! real display in one `fill_contiguous` call, which keeps press feedback
//! cheap on slow serial panels.

use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use log::debug;

/// Bounding box of pixels that have changed since the last flush.
#[derive(Debug, Clone, Copy)]
struct DirtyRect {
    min_x: usize,
    min_y: usize,
    max_x: usize,
    max_y: usize,
}

impl DirtyRect {
    fn expand(&mut self, x: usize, y: usize) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    fn from_point(x: usize, y: usize) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
        }
    }
}

/// Heap-backed framebuffer implementing `DrawTarget<Color = Rgb565>`.
pub struct FrameBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb565>,
    dirty: Option<DirtyRect>,
}

impl FrameBuffer {
    /// Allocate a `width` x `height` buffer filled with black.
    pub fn new(width: u16, height: u16) -> Self {
        let (width, height) = (usize::from(width), usize::from(height));
        Self {
            width,
            height,
            pixels: vec![Rgb565::BLACK; width * height],
            dirty: None,
        }
    }

    /// Color at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<Rgb565> {
        let (x, y) = self.index_of(x, y)?;
        self.pixels.get(y * self.width + x).copied()
    }

    /// Whether anything changed since the last flush.
    pub fn is_dirty(&self) -> bool {
        self.dirty.is_some()
    }

    /// Region that the next [`flush`](Self::flush) would send.
    pub fn dirty_area(&self) -> Option<Rectangle> {
        self.dirty.map(|rect| {
            Rectangle::new(
                Point::new(rect.min_x as i32, rect.min_y as i32),
                Size::new(
                    (rect.max_x - rect.min_x + 1) as u32,
                    (rect.max_y - rect.min_y + 1) as u32,
                ),
            )
        })
    }

    fn index_of(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then_some((x, y))
    }

    /// Write a single pixel, expanding the dirty rect only if the color changed.
    #[inline]
    fn set_pixel(&mut self, x: usize, y: usize, color: Rgb565) {
        let idx = y * self.width + x;
        if self.pixels[idx] != color {
            self.pixels[idx] = color;
            match &mut self.dirty {
                Some(rect) => rect.expand(x, y),
                None => self.dirty = Some(DirtyRect::from_point(x, y)),
            }
        }
    }

    /// Flush the dirty region to a display, then reset the dirty state.
    ///
    /// If nothing changed, this is a no-op.
    pub fn flush<D>(&mut self, display: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let Some(area) = self.dirty_area() else {
            return Ok(());
        };
        self.dirty = None;

        debug!(
            "Flushing {}x{} dirty region at ({}, {})",
            area.size.width, area.size.height, area.top_left.x, area.top_left.y
        );

        // Shared borrow of the pixels so the iterator doesn't capture `self`
        let pixels = &self.pixels;
        let stride = self.width;
        let min_x = area.top_left.x as usize;
        let min_y = area.top_left.y as usize;
        let width = area.size.width as usize;
        let height = area.size.height as usize;
        let pixel_iter = (min_y..min_y + height).flat_map(move |y| {
            let row_start = y * stride + min_x;
            pixels[row_start..row_start + width].iter().copied()
        });

        display.fill_contiguous(&area, pixel_iter)
    }
}

impl OriginDimensions for FrameBuffer {
    fn size(&self) -> Size {
        Size::new(self.width as u32, self.height as u32)
    }
}

impl DrawTarget for FrameBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if let Some((x, y)) = self.index_of(coord.x, coord.y) {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn fill_contiguous<I>(&mut self, area: &Rectangle, colors: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        // Colors are consumed for every point of the area, clipped or not
        let mut colors = colors.into_iter();
        for point in area.points() {
            let Some(color) = colors.next() else {
                break;
            };
            if let Some((x, y)) = self.index_of(point.x, point.y) {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn fill_solid(&mut self, area: &Rectangle, color: Self::Color) -> Result<(), Self::Error> {
        let clipped = area.intersection(&self.bounding_box());
        if clipped.is_zero_sized() {
            return Ok(());
        }
        let x0 = clipped.top_left.x as usize;
        let y0 = clipped.top_left.y as usize;
        for y in y0..y0 + clipped.size.height as usize {
            for x in x0..x0 + clipped.size.width as usize {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        for y in 0..self.height {
            for x in 0..self.width {
                self.set_pixel(x, y, color);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unchanged_pixels_stay_clean() {
        let mut fb = FrameBuffer::new(10, 10);
        fb.clear(Rgb565::BLACK).unwrap();
        assert!(!fb.is_dirty());
    }

    #[test]
    fn test_dirty_area_tracks_changes() {
        let mut fb = FrameBuffer::new(20, 20);
        fb.fill_solid(&Rectangle::new(Point::new(2, 3), Size::new(4, 5)), Rgb565::RED)
            .unwrap();
        Pixel(Point::new(10, 1), Rgb565::BLUE).draw(&mut fb).unwrap();
        assert_eq!(
            fb.dirty_area(),
            Some(Rectangle::new(Point::new(2, 1), Size::new(9, 7)))
        );
    }

    #[test]
    fn test_fill_solid_clips_negative_origin() {
        let mut fb = FrameBuffer::new(8, 8);
        fb.fill_solid(&Rectangle::new(Point::new(-3, -3), Size::new(5, 5)), Rgb565::GREEN)
            .unwrap();
        assert_eq!(fb.pixel(0, 0), Some(Rgb565::GREEN));
        assert_eq!(fb.pixel(1, 1), Some(Rgb565::GREEN));
        assert_eq!(fb.pixel(2, 2), Some(Rgb565::BLACK));
        assert_eq!(fb.pixel(-1, 0), None);
    }

    #[test]
    fn test_flush_copies_dirty_region_and_resets() {
        let mut fb = FrameBuffer::new(16, 16);
        let mut display = FrameBuffer::new(16, 16);
        fb.fill_solid(&Rectangle::new(Point::new(4, 4), Size::new(3, 2)), Rgb565::WHITE)
            .unwrap();
        fb.flush(&mut display).unwrap();

        assert!(!fb.is_dirty());
        assert_eq!(display.pixel(4, 4), Some(Rgb565::WHITE));
        assert_eq!(display.pixel(6, 5), Some(Rgb565::WHITE));
        assert_eq!(display.pixel(7, 5), Some(Rgb565::BLACK));
    }
}
