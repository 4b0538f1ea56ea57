//! Triangular arrow buttons
//!
//! Arrows are usually paired with a [`NumericButton`](super::NumericButton):
//! an up or left arrow carries a delta of -1 and a down or right arrow +1,
//! which [`inc_dec_handler`](super::inc_dec_handler) picks up as the step.
//! The signs follow list order on screen: up moves to an earlier entry.

use embedded_graphics::prelude::*;

use super::ConfigError;
use crate::ui::core::{Button, ButtonConfig, ButtonCore};
use crate::ui::surface::{DrawError, Surface};

/// Direction the arrow points in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Up,
    Down,
    Left,
    Right,
}

impl Orientation {
    /// Step this arrow suggests to an attached numeric button.
    pub fn delta(self) -> i16 {
        match self {
            Orientation::Up | Orientation::Left => -1,
            Orientation::Down | Orientation::Right => 1,
        }
    }

    fn is_horizontal(self) -> bool {
        matches!(self, Orientation::Left | Orientation::Right)
    }
}

/// Isosceles triangle button.
///
/// `base` is the length of the side opposite the tip and `side` the length
/// of each of the two equal sides.
#[derive(Debug, Clone)]
pub struct ArrowButton {
    core: ButtonCore,
    orientation: Orientation,
    vertices: [Point; 3],
}

impl ArrowButton {
    pub fn new(
        config: ButtonConfig,
        orientation: Orientation,
        base: u16,
        side: u16,
    ) -> Result<Self, ConfigError> {
        let side_sq = u32::from(side) * u32::from(side);
        let half_base_sq = u32::from(base) * u32::from(base) / 4;
        if base == 0 || side_sq < half_base_sq {
            return Err(ConfigError::DegenerateArrow { base, side });
        }
        let length = u16::try_from(1 + (side_sq - half_base_sq).isqrt()).unwrap_or(u16::MAX);

        let (width, height) = if orientation.is_horizontal() {
            (length, base)
        } else {
            (base, length)
        };
        let mut core = ButtonCore::new(&config, width, height);
        core.set_delta(orientation.delta());
        let vertices = Self::vertices(core.top_left(), width, height, orientation);

        Ok(Self {
            core,
            orientation,
            vertices,
        })
    }

    fn vertices(top_left: Point, width: u16, height: u16, orientation: Orientation) -> [Point; 3] {
        let (x, y) = (top_left.x, top_left.y);
        let (w, h) = (i32::from(width), i32::from(height));
        let (right, bottom) = (x + w - 1, y + h - 1);
        match orientation {
            Orientation::Up => [
                Point::new(x + w / 2, y),
                Point::new(right, bottom),
                Point::new(x, bottom),
            ],
            Orientation::Down => [
                Point::new(x + w / 2, bottom),
                Point::new(x, y),
                Point::new(right, y),
            ],
            Orientation::Left => [
                Point::new(x, y + h / 2),
                Point::new(right, y),
                Point::new(right, bottom),
            ],
            Orientation::Right => [
                Point::new(right, y + h / 2),
                Point::new(x, bottom),
                Point::new(x, y),
            ],
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn triangle(&self) -> [Point; 3] {
        self.vertices
    }
}

impl Button for ArrowButton {
    fn core(&self) -> &ButtonCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ButtonCore {
        &mut self.core
    }

    fn render(&self, surface: &mut dyn Surface, inverted: bool) -> Result<(), DrawError> {
        let (fill, outline) = self.core.paint(inverted);
        if let Some(color) = fill {
            surface.fill_triangle(self.vertices, color)?;
        }
        if let Some(color) = outline {
            surface.stroke_triangle(self.vertices, color)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::core::TouchPoint;
    use crate::ui::styling::{Align, BLACK, WHITE};
    use crate::ui::testing::{DrawOp, RecordingSurface};

    fn config() -> ButtonConfig {
        ButtonConfig::at(10, 20).with_align(Align::TOP_LEFT)
    }

    #[test]
    fn test_vertical_arrow_size() {
        // 1 + isqrt(13^2 - 10^2 / 4) = 1 + 12
        let up = ArrowButton::new(config(), Orientation::Up, 10, 13).unwrap();
        assert_eq!((up.core().width(), up.core().height()), (10, 13));
        assert_eq!(
            up.triangle(),
            [Point::new(15, 20), Point::new(19, 32), Point::new(10, 32)]
        );
        assert_eq!(up.delta(), -1);
    }

    #[test]
    fn test_horizontal_arrow_swaps_size() {
        let left = ArrowButton::new(config(), Orientation::Left, 10, 13).unwrap();
        assert_eq!((left.core().width(), left.core().height()), (13, 10));
        assert_eq!(
            left.triangle(),
            [Point::new(10, 25), Point::new(22, 20), Point::new(22, 29)]
        );
        assert_eq!(left.delta(), -1);
    }

    #[test]
    fn test_deltas() {
        assert_eq!(Orientation::Down.delta(), 1);
        assert_eq!(Orientation::Right.delta(), 1);
    }

    #[test]
    fn test_degenerate_arrow_is_rejected() {
        assert_eq!(
            ArrowButton::new(config(), Orientation::Up, 20, 9).unwrap_err(),
            ConfigError::DegenerateArrow { base: 20, side: 9 }
        );
        assert!(ArrowButton::new(config(), Orientation::Up, 0, 9).is_err());
    }

    #[test]
    fn test_hit_box_is_bounding_rectangle() {
        let down = ArrowButton::new(config(), Orientation::Down, 10, 13).unwrap();
        assert!(down.contains(TouchPoint::new(10, 20)));
        assert!(down.contains(TouchPoint::new(19, 32)));
        assert!(!down.contains(TouchPoint::new(20, 32)));
    }

    #[test]
    fn test_render_fills_then_outlines() {
        let mut surface = RecordingSurface::new();
        let mut right = ArrowButton::new(config(), Orientation::Right, 10, 13).unwrap();
        right.draw_inverted(&mut surface, true).unwrap();
        let tri = right.triangle();
        assert_eq!(
            surface.take(),
            [DrawOp::FillTriangle(tri, WHITE), DrawOp::StrokeTriangle(tri, BLACK)]
        );
    }
}
