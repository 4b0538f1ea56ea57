//! Crate-wide configuration constants.

/// Default number of buttons a [`ButtonRegistry`](crate::ui::ButtonRegistry)
/// can hold when the capacity is not spelled out.
pub const MAX_BUTTONS: usize = 20;

/// Packed RGB565 value reserved to mean "do not draw this element".
///
/// Every 16-bit value is a valid color on 5-6-5 panels, so one value that is
/// unlikely to be wanted (lowest bit of each channel set) stands in for
/// transparency when colors arrive as raw integers.
pub const TRANSPARENT_RAW: u16 = 0x0841;

/// Cell width of the built-in fixed-width font at magnification 1.
pub const BUILTIN_CELL_WIDTH: u8 = 6;

/// Cell height of the built-in fixed-width font at magnification 1.
pub const BUILTIN_CELL_HEIGHT: u8 = 8;

/// Smallest outer radius of a degree symbol, in pixels.
pub const DEGREE_MIN_OUTER_RADIUS: u8 = 4;

/// Smallest inner (hole) radius of a degree symbol, in pixels.
pub const DEGREE_MIN_INNER_RADIUS: u8 = 2;
