//! Styling primitives shared by every button
//!
//! - [`colors`] - RGB565 helpers and the transparent sentinel
//! - [`align`] - two-letter alignment codes for labels and button anchors
//! - [`layout`] - hit-box expansion and label-driven sizing

pub mod align;
pub mod colors;
pub mod layout;

pub use align::{Align, AlignError, HAlign, VAlign};
pub use colors::{
    BLACK, BLUE, CYAN, DARK_GRAY, GREEN, LIGHT_GRAY, RED, WHITE, YELLOW, color_from_raw,
    color_to_raw,
};
pub use layout::{Dimension, Expansion};
