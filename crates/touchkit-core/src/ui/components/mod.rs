// src/ui/components/mod.rs
//! Button kinds
//!
//! - [`RectButton`] - plain filled rectangle
//! - [`ArrowButton`] - isosceles triangle pointing up, down, left or right
//! - [`LabelButton`] - (rounded) rectangle with a text label
//! - [`NumericButton`] - label button showing a clamped integer value

pub mod arrow;
pub mod degree;
pub mod label;
pub mod numeric;
pub mod rect;
pub mod widest;

pub use arrow::{ArrowButton, Orientation};
pub use degree::DegreeSymbol;
pub use label::{LabelButton, LabelStyle};
pub use numeric::{
    Int16Button, NumericButton, NumericValue, Uint8Button, Uint16Button, ValueFormat,
    inc_dec_handler,
};
pub use rect::RectButton;
pub use widest::{DigitWidths, WidestValue, widest_value};

use thiserror_no_std::Error;

use crate::ui::styling::AlignError;

/// Invalid button construction parameters
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("arrow sides of {side}px cannot span a {base}px base")]
    DegenerateArrow { base: u16, side: u16 },
    #[error("empty value range: min {min} is above max {max}")]
    EmptyRange { min: i32, max: i32 },
    #[error("bad alignment: {0}")]
    Align(AlignError),
}

impl From<AlignError> for ConfigError {
    fn from(err: AlignError) -> Self {
        ConfigError::Align(err)
    }
}
