// src/ui/mod.rs
//! touchkit UI: buttons for small RGB565 touch panels
//!
//! This module provides:
//! - Fonts with pixel-exact text metrics and label alignment
//! - Rectangle, arrow, label and numeric buttons with a press/redraw state machine
//! - A registry that hit-tests touches and dispatches press handlers
//! - A drawing surface abstraction over embedded-graphics draw targets

pub mod components;
pub mod core;
pub mod font;
pub mod registry;
pub mod styling;
pub mod surface;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used items
pub use components::{
    ArrowButton, ConfigError, DegreeSymbol, Int16Button, LabelButton, LabelStyle, NumericButton,
    NumericValue, Orientation, RectButton, Uint8Button, Uint16Button, ValueFormat,
    inc_dec_handler,
};
pub use self::core::{Button, ButtonConfig, ButtonCore, TouchPoint};
pub use font::{Font, FontFace, Glyph, GlyphFont, TextMetrics};
pub use registry::{ButtonRef, ButtonRegistry, MasterHandler, PressHandler, RegistryError};
pub use styling::{Align, Dimension, Expansion, HAlign, VAlign};
pub use surface::{DrawError, GfxSurface, Surface};
