//! Two-letter alignment codes
//!
//! The first letter picks the vertical alignment (`T`op, `C`enter,
//! `B`ottom), the second the horizontal one (`L`eft, `C`enter, `R`ight).
//! A bare `"C"` means `"CC"`.
//!
//! The same code is used twice on a button: once to place the label inside
//! the button rectangle, and once to say which point of the button rectangle
//! the constructor's anchor coordinates refer to.

use core::fmt;
use core::str::FromStr;

use embedded_graphics::prelude::*;
use thiserror_no_std::Error;

/// Horizontal alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HAlign {
    Left,
    #[default]
    Center,
    Right,
}

/// Vertical alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VAlign {
    Top,
    #[default]
    Center,
    Bottom,
}

/// Failure to parse an alignment code.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AlignError {
    #[error("alignment code must be one or two characters")]
    BadLength,
    #[error("unknown vertical alignment '{0}', expected T, C or B")]
    BadVertical(char),
    #[error("unknown horizontal alignment '{0}', expected L, C or R")]
    BadHorizontal(char),
}

/// Vertical x horizontal alignment pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Align {
    pub vertical: VAlign,
    pub horizontal: HAlign,
}

impl Align {
    pub const TOP_LEFT: Align = Align::new(VAlign::Top, HAlign::Left);
    pub const TOP_CENTER: Align = Align::new(VAlign::Top, HAlign::Center);
    pub const TOP_RIGHT: Align = Align::new(VAlign::Top, HAlign::Right);
    pub const CENTER_LEFT: Align = Align::new(VAlign::Center, HAlign::Left);
    pub const CENTER: Align = Align::new(VAlign::Center, HAlign::Center);
    pub const CENTER_RIGHT: Align = Align::new(VAlign::Center, HAlign::Right);
    pub const BOTTOM_LEFT: Align = Align::new(VAlign::Bottom, HAlign::Left);
    pub const BOTTOM_CENTER: Align = Align::new(VAlign::Bottom, HAlign::Center);
    pub const BOTTOM_RIGHT: Align = Align::new(VAlign::Bottom, HAlign::Right);

    pub const fn new(vertical: VAlign, horizontal: HAlign) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// Top-left corner of a `width` x `height` box whose aligned point is
    /// `anchor`.
    ///
    /// Right/bottom alignment puts the anchor on the last pixel column/row,
    /// and center alignment puts it on pixel `1 - size/2` of the box.
    pub fn place(&self, anchor: Point, width: u16, height: u16) -> Point {
        let w = width as i32;
        let h = height as i32;
        let x = match self.horizontal {
            HAlign::Left => anchor.x,
            HAlign::Center => anchor.x + 1 - w / 2,
            HAlign::Right => anchor.x + 1 - w,
        };
        let y = match self.vertical {
            VAlign::Top => anchor.y,
            VAlign::Center => anchor.y + 1 - h / 2,
            VAlign::Bottom => anchor.y + 1 - h,
        };
        Point::new(x, y)
    }
}

impl FromStr for Align {
    type Err = AlignError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        let mut chars = code.chars();
        let (v, h) = match (chars.next(), chars.next(), chars.next()) {
            (Some('C'), None, _) => ('C', 'C'),
            (Some(v), Some(h), None) => (v, h),
            _ => return Err(AlignError::BadLength),
        };

        let vertical = match v {
            'T' => VAlign::Top,
            'C' => VAlign::Center,
            'B' => VAlign::Bottom,
            other => return Err(AlignError::BadVertical(other)),
        };
        let horizontal = match h {
            'L' => HAlign::Left,
            'C' => HAlign::Center,
            'R' => HAlign::Right,
            other => return Err(AlignError::BadHorizontal(other)),
        };

        Ok(Self::new(vertical, horizontal))
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = match self.vertical {
            VAlign::Top => 'T',
            VAlign::Center => 'C',
            VAlign::Bottom => 'B',
        };
        let h = match self.horizontal {
            HAlign::Left => 'L',
            HAlign::Center => 'C',
            HAlign::Right => 'R',
        };
        write!(f, "{v}{h}")
    }
}
