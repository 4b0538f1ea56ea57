//! Widest rendering of a value range
//!
//! A numeric button is sized once, at construction, so it has to be wide
//! enough for every value it may later show. With proportional fonts the
//! widest value is not necessarily the largest one: in a font where `4` is
//! the widest digit, `44` is wider than `99`. The estimate built here is a
//! synthetic number made of the widest digits that has as many digits as
//! the range's largest magnitude, so it may lie outside the range itself.

use alloc::string::String;
use core::fmt::Write;
use log::debug;

use super::ValueFormat;
use crate::ui::font::Font;

/// Measured width of each decimal digit in one font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitWidths {
    widths: [u16; 10],
}

impl DigitWidths {
    pub fn measure(font: &Font<'_>) -> Self {
        let mut widths = [0u16; 10];
        let mut buf = [0u8; 4];
        for (digit, width) in (b'0'..=b'9').zip(widths.iter_mut()) {
            let text = char::from(digit).encode_utf8(&mut buf);
            *width = font.text_bounds_and_offset(text).width;
        }
        Self { widths }
    }

    pub fn width(&self, digit: u8) -> u16 {
        self.widths.get(usize::from(digit)).copied().unwrap_or(0)
    }

    /// Widest digit overall. Ties go to the larger digit.
    pub fn widest(&self) -> u8 {
        self.widest_in(0, 9)
    }

    /// Widest digit that can lead a number whose first digit is at most
    /// `first`. Never 0.
    pub fn widest_leading(&self, first: u8) -> u8 {
        self.widest_in(1, first.clamp(1, 9))
    }

    fn widest_in(&self, low: u8, high: u8) -> u8 {
        (low..=high).max_by_key(|&d| self.width(d)).unwrap_or(high)
    }
}

/// Sign plus the ten digits of `u32::MAX`, with room to spare
type NumberText = heapless::String<12>;

/// The widest text a value range can produce, with its padded size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidestValue {
    pub text: String,
    pub width: u16,
    pub height: u16,
}

/// A synthesized number, measured but not yet allocated
struct Candidate {
    text: NumberText,
    width: u16,
    height: u16,
}

impl Candidate {
    fn measure(font: &Font<'_>, text: NumberText) -> Self {
        let metrics = font.text_bounds_and_offset(&text);
        Self {
            text,
            width: metrics.width,
            height: metrics.height,
        }
    }
}

/// Widest text among `min..=max` formatted according to `format`.
pub fn widest_value(
    font: &Font<'_>,
    digits: &DigitWidths,
    min: i32,
    max: i32,
    format: &ValueFormat,
) -> WidestValue {
    let number = widest_in_range(font, digits, min, max, format.show_plus);
    let mut widest = WidestValue {
        text: String::from(number.text.as_str()),
        width: number.width,
        height: number.height,
    };
    if let Some(zero) = &format.zero_label
        && min <= 0
        && max >= 0
    {
        let metrics = font.text_bounds_and_offset(zero);
        if metrics.width > widest.width {
            widest = WidestValue {
                text: zero.clone(),
                width: metrics.width,
                height: metrics.height,
            };
        }
    }
    debug!(
        "Widest value in {}..={} is {:?} ({}px)",
        min, max, widest.text, widest.width
    );
    widest
}

fn widest_in_range(
    font: &Font<'_>,
    digits: &DigitWidths,
    min: i32,
    max: i32,
    show_plus: bool,
) -> Candidate {
    if min < 0 && max >= 0 {
        let negative = widest_in_range(font, digits, min, -1, show_plus);
        let positive = widest_in_range(font, digits, 0, max, show_plus);
        return if positive.width > negative.width {
            positive
        } else {
            negative
        };
    }

    let negative = max < 0;
    let magnitude = if negative {
        min.unsigned_abs()
    } else {
        max.unsigned_abs()
    };

    let mut count = 1;
    let mut scale = 1u32;
    while let Some(next) = scale.checked_mul(10) {
        if next > magnitude {
            break;
        }
        scale = next;
        count += 1;
    }
    let first = (magnitude / scale) as u8;

    let mut number = u64::from(digits.widest_leading(first));
    for _ in 1..count {
        number = number * 10 + u64::from(digits.widest());
    }

    let mut text = NumberText::new();
    if negative {
        text.push('-').ok();
    } else if show_plus && max > 0 {
        text.push('+').ok();
    }
    write!(text, "{number}").ok();
    Candidate::measure(font, text)
}
