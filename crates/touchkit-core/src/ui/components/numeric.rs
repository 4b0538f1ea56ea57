//! Numeric value buttons
//!
//! A [`NumericButton`] is a [`LabelButton`] whose label is an integer value
//! kept inside a closed range. It is sized at construction for the widest
//! value the range can show (see [`widest_value`](super::widest_value)), so
//! later value changes never need a resize.
//!
//! Values are usually stepped by arrow buttons: register each arrow with
//! [`inc_dec_handler`] and the arrow's delta becomes the step.
//!
//! # Examples
//! ```ignore
//! let temperature = RefCell::new(Int16Button::new(
//!     ButtonConfig::at(160, 60),
//!     LabelStyle::new(Font::builtin().with_size(3, 3)).with_degree_symbol(),
//!     -40..=125,
//!     21,
//!     ValueFormat::default().with_plus_sign(),
//! )?);
//! let warmer = RefCell::new(ArrowButton::new(ButtonConfig::at(260, 60), Orientation::Right, 30, 30)?);
//! registry.register(&warmer, inc_dec_handler(&temperature, 1))?;
//! ```

use alloc::boxed::Box;
use alloc::string::String;
use core::cell::RefCell;
use core::fmt::{self, Write};
use core::ops::RangeInclusive;
use log::{debug, warn};

use super::{ConfigError, DigitWidths, LabelButton, LabelStyle, widest_value};
use crate::ui::core::{Button, ButtonConfig, ButtonCore};
use crate::ui::surface::{DrawError, Surface};

mod sealed {
    pub trait Sealed {}
}

/// Integer types a [`NumericButton`] can hold.
pub trait NumericValue:
    sealed::Sealed + Copy + Ord + fmt::Display + fmt::Debug + Into<i32> + TryFrom<i32> + 'static
{
    const ZERO: Self;
}

macro_rules! numeric_value {
    ($($t:ty),*) => {
        $(
            impl sealed::Sealed for $t {}
            impl NumericValue for $t {
                const ZERO: Self = 0;
            }
        )*
    };
}

numeric_value!(i16, u8, u16);

pub type Int16Button<'a> = NumericButton<'a, i16>;
pub type Uint8Button<'a> = NumericButton<'a, u8>;
pub type Uint16Button<'a> = NumericButton<'a, u16>;

/// How values are turned into label text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValueFormat {
    /// Prefix positive values with `+`
    pub show_plus: bool,
    /// Shown instead of `0`
    pub zero_label: Option<String>,
}

impl ValueFormat {
    pub fn with_plus_sign(mut self) -> Self {
        self.show_plus = true;
        self
    }

    pub fn with_zero_label(mut self, label: &str) -> Self {
        self.zero_label = Some(String::from(label));
        self
    }
}

/// Adjusts a candidate value before it is committed. The result is clamped
/// to the range again afterwards.
pub type Validator<'a, T> = Box<dyn Fn(&NumericButton<'a, T>, T) -> T + 'a>;

/// Label button showing an integer in `min..=max`.
pub struct NumericButton<'a, T: NumericValue> {
    label: LabelButton<'a>,
    value: T,
    min: T,
    max: T,
    format: ValueFormat,
    validator: Option<Validator<'a, T>>,
}

impl<T: NumericValue> fmt::Debug for NumericButton<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NumericButton")
            .field("label", &self.label)
            .field("value", &self.value)
            .field("min", &self.min)
            .field("max", &self.max)
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}

impl<'a, T: NumericValue> NumericButton<'a, T> {
    /// Create a button showing `value` clamped to `range`.
    ///
    /// The size comes from the widest text the range can produce; `style`
    /// decides whether that is the exact size or a starting point.
    pub fn new(
        config: ButtonConfig,
        style: LabelStyle<'a>,
        range: RangeInclusive<T>,
        value: T,
        format: ValueFormat,
    ) -> Result<Self, ConfigError> {
        let digits = DigitWidths::measure(&style.font);
        Self::with_digit_widths(config, style, range, value, format, &digits)
    }

    /// Like [`new`](Self::new), reusing digit widths measured once for
    /// `style.font` so several buttons in that font skip the measurement.
    pub fn with_digit_widths(
        config: ButtonConfig,
        style: LabelStyle<'a>,
        range: RangeInclusive<T>,
        value: T,
        format: ValueFormat,
        digits: &DigitWidths,
    ) -> Result<Self, ConfigError> {
        let (min, max) = range.into_inner();
        if min > max {
            return Err(ConfigError::EmptyRange {
                min: min.into(),
                max: max.into(),
            });
        }

        let widest = widest_value(&style.font, digits, min.into(), max.into(), &format);
        let label = LabelButton::new(config, style, &widest.text);

        let mut button = Self {
            label,
            value: value.clamp(min, max),
            min,
            max,
            format,
            validator: None,
        };
        button.refresh_label();
        Ok(button)
    }

    /// Install a validator. It runs on every later non-skipped `set_value`.
    pub fn with_validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&NumericButton<'a, T>, T) -> T + 'a,
    {
        self.set_validator(validator);
        self
    }

    pub fn set_validator<F>(&mut self, validator: F)
    where
        F: Fn(&NumericButton<'a, T>, T) -> T + 'a,
    {
        self.validator = Some(Box::new(validator));
    }

    pub fn clear_validator(&mut self) {
        self.validator = None;
    }

    pub fn value(&self) -> T {
        self.value
    }

    pub fn min(&self) -> T {
        self.min
    }

    pub fn max(&self) -> T {
        self.max
    }

    pub fn format(&self) -> &ValueFormat {
        &self.format
    }

    pub fn label_button(&self) -> &LabelButton<'a> {
        &self.label
    }

    pub fn label_button_mut(&mut self) -> &mut LabelButton<'a> {
        &mut self.label
    }

    /// Clamp, validate (unless skipped) and commit `value`.
    ///
    /// Returns whether the value changed. A change updates the label and
    /// marks the button dirty; nothing is drawn.
    pub fn set_value(&mut self, value: T, skip_validation: bool) -> bool {
        let mut value = value.clamp(self.min, self.max);
        if !skip_validation && let Some(validator) = &self.validator {
            value = validator(self, value).clamp(self.min, self.max);
        }
        if value == self.value {
            return false;
        }
        debug!("Numeric value {:?} -> {:?}", self.value, value);
        self.value = value;
        self.refresh_label();
        self.label.core_mut().mark_dirty();
        true
    }

    /// [`set_value`](Self::set_value), then redraw if dirty or forced.
    pub fn set_value_and_draw_if_changed(
        &mut self,
        surface: &mut dyn Surface,
        value: T,
        force: bool,
    ) -> Result<bool, DrawError> {
        self.set_value(value, false);
        self.draw_if_changed(surface, force)
    }

    /// Step the value by `step`, or by `source`'s delta when it has a
    /// non-zero one, clamping to the range. Redraws immediately if the value
    /// changed and returns whether a draw happened.
    pub fn value_inc_dec(
        &mut self,
        surface: &mut dyn Surface,
        step: i16,
        source: Option<&dyn Button>,
    ) -> Result<bool, DrawError> {
        let step = source
            .map(|button| button.delta())
            .filter(|&delta| delta != 0)
            .unwrap_or(step);
        let current: i32 = self.value.into();
        let next = (current + i32::from(step)).clamp(self.min.into(), self.max.into());
        let next = T::try_from(next).unwrap_or(self.value);
        self.set_value_and_draw_if_changed(surface, next, false)
    }

    fn refresh_label(&mut self) {
        if self.value == T::ZERO
            && let Some(zero) = &self.format.zero_label
        {
            self.label.set_label(zero);
            return;
        }
        let mut text: heapless::String<8> = heapless::String::new();
        if self.format.show_plus && self.value > T::ZERO {
            text.push('+').ok();
        }
        write!(text, "{}", self.value).ok();
        self.label.set_label(&text);
    }
}

impl<T: NumericValue> Button for NumericButton<'_, T> {
    fn core(&self) -> &ButtonCore {
        self.label.core()
    }

    fn core_mut(&mut self) -> &mut ButtonCore {
        self.label.core_mut()
    }

    fn render(&self, surface: &mut dyn Surface, inverted: bool) -> Result<(), DrawError> {
        self.label.render(surface, inverted)
    }
}

/// Press handler that steps `target` by the pressed button's delta, or by
/// `step` when the pressed button has none.
///
/// # Examples
/// ```ignore
/// registry.register(&down_arrow, inc_dec_handler(&volume, -1))?;
/// registry.register(&plus_ten, inc_dec_handler(&volume, 10))?;
/// ```
pub fn inc_dec_handler<'a, 'f: 'a, T: NumericValue>(
    target: &'a RefCell<NumericButton<'f, T>>,
    step: i16,
) -> impl FnMut(&mut dyn Button, &mut dyn Surface) -> Result<(), DrawError> + 'a {
    move |source, surface| {
        let Ok(mut numeric) = target.try_borrow_mut() else {
            warn!("Numeric button is busy; dropping step of {}", step);
            return Ok(());
        };
        numeric.value_inc_dec(surface, step, Some(&*source))?;
        Ok(())
    }
}
