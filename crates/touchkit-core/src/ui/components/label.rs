// src/ui/components/label.rs
//! Labeled buttons
//!
//! A [`LabelButton`] is a rectangle, optionally with rounded corners, and a
//! single line of text placed inside it according to a text alignment. The
//! button size is fixed at construction; it can either be given outright or
//! derived from the label via [`Dimension::FitLabel`].

use alloc::string::String;
use embedded_graphics::pixelcolor::Rgb565;
use log::debug;

use super::DegreeSymbol;
use crate::ui::core::{Button, ButtonConfig, ButtonCore};
use crate::ui::font::{Font, TextMetrics, align_cursor};
use crate::ui::styling::{Align, Dimension, WHITE};
use crate::ui::surface::{DrawError, Surface};

/// Text appearance and sizing rules for a [`LabelButton`].
///
/// # Examples
/// ```ignore
/// let style = LabelStyle::new(Font::builtin().with_size(2, 2))
///     .with_text_color(YELLOW)
///     .with_corner_radius(6)
///     .with_size(Dimension::FitLabel(12), Dimension::Fixed(40));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LabelStyle<'a> {
    pub font: Font<'a>,
    /// `None` means the label is not drawn
    pub text_color: Option<Rgb565>,
    pub text_align: Align,
    /// 0 for square corners
    pub corner_radius: u16,
    pub width: Dimension,
    pub height: Dimension,
    /// Draw a degree ring after the label
    pub degree_symbol: bool,
}

impl Default for LabelStyle<'_> {
    fn default() -> Self {
        Self::new(Font::builtin())
    }
}

impl<'a> LabelStyle<'a> {
    pub fn new(font: Font<'a>) -> Self {
        Self {
            font,
            text_color: Some(WHITE),
            text_align: Align::CENTER,
            corner_radius: 0,
            width: Dimension::default(),
            height: Dimension::default(),
            degree_symbol: false,
        }
    }

    pub fn with_text_color(mut self, color: Rgb565) -> Self {
        self.text_color = Some(color);
        self
    }

    pub fn without_text(mut self) -> Self {
        self.text_color = None;
        self
    }

    pub fn with_text_align(mut self, align: Align) -> Self {
        self.text_align = align;
        self
    }

    pub fn with_corner_radius(mut self, radius: u16) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_size(mut self, width: Dimension, height: Dimension) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_degree_symbol(mut self) -> Self {
        self.degree_symbol = true;
        self
    }
}

/// Rectangle button with a text label.
///
/// When inverted the fill and text colors swap; the outline keeps its color.
#[derive(Debug, Clone)]
pub struct LabelButton<'a> {
    core: ButtonCore,
    label: String,
    font: Font<'a>,
    text_color: Option<Rgb565>,
    text_align: Align,
    corner_radius: u16,
    degree: Option<DegreeSymbol>,
}

impl<'a> LabelButton<'a> {
    pub fn new(config: ButtonConfig, style: LabelStyle<'a>, label: &str) -> Self {
        let degree = style
            .degree_symbol
            .then(|| DegreeSymbol::for_font(&style.font));
        let metrics = measure(&style.font, label, degree.as_ref());
        let width = style.width.resolve(metrics.width, style.corner_radius);
        let height = style.height.resolve(metrics.height, style.corner_radius);
        debug!("Label button {:?} sized {}x{}", label, width, height);

        Self {
            core: ButtonCore::new(&config, width, height),
            label: String::from(label),
            font: style.font,
            text_color: style.text_color,
            text_align: style.text_align,
            corner_radius: style.corner_radius,
            degree,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Replace the label. Returns `false` (and leaves the button clean) when
    /// the text is unchanged.
    pub fn set_label(&mut self, label: &str) -> bool {
        if self.label == label {
            return false;
        }
        if self.label.len() == label.len() {
            self.label.clear();
            self.label.push_str(label);
        } else {
            self.label = String::from(label);
        }
        self.core.mark_dirty();
        true
    }

    /// Replace the label and redraw if anything changed (or if `force`).
    pub fn set_label_and_draw_if_changed(
        &mut self,
        surface: &mut dyn Surface,
        label: &str,
        force: bool,
    ) -> Result<bool, DrawError> {
        self.set_label(label);
        self.draw_if_changed(surface, force)
    }

    pub fn text_color(&self) -> Option<Rgb565> {
        self.text_color
    }

    pub fn set_text_color(&mut self, color: Option<Rgb565>) -> bool {
        if self.text_color == color {
            return false;
        }
        self.text_color = color;
        self.core.mark_dirty();
        true
    }

    pub fn text_align(&self) -> Align {
        self.text_align
    }

    pub fn set_text_align(&mut self, align: Align) -> bool {
        if self.text_align == align {
            return false;
        }
        self.text_align = align;
        self.core.mark_dirty();
        true
    }

    pub fn font(&self) -> &Font<'a> {
        &self.font
    }

    /// Change the font. The button keeps its size.
    pub fn set_font(&mut self, font: Font<'a>) -> bool {
        if self.font == font {
            return false;
        }
        self.font = font;
        if self.degree.is_some() {
            self.degree = Some(DegreeSymbol::for_font(&font));
        }
        self.core.mark_dirty();
        true
    }

    pub fn corner_radius(&self) -> u16 {
        self.corner_radius
    }

    pub fn degree_symbol(&self) -> Option<&DegreeSymbol> {
        self.degree.as_ref()
    }

    /// Metrics of the label as drawn, degree symbol included.
    pub fn label_metrics(&self) -> TextMetrics {
        measure(&self.font, &self.label, self.degree.as_ref())
    }
}

fn measure(font: &Font<'_>, label: &str, degree: Option<&DegreeSymbol>) -> TextMetrics {
    let metrics = font.text_bounds_and_offset(label);
    match degree {
        Some(d) => metrics.followed_by(&d.metrics()),
        None => metrics,
    }
}

impl Button for LabelButton<'_> {
    fn core(&self) -> &ButtonCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ButtonCore {
        &mut self.core
    }

    fn render(&self, surface: &mut dyn Surface, inverted: bool) -> Result<(), DrawError> {
        let area = self.core.bounds();
        let outline = self.core.outline_color();
        let (fill, text) = if inverted {
            (self.text_color, self.core.fill_color())
        } else {
            (self.core.fill_color(), self.text_color)
        };

        if self.corner_radius == 0 {
            if let Some(color) = fill {
                surface.fill_rect(area, color)?;
            }
            if let Some(color) = outline {
                surface.stroke_rect(area, color)?;
            }
        } else {
            if let Some(color) = fill {
                surface.fill_rounded_rect(area, self.corner_radius, color)?;
            }
            if let Some(color) = outline {
                surface.stroke_rounded_rect(area, self.corner_radius, color)?;
            }
        }

        if let Some(color) = text
            && !self.label.is_empty()
        {
            let cursor = align_cursor(&area, &self.label_metrics(), self.text_align);
            let end = surface.draw_text(&self.label, cursor, &self.font, color)?;
            if let Some(degree) = &self.degree {
                degree.draw(surface, end, color, fill)?;
            }
        }
        Ok(())
    }
}
