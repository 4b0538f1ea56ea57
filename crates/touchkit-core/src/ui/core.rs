//! Core button types and the `Button` trait
//!
//! Every button kind embeds a [`ButtonCore`] holding geometry, colors and
//! the state flags, and implements [`Button`] by supplying `render`. The
//! press/release/redraw protocol is shared through the trait's provided
//! methods so that the registry can drive any button through
//! `dyn Button`.

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::ui::styling::{Align, AlignError, BLACK, Expansion, WHITE};
use crate::ui::surface::{DrawError, Surface};

/// A point in screen coordinates reported by the touch controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TouchPoint {
    pub x: i16,
    pub y: i16,
}

impl TouchPoint {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }

    pub fn to_point(&self) -> Point {
        Point::new(i32::from(self.x), i32::from(self.y))
    }
}

/// Placement and colors shared by every button constructor.
///
/// `anchor` is the point the button is aligned to: with
/// [`Align::TOP_LEFT`] it becomes the top-left corner, with
/// [`Align::CENTER`] the middle of the button, and so on.
///
/// # Examples
/// ```ignore
/// let config = ButtonConfig::at(160, 120)
///     .with_align(Align::CENTER)
///     .with_fill(BLUE)
///     .with_expansion(Expansion::all(6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonConfig {
    /// Shown in log lines only
    pub name: Option<&'static str>,
    pub anchor: Point,
    pub align: Align,
    /// `None` means the outline is not drawn
    pub outline: Option<Rgb565>,
    /// `None` means the background is not drawn
    pub fill: Option<Rgb565>,
    pub expansion: Expansion,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            name: None,
            anchor: Point::zero(),
            align: Align::CENTER,
            outline: Some(WHITE),
            fill: Some(BLACK),
            expansion: Expansion::NONE,
        }
    }
}

impl ButtonConfig {
    pub fn at(x: i16, y: i16) -> Self {
        Self {
            anchor: Point::new(i32::from(x), i32::from(y)),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: &'static str) -> Self {
        self.name = Some(name);
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Set the alignment from a two-letter code such as `"TL"` or `"C"`.
    pub fn with_align_code(mut self, code: &str) -> Result<Self, AlignError> {
        self.align = code.parse()?;
        Ok(self)
    }

    pub fn with_outline(mut self, color: Rgb565) -> Self {
        self.outline = Some(color);
        self
    }

    pub fn without_outline(mut self) -> Self {
        self.outline = None;
        self
    }

    pub fn with_fill(mut self, color: Rgb565) -> Self {
        self.fill = Some(color);
        self
    }

    pub fn without_fill(mut self) -> Self {
        self.fill = None;
        self
    }

    pub fn with_expansion(mut self, expansion: Expansion) -> Self {
        self.expansion = expansion;
        self
    }
}

/// State shared by all button kinds.
#[derive(Debug, Clone)]
pub struct ButtonCore {
    name: Option<&'static str>,
    top_left: Point,
    width: u16,
    height: u16,
    expansion: Expansion,
    outline: Option<Rgb565>,
    fill: Option<Rgb565>,
    delta: i16,
    inverted: bool,
    dirty: bool,
    pressed: bool,
    // Start as "already reported" so a fresh button reports neither edge
    reported: bool,
}

impl ButtonCore {
    /// Core for a `width` x `height` button aligned to `config.anchor`.
    pub fn new(config: &ButtonConfig, width: u16, height: u16) -> Self {
        Self {
            name: config.name,
            top_left: config.align.place(config.anchor, width, height),
            width,
            height,
            expansion: config.expansion,
            outline: config.outline,
            fill: config.fill,
            delta: 0,
            inverted: false,
            dirty: true,
            pressed: false,
            reported: true,
        }
    }

    /// Debug name, `"unnamed"` when none was configured.
    pub fn name(&self) -> &'static str {
        self.name.unwrap_or("unnamed")
    }

    pub fn top_left(&self) -> Point {
        self.top_left
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Visible rectangle
    pub fn bounds(&self) -> Rectangle {
        Rectangle::new(
            self.top_left,
            Size::new(u32::from(self.width), u32::from(self.height)),
        )
    }

    /// Visible rectangle grown by the expansion margins
    pub fn hit_box(&self) -> Rectangle {
        let e = self.expansion;
        Rectangle::new(
            self.top_left - Point::new(i32::from(e.left), i32::from(e.up)),
            Size::new(
                u32::from(self.width) + u32::from(e.left) + u32::from(e.right),
                u32::from(self.height) + u32::from(e.up) + u32::from(e.down),
            ),
        )
    }

    pub fn expansion(&self) -> Expansion {
        self.expansion
    }

    pub fn set_expansion(&mut self, expansion: Expansion) {
        self.expansion = expansion;
    }

    /// Whether `point` lies in the hit box. Edges are inclusive on the
    /// top/left and exclusive on the bottom/right.
    pub fn contains(&self, point: TouchPoint) -> bool {
        let e = self.expansion;
        let x = i32::from(point.x);
        let y = i32::from(point.y);
        let left = self.top_left.x - i32::from(e.left);
        let right = self.top_left.x + i32::from(self.width) + i32::from(e.right);
        let top = self.top_left.y - i32::from(e.up);
        let bottom = self.top_left.y + i32::from(self.height) + i32::from(e.down);
        x >= left && x < right && y >= top && y < bottom
    }

    pub fn outline_color(&self) -> Option<Rgb565> {
        self.outline
    }

    pub fn fill_color(&self) -> Option<Rgb565> {
        self.fill
    }

    /// Change the outline color; marks the button dirty when it differs.
    pub fn set_outline_color(&mut self, color: Option<Rgb565>) -> bool {
        if self.outline == color {
            return false;
        }
        self.outline = color;
        self.dirty = true;
        true
    }

    /// Change the fill color; marks the button dirty when it differs.
    pub fn set_fill_color(&mut self, color: Option<Rgb565>) -> bool {
        if self.fill == color {
            return false;
        }
        self.fill = color;
        self.dirty = true;
        true
    }

    /// Fill and outline colors as drawn, swapped when inverted.
    pub fn paint(&self, inverted: bool) -> (Option<Rgb565>, Option<Rgb565>) {
        if inverted {
            (self.outline, self.fill)
        } else {
            (self.fill, self.outline)
        }
    }

    pub fn delta(&self) -> i16 {
        self.delta
    }

    pub(crate) fn set_delta(&mut self, delta: i16) {
        self.delta = delta;
    }

    pub fn is_inverted(&self) -> bool {
        self.inverted
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Request a redraw on the next `draw_if_changed`.
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    pub(crate) fn set_inverted(&mut self, inverted: bool) {
        self.inverted = inverted;
    }

    pub(crate) fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Update the pressed flag. Returns whether it actually changed.
    pub(crate) fn set_pressed(&mut self, pressed: bool) -> bool {
        if self.pressed == pressed {
            return false;
        }
        self.pressed = pressed;
        self.reported = false;
        true
    }

    /// Drop a press without drawing. The next draw shows normal colors.
    pub(crate) fn release_silently(&mut self) {
        if self.set_pressed(false) {
            self.inverted = false;
            self.dirty = true;
        }
    }

    pub(crate) fn take_edge(&mut self, pressed: bool) -> bool {
        if self.pressed == pressed && !self.reported {
            self.reported = true;
            true
        } else {
            false
        }
    }
}

/// A touch button.
///
/// Implementors provide access to their [`ButtonCore`] and a `render`
/// routine. Everything else, pressing, releasing and redrawing, comes from
/// the provided methods.
pub trait Button {
    fn core(&self) -> &ButtonCore;

    fn core_mut(&mut self) -> &mut ButtonCore;

    /// Draw the button in its normal or inverted colors.
    ///
    /// Implementations only paint. Flag bookkeeping happens in
    /// [`draw_inverted`](Self::draw_inverted).
    fn render(&self, surface: &mut dyn Surface, inverted: bool) -> Result<(), DrawError>;

    /// Draw in the requested colors and remember them. Clears the dirty flag.
    fn draw_inverted(&mut self, surface: &mut dyn Surface, inverted: bool) -> Result<(), DrawError> {
        self.core_mut().set_inverted(inverted);
        self.render(surface, inverted)?;
        self.core_mut().mark_clean();
        Ok(())
    }

    /// Draw using the current inversion state.
    fn draw(&mut self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        let inverted = self.core().is_inverted();
        self.draw_inverted(surface, inverted)
    }

    /// Draw only when dirty (or when forced). Returns whether it drew.
    fn draw_if_changed(&mut self, surface: &mut dyn Surface, force: bool) -> Result<bool, DrawError> {
        if !force && !self.core().is_dirty() {
            return Ok(false);
        }
        self.draw(surface)?;
        Ok(true)
    }

    /// Mark pressed and redraw inverted. No-op when already pressed.
    fn press(&mut self, surface: &mut dyn Surface) -> Result<bool, DrawError> {
        if !self.core_mut().set_pressed(true) {
            return Ok(false);
        }
        self.draw_inverted(surface, true)?;
        Ok(true)
    }

    /// Mark released and redraw normally. No-op when not pressed.
    fn release(&mut self, surface: &mut dyn Surface) -> Result<bool, DrawError> {
        if !self.core_mut().set_pressed(false) {
            return Ok(false);
        }
        self.draw_inverted(surface, false)?;
        Ok(true)
    }

    fn is_pressed(&self) -> bool {
        self.core().is_pressed()
    }

    /// True once after the button became pressed.
    fn just_pressed(&mut self) -> bool {
        self.core_mut().take_edge(true)
    }

    /// True once after the button became released.
    fn just_released(&mut self) -> bool {
        self.core_mut().take_edge(false)
    }

    fn contains(&self, point: TouchPoint) -> bool {
        self.core().contains(point)
    }

    /// Step suggested to an attached numeric button; 0 for most buttons.
    fn delta(&self) -> i16 {
        self.core().delta()
    }
}
