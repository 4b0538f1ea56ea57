//! Touch dispatch across a set of buttons
//!
//! [`ButtonRegistry`] holds references to the buttons on screen and routes
//! touch-down/touch-up events to them. Buttons stay owned by the caller in
//! `RefCell`s, so the application can keep reading and updating them while
//! they are registered.
//!
//! Only one button is pressed at a time. On touch-down the registry scans
//! buttons in registration order and the first whose hit box contains the
//! point wins, so a button registered earlier shadows later ones it
//! overlaps.
//!
//! # Examples
//! ```ignore
//! let ok = RefCell::new(LabelButton::new(ButtonConfig::at(160, 200), LabelStyle::default(), "OK"));
//! let mut registry: ButtonRegistry<'_> = ButtonRegistry::new();
//! registry.register(&ok, |_, _| {
//!     info!("OK pressed");
//!     Ok(())
//! })?;
//!
//! // In the touch loop
//! registry.press(&mut surface, point)?;
//! // ...
//! registry.release(&mut surface)?;
//! ```

use alloc::boxed::Box;
use core::cell::RefCell;
use heapless::Vec;
use log::{debug, trace, warn};
use thiserror_no_std::Error;

use crate::config::MAX_BUTTONS;
use crate::ui::core::{Button, TouchPoint};
use crate::ui::surface::{DrawError, Surface};

/// Shared reference to a registered button
pub type ButtonRef<'a> = &'a RefCell<dyn Button + 'a>;

/// Runs after a button has been pressed and redrawn.
pub type PressHandler<'a> =
    Box<dyn FnMut(&mut dyn Button, &mut dyn Surface) -> Result<(), DrawError> + 'a>;

/// Runs on every touch-down that hits a button (`true`) and every
/// touch-up (`false`); typically drives a click sound or a backlight timer.
pub type MasterHandler<'a> = Box<dyn FnMut(bool) + 'a>;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    #[error("button registry is full ({capacity} buttons)")]
    Full { capacity: usize },
    #[error("button is not registered")]
    NotFound,
    #[error("button is borrowed elsewhere")]
    Busy,
}

struct Entry<'a> {
    button: ButtonRef<'a>,
    on_press: Option<PressHandler<'a>>,
}

/// Fixed-capacity set of buttons receiving touch events.
pub struct ButtonRegistry<'a, const N: usize = MAX_BUTTONS> {
    entries: Vec<Entry<'a>, N>,
    pressed: Option<usize>,
    master: Option<MasterHandler<'a>>,
}

impl<const N: usize> Default for ButtonRegistry<'_, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const N: usize> ButtonRegistry<'a, N> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            pressed: None,
            master: None,
        }
    }

    pub fn with_master_handler<F>(mut self, handler: F) -> Self
    where
        F: FnMut(bool) + 'a,
    {
        self.set_master_handler(handler);
        self
    }

    pub fn set_master_handler<F>(&mut self, handler: F)
    where
        F: FnMut(bool) + 'a,
    {
        self.master = Some(Box::new(handler));
    }

    pub fn clear_master_handler(&mut self) {
        self.master = None;
    }

    /// Register `button` with a press handler.
    ///
    /// Registering a button that is already present is a no-op and keeps
    /// its original handler.
    pub fn register<F>(&mut self, button: ButtonRef<'a>, on_press: F) -> Result<(), RegistryError>
    where
        F: FnMut(&mut dyn Button, &mut dyn Surface) -> Result<(), DrawError> + 'a,
    {
        self.insert(button, Some(Box::new(on_press)))
    }

    /// Register `button` without a press handler; it still inverts when
    /// touched and reports `just_pressed`/`just_released`.
    pub fn register_button(&mut self, button: ButtonRef<'a>) -> Result<(), RegistryError> {
        self.insert(button, None)
    }

    fn insert(
        &mut self,
        button: ButtonRef<'a>,
        on_press: Option<PressHandler<'a>>,
    ) -> Result<(), RegistryError> {
        if self.contains(button) {
            debug!("Button already registered");
            return Ok(());
        }
        self.entries
            .push(Entry { button, on_press })
            .map_err(|_| RegistryError::Full { capacity: N })?;
        let name = button.try_borrow().map_or("busy", |b| b.core().name());
        debug!("Registered button {} ({}) of {}", self.entries.len(), name, N);
        Ok(())
    }

    /// Remove `button`.
    ///
    /// Removing the pressed button releases it without drawing; it is marked
    /// dirty so its next draw shows the normal colors. Fails with
    /// [`RegistryError::Busy`] and changes nothing when that release cannot
    /// borrow the button.
    pub fn unregister<B>(&mut self, button: &RefCell<B>) -> Result<(), RegistryError>
    where
        B: Button + ?Sized,
    {
        let index = self.index_of(button).ok_or(RegistryError::NotFound)?;
        if self.pressed == Some(index) {
            let Ok(mut pressed) = button.try_borrow_mut() else {
                warn!("Button {} is borrowed elsewhere; not unregistering", index);
                return Err(RegistryError::Busy);
            };
            pressed.core_mut().release_silently();
        }
        self.entries.remove(index);
        self.pressed = match self.pressed {
            Some(p) if p == index => None,
            Some(p) if p > index => Some(p - 1),
            other => other,
        };
        debug!("Unregistered button {}, {} left", index, self.entries.len());
        Ok(())
    }

    /// Release any pressed button, then drop every registration.
    pub fn clear(&mut self, surface: &mut dyn Surface) -> Result<(), DrawError> {
        let released = self.release(surface);
        self.entries.clear();
        self.pressed = None;
        released.map(|_| ())
    }

    pub fn contains<B>(&self, button: &RefCell<B>) -> bool
    where
        B: Button + ?Sized,
    {
        self.index_of(button).is_some()
    }

    fn index_of<B>(&self, button: &RefCell<B>) -> Option<usize>
    where
        B: Button + ?Sized,
    {
        self.entries
            .iter()
            .position(|entry| core::ptr::addr_eq(entry.button, button))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        N
    }

    /// Registration index of the currently pressed button
    pub fn pressed_index(&self) -> Option<usize> {
        self.pressed
    }

    pub fn pressed_button(&self) -> Option<ButtonRef<'a>> {
        self.pressed
            .and_then(|index| self.entries.get(index))
            .map(|entry| entry.button)
    }

    /// Registered buttons in registration order
    pub fn buttons(&self) -> impl Iterator<Item = ButtonRef<'a>> + '_ {
        self.entries.iter().map(|entry| entry.button)
    }

    /// Handle a touch-down at `point`.
    ///
    /// Returns `true` when a button became pressed. A touch that hits
    /// nothing, or hits the button that is already pressed, returns
    /// `false` and calls no handler.
    pub fn press(&mut self, surface: &mut dyn Surface, point: TouchPoint) -> Result<bool, DrawError> {
        // A borrowed button stops the scan so it still shadows later ones
        let Some(index) = self.entries.iter().position(|entry| {
            entry
                .button
                .try_borrow()
                .map_or(true, |button| button.contains(point))
        }) else {
            trace!("Touch at ({}, {}) hit no button", point.x, point.y);
            return Ok(false);
        };

        let entry = &mut self.entries[index];
        let Ok(mut button) = entry.button.try_borrow_mut() else {
            warn!("Button {} is borrowed elsewhere; ignoring touch", index);
            return Ok(false);
        };
        if button.is_pressed() {
            return Ok(false);
        }

        if let Some(master) = self.master.as_mut() {
            master(true);
        }
        let drawn = button.press(surface);
        self.pressed = Some(index);
        drawn?;
        debug!(
            "Button {} ({}) pressed at ({}, {})",
            index,
            button.core().name(),
            point.x,
            point.y
        );

        if let Some(handler) = entry.on_press.as_mut() {
            handler(&mut *button, surface)?;
        }
        Ok(true)
    }

    /// Handle a touch-up.
    ///
    /// The master handler is told about every touch-up, even when no button
    /// is pressed. Returns whether a button was released.
    pub fn release(&mut self, surface: &mut dyn Surface) -> Result<bool, DrawError> {
        if let Some(master) = self.master.as_mut() {
            master(false);
        }
        let Some(index) = self.pressed else {
            return Ok(false);
        };
        let Some(entry) = self.entries.get(index) else {
            self.pressed = None;
            return Ok(false);
        };
        // Keep the index until the button can be borrowed so a later
        // touch-up can still release it
        let Ok(mut button) = entry.button.try_borrow_mut() else {
            warn!("Button {} is borrowed elsewhere; release deferred", index);
            return Ok(false);
        };
        self.pressed = None;
        button.release(surface)?;
        debug!("Button {} ({}) released", index, button.core().name());
        Ok(true)
    }

    /// Redraw every registered button that is dirty (or all, when `force`).
    /// Returns how many were drawn.
    pub fn draw_if_changed(&self, surface: &mut dyn Surface, force: bool) -> Result<usize, DrawError> {
        let mut drawn = 0;
        for entry in &self.entries {
            if let Ok(mut button) = entry.button.try_borrow_mut()
                && button.draw_if_changed(surface, force)?
            {
                drawn += 1;
            }
        }
        Ok(drawn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::RectButton;
    use crate::ui::core::ButtonConfig;
    use crate::ui::styling::Align;
    use crate::ui::testing::RecordingSurface;
    use alloc::rc::Rc;
    use alloc::vec::Vec as AllocVec;
    use core::cell::Cell;

    fn rect(x: i16, y: i16) -> RefCell<RectButton> {
        RefCell::new(RectButton::new(
            ButtonConfig::at(x, y).with_align(Align::TOP_LEFT),
            20,
            20,
        ))
    }

    #[test]
    fn test_register_is_idempotent() {
        let a = rect(0, 0);
        let mut registry: ButtonRegistry<'_, 4> = ButtonRegistry::new();
        registry.register_button(&a).unwrap();
        registry.register_button(&a).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(&a));
    }

    #[test]
    fn test_full_registry_rejects() {
        let (a, b, c) = (rect(0, 0), rect(30, 0), rect(60, 0));
        let mut registry: ButtonRegistry<'_, 2> = ButtonRegistry::new();
        registry.register_button(&a).unwrap();
        registry.register_button(&b).unwrap();
        assert_eq!(
            registry.register_button(&c),
            Err(RegistryError::Full { capacity: 2 })
        );
        assert_eq!(registry.len(), 2);
        assert!(registry.contains(&a) && registry.contains(&b));
        assert!(!registry.contains(&c));
        assert_eq!(registry.capacity(), 2);
    }

    #[test]
    fn test_unregister_unknown_button() {
        let (a, b) = (rect(0, 0), rect(30, 0));
        let mut registry: ButtonRegistry<'_, 4> = ButtonRegistry::new();
        registry.register_button(&a).unwrap();
        assert_eq!(registry.unregister(&b), Err(RegistryError::NotFound));
        registry.unregister(&a).unwrap();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_press_miss_and_repeat() {
        let mut surface = RecordingSurface::new();
        let a = rect(0, 0);
        let hits = Cell::new(0);
        let mut registry: ButtonRegistry<'_, 4> = ButtonRegistry::new();
        registry
            .register(&a, |_, _| {
                hits.set(hits.get() + 1);
                Ok(())
            })
            .unwrap();

        assert!(!registry.press(&mut surface, TouchPoint::new(50, 50)).unwrap());
        assert!(registry.press(&mut surface, TouchPoint::new(5, 5)).unwrap());
        assert!(!registry.press(&mut surface, TouchPoint::new(6, 6)).unwrap());
        assert_eq!(hits.get(), 1);
        assert_eq!(registry.pressed_index(), Some(0));
        assert!(a.borrow().is_pressed());

        assert!(registry.release(&mut surface).unwrap());
        assert!(!a.borrow().is_pressed());
        assert!(!registry.release(&mut surface).unwrap());
    }

    #[test]
    fn test_first_registered_wins_overlap() {
        let mut surface = RecordingSurface::new();
        let (a, b) = (rect(0, 0), rect(10, 10));
        let mut registry: ButtonRegistry<'_, 4> = ButtonRegistry::new();
        registry.register_button(&a).unwrap();
        registry.register_button(&b).unwrap();

        registry.press(&mut surface, TouchPoint::new(15, 15)).unwrap();
        assert!(a.borrow().is_pressed());
        assert!(!b.borrow().is_pressed());
    }

    #[test]
    fn test_unregister_adjusts_pressed_index() {
        let mut surface = RecordingSurface::new();
        let (a, b) = (rect(0, 0), rect(30, 0));
        let mut registry: ButtonRegistry<'_, 4> = ButtonRegistry::new();
        registry.register_button(&a).unwrap();
        registry.register_button(&b).unwrap();

        registry.press(&mut surface, TouchPoint::new(35, 5)).unwrap();
        assert_eq!(registry.pressed_index(), Some(1));
        registry.unregister(&a).unwrap();
        assert_eq!(registry.pressed_index(), Some(0));

        registry.unregister(&b).unwrap();
        assert_eq!(registry.pressed_index(), None);
        assert!(!registry.release(&mut surface).unwrap());
        assert!(!b.borrow().is_pressed());
    }

    #[test]
    fn test_unregistered_pressed_button_works_again() {
        let mut surface = RecordingSurface::new();
        let a = rect(0, 0);
        let mut registry: ButtonRegistry<'_, 4> = ButtonRegistry::new();
        registry.register_button(&a).unwrap();

        assert!(registry.press(&mut surface, TouchPoint::new(5, 5)).unwrap());
        registry.unregister(&a).unwrap();
        {
            let button = a.borrow();
            assert!(!button.is_pressed());
            assert!(!button.core().is_inverted());
            assert!(button.core().is_dirty());
        }
        assert!(a.borrow_mut().just_released());
        assert!(!registry.release(&mut surface).unwrap());

        registry.register_button(&a).unwrap();
        assert!(registry.press(&mut surface, TouchPoint::new(5, 5)).unwrap());
        assert!(a.borrow().is_pressed());
        assert!(registry.release(&mut surface).unwrap());
        assert!(!a.borrow().is_pressed());
    }

    #[test]
    fn test_unregister_busy_pressed_button_is_refused() {
        let mut surface = RecordingSurface::new();
        let a = rect(0, 0);
        let mut registry: ButtonRegistry<'_, 4> = ButtonRegistry::new();
        registry.register_button(&a).unwrap();
        registry.press(&mut surface, TouchPoint::new(5, 5)).unwrap();

        {
            let _held = a.borrow_mut();
            assert_eq!(registry.unregister(&a), Err(RegistryError::Busy));
        }
        assert!(registry.contains(&a));
        assert_eq!(registry.pressed_index(), Some(0));
        registry.unregister(&a).unwrap();
        assert!(!a.borrow().is_pressed());
    }

    #[test]
    fn test_release_retries_after_borrow_conflict() {
        let mut surface = RecordingSurface::new();
        let a = rect(0, 0);
        let mut registry: ButtonRegistry<'_, 4> = ButtonRegistry::new();
        registry.register_button(&a).unwrap();
        registry.press(&mut surface, TouchPoint::new(5, 5)).unwrap();

        {
            let _held = a.borrow_mut();
            assert!(!registry.release(&mut surface).unwrap());
        }
        assert_eq!(registry.pressed_index(), Some(0));
        assert!(registry.release(&mut surface).unwrap());
        assert_eq!(registry.pressed_index(), None);
        assert!(!a.borrow().is_pressed());
    }

    #[test]
    fn test_borrowed_button_still_shadows_overlap() {
        let mut surface = RecordingSurface::new();
        let (a, b) = (rect(0, 0), rect(10, 10));
        let mut registry: ButtonRegistry<'_, 4> = ButtonRegistry::new();
        registry.register_button(&a).unwrap();
        registry.register_button(&b).unwrap();

        {
            let _held = a.borrow_mut();
            assert!(!registry.press(&mut surface, TouchPoint::new(15, 15)).unwrap());
        }
        assert_eq!(registry.pressed_index(), None);
        assert!(!a.borrow().is_pressed());
        assert!(!b.borrow().is_pressed());

        assert!(registry.press(&mut surface, TouchPoint::new(15, 15)).unwrap());
        assert!(a.borrow().is_pressed());
        assert!(!b.borrow().is_pressed());
    }

    #[test]
    fn test_master_handler_order() {
        let mut surface = RecordingSurface::new();
        let a = rect(0, 0);
        let log = Rc::new(RefCell::new(AllocVec::new()));
        let master_log = Rc::clone(&log);
        let press_log = Rc::clone(&log);

        let mut registry: ButtonRegistry<'_, 4> = ButtonRegistry::new()
            .with_master_handler(move |down| master_log.borrow_mut().push(if down { "down" } else { "up" }));
        registry
            .register(&a, move |button, _| {
                assert!(button.is_pressed());
                press_log.borrow_mut().push("handler");
                Ok(())
            })
            .unwrap();

        registry.release(&mut surface).unwrap();
        registry.press(&mut surface, TouchPoint::new(50, 50)).unwrap();
        registry.press(&mut surface, TouchPoint::new(1, 1)).unwrap();
        registry.release(&mut surface).unwrap();
        assert_eq!(*log.borrow(), ["up", "down", "handler", "up"]);
    }

    #[test]
    fn test_clear_releases_and_empties() {
        let mut surface = RecordingSurface::new();
        let a = rect(0, 0);
        let mut registry: ButtonRegistry<'_, 4> = ButtonRegistry::new();
        registry.register_button(&a).unwrap();
        registry.press(&mut surface, TouchPoint::new(1, 1)).unwrap();

        registry.clear(&mut surface).unwrap();
        assert!(registry.is_empty());
        assert!(!a.borrow().is_pressed());
    }

    #[test]
    fn test_draw_if_changed_counts() {
        let mut surface = RecordingSurface::new();
        let (a, b) = (rect(0, 0), rect(30, 0));
        let mut registry: ButtonRegistry<'_, 4> = ButtonRegistry::new();
        registry.register_button(&a).unwrap();
        registry.register_button(&b).unwrap();

        assert_eq!(registry.draw_if_changed(&mut surface, false).unwrap(), 2);
        assert_eq!(registry.draw_if_changed(&mut surface, false).unwrap(), 0);
        b.borrow_mut().core_mut().mark_dirty();
        assert_eq!(registry.draw_if_changed(&mut surface, false).unwrap(), 1);
        assert_eq!(registry.draw_if_changed(&mut surface, true).unwrap(), 2);
    }
}
