use crate::ui::core::{Button, ButtonConfig, ButtonCore};
use crate::ui::surface::{DrawError, Surface};

/// Plain rectangle button.
///
/// Drawn as a filled rectangle with a one-pixel outline. When inverted the
/// fill and outline colors swap.
#[derive(Debug, Clone)]
pub struct RectButton {
    core: ButtonCore,
}

impl RectButton {
    pub fn new(config: ButtonConfig, width: u16, height: u16) -> Self {
        Self {
            core: ButtonCore::new(&config, width, height),
        }
    }
}

impl Button for RectButton {
    fn core(&self) -> &ButtonCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ButtonCore {
        &mut self.core
    }

    fn render(&self, surface: &mut dyn Surface, inverted: bool) -> Result<(), DrawError> {
        let area = self.core.bounds();
        let (fill, outline) = self.core.paint(inverted);
        if let Some(color) = fill {
            surface.fill_rect(area, color)?;
        }
        if let Some(color) = outline {
            surface.stroke_rect(area, color)?;
        }
        Ok(())
    }
}
