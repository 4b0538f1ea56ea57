//! Hit-box expansion and size rules

/// Extra margin, per edge, added around a button's visible rectangle when
/// testing whether a touch hits it.
///
/// Fingers are fat; a small arrow is much easier to hit with a few pixels of
/// slack around it. Margins are unsigned, so the hit box always contains the
/// visible box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Expansion {
    pub up: u8,
    pub down: u8,
    pub left: u8,
    pub right: u8,
}

impl Expansion {
    pub const NONE: Expansion = Expansion::all(0);

    /// Same margin on every edge
    pub const fn all(margin: u8) -> Self {
        Self {
            up: margin,
            down: margin,
            left: margin,
            right: margin,
        }
    }

    pub const fn new(up: u8, down: u8, left: u8, right: u8) -> Self {
        Self {
            up,
            down,
            left,
            right,
        }
    }
}

/// Width or height rule for a labeled button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dimension {
    /// Exactly this many pixels.
    Fixed(u16),
    /// Label extent plus this much padding, plus room for both rounded
    /// corners so they never clip the label.
    FitLabel(u16),
}

impl Default for Dimension {
    fn default() -> Self {
        Dimension::FitLabel(0)
    }
}

impl Dimension {
    /// Resolve to pixels given the measured label extent and corner radius.
    pub fn resolve(&self, label_extent: u16, corner_radius: u16) -> u16 {
        match *self {
            Dimension::Fixed(px) => px,
            Dimension::FitLabel(pad) => label_extent
                .saturating_add(pad)
                .saturating_add(corner_radius.saturating_mul(2)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_ignores_label() {
        assert_eq!(Dimension::Fixed(40).resolve(100, 8), 40);
    }

    #[test]
    fn test_fit_label_adds_padding_and_corners() {
        assert_eq!(Dimension::FitLabel(6).resolve(30, 4), 44);
        assert_eq!(Dimension::default().resolve(30, 0), 30);
    }
}
