//! Title bar buttons.

use bitflags::bitflags;

bitflags! {
    /// Buttons shown at the right of the title bar.
    ///
    /// Each enabled button occupies four glyphs: a divider, a space, its
    /// label and a space.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct WindowButtons: u8 {
        const MINIMISE = 0b001;
        const MAXIMISE = 0b010;
        const CLOSE    = 0b100;
        const ALL = Self::MINIMISE.bits() | Self::MAXIMISE.bits() | Self::CLOSE.bits();
    }
}

/// Glyphs reserved per enabled button.
pub const BUTTON_WIDTH: usize = 4;

impl WindowButtons {
    /// No buttons.
    pub const NONE: Self = Self::empty();

    /// Enabled buttons with their labels, left to right.
    pub fn labels(self) -> impl Iterator<Item = &'static str> {
        [
            (Self::MINIMISE, "-"),
            (Self::MAXIMISE, "□"),
            (Self::CLOSE, "X"),
        ]
        .into_iter()
        .filter(move |(button, _)| self.contains(*button))
        .map(|(_, label)| label)
    }

    /// Number of enabled buttons.
    #[inline]
    pub fn count(self) -> usize {
        self.bits().count_ones() as usize
    }

    /// Total width reserved for the enabled buttons.
    #[inline]
    pub fn reserved_width(self) -> usize {
        self.count() * BUTTON_WIDTH
    }
}
