//! Bubble colors and the ordered palette they are drawn from.
//!
//! ## ColorId
//!
//! A color is identified by its index into the game's `Palette`. The engine
//! never looks at the RGB values; they exist for the rendering collaborator.
//!
//! ## Palette
//!
//! An immutable, ordered list of colors passed in through `GameConfig`.
//! Observations encode a bubble as its palette index and an empty cell as
//! `palette.len()` (the "empty sentinel").

use serde::{Deserialize, Serialize};

/// Index of a color within the game's `Palette`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ColorId(pub u8);

impl ColorId {
    /// Create a new color ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the palette index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for ColorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Color({})", self.0)
    }
}

/// An RGB triple, as handed to a renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Ordered, immutable set of playable colors.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Largest palette whose empty sentinel still fits in a `u8`.
    pub const MAX_COLORS: usize = u8::MAX as usize;

    /// Create a palette from an ordered list of colors.
    #[must_use]
    pub fn new(colors: Vec<Rgb>) -> Self {
        Self { colors }
    }

    /// Number of colors in the palette.
    #[must_use]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the palette has no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Look up the RGB value of a color.
    #[must_use]
    pub fn rgb(&self, color: ColorId) -> Option<Rgb> {
        self.colors.get(color.index()).copied()
    }

    /// Check if a color ID belongs to this palette.
    #[must_use]
    pub fn contains(&self, color: ColorId) -> bool {
        color.index() < self.colors.len()
    }

    /// Iterate over every color ID in palette order.
    pub fn ids(&self) -> impl Iterator<Item = ColorId> {
        // Palette length is capped at MAX_COLORS by config validation.
        (0..self.colors.len().min(Self::MAX_COLORS)).map(|i| ColorId(i as u8))
    }

    /// Observation value used for an empty cell.
    #[must_use]
    pub fn empty_sentinel(&self) -> u8 {
        self.colors.len().min(Self::MAX_COLORS) as u8
    }
}

impl Default for Palette {
    /// Red, green, blue, yellow, orange, purple, cyan.
    fn default() -> Self {
        Self::new(vec![
            Rgb(255, 0, 0),
            Rgb(0, 255, 0),
            Rgb(0, 0, 255),
            Rgb(255, 255, 0),
            Rgb(255, 128, 0),
            Rgb(255, 0, 255),
            Rgb(0, 255, 255),
        ])
    }
}
