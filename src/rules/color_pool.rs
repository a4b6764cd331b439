//! Next-projectile color selection.
//!
//! By default every draw is uniform over the full palette, even when some
//! colors no longer appear on the board. `ColorDrawPolicy::RemainingOnBoard`
//! opts into drawing only colors that are still present.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::board::Grid;
use crate::core::{ColorId, EngineError, EngineResult, GameRng, Palette};

/// Which colors the next projectile may take.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColorDrawPolicy {
    /// Uniform over the whole palette.
    #[default]
    FullPalette,
    /// Uniform over colors still on the board; full palette once it is empty.
    RemainingOnBoard,
}

/// The palette plus the color loaded for the next shot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorPool {
    palette: Vec<ColorId>,
    policy: ColorDrawPolicy,
    next: ColorId,
}

impl ColorPool {
    /// Build the pool and draw the first projectile color.
    pub fn initial(palette: &Palette, policy: ColorDrawPolicy, rng: &mut GameRng) -> EngineResult<Self> {
        let palette: Vec<ColorId> = palette.ids().collect();
        let next = *rng
            .choose(&palette)
            .ok_or_else(|| EngineError::InvalidConfig("palette must contain at least one color".to_string()))?;
        Ok(Self { palette, policy, next })
    }

    /// Rebuild a pool around a known next color (checkpoint restore).
    #[must_use]
    pub fn with_next(palette: &Palette, policy: ColorDrawPolicy, next: ColorId) -> Self {
        Self {
            palette: palette.ids().collect(),
            policy,
            next,
        }
    }

    /// Color of the next projectile.
    #[must_use]
    pub fn next(&self) -> ColorId {
        self.next
    }

    /// The active draw policy.
    #[must_use]
    pub fn policy(&self) -> ColorDrawPolicy {
        self.policy
    }

    /// Load an episode's first color: uniform over the full palette.
    pub fn draw_initial(&mut self, rng: &mut GameRng) -> ColorId {
        if let Some(&color) = rng.choose(&self.palette) {
            self.next = color;
        }
        self.next
    }

    /// Draw and load the next projectile color.
    pub fn draw_next(&mut self, grid: &Grid, rng: &mut GameRng) -> ColorId {
        let remaining: Vec<ColorId>;
        let candidates = match self.policy {
            ColorDrawPolicy::FullPalette => &self.palette,
            ColorDrawPolicy::RemainingOnBoard => {
                remaining = colors_on_board(grid).into_iter().collect();
                if remaining.is_empty() {
                    &self.palette
                } else {
                    &remaining
                }
            }
        };

        if let Some(&color) = rng.choose(candidates) {
            self.next = color;
        }
        self.next
    }
}

/// Distinct colors currently on the board.
#[must_use]
pub fn colors_on_board(grid: &Grid) -> BTreeSet<ColorId> {
    grid.occupied().map(|(_, color)| color).collect()
}
