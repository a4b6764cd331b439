//! Read-only step snapshots for a renderer.
//!
//! A `StepFrame` holds the board before and after a shot, the projectile's
//! path and a diff of what changed. `Grid` clones share structure, so
//! keeping both boards costs little.

use glam::DVec2;

use crate::board::{CellCoord, Grid};
use crate::core::ColorId;

/// Cells changed by one step, each list in row-major order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardDiff {
    /// Where the projectile landed.
    pub placed: Option<CellCoord>,
    /// Cells of the popped same-color group (empty if nothing popped).
    pub popped: Vec<CellCoord>,
    /// Cells that fell after the pop.
    pub dropped: Vec<CellCoord>,
}

impl BoardDiff {
    /// Total bubbles removed this step.
    #[must_use]
    pub fn removed(&self) -> usize {
        self.popped.len() + self.dropped.len()
    }
}

/// Everything a renderer needs to animate one step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepFrame {
    /// Board before the shot.
    pub before: Grid,
    /// Board after placement, popping and pruning.
    pub after: Grid,
    /// Projectile positions, in flight order.
    pub path: Vec<DVec2>,
    /// Projectile color.
    pub color: ColorId,
    /// What changed.
    pub diff: BoardDiff,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removed_counts_both_lists() {
        let diff = BoardDiff {
            placed: Some(CellCoord::new(1, 1)),
            popped: vec![CellCoord::new(0, 0), CellCoord::new(0, 1), CellCoord::new(1, 1)],
            dropped: vec![CellCoord::new(2, 0)],
        };
        assert_eq!(diff.removed(), 4);
        assert_eq!(BoardDiff::default().removed(), 0);
    }
}
