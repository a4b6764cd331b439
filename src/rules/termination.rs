//! Win/loss detection.
//!
//! Checked once per step, after pruning. Loss takes precedence: a board
//! with a bubble past the death line is lost even if that was its last bubble.

use serde::{Deserialize, Serialize};

use crate::board::Grid;

/// Status of an episode after a step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Play continues.
    #[default]
    Continue,
    /// Board cleared.
    Win,
    /// A bubble reached the death line.
    Lost,
}

impl Outcome {
    /// Check if the episode is over.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Continue)
    }
}

/// Evaluate the board against a death line row index.
#[must_use]
pub fn evaluate(grid: &Grid, death_line: usize) -> Outcome {
    if grid.occupied().any(|(coord, _)| coord.row >= death_line) {
        return Outcome::Lost;
    }
    if grid.is_clear() {
        return Outcome::Win;
    }
    Outcome::Continue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CellCoord;
    use crate::core::ColorId;

    #[test]
    fn test_empty_board_wins() {
        let grid = Grid::create(14, 16, 5.0, 20.0);
        assert_eq!(evaluate(&grid, 12), Outcome::Win);
        assert!(Outcome::Win.is_terminal());
    }

    #[test]
    fn test_bubble_above_line_continues() {
        let mut grid = Grid::create(14, 16, 5.0, 20.0);
        grid.set(CellCoord::new(11, 3), Some(ColorId(0)));
        assert_eq!(evaluate(&grid, 12), Outcome::Continue);
        assert!(!Outcome::Continue.is_terminal());
    }

    #[test]
    fn test_bubble_on_death_line_loses() {
        for row in [12, 13] {
            let mut grid = Grid::create(14, 16, 5.0, 20.0);
            grid.set(CellCoord::new(row, 0), Some(ColorId(0)));
            assert_eq!(evaluate(&grid, 12), Outcome::Lost);
        }
    }
}
