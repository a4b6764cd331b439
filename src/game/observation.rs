//! Observations handed to the host after every `reset` and `step`.
//!
//! ## Encoding
//!
//! - A bubble is its palette index.
//! - An empty cell is `palette.len()` (the empty sentinel).
//! - `board` is flattened row-major: index = `row * width + column`.
//!
//! Observations are rebuilt from the grid each time and never mutated.

use serde::{Deserialize, Serialize};

use crate::board::Grid;
use crate::core::{ColorId, Palette};

/// Snapshot of what an agent sees.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Observation {
    /// Color of the next projectile, or the empty sentinel if none is loaded.
    pub next_bubble: u8,
    /// Row-major cell values.
    pub board: Vec<u8>,
}

impl Observation {
    /// Encode a grid and the next projectile color.
    #[must_use]
    pub fn encode(grid: &Grid, next: Option<ColorId>, palette: &Palette) -> Self {
        let sentinel = palette.empty_sentinel();
        Self {
            next_bubble: next.map_or(sentinel, |c| c.0),
            board: grid.cells().map(|cell| cell.map_or(sentinel, |c| c.0)).collect(),
        }
    }
}

/// Shape and value range of observations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationSpec {
    /// Length of `Observation::board` (`height × width`).
    pub board_len: usize,
    /// Number of distinct values per cell (palette size + 1 for empty).
    pub value_count: usize,
    /// Value used for empty cells.
    pub empty_sentinel: u8,
}

impl ObservationSpec {
    /// Describe observations of a `height × width` board over `palette`.
    #[must_use]
    pub fn new(height: usize, width: usize, palette: &Palette) -> Self {
        Self {
            board_len: height * width,
            value_count: palette.len() + 1,
            empty_sentinel: palette.empty_sentinel(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::CellCoord;

    #[test]
    fn test_encode_row_major_with_sentinel() {
        let palette = Palette::default();
        let mut grid = Grid::create(2, 3, 5.0, 20.0);
        grid.set(CellCoord::new(0, 1), Some(ColorId(4)));
        grid.set(CellCoord::new(1, 2), Some(ColorId(0)));

        let obs = Observation::encode(&grid, Some(ColorId(6)), &palette);

        assert_eq!(obs.next_bubble, 6);
        assert_eq!(obs.board, vec![7, 4, 7, 7, 7, 0]);
    }

    #[test]
    fn test_missing_next_uses_sentinel() {
        let palette = Palette::default();
        let grid = Grid::create(1, 1, 5.0, 20.0);
        let obs = Observation::encode(&grid, None, &palette);
        assert_eq!(obs.next_bubble, 7);
    }

    #[test]
    fn test_spec() {
        let spec = ObservationSpec::new(14, 16, &Palette::default());
        assert_eq!(spec.board_len, 224);
        assert_eq!(spec.value_count, 8);
        assert_eq!(spec.empty_sentinel, 7);
    }

    #[test]
    fn test_json_shape() {
        let obs = Observation {
            next_bubble: 2,
            board: vec![0, 7],
        };
        let json = serde_json::to_string(&obs).unwrap();
        assert_eq!(json, r#"{"next_bubble":2,"board":[0,7]}"#);
    }
}
