//! Grid cell coordinates.

use serde::{Deserialize, Serialize};

/// A (row, column) position on the grid. Row 0 is the ceiling row.
///
/// Ordering is row-major, which is also the board's flattening order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CellCoord {
    pub row: usize,
    pub column: usize,
}

impl CellCoord {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// Odd rows are shifted half a bubble to the right.
    #[must_use]
    pub const fn is_odd_row(self) -> bool {
        self.row % 2 == 1
    }

    /// Row-major index for a grid `width` columns wide.
    #[must_use]
    pub const fn flat_index(self, width: usize) -> usize {
        self.row * width + self.column
    }

    /// Inverse of `flat_index`.
    #[must_use]
    pub const fn from_flat_index(index: usize, width: usize) -> Self {
        Self {
            row: index / width,
            column: index % width,
        }
    }
}

impl std::fmt::Display for CellCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_index() {
        let c = CellCoord::new(2, 3);
        assert_eq!(c.flat_index(16), 35);
        assert_eq!(CellCoord::from_flat_index(35, 16), c);
    }

    #[test]
    fn test_row_major_ordering() {
        let mut cells = vec![CellCoord::new(1, 0), CellCoord::new(0, 5), CellCoord::new(0, 1)];
        cells.sort();
        assert_eq!(
            cells,
            vec![CellCoord::new(0, 1), CellCoord::new(0, 5), CellCoord::new(1, 0)]
        );
    }

    #[test]
    fn test_parity() {
        assert!(!CellCoord::new(0, 0).is_odd_row());
        assert!(CellCoord::new(3, 0).is_odd_row());
    }
}
