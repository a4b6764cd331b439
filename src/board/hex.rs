//! Hex adjacency on an offset grid.
//!
//! Odd rows are shifted half a cell to the right, so which diagonal cells
//! touch depends on row parity:
//!
//! ```text
//! even row (r, c):             odd row (r, c):
//!   (r-1, c-1) (r-1, c)          (r-1, c) (r-1, c+1)
//! (r, c-1)   *    (r, c+1)     (r, c-1)   *    (r, c+1)
//!   (r+1, c-1) (r+1, c)          (r+1, c) (r+1, c+1)
//! ```
//!
//! This is the only definition of adjacency; both flood fills go through it.

use smallvec::SmallVec;

use super::coord::CellCoord;

/// In-bounds hex neighbors of `coord` on a `height × width` grid (at most 6).
#[must_use]
pub fn neighbors(coord: CellCoord, height: usize, width: usize) -> SmallVec<[CellCoord; 6]> {
    let CellCoord { row, column } = coord;
    let mut out = SmallVec::new();
    if row >= height || column >= width {
        return out;
    }

    // Column of the diagonal neighbors in the rows above and below
    let diagonal = if coord.is_odd_row() {
        column.checked_add(1).filter(|&c| c < width)
    } else {
        column.checked_sub(1)
    };

    if column + 1 < width {
        out.push(CellCoord::new(row, column + 1));
    }
    if let Some(left) = column.checked_sub(1) {
        out.push(CellCoord::new(row, left));
    }
    if let Some(up) = row.checked_sub(1) {
        out.push(CellCoord::new(up, column));
        if let Some(diag) = diagonal {
            out.push(CellCoord::new(up, diag));
        }
    }
    if row + 1 < height {
        out.push(CellCoord::new(row + 1, column));
        if let Some(diag) = diagonal {
            out.push(CellCoord::new(row + 1, diag));
        }
    }

    out
}
