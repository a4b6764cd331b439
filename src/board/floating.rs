//! Removal of bubbles no longer attached to the ceiling.
//!
//! A bubble is anchored if a chain of occupied, hex-adjacent cells links it
//! to row 0. Color plays no part. Everything not anchored falls.

use rustc_hash::FxHashSet;

use super::coord::CellCoord;
use super::grid::Grid;

/// Occupied cells connected to row 0 through occupied cells.
#[must_use]
pub fn anchored(grid: &Grid) -> FxHashSet<CellCoord> {
    let mut anchored = FxHashSet::default();
    let mut pending: Vec<CellCoord> = (0..grid.width())
        .map(|column| CellCoord::new(0, column))
        .filter(|&coord| grid.is_occupied(coord))
        .collect();
    anchored.extend(pending.iter().copied());

    while let Some(current) = pending.pop() {
        for neighbor in grid.neighbors(current) {
            if grid.is_occupied(neighbor) && anchored.insert(neighbor) {
                pending.push(neighbor);
            }
        }
    }

    anchored
}

/// Clear every occupied cell that is not anchored. Returns the cleared cells.
pub fn prune(grid: &mut Grid) -> FxHashSet<CellCoord> {
    let anchored = anchored(grid);
    let floating: FxHashSet<CellCoord> = grid
        .occupied()
        .map(|(coord, _)| coord)
        .filter(|coord| !anchored.contains(coord))
        .collect();

    grid.clear_all(&floating);
    floating
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ColorId;

    fn grid_with(cells: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::create(6, 6, 5.0, 20.0);
        for (i, &(row, column)) in cells.iter().enumerate() {
            grid.set(CellCoord::new(row, column), Some(ColorId((i % 3) as u8)));
        }
        grid
    }

    #[test]
    fn test_attached_chain_survives() {
        let mut grid = grid_with(&[(0, 0), (1, 0), (2, 0), (3, 0)]);
        let removed = prune(&mut grid);
        assert!(removed.is_empty());
        assert_eq!(grid.occupied_count(), 4);
    }

    #[test]
    fn test_detached_island_falls() {
        let mut grid = grid_with(&[(0, 0), (1, 0), (3, 3), (4, 3), (4, 4)]);
        let removed = prune(&mut grid);

        assert_eq!(removed.len(), 3);
        assert!(removed.contains(&CellCoord::new(3, 3)));
        assert!(grid.is_occupied(CellCoord::new(1, 0)));
        assert!(!grid.is_occupied(CellCoord::new(4, 4)));
    }

    #[test]
    fn test_empty_top_row_drops_everything() {
        let mut grid = grid_with(&[(1, 0), (1, 1), (2, 2)]);
        let removed = prune(&mut grid);
        assert_eq!(removed.len(), 3);
        assert!(grid.is_clear());
    }

    #[test]
    fn test_prune_is_idempotent() {
        let mut grid = grid_with(&[(0, 2), (1, 2), (3, 0), (5, 5)]);
        let first = prune(&mut grid);
        let second = prune(&mut grid);
        assert_eq!(first.len(), 2);
        assert!(second.is_empty());
    }
}
