//! Snapping a collided projectile onto the grid.
//!
//! The projectile lands in the empty cell whose center is nearest to where
//! it stopped. Cells are scanned in row-major order and only a strictly
//! smaller distance replaces the current best, so ties go to the lowest
//! row-major index.

use glam::DVec2;

use crate::board::{CellCoord, Grid};
use crate::core::{ColorId, EngineError, EngineResult};

/// Nearest empty cell to `position`.
///
/// Fails with `BoardFull` when every cell is occupied.
pub fn nearest_empty(grid: &Grid, position: DVec2) -> EngineResult<CellCoord> {
    let mut best: Option<(CellCoord, f64)> = None;

    for coord in grid.empty_cells() {
        let Some(center) = grid.center(coord) else {
            continue;
        };
        let distance = center.distance(position);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((coord, distance)),
        }
    }

    best.map(|(coord, _)| coord).ok_or(EngineError::BoardFull)
}

/// Commit a projectile of `color` that stopped at `position`.
///
/// The bubble takes the cell's precomputed center, not `position`.
pub fn place(grid: &mut Grid, position: DVec2, color: ColorId) -> EngineResult<CellCoord> {
    let coord = nearest_empty(grid, position)?;
    grid.set(coord, Some(color));
    Ok(coord)
}
