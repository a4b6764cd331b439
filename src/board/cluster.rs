//! Same-color cluster matching.
//!
//! Flood fill from a seed over hex-adjacent cells of the seed's color. The
//! result is a set; visiting order is irrelevant.

use rustc_hash::FxHashSet;

use super::coord::CellCoord;
use super::grid::Grid;

/// Minimum cluster size that pops.
pub const POP_THRESHOLD: usize = 3;

/// Connected same-color group containing `seed`.
///
/// Includes the seed itself when it is occupied; an empty or off-board seed
/// yields an empty set.
#[must_use]
pub fn match_group(grid: &Grid, seed: CellCoord) -> FxHashSet<CellCoord> {
    let mut group = FxHashSet::default();
    let Some(color) = grid.color(seed) else {
        return group;
    };

    let mut pending = vec![seed];
    group.insert(seed);

    while let Some(current) = pending.pop() {
        for neighbor in grid.neighbors(current) {
            if grid.color(neighbor) == Some(color) && group.insert(neighbor) {
                pending.push(neighbor);
            }
        }
    }

    group
}

/// Check if a matched group is large enough to pop.
#[must_use]
pub fn pops(group_size: usize) -> bool {
    group_size >= POP_THRESHOLD
}
