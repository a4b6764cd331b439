//! Shared helpers for integration tests.

#![allow(dead_code)]

use bubble_shooter::{BubbleShooter, CellCoord, ColorId, GameConfig, Grid};

/// Install `env_logger` once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A default 14×16 grid with the listed cells filled.
pub fn grid_with(cells: &[((usize, usize), u8)]) -> Grid {
    let mut grid = Grid::create(14, 16, 5.0, 20.0);
    for &((row, column), color) in cells {
        grid.set(CellCoord::new(row, column), Some(ColorId(color)));
    }
    grid
}

/// A default engine whose board is replaced by `cells` and whose next
/// projectile is `next`.
pub fn engine_with_board(cells: &[((usize, usize), u8)], next: u8) -> BubbleShooter {
    let mut game = BubbleShooter::new(GameConfig::default()).unwrap();
    let grid = grid_with(cells);

    let mut checkpoint = game.checkpoint();
    checkpoint.cells = grid.cells().collect();
    checkpoint.next = ColorId(next);
    game.restore(&checkpoint).unwrap();
    game
}
