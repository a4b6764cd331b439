//! Property tests for adjacency, flood fills and placement.

use bubble_shooter::board::{anchored, hex, match_group, prune};
use bubble_shooter::physics::nearest_empty;
use bubble_shooter::{CellCoord, ColorId, Grid};
use glam::DVec2;
use proptest::prelude::*;
use rustc_hash::FxHashSet;

/// Random boards up to 10×10 with a small palette so clusters form.
fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..=10, 1usize..=10).prop_flat_map(|(height, width)| {
        prop::collection::vec(prop::option::weighted(0.6, 0u8..3), height * width).prop_map(
            move |cells| {
                let mut grid = Grid::create(height, width, 5.0, 20.0);
                for (i, cell) in cells.into_iter().enumerate() {
                    grid.set(CellCoord::from_flat_index(i, width), cell.map(ColorId));
                }
                grid
            },
        )
    })
}

fn arb_grid_and_cell() -> impl Strategy<Value = (Grid, CellCoord)> {
    arb_grid().prop_flat_map(|grid| {
        let (h, w) = (grid.height(), grid.width());
        (Just(grid), 0..h, 0..w).prop_map(|(g, r, c)| (g, CellCoord::new(r, c)))
    })
}

fn arb_dims_and_cell() -> impl Strategy<Value = (usize, usize, usize, usize)> {
    (1usize..20, 1usize..20).prop_flat_map(|(h, w)| (Just(h), Just(w), 0..h, 0..w))
}

proptest! {
    /// Test that neighbors stay on the board and adjacency is symmetric.
    #[test]
    fn neighbors_are_in_bounds_and_symmetric((h, w, r, c) in arb_dims_and_cell()) {
        let a = CellCoord::new(r, c);
        let ns = hex::neighbors(a, h, w);

        prop_assert!(ns.len() <= 6);
        for b in ns {
            prop_assert!(b.row < h && b.column < w);
            prop_assert_ne!(b, a);
            prop_assert!(hex::neighbors(b, h, w).contains(&a));
        }
    }

    /// Test that a matched group is single-color, connected and maximal.
    #[test]
    fn match_group_is_single_color_and_connected((grid, seed) in arb_grid_and_cell()) {
        let group = match_group(&grid, seed);

        let Some(color) = grid.color(seed) else {
            prop_assert!(group.is_empty());
            return Ok(());
        };
        prop_assert!(group.contains(&seed));
        for cell in &group {
            prop_assert_eq!(grid.color(*cell), Some(color));
        }

        // Every member is reachable from the seed inside the group
        let mut reached = FxHashSet::default();
        let mut pending = vec![seed];
        reached.insert(seed);
        while let Some(current) = pending.pop() {
            for n in grid.neighbors(current) {
                if group.contains(&n) && reached.insert(n) {
                    pending.push(n);
                }
            }
        }
        prop_assert_eq!(reached.len(), group.len());

        // Maximal: no same-color neighbor left outside
        for cell in &group {
            for n in grid.neighbors(*cell) {
                if grid.color(n) == Some(color) {
                    prop_assert!(group.contains(&n));
                }
            }
        }
    }

    /// Test that pruning keeps exactly the ceiling-anchored bubbles.
    #[test]
    fn prune_keeps_exactly_the_anchored_cells(grid in arb_grid()) {
        let mut grid = grid;
        let anchored_before = anchored(&grid);

        let removed = prune(&mut grid);

        let remaining: FxHashSet<CellCoord> = grid.occupied().map(|(c, _)| c).collect();
        prop_assert_eq!(&remaining, &anchored_before);
        for cell in &removed {
            prop_assert!(!anchored_before.contains(cell));
        }
    }

    /// Test that a second prune removes nothing.
    #[test]
    fn prune_is_idempotent(grid in arb_grid()) {
        let mut grid = grid;
        prune(&mut grid);
        let after_first = grid.clone();

        let second = prune(&mut grid);

        prop_assert!(second.is_empty());
        prop_assert_eq!(grid, after_first);
    }

    /// Test that placement picks the row-major first of the nearest empty cells.
    #[test]
    fn placement_picks_first_nearest_empty(grid in arb_grid(), x in 0.0f64..500.0, y in 0.0f64..500.0) {
        let position = DVec2::new(x, y);
        let result = nearest_empty(&grid, position);

        if grid.empty_cells().next().is_none() {
            prop_assert!(result.is_err());
            return Ok(());
        }
        let chosen = result.unwrap();
        prop_assert!(!grid.is_occupied(chosen));

        let width = grid.width();
        let best = grid.center(chosen).unwrap().distance(position);
        for cell in grid.empty_cells() {
            let d = grid.center(cell).unwrap().distance(position);
            prop_assert!(d >= best);
            if cell.flat_index(width) < chosen.flat_index(width) {
                prop_assert!(d > best);
            }
        }
    }
}
