//! Board storage: cell occupancy over a fixed geometry.
//!
//! ## Grid
//!
//! Occupancy lives in an `im::Vector`, so cloning a `Grid` is O(1) and a
//! clone shares structure with the original until either side changes.
//! The engine relies on this to hand out before/after snapshots every step
//! without deep copies.
//!
//! Geometry sits behind an `Arc` and is shared by every clone.

use std::sync::Arc;

use glam::DVec2;
use im::Vector;
use smallvec::SmallVec;

use super::coord::CellCoord;
use super::geometry::BoardGeometry;
use super::hex;
use crate::core::{ColorId, GameRng, Palette};

/// A placed bubble: its color and its fixed, grid-derived center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bubble {
    pub color: ColorId,
    pub center: DVec2,
}

/// Hex-packed board of optional colored bubbles.
#[derive(Clone, Debug)]
pub struct Grid {
    geometry: Arc<BoardGeometry>,
    cells: Vector<Option<ColorId>>,
}

impl Grid {
    /// Allocate an all-empty `height × width` grid and compute its geometry.
    #[must_use]
    pub fn create(height: usize, width: usize, spacing: f64, radius: f64) -> Self {
        Self::with_geometry(Arc::new(BoardGeometry::new(height, width, spacing, radius)))
    }

    /// Allocate an all-empty grid over an existing geometry.
    #[must_use]
    pub fn with_geometry(geometry: Arc<BoardGeometry>) -> Self {
        let cells = Vector::from(vec![None; geometry.height() * geometry.width()]);
        Self { geometry, cells }
    }

    /// Fill every cell of the first `rows` rows with a random palette color.
    ///
    /// Each cell takes the first entry of a freshly shuffled palette copy,
    /// i.e. a uniform draw. Rows past the board height are ignored.
    pub fn fill_initial_rows(&mut self, rows: usize, palette: &Palette, rng: &mut GameRng) {
        let mut shuffled: Vec<ColorId> = palette.ids().collect();
        for row in 0..rows.min(self.height()) {
            for column in 0..self.width() {
                rng.shuffle(&mut shuffled);
                if let Some(&color) = shuffled.first() {
                    self.set(CellCoord::new(row, column), Some(color));
                }
            }
        }
    }

    /// The board's fixed geometry.
    #[must_use]
    pub fn geometry(&self) -> &BoardGeometry {
        &self.geometry
    }

    /// Shared handle to the geometry.
    #[must_use]
    pub fn geometry_handle(&self) -> Arc<BoardGeometry> {
        Arc::clone(&self.geometry)
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.geometry.height()
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.geometry.width()
    }

    /// Check if a coordinate lies on the board.
    #[must_use]
    pub fn contains(&self, coord: CellCoord) -> bool {
        self.geometry.contains(coord)
    }

    /// Color at a cell. `None` for empty or off-board cells.
    #[must_use]
    pub fn color(&self, coord: CellCoord) -> Option<ColorId> {
        if !self.contains(coord) {
            return None;
        }
        self.cells.get(coord.flat_index(self.width())).copied().flatten()
    }

    /// Check if a cell holds a bubble.
    #[must_use]
    pub fn is_occupied(&self, coord: CellCoord) -> bool {
        self.color(coord).is_some()
    }

    /// The bubble at a cell, with its precomputed center.
    #[must_use]
    pub fn bubble(&self, coord: CellCoord) -> Option<Bubble> {
        let color = self.color(coord)?;
        let center = self.geometry.center(coord)?;
        Some(Bubble { color, center })
    }

    /// Pixel center of a cell.
    #[must_use]
    pub fn center(&self, coord: CellCoord) -> Option<DVec2> {
        self.geometry.center(coord)
    }

    /// Set or clear a cell. Returns the previous content.
    ///
    /// Off-board coordinates are ignored.
    pub fn set(&mut self, coord: CellCoord, color: Option<ColorId>) -> Option<ColorId> {
        if !self.contains(coord) {
            return None;
        }
        let index = coord.flat_index(self.width());
        self.cells.set(index, color)
    }

    /// Empty a cell. Returns the removed color.
    pub fn clear(&mut self, coord: CellCoord) -> Option<ColorId> {
        self.set(coord, None)
    }

    /// Empty every listed cell.
    pub fn clear_all<'a>(&mut self, coords: impl IntoIterator<Item = &'a CellCoord>) {
        for &coord in coords {
            self.clear(coord);
        }
    }

    /// Hex neighbors of a cell, regardless of occupancy.
    #[must_use]
    pub fn neighbors(&self, coord: CellCoord) -> SmallVec<[CellCoord; 6]> {
        hex::neighbors(coord, self.height(), self.width())
    }

    /// Every cell coordinate in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = CellCoord> + '_ {
        let width = self.width();
        (0..self.cells.len()).map(move |i| CellCoord::from_flat_index(i, width))
    }

    /// Occupied cells with their colors, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (CellCoord, ColorId)> + '_ {
        let width = self.width();
        self.cells
            .iter()
            .enumerate()
            .filter_map(move |(i, &cell)| cell.map(|color| (CellCoord::from_flat_index(i, width), color)))
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = CellCoord> + '_ {
        let width = self.width();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(move |(i, _)| CellCoord::from_flat_index(i, width))
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Check if the board has no bubbles at all.
    #[must_use]
    pub fn is_clear(&self) -> bool {
        self.cells.iter().all(Option::is_none)
    }

    /// Raw cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Option<ColorId>> + '_ {
        self.cells.iter().copied()
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.geometry == other.geometry && self.cells == other.cells
    }
}
