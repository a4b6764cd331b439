//! Pixel geometry of the hex-packed board.
//!
//! Computed once per board and never mutated. Every cell center is a pure
//! function of (row, column):
//!
//! - columns advance by `2r + s`, starting at `r + s`
//! - odd rows are shifted right by `r + s/2`
//! - rows advance by `sqrt((2r + s)² − (r + s/2)²)`, starting at `r + s`
//!
//! The window is sized so the widest (odd) row fits between the side walls
//! with room below the bottom row for the launcher.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::coord::CellCoord;

/// Fixed geometry of a board: dimensions, pixel constants, cell centers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BoardGeometry {
    height: usize,
    width: usize,
    radius: f64,
    spacing: f64,
    row_step: f64,
    window_width: f64,
    window_height: f64,
    centers: Vec<DVec2>,
}

impl BoardGeometry {
    /// Compute the geometry of a `height × width` board.
    #[must_use]
    pub fn new(height: usize, width: usize, spacing: f64, radius: f64) -> Self {
        let column_step = 2.0 * radius + spacing;
        let odd_offset = radius + 0.5 * spacing;
        let row_step = (column_step * column_step - odd_offset * odd_offset).sqrt();

        let mut centers = Vec::with_capacity(height * width);
        for row in 0..height {
            let shift = if row % 2 == 1 { odd_offset } else { 0.0 };
            let y = spacing + radius + row as f64 * row_step;
            for column in 0..width {
                let x = column_step * column as f64 + radius + spacing + shift;
                centers.push(DVec2::new(x, y));
            }
        }

        let window_width = width as f64 * 2.0 * radius
            + spacing * (width as f64 + 1.0)
            + radius
            + 0.5 * spacing;
        let window_height =
            height as f64 * 2.0 * radius + spacing * (height as f64 + 2.0) + 6.0 * radius;

        Self {
            height,
            width,
            radius,
            spacing,
            row_step,
            window_width,
            window_height,
            centers,
        }
    }

    /// Number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Bubble radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Gap between bubbles, and between bubbles and walls.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.spacing
    }

    /// Vertical distance between row centers.
    #[must_use]
    pub fn row_step(&self) -> f64 {
        self.row_step
    }

    /// Width of the playfield in pixels.
    #[must_use]
    pub fn window_width(&self) -> f64 {
        self.window_width
    }

    /// Height of the playfield in pixels.
    #[must_use]
    pub fn window_height(&self) -> f64 {
        self.window_height
    }

    /// The y coordinate of the ceiling.
    #[must_use]
    pub fn ceiling(&self) -> f64 {
        self.spacing
    }

    /// X coordinates of the left and right walls.
    #[must_use]
    pub fn walls(&self) -> (f64, f64) {
        (self.spacing, self.window_width - self.spacing)
    }

    /// Where every projectile starts: bottom center of the window.
    #[must_use]
    pub fn launch_point(&self) -> DVec2 {
        DVec2::new(
            self.window_width / 2.0,
            self.window_height - self.spacing - self.radius,
        )
    }

    /// Check if a coordinate lies on the board.
    #[must_use]
    pub fn contains(&self, coord: CellCoord) -> bool {
        coord.row < self.height && coord.column < self.width
    }

    /// Pixel center of a cell, or `None` if the coordinate is off the board.
    #[must_use]
    pub fn center(&self, coord: CellCoord) -> Option<DVec2> {
        if !self.contains(coord) {
            return None;
        }
        self.centers.get(coord.flat_index(self.width)).copied()
    }
}
