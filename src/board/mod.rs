//! The hex-packed board and the graph traversals over it.
//!
//! - `geometry`: pixel centers and window bounds, fixed at construction
//! - `grid`: cell occupancy (`Grid`, `Bubble`)
//! - `hex`: parity-dependent neighbor sets
//! - `cluster`: same-color flood fill from a seed
//! - `floating`: ceiling-connectivity flood fill and pruning

pub mod cluster;
pub mod coord;
pub mod floating;
pub mod geometry;
pub mod grid;
pub mod hex;

pub use cluster::{match_group, pops, POP_THRESHOLD};
pub use coord::CellCoord;
pub use floating::{anchored, prune};
pub use geometry::BoardGeometry;
pub use grid::{Bubble, Grid};
