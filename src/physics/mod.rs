//! Continuous-space projectile simulation and its discretisation onto the grid.

pub mod placement;
pub mod projectile;

pub use placement::{nearest_empty, place};
pub use projectile::{simulate, validate_angle, Contact, Flight};
