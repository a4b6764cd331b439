//! Game rules layered on top of the board:
//! - Which color the next projectile gets
//! - When the episode is won or lost
//! - What each step is worth
//!
//! None of these touch projectile physics; they only read the `Grid`.

pub mod color_pool;
pub mod scoring;
pub mod termination;

pub use color_pool::{colors_on_board, ColorDrawPolicy, ColorPool};
pub use scoring::Rewards;
pub use termination::{evaluate, Outcome};
