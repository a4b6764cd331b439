//! # bubble-shooter
//!
//! A deterministic bubble-shooter simulation engine for RL training.
//!
//! ## Design Principles
//!
//! 1. **Config-Driven**: Board size, geometry, palette, rewards and seed all
//!    come from `GameConfig`. No global or shared mutable state.
//!
//! 2. **Deterministic**: All randomness flows through one seedable `GameRng`.
//!    Same seed and same actions produce the same episode.
//!
//! 3. **Cheap Snapshots**: Board occupancy uses `im-rs` persistent vectors,
//!    so before/after frames share structure instead of deep-copying.
//!
//! ## Modules
//!
//! - `core`: Configuration, palette, RNG, errors
//! - `board`: Geometry, grid storage, hex adjacency, flood fills
//! - `physics`: Projectile flight and placement
//! - `rules`: Color draws, scoring, win/loss
//! - `game`: The `BubbleShooter` engine, observations, frames, checkpoints
//!
//! ## Example
//!
//! ```
//! use bubble_shooter::{BubbleShooter, GameConfig};
//!
//! let mut game = BubbleShooter::new(GameConfig::default().with_seed(7)).unwrap();
//! let obs = game.reset();
//! assert_eq!(obs.board.len(), 14 * 16);
//!
//! let result = game.step(90).unwrap();
//! assert!(!result.done);
//! ```

pub mod board;
pub mod core;
pub mod game;
pub mod physics;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    ColorId, EngineError, EngineResult, GameConfig, GameRng, GameRngState, Palette, Rgb,
};

pub use crate::board::{BoardGeometry, Bubble, CellCoord, Grid};

pub use crate::physics::{Contact, Flight};

pub use crate::rules::{ColorDrawPolicy, ColorPool, Outcome, Rewards};

pub use crate::game::{
    BoardDiff, BubbleShooter, Checkpoint, Observation, ObservationSpec, StepFrame, StepInfo,
    StepResult, ACTION_COUNT,
};
