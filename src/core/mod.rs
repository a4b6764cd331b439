//! Core engine types: configuration, colors, RNG, errors.
//!
//! Everything else in the crate is built from these. A simulation is fully
//! described by its `GameConfig`; nothing here is global or mutable shared state.

pub mod color;
pub mod config;
pub mod error;
pub mod rng;

pub use color::{ColorId, Palette, Rgb};
pub use config::GameConfig;
pub use error::{EngineError, EngineResult};
pub use rng::{GameRng, GameRngState};
