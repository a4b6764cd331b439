//! Engine checkpoints.
//!
//! A checkpoint is enough to resume a simulation exactly: occupancy, the
//! loaded color, the RNG position and the episode counters. Geometry is
//! not stored; it is rebuilt from the engine's `GameConfig`.

use serde::{Deserialize, Serialize};

use crate::core::{ColorId, EngineError, EngineResult, GameRngState};

/// Serializable engine state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Board rows.
    pub height: usize,
    /// Board columns.
    pub width: usize,
    /// Row-major cell contents.
    pub cells: Vec<Option<ColorId>>,
    /// Color of the next projectile.
    pub next: ColorId,
    /// RNG position.
    pub rng: GameRngState,
    /// Steps taken this episode.
    pub steps: u64,
    /// Whether the episode has ended.
    pub done: bool,
}

impl Checkpoint {
    /// Encode with bincode.
    pub fn to_bytes(&self) -> EngineResult<Vec<u8>> {
        bincode::serialize(self).map_err(|e| EngineError::Checkpoint(e.to_string()))
    }

    /// Decode from bincode.
    pub fn from_bytes(bytes: &[u8]) -> EngineResult<Self> {
        bincode::deserialize(bytes).map_err(|e| EngineError::Checkpoint(e.to_string()))
    }
}
