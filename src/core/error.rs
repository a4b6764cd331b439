//! Engine error type.

use thiserror::Error;

/// Errors raised by the simulation engine.
///
/// `InvalidAction` and `BoardFull` are the two gameplay errors; the rest
/// guard configuration and checkpoint handling.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EngineError {
    /// Launch angle outside the open interval (0, 180) degrees.
    #[error("invalid action: angle {angle} is outside (0, 180)")]
    InvalidAction { angle: f64 },

    /// A projectile collided but the board has no empty cell left.
    #[error("no empty cell available to place the projectile")]
    BoardFull,

    /// The projectile never collided within its step bound.
    #[error("projectile did not collide after {steps} steps")]
    FlightDidNotTerminate { steps: usize },

    /// `step` was called on a finished episode.
    #[error("episode is over; call reset first")]
    EpisodeOver,

    /// Rejected game configuration.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A checkpoint could not be encoded, decoded or applied.
    #[error("checkpoint error: {0}")]
    Checkpoint(String),
}

/// Result alias used throughout the engine.
pub type EngineResult<T> = Result<T, EngineError>;
