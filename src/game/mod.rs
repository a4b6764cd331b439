//! The playable game: the `BubbleShooter` engine and what it hands out.
//!
//! - `engine`: `reset`/`step` and the per-step pipeline
//! - `observation`: fixed-schema agent observations
//! - `frame`: before/after snapshots for renderers
//! - `checkpoint`: save and resume

pub mod checkpoint;
pub mod engine;
pub mod frame;
pub mod observation;

pub use checkpoint::Checkpoint;
pub use engine::{BubbleShooter, StepInfo, StepResult, ACTION_COUNT};
pub use frame::{BoardDiff, StepFrame};
pub use observation::{Observation, ObservationSpec};
