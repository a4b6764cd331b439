//! The bubble-shooter simulation engine.
//!
//! One `step` runs a whole turn synchronously:
//!
//! 1. Validate the angle
//! 2. Fly the loaded projectile until it collides
//! 3. Snap it to the nearest empty cell
//! 4. Flood-fill its same-color group; on 3+ pop the group and drop
//!    everything no longer attached to the ceiling
//! 5. Load the next color
//! 6. Check for win/loss and score the step
//!
//! An engine instance owns its grid, color pool and RNG exclusively.

use std::sync::Arc;

use log::{debug, info};
use rustc_hash::FxHashSet;

use super::checkpoint::Checkpoint;
use super::frame::{BoardDiff, StepFrame};
use super::observation::{Observation, ObservationSpec};
use crate::board::{match_group, pops, prune, BoardGeometry, CellCoord, Grid};
use crate::core::{ColorId, EngineError, EngineResult, GameConfig, GameRng};
use crate::physics::{place, simulate, validate_angle, Contact};
use crate::rules::{evaluate, ColorPool, Outcome};

/// Number of discrete actions: angles 1 through 179.
pub const ACTION_COUNT: usize = 179;

/// Details of one step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepInfo {
    /// What stopped the projectile.
    pub contact: Contact,
    /// Cell the projectile landed in.
    pub placed: CellCoord,
    /// Size of the same-color group at the landing cell.
    pub group_size: usize,
    /// Bubbles popped (0 unless the group reached the threshold).
    pub popped: usize,
    /// Bubbles dropped for losing their ceiling connection.
    pub dropped: usize,
    /// Episode status after the step.
    pub outcome: Outcome,
    /// Micro-steps the projectile flew.
    pub flight_steps: usize,
    /// Wall bounces during the flight.
    pub bounces: u32,
}

/// Result of one step.
#[derive(Clone, Debug, PartialEq)]
pub struct StepResult {
    pub observation: Observation,
    pub reward: f64,
    pub done: bool,
    pub info: StepInfo,
}

/// A single bubble-shooter game.
#[derive(Clone, Debug)]
pub struct BubbleShooter {
    config: GameConfig,
    geometry: Arc<BoardGeometry>,
    grid: Grid,
    pool: ColorPool,
    rng: GameRng,
    steps: u64,
    done: bool,
    last_frame: Option<StepFrame>,
}

impl BubbleShooter {
    /// Validate `config` and start the first episode.
    pub fn new(config: GameConfig) -> EngineResult<Self> {
        config.validate()?;

        let geometry = Arc::new(BoardGeometry::new(
            config.height,
            config.width,
            config.spacing,
            config.radius,
        ));
        let mut rng = GameRng::new(config.seed);
        let grid = Grid::with_geometry(Arc::clone(&geometry));
        let pool = ColorPool::initial(&config.palette, config.color_draw, &mut rng)?;

        let mut engine = Self {
            config,
            geometry,
            grid,
            pool,
            rng,
            steps: 0,
            done: false,
            last_frame: None,
        };
        engine.reset();
        Ok(engine)
    }

    /// Start a new episode, continuing the current random stream.
    pub fn reset(&mut self) -> Observation {
        self.grid = Grid::with_geometry(Arc::clone(&self.geometry));
        self.grid
            .fill_initial_rows(self.config.initial_rows, &self.config.palette, &mut self.rng);
        self.pool.draw_initial(&mut self.rng);
        self.steps = 0;
        self.done = false;
        self.last_frame = None;

        info!(
            "reset: {}x{} board, {} bubbles, next {}",
            self.config.height,
            self.config.width,
            self.grid.occupied_count(),
            self.pool.next()
        );
        self.observation()
    }

    /// Reseed the RNG, then start a new episode.
    pub fn reset_with_seed(&mut self, seed: u64) -> Observation {
        self.rng.reseed(seed);
        self.reset()
    }

    /// Shoot at an integer angle in degrees, 1 through 179.
    pub fn step(&mut self, angle: u32) -> EngineResult<StepResult> {
        self.step_degrees(f64::from(angle))
    }

    /// Shoot using a discrete action index in `0..ACTION_COUNT` (angle = index + 1).
    pub fn step_index(&mut self, index: usize) -> EngineResult<StepResult> {
        if index >= ACTION_COUNT {
            return Err(EngineError::InvalidAction {
                angle: index as f64 + 1.0,
            });
        }
        self.step_degrees(index as f64 + 1.0)
    }

    /// Shoot at any angle strictly between 0 and 180 degrees.
    ///
    /// On error the engine state is unchanged.
    pub fn step_degrees(&mut self, angle: f64) -> EngineResult<StepResult> {
        validate_angle(angle)?;
        if self.done {
            return Err(EngineError::EpisodeOver);
        }

        let color = self.pool.next();
        let flight = simulate(&self.grid, color, angle, self.config.speed)?;

        let before = self.grid.clone();
        let mut grid = self.grid.clone();
        let placed = place(&mut grid, flight.position, color)?;

        let group = match_group(&grid, placed);
        let mut diff = BoardDiff {
            placed: Some(placed),
            ..BoardDiff::default()
        };
        if pops(group.len()) {
            grid.clear_all(&group);
            let dropped = prune(&mut grid);
            diff.popped = row_major(&group);
            diff.dropped = row_major(&dropped);
        }
        self.grid = grid;

        self.pool.draw_next(&self.grid, &mut self.rng);
        let outcome = evaluate(&self.grid, self.config.death_line());
        let reward = self.config.rewards.score(group.len(), outcome);

        self.steps += 1;
        self.done = outcome.is_terminal();

        let info = StepInfo {
            contact: flight.contact,
            placed,
            group_size: group.len(),
            popped: diff.popped.len(),
            dropped: diff.dropped.len(),
            outcome,
            flight_steps: flight.steps(),
            bounces: flight.bounces,
        };
        debug!(
            "step {}: angle {} {} -> {}, group {}, popped {}, dropped {}, {:?}, reward {}",
            self.steps,
            angle,
            color,
            placed,
            info.group_size,
            info.popped,
            info.dropped,
            outcome,
            reward
        );

        self.last_frame = Some(StepFrame {
            before,
            after: self.grid.clone(),
            path: flight.path,
            color,
            diff,
        });

        Ok(StepResult {
            observation: self.observation(),
            reward,
            done: self.done,
            info,
        })
    }

    /// Current observation.
    #[must_use]
    pub fn observation(&self) -> Observation {
        Observation::encode(&self.grid, Some(self.pool.next()), &self.config.palette)
    }

    /// Shape and value range of observations.
    #[must_use]
    pub fn observation_spec(&self) -> ObservationSpec {
        ObservationSpec::new(self.config.height, self.config.width, &self.config.palette)
    }

    /// The live board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Color of the next projectile.
    #[must_use]
    pub fn next_color(&self) -> ColorId {
        self.pool.next()
    }

    /// The configuration this engine was built with.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Snapshot of the most recent step, if any since the last reset.
    #[must_use]
    pub fn last_frame(&self) -> Option<&StepFrame> {
        self.last_frame.as_ref()
    }

    /// Steps taken this episode.
    #[must_use]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Whether the episode has ended.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Capture the state needed to resume this episode.
    #[must_use]
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            height: self.config.height,
            width: self.config.width,
            cells: self.grid.cells().collect(),
            next: self.pool.next(),
            rng: self.rng.state(),
            steps: self.steps,
            done: self.done,
        }
    }

    /// Resume from a checkpoint taken on an engine with the same board size and palette.
    ///
    /// On error the engine state is unchanged.
    pub fn restore(&mut self, checkpoint: &Checkpoint) -> EngineResult<()> {
        let palette = &self.config.palette;
        if checkpoint.height != self.config.height || checkpoint.width != self.config.width {
            return Err(EngineError::Checkpoint(format!(
                "board is {}x{}, checkpoint is {}x{}",
                self.config.height, self.config.width, checkpoint.height, checkpoint.width
            )));
        }
        if checkpoint.cells.len() != self.config.height * self.config.width {
            return Err(EngineError::Checkpoint(format!(
                "expected {} cells, got {}",
                self.config.height * self.config.width,
                checkpoint.cells.len()
            )));
        }
        let in_palette = checkpoint.cells.iter().flatten().all(|&c| palette.contains(c));
        if !in_palette || !palette.contains(checkpoint.next) {
            return Err(EngineError::Checkpoint("color outside the palette".to_string()));
        }

        let mut grid = Grid::with_geometry(Arc::clone(&self.geometry));
        for (index, &cell) in checkpoint.cells.iter().enumerate() {
            grid.set(CellCoord::from_flat_index(index, self.config.width), cell);
        }

        self.grid = grid;
        self.pool = ColorPool::with_next(palette, self.config.color_draw, checkpoint.next);
        self.rng = GameRng::from_state(&checkpoint.rng);
        self.steps = checkpoint.steps;
        self.done = checkpoint.done;
        self.last_frame = None;
        Ok(())
    }
}

fn row_major(cells: &FxHashSet<CellCoord>) -> Vec<CellCoord> {
    let mut sorted: Vec<CellCoord> = cells.iter().copied().collect();
    sorted.sort_unstable();
    sorted
}
