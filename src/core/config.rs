//! Game configuration.
//!
//! A `GameConfig` fixes everything about a simulation at construction:
//! - Board size and how many rows start filled
//! - Pixel geometry (bubble radius, spacing, projectile speed)
//! - The color `Palette` and how next colors are drawn
//! - Reward values and the RNG seed
//!
//! The defaults reproduce the classic 14×16 board with seven colors.

use serde::{Deserialize, Serialize};

use super::color::Palette;
use super::error::{EngineError, EngineResult};
use crate::rules::{ColorDrawPolicy, Rewards};

/// Complete simulation configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Number of grid rows.
    pub height: usize,

    /// Number of grid columns.
    pub width: usize,

    /// Rows filled with random colors at reset.
    pub initial_rows: usize,

    /// The death line sits this many rows above the bottom of the grid.
    pub death_line_offset: usize,

    /// Gap between neighboring bubbles and between bubbles and walls (pixels).
    pub spacing: f64,

    /// Bubble radius (pixels).
    pub radius: f64,

    /// Distance the projectile travels per micro-step (pixels).
    pub speed: f64,

    /// Playable colors.
    pub palette: Palette,

    /// Reward values handed out by the scoring policy.
    pub rewards: Rewards,

    /// How the next projectile color is chosen.
    pub color_draw: ColorDrawPolicy,

    /// Seed for board fills and color draws.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: 14,
            width: 16,
            initial_rows: 5,
            death_line_offset: 2,
            spacing: 5.0,
            radius: 20.0,
            speed: 1.0,
            palette: Palette::default(),
            rewards: Rewards::default(),
            color_draw: ColorDrawPolicy::default(),
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, height: usize, width: usize) -> Self {
        self.height = height;
        self.width = width;
        self
    }

    /// Set how many rows start filled.
    #[must_use]
    pub fn with_initial_rows(mut self, rows: usize) -> Self {
        self.initial_rows = rows;
        self
    }

    /// Set the death line offset from the bottom row.
    #[must_use]
    pub fn with_death_line_offset(mut self, offset: usize) -> Self {
        self.death_line_offset = offset;
        self
    }

    /// Set bubble radius and spacing.
    #[must_use]
    pub fn with_geometry(mut self, radius: f64, spacing: f64) -> Self {
        self.radius = radius;
        self.spacing = spacing;
        self
    }

    /// Set the projectile step length.
    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    /// Set the palette.
    #[must_use]
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    /// Set the reward values.
    #[must_use]
    pub fn with_rewards(mut self, rewards: Rewards) -> Self {
        self.rewards = rewards;
        self
    }

    /// Set the next-color draw policy.
    #[must_use]
    pub fn with_color_draw(mut self, policy: ColorDrawPolicy) -> Self {
        self.color_draw = policy;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Row index of the death line. Any bubble at or below it loses the game.
    #[must_use]
    pub fn death_line(&self) -> usize {
        self.height.saturating_sub(self.death_line_offset)
    }

    /// Reject configurations the engine cannot simulate.
    pub fn validate(&self) -> EngineResult<()> {
        let invalid = |msg: &str| Err(EngineError::InvalidConfig(msg.to_string()));

        if self.height == 0 || self.width == 0 {
            return invalid("height and width must be positive");
        }
        if self.initial_rows > self.height {
            return invalid("initial_rows exceeds height");
        }
        if self.death_line_offset == 0 || self.death_line_offset > self.height {
            return invalid("death_line_offset must be in 1..=height");
        }
        if self.initial_rows >= self.death_line() {
            return invalid("initial_rows must end above the death line");
        }
        if !(self.radius.is_finite() && self.radius > 0.0) {
            return invalid("radius must be positive");
        }
        if !(self.spacing.is_finite() && self.spacing >= 0.0) {
            return invalid("spacing must be non-negative");
        }
        if !(self.speed.is_finite() && self.speed > 0.0) {
            return invalid("speed must be positive");
        }
        if self.palette.is_empty() {
            return invalid("palette must contain at least one color");
        }
        if self.palette.len() > Palette::MAX_COLORS {
            return invalid("palette has more than 255 colors");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Rgb;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.height, 14);
        assert_eq!(config.width, 16);
        assert_eq!(config.initial_rows, 5);
        assert_eq!(config.death_line(), 12);
        assert_eq!(config.palette.len(), 7);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new()
            .with_size(8, 6)
            .with_initial_rows(2)
            .with_geometry(10.0, 2.0)
            .with_speed(2.0)
            .with_seed(123);

        assert_eq!(config.height, 8);
        assert_eq!(config.width, 6);
        assert_eq!(config.initial_rows, 2);
        assert_eq!(config.radius, 10.0);
        assert_eq!(config.spacing, 2.0);
        assert_eq!(config.speed, 2.0);
        assert_eq!(config.seed, 123);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        let cases = vec![
            GameConfig::new().with_size(0, 16),
            GameConfig::new().with_size(14, 0),
            GameConfig::new().with_initial_rows(15),
            GameConfig::new().with_death_line_offset(0),
            GameConfig::new().with_death_line_offset(15),
            GameConfig::new().with_initial_rows(12),
            GameConfig::new().with_size(6, 5).with_initial_rows(6),
            GameConfig::new().with_initial_rows(3).with_death_line_offset(11),
            GameConfig::new().with_geometry(0.0, 5.0),
            GameConfig::new().with_geometry(20.0, -1.0),
            GameConfig::new().with_speed(0.0),
            GameConfig::new().with_speed(f64::NAN),
            GameConfig::new().with_palette(Palette::new(vec![])),
            GameConfig::new().with_palette(Palette::new(vec![Rgb(0, 0, 0); 256])),
        ];

        for config in cases {
            assert!(
                matches!(config.validate(), Err(EngineError::InvalidConfig(_))),
                "expected rejection: {:?}",
                config
            );
        }
    }

    #[test]
    fn test_initial_rows_may_reach_the_row_above_the_death_line() {
        let config = GameConfig::new().with_initial_rows(11);
        assert_eq!(config.death_line(), 12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
