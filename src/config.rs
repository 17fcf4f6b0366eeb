//! World configuration and validation
//!
//! All tuning is fixed at world construction. A config that fails
//! `validate()` must never produce a runnable world.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Reasons a `WorldConfig` is rejected at world construction
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `min_size` exceeds `max_size`
    SizeBoundsInverted { min: u32, max: u32 },
    /// The color palette has no entries
    EmptyPalette,
    /// Playfield width or height is not positive
    BadPlayfield { width: f32, height: f32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::SizeBoundsInverted { min, max } => {
                write!(f, "min ball size {min} exceeds max ball size {max}")
            }
            ConfigError::EmptyPalette => write!(f, "color palette is empty"),
            ConfigError::BadPlayfield { width, height } => {
                write!(f, "playfield {width}x{height} is not positive")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Simulation parameters, fixed at world construction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldConfig {
    /// Playfield width in pixels
    pub width: f32,
    /// Playfield height in pixels
    pub height: f32,
    /// Number of balls spawned at startup
    pub ball_count: u32,
    /// Initial velocity components are drawn from `[-initial_speed, initial_speed]`
    pub initial_speed: f32,
    /// Smallest ball diameter, also the spawn diameter
    pub min_size: u32,
    /// Largest ball diameter
    pub max_size: u32,
    /// Diameter change per wall collision while growing or shrinking
    pub growth_step: u32,
    /// Ticks to hold at `max_size` before shrinking starts
    pub max_size_dwell: u64,
    /// Ticks to hold at `min_size` before growth resumes
    pub min_size_dwell: u64,
    /// Wall hits that trigger a recolor
    pub color_change_threshold: u32,
    /// Fill colors, `0xRRGGBB`
    pub palette: Vec<u32>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: DISPLAY_WIDTH,
            height: DISPLAY_HEIGHT,
            ball_count: NUM_BALLS,
            initial_speed: BALL_SPEED,
            min_size: MIN_BALL_SIZE,
            max_size: MAX_BALL_SIZE,
            growth_step: BALL_GROWTH,
            max_size_dwell: MAX_SIZE_DWELL_TICKS,
            min_size_dwell: MIN_SIZE_DWELL_TICKS,
            color_change_threshold: COLOR_CHANGE_THRESHOLD,
            palette: NEON_PALETTE.to_vec(),
        }
    }
}

impl WorldConfig {
    /// Check the construction invariants. NaN dimensions are rejected along
    /// with non-positive ones.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0) || !(self.height > 0.0) {
            return Err(ConfigError::BadPlayfield {
                width: self.width,
                height: self.height,
            });
        }
        if self.min_size > self.max_size {
            return Err(ConfigError::SizeBoundsInverted {
                min: self.min_size,
                max: self.max_size,
            });
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        Ok(())
    }
}
