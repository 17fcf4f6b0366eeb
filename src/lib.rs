//! Neon Bounce - a bouncing-ball simulation for a small touch display
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, growth states)
//! - `config`: World configuration and fail-fast validation
//! - `display`: Interface boundary for the display panel and touch input

pub mod config;
pub mod display;
pub mod sim;

pub use config::{ConfigError, WorldConfig};
pub use display::{DisplayTarget, Sprite, TouchSource};
pub use sim::{Ball, GrowthPhase, World};

/// Simulation tuning constants
pub mod consts {
    /// Simulation tick rate, one frame every 10 ms
    pub const TICK_HZ: u32 = 100;

    /// Playfield dimensions in pixels
    pub const DISPLAY_WIDTH: f32 = 320.0;
    pub const DISPLAY_HEIGHT: f32 = 240.0;

    /// Ball defaults
    pub const NUM_BALLS: u32 = 8;
    /// Initial velocity components are drawn from `[-BALL_SPEED, BALL_SPEED]`
    pub const BALL_SPEED: f32 = 10.0;
    pub const MIN_BALL_SIZE: u32 = 1;
    pub const MAX_BALL_SIZE: u32 = 17;
    /// Diameter change per wall collision while growing or shrinking
    pub const BALL_GROWTH: u32 = 1;

    /// Hold at a size extreme for 5 seconds before reversing
    pub const MAX_SIZE_DWELL_TICKS: u64 = 5 * TICK_HZ as u64;
    pub const MIN_SIZE_DWELL_TICKS: u64 = 5 * TICK_HZ as u64;

    /// Wall hits between palette recolors
    pub const COLOR_CHANGE_THRESHOLD: u32 = 5;

    /// Default fill palette, 25 neon shades
    pub const NEON_PALETTE: [u32; 25] = [
        0xFF00FF, 0x00FFFF, 0x00FF00, 0xFFFF00, 0xFF0000,
        0xFF007F, 0x7FFF00, 0x00FF7F, 0x7F00FF, 0xFF7F00,
        0x7F7FFF, 0xFF007F, 0x7FFFFF, 0x7FFF7F, 0xFF7F7F,
        0x7F0000, 0x007F00, 0x00007F, 0x7F007F, 0x007F7F,
        0x7F7F00, 0x007FFF, 0xFF7FFF, 0x7FFF7F, 0xFFFF7F,
    ];
}
