//! World: ball collection, clock, and tick orchestration
//!
//! The world is the sole mutator of ball state. One tick is strictly
//! sequential: optional touch sample, kinematic pass in collection order,
//! collision pass over ascending index pairs, then a frame snapshot for the
//! display. No two ticks overlap and nothing else touches the collection.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::config::{ConfigError, WorldConfig};
use crate::display::Sprite;

use super::ball::Ball;
use super::collision;
use super::touch;

/// The simulation world. Owns every ball for the life of the process; the
/// display only ever sees read-only snapshots.
#[derive(Debug, Clone)]
pub struct World {
    cfg: WorldConfig,
    balls: Vec<Ball>,
    /// Simulation clock in ticks
    now: u64,
    /// Construction seed, kept for reproducibility
    seed: u64,
    rng: Pcg32,
}

impl World {
    /// Build a world with `cfg.ball_count` balls at randomized positions,
    /// velocities and colors. Fails fast on an invalid config.
    pub fn new(cfg: WorldConfig, seed: u64) -> Result<Self, ConfigError> {
        cfg.validate()?;

        let mut rng = Pcg32::seed_from_u64(seed);
        let mut balls = Vec::with_capacity(cfg.ball_count as usize);
        for id in 0..cfg.ball_count {
            balls.push(Self::spawn(id, &cfg, &mut rng));
        }

        log::info!(
            "world created: {} balls on {}x{}, seed {}",
            balls.len(),
            cfg.width,
            cfg.height,
            seed
        );

        Ok(Self {
            cfg,
            balls,
            now: 0,
            seed,
            rng,
        })
    }

    fn spawn(id: u32, cfg: &WorldConfig, rng: &mut Pcg32) -> Ball {
        let size = cfg.min_size;
        let max_x = (cfg.width - size as f32).max(0.0);
        let max_y = (cfg.height - size as f32).max(0.0);
        let pos = Vec2::new(
            rng.random_range(0.0..=max_x),
            rng.random_range(0.0..=max_y),
        );
        let vel = Vec2::new(
            rng.random_range(-cfg.initial_speed..=cfg.initial_speed),
            rng.random_range(-cfg.initial_speed..=cfg.initial_speed),
        );
        let color = cfg.palette[rng.random_range(0..cfg.palette.len())];
        Ball::new(id, pos, vel, size, color)
    }

    /// Advance the simulation by one tick, applying an optional touch
    /// contact first.
    pub fn tick(&mut self, contact: Option<Vec2>) {
        self.now += 1;

        if let Some(point) = contact {
            if let Some(id) = touch::redirect_hit_ball(&mut self.balls, point) {
                log::debug!(
                    "touch at ({:.0}, {:.0}) redirected ball {id}",
                    point.x,
                    point.y
                );
            }
        }

        // Kinematic pass: every ball integrates and bounces before any pair
        // is examined
        for ball in &mut self.balls {
            ball.update(self.now, &self.cfg, &mut self.rng);
        }

        // Collision pass over the settled positions
        collision::resolve_all(&mut self.balls, self.cfg.width, self.cfg.height);
    }

    /// Read-only frame for the display, one sprite per ball in collection
    /// order
    pub fn frame(&self) -> Vec<Sprite> {
        self.balls
            .iter()
            .map(|b| Sprite {
                pos: b.pos,
                size: b.size,
                color: b.color,
            })
            .collect()
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn config(&self) -> &WorldConfig {
        &self.cfg
    }

    /// Current simulation clock in ticks
    pub fn now(&self) -> u64 {
        self.now
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}
