//! Ball entity: kinematics and the growth state machine
//!
//! Each ball owns its own size cycle. Wall collisions drive the size steps
//! and the recolor counter; dwell at the size extremes is time-based and
//! checked every tick.

use glam::Vec2;
use rand::Rng;

use crate::config::WorldConfig;

/// Phase of the size cycle. Exactly one phase is active at a time; the
/// cycle has no terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthPhase {
    /// Each wall hit adds `growth_step` until `max_size` is reached
    Growing,
    /// Holding at `max_size` until the dwell elapses
    AtMaxSize,
    /// Each wall hit removes `growth_step` until `min_size` is reached
    Shrinking,
    /// Holding at `min_size` until the dwell elapses
    AtMinSize,
}

/// A ball entity
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub id: u32,
    /// Anchor position, bounded to `[0, width - size] x [0, height - size]`
    pub pos: Vec2,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    /// Diameter in pixels, bounded to `[min_size, max_size]`
    pub size: u32,
    /// Fill color, `0xRRGGBB`
    pub color: u32,
    /// Wall hits since the last recolor
    pub hit_count: u32,
    pub phase: GrowthPhase,
    /// Tick at which `phase` was entered, for the dwell checks
    pub phase_entered: u64,
}

impl Ball {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, size: u32, color: u32) -> Self {
        Self {
            id,
            pos,
            vel,
            size,
            color,
            hit_count: 0,
            phase: GrowthPhase::Growing,
            phase_entered: 0,
        }
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.size as f32 / 2.0
    }

    /// Advance one tick: integrate the position, bounce off walls, run the
    /// hit bookkeeping and the dwell checks.
    ///
    /// Returns true if a wall was hit this tick.
    pub fn update(&mut self, now: u64, cfg: &WorldConfig, rng: &mut impl Rng) -> bool {
        let hit = self.integrate(cfg.width, cfg.height);
        if hit {
            self.hit_count += 1;
            if self.hit_count >= cfg.color_change_threshold {
                self.recolor(rng, &cfg.palette);
            }
            self.step_size(now, cfg);
            // A growth step shrinks the legal position range
            self.clamp_to_field(cfg.width, cfg.height);
        }
        self.step_dwell(now, cfg);
        hit
    }

    /// Euler step plus per-axis wall bounce. Returns true when either axis
    /// reversed.
    pub fn integrate(&mut self, width: f32, height: f32) -> bool {
        self.pos += self.vel;

        let max_x = (width - self.size as f32).max(0.0);
        let max_y = (height - self.size as f32).max(0.0);
        let mut hit = false;
        if self.pos.x < 0.0 || self.pos.x > max_x {
            self.vel.x = -self.vel.x;
            self.pos.x = self.pos.x.clamp(0.0, max_x);
            hit = true;
        }
        if self.pos.y < 0.0 || self.pos.y > max_y {
            self.vel.y = -self.vel.y;
            self.pos.y = self.pos.y.clamp(0.0, max_y);
            hit = true;
        }
        hit
    }

    /// Pull the anchor back inside the legal range for the current size.
    pub(crate) fn clamp_to_field(&mut self, width: f32, height: f32) {
        let max_x = (width - self.size as f32).max(0.0);
        let max_y = (height - self.size as f32).max(0.0);
        self.pos.x = self.pos.x.clamp(0.0, max_x);
        self.pos.y = self.pos.y.clamp(0.0, max_y);
    }

    /// Event-based size step, applied only on a wall-collision tick
    fn step_size(&mut self, now: u64, cfg: &WorldConfig) {
        match self.phase {
            GrowthPhase::Growing => {
                self.size = (self.size + cfg.growth_step).min(cfg.max_size);
                if self.size == cfg.max_size {
                    self.enter(GrowthPhase::AtMaxSize, now);
                }
            }
            GrowthPhase::Shrinking => {
                self.size = self.size.saturating_sub(cfg.growth_step).max(cfg.min_size);
                if self.size == cfg.min_size {
                    self.enter(GrowthPhase::AtMinSize, now);
                }
            }
            GrowthPhase::AtMaxSize | GrowthPhase::AtMinSize => {}
        }
    }

    /// Time-based dwell transitions, evaluated every tick regardless of
    /// collisions
    fn step_dwell(&mut self, now: u64, cfg: &WorldConfig) {
        match self.phase {
            GrowthPhase::AtMaxSize if now - self.phase_entered > cfg.max_size_dwell => {
                self.enter(GrowthPhase::Shrinking, now);
            }
            GrowthPhase::AtMinSize if now - self.phase_entered > cfg.min_size_dwell => {
                self.enter(GrowthPhase::Growing, now);
            }
            _ => {}
        }
    }

    fn enter(&mut self, phase: GrowthPhase, now: u64) {
        self.phase = phase;
        self.phase_entered = now;
    }

    /// Uniform palette draw; picking the current color again is allowed.
    fn recolor(&mut self, rng: &mut impl Rng, palette: &[u32]) {
        self.color = palette[rng.random_range(0..palette.len())];
        self.hit_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn cfg() -> WorldConfig {
        WorldConfig::default()
    }

    fn rng() -> Pcg32 {
        Pcg32::seed_from_u64(7)
    }

    fn ball_at(pos: Vec2, vel: Vec2, size: u32) -> Ball {
        Ball::new(0, pos, vel, size, 0xFF00FF)
    }

    #[test]
    fn test_left_wall_bounce_reverses_and_clamps() {
        // Ball at x=0 moving left on a 320-wide field
        let mut ball = ball_at(Vec2::new(0.0, 100.0), Vec2::new(-3.0, 0.0), 17);
        let hit = ball.update(1, &cfg(), &mut rng());

        assert!(hit);
        assert_eq!(ball.vel.x, 3.0);
        assert_eq!(ball.pos.x, 0.0);
        assert_eq!(ball.pos.y, 100.0);
        assert_eq!(ball.hit_count, 1);
    }

    #[test]
    fn test_corner_hit_counts_as_one_collision() {
        let mut ball = ball_at(Vec2::new(0.0, 0.0), Vec2::new(-3.0, -4.0), 5);
        let hit = ball.update(1, &cfg(), &mut rng());

        assert!(hit);
        assert_eq!(ball.vel, Vec2::new(3.0, 4.0));
        assert_eq!(ball.pos, Vec2::new(0.0, 0.0));
        assert_eq!(ball.hit_count, 1);
    }

    #[test]
    fn test_free_flight_changes_nothing_but_position() {
        let mut ball = ball_at(Vec2::new(100.0, 100.0), Vec2::new(2.0, -1.0), 5);
        let before = ball.clone();
        let hit = ball.update(1, &cfg(), &mut rng());

        assert!(!hit);
        assert_eq!(ball.pos, Vec2::new(102.0, 99.0));
        assert_eq!(ball.vel, before.vel);
        assert_eq!(ball.size, before.size);
        assert_eq!(ball.color, before.color);
        assert_eq!(ball.hit_count, 0);
        assert_eq!(ball.phase, before.phase);
    }

    #[test]
    fn test_zero_velocity_tick_is_a_noop() {
        let mut ball = ball_at(Vec2::new(100.0, 100.0), Vec2::ZERO, 5);
        let before = ball.clone();
        ball.update(1, &cfg(), &mut rng());
        assert_eq!(ball, before);
    }

    #[test]
    fn test_growth_cycle_visits_every_phase() {
        let c = WorldConfig {
            min_size: 1,
            max_size: 3,
            growth_step: 1,
            max_size_dwell: 2,
            min_size_dwell: 2,
            ..WorldConfig::default()
        };
        let mut b = ball_at(Vec2::new(50.0, 50.0), Vec2::ZERO, 1);

        b.step_size(10, &c);
        assert_eq!((b.size, b.phase), (2, GrowthPhase::Growing));
        b.step_size(11, &c);
        assert_eq!((b.size, b.phase), (3, GrowthPhase::AtMaxSize));
        assert_eq!(b.phase_entered, 11);

        // Dwell holds until strictly more than 2 ticks have passed
        b.step_dwell(13, &c);
        assert_eq!(b.phase, GrowthPhase::AtMaxSize);
        b.step_dwell(14, &c);
        assert_eq!(b.phase, GrowthPhase::Shrinking);

        b.step_size(15, &c);
        assert_eq!((b.size, b.phase), (2, GrowthPhase::Shrinking));
        b.step_size(16, &c);
        assert_eq!((b.size, b.phase), (1, GrowthPhase::AtMinSize));

        b.step_dwell(19, &c);
        assert_eq!(b.phase, GrowthPhase::Growing);
    }

    #[test]
    fn test_size_held_during_dwell_phases() {
        let c = cfg();
        let mut b = ball_at(Vec2::new(50.0, 50.0), Vec2::ZERO, c.max_size);
        b.phase = GrowthPhase::AtMaxSize;
        b.step_size(5, &c);
        assert_eq!(b.size, c.max_size);

        b.phase = GrowthPhase::AtMinSize;
        b.size = c.min_size;
        b.step_size(6, &c);
        assert_eq!(b.size, c.min_size);
    }

    #[test]
    fn test_growth_step_is_clamped_at_max() {
        let c = WorldConfig {
            min_size: 1,
            max_size: 17,
            growth_step: 5,
            ..WorldConfig::default()
        };
        let mut b = ball_at(Vec2::new(50.0, 50.0), Vec2::ZERO, 15);
        b.step_size(1, &c);
        assert_eq!(b.size, 17);
        assert_eq!(b.phase, GrowthPhase::AtMaxSize);
    }

    #[test]
    fn test_fifth_wall_hit_recolors_and_resets_count() {
        let c = cfg();
        let mut b = ball_at(Vec2::new(0.0, 100.0), Vec2::new(-3.0, 0.0), 5);
        b.hit_count = c.color_change_threshold - 1;

        b.update(1, &c, &mut rng());

        assert_eq!(b.hit_count, 0);
        assert!(c.palette.contains(&b.color));
    }

    #[test]
    fn test_growth_at_right_wall_keeps_ball_on_field() {
        let c = WorldConfig {
            min_size: 1,
            max_size: 17,
            growth_step: 4,
            ..WorldConfig::default()
        };
        // Bounces off the right wall while growing; the legal range shrinks
        // with the new diameter
        let mut b = ball_at(Vec2::new(314.0, 100.0), Vec2::new(5.0, 0.0), 4);
        b.update(1, &c, &mut rng());

        assert_eq!(b.size, 8);
        assert!(b.pos.x <= c.width - b.size as f32);
    }
}
