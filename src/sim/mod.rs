//! Deterministic simulation module
//!
//! All ball behavior lives here. This module must be pure and deterministic:
//! - Unit timestep only (one tick advances every ball exactly once)
//! - Seeded RNG only
//! - Stable iteration order (collection order, ascending index pairs)
//! - No display or platform dependencies

pub mod ball;
pub mod collision;
pub mod geometry;
pub mod touch;
pub mod world;

pub use ball::{Ball, GrowthPhase};
pub use collision::{balls_touching, resolve_all, resolve_pair};
pub use geometry::{distance, overlap};
pub use touch::redirect_hit_ball;
pub use world::World;
