//! Contact geometry for circular sprites
//!
//! Balls are compared by their anchor positions: two balls are in contact
//! when the anchor distance drops below the sum of their radii.

use glam::Vec2;

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Overlap depth between two circles, zero when they are apart.
///
/// At exact coincidence (`distance == 0`) the full radius sum is reported
/// but no separation direction exists; resolution skips the positional
/// correction in that case.
#[inline]
pub fn overlap(pos_a: Vec2, radius_a: f32, pos_b: Vec2, radius_b: f32) -> f32 {
    (radius_a + radius_b - distance(pos_a, pos_b)).max(0.0)
}
