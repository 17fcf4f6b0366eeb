//! External stimulus adapter
//!
//! Converts a raw contact sample into a directed impulse: the first ball in
//! collection order containing the contact point has its velocity reversed.

use glam::Vec2;

use super::ball::Ball;
use super::geometry::distance;

/// Reverse the first ball hit by the contact point, if any.
///
/// A ball is hit when the contact lies within its radius. The search stops
/// at the first match; balls later in the collection are left alone even if
/// they also contain the point. Returns the id of the redirected ball.
pub fn redirect_hit_ball(balls: &mut [Ball], contact: Vec2) -> Option<u32> {
    for ball in balls.iter_mut() {
        if distance(ball.pos, contact) <= ball.radius() {
            ball.vel = -ball.vel;
            return Some(ball.id);
        }
    }
    None
}
