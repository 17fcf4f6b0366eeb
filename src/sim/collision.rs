//! Pairwise collision detection and resolution
//!
//! Runs after the kinematic pass has settled every ball. Pairs are visited
//! in ascending index order and corrections are applied immediately, so
//! later pairs in the same tick see earlier corrections; residual overlap
//! after a crowded tick is accepted.

use std::mem;

use super::ball::Ball;
use super::geometry::{distance, overlap};

/// Two balls are in contact when their anchor distance is below the sum of
/// their radii.
#[inline]
pub fn balls_touching(a: &Ball, b: &Ball) -> bool {
    distance(a.pos, b.pos) < a.radius() + b.radius()
}

/// Resolve every touching pair, ascending `(i, j)` with `i < j`.
pub fn resolve_all(balls: &mut [Ball], width: f32, height: f32) {
    for i in 0..balls.len() {
        let (head, tail) = balls.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if balls_touching(a, b) {
                resolve_pair(a, b, width, height);
            }
        }
    }
}

/// Swap the pair's velocities and push the balls apart along the line of
/// centers, half the overlap each.
///
/// The exchange is unconditional: it fires even when the pair is already
/// separating. Coincident centers have no separation direction, so the
/// velocity exchange still happens but the positional correction is
/// skipped.
pub fn resolve_pair(a: &mut Ball, b: &mut Ball, width: f32, height: f32) {
    mem::swap(&mut a.vel, &mut b.vel);

    let delta = b.pos - a.pos;
    let dist = delta.length();
    if dist == 0.0 {
        return;
    }

    let push = delta / dist * (overlap(a.pos, a.radius(), b.pos, b.radius()) / 2.0);
    a.pos -= push;
    b.pos += push;

    // Separation must not shove a ball off the playfield
    a.clamp_to_field(width, height);
    b.clamp_to_field(width, height);
}
