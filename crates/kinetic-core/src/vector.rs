//! Planar vector helpers used by the proximity and tracking responses.
//!
//! Angles are in degrees throughout; CSS consumes degrees directly so there is
//! no reason to carry radians past `atan2`.

use crate::constants::{DISTANCE_EPSILON, FULL_TURN_DEG, HALF_TURN_DEG};
use glam::Vec2;

#[inline]
pub fn distance(p1: Vec2, p2: Vec2) -> f32 {
    p1.distance(p2)
}

/// Unit vector along `(dx, dy)`. The denominator is floored at
/// [`DISTANCE_EPSILON`] so a signal sitting exactly on the anchor yields a
/// zero vector instead of NaN.
#[inline]
pub fn direction(dx: f32, dy: f32, distance: f32) -> Vec2 {
    Vec2::new(dx, dy) / distance.max(DISTANCE_EPSILON)
}

#[inline]
pub fn normalize_degrees(deg: f32) -> f32 {
    let wrapped = deg.rem_euclid(FULL_TURN_DEG);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if wrapped >= FULL_TURN_DEG {
        0.0
    } else {
        wrapped
    }
}

/// Heading of `(dx, dy)` in degrees, normalized to `[0, 360)`.
#[inline]
pub fn angle_of(dx: f32, dy: f32) -> f32 {
    normalize_degrees(dy.atan2(dx).to_degrees())
}

/// Signed difference `target - current` taking the shorter arc, in
/// `[-180, 180)`.
#[inline]
pub fn shortest_delta(target: f32, current: f32) -> f32 {
    (target - current + HALF_TURN_DEG).rem_euclid(FULL_TURN_DEG) - HALF_TURN_DEG
}
