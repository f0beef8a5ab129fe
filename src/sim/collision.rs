//! Collision detection and response
//!
//! The bird is a circle; targets are circles (pigs) or axis-aligned rectangles
//! (blocks). Blocks are tested before pigs, each list in order.

use glam::Vec2;

use super::state::{GameEvent, GameState, Hint};
use crate::tuning::Tuning;

/// Result of a collision check
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionResult {
    /// Whether a collision occurred
    pub hit: bool,
    /// Closest point on the target to the bird center
    pub point: Vec2,
    /// Overlap depth along the center-to-point line
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Closest point of an axis-aligned rectangle to `point`
#[inline]
pub fn closest_point_on_rect(point: Vec2, min: Vec2, max: Vec2) -> Vec2 {
    point.clamp(min, max)
}

/// Circle vs axis-aligned rectangle
///
/// Hits when the squared distance from the circle center to the rectangle's
/// closest point is strictly less than the squared radius.
pub fn circle_rect_collision(center: Vec2, radius: f32, min: Vec2, max: Vec2) -> CollisionResult {
    let closest = closest_point_on_rect(center, min, max);
    let dist_sq = center.distance_squared(closest);
    if dist_sq < radius * radius {
        CollisionResult {
            hit: true,
            point: closest,
            penetration: radius - dist_sq.sqrt(),
        }
    } else {
        CollisionResult::miss()
    }
}

/// Circle vs circle: hits when the centers are closer than the summed radii
pub fn circle_circle_collision(a: Vec2, radius_a: f32, b: Vec2, radius_b: f32) -> CollisionResult {
    let dist = a.distance(b);
    let reach = radius_a + radius_b;
    if dist < reach {
        CollisionResult {
            hit: true,
            point: b + (a - b).normalize_or_zero() * radius_b,
            penetration: reach - dist,
        }
    } else {
        CollisionResult::miss()
    }
}

/// Test the bird against every unresolved target, marking hits
///
/// A smashed block slows the bird and knocks it back vertically; a pig is only
/// marked. Does nothing unless the bird is flying.
pub fn check_collisions(state: &mut GameState, tuning: &Tuning) {
    if !state.is_flying() {
        return;
    }

    for (index, block) in state.blocks.iter_mut().enumerate() {
        if block.hit {
            continue;
        }
        let result = circle_rect_collision(state.bird.pos, state.bird.radius, block.pos, block.max());
        if result.hit {
            block.hit = true;
            state.bird.vel.x *= tuning.block_damping_x;
            state.bird.vel.y *= -tuning.block_bounce_y;
            state.events.push(GameEvent::BlockHit { index });
            log::debug!(
                "Block {} smashed at ({:.1}, {:.1}), depth {:.2}",
                index,
                result.point.x,
                result.point.y,
                result.penetration
            );
        }
    }

    for (index, pig) in state.pigs.iter_mut().enumerate() {
        if pig.hit {
            continue;
        }
        let result = circle_circle_collision(state.bird.pos, state.bird.radius, pig.pos, pig.radius);
        if result.hit {
            pig.hit = true;
            state.hint = Hint::Hit;
            state.events.push(GameEvent::PigHit { index });
            log::debug!(
                "Pig {} hit at ({:.1}, {:.1}), depth {:.2}",
                index,
                result.point.x,
                result.point.y,
                result.penetration
            );
        }
    }
}
