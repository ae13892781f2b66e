//! Collision detection and response
//!
//! Ball vs brick uses the axis of least penetration to decide between a side
//! hit and a top/bottom hit. Ball vs ball is an equal-mass elastic impulse
//! along the contact normal.

use glam::Vec2;

use super::ball::Ball;
use super::brick::{Brick, HitOutcome};
use super::shapes::circle_overlaps_circle;
use crate::blend_color;
use crate::consts::*;

/// Result of a resolved ball-brick contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrickContact {
    /// Unit normal pointing from the brick toward the ball
    pub normal: Vec2,
    /// Distance the ball was pushed out
    pub penetration: f32,
    /// What the hit did to the brick
    pub outcome: HitOutcome,
}

/// Result of a resolved ball-ball contact
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PairContact {
    /// Unit normal pointing from the first ball toward the second
    pub normal: Vec2,
    /// Total separation applied (split evenly between the two balls)
    pub penetration: f32,
    /// Impulse magnitude, or `None` when the balls were already separating
    pub impulse: Option<f32>,
}

/// Reflect velocity off a surface
///
/// Standard reflection: v' = v - 2(v·n)n
#[inline]
pub fn reflect_velocity(velocity: Vec2, normal: Vec2) -> Vec2 {
    velocity - 2.0 * velocity.dot(normal) * normal
}

#[inline]
fn sign_or_one(v: f32) -> f32 {
    if v >= 0.0 { 1.0 } else { -1.0 }
}

/// Resolve a ball against a brick (or the paddle).
///
/// Pushes the ball out along the least-overlap axis, mirrors its velocity,
/// boosts its speed scale, damages the brick and drifts the ball's color
/// toward the brick's. Returns `None` if the brick is inactive or not touched.
pub fn resolve_ball_brick(ball: &mut Ball, brick: &mut Brick) -> Option<BrickContact> {
    if !brick.overlaps_circle(ball.pos, ball.radius) {
        return None;
    }

    let offset = ball.pos - brick.center();
    let half = brick.half_extents();
    let overlap_x = (half.x + ball.radius) - offset.x.abs();
    let overlap_y = (half.y + ball.radius) - offset.y.abs();

    let (normal, penetration) = if overlap_x < overlap_y {
        (Vec2::new(sign_or_one(offset.x), 0.0), overlap_x)
    } else {
        (Vec2::new(0.0, sign_or_one(offset.y)), overlap_y)
    };

    ball.pos += normal * penetration;
    ball.vel = reflect_velocity(ball.vel, normal);
    ball.scale_speed(BRICK_BOOST);

    let outcome = brick.on_hit();

    ball.color = blend_color(ball.color, brick.color, 1.0 - BRICK_COLOR_MIX, BRICK_COLOR_MIX);

    Some(BrickContact {
        normal,
        penetration,
        outcome,
    })
}

/// Resolve two overlapping balls.
///
/// Always separates penetrating balls. The impulse and color exchange only
/// happen while the balls are approaching each other.
pub fn resolve_ball_pair(a: &mut Ball, b: &mut Ball) -> Option<PairContact> {
    if !circle_overlaps_circle(&a.shape(), &b.shape()) {
        return None;
    }

    let delta = b.pos - a.pos;
    let dist_sq = delta.length_squared();
    let rsum = a.radius + b.radius;

    let dist = dist_sq.max(MIN_DIST_SQ).sqrt();
    let normal = delta / dist;

    let penetration = rsum - dist + SEPARATION_BIAS;
    let push = normal * (penetration * 0.5);
    a.pos -= push;
    b.pos += push;

    let vel_along_normal = (b.vel - a.vel).dot(normal);
    if vel_along_normal >= 0.0 {
        return Some(PairContact {
            normal,
            penetration,
            impulse: None,
        });
    }

    let impulse = -(1.0 + RESTITUTION) * vel_along_normal / 2.0;
    a.vel -= normal * impulse;
    b.vel += normal * impulse;

    let (color_a, color_b) = (a.color, b.color);
    a.color = blend_color(color_a, color_b, 1.0 - BALL_COLOR_MIX, BALL_COLOR_MIX);
    b.color = blend_color(color_b, color_a, 1.0 - BALL_COLOR_MIX, BALL_COLOR_MIX);

    Some(PairContact {
        normal,
        penetration,
        impulse: Some(impulse),
    })
}
