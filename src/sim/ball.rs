//! Ball entities and wall handling

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::shapes::{Bounds, CircleShape};
use crate::consts::*;

/// One of the four arena walls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
    Bottom,
    Top,
}

impl Wall {
    /// Speed scale multiplier applied on a bounce off this wall
    pub fn speed_factor(self) -> f32 {
        match self {
            Wall::Left | Wall::Right => SIDE_WALL_BOOST,
            Wall::Bottom => FLOOR_FRICTION,
            Wall::Top => CEILING_BOOST,
        }
    }
}

/// Walls touched during one bounds pass (at most one per axis)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallHits {
    pub horizontal: Option<Wall>,
    pub vertical: Option<Wall>,
}

impl WallHits {
    pub fn any(&self) -> bool {
        self.horizontal.is_some() || self.vertical.is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = Wall> {
        self.horizontal.into_iter().chain(self.vertical)
    }
}

/// A moving ball
///
/// Serialize-only: the speed scale can only enter through the clamped setters.
#[derive(Debug, Clone, Serialize)]
pub struct Ball {
    pub id: u32,
    pub pos: Vec2,
    /// Velocity in arena units per tick
    pub vel: Vec2,
    pub radius: f32,
    pub color: Vec3,
    /// Multiplier on `vel`; every write is clamped to [MIN_SPEED_SCALE, MAX_SPEED_SCALE]
    speed_scale: f32,
}

impl Ball {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, radius: f32, color: Vec3) -> Self {
        Self {
            id,
            pos,
            vel,
            radius,
            color: color.clamp(Vec3::ZERO, Vec3::ONE),
            speed_scale: 1.0,
        }
    }

    #[inline]
    pub fn speed_scale(&self) -> f32 {
        self.speed_scale
    }

    pub fn set_speed_scale(&mut self, scale: f32) {
        self.speed_scale = scale.clamp(MIN_SPEED_SCALE, MAX_SPEED_SCALE);
    }

    /// Multiply the speed scale by `factor`, staying within limits
    pub fn scale_speed(&mut self, factor: f32) {
        self.set_speed_scale(self.speed_scale * factor);
    }

    pub fn shape(&self) -> CircleShape {
        CircleShape::new(self.pos, self.radius)
    }

    /// Advance position by `step` ticks
    pub fn integrate(&mut self, step: f32) {
        self.pos += self.vel * step * self.speed_scale;
    }

    /// Reflect off the arena walls.
    ///
    /// Each axis is handled independently and only one wall per axis can
    /// respond in a pass. Side walls speed the ball up, the floor slows it,
    /// the ceiling nudges it faster.
    pub fn resolve_world_bounds(&mut self, bounds: &Bounds) -> WallHits {
        let mut hits = WallHits::default();

        if self.pos.x - self.radius <= bounds.left {
            self.pos.x = bounds.left + self.radius;
            self.vel.x = -self.vel.x;
            hits.horizontal = Some(Wall::Left);
        } else if self.pos.x + self.radius >= bounds.right {
            self.pos.x = bounds.right - self.radius;
            self.vel.x = -self.vel.x;
            hits.horizontal = Some(Wall::Right);
        }

        if self.pos.y - self.radius <= bounds.bottom {
            self.pos.y = bounds.bottom + self.radius;
            self.vel.y = -self.vel.y;
            hits.vertical = Some(Wall::Bottom);
        } else if self.pos.y + self.radius >= bounds.top {
            self.pos.y = bounds.top - self.radius;
            self.vel.y = -self.vel.y;
            hits.vertical = Some(Wall::Top);
        }

        if hits.any() {
            let factor: f32 = hits.iter().map(Wall::speed_factor).product();
            self.scale_speed(factor);
        }
        hits
    }
}
