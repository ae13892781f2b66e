//! Brick entities: reflective walls and multi-hit destructible blocks
//!
//! The paddle is a brick too, always `Reflective`; only its x position moves.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use super::shapes::{Aabb, circle_overlaps_box};

/// Brick behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickKind {
    /// Bounces balls, never takes damage
    #[default]
    Reflective,
    /// Bounces balls and switches off after `max_hits` hits
    Destructible,
}

/// What a resolved hit did to the brick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    /// No state change (reflective brick)
    Reflected,
    /// Took damage but is still standing
    Damaged { hits_taken: u32 },
    /// This hit switched the brick off
    Destroyed,
}

/// A rectangular brick
///
/// Serialize-only: hit counters are only ever written by `new` and `on_hit`.
#[derive(Debug, Clone, Serialize)]
pub struct Brick {
    pub kind: BrickKind,
    pub aabb: Aabb,
    pub color: Vec3,
    active: bool,
    max_hits: u32,
    hits_taken: u32,
}

impl Brick {
    /// Create a brick from its full size. `max_hits` is raised to at least 1.
    pub fn new(kind: BrickKind, center: Vec2, size: Vec2, color: Vec3, max_hits: u32) -> Self {
        Self {
            kind,
            aabb: Aabb::from_size(center, size),
            color,
            active: true,
            max_hits: max_hits.max(1),
            hits_taken: 0,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.aabb.center
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        self.aabb.half_extents
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn max_hits(&self) -> u32 {
        self.max_hits
    }

    pub fn hits_taken(&self) -> u32 {
        self.hits_taken
    }

    /// Circle overlap test; inactive bricks never overlap anything
    pub fn overlaps_circle(&self, center: Vec2, radius: f32) -> bool {
        self.active && circle_overlaps_box(&self.aabb, center, radius)
    }

    /// Register a ball hit.
    ///
    /// The caller always reflects the ball, including on the hit that
    /// destroys the brick.
    pub fn on_hit(&mut self) -> HitOutcome {
        if !self.active {
            return HitOutcome::Reflected;
        }
        match self.kind {
            BrickKind::Reflective => HitOutcome::Reflected,
            BrickKind::Destructible => {
                self.hits_taken = (self.hits_taken + 1).min(self.max_hits);
                if self.hits_taken >= self.max_hits {
                    self.active = false;
                    HitOutcome::Destroyed
                } else {
                    HitOutcome::Damaged {
                        hits_taken: self.hits_taken,
                    }
                }
            }
        }
    }

    /// Damage ratio in [0, 1]
    pub fn damage(&self) -> f32 {
        self.hits_taken as f32 / self.max_hits as f32
    }

    /// Color to draw with: darkened toward a dull gray as damage accumulates
    pub fn display_color(&self) -> Vec3 {
        if self.max_hits <= 1 {
            return self.color;
        }
        let dmg = self.damage();
        (self.color * (1.0 - 0.5 * dmg) + Vec3::splat(0.2 * dmg)).clamp(Vec3::ZERO, Vec3::ONE)
    }

    /// Move horizontally, keeping the brick inside `[min_x, max_x]`
    pub fn set_x_clamped(&mut self, x: f32, min_x: f32, max_x: f32) {
        let lo = min_x + self.aabb.half_extents.x;
        let hi = max_x - self.aabb.half_extents.x;
        self.aabb.center.x = x.clamp(lo, hi.max(lo));
    }
}
