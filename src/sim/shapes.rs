//! Geometry primitives and overlap predicates
//!
//! Boxes are stored as center + half-extents so the closest-point query is a
//! single per-axis clamp.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::{BOTTOM_BOUND, LEFT_BOUND, RIGHT_BOUND, TOP_BOUND};

/// An axis-aligned box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: Vec2,
    pub half_extents: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, half_extents: Vec2) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Build from a full width/height
    pub fn from_size(center: Vec2, size: Vec2) -> Self {
        Self::new(center, size * 0.5)
    }

    #[inline]
    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents
    }

    /// Closest point on or inside the box to `p`
    #[inline]
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min(), self.max())
    }
}

/// A disc
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CircleShape {
    pub center: Vec2,
    pub radius: f32,
}

impl CircleShape {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// The four arena walls, as an inclusive rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            left: LEFT_BOUND,
            right: RIGHT_BOUND,
            bottom: BOTTOM_BOUND,
            top: TOP_BOUND,
        }
    }
}

/// True if a circle at `center` with `radius` touches or overlaps the box
#[inline]
pub fn circle_overlaps_box(aabb: &Aabb, center: Vec2, radius: f32) -> bool {
    let closest = aabb.closest_point(center);
    center.distance_squared(closest) <= radius * radius
}

/// True if two circles touch or overlap
#[inline]
pub fn circle_overlaps_circle(a: &CircleShape, b: &CircleShape) -> bool {
    let rsum = a.radius + b.radius;
    a.center.distance_squared(b.center) <= rsum * rsum
}
