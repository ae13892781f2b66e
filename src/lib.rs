//! Spiral Arena - a brick arena full of bouncing balls
//!
//! Core modules:
//! - `sim`: Deterministic simulation (shapes, entities, collisions, tick pipeline)
//! - `render`: Read-only instance snapshot for a drawing backend
//! - `settings`: Data-driven tuning loaded from JSON

pub mod render;
pub mod settings;
pub mod sim;

pub use settings::{LayoutSettings, Settings};

use glam::Vec3;

/// Game configuration constants
pub mod consts {
    /// Integration step per tick. Velocities are expressed in arena units per tick.
    pub const SIM_STEP: f32 = 1.0;
    /// Upper bound on a frame delta (~30 fps floor)
    pub const MAX_FRAME_DT: f32 = 0.0333;

    /// Arena bounds (normalized device coordinates)
    pub const LEFT_BOUND: f32 = -1.0;
    pub const RIGHT_BOUND: f32 = 1.0;
    pub const TOP_BOUND: f32 = 1.0;
    pub const BOTTOM_BOUND: f32 = -1.0;

    /// Speed scale limits (applied by every writer)
    pub const MIN_SPEED_SCALE: f32 = 0.25;
    pub const MAX_SPEED_SCALE: f32 = 2.5;

    /// Speed scale multipliers per wall
    pub const SIDE_WALL_BOOST: f32 = 1.05;
    pub const FLOOR_FRICTION: f32 = 0.90;
    pub const CEILING_BOOST: f32 = 1.02;
    /// Speed scale multiplier on every brick/paddle contact
    pub const BRICK_BOOST: f32 = 1.02;

    /// Fraction of the brick color a ball picks up per hit
    pub const BRICK_COLOR_MIX: f32 = 0.15;
    /// Fraction of the other ball's color picked up per ball-ball hit
    pub const BALL_COLOR_MIX: f32 = 0.35;

    /// Ball-ball restitution (1.0 = perfectly elastic)
    pub const RESTITUTION: f32 = 1.0;
    /// Extra separation added to ball-ball penetration to avoid re-sticking
    pub const SEPARATION_BIAS: f32 = 0.0005;
    /// Floor on squared distance before normalizing a contact normal
    pub const MIN_DIST_SQ: f32 = 1e-6;

    /// Hard cap on concurrent balls
    pub const MAX_BALLS: usize = 12;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 0.045;
    pub const BALL_MIN_SPEED: f32 = 0.008;
    pub const BALL_MAX_SPEED: f32 = 0.020;

    /// Paddle defaults
    pub const PADDLE_Y: f32 = -0.85;
    pub const PADDLE_WIDTH: f32 = 0.35;
    pub const PADDLE_HEIGHT: f32 = 0.06;
    /// Paddle travel speed (arena units per second)
    pub const PADDLE_SPEED: f32 = 1.6;
}

/// Blend `own` toward `other`, keeping `keep` of `own` and adding `mix` of `other`.
///
/// The result is clamped to [0, 1] per channel, so out-of-range inputs are
/// always pulled back into a displayable color.
#[inline]
pub fn blend_color(own: Vec3, other: Vec3, keep: f32, mix: f32) -> Vec3 {
    (own * keep + other * mix).clamp(Vec3::ZERO, Vec3::ONE)
}

/// Phase-shifted cosine palette: `0.5 + 0.5 * cos(2π(t + phase))` per channel
#[inline]
pub fn cosine_palette(t: f32) -> Vec3 {
    use std::f32::consts::TAU;
    Vec3::new(
        0.5 + 0.5 * (TAU * t).cos(),
        0.5 + 0.5 * (TAU * (t + 0.33)).cos(),
        0.5 + 0.5 * (TAU * (t + 0.66)).cos(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_cosine_palette_endpoints() {
        let c = cosine_palette(0.0);
        assert!((c.x - 1.0).abs() < 1e-5);
        assert!(c.y > 0.0 && c.y < 1.0);
        let d = cosine_palette(1.0);
        assert!((c - d).length() < 1e-4);
    }

    proptest! {
        #[test]
        fn blend_color_stays_in_unit_range(
            a in prop::array::uniform3(-5.0f32..5.0),
            b in prop::array::uniform3(-5.0f32..5.0),
            keep in 0.0f32..2.0,
            mix in 0.0f32..2.0,
        ) {
            let out = blend_color(Vec3::from(a), Vec3::from(b), keep, mix);
            for ch in out.to_array() {
                prop_assert!((0.0..=1.0).contains(&ch));
            }
        }
    }
}
