//! Arena tuning
//!
//! Everything a designer might want to tweak without recompiling. Loaded from
//! a JSON file; missing fields take their defaults, and a missing or broken
//! file falls back to `Settings::default()`.

use std::path::Path;

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::shapes::Bounds;

/// Spiral brick layout parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutSettings {
    /// Number of bricks along the spiral
    pub count: usize,
    pub radius_start: f32,
    pub radius_end: f32,
    /// Spiral start/end angle in degrees
    pub angle_start_deg: f32,
    pub angle_end_deg: f32,
    /// Vertical squash applied to the spiral (1.0 = circular)
    pub y_squash: f32,
    /// Every Nth brick is big (0 disables big bricks)
    pub big_every: usize,
    /// Full size of big / small bricks
    pub big_size: Vec2,
    pub small_size: Vec2,
    /// Hit points of destructible big / small bricks
    pub big_hits: u32,
    pub small_hits: u32,
}

impl Default for LayoutSettings {
    fn default() -> Self {
        Self {
            count: 34,
            radius_start: 0.25,
            radius_end: 0.85,
            angle_start_deg: 30.0,
            angle_end_deg: 300.0,
            y_squash: 0.8,
            big_every: 3,
            big_size: Vec2::new(0.18, 0.10),
            small_size: Vec2::new(0.12, 0.10),
            big_hits: 4,
            small_hits: 3,
        }
    }
}

/// Ball spawn tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnSettings {
    pub position: Vec2,
    pub radius: f32,
    /// Initial speed range, arena units per tick
    pub min_speed: f32,
    pub max_speed: f32,
    /// Per-channel color range
    pub color_min: f32,
    pub color_max: f32,
    pub max_balls: usize,
}

impl Default for SpawnSettings {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            radius: BALL_RADIUS,
            min_speed: BALL_MIN_SPEED,
            max_speed: BALL_MAX_SPEED,
            color_min: 0.4,
            color_max: 1.0,
            max_balls: MAX_BALLS,
        }
    }
}

/// Paddle tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleSettings {
    pub center: Vec2,
    /// Full width/height
    pub size: Vec2,
    pub color: Vec3,
    /// Arena units per second
    pub speed: f32,
}

impl Default for PaddleSettings {
    fn default() -> Self {
        Self {
            center: Vec2::new(0.0, PADDLE_Y),
            size: Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT),
            color: Vec3::splat(0.95),
            speed: PADDLE_SPEED,
        }
    }
}

/// Complete arena configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// RNG seed for ball spawns
    pub seed: u64,
    pub bounds: Bounds,
    /// Largest frame delta the tick will accept
    pub max_frame_dt: f32,
    pub layout: LayoutSettings,
    pub spawn: SpawnSettings,
    pub paddle: PaddleSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: 0x5EED,
            bounds: Bounds::default(),
            max_frame_dt: MAX_FRAME_DT,
            layout: LayoutSettings::default(),
            spawn: SpawnSettings::default(),
            paddle: PaddleSettings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from JSON, `None` if malformed
    pub fn from_json(json: &str) -> Option<Self> {
        match serde_json::from_str::<Settings>(json) {
            Ok(settings) => Some(settings.sanitized()),
            Err(err) => {
                log::warn!("Ignoring malformed settings: {}", err);
                None
            }
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if let Ok(json) = std::fs::read_to_string(path) {
            if let Some(settings) = Self::from_json(&json) {
                log::info!("Loaded settings from {}", path.display());
                return settings;
            }
        } else {
            log::warn!("Settings file {} not readable", path.display());
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Write settings as pretty JSON. Returns false if the write failed.
    pub fn save_to(&self, path: impl AsRef<Path>) -> bool {
        let path = path.as_ref();
        match std::fs::write(path, self.to_json()) {
            Ok(()) => {
                log::info!("Settings saved to {}", path.display());
                true
            }
            Err(err) => {
                log::warn!("Could not save settings to {}: {}", path.display(), err);
                false
            }
        }
    }

    /// Pull hand-edited values back into workable ranges
    pub fn sanitized(mut self) -> Self {
        self.spawn.max_balls = self.spawn.max_balls.clamp(1, MAX_BALLS);
        self.spawn.radius = self.spawn.radius.max(f32::EPSILON);
        self.spawn.min_speed = self.spawn.min_speed.max(0.0);
        self.spawn.max_speed = self.spawn.max_speed.max(self.spawn.min_speed);
        self.spawn.color_min = self.spawn.color_min.clamp(0.0, 1.0);
        self.spawn.color_max = self.spawn.color_max.clamp(self.spawn.color_min, 1.0);
        self.max_frame_dt = self.max_frame_dt.max(0.0);
        self.layout.big_hits = self.layout.big_hits.max(1);
        self.layout.small_hits = self.layout.small_hits.max(1);
        self
    }
}
