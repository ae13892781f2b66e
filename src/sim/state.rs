//! World state: bricks, paddle, balls, RNG and the event queue
//!
//! The world owns every entity. Resolvers borrow it mutably for one tick; no
//! entity outlives or escapes it.

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::ball::{Ball, Wall};
use super::brick::{Brick, BrickKind};
use super::layout::build_spiral;
use super::shapes::Bounds;
use crate::consts::MAX_BALLS;
use crate::settings::Settings;

/// Something that happened during a tick, for audio/particle collaborators
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    BallSpawned { ball_id: u32 },
    WallBounce { ball_id: u32, wall: Wall },
    PaddleHit { ball_id: u32 },
    BrickHit { ball_id: u32, brick_index: usize },
    BrickDestroyed { ball_id: u32, brick_index: usize, pos: Vec2 },
    BallsCollided { a: u32, b: u32 },
}

/// The complete simulation state
#[derive(Debug, Clone)]
pub struct World {
    pub settings: Settings,
    pub(crate) bricks: Vec<Brick>,
    pub(crate) paddle: Brick,
    pub(crate) balls: Vec<Ball>,
    pub(crate) events: Vec<GameEvent>,
    /// Simulation tick counter
    pub time_ticks: u64,
    rng: Pcg32,
    next_id: u32,
}

impl World {
    /// Build the spiral layout and spawn the first ball
    pub fn new(settings: Settings) -> Self {
        let settings = settings.sanitized();
        let bricks = build_spiral(&settings.layout);
        let mut world = Self::empty(settings);
        world.bricks = bricks;
        log::info!(
            "Arena ready: {} bricks ({} destructible), seed {}",
            world.bricks.len(),
            world
                .bricks
                .iter()
                .filter(|b| b.kind == BrickKind::Destructible)
                .count(),
            world.settings.seed
        );
        world.spawn_ball();
        world
    }

    /// A world with the configured paddle but no bricks or balls
    pub fn empty(settings: Settings) -> Self {
        let settings = settings.sanitized();
        let paddle = Brick::new(
            BrickKind::Reflective,
            settings.paddle.center,
            settings.paddle.size,
            settings.paddle.color,
            1,
        );
        Self {
            rng: Pcg32::seed_from_u64(settings.seed),
            settings,
            bricks: Vec::new(),
            paddle,
            balls: Vec::new(),
            events: Vec::new(),
            time_ticks: 0,
            next_id: 1,
        }
    }

    pub fn bricks(&self) -> &[Brick] {
        &self.bricks
    }

    pub fn paddle(&self) -> &Brick {
        &self.paddle
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    /// Mutable access for scripted setups
    pub fn bricks_mut(&mut self) -> &mut Vec<Brick> {
        &mut self.bricks
    }

    pub fn active_brick_count(&self) -> usize {
        self.bricks.iter().filter(|b| b.is_active()).count()
    }

    /// Take all events produced since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Ball cap in effect; never above `MAX_BALLS` whatever the settings say
    pub fn ball_cap(&self) -> usize {
        self.settings.spawn.max_balls.min(MAX_BALLS)
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn a ball at the spawn point with a random heading, speed and color.
    ///
    /// Returns the new ball's id, or `None` once the ball cap is reached.
    pub fn spawn_ball(&mut self) -> Option<u32> {
        let spawn = self.settings.spawn.clone();
        if self.balls.len() >= self.ball_cap() {
            log::debug!("Spawn refused: {} balls already in play", self.balls.len());
            return None;
        }

        let angle = self.rng.random_range(0.0..std::f32::consts::TAU);
        let speed = if spawn.max_speed > spawn.min_speed {
            self.rng.random_range(spawn.min_speed..spawn.max_speed)
        } else {
            spawn.min_speed
        };
        let (lo, hi) = (spawn.color_min, spawn.color_max.max(spawn.color_min));
        let mut channel = || {
            if hi > lo {
                self.rng.random_range(lo..hi)
            } else {
                lo
            }
        };
        let color = Vec3::new(channel(), channel(), channel());

        Some(self.push_ball(spawn.position, Vec2::from_angle(angle) * speed, color))
    }

    /// Add a ball with explicit state (respects the ball cap)
    pub fn insert_ball(&mut self, pos: Vec2, vel: Vec2, color: Vec3) -> Option<u32> {
        if self.balls.len() >= self.ball_cap() {
            log::debug!("Insert refused: {} balls already in play", self.balls.len());
            return None;
        }
        Some(self.push_ball(pos, vel, color))
    }

    fn push_ball(&mut self, pos: Vec2, vel: Vec2, color: Vec3) -> u32 {
        let id = self.next_entity_id();
        let radius = self.settings.spawn.radius.max(f32::EPSILON);
        self.balls.push(Ball::new(id, pos, vel, radius, color));
        self.push_event(GameEvent::BallSpawned { ball_id: id });
        log::info!("Spawned ball {} ({} in play)", id, self.balls.len());
        id
    }

    /// Slide the paddle horizontally by `direction * speed * dt`, clamped to the arena
    pub fn move_paddle(&mut self, direction: f32, dt: f32) {
        if !self.paddle.is_active() {
            return;
        }
        let x = self.paddle.center().x + direction * self.settings.paddle.speed * dt;
        let Bounds { left, right, .. } = self.settings.bounds;
        self.paddle.set_x_clamped(x, left, right);
    }
}
