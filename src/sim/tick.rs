//! Per-tick simulation pipeline
//!
//! Order within a tick: paddle input, spawn, integrate, walls, ball-paddle,
//! ball-brick, ball-ball. Rendering reads the world afterwards.

use super::brick::HitOutcome;
use super::collision::{resolve_ball_brick, resolve_ball_pair};
use super::state::{GameEvent, World};
use crate::consts::SIM_STEP;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Paddle moves left this tick
    pub move_left: bool,
    /// Paddle moves right this tick
    pub move_right: bool,
    /// Spawn a ball (one per tick at most, subject to the ball cap)
    pub spawn: bool,
}

impl TickInput {
    /// -1, 0 or +1 paddle direction
    pub fn paddle_direction(&self) -> f32 {
        match (self.move_left, self.move_right) {
            (true, false) => -1.0,
            (false, true) => 1.0,
            _ => 0.0,
        }
    }
}

/// Clamp a measured frame delta to `[0, max_dt]`.
///
/// A negative or NaN `max_dt` is treated as 0, so the result is always a
/// finite, non-negative delta.
#[inline]
pub fn clamp_frame_dt(dt: f32, max_dt: f32) -> f32 {
    if !dt.is_finite() {
        return 0.0;
    }
    // f32::max ignores NaN, so a NaN limit collapses to 0
    dt.max(0.0).min(max_dt.max(0.0))
}

/// Advance the world by one tick.
///
/// `frame_dt` is the measured frame time; it is clamped and only drives the
/// paddle. Balls always integrate a single unit step per tick.
pub fn tick(world: &mut World, input: &TickInput, frame_dt: f32) {
    let dt = clamp_frame_dt(frame_dt, world.settings.max_frame_dt);
    world.time_ticks += 1;

    let direction = input.paddle_direction();
    if direction != 0.0 {
        world.move_paddle(direction, dt);
    }

    if input.spawn {
        world.spawn_ball();
    }

    integrate_and_bound(world);
    resolve_brick_collisions(world);
    resolve_ball_collisions(world);
}

/// Move every ball, then bounce it off the arena walls
pub fn integrate_and_bound(world: &mut World) {
    let bounds = world.settings.bounds;
    let mut events = Vec::new();
    for ball in &mut world.balls {
        ball.integrate(SIM_STEP);
        let hits = ball.resolve_world_bounds(&bounds);
        events.extend(hits.iter().map(|wall| GameEvent::WallBounce {
            ball_id: ball.id,
            wall,
        }));
    }
    world.events.extend(events);
}

/// All balls against the paddle first, then every ball against every brick
pub fn resolve_brick_collisions(world: &mut World) {
    let World {
        balls,
        paddle,
        bricks,
        events,
        ..
    } = world;

    for ball in balls.iter_mut() {
        if resolve_ball_brick(ball, paddle).is_some() {
            events.push(GameEvent::PaddleHit { ball_id: ball.id });
        }
    }

    for ball in balls.iter_mut() {
        for (brick_index, brick) in bricks.iter_mut().enumerate() {
            let Some(contact) = resolve_ball_brick(ball, brick) else {
                continue;
            };
            events.push(GameEvent::BrickHit {
                ball_id: ball.id,
                brick_index,
            });
            if contact.outcome == HitOutcome::Destroyed {
                log::debug!("Brick {} destroyed by ball {}", brick_index, ball.id);
                events.push(GameEvent::BrickDestroyed {
                    ball_id: ball.id,
                    brick_index,
                    pos: brick.center(),
                });
            }
        }
    }
}

/// Every unordered pair of balls, by index
pub fn resolve_ball_collisions(world: &mut World) {
    let World { balls, events, .. } = world;
    for i in 0..balls.len() {
        for j in (i + 1)..balls.len() {
            let (head, tail) = balls.split_at_mut(j);
            let (a, b) = (&mut head[i], &mut tail[0]);
            let approached = resolve_ball_pair(a, b).is_some_and(|c| c.impulse.is_some());
            if approached {
                events.push(GameEvent::BallsCollided { a: a.id, b: b.id });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;
    use crate::sim::ball::Wall;
    use crate::sim::brick::{Brick, BrickKind};
    use glam::{Vec2, Vec3};

    fn empty_world() -> World {
        World::empty(Settings::default())
    }

    #[test]
    fn test_clamp_frame_dt() {
        assert_eq!(clamp_frame_dt(1.5, MAX_FRAME_DT), MAX_FRAME_DT);
        assert_eq!(clamp_frame_dt(-0.1, MAX_FRAME_DT), 0.0);
        assert_eq!(clamp_frame_dt(f32::NAN, MAX_FRAME_DT), 0.0);
        assert_eq!(clamp_frame_dt(0.01, MAX_FRAME_DT), 0.01);
    }

    #[test]
    fn test_clamp_frame_dt_with_bad_limit() {
        assert_eq!(clamp_frame_dt(0.01, -1.0), 0.0);
        assert_eq!(clamp_frame_dt(0.01, f32::NAN), 0.0);
        assert_eq!(clamp_frame_dt(0.01, f32::INFINITY), 0.01);
    }

    #[test]
    fn test_tick_survives_negative_frame_limit() {
        let mut settings = Settings::default();
        settings.max_frame_dt = -1.0;
        let mut world = World::new(settings);

        // Also after construction, through the public settings field
        world.settings.max_frame_dt = -1.0;
        let input = TickInput {
            move_left: true,
            ..Default::default()
        };
        let x = world.paddle().center().x;
        tick(&mut world, &input, 0.016);
        world.settings.max_frame_dt = f32::NAN;
        tick(&mut world, &input, 0.016);
        assert_eq!(world.paddle().center().x, x);
        assert_eq!(world.time_ticks, 2);
    }

    #[test]
    fn test_paddle_moves_with_clamped_dt() {
        let mut world = empty_world();
        let start = world.paddle().center().x;
        let input = TickInput {
            move_right: true,
            ..Default::default()
        };
        // A long stall only moves the paddle one clamped frame's worth
        tick(&mut world, &input, 10.0);
        let moved = world.paddle().center().x - start;
        assert!((moved - PADDLE_SPEED * MAX_FRAME_DT).abs() < 1e-5);

        let both = TickInput {
            move_left: true,
            move_right: true,
            ..Default::default()
        };
        let x = world.paddle().center().x;
        tick(&mut world, &both, 0.016);
        assert_eq!(world.paddle().center().x, x);
    }

    #[test]
    fn test_spawn_input_one_per_tick() {
        let mut world = empty_world();
        let spawn = TickInput {
            spawn: true,
            ..Default::default()
        };
        for _ in 0..3 {
            tick(&mut world, &spawn, 0.016);
        }
        assert_eq!(world.balls().len(), 3);
        for _ in 0..40 {
            tick(&mut world, &spawn, 0.016);
        }
        assert_eq!(world.balls().len(), MAX_BALLS);
    }

    #[test]
    fn test_ball_integrates_one_step_regardless_of_dt() {
        let mut world = empty_world();
        world.insert_ball(Vec2::ZERO, Vec2::new(0.01, 0.0), Vec3::ONE);
        tick(&mut world, &TickInput::default(), 0.001);
        assert!((world.balls()[0].pos.x - 0.01).abs() < 1e-6);
        tick(&mut world, &TickInput::default(), 0.03);
        assert!((world.balls()[0].pos.x - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_wall_bounce_event() {
        let mut world = empty_world();
        let id = world
            .insert_ball(Vec2::new(0.94, 0.0), Vec2::new(0.02, 0.0), Vec3::ONE)
            .expect("room");
        tick(&mut world, &TickInput::default(), 0.016);
        let events = world.drain_events();
        assert!(events.contains(&GameEvent::WallBounce {
            ball_id: id,
            wall: Wall::Right
        }));
        assert!(world.balls()[0].vel.x < 0.0);
    }

    #[test]
    fn test_ball_breaks_brick_over_ticks() {
        let mut world = empty_world();
        world.bricks_mut().push(Brick::new(
            BrickKind::Destructible,
            Vec2::new(0.0, 0.5),
            Vec2::new(0.12, 0.10),
            Vec3::new(1.0, 0.0, 0.0),
            2,
        ));
        world.insert_ball(Vec2::new(0.0, 0.39), Vec2::new(0.0, 0.01), Vec3::ONE);

        let mut destroyed = false;
        for _ in 0..2000 {
            tick(&mut world, &TickInput::default(), 0.016);
            if world
                .drain_events()
                .iter()
                .any(|e| matches!(e, GameEvent::BrickDestroyed { brick_index: 0, .. }))
            {
                destroyed = true;
                break;
            }
        }
        assert!(destroyed);
        assert!(!world.bricks()[0].is_active());
        assert_eq!(world.bricks()[0].hits_taken(), 2);
        assert_eq!(world.active_brick_count(), 0);
    }

    #[test]
    fn test_paddle_resolved_before_bricks() {
        let mut world = empty_world();
        let id = world
            .insert_ball(Vec2::new(0.0, -0.77), Vec2::new(0.0, -0.01), Vec3::ONE)
            .expect("room");
        world.drain_events();
        tick(&mut world, &TickInput::default(), 0.016);
        let events = world.drain_events();
        assert_eq!(events, vec![GameEvent::PaddleHit { ball_id: id }]);
        assert!(world.balls()[0].vel.y > 0.0);
    }

    #[test]
    fn test_balls_collide_in_pipeline() {
        let mut world = empty_world();
        let a = world
            .insert_ball(Vec2::new(-0.05, 0.0), Vec2::new(0.01, 0.0), Vec3::ONE)
            .expect("room");
        let b = world
            .insert_ball(Vec2::new(0.05, 0.0), Vec2::new(-0.01, 0.0), Vec3::ZERO)
            .expect("room");
        tick(&mut world, &TickInput::default(), 0.016);
        let events = world.drain_events();
        assert!(events.contains(&GameEvent::BallsCollided { a, b }));
        assert!(world.balls()[0].vel.x < 0.0);
        assert!(world.balls()[1].vel.x > 0.0);
        let d = world.balls()[0].pos.distance(world.balls()[1].pos);
        assert!(d >= 2.0 * BALL_RADIUS);
    }

    #[test]
    fn test_determinism() {
        let mut w1 = World::new(Settings::default());
        let mut w2 = World::new(Settings::default());

        let inputs = [
            TickInput {
                spawn: true,
                ..Default::default()
            },
            TickInput {
                move_left: true,
                ..Default::default()
            },
            TickInput {
                spawn: true,
                move_right: true,
                ..Default::default()
            },
            TickInput::default(),
        ];

        for _ in 0..100 {
            for input in &inputs {
                tick(&mut w1, input, 0.016);
                tick(&mut w2, input, 0.016);
            }
        }

        assert_eq!(w1.time_ticks, w2.time_ticks);
        assert_eq!(w1.balls().len(), w2.balls().len());
        for (a, b) in w1.balls().iter().zip(w2.balls()) {
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.color, b.color);
        }
        assert_eq!(w1.active_brick_count(), w2.active_brick_count());
    }

    #[test]
    fn test_invariants_hold_over_long_run() {
        let mut world = World::new(Settings::default());
        let spawn = TickInput {
            spawn: true,
            ..Default::default()
        };
        for i in 0..3000 {
            let input = if i % 50 == 0 { spawn.clone() } else { TickInput::default() };
            tick(&mut world, &input, 0.016);
            for brick in world.bricks() {
                assert!(brick.hits_taken() <= brick.max_hits());
                if brick.kind == BrickKind::Reflective {
                    assert_eq!(brick.hits_taken(), 0);
                }
            }
            for ball in world.balls() {
                assert!((MIN_SPEED_SCALE..=MAX_SPEED_SCALE).contains(&ball.speed_scale()));
                for ch in ball.color.to_array() {
                    assert!((0.0..=1.0).contains(&ch));
                }
            }
        }
    }
}
