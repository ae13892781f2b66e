//! Spiral Arena headless driver
//!
//! Runs the simulation with a scripted input pattern and logs a summary.
//! Usage: `spiral-arena [settings.json] [ticks]`

use spiral_arena::Settings;
use spiral_arena::render::snapshot;
use spiral_arena::sim::{GameEvent, TickInput, World, tick};

/// Nominal frame time fed to the tick (60 Hz)
const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_TICKS: u64 = 3600;

/// Sweep the paddle back and forth and add a ball every two seconds
fn scripted_input(tick_index: u64) -> TickInput {
    let phase = (tick_index / 90) % 2;
    TickInput {
        move_left: phase == 0,
        move_right: phase == 1,
        spawn: tick_index % 120 == 0,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => Settings::load_from(path),
        None => Settings::default(),
    };
    let ticks = args
        .next()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_TICKS);

    let mut world = World::new(settings);
    let mut destroyed = 0usize;
    let mut ball_hits = 0usize;

    for i in 0..ticks {
        tick(&mut world, &scripted_input(i), FRAME_DT);
        for event in world.drain_events() {
            match event {
                GameEvent::BrickDestroyed { .. } => destroyed += 1,
                GameEvent::BallsCollided { .. } => ball_hits += 1,
                _ => {}
            }
        }
    }

    let balls = world.balls();
    let mean_scale = if balls.is_empty() {
        0.0
    } else {
        balls.iter().map(|b| b.speed_scale()).sum::<f32>() / balls.len() as f32
    };

    log::info!(
        "{} ticks: {} balls, {}/{} bricks standing, {} destroyed, {} ball-ball hits, mean speed scale {:.2}",
        world.time_ticks,
        balls.len(),
        world.active_brick_count(),
        world.bricks().len(),
        destroyed,
        ball_hits,
        mean_scale
    );
    log::info!("Final frame: {} shapes", snapshot(&world).len());
}

#[cfg(target_arch = "wasm32")]
fn main() {}
