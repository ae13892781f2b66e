//! Deterministic simulation module
//!
//! All gameplay logic lives here:
//! - Unit step per tick, seeded RNG only
//! - Stable iteration order (insertion order of bricks and balls)
//! - No rendering or platform dependencies

pub mod ball;
pub mod brick;
pub mod collision;
pub mod layout;
pub mod shapes;
pub mod state;
pub mod tick;

pub use ball::{Ball, Wall, WallHits};
pub use brick::{Brick, BrickKind, HitOutcome};
pub use collision::{
    BrickContact, PairContact, reflect_velocity, resolve_ball_brick, resolve_ball_pair,
};
pub use layout::build_spiral;
pub use shapes::{Aabb, Bounds, CircleShape, circle_overlaps_box, circle_overlaps_circle};
pub use state::{GameEvent, World};
pub use tick::{TickInput, clamp_frame_dt, tick};
