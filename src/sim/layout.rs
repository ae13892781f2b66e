//! Spiral brick layout
//!
//! Bricks are placed along an Archimedean-style spiral: radius and angle both
//! interpolate linearly with the normalized index, and the y axis is squashed
//! so the spiral reads as an ellipse.

use glam::Vec2;

use super::brick::{Brick, BrickKind};
use crate::cosine_palette;
use crate::settings::LayoutSettings;

/// Build the spiral arrangement described by `layout`
pub fn build_spiral(layout: &LayoutSettings) -> Vec<Brick> {
    let count = layout.count;
    let theta_start = layout.angle_start_deg.to_radians();
    let theta_end = layout.angle_end_deg.to_radians();

    let bricks: Vec<Brick> = (0..count)
        .map(|i| {
            let t = if count > 1 {
                i as f32 / (count - 1) as f32
            } else {
                0.0
            };
            let r = layout.radius_start + t * (layout.radius_end - layout.radius_start);
            let theta = theta_start + t * (theta_end - theta_start);
            let center = Vec2::new(r * theta.cos(), r * theta.sin() * layout.y_squash);

            let big = layout.big_every > 0 && i % layout.big_every == 0;
            let size = if big { layout.big_size } else { layout.small_size };

            let kind = if i % 2 == 0 {
                BrickKind::Destructible
            } else {
                BrickKind::Reflective
            };
            let hp = match (kind, big) {
                (BrickKind::Destructible, true) => layout.big_hits,
                (BrickKind::Destructible, false) => layout.small_hits,
                (BrickKind::Reflective, _) => 1,
            };

            Brick::new(kind, center, size, cosine_palette(t), hp)
        })
        .collect();

    log::info!(
        "Spiral layout: {} bricks, r {:.2}..{:.2}, theta {:.0}..{:.0} deg",
        bricks.len(),
        layout.radius_start,
        layout.radius_end,
        layout.angle_start_deg,
        layout.angle_end_deg
    );
    bricks
}
