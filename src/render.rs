//! Render snapshot
//!
//! Flattens the world into a list of plain instances a drawing backend can
//! upload as-is. Inactive bricks are skipped; destructible bricks carry their
//! damage-tinted color.

use bytemuck::{Pod, Zeroable};

use crate::sim::{Ball, Brick, World};

/// Shape tag stored in `ShapeInstance::kind`
pub mod shape_kind {
    pub const RECT: u32 = 0;
    pub const CIRCLE: u32 = 1;
}

/// One drawable shape
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ShapeInstance {
    pub center: [f32; 2],
    /// Half-extents for rects, `[radius, radius]` for circles
    pub extents: [f32; 2],
    pub color: [f32; 4],
    pub kind: u32,
    pub _pad: [u32; 3],
}

impl ShapeInstance {
    pub fn rect(brick: &Brick) -> Self {
        Self {
            center: brick.center().to_array(),
            extents: brick.half_extents().to_array(),
            color: brick.display_color().extend(1.0).to_array(),
            kind: shape_kind::RECT,
            _pad: [0; 3],
        }
    }

    pub fn circle(ball: &Ball) -> Self {
        Self {
            center: ball.pos.to_array(),
            extents: [ball.radius; 2],
            color: ball.color.extend(1.0).to_array(),
            kind: shape_kind::CIRCLE,
            _pad: [0; 3],
        }
    }
}

/// Bricks, then the paddle, then balls (back to front)
pub fn snapshot(world: &World) -> Vec<ShapeInstance> {
    let mut out = Vec::with_capacity(world.bricks().len() + world.balls().len() + 1);
    out.extend(
        world
            .bricks()
            .iter()
            .chain(std::iter::once(world.paddle()))
            .filter(|b| b.is_active())
            .map(ShapeInstance::rect),
    );
    out.extend(world.balls().iter().map(ShapeInstance::circle));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Settings;
    use crate::sim::collision::resolve_ball_brick;

    #[test]
    fn test_snapshot_counts() {
        let world = World::new(Settings::default());
        let shapes = snapshot(&world);
        assert_eq!(shapes.len(), world.bricks().len() + 1 + world.balls().len());
        assert_eq!(
            shapes.iter().filter(|s| s.kind == shape_kind::CIRCLE).count(),
            1
        );
        assert_eq!(std::mem::size_of::<ShapeInstance>(), 48);
        assert_eq!(bytemuck::cast_slice::<_, u8>(&shapes).len(), shapes.len() * 48);
    }

    #[test]
    fn test_destroyed_bricks_not_drawn() {
        let mut world = World::new(Settings::default());
        let before = snapshot(&world).len();
        let target = world.bricks()[0].center();
        let mut probe = world.balls()[0].clone();
        // Hit the first (4 hp) brick until it switches off
        for _ in 0..4 {
            probe.pos = target;
            resolve_ball_brick(&mut probe, &mut world.bricks_mut()[0]);
        }
        assert!(!world.bricks()[0].is_active());
        assert_eq!(snapshot(&world).len(), before - 1);
    }
}
