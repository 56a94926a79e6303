//! Commemorative magazine: a thin rectangular slab with a slight bow.

use crate::spawn::SpawnContext;
use glam::Vec3;

pub const WIDTH: f32 = 4.2;
pub const HEIGHT: f32 = 6.0;
pub const DEPTH: f32 = 0.35;
/// Cylindrical bow applied to the covers along x.
pub const BOW: f32 = 0.02;

const FACE_SHARE: f32 = 0.85;

/// Bow offset on z for a point at horizontal position `x`.
pub fn bow(x: f32) -> f32 {
    (x + WIDTH / 2.0).powi(2) * BOW
}

/// One point on a face or an edge of the bowed slab.
pub fn sample(ctx: &mut SpawnContext) -> Vec3 {
    if ctx.chance(FACE_SHARE) {
        let x = ctx.centered() * WIDTH;
        let y = ctx.centered() * HEIGHT;
        let z = ctx.sign() * DEPTH / 2.0 + bow(x);
        return Vec3::new(x, y, z);
    }

    // Spine, top/bottom edges, fore-edge.
    let z = ctx.centered() * DEPTH;
    let edge = ctx.random();
    if edge < 0.33 {
        Vec3::new(-WIDTH / 2.0, ctx.centered() * HEIGHT, z)
    } else if edge < 0.66 {
        Vec3::new(ctx.centered() * WIDTH, ctx.sign() * HEIGHT / 2.0, z)
    } else {
        Vec3::new(WIDTH / 2.0, ctx.centered() * HEIGHT, z)
    }
}
