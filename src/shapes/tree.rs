//! Christmas tree: a filled cone with a star above the apex.

use crate::spawn::SpawnContext;
use glam::Vec3;

/// Total cone height. The cone spans `y ∈ [-HEIGHT/2, HEIGHT/2]`.
pub const HEIGHT: f32 = 10.0;
/// Cone radius at the base.
pub const BASE_RADIUS: f32 = 4.0;
/// Points past this fraction of the cloud form the star.
pub const STAR_FRACTION: f32 = 0.96;
/// Star cluster centre height.
pub const STAR_Y: f32 = 5.2;
/// Star disk radius.
pub const STAR_RADIUS: f32 = 0.6;
/// Vertical thickness of the star cluster.
pub const STAR_THICKNESS: f32 = 0.4;

/// One point of the cone, or of the star for the last points.
pub fn sample(ctx: &mut SpawnContext) -> Vec3 {
    if ctx.past_fraction(STAR_FRACTION) {
        let angle = ctx.random_angle();
        let dist = ctx.random() * STAR_RADIUS;
        return Vec3::new(
            angle.cos() * dist,
            STAR_Y + ctx.centered() * STAR_THICKNESS,
            angle.sin() * dist,
        );
    }

    let height = ctx.random() * HEIGHT;
    let radius = (1.0 - height / HEIGHT) * BASE_RADIUS;
    let p = ctx.random_in_disk(radius);
    Vec3::new(p.x, height - HEIGHT / 2.0, p.z)
}
