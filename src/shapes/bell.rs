//! Christmas bell: a flared surface of revolution with a clapper below.

use crate::spawn::SpawnContext;
use glam::Vec3;

pub const HEIGHT: f32 = 5.5;
/// Radius at the crown of the bell.
pub const TOP_RADIUS: f32 = 1.6;
/// Height below which the flare starts growing.
pub const FLARE_START: f32 = 1.8;
pub const FLARE_EXPONENT: f32 = 1.6;
pub const FLARE_SCALE: f32 = 0.75;
/// Points past this fraction of the cloud form the clapper.
pub const CLAPPER_FRACTION: f32 = 0.92;
pub const CLAPPER_Y: f32 = -3.2;
pub const CLAPPER_SIZE: f32 = 0.8;

/// Bell radius at height `y`. Grows monotonically toward the mouth.
pub fn radius_at(y: f32) -> f32 {
    TOP_RADIUS + (FLARE_START - y).max(0.0).powf(FLARE_EXPONENT) * FLARE_SCALE
}

/// One point on the bell surface, or in the clapper for the last points.
pub fn sample(ctx: &mut SpawnContext) -> Vec3 {
    if ctx.past_fraction(CLAPPER_FRACTION) {
        return ctx.random_in_box(
            Vec3::new(0.0, CLAPPER_Y, 0.0),
            Vec3::splat(CLAPPER_SIZE),
        );
    }

    let y = ctx.centered() * HEIGHT;
    let angle = ctx.random_angle();
    let r = radius_at(y);
    Vec3::new(angle.cos() * r, y, angle.sin() * r)
}
