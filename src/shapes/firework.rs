//! Firework burst: particles strung along evenly spread rays.
//!
//! Ray directions follow a golden-spiral layout: the polar angle comes from
//! `acos` of the ray's index fraction and the azimuth sweeps proportionally
//! to it, which spreads the rays over the whole sphere. Every tenth point
//! is pulled into a small core sphere instead.

use crate::spawn::SpawnContext;
use glam::Vec3;
use std::f32::consts::PI;

pub const RAYS: usize = 24;
/// Per-point angular jitter around the ray direction, in radians.
pub const RAY_JITTER: f32 = 0.2;
/// Shortest possible ray.
pub const MIN_RADIUS: f32 = 6.5;
/// Extra random length added to [`MIN_RADIUS`].
pub const RADIUS_SPREAD: f32 = 2.0;
/// Exponent below one pushes mass toward the outer end of each ray.
pub const RADIAL_BIAS: f32 = 0.6;
/// Every n-th point belongs to the core.
pub const CORE_STRIDE: usize = 10;
pub const CORE_RADIUS: f32 = 1.5;

/// Polar and azimuthal angle of ray `k`.
pub fn ray_angles(k: usize) -> (f32, f32) {
    let phi = (2.0 * (k as f32 / RAYS as f32) - 1.0).acos();
    let theta = (RAYS as f32 * PI).sqrt() * phi;
    (phi, theta)
}

/// Largest distance from the origin a firework point can have.
pub const MAX_RADIUS: f32 = MIN_RADIUS + RADIUS_SPREAD;

/// One point along a burst ray, or in the core for every tenth point.
pub fn sample(ctx: &mut SpawnContext) -> Vec3 {
    if ctx.index % CORE_STRIDE == 0 {
        return ctx.random_in_sphere(CORE_RADIUS);
    }

    let (phi, theta) = ray_angles(ctx.index % RAYS);
    let phi = phi + ctx.centered() * RAY_JITTER;
    let theta = theta + ctx.centered() * RAY_JITTER;

    let max_radius = MIN_RADIUS + ctx.random() * RADIUS_SPREAD;
    let r = ctx.random().powf(RADIAL_BIAS) * max_radius;

    Vec3::new(
        r * phi.sin() * theta.cos(),
        r * phi.sin() * theta.sin(),
        r * phi.cos(),
    )
}
