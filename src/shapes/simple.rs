//! Lighter-weight shapes: star, heart, and a few box-built objects.
//!
//! The box-built shapes assign each point to one named part by a fixed
//! probability split and then sample that part's box uniformly.

use crate::spawn::SpawnContext;
use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};

pub const STAR_POINTS: usize = 5;
pub const STAR_OUTER_RADIUS: f32 = 4.0;
pub const STAR_INNER_RADIUS: f32 = 1.8;
pub const STAR_DEPTH: f32 = 0.8;

/// Scale applied to the unit heart curve (which spans about ±16 in x).
pub const HEART_SCALE: f32 = 0.25;
pub const HEART_DEPTH: f32 = 1.2;

/// A box-shaped part: centre and full size.
#[derive(Clone, Copy, Debug)]
pub struct Part {
    pub center: Vec3,
    pub size: Vec3,
}

impl Part {
    const fn new(center: Vec3, size: Vec3) -> Self {
        Self { center, size }
    }

    fn sample(&self, ctx: &mut SpawnContext) -> Vec3 {
        ctx.random_in_box(self.center, self.size)
    }
}

pub const FUSELAGE: Part = Part::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(8.0, 1.0, 1.0));
pub const WINGS: Part = Part::new(Vec3::new(0.5, 0.0, 0.0), Vec3::new(1.6, 0.2, 9.0));
pub const TAIL_FIN: Part = Part::new(Vec3::new(-3.5, 1.0, 0.0), Vec3::new(1.0, 2.0, 0.2));
pub const TAIL_PLANE: Part = Part::new(Vec3::new(-3.5, 0.2, 0.0), Vec3::new(1.0, 0.2, 3.0));

pub const BRUSH_HANDLE: Part = Part::new(Vec3::new(0.0, -1.0, 0.0), Vec3::new(0.6, 7.0, 0.35));
pub const BRUSH_HEAD: Part = Part::new(Vec3::new(0.45, 3.3, 0.0), Vec3::new(0.7, 1.6, 0.5));

pub const SOCK_LEG: Part = Part::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(2.0, 5.0, 1.2));
pub const SOCK_FOOT: Part = Part::new(Vec3::new(1.4, -2.0, 0.0), Vec3::new(4.8, 1.8, 1.2));

/// Corner `k` of the star outline. Even corners are tips, odd are notches.
fn star_corner(k: usize) -> Vec3 {
    let angle = k as f32 * PI / STAR_POINTS as f32 + FRAC_PI_2;
    let r = if k % 2 == 0 {
        STAR_OUTER_RADIUS
    } else {
        STAR_INNER_RADIUS
    };
    Vec3::new(angle.cos() * r, angle.sin() * r, 0.0)
}

/// Filled star prism in the XY plane.
pub fn star(ctx: &mut SpawnContext) -> Vec3 {
    let k = ctx.random_index(STAR_POINTS * 2);
    let a = star_corner(k);
    let b = star_corner((k + 1) % (STAR_POINTS * 2));
    let p = ctx.sample_triangle(Vec3::ZERO, a, b);
    Vec3::new(p.x, p.y, ctx.centered() * STAR_DEPTH)
}

/// Point on the classic heart curve at parameter `t`, unscaled.
pub fn heart_curve(t: f32) -> (f32, f32) {
    let x = 16.0 * t.sin().powi(3);
    let y = 13.0 * t.cos() - 5.0 * (2.0 * t).cos() - 2.0 * (3.0 * t).cos() - (4.0 * t).cos();
    (x, y)
}

/// Heart outline, filled toward its centre, with depth jitter.
pub fn heart(ctx: &mut SpawnContext) -> Vec3 {
    let t = ctx.random_angle();
    let (x, y) = heart_curve(t);
    // Bias toward the outline so the silhouette reads clearly.
    let fill = ctx.random().powf(0.3);
    let s = HEART_SCALE * fill;
    Vec3::new(x * s, y * s + 0.5, ctx.centered() * HEART_DEPTH)
}

/// Fuselage 40%, wings 40%, tail 20%.
pub fn airplane(ctx: &mut SpawnContext) -> Vec3 {
    let part = ctx.random();
    if part < 0.4 {
        FUSELAGE.sample(ctx)
    } else if part < 0.8 {
        WINGS.sample(ctx)
    } else if ctx.chance(0.5) {
        TAIL_FIN.sample(ctx)
    } else {
        TAIL_PLANE.sample(ctx)
    }
}

/// Handle 70%, bristle head 30%.
pub fn toothbrush(ctx: &mut SpawnContext) -> Vec3 {
    if ctx.chance(0.7) {
        BRUSH_HANDLE.sample(ctx)
    } else {
        BRUSH_HEAD.sample(ctx)
    }
}

/// Leg 70%, foot 30%.
pub fn sock(ctx: &mut SpawnContext) -> Vec3 {
    if ctx.chance(0.7) {
        SOCK_LEG.sample(ctx)
    } else {
        SOCK_FOOT.sample(ctx)
    }
}
