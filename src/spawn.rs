//! Sampling context for shape strategies.
//!
//! Every shape strategy receives a [`SpawnContext`] describing which point is
//! being placed and exposing the random primitives the strategies share.

use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::f32::consts::{PI, TAU};

/// Context provided to shape strategies while filling a cloud.
///
/// ```ignore
/// fn ring(ctx: &mut SpawnContext) -> Vec3 {
///     let a = ctx.random_angle();
///     Vec3::new(a.cos() * 3.0, ctx.centered() * 0.2, a.sin() * 3.0)
/// }
/// ```
pub struct SpawnContext {
    /// Index of the point being placed (0 to count-1).
    pub index: usize,
    /// Total number of points in the cloud.
    pub count: usize,
    rng: SmallRng,
}

impl SpawnContext {
    /// Context seeded from OS entropy. Every cloud comes out different.
    pub fn new(count: usize) -> Self {
        Self::with_rng(count, SmallRng::from_entropy())
    }

    /// Context with a fixed seed, for benchmarks and tests.
    pub fn seeded(count: usize, seed: u64) -> Self {
        Self::with_rng(count, SmallRng::seed_from_u64(seed))
    }

    pub fn with_rng(count: usize, rng: SmallRng) -> Self {
        Self {
            index: 0,
            count,
            rng,
        }
    }

    /// Normalized position of the current point in the cloud (0.0 to 1.0).
    #[inline]
    pub fn progress(&self) -> f32 {
        self.index as f32 / self.count as f32
    }

    /// True once the index is past `fraction` of the cloud.
    ///
    /// Used for tail clusters such as the tree star or the bell clapper.
    #[inline]
    pub fn past_fraction(&self, fraction: f32) -> bool {
        self.index as f32 > self.count as f32 * fraction
    }

    // ========== Random primitives ==========

    /// Random f32 in `[0, 1)`.
    #[inline]
    pub fn random(&mut self) -> f32 {
        self.rng.gen()
    }

    /// Random f32 in `[min, max)`.
    #[inline]
    pub fn random_range(&mut self, min: f32, max: f32) -> f32 {
        self.rng.gen_range(min..max)
    }

    /// Random f32 in `[-0.5, 0.5)`.
    #[inline]
    pub fn centered(&mut self) -> f32 {
        self.rng.gen::<f32>() - 0.5
    }

    /// Either `1.0` or `-1.0` with equal probability.
    #[inline]
    pub fn sign(&mut self) -> f32 {
        if self.rng.gen::<bool>() {
            1.0
        } else {
            -1.0
        }
    }

    /// True with probability `p`.
    #[inline]
    pub fn chance(&mut self, p: f32) -> bool {
        self.rng.gen::<f32>() < p
    }

    /// Random angle in `[0, 2π)`.
    #[inline]
    pub fn random_angle(&mut self) -> f32 {
        self.rng.gen_range(0.0..TAU)
    }

    /// Random index in `[0, n)`.
    #[inline]
    pub fn random_index(&mut self, n: usize) -> usize {
        self.rng.gen_range(0..n)
    }

    // ========== Position helpers ==========

    /// Uniform point inside a disk in the XZ plane at y=0.
    pub fn random_in_disk(&mut self, radius: f32) -> Vec3 {
        let theta = self.random_angle();
        // sqrt for uniform area density
        let r = radius * self.random().sqrt();
        Vec3::new(r * theta.cos(), 0.0, r * theta.sin())
    }

    /// Point inside a sphere from a random radius and two random angles.
    ///
    /// Denser toward the centre, which is what the glowing cores want.
    pub fn random_in_sphere(&mut self, radius: f32) -> Vec3 {
        let r = self.random() * radius;
        let theta = self.random_angle();
        let phi = self.random_range(0.0, PI);
        Vec3::new(
            r * phi.sin() * theta.cos(),
            r * phi.sin() * theta.sin(),
            r * phi.cos(),
        )
    }

    /// Uniform point inside an axis-aligned box centred at `center`.
    pub fn random_in_box(&mut self, center: Vec3, size: Vec3) -> Vec3 {
        center
            + Vec3::new(
                self.centered() * size.x,
                self.centered() * size.y,
                self.centered() * size.z,
            )
    }

    /// Uniform point on the triangle `(a, b, c)`.
    ///
    /// Barycentric weights whose sum exceeds one are reflected back into
    /// the triangle instead of being rejected.
    pub fn sample_triangle(&mut self, a: Vec3, b: Vec3, c: Vec3) -> Vec3 {
        let mut r1 = self.random();
        let mut r2 = self.random();
        if r1 + r2 > 1.0 {
            r1 = 1.0 - r1;
            r2 = 1.0 - r2;
        }
        let r3 = 1.0 - r1 - r2;
        a * r1 + b * r2 + c * r3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress() {
        let mut ctx = SpawnContext::seeded(100, 1);
        ctx.index = 50;
        assert!((ctx.progress() - 0.5).abs() < 0.001);
        assert!(ctx.past_fraction(0.4));
        assert!(!ctx.past_fraction(0.5));
    }

    #[test]
    fn test_random_in_disk_bounds() {
        let mut ctx = SpawnContext::seeded(1, 7);
        for _ in 0..500 {
            let p = ctx.random_in_disk(2.0);
            assert_eq!(p.y, 0.0);
            assert!(p.length() <= 2.0 + 1e-4);
        }
    }

    #[test]
    fn test_random_in_sphere_bounds() {
        let mut ctx = SpawnContext::seeded(1, 3);
        for _ in 0..500 {
            assert!(ctx.random_in_sphere(1.5).length() <= 1.5 + 1e-4);
        }
    }

    #[test]
    fn test_sample_triangle_stays_inside() {
        let mut ctx = SpawnContext::seeded(1, 11);
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(1.0, 0.0, 0.0);
        let c = Vec3::new(0.0, 1.0, 0.0);
        for _ in 0..1000 {
            let p = ctx.sample_triangle(a, b, c);
            assert!(p.x >= -1e-6 && p.y >= -1e-6);
            assert!(p.x + p.y <= 1.0 + 1e-5);
            assert_eq!(p.z, 0.0);
        }
    }

    #[test]
    fn test_sign_and_centered() {
        let mut ctx = SpawnContext::seeded(1, 5);
        for _ in 0..200 {
            let s = ctx.sign();
            assert!(s == 1.0 || s == -1.0);
            let c = ctx.centered();
            assert!((-0.5..0.5).contains(&c));
        }
    }
}
