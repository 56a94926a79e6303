//! Per-frame particle animation.
//!
//! [`ParticleAnimator`] owns the live position buffer and moves it toward the
//! active target cloud once per rendered frame. Motion is an exponential
//! approach: each tick closes a fixed fraction of the remaining distance and
//! adds a little jitter.
//!
//! # Fireworks
//!
//! Selecting [`ShapeId::Firework`] runs a two-phase sequence:
//!
//! 1. **Launching** - every particle is reset to the launch origin and then
//!    chases a rocket head rising along the vertical axis, trailing an
//!    exhaust tail beneath it.
//! 2. **Burst** - once the launch duration has elapsed the particles fly
//!    toward the ray-burst target with looser, livelier motion.
//!
//! The switch is purely time-based and only runs forward; the next shape
//! selection starts over.
//!
//! # Glow layer
//!
//! A sparser glow cloud trails a strided subset of the main target. During
//! a firework launch it instead follows the rocket head.

use crate::cloud::PointCloud;
use crate::config::AnimatorConfig;
use crate::shape::ShapeId;
use glam::Vec3;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Firework phase state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FireworkPhase {
    /// The active shape is not a firework.
    Idle,
    /// Rising toward the burst centre since `started_at` (scene seconds).
    Launching { started_at: f32 },
    /// Exploded; particles head for the ray-burst target.
    Burst,
}

impl FireworkPhase {
    /// True while the rocket is still rising.
    pub fn is_launching(&self) -> bool {
        matches!(self, FireworkPhase::Launching { .. })
    }
}

/// Owns the current, target and glow buffers and advances them per frame.
pub struct ParticleAnimator {
    config: AnimatorConfig,
    shape: ShapeId,
    current: PointCloud,
    target: PointCloud,
    glow: PointCloud,
    glow_target: PointCloud,
    phase: FireworkPhase,
    rotation: f32,
    rng: SmallRng,
}

impl ParticleAnimator {
    /// Start at rest on `initial`, which is also the first target.
    pub fn new(shape: ShapeId, initial: PointCloud, config: AnimatorConfig) -> Self {
        let mut glow_target = PointCloud::zeroed(config.glow_count);
        stride_into(&initial, &mut glow_target, config.glow_stride);

        Self {
            shape,
            current: initial.clone(),
            target: initial,
            glow: glow_target.clone(),
            glow_target,
            phase: FireworkPhase::Idle,
            rotation: 0.0,
            rng: SmallRng::from_entropy(),
            config,
        }
    }

    /// Replace the target cloud.
    ///
    /// Current positions are left alone so the change animates, except for
    /// fireworks, which snap every particle to the launch origin and start
    /// the launch phase at `elapsed`.
    pub fn on_shape_selected(&mut self, shape: ShapeId, target: PointCloud, elapsed: f32) {
        debug_assert_eq!(
            target.len(),
            self.current.len(),
            "target cloud must match the particle count"
        );

        self.shape = shape;
        self.target = target;
        stride_into(&self.target, &mut self.glow_target, self.config.glow_stride);

        if shape == ShapeId::Firework {
            self.current.fill(self.config.launch_origin);
            self.glow.fill(self.config.launch_origin);
            self.phase = FireworkPhase::Launching { started_at: elapsed };
            log::debug!("firework launching at t={:.2}s", elapsed);
        } else {
            self.phase = FireworkPhase::Idle;
        }
    }

    /// Advance one frame.
    ///
    /// `elapsed` is scene time in seconds, `delta` the time since the last
    /// frame. Only `delta` affects rotation, so rotation is reproducible.
    pub fn tick(&mut self, elapsed: f32, delta: f32) {
        if let FireworkPhase::Launching { started_at } = self.phase {
            if self.launch_complete(started_at, elapsed) {
                // The glow leaves the rocket column for the burst cloud.
                stride_into(&self.target, &mut self.glow_target, self.config.glow_stride);
                self.phase = FireworkPhase::Burst;
                log::debug!("firework burst at t={:.2}s", elapsed);
            }
        }

        match self.phase {
            FireworkPhase::Launching { started_at } => self.tick_launch(started_at, elapsed),
            FireworkPhase::Burst => {
                let (k, j) = (self.config.burst_smoothing, self.config.burst_jitter);
                self.tick_toward_target(k, j);
            }
            FireworkPhase::Idle => {
                let (k, j) = (self.config.smoothing, self.config.jitter);
                self.tick_toward_target(k, j);
            }
        }

        self.rotation += delta * self.rotation_rate();
    }

    /// True once `elapsed` is at least one launch duration after `started_at`.
    #[inline]
    fn launch_complete(&self, started_at: f32, elapsed: f32) -> bool {
        elapsed - started_at >= self.config.launch_duration
    }

    /// Rocket head position at `elapsed` for a launch that began at `started_at`.
    pub fn rocket_head(&self, started_at: f32, elapsed: f32) -> Vec3 {
        let t = ((elapsed - started_at) / self.config.launch_duration).clamp(0.0, 1.0);
        self.config.launch_origin.lerp(self.config.burst_center, t)
    }

    /// Where particle `i` is being steered at `elapsed`, ignoring jitter.
    ///
    /// During a launch this is the rocket head; otherwise the particle's own
    /// target point.
    pub fn steering_target(&self, i: usize, elapsed: f32) -> Vec3 {
        match self.phase {
            FireworkPhase::Launching { started_at }
                if !self.launch_complete(started_at, elapsed) =>
            {
                self.rocket_head(started_at, elapsed)
            }
            _ => self.target.point(i),
        }
    }

    fn tick_toward_target(&mut self, smoothing: f32, jitter: f32) {
        approach(
            self.current.as_mut_slice(),
            self.target.as_slice(),
            smoothing,
            jitter,
            &mut self.rng,
        );
        approach(
            self.glow.as_mut_slice(),
            self.glow_target.as_slice(),
            self.config.glow_smoothing,
            0.0,
            &mut self.rng,
        );
    }

    fn tick_launch(&mut self, started_at: f32, elapsed: f32) {
        let head = self.rocket_head(started_at, elapsed);
        let k = self.config.launch_smoothing;
        let tail = self.config.tail_length;

        for p in self.current.as_mut_slice().chunks_exact_mut(3) {
            let tail_y = if tail > 0.0 {
                head.y - self.rng.gen::<f32>() * tail
            } else {
                head.y
            };
            p[0] += (head.x - p[0]) * k;
            p[1] += (tail_y - p[1]) * k;
            p[2] += (head.z - p[2]) * k;
        }

        // The glow follows the rocket, not the burst it is about to become.
        let reference_y = if self.current.is_empty() {
            head.y
        } else {
            self.current.point(0).y
        };
        self.glow_target
            .fill(Vec3::new(head.x, reference_y, head.z));
        approach(
            self.glow.as_mut_slice(),
            self.glow_target.as_slice(),
            self.config.glow_smoothing,
            0.0,
            &mut self.rng,
        );
    }

    fn rotation_rate(&self) -> f32 {
        let rates = &self.config.rotation;
        match (self.shape, self.phase) {
            (_, FireworkPhase::Launching { .. }) => rates.launching,
            (_, FireworkPhase::Burst) => rates.burst,
            (ShapeId::Diamond, _) => rates.diamond,
            _ => rates.default,
        }
    }

    /// Current positions, `3·N` scalars. Upload after each tick.
    #[inline]
    pub fn positions(&self) -> &PointCloud {
        &self.current
    }

    /// Glow layer positions, `3·M` scalars.
    #[inline]
    pub fn glow_positions(&self) -> &PointCloud {
        &self.glow
    }

    /// Target cloud of the active shape.
    #[inline]
    pub fn target(&self) -> &PointCloud {
        &self.target
    }

    /// Points the glow layer is currently steering toward.
    #[inline]
    pub fn glow_target(&self) -> &PointCloud {
        &self.glow_target
    }

    /// Current firework phase.
    #[inline]
    pub fn phase(&self) -> FireworkPhase {
        self.phase
    }

    /// The active shape.
    #[inline]
    pub fn shape(&self) -> ShapeId {
        self.shape
    }

    /// Accumulated rotation about the vertical axis, in radians.
    #[inline]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Motion parameters this animator was built with.
    #[inline]
    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }
}

/// Move every scalar a fraction of the way to its target, plus jitter.
fn approach(current: &mut [f32], target: &[f32], smoothing: f32, jitter: f32, rng: &mut SmallRng) {
    if jitter > 0.0 {
        for (c, &t) in current.iter_mut().zip(target) {
            *c += (t - *c) * smoothing + (rng.gen::<f32>() - 0.5) * jitter;
        }
    } else {
        for (c, &t) in current.iter_mut().zip(target) {
            *c += (t - *c) * smoothing;
        }
    }
}

/// Fill `glow` with points of `source` taken at `(i * stride) % len`.
fn stride_into(source: &PointCloud, glow: &mut PointCloud, stride: usize) {
    let n = source.len();
    if n == 0 {
        return;
    }
    for i in 0..glow.len() {
        glow.set_point(i, source.point((i * stride) % n));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn still_config() -> AnimatorConfig {
        AnimatorConfig::default().with_jitter(0.0)
    }

    #[test]
    fn test_stride_into_wraps() {
        let source = PointCloud::from_points((0..10).map(|i| Vec3::splat(i as f32)));
        let mut glow = PointCloud::zeroed(4);
        stride_into(&source, &mut glow, 6);
        let picked: Vec<f32> = glow.iter().map(|p| p.x).collect();
        assert_eq!(picked, vec![0.0, 6.0, 2.0, 8.0]);
    }

    #[test]
    fn test_approach_closes_fraction() {
        let mut current = [0.0, 10.0, -4.0];
        let target = [1.0, 0.0, -4.0];
        let mut rng = SmallRng::seed_from_u64(0);
        approach(&mut current, &target, 0.5, 0.0, &mut rng);
        assert_eq!(current, [0.5, 5.0, -4.0]);
    }

    #[test]
    fn test_rotation_rates_follow_phase() {
        let cloud = PointCloud::zeroed(32);
        let config = still_config().with_glow(4, 6);
        let mut animator = ParticleAnimator::new(ShapeId::Tree, cloud.clone(), config.clone());

        animator.tick(0.0, 1.0);
        assert!((animator.rotation() - config.rotation.default).abs() < 1e-6);

        animator.on_shape_selected(ShapeId::Firework, cloud.clone(), 1.0);
        animator.tick(1.5, 1.0);
        assert!((animator.rotation() - config.rotation.default - config.rotation.launching).abs() < 1e-6);

        animator.tick(2.5, 1.0);
        assert_eq!(animator.phase(), FireworkPhase::Burst);
    }

    #[test]
    fn test_rocket_head_rises_linearly() {
        let animator = ParticleAnimator::new(ShapeId::Tree, PointCloud::zeroed(8), still_config());
        assert_eq!(animator.rocket_head(2.0, 2.0), Vec3::new(0.0, -12.0, 0.0));
        assert!((animator.rocket_head(2.0, 2.5).y - -6.0).abs() < 1e-5);
        assert_eq!(animator.rocket_head(2.0, 9.0), Vec3::ZERO);
    }
}
