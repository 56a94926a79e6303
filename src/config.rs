//! Tunable parameters for the animator and the scene.
//!
//! Defaults reproduce the stock look. Configs can be saved to and loaded
//! from JSON; missing fields fall back to their defaults.
//!
//! ```ignore
//! let config = SceneConfig::default()
//!     .with_particle_count(8000)
//!     .with_animator(AnimatorConfig::default().with_jitter(0.0));
//! config.save("scene.json")?;
//! ```

use crate::cloud::{GLOW_COUNT, PARTICLE_COUNT};
use crate::error::ConfigError;
use crate::shape::{ShapeId, ShapeWeights};
use glam::Vec3;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Motion parameters for [`ParticleAnimator`](crate::ParticleAnimator).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimatorConfig {
    /// Fraction of the remaining distance closed per tick.
    pub smoothing: f32,
    /// Full width of the per-coordinate jitter added each tick.
    pub jitter: f32,
    /// Smoothing used after a firework detonates.
    pub burst_smoothing: f32,
    /// Jitter used after a firework detonates.
    pub burst_jitter: f32,
    /// Smoothing used while a firework is rising.
    pub launch_smoothing: f32,
    /// Seconds from launch to detonation.
    pub launch_duration: f32,
    /// Where every particle sits when a firework launches.
    pub launch_origin: Vec3,
    /// Where the rocket head ends up at detonation.
    pub burst_center: Vec3,
    /// How far below the rocket head the exhaust tail may reach.
    pub tail_length: f32,
    /// Number of glow particles.
    pub glow_count: usize,
    /// Glow particle `i` trails main particle `(i * glow_stride) % N`.
    pub glow_stride: usize,
    /// Smoothing used by the glow layer.
    pub glow_smoothing: f32,
    /// Rotation speeds in radians per second.
    pub rotation: RotationRates,
}

/// Continuous turntable rotation speeds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RotationRates {
    pub default: f32,
    pub diamond: f32,
    pub launching: f32,
    pub burst: f32,
}

impl Default for RotationRates {
    fn default() -> Self {
        Self {
            default: 0.2,
            diamond: 0.3,
            launching: 0.0,
            burst: 0.1,
        }
    }
}

impl Default for AnimatorConfig {
    fn default() -> Self {
        Self {
            smoothing: 0.045,
            jitter: 0.02,
            burst_smoothing: 0.06,
            burst_jitter: 0.12,
            launch_smoothing: 0.15,
            launch_duration: 1.0,
            launch_origin: Vec3::new(0.0, -12.0, 0.0),
            burst_center: Vec3::ZERO,
            tail_length: 1.5,
            glow_count: GLOW_COUNT,
            glow_stride: 6,
            glow_smoothing: 0.035,
            rotation: RotationRates::default(),
        }
    }
}

impl AnimatorConfig {
    /// Set both the default and the burst jitter. `0.0` makes ticks exact.
    pub fn with_jitter(mut self, jitter: f32) -> Self {
        self.jitter = jitter;
        self.burst_jitter = jitter;
        self
    }

    pub fn with_smoothing(mut self, smoothing: f32) -> Self {
        self.smoothing = smoothing;
        self
    }

    pub fn with_launch_duration(mut self, seconds: f32) -> Self {
        self.launch_duration = seconds;
        self
    }

    pub fn with_glow(mut self, count: usize, stride: usize) -> Self {
        self.glow_count = count;
        self.glow_stride = stride;
        self
    }

    /// Reject values that would make the motion diverge or stall.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = [
            ("smoothing", self.smoothing),
            ("burst_smoothing", self.burst_smoothing),
            ("launch_smoothing", self.launch_smoothing),
            ("glow_smoothing", self.glow_smoothing),
        ];
        for (field, value) in factors {
            if !(value > 0.0 && value <= 1.0) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "smoothing factors must be in (0, 1]",
                });
            }
        }
        if !(self.jitter >= 0.0) || !(self.burst_jitter >= 0.0) {
            return Err(ConfigError::Invalid {
                field: "jitter",
                reason: "jitter must be a non-negative number",
            });
        }
        if !(self.launch_duration > 0.0) {
            return Err(ConfigError::Invalid {
                field: "launch_duration",
                reason: "launch duration must be positive",
            });
        }
        if self.glow_stride == 0 {
            return Err(ConfigError::Invalid {
                field: "glow_stride",
                reason: "stride must be at least 1",
            });
        }
        Ok(())
    }
}

/// Everything the scene needs to start.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub particle_count: usize,
    pub initial_shape: ShapeId,
    pub weights: ShapeWeights,
    pub animator: AnimatorConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            initial_shape: ShapeId::Tree,
            weights: ShapeWeights::default(),
            animator: AnimatorConfig::default(),
        }
    }
}

impl SceneConfig {
    pub fn with_particle_count(mut self, count: usize) -> Self {
        self.particle_count = count;
        self
    }

    pub fn with_initial_shape(mut self, shape: ShapeId) -> Self {
        self.initial_shape = shape;
        self
    }

    pub fn with_weights(mut self, weights: ShapeWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn with_animator(mut self, animator: AnimatorConfig) -> Self {
        self.animator = animator;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::Invalid {
                field: "particle_count",
                reason: "the cloud needs at least one particle",
            });
        }
        self.animator.validate()
    }

    /// Parse and validate a JSON config.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(SceneConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SceneConfig::from_json(
            r#"{ "particle_count": 1200, "animator": { "smoothing": 0.1 } }"#,
        )
        .unwrap();
        assert_eq!(config.particle_count, 1200);
        assert_eq!(config.animator.smoothing, 0.1);
        assert_eq!(config.animator.launch_duration, 1.0);
        assert_eq!(config.initial_shape, ShapeId::Tree);
    }

    #[test]
    fn test_rejects_bad_values() {
        let err = SceneConfig::from_json(r#"{ "animator": { "smoothing": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "smoothing", .. }));

        let err = SceneConfig::from_json(r#"{ "particle_count": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "particle_count", .. }));

        let err = SceneConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_rejects_nan_jitter() {
        let config = AnimatorConfig::default().with_jitter(f32::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "jitter", .. })
        ));

        let mut config = AnimatorConfig::default();
        config.burst_jitter = f32::NAN;
        assert!(config.validate().is_err());

        config.burst_jitter = -0.1;
        assert!(config.validate().is_err());

        assert!(AnimatorConfig::default().with_jitter(0.0).validate().is_ok());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scene.json");
        let config = SceneConfig::default()
            .with_initial_shape(ShapeId::Firework)
            .with_animator(AnimatorConfig::default().with_jitter(0.0));
        config.save(&path).unwrap();
        assert_eq!(SceneConfig::load(&path).unwrap(), config);
    }
}
