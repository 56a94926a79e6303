//! # morphcloud - Morphing point-cloud engine
//!
//! A fixed-size 3D point cloud that morphs between procedurally sampled
//! shapes, with a two-phase launch-then-burst firework and a trailing glow
//! layer.
//!
//! The crate does no rendering itself. Each frame the host calls
//! [`Scene::tick`] (or [`ParticleAnimator::tick`]) and uploads the flat
//! position buffers it exposes.
//!
//! ## Quick Start
//!
//! ```ignore
//! use morphcloud::prelude::*;
//!
//! let mut scene = Scene::new(SceneConfig::default())?;
//! let mut clock = FrameClock::new();
//!
//! // on click:
//! scene.next_shape(clock.elapsed());
//!
//! // every frame:
//! let (elapsed, delta) = clock.advance();
//! scene.tick(elapsed, delta);
//! upload(scene.animator().positions().as_bytes());
//! upload_glow(scene.animator().glow_positions().as_bytes());
//! ```
//!
//! ## Core Concepts
//!
//! ### Sampling
//!
//! [`shapes::generate`] turns a [`ShapeId`] into a [`PointCloud`] of exactly
//! [`PARTICLE_COUNT`] points. Sampling is random on every call; only the
//! silhouette is stable.
//!
//! ### Animation
//!
//! [`ParticleAnimator`] moves particle `i` toward target point `i` by a fixed
//! fraction of the remaining distance per tick. Fireworks first launch from
//! below the scene and only then burst outward, see [`FireworkPhase`].
//!
//! ### Blessings
//!
//! Every selection comes with a short text from a [`BlessingSource`]. The
//! request can never fail from the caller's point of view; see
//! [`blessing::request_blessing`].
//!
//! ## Cargo features
//!
//! | Feature | Adds |
//! |---------|------|
//! | `viewer` | The `morphcloud` window binary (wgpu + winit) |
//! | `gemini` | `GeminiBlessings`, a Gemini-backed blessing source |

pub mod animator;
pub mod blessing;
pub mod cloud;
pub mod config;
pub mod error;
pub mod scene;
pub mod shape;
pub mod shapes;
pub mod spawn;
pub mod time;

pub use animator::{FireworkPhase, ParticleAnimator};
pub use blessing::{Blessing, BlessingReply, BlessingSource, StaticBlessings};
pub use cloud::{PointCloud, GLOW_COUNT, PARTICLE_COUNT};
pub use config::{AnimatorConfig, RotationRates, SceneConfig};
pub use error::{BlessingError, ConfigError, ShapeParseError};
pub use glam::Vec3;
pub use scene::{BlessingDesk, BlessingTicket, Scene};
pub use shape::{ShapeId, ShapeWeights};
pub use spawn::SpawnContext;
pub use time::FrameClock;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use morphcloud::prelude::*;
/// ```
pub mod prelude {
    pub use crate::animator::{FireworkPhase, ParticleAnimator};
    pub use crate::blessing::{request_blessing, Blessing, BlessingSource, StaticBlessings};
    pub use crate::cloud::{PointCloud, GLOW_COUNT, PARTICLE_COUNT};
    pub use crate::config::{AnimatorConfig, SceneConfig};
    pub use crate::scene::{BlessingDesk, BlessingTicket, Scene};
    pub use crate::shape::{ShapeId, ShapeWeights};
    pub use crate::shapes::generate;
    pub use crate::time::FrameClock;
    pub use crate::Vec3;
}
