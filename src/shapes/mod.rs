//! Procedural shape sampling.
//!
//! [`generate`] turns a [`ShapeId`] into a fresh target cloud of
//! [`PARTICLE_COUNT`] points. Each shape is an independent strategy
//! (`fn(&mut SpawnContext) -> Vec3`) looked up through [`ShapeId::sampler`],
//! so adding a shape never touches the others.
//!
//! Output is random on every call; only the point count and the shape's
//! silhouette are stable.
//!
//! | Shape | Strategy |
//! |-------|----------|
//! | [`ShapeId::Tree`] | Cone volume with a star cluster above the apex |
//! | [`ShapeId::Diamond`] | Faceted gem: table, crown and pavilion triangles |
//! | [`ShapeId::Magazine`] | Thin bowed slab with edge faces |
//! | [`ShapeId::Bell`] | Flared surface of revolution with a clapper |
//! | [`ShapeId::Firework`] | Golden-spiral ray burst with a bright core |
//! | [`ShapeId::Star`] | Five-pointed star prism |
//! | [`ShapeId::Heart`] | Parametric heart curve with depth |
//! | [`ShapeId::Airplane`], [`ShapeId::Toothbrush`], [`ShapeId::Sock`] | Multi-part boxes |

pub mod bell;
pub mod diamond;
pub mod firework;
pub mod magazine;
pub mod simple;
pub mod tree;

use crate::cloud::{PointCloud, PARTICLE_COUNT};
use crate::shape::ShapeId;
use crate::spawn::SpawnContext;
use glam::Vec3;

/// A pure per-point sampling strategy.
pub type ShapeSampler = fn(&mut SpawnContext) -> Vec3;

impl ShapeId {
    /// Sampling strategy for this shape.
    pub fn sampler(self) -> ShapeSampler {
        match self {
            ShapeId::Tree => tree::sample,
            ShapeId::Diamond => diamond::sample,
            ShapeId::Magazine => magazine::sample,
            ShapeId::Bell => bell::sample,
            ShapeId::Firework => firework::sample,
            ShapeId::Star => simple::star,
            ShapeId::Heart => simple::heart,
            ShapeId::Airplane => simple::airplane,
            ShapeId::Toothbrush => simple::toothbrush,
            ShapeId::Sock => simple::sock,
        }
    }
}

/// Sample a new target cloud of [`PARTICLE_COUNT`] points for `shape`.
pub fn generate(shape: ShapeId) -> PointCloud {
    let mut ctx = SpawnContext::new(PARTICLE_COUNT);
    generate_with(shape, &mut ctx)
}

/// Sample `ctx.count` points for `shape` using the given context.
pub fn generate_with(shape: ShapeId, ctx: &mut SpawnContext) -> PointCloud {
    let sampler = shape.sampler();
    let count = ctx.count;
    let mut cloud = PointCloud::zeroed(count);
    for i in 0..count {
        ctx.index = i;
        cloud.set_point(i, sampler(ctx));
    }
    cloud
}

/// Sample a cloud from a shape name.
///
/// Unknown names produce the zero cloud (every point at the origin) so the
/// renderer still receives a full-size buffer.
pub fn generate_by_name(name: &str) -> PointCloud {
    match name.parse::<ShapeId>() {
        Ok(shape) => generate(shape),
        Err(e) => {
            log::warn!("{}; using the empty cloud", e);
            PointCloud::zeroed(PARTICLE_COUNT)
        }
    }
}
