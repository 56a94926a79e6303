//! Faceted diamond: a flat table, a crown band, and a pavilion cone.
//!
//! The gem is split into [`SEGMENTS`] angular wedges. In each wedge the crown
//! is two triangles between the table rim and the girdle rim, and the
//! pavilion is one triangle from the girdle down to the bottom apex.

use crate::spawn::SpawnContext;
use glam::Vec3;
use std::f32::consts::TAU;

pub const SEGMENTS: usize = 12;
pub const RADIUS_TABLE: f32 = 2.2;
pub const RADIUS_GIRDLE: f32 = 3.8;
pub const HEIGHT_CROWN: f32 = 1.2;
pub const HEIGHT_PAVILION: f32 = 4.5;
pub const Y_GIRDLE: f32 = 0.5;

/// Share of points on the table.
const TABLE_SHARE: f32 = 0.15;
/// Cumulative share of table plus crown; the rest is pavilion.
const CROWN_SHARE: f32 = 0.5;

/// Height of the flat table.
pub const Y_TABLE: f32 = Y_GIRDLE + HEIGHT_CROWN;
/// Height of the bottom apex.
pub const Y_APEX: f32 = Y_GIRDLE - HEIGHT_PAVILION;

fn rim(angle: f32, radius: f32, y: f32) -> Vec3 {
    Vec3::new(angle.cos() * radius, y, angle.sin() * radius)
}

/// One point on the table, a crown facet or a pavilion facet.
pub fn sample(ctx: &mut SpawnContext) -> Vec3 {
    let part = ctx.random();

    if part < TABLE_SHARE {
        let p = ctx.random_in_disk(RADIUS_TABLE);
        return Vec3::new(p.x, Y_TABLE, p.z);
    }

    let seg = ctx.random_index(SEGMENTS);
    let a1 = seg as f32 / SEGMENTS as f32 * TAU;
    let a2 = (seg + 1) as f32 / SEGMENTS as f32 * TAU;
    let girdle1 = rim(a1, RADIUS_GIRDLE, Y_GIRDLE);
    let girdle2 = rim(a2, RADIUS_GIRDLE, Y_GIRDLE);

    if part < CROWN_SHARE {
        let table1 = rim(a1, RADIUS_TABLE, Y_TABLE);
        let table2 = rim(a2, RADIUS_TABLE, Y_TABLE);
        if ctx.chance(0.5) {
            ctx.sample_triangle(table1, table2, girdle1)
        } else {
            ctx.sample_triangle(table2, girdle1, girdle2)
        }
    } else {
        let apex = Vec3::new(0.0, Y_APEX, 0.0);
        ctx.sample_triangle(girdle1, girdle2, apex)
    }
}
