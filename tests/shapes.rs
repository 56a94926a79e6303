//! Integration tests for shape sampling.
//!
//! Sampling is random, so these check counts, envelopes and the statistical
//! features each silhouette must have.

use glam::Vec3;
use morphcloud::shapes::{bell, diamond, firework, generate, magazine, simple, tree};
use morphcloud::{ShapeId, PARTICLE_COUNT};

const EPS: f32 = 1e-3;

fn horizontal(p: Vec3) -> f32 {
    (p.x * p.x + p.z * p.z).sqrt()
}

// ============================================================================
// Invariants shared by every shape
// ============================================================================

#[test]
fn test_every_shape_always_has_n_points() {
    for shape in ShapeId::ALL {
        for _ in 0..3 {
            let cloud = generate(shape);
            assert_eq!(cloud.len(), PARTICLE_COUNT, "{shape}");
            assert_eq!(cloud.as_slice().len(), 3 * PARTICLE_COUNT, "{shape}");
        }
    }
}

#[test]
fn test_every_shape_resamples() {
    for shape in ShapeId::ALL {
        let a = generate(shape);
        let b = generate(shape);
        assert_ne!(a, b, "{shape} produced identical clouds twice");
    }
}

// ============================================================================
// Tree
// ============================================================================

#[test]
fn test_tree_cone_envelope() {
    let cloud = generate(ShapeId::Tree);
    let star_start = (PARTICLE_COUNT as f32 * tree::STAR_FRACTION) as usize + 1;

    for (i, p) in cloud.iter().enumerate().take(star_start) {
        assert!(p.y >= -5.0 - EPS && p.y <= 5.0 + EPS, "point {i} at y={}", p.y);
        let max_r = (1.0 - (p.y + 5.0) / tree::HEIGHT) * tree::BASE_RADIUS;
        assert!(horizontal(p) <= max_r + EPS, "point {i} outside cone");
    }
}

#[test]
fn test_tree_bottom_and_star() {
    let cloud = generate(ShapeId::Tree);

    let lowest = cloud.iter().map(|p| p.y).fold(f32::INFINITY, f32::min);
    assert!((lowest - -5.0).abs() < 0.1, "lowest point at {lowest}");

    let star: Vec<Vec3> = cloud
        .iter()
        .enumerate()
        .filter(|(i, _)| *i as f32 > PARTICLE_COUNT as f32 * 0.96)
        .map(|(_, p)| p)
        .collect();
    assert!(!star.is_empty());
    for p in star {
        assert!(horizontal(p) <= tree::STAR_RADIUS + EPS);
        assert!((p.y - tree::STAR_Y).abs() <= tree::STAR_THICKNESS / 2.0 + EPS);
    }
}

// ============================================================================
// Diamond
// ============================================================================

#[test]
fn test_diamond_envelope() {
    let cloud = generate(ShapeId::Diamond);
    for p in cloud.iter() {
        assert!(p.y >= diamond::Y_GIRDLE - diamond::HEIGHT_PAVILION - EPS);
        assert!(p.y <= diamond::Y_TABLE + EPS);
        assert!(horizontal(p) <= diamond::RADIUS_GIRDLE + EPS);
    }
}

#[test]
fn test_diamond_has_table_crown_and_pavilion() {
    let cloud = generate(ShapeId::Diamond);
    let table = cloud
        .iter()
        .filter(|p| (p.y - diamond::Y_TABLE).abs() < 1e-5 && horizontal(*p) <= diamond::RADIUS_TABLE + EPS)
        .count();
    let crown = cloud
        .iter()
        .filter(|p| p.y > diamond::Y_GIRDLE + 0.05 && p.y < diamond::Y_TABLE - 0.05)
        .count();
    let pavilion = cloud.iter().filter(|p| p.y < diamond::Y_GIRDLE - 0.05).count();

    // 15% / 35% / 50% split, with generous slack.
    assert!(table > PARTICLE_COUNT / 10, "table: {table}");
    assert!(crown > PARTICLE_COUNT / 5, "crown: {crown}");
    assert!(pavilion > PARTICLE_COUNT * 2 / 5, "pavilion: {pavilion}");
}

#[test]
fn test_diamond_pavilion_narrows_to_apex() {
    let cloud = generate(ShapeId::Diamond);
    for p in cloud.iter().filter(|p| p.y < diamond::Y_GIRDLE) {
        // The pavilion cone: radius shrinks linearly to zero at the apex.
        let t = (p.y - diamond::Y_APEX) / diamond::HEIGHT_PAVILION;
        assert!(horizontal(p) <= diamond::RADIUS_GIRDLE * t + 0.01);
    }
}

// ============================================================================
// Magazine, bell, firework
// ============================================================================

#[test]
fn test_magazine_slab() {
    let cloud = generate(ShapeId::Magazine);
    let max_bow = magazine::bow(magazine::WIDTH / 2.0);
    for p in cloud.iter() {
        assert!(p.x.abs() <= magazine::WIDTH / 2.0 + EPS);
        assert!(p.y.abs() <= magazine::HEIGHT / 2.0 + EPS);
        assert!(p.z >= -magazine::DEPTH / 2.0 - EPS);
        assert!(p.z <= magazine::DEPTH / 2.0 + max_bow + EPS);
    }
}

#[test]
fn test_bell_surface_and_clapper() {
    let cloud = generate(ShapeId::Bell);
    for (i, p) in cloud.iter().enumerate() {
        if i as f32 > PARTICLE_COUNT as f32 * bell::CLAPPER_FRACTION {
            assert!((p.y - bell::CLAPPER_Y).abs() <= bell::CLAPPER_SIZE / 2.0 + EPS);
            assert!(p.x.abs() <= bell::CLAPPER_SIZE / 2.0 + EPS);
        } else {
            assert!(p.y.abs() <= bell::HEIGHT / 2.0 + EPS);
            assert!((horizontal(p) - bell::radius_at(p.y)).abs() < 1e-3);
        }
    }
}

#[test]
fn test_bell_flares_downward() {
    assert!(bell::radius_at(-2.75) > bell::radius_at(0.0));
    assert!(bell::radius_at(0.0) > bell::radius_at(2.0) - EPS);
    assert_eq!(bell::radius_at(2.75), bell::TOP_RADIUS);
}

#[test]
fn test_firework_rays_and_core() {
    let cloud = generate(ShapeId::Firework);
    for (i, p) in cloud.iter().enumerate() {
        assert!(p.length() <= firework::MAX_RADIUS + EPS);
        if i % firework::CORE_STRIDE == 0 {
            assert!(p.length() <= firework::CORE_RADIUS + EPS);
        }
    }

    // Radial bias pushes most ray points past half the shortest ray.
    let outer = cloud
        .iter()
        .enumerate()
        .filter(|(i, _)| i % firework::CORE_STRIDE != 0)
        .filter(|(_, p)| p.length() > firework::MIN_RADIUS / 2.0)
        .count();
    let rays = PARTICLE_COUNT - PARTICLE_COUNT / firework::CORE_STRIDE;
    assert!(outer > rays / 2, "only {outer} of {rays} ray points are outer");
}

#[test]
fn test_firework_ray_directions_cover_sphere() {
    let (first_phi, _) = firework::ray_angles(0);
    assert!((first_phi - std::f32::consts::PI).abs() < 1e-5);
    let (mid_phi, _) = firework::ray_angles(firework::RAYS / 2);
    assert!((mid_phi - std::f32::consts::FRAC_PI_2).abs() < 1e-5);
}

// ============================================================================
// Alternate shapes
// ============================================================================

#[test]
fn test_star_prism() {
    let cloud = generate(ShapeId::Star);
    for p in cloud.iter() {
        assert!(p.z.abs() <= simple::STAR_DEPTH / 2.0 + EPS);
        assert!(Vec3::new(p.x, p.y, 0.0).length() <= simple::STAR_OUTER_RADIUS + EPS);
    }
}

#[test]
fn test_heart_bounds() {
    let cloud = generate(ShapeId::Heart);
    for p in cloud.iter() {
        assert!(p.x.abs() <= 16.0 * simple::HEART_SCALE + EPS);
        assert!(p.y >= -17.0 * simple::HEART_SCALE + 0.5 - EPS);
        assert!(p.y <= 12.0 * simple::HEART_SCALE + 0.5 + EPS);
        assert!(p.z.abs() <= simple::HEART_DEPTH / 2.0 + EPS);
    }
}

#[test]
fn test_multipart_split() {
    let cloud = generate(ShapeId::Toothbrush);
    let head_only = cloud
        .iter()
        .filter(|p| p.y > simple::BRUSH_HANDLE.center.y + simple::BRUSH_HANDLE.size.y / 2.0)
        .count();
    // The head (30% of points) sits above the top of the handle.
    assert!(head_only > 0);
    assert!(head_only < PARTICLE_COUNT / 2);

    let cloud = generate(ShapeId::Airplane);
    let wingtips = cloud.iter().filter(|p| p.z.abs() > 1.0).count();
    assert!(wingtips > PARTICLE_COUNT / 5, "wings too sparse: {wingtips}");
}
