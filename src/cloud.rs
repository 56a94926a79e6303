//! Flat point-cloud buffers.
//!
//! A [`PointCloud`] stores `N` points as `3·N` contiguous `f32` scalars so the
//! same memory can be handed to the renderer without repacking. Point `i`
//! lives at indices `3i`, `3i + 1`, `3i + 2`.
//!
//! Index order is meaningful: particle `i` of the current cloud always
//! interpolates toward particle `i` of the target cloud, across every shape
//! transition.

use glam::Vec3;

/// Number of particles in the main cloud.
pub const PARTICLE_COUNT: usize = 5000;

/// Number of particles in the glow layer.
pub const GLOW_COUNT: usize = 800;

/// Fixed-length sequence of 3D points backed by a flat scalar buffer.
#[derive(Clone, Debug, PartialEq)]
pub struct PointCloud {
    data: Vec<f32>,
}

impl PointCloud {
    /// Cloud of `count` points, all at the origin.
    pub fn zeroed(count: usize) -> Self {
        Self {
            data: vec![0.0; count * 3],
        }
    }

    /// Cloud of `count` points, all at `point`.
    pub fn filled(count: usize, point: Vec3) -> Self {
        let mut cloud = Self::zeroed(count);
        cloud.fill(point);
        cloud
    }

    /// Build a cloud from an iterator of points, in iteration order.
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Self {
        let data = points
            .into_iter()
            .flat_map(|p| [p.x, p.y, p.z])
            .collect();
        Self { data }
    }

    /// Number of points (not scalars).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len() / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Point at index `i`.
    #[inline]
    pub fn point(&self, i: usize) -> Vec3 {
        Vec3::new(self.data[3 * i], self.data[3 * i + 1], self.data[3 * i + 2])
    }

    /// Overwrite the point at index `i`.
    #[inline]
    pub fn set_point(&mut self, i: usize, p: Vec3) {
        self.data[3 * i] = p.x;
        self.data[3 * i + 1] = p.y;
        self.data[3 * i + 2] = p.z;
    }

    /// Move every point to `point`.
    pub fn fill(&mut self, point: Vec3) {
        for chunk in self.data.chunks_exact_mut(3) {
            chunk[0] = point.x;
            chunk[1] = point.y;
            chunk[2] = point.z;
        }
    }

    /// Copy all coordinates from `other`.
    ///
    /// Both clouds must hold the same number of points.
    pub fn copy_from(&mut self, other: &PointCloud) {
        debug_assert_eq!(self.len(), other.len(), "point cloud length mismatch");
        self.data.copy_from_slice(&other.data);
    }

    /// Flat scalar view, `3·len()` long.
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mutable flat scalar view. The length cannot change through it.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Raw bytes for uploading to a vertex buffer.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }

    /// Iterate over points in index order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Vec3> + '_ {
        self.data
            .chunks_exact(3)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
    }

    /// Axis-aligned bounds as `(min, max)`. `None` for an empty cloud.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let mut points = self.iter();
        let first = points.next()?;
        Some(points.fold((first, first), |(lo, hi), p| (lo.min(p), hi.max(p))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_layout() {
        let cloud = PointCloud::from_points([Vec3::new(1.0, 2.0, 3.0), Vec3::new(4.0, 5.0, 6.0)]);
        assert_eq!(cloud.len(), 2);
        assert_eq!(cloud.as_slice(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert_eq!(cloud.point(1), Vec3::new(4.0, 5.0, 6.0));
        assert_eq!(cloud.as_bytes().len(), 6 * 4);
    }

    #[test]
    fn test_set_and_fill() {
        let mut cloud = PointCloud::zeroed(4);
        cloud.set_point(2, Vec3::X);
        assert_eq!(cloud.point(2), Vec3::X);
        assert_eq!(cloud.point(1), Vec3::ZERO);

        cloud.fill(Vec3::new(0.0, -12.0, 0.0));
        assert!(cloud.iter().all(|p| p == Vec3::new(0.0, -12.0, 0.0)));
    }

    #[test]
    fn test_bounds() {
        let cloud = PointCloud::from_points([
            Vec3::new(-1.0, 0.0, 2.0),
            Vec3::new(3.0, -4.0, 0.5),
        ]);
        let (lo, hi) = cloud.bounds().unwrap();
        assert_eq!(lo, Vec3::new(-1.0, -4.0, 0.5));
        assert_eq!(hi, Vec3::new(3.0, 0.0, 2.0));
        assert!(PointCloud::zeroed(0).bounds().is_none());
    }
}
