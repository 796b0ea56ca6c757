//! Ordered 3D point collection
//!
//! [`CoordSet`] stores the coordinates of a molecule, one position per
//! atom, in atom-index order. The in-place mutators return `&mut Self`
//! so calls can be chained.
//!
//! Concurrent in-place mutation of the same `CoordSet` from multiple
//! threads is not synchronized here; callers must serialize it.

use lin_alg::f32::Vec3;
use superpose_algos::{apply_transform, translate, RigidTransform};

/// Coordinates for a molecule, one `[x, y, z]` per atom
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoordSet {
    coords: Vec<[f32; 3]>,
}

impl CoordSet {
    /// Create a new empty coordinate set
    pub fn new() -> Self {
        CoordSet::default()
    }

    pub fn with_capacity(n_atoms: usize) -> Self {
        CoordSet {
            coords: Vec::with_capacity(n_atoms),
        }
    }

    /// Create a coordinate set from a list of positions
    pub fn from_positions(positions: &[Vec3]) -> Self {
        CoordSet {
            coords: positions.iter().map(|p| [p.x, p.y, p.z]).collect(),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Append a position
    pub fn push(&mut self, pos: Vec3) {
        self.coords.push([pos.x, pos.y, pos.z]);
    }

    /// Get a position by index
    #[inline]
    pub fn get(&self, index: usize) -> Option<Vec3> {
        self.coords
            .get(index)
            .map(|c| Vec3::new(c[0], c[1], c[2]))
    }

    /// Set a position by index. Out-of-range indices are ignored.
    #[inline]
    pub fn set(&mut self, index: usize, pos: Vec3) {
        if let Some(c) = self.coords.get_mut(index) {
            *c = [pos.x, pos.y, pos.z];
        }
    }

    /// The raw position slice, for the geometric engine
    #[inline]
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.coords
    }

    #[inline]
    pub fn positions_mut(&mut self) -> &mut [[f32; 3]] {
        &mut self.coords
    }

    /// Iterate over all positions
    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.coords.iter().map(|c| Vec3::new(c[0], c[1], c[2]))
    }

    /// Geometric center of the collection
    pub fn center(&self) -> Vec3 {
        if self.coords.is_empty() {
            return Vec3::new(0.0, 0.0, 0.0);
        }
        let mut sum = Vec3::new(0.0, 0.0, 0.0);
        for pos in self.iter() {
            sum = sum + pos;
        }
        sum * (1.0 / self.coords.len() as f32)
    }

    /// Translate every position in place: `p ← p + delta`
    pub fn translate(&mut self, delta: Vec3) -> &mut Self {
        translate(&mut self.coords, delta);
        self
    }

    /// Apply a rigid transform to every position in place: `p ← R·p + t`
    pub fn transform(&mut self, transform: &RigidTransform) -> &mut Self {
        apply_transform(&mut self.coords, transform);
        self
    }
}
