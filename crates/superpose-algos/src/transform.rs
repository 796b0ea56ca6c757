//! Rigid-body transform type and in-place application
//!
//! A [`RigidTransform`] pairs a rotation with a translation and acts on a
//! point as `x ↦ R·x + t`, the same map at every point.

use lin_alg::f32::{Mat4, Vec3};

/// Rotation + translation value type.
///
/// The rotation lives in the upper-left 3×3 of a `Mat4` (row-major:
/// `data[row*4 + col]`); the translation is applied after rotation.
///
/// Construction performs no validation — orthonormality of the rotation
/// is a postcondition of the producing algorithms (the Kabsch fit and the
/// three-point matcher), not a precondition enforced here.
#[derive(Debug, Clone)]
pub struct RigidTransform {
    /// 3×3 rotation stored in the upper-left of a Mat4
    pub rotation: Mat4,
    /// Translation vector (applied after rotation)
    pub translation: Vec3,
}

impl RigidTransform {
    pub fn new(rotation: Mat4, translation: Vec3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// The identity transform (no rotation, no translation)
    pub fn identity() -> Self {
        Self {
            rotation: Mat4::new_identity(),
            translation: Vec3::new(0.0, 0.0, 0.0),
        }
    }

    /// A pure translation (identity rotation)
    pub fn from_translation(translation: Vec3) -> Self {
        Self {
            rotation: Mat4::new_identity(),
            translation,
        }
    }

    /// Apply to a single point: `R·x + t`
    pub fn apply_point(&self, p: Vec3) -> Vec3 {
        let r = &self.rotation.data;
        Vec3::new(
            r[0] * p.x + r[1] * p.y + r[2] * p.z + self.translation.x,
            r[4] * p.x + r[5] * p.y + r[6] * p.z + self.translation.y,
            r[8] * p.x + r[9] * p.y + r[10] * p.z + self.translation.z,
        )
    }

    /// Apply to every point of a slice, in place
    pub fn apply(&self, coords: &mut [[f32; 3]]) {
        apply_transform(coords, self);
    }

    /// The inverse transform: `(Rᵗ, −Rᵗ·t)`
    ///
    /// Valid only when the rotation is orthonormal, which holds for every
    /// transform this crate produces.
    pub fn inverse(&self) -> Self {
        let r = &self.rotation.data;
        let t = self.translation;
        let rotation = Mat4::new([
            r[0], r[4], r[8], 0.0,
            r[1], r[5], r[9], 0.0,
            r[2], r[6], r[10], 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        let translation = Vec3::new(
            -(r[0] * t.x + r[4] * t.y + r[8] * t.z),
            -(r[1] * t.x + r[5] * t.y + r[9] * t.z),
            -(r[2] * t.x + r[6] * t.y + r[10] * t.z),
        );
        Self {
            rotation,
            translation,
        }
    }

    pub(crate) fn from_parts(rot: &[[f64; 3]; 3], trans: &[f64; 3]) -> Self {
        let rotation = Mat4::new([
            rot[0][0] as f32, rot[0][1] as f32, rot[0][2] as f32, 0.0,
            rot[1][0] as f32, rot[1][1] as f32, rot[1][2] as f32, 0.0,
            rot[2][0] as f32, rot[2][1] as f32, rot[2][2] as f32, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        Self {
            rotation,
            translation: Vec3::new(trans[0] as f32, trans[1] as f32, trans[2] as f32),
        }
    }
}

/// Translate every point of a slice in place: `p ← p + delta`
pub fn translate(coords: &mut [[f32; 3]], delta: Vec3) {
    for coord in coords.iter_mut() {
        coord[0] += delta.x;
        coord[1] += delta.y;
        coord[2] += delta.z;
    }
}

/// Apply a rigid transform to every point of a slice in place: `p ← R·p + t`
pub fn apply_transform(coords: &mut [[f32; 3]], transform: &RigidTransform) {
    let r = &transform.rotation.data;
    let t = &transform.translation;
    for coord in coords.iter_mut() {
        let x = coord[0];
        let y = coord[1];
        let z = coord[2];
        coord[0] = r[0] * x + r[1] * y + r[2] * z + t.x;
        coord[1] = r[4] * x + r[5] * y + r[6] * z + t.y;
        coord[2] = r[8] * x + r[9] * y + r[10] * z + t.z;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_leaves_points_unchanged() {
        let mut coords = vec![[1.0, 2.0, 3.0], [-4.0, 0.5, 0.0]];
        let original = coords.clone();
        RigidTransform::identity().apply(&mut coords);
        assert_eq!(coords, original);
    }

    #[test]
    fn test_translate() {
        let mut coords = vec![[0.0, 0.0, 0.0], [1.0, 1.0, 1.0]];
        translate(&mut coords, Vec3::new(1.0, -2.0, 3.0));
        assert_eq!(coords[0], [1.0, -2.0, 3.0]);
        assert_eq!(coords[1], [2.0, -1.0, 4.0]);
    }

    #[test]
    fn test_pure_translation_transform() {
        let t = RigidTransform::from_translation(Vec3::new(5.0, 0.0, -1.0));
        let p = t.apply_point(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(p, Vec3::new(6.0, 2.0, 2.0));
    }

    #[test]
    fn test_inverse_roundtrip() {
        // 90° about Z plus a translation
        let rotation = Mat4::new([
            0.0, -1.0, 0.0, 0.0,
            1.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        let transform = RigidTransform::new(rotation, Vec3::new(1.0, 2.0, 3.0));
        let inverse = transform.inverse();

        let mut coords = vec![[0.3, -1.7, 2.2], [5.0, 5.0, 5.0], [0.0, 0.0, 0.0]];
        let original = coords.clone();
        transform.apply(&mut coords);
        inverse.apply(&mut coords);

        for (c, o) in coords.iter().zip(original.iter()) {
            for k in 0..3 {
                assert!(
                    (c[k] - o[k]).abs() < 1e-5,
                    "Roundtrip mismatch: {:?} vs {:?}",
                    c,
                    o
                );
            }
        }
    }

    #[test]
    fn test_apply_point_matches_slice_apply() {
        let rotation = Mat4::new([
            0.0, 0.0, 1.0, 0.0,
            1.0, 0.0, 0.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 1.0,
        ]);
        let transform = RigidTransform::new(rotation, Vec3::new(-1.0, 0.0, 2.0));

        let p = transform.apply_point(Vec3::new(1.0, 2.0, 3.0));
        let mut coords = vec![[1.0, 2.0, 3.0]];
        transform.apply(&mut coords);

        assert!((p.x - coords[0][0]).abs() < 1e-6);
        assert!((p.y - coords[0][1]).abs() < 1e-6);
        assert!((p.z - coords[0][2]).abs() < 1e-6);
    }
}
