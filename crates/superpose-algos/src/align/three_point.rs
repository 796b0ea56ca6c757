//! Exact rigid matching of two ordered point triples
//!
//! Builds the transform that sends the first source point exactly onto
//! the first target point, the second source point onto the ray from
//! target-1 through target-2, and the third source point into the plane
//! of the target triple.
//!
//! Degenerate input never raises: near-zero and antiparallel
//! configurations fall back to a swap, the identity, or a point
//! inversion, trading rotation precision for robustness. The branching is
//! expressed as a small tagged decision structure ([`AlignStep`]) so each
//! fallback is auditable on its own.

use lin_alg::f32::Vec3;

use crate::linalg::{
    add, cross, dot, mat_mul, mat_vec, norm_sq, normalize, rotation_about_axis, scale, sub,
    IDENTITY_3X3,
};
use crate::transform::RigidTransform;

/// Angle / axis-length threshold below which a rotation is unreliable
const EPSILON: f64 = 1e-5;
/// Squared-length threshold below which a vector counts as zero
const EPSILON_SQUARED: f64 = 1e-8;

/// Outcome of classifying one alignment stage
#[derive(Debug, Clone, PartialEq)]
enum AlignStep {
    /// Already aligned (or too close to tell); leave the running result alone
    Skip,
    /// Antiparallel directions with no usable bisector: full sign flip
    Invert,
    /// Rotate by `angle` about `axis` (axis need not be normalized)
    Rotate { axis: [f64; 3], angle: f64 },
}

impl AlignStep {
    /// The 3×3 rotation realizing this step, or `None` for [`AlignStep::Skip`]
    fn rotation(&self) -> Option<[[f64; 3]; 3]> {
        match self {
            AlignStep::Skip => None,
            AlignStep::Invert => Some([
                [-1.0, 0.0, 0.0],
                [0.0, -1.0, 0.0],
                [0.0, 0.0, -1.0],
            ]),
            AlignStep::Rotate { axis, angle } => Some(rotation_about_axis(axis, *angle)),
        }
    }
}

/// First stage: map the source second-point direction onto the target's.
///
/// Rotating by π about the bisector of two unit vectors swaps them onto
/// each other, so a half-turn about `tw2_norm + tv2_norm` aligns the
/// directions exactly. When the bisector vanishes the directions are
/// antiparallel and the point inversion takes over.
fn classify_primary(tw2_norm: &[f64; 3], tv2_norm: &[f64; 3]) -> AlignStep {
    let axis = add(tw2_norm, tv2_norm);
    if norm_sq(&axis) < EPSILON {
        AlignStep::Invert
    } else {
        AlignStep::Rotate {
            axis,
            angle: std::f64::consts::PI,
        }
    }
}

/// Second stage: rotate about the aligned axis to bring the third point
/// into the target plane.
///
/// `axis_w` and `axis_v` must be unit vectors (both lie in the plane
/// perpendicular to the aligned second axis).
fn classify_secondary(axis_w: &[f64; 3], axis_v: &[f64; 3], tv2: &[f64; 3]) -> AlignStep {
    let rotation_axis = cross(axis_w, axis_v);
    if norm_sq(&rotation_axis) < EPSILON {
        // Parallel or antiparallel plane normals
        if dot(axis_w, axis_v) < 0.0 {
            AlignStep::Rotate {
                axis: *tv2,
                angle: std::f64::consts::PI,
            }
        } else {
            AlignStep::Skip
        }
    } else {
        let angle = dot(axis_w, axis_v).clamp(-1.0, 1.0).acos();
        if angle > EPSILON {
            AlignStep::Rotate {
                axis: rotation_axis,
                angle,
            }
        } else {
            AlignStep::Skip
        }
    }
}

/// Construct the rigid transform matching a source triple onto a target
/// triple.
///
/// The result sends `source[0]` onto `target[0]` exactly, `source[1]`
/// onto the ray from `target[0]` through `target[1]`, and `source[2]`
/// into the plane of the target triple. If the triples are not rigidly
/// congruent only those incidence conditions hold, not a full
/// congruence.
///
/// Never fails: degenerate triples (coincident or collinear points)
/// degrade to identity or inversion fallbacks.
pub fn match_triples(source: [Vec3; 3], target: [Vec3; 3]) -> RigidTransform {
    let w1 = to_f64(source[0]);
    let v1 = to_f64(target[0]);
    let mut tw2 = sub(&to_f64(source[1]), &w1);
    let mut tw3 = sub(&to_f64(source[2]), &w1);
    let mut tv2 = sub(&to_f64(target[1]), &v1);
    let mut tv3 = sub(&to_f64(target[2]), &v1);

    // If the second point sits on top of the first but the third does
    // not, the third is the better-conditioned rotation reference. The
    // swap applies to each triple independently.
    if norm_sq(&tv2) < EPSILON_SQUARED && norm_sq(&tv3) >= EPSILON_SQUARED {
        std::mem::swap(&mut tv2, &mut tv3);
    }
    if norm_sq(&tw2) < EPSILON_SQUARED && norm_sq(&tw3) >= EPSILON_SQUARED {
        std::mem::swap(&mut tw2, &mut tw3);
    }

    let mut rotation = IDENTITY_3X3;
    let mut translation = scale(&w1, -1.0);

    // Stage 1: align the second-point directions
    if norm_sq(&tv2) >= EPSILON_SQUARED && norm_sq(&tw2) >= EPSILON_SQUARED {
        let mut tw2_norm = tw2;
        let mut tv2_norm = tv2;
        normalize(&mut tw2_norm);
        normalize(&mut tv2_norm);

        if let Some(step) = classify_primary(&tw2_norm, &tv2_norm).rotation() {
            tw2 = mat_vec(&step, &tw2);
            tw3 = mat_vec(&step, &tw3);
            rotation = mat_mul(&step, &rotation);
            translation = mat_vec(&step, &translation);
        }
    }

    // Stage 2: rotate about the aligned axis to reach the target plane
    if norm_sq(&tw3) > EPSILON_SQUARED && norm_sq(&tv3) > EPSILON_SQUARED {
        let mut tw3_norm = tw3;
        let mut tv3_norm = tv3;
        normalize(&mut tw3_norm);
        normalize(&mut tv3_norm);

        let mut axis_w = cross(&tv2, &tw3_norm);
        let mut axis_v = cross(&tv2, &tv3_norm);
        if norm_sq(&axis_w) > EPSILON_SQUARED && norm_sq(&axis_v) > EPSILON_SQUARED {
            normalize(&mut axis_w);
            normalize(&mut axis_v);

            if let Some(step) = classify_secondary(&axis_w, &axis_v, &tv2).rotation() {
                rotation = mat_mul(&step, &rotation);
                translation = mat_vec(&step, &translation);
            }
        }
    }

    let translation = add(&translation, &v1);
    RigidTransform::from_parts(&rotation, &translation)
}

fn to_f64(v: Vec3) -> [f64; 3] {
    [v.x as f64, v.y as f64, v.z as f64]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: Vec3, b: Vec3, tol: f32) {
        assert!(
            (a.x - b.x).abs() < tol && (a.y - b.y).abs() < tol && (a.z - b.z).abs() < tol,
            "{:?} vs {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_identical_triples_give_identity() {
        let triple = [
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(4.0, 5.0, 6.0),
            Vec3::new(-1.0, 0.5, 2.0),
        ];
        let transform = match_triples(triple, triple);

        let m = &transform.rotation.data;
        let identity = [1.0f32, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0];
        let actual = [m[0], m[1], m[2], m[4], m[5], m[6], m[8], m[9], m[10]];
        for (a, e) in actual.iter().zip(identity.iter()) {
            assert!((a - e).abs() < 1e-4, "rotation {:?}", actual);
        }
        assert!(transform.translation.magnitude() < 1e-4);
    }

    #[test]
    fn test_unit_axes_triple_onto_shifted_plane() {
        let source = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let target = [
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::new(0.0, 1.0, 1.0),
            Vec3::new(1.0, 0.0, 1.0),
        ];
        let transform = match_triples(source, target);

        // First point maps exactly
        assert_close(transform.apply_point(source[0]), target[0], 1e-5);

        // Second point lands on the ray from target[0] through target[1]
        let mapped = transform.apply_point(source[1]);
        let along = mapped - target[0];
        let ray = target[1] - target[0];
        let cos = along.dot(ray) / (along.magnitude() * ray.magnitude());
        assert!(cos > 1.0 - 1e-5, "not on ray: cos = {}", cos);

        // Third point lands in the target plane (here the triples are
        // congruent, so it reaches target[2] itself)
        assert_close(transform.apply_point(source[2]), target[2], 1e-4);
    }

    #[test]
    fn test_congruent_triples_map_exactly() {
        // Target is the source rotated 90° about Z and shifted
        let rotate = |p: Vec3| Vec3::new(-p.y + 1.0, p.x - 2.0, p.z + 0.5);
        let source = [
            Vec3::new(0.3, 0.1, -0.2),
            Vec3::new(1.7, 0.4, 0.9),
            Vec3::new(-0.6, 2.0, 0.3),
        ];
        let target = [rotate(source[0]), rotate(source[1]), rotate(source[2])];
        let transform = match_triples(source, target);

        for (w, v) in source.iter().zip(target.iter()) {
            assert_close(transform.apply_point(*w), *v, 1e-4);
        }
    }

    #[test]
    fn test_coincident_second_point_does_not_panic() {
        // w2 == w1: zero-length second vector triggers the swap fallback
        let source = [
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(2.0, 1.0, 1.0),
        ];
        let target = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        ];
        let transform = match_triples(source, target);
        // First point still maps exactly
        assert_close(transform.apply_point(source[0]), target[0], 1e-5);
    }

    #[test]
    fn test_all_points_coincident_degrades_to_translation() {
        let p = Vec3::new(3.0, -1.0, 2.0);
        let q = Vec3::new(0.0, 4.0, 1.0);
        let transform = match_triples([p, p, p], [q, q, q]);
        assert_close(transform.apply_point(p), q, 1e-5);

        let m = &transform.rotation.data;
        assert!((m[0] - 1.0).abs() < 1e-6 && (m[5] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_antiparallel_second_axis_uses_inversion() {
        // tw2 and tv2 point in exactly opposite directions and the third
        // points are degenerate, so only the inversion branch can align
        let source = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
        ];
        let target = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(-1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 0.0),
        ];
        let transform = match_triples(source, target);

        // The rotation must map tw2_norm onto tv2_norm
        let mapped = transform.apply_point(source[1]);
        assert_close(mapped, target[1], 1e-5);
    }

    #[test]
    fn test_classify_primary_antiparallel() {
        let step = classify_primary(&[1.0, 0.0, 0.0], &[-1.0, 0.0, 0.0]);
        assert_eq!(step, AlignStep::Invert);
    }

    #[test]
    fn test_classify_primary_general() {
        let step = classify_primary(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]);
        match step {
            AlignStep::Rotate { axis, angle } => {
                assert_eq!(axis, [1.0, 1.0, 0.0]);
                assert!((angle - std::f64::consts::PI).abs() < 1e-12);
            }
            other => panic!("expected half-turn, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_secondary_parallel_is_skip() {
        let step = classify_secondary(&[0.0, 0.0, 1.0], &[0.0, 0.0, 1.0], &[0.0, 1.0, 0.0]);
        assert_eq!(step, AlignStep::Skip);
    }

    #[test]
    fn test_classify_secondary_antiparallel_half_turn() {
        let step = classify_secondary(&[0.0, 0.0, 1.0], &[0.0, 0.0, -1.0], &[0.0, 1.0, 0.0]);
        match step {
            AlignStep::Rotate { axis, angle } => {
                assert_eq!(axis, [0.0, 1.0, 0.0]);
                assert!((angle - std::f64::consts::PI).abs() < 1e-12);
            }
            other => panic!("expected half-turn about tv2, got {:?}", other),
        }
    }

    #[test]
    fn test_classify_secondary_general_angle() {
        // 90° apart in the plane perpendicular to tv2
        let step = classify_secondary(&[1.0, 0.0, 0.0], &[0.0, 0.0, 1.0], &[0.0, 1.0, 0.0]);
        match step {
            AlignStep::Rotate { angle, .. } => {
                assert!((angle - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
            }
            other => panic!("expected rotation, got {:?}", other),
        }
    }

    #[test]
    fn test_incongruent_triples_keep_incidence_conditions() {
        // Target triple has different edge lengths than the source:
        // only point/ray/plane incidence is promised
        let source = [
            Vec3::new(0.0, 0.0, 0.0),
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 3.0, 0.0),
        ];
        let target = [
            Vec3::new(5.0, 5.0, 5.0),
            Vec3::new(5.0, 6.0, 5.0),
            Vec3::new(4.0, 5.0, 5.0),
        ];
        let transform = match_triples(source, target);

        assert_close(transform.apply_point(source[0]), target[0], 1e-5);

        let mapped2 = transform.apply_point(source[1]) - target[0];
        let ray = target[1] - target[0];
        let cos = mapped2.dot(ray) / (mapped2.magnitude() * ray.magnitude());
        assert!(cos > 1.0 - 1e-4, "second point off the ray: cos = {}", cos);

        let mapped3 = transform.apply_point(source[2]) - target[0];
        let normal = (target[1] - target[0]).cross(target[2] - target[0]);
        let off_plane = mapped3.dot(normal) / (mapped3.magnitude() * normal.magnitude());
        assert!(
            off_plane.abs() < 1e-4,
            "third point off the plane: {}",
            off_plane
        );
    }
}
