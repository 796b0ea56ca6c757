//! Linear algebra internals
//!
//! Small f64 vector/matrix helpers shared by the fitting and matching
//! algorithms, plus [`eigen3`] for symmetric 3×3 eigendecomposition.
//!
//! All 3×3 matrices here are row-major: `m[row][col]`. Public crate APIs
//! stay in `f32`; the numerics run in `f64` for stability.

pub mod eigen3;

pub use eigen3::{sym_eigen_3x3, SymEigen3};

pub(crate) fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

pub(crate) fn cross(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

pub(crate) fn norm_sq(v: &[f64; 3]) -> f64 {
    dot(v, v)
}

pub(crate) fn scale(v: &[f64; 3], s: f64) -> [f64; 3] {
    [v[0] * s, v[1] * s, v[2] * s]
}

pub(crate) fn sub(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

pub(crate) fn add(a: &[f64; 3], b: &[f64; 3]) -> [f64; 3] {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}

/// Normalize in place. Near-zero vectors are left untouched.
pub(crate) fn normalize(v: &mut [f64; 3]) {
    let len = norm_sq(v).sqrt();
    if len > 1e-15 {
        v[0] /= len;
        v[1] /= len;
        v[2] /= len;
    }
}

pub(crate) const IDENTITY_3X3: [[f64; 3]; 3] = [
    [1.0, 0.0, 0.0],
    [0.0, 1.0, 0.0],
    [0.0, 0.0, 1.0],
];

/// Row-major matrix · vector
pub(crate) fn mat_vec(m: &[[f64; 3]; 3], v: &[f64; 3]) -> [f64; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// Row-major matrix product C = A · B
pub(crate) fn mat_mul(a: &[[f64; 3]; 3], b: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    let mut c = [[0.0f64; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            for k in 0..3 {
                c[i][j] += a[i][k] * b[k][j];
            }
        }
    }
    c
}

pub(crate) fn transpose(m: &[[f64; 3]; 3]) -> [[f64; 3]; 3] {
    [
        [m[0][0], m[1][0], m[2][0]],
        [m[0][1], m[1][1], m[2][1]],
        [m[0][2], m[1][2], m[2][2]],
    ]
}

pub(crate) fn determinant(m: &[[f64; 3]; 3]) -> f64 {
    m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
        - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
        + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
}

/// Rotation about an axis through the origin, via Rodrigues' formula.
///
/// The axis is normalized internally; a near-zero axis yields identity.
pub(crate) fn rotation_about_axis(axis: &[f64; 3], angle: f64) -> [[f64; 3]; 3] {
    let len = norm_sq(axis).sqrt();
    if len < 1e-10 {
        return IDENTITY_3X3;
    }
    let x = axis[0] / len;
    let y = axis[1] / len;
    let z = axis[2] / len;

    let c = angle.cos();
    let s = angle.sin();
    let t = 1.0 - c;

    [
        [t * x * x + c, t * x * y - z * s, t * z * x + y * s],
        [t * x * y + z * s, t * y * y + c, t * y * z - x * s],
        [t * z * x - y * s, t * y * z + x * s, t * z * z + c],
    ]
}
