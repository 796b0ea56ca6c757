//! Kabsch algorithm for optimal rigid-body superposition
//!
//! Given two sets of corresponding 3D points, finds the rotation and
//! translation minimizing the RMSD between them. The rotation comes from
//! the eigendecomposition of `C = RᵗR`, where `R` is the cross-covariance
//! of the centered point sets: `U = Σ (1/√μ_i)·(R·a_i)·a_iᵗ`, the
//! closed-form polar decomposition of `R`.
//!
//! Near-zero eigenvalues make `1/√μ_i` blow up, so they are guarded
//! explicitly: a planar point set (one vanishing eigenvalue) has its
//! missing direction completed via a cross product, while a collinear or
//! coincident set (two or more vanishing eigenvalues) is rejected with
//! [`AlignError::DegeneratePointSet`] rather than producing NaN.

use crate::linalg::{self, sym_eigen_3x3};
use crate::transform::RigidTransform;
use crate::AlignError;

/// Eigenvalues below `RANK_TOLERANCE · μ_max` are treated as zero.
const RANK_TOLERANCE: f64 = 1e-9;

/// Result of a Kabsch fit
#[derive(Debug, Clone)]
pub struct Fit {
    /// Transform mapping the source set onto the target set
    pub transform: RigidTransform,
    /// RMSD after superposition, over the fitted points
    pub rmsd: f32,
    /// Number of point pairs used in the fit
    pub n_points: usize,
}

/// Compute the RMSD between two paired point sets, without fitting.
///
/// Pure: `sqrt(mean ||target[i] − source[i]||²)`. Zero exactly when the
/// sequences are pointwise identical.
pub fn rmsd(source: &[[f32; 3]], target: &[[f32; 3]]) -> Result<f32, AlignError> {
    if source.len() != target.len() {
        return Err(AlignError::LengthMismatch(source.len(), target.len()));
    }
    if source.is_empty() {
        return Err(AlignError::NoPoints);
    }
    let sum: f64 = source
        .iter()
        .zip(target.iter())
        .map(|(a, b)| {
            let dx = (b[0] - a[0]) as f64;
            let dy = (b[1] - a[1]) as f64;
            let dz = (b[2] - a[2]) as f64;
            dx * dx + dy * dy + dz * dz
        })
        .sum();
    Ok((sum / source.len() as f64).sqrt() as f32)
}

/// Compute the optimal superposition of `source` onto `target`.
///
/// Returns the transform that maps source → target in the least-squares
/// sense. Both slices must have the same length.
pub fn fit(source: &[[f32; 3]], target: &[[f32; 3]]) -> Result<Fit, AlignError> {
    fit_filtered(source, target, |_| true)
}

/// Kabsch fit restricted to the pairs accepted by `keep`.
///
/// `keep(i)` decides whether pair `i` participates in the fit; the
/// returned transform still applies to any point. This is how callers
/// express "heavy atoms only" and similar selections.
pub fn fit_filtered<F>(
    source: &[[f32; 3]],
    target: &[[f32; 3]],
    mut keep: F,
) -> Result<Fit, AlignError>
where
    F: FnMut(usize) -> bool,
{
    if source.len() != target.len() {
        return Err(AlignError::LengthMismatch(source.len(), target.len()));
    }
    let kept: Vec<usize> = (0..source.len()).filter(|&i| keep(i)).collect();
    if kept.is_empty() {
        return Err(AlignError::NoPoints);
    }
    let n = kept.len() as f64;

    // 1. Centroids
    let mut mean_src = [0.0f64; 3];
    let mut mean_tgt = [0.0f64; 3];
    for &i in &kept {
        for k in 0..3 {
            mean_src[k] += source[i][k] as f64;
            mean_tgt[k] += target[i][k] as f64;
        }
    }
    for k in 0..3 {
        mean_src[k] /= n;
        mean_tgt[k] /= n;
    }

    // 2. Cross-covariance R = Σ (tgt_i − meanB)·(src_i − meanA)ᵗ
    let mut r = [[0.0f64; 3]; 3];
    for &i in &kept {
        let a = [
            source[i][0] as f64 - mean_src[0],
            source[i][1] as f64 - mean_src[1],
            source[i][2] as f64 - mean_src[2],
        ];
        let b = [
            target[i][0] as f64 - mean_tgt[0],
            target[i][1] as f64 - mean_tgt[1],
            target[i][2] as f64 - mean_tgt[2],
        ];
        for row in 0..3 {
            for col in 0..3 {
                r[row][col] += b[row] * a[col];
            }
        }
    }

    // 3. Eigendecomposition of C = RᵗR (symmetric PSD), ascending μ
    let c = linalg::mat_mul(&linalg::transpose(&r), &r);
    let eig = sym_eigen_3x3(&c);
    let tol = eig.values[2].max(0.0) * RANK_TOLERANCE;

    // Rank < 2: the rotation is underdetermined and 1/√μ is unusable
    if eig.values[1] <= tol {
        return Err(AlignError::DegeneratePointSet);
    }

    // 4. U columns: u_i = R·a_i / √μ_i. A planar set leaves μ_0 ≈ 0;
    //    its column is completed perpendicular to the other two.
    let u2 = linalg::scale(&linalg::mat_vec(&r, &eig.vectors[2]), 1.0 / eig.values[2].sqrt());
    let u1 = linalg::scale(&linalg::mat_vec(&r, &eig.vectors[1]), 1.0 / eig.values[1].sqrt());
    let mut u0 = if eig.values[0] > tol {
        linalg::scale(&linalg::mat_vec(&r, &eig.vectors[0]), 1.0 / eig.values[0].sqrt())
    } else {
        let mut perp = linalg::cross(&u1, &u2);
        linalg::normalize(&mut perp);
        perp
    };

    let mut rotation = assemble(&u0, &u1, &u2, &eig.vectors);

    // Reflection guard: flip the least-significant column so det = +1
    if linalg::determinant(&rotation) < 0.0 {
        u0 = linalg::scale(&u0, -1.0);
        rotation = assemble(&u0, &u1, &u2, &eig.vectors);
    }

    // 5. Translation: meanB − U·meanA, so x ↦ U·x + t maps source onto
    //    target everywhere with a single uniform rule
    let rotated_mean = linalg::mat_vec(&rotation, &mean_src);
    let translation = linalg::sub(&mean_tgt, &rotated_mean);

    // 6. Post-fit RMSD over the fitted pairs
    let mut sum_sq = 0.0f64;
    for &i in &kept {
        let p = linalg::mat_vec(
            &rotation,
            &[source[i][0] as f64, source[i][1] as f64, source[i][2] as f64],
        );
        let dx = p[0] + translation[0] - target[i][0] as f64;
        let dy = p[1] + translation[1] - target[i][1] as f64;
        let dz = p[2] + translation[2] - target[i][2] as f64;
        sum_sq += dx * dx + dy * dy + dz * dz;
    }
    let rmsd = (sum_sq / n).sqrt() as f32;

    Ok(Fit {
        transform: RigidTransform::from_parts(&rotation, &translation),
        rmsd,
        n_points: kept.len(),
    })
}

/// Build U = Σ u_i ⊗ a_i from its column/eigenvector pairs
fn assemble(
    u0: &[f64; 3],
    u1: &[f64; 3],
    u2: &[f64; 3],
    vectors: &[[f64; 3]; 3],
) -> [[f64; 3]; 3] {
    let cols = [u0, u1, u2];
    let mut u = [[0.0f64; 3]; 3];
    for (ui, ai) in cols.iter().zip(vectors.iter()) {
        for row in 0..3 {
            for col in 0..3 {
                u[row][col] += ui[row] * ai[col];
            }
        }
    }
    u
}
