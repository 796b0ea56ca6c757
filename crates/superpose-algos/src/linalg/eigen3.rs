//! Symmetric 3×3 eigendecomposition
//!
//! Cyclic Jacobi rotations. Sufficient for the covariance matrices the
//! Kabsch fit produces (symmetric positive semi-definite), where the
//! method converges in a handful of sweeps.
//!
//! Matrices are row-major: `m[row][col]`.

/// Eigendecomposition of a symmetric 3×3 matrix.
///
/// `values` are sorted ascending; `vectors[i]` is the unit eigenvector
/// for `values[i]`. The eigenvectors are mutually orthonormal.
#[derive(Debug, Clone)]
pub struct SymEigen3 {
    pub values: [f64; 3],
    pub vectors: [[f64; 3]; 3],
}

/// Compute eigenvalues and eigenvectors of a symmetric 3×3 matrix.
///
/// Only the upper triangle is read; the caller is trusted to pass a
/// symmetric matrix.
pub fn sym_eigen_3x3(m: &[[f64; 3]; 3]) -> SymEigen3 {
    let mut a = *m;

    // Eigenvector matrix: starts as identity, accumulates rotations.
    // Column j of v is the j-th eigenvector.
    let mut v = [
        [1.0f64, 0.0, 0.0],
        [0.0, 1.0, 0.0],
        [0.0, 0.0, 1.0],
    ];

    // Cyclic Jacobi: sweep the (0,1), (0,2), (1,2) pairs until the
    // off-diagonal mass vanishes.
    for _ in 0..50 {
        let off = a[0][1] * a[0][1] + a[0][2] * a[0][2] + a[1][2] * a[1][2];
        if off < 1e-30 {
            break;
        }
        for &(p, q) in &[(0usize, 1usize), (0, 2), (1, 2)] {
            if a[p][q].abs() < 1e-15 {
                continue;
            }
            jacobi_rotate(&mut a, &mut v, p, q);
        }
    }

    let mut order = [0usize, 1, 2];
    // Ascending by eigenvalue (diagonal of a)
    if a[order[0]][order[0]] > a[order[1]][order[1]] {
        order.swap(0, 1);
    }
    if a[order[1]][order[1]] > a[order[2]][order[2]] {
        order.swap(1, 2);
    }
    if a[order[0]][order[0]] > a[order[1]][order[1]] {
        order.swap(0, 1);
    }

    let values = [
        a[order[0]][order[0]],
        a[order[1]][order[1]],
        a[order[2]][order[2]],
    ];
    let vectors = [
        [v[0][order[0]], v[1][order[0]], v[2][order[0]]],
        [v[0][order[1]], v[1][order[1]], v[2][order[1]]],
        [v[0][order[2]], v[1][order[2]], v[2][order[2]]],
    ];

    SymEigen3 { values, vectors }
}

/// Apply a single Jacobi rotation eliminating a[p][q].
fn jacobi_rotate(a: &mut [[f64; 3]; 3], v: &mut [[f64; 3]; 3], p: usize, q: usize) {
    let app = a[p][p];
    let aqq = a[q][q];
    let apq = a[p][q];

    let (c, s) = if (app - aqq).abs() < 1e-15 {
        // Equal diagonal elements: rotate by exactly 45°
        let inv_sqrt2 = 1.0 / 2.0f64.sqrt();
        (inv_sqrt2, if apq > 0.0 { inv_sqrt2 } else { -inv_sqrt2 })
    } else {
        let tau = (aqq - app) / (2.0 * apq);
        let t = if tau >= 0.0 {
            1.0 / (tau + (1.0 + tau * tau).sqrt())
        } else {
            -1.0 / (-tau + (1.0 + tau * tau).sqrt())
        };
        let c = 1.0 / (1.0 + t * t).sqrt();
        (c, t * c)
    };

    // A' = GᵀAG where G is the Givens rotation in the (p,q) plane
    a[p][p] = c * c * app - 2.0 * s * c * apq + s * s * aqq;
    a[q][q] = s * s * app + 2.0 * s * c * apq + c * c * aqq;
    a[p][q] = 0.0;
    a[q][p] = 0.0;

    let r = 3 - p - q; // remaining index
    let arp = a[r][p];
    let arq = a[r][q];
    a[r][p] = c * arp - s * arq;
    a[p][r] = a[r][p];
    a[r][q] = s * arp + c * arq;
    a[q][r] = a[r][q];

    // V' = V · G
    for i in 0..3 {
        let vip = v[i][p];
        let viq = v[i][q];
        v[i][p] = c * vip - s * viq;
        v[i][q] = s * vip + c * viq;
    }
}
