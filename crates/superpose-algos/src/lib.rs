//! Rigid-body superposition algorithms
//!
//! This crate provides the geometric engine for molecular superposition:
//! - [`RigidTransform`] — rotation + translation value type, applied as `x ↦ R·x + t`
//! - Kabsch least-squares fit minimizing RMSD between paired point sets
//! - RMSD evaluation without fitting
//! - Exact three-point rigid matching with degenerate-input fallbacks

pub mod align;
pub mod linalg;
mod transform;

pub use align::kabsch::{fit, fit_filtered, rmsd, Fit};
pub use align::three_point::match_triples;
pub use transform::{apply_transform, translate, RigidTransform};

/// Errors from alignment algorithms
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AlignError {
    #[error("Coordinate arrays have different lengths: {0} vs {1}")]
    LengthMismatch(usize, usize),

    #[error("No points to fit (need at least 1)")]
    NoPoints,

    #[error("Point set is degenerate (collinear or coincident); rotation is underdetermined")]
    DegeneratePointSet,
}
