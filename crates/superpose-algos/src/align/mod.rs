//! Rigid-body alignment algorithms
//!
//! - Kabsch least-squares fit (RMSD-minimizing rotation + translation)
//! - RMSD evaluation without fitting
//! - Exact three-point rigid matching with degenerate-input fallbacks

pub mod kabsch;
pub mod three_point;

pub use kabsch::{fit, fit_filtered, rmsd, Fit};
pub use three_point::match_triples;
