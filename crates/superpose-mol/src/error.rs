//! Error types for molecular operations

use superpose_algos::AlignError;
use thiserror::Error;

/// Errors that can occur when working with molecular data
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MolError {
    /// Atom index is out of bounds
    #[error("Atom index {0} is out of bounds (max: {1})")]
    AtomIndexOutOfBounds(u32, usize),

    /// Invalid bond (self-loop or out-of-range atoms)
    #[error("Invalid bond: atom1={0}, atom2={1}")]
    InvalidBond(u32, u32),

    /// Bond order code outside the defined set
    #[error("Invalid bond order code: {0}")]
    InvalidBondOrder(i32),

    /// Bijection has no pairs to fit
    #[error("Atom bijection is empty")]
    EmptyBijection,

    /// Alignment failure from the geometric engine
    #[error(transparent)]
    Align(#[from] AlignError),
}

/// Result type for molecular operations
pub type MolResult<T> = Result<T, MolError>;
