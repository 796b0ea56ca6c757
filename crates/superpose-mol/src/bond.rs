//! Bond data structure
//!
//! Provides the `Bond` struct and `BondOrderType` enum for representing
//! molecular bonds.

use crate::error::{MolError, MolResult};
use crate::index::AtomIndex;

/// Bond order classification
///
/// Numeric codes 1–4 map to the four ordered variants; any other
/// non-negative code is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum BondOrderType {
    /// Unknown or unspecified bond order
    #[default]
    Unknown = 0,
    /// Single bond
    Single = 1,
    /// Double bond
    Double = 2,
    /// Triple bond
    Triple = 3,
    /// Quadruple bond
    Quadruple = 4,
}

impl BondOrderType {
    /// Create from a raw numeric code.
    ///
    /// Codes 1–4 yield `Single` through `Quadruple`; any other
    /// non-negative code yields `Unknown`. Negative codes are rejected —
    /// no partial object is produced.
    pub fn from_code(code: i32) -> MolResult<Self> {
        match code {
            1 => Ok(BondOrderType::Single),
            2 => Ok(BondOrderType::Double),
            3 => Ok(BondOrderType::Triple),
            4 => Ok(BondOrderType::Quadruple),
            c if c >= 0 => Ok(BondOrderType::Unknown),
            c => Err(MolError::InvalidBondOrder(c)),
        }
    }

    /// Get the raw numeric code
    #[inline]
    pub fn code(&self) -> i32 {
        *self as i32
    }

    /// Check if this is a multiple bond (double, triple, or quadruple)
    #[inline]
    pub fn is_multiple(&self) -> bool {
        matches!(
            self,
            BondOrderType::Double | BondOrderType::Triple | BondOrderType::Quadruple
        )
    }
}

impl std::fmt::Display for BondOrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BondOrderType::Unknown => write!(f, "?"),
            BondOrderType::Single => write!(f, "-"),
            BondOrderType::Double => write!(f, "="),
            BondOrderType::Triple => write!(f, "#"),
            BondOrderType::Quadruple => write!(f, "$"),
        }
    }
}

/// A chemical bond between two atoms.
///
/// By convention `atom1 <= atom2` (indices are ordered at construction).
/// Immutable once constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bond {
    /// Index of the first atom
    pub atom1: AtomIndex,
    /// Index of the second atom
    pub atom2: AtomIndex,
    /// Bond order classification
    pub order: BondOrderType,
}

impl Bond {
    /// Create a new bond between two atoms.
    ///
    /// The atom indices are ordered so that `atom1 <= atom2`.
    pub fn new(a1: AtomIndex, a2: AtomIndex, order: BondOrderType) -> Self {
        let (atom1, atom2) = if a1.0 <= a2.0 { (a1, a2) } else { (a2, a1) };
        Bond {
            atom1,
            atom2,
            order,
        }
    }

    /// Check if this bond involves the given atom
    #[inline]
    pub fn involves(&self, atom: AtomIndex) -> bool {
        self.atom1 == atom || self.atom2 == atom
    }

    /// Get the other atom in the bond.
    ///
    /// Returns `None` if the given atom is not part of this bond.
    #[inline]
    pub fn other(&self, atom: AtomIndex) -> Option<AtomIndex> {
        if self.atom1 == atom {
            Some(self.atom2)
        } else if self.atom2 == atom {
            Some(self.atom1)
        } else {
            None
        }
    }

    /// Check if this bond connects the two given atoms (in any order)
    #[inline]
    pub fn connects(&self, a1: AtomIndex, a2: AtomIndex) -> bool {
        (self.atom1 == a1 && self.atom2 == a2) || (self.atom1 == a2 && self.atom2 == a1)
    }
}

impl std::fmt::Display for Bond {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.atom1, self.order, self.atom2)
    }
}
