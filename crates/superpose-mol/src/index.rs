//! Type-safe index wrappers
//!
//! Newtype wrappers around indices prevent accidentally mixing atom
//! indices with bond indices.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Invalid index marker value
pub const INVALID_INDEX: u32 = u32::MAX;

/// Generates a type-safe index type with the common implementations.
macro_rules! define_index {
    (
        $(#[$meta:meta])*
        $name:ident, $debug_name:literal
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
        #[repr(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Create a new index
            #[inline]
            pub const fn new(index: u32) -> Self {
                $name(index)
            }

            /// Get the raw index value as usize
            #[inline]
            pub const fn as_usize(&self) -> usize {
                self.0 as usize
            }

            /// Get the raw u32 value
            #[inline]
            pub const fn as_u32(&self) -> u32 {
                self.0
            }

            /// Check if this is a valid index
            #[inline]
            pub const fn is_valid(&self) -> bool {
                self.0 != INVALID_INDEX
            }

            /// Create an invalid index
            #[inline]
            pub const fn invalid() -> Self {
                $name(INVALID_INDEX)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}({})", $debug_name, self.0)
                } else {
                    write!(f, "{}(INVALID)", $debug_name)
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}", self.0)
                } else {
                    write!(f, "INVALID")
                }
            }
        }

        impl From<u32> for $name {
            #[inline]
            fn from(index: u32) -> Self {
                $name(index)
            }
        }

        impl From<usize> for $name {
            #[inline]
            fn from(index: usize) -> Self {
                $name(index as u32)
            }
        }

        impl From<$name> for u32 {
            #[inline]
            fn from(index: $name) -> Self {
                index.0
            }
        }

        impl From<$name> for usize {
            #[inline]
            fn from(index: $name) -> Self {
                index.0 as usize
            }
        }
    };
}

define_index!(
    /// Type-safe index into an atom array
    ///
    /// Prevents accidentally using a bond index where an atom index is expected.
    AtomIndex, "AtomIndex"
);

define_index!(
    /// Type-safe index into a bond array
    BondIndex, "BondIndex"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atom_index() {
        let idx = AtomIndex::new(42);
        assert_eq!(idx.as_usize(), 42);
        assert_eq!(idx.as_u32(), 42);
        assert!(idx.is_valid());

        let invalid = AtomIndex::invalid();
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_index_conversions() {
        let atom_idx: AtomIndex = 100u32.into();
        assert_eq!(u32::from(atom_idx), 100);

        let bond_idx: BondIndex = 50usize.into();
        assert_eq!(usize::from(bond_idx), 50);
    }

    #[test]
    fn test_index_display() {
        assert_eq!(format!("{}", AtomIndex::new(5)), "5");
        assert_eq!(format!("{}", AtomIndex::invalid()), "INVALID");
        assert_eq!(format!("{:?}", AtomIndex::new(5)), "AtomIndex(5)");
        assert_eq!(format!("{:?}", BondIndex::invalid()), "BondIndex(INVALID)");
    }

    #[test]
    fn test_index_ordering() {
        assert!(AtomIndex::new(1) < AtomIndex::new(2));
    }
}
