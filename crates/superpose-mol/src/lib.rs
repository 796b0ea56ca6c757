//! Molecular data structures for rigid superposition
//!
//! This crate provides the containers the geometric engine
//! (`superpose-algos`) operates on:
//!
//! - [`Atom`], [`Bond`], [`Molecule`] - minimal molecular records
//! - [`CoordSet`] - ordered point collection with in-place transforms
//! - [`AtomBijection`] - index-aligned atom correspondence between two molecules
//! - [`superpose`] - fit a bijection and move the mobile molecule onto the reference
//!
//! # Example
//!
//! ```rust
//! use superpose_mol::{superpose, Atom, AtomBijection, Element, Molecule, SuperposeOptions};
//! use lin_alg::f32::Vec3;
//!
//! let mut reference = Molecule::new("ref");
//! let mut mobile = Molecule::new("mob");
//! for (i, p) in [[0.0, 0.0, 0.0], [1.5, 0.0, 0.0], [0.0, 1.5, 0.0], [0.0, 0.0, 1.5]]
//!     .iter()
//!     .enumerate()
//! {
//!     reference.add_atom(
//!         Atom::new(format!("C{i}"), Element::Carbon),
//!         Vec3::new(p[0], p[1], p[2]),
//!     );
//!     mobile.add_atom(
//!         Atom::new(format!("C{i}"), Element::Carbon),
//!         Vec3::new(p[0] + 4.0, p[1], p[2]),
//!     );
//! }
//!
//! let bijection = AtomBijection::identity(4);
//! let result = superpose(
//!     &mut mobile,
//!     &reference,
//!     &bijection,
//!     &SuperposeOptions::default(),
//! )
//! .unwrap();
//! assert!(result.rmsd < 1e-4);
//! ```

mod atom;
mod bijection;
mod bond;
mod coordset;
mod element;
mod error;
mod index;
mod molecule;
mod superpose;

pub use atom::Atom;
pub use bijection::AtomBijection;
pub use bond::{Bond, BondOrderType};
pub use coordset::CoordSet;
pub use element::Element;
pub use error::{MolError, MolResult};
pub use index::{AtomIndex, BondIndex, INVALID_INDEX};
pub use molecule::Molecule;
pub use superpose::{superpose, SuperposeOptions, Superposition};

/// Re-export of commonly used types
pub mod prelude {
    pub use crate::atom::Atom;
    pub use crate::bijection::AtomBijection;
    pub use crate::bond::{Bond, BondOrderType};
    pub use crate::coordset::CoordSet;
    pub use crate::element::Element;
    pub use crate::error::{MolError, MolResult};
    pub use crate::index::{AtomIndex, BondIndex};
    pub use crate::molecule::Molecule;
    pub use crate::superpose::{superpose, SuperposeOptions, Superposition};
}
