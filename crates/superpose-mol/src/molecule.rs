//! Molecule container
//!
//! Atoms are stored in a flat array; bonds reference atoms by index;
//! coordinates live in a parallel [`CoordSet`]. Just enough container to
//! feed the superposition engine — no topology perception, no I/O.

use lin_alg::f32::Vec3;

use crate::atom::Atom;
use crate::bond::{Bond, BondOrderType};
use crate::coordset::CoordSet;
use crate::error::{MolError, MolResult};
use crate::index::{AtomIndex, BondIndex};

/// A molecule: atoms, bonds, and one coordinate per atom
#[derive(Debug, Clone, Default)]
pub struct Molecule {
    pub name: String,
    atoms: Vec<Atom>,
    bonds: Vec<Bond>,
    coords: CoordSet,
}

impl Molecule {
    pub fn new(name: impl Into<String>) -> Self {
        Molecule {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add an atom with its position, returning its index
    pub fn add_atom(&mut self, atom: Atom, pos: Vec3) -> AtomIndex {
        let index = AtomIndex::from(self.atoms.len());
        self.atoms.push(atom);
        self.coords.push(pos);
        index
    }

    /// Add a bond between two existing atoms.
    ///
    /// Fails on self-loops and out-of-range indices.
    pub fn add_bond(
        &mut self,
        a1: AtomIndex,
        a2: AtomIndex,
        order: BondOrderType,
    ) -> MolResult<BondIndex> {
        if a1 == a2
            || a1.as_usize() >= self.atoms.len()
            || a2.as_usize() >= self.atoms.len()
        {
            return Err(MolError::InvalidBond(a1.as_u32(), a2.as_u32()));
        }
        let index = BondIndex::from(self.bonds.len());
        self.bonds.push(Bond::new(a1, a2, order));
        Ok(index)
    }

    #[inline]
    pub fn atom_count(&self) -> usize {
        self.atoms.len()
    }

    #[inline]
    pub fn bond_count(&self) -> usize {
        self.bonds.len()
    }

    pub fn atom(&self, index: AtomIndex) -> Option<&Atom> {
        self.atoms.get(index.as_usize())
    }

    pub fn bond(&self, index: BondIndex) -> Option<&Bond> {
        self.bonds.get(index.as_usize())
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    pub fn bonds(&self) -> &[Bond] {
        &self.bonds
    }

    /// Position of an atom
    pub fn position(&self, index: AtomIndex) -> Option<Vec3> {
        self.coords.get(index.as_usize())
    }

    pub fn coords(&self) -> &CoordSet {
        &self.coords
    }

    pub fn coords_mut(&mut self) -> &mut CoordSet {
        &mut self.coords
    }
}
