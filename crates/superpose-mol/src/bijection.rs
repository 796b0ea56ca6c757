//! Atom bijection: an index-aligned pairing between two molecules
//!
//! An [`AtomBijection`] records which atom of the source molecule
//! corresponds to which atom of the target. The superposition engine
//! only reads it; applying a transform mutates coordinate storage, never
//! the bijection itself.

use crate::error::{MolError, MolResult};
use crate::index::AtomIndex;
use crate::molecule::Molecule;

/// Ordered list of (source atom, target atom) pairs
#[derive(Debug, Clone, Default)]
pub struct AtomBijection {
    pairs: Vec<(AtomIndex, AtomIndex)>,
}

impl AtomBijection {
    pub fn new() -> Self {
        AtomBijection::default()
    }

    /// The trivial bijection pairing atom i with atom i, for `n` atoms
    pub fn identity(n: usize) -> Self {
        AtomBijection {
            pairs: (0..n as u32)
                .map(|i| (AtomIndex(i), AtomIndex(i)))
                .collect(),
        }
    }

    /// Add a correspondence
    pub fn push(&mut self, source: AtomIndex, target: AtomIndex) {
        self.pairs.push((source, target));
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(AtomIndex, AtomIndex)> {
        self.pairs.iter()
    }

    pub fn pairs(&self) -> &[(AtomIndex, AtomIndex)] {
        &self.pairs
    }

    /// Extract the paired coordinates from two molecules, index-aligned.
    ///
    /// Fails if any pair references an atom outside its molecule.
    pub fn paired_positions(
        &self,
        source: &Molecule,
        target: &Molecule,
    ) -> MolResult<(Vec<[f32; 3]>, Vec<[f32; 3]>)> {
        let mut src = Vec::with_capacity(self.pairs.len());
        let mut tgt = Vec::with_capacity(self.pairs.len());
        for &(si, ti) in &self.pairs {
            let sp = source
                .position(si)
                .ok_or(MolError::AtomIndexOutOfBounds(si.as_u32(), source.atom_count()))?;
            let tp = target
                .position(ti)
                .ok_or(MolError::AtomIndexOutOfBounds(ti.as_u32(), target.atom_count()))?;
            src.push([sp.x, sp.y, sp.z]);
            tgt.push([tp.x, tp.y, tp.z]);
        }
        Ok((src, tgt))
    }
}
