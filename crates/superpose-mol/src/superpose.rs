//! Molecule-level rigid superposition
//!
//! Glue between the containers and the geometric engine: extract paired
//! coordinates through an [`AtomBijection`], run the Kabsch fit, and
//! apply the resulting transform to the whole mobile structure.

use superpose_algos::{fit_filtered, RigidTransform};

use crate::bijection::AtomBijection;
use crate::error::{MolError, MolResult};
use crate::molecule::Molecule;

/// Options for [`superpose`]
#[derive(Debug, Clone, Default)]
pub struct SuperposeOptions {
    /// Exclude pairs involving hydrogen from the fit. The transform is
    /// still applied to every atom of the mobile molecule.
    pub heavy_atoms_only: bool,
}

/// Result of a molecule-level superposition
#[derive(Debug, Clone)]
pub struct Superposition {
    /// Transform that was applied to the mobile molecule
    pub transform: RigidTransform,
    /// RMSD over the fitted pairs after superposition
    pub rmsd: f32,
    /// Number of atom pairs used in the fit
    pub n_fitted: usize,
}

/// Superpose `mobile` onto `reference` using the given atom bijection.
///
/// Fits on the bijection's pairs (optionally heavy atoms only), then
/// transforms every coordinate of `mobile` in place.
pub fn superpose(
    mobile: &mut Molecule,
    reference: &Molecule,
    bijection: &AtomBijection,
    options: &SuperposeOptions,
) -> MolResult<Superposition> {
    if bijection.is_empty() {
        return Err(MolError::EmptyBijection);
    }
    let (src, tgt) = bijection.paired_positions(mobile, reference)?;

    let keep: Vec<bool> = if options.heavy_atoms_only {
        bijection
            .pairs()
            .iter()
            .map(|&(si, ti)| {
                let src_h = mobile.atom(si).is_some_and(|a| a.is_hydrogen());
                let tgt_h = reference.atom(ti).is_some_and(|a| a.is_hydrogen());
                !(src_h || tgt_h)
            })
            .collect()
    } else {
        vec![true; bijection.len()]
    };

    let fit = fit_filtered(&src, &tgt, |i| keep[i])?;
    mobile.coords_mut().transform(&fit.transform);

    Ok(Superposition {
        rmsd: fit.rmsd,
        n_fitted: fit.n_points,
        transform: fit.transform,
    })
}
