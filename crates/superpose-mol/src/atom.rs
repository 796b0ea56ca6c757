//! Atom data structure

use crate::element::Element;

/// An atom: a named point in 3D space with an element classification.
///
/// Coordinates live in the molecule's [`crate::CoordSet`], indexed in
/// parallel with the atom list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Atom {
    /// Atom name (e.g. "CA", "H1")
    pub name: String,
    /// Chemical element
    pub element: Element,
}

impl Atom {
    pub fn new(name: impl Into<String>, element: Element) -> Self {
        Atom {
            name: name.into(),
            element,
        }
    }

    /// Check whether this atom is a hydrogen
    #[inline]
    pub fn is_hydrogen(&self) -> bool {
        self.element.is_hydrogen()
    }
}
