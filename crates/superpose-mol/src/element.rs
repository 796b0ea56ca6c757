//! Chemical element classification
//!
//! A compact element set: enough to distinguish hydrogen from heavy
//! atoms for fit filtering, plus the common organic elements.

/// Chemical element of an atom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Element {
    Hydrogen,
    #[default]
    Carbon,
    Nitrogen,
    Oxygen,
    Phosphorus,
    Sulfur,
    /// Any element outside the compact set, by atomic number
    Other(u8),
}

impl Element {
    /// Look up an element from its symbol.
    ///
    /// `D` (deuterium) counts as hydrogen.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "H" | "D" => Some(Element::Hydrogen),
            "C" => Some(Element::Carbon),
            "N" => Some(Element::Nitrogen),
            "O" => Some(Element::Oxygen),
            "P" => Some(Element::Phosphorus),
            "S" => Some(Element::Sulfur),
            _ => None,
        }
    }

    /// The element symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Element::Hydrogen => "H",
            Element::Carbon => "C",
            Element::Nitrogen => "N",
            Element::Oxygen => "O",
            Element::Phosphorus => "P",
            Element::Sulfur => "S",
            Element::Other(_) => "X",
        }
    }

    /// Check whether this is hydrogen
    #[inline]
    pub fn is_hydrogen(&self) -> bool {
        *self == Element::Hydrogen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_lookup() {
        assert_eq!(Element::from_symbol("C"), Some(Element::Carbon));
        assert_eq!(Element::from_symbol("D"), Some(Element::Hydrogen));
        assert_eq!(Element::from_symbol("Xx"), None);
        assert_eq!(Element::Oxygen.symbol(), "O");
    }

    #[test]
    fn test_is_hydrogen() {
        assert!(Element::Hydrogen.is_hydrogen());
        assert!(!Element::Carbon.is_hydrogen());
        assert!(!Element::Other(26).is_hydrogen());
    }
}
