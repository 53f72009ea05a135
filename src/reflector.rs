//! Reflector (Umkehrwalze): fixed wiring that sends the signal back.

use crate::error::{CipherError, Result};
use crate::permutation::{Permutation, Substitution};
use crate::utils::letter::Letter;

/// Fixed-point-free involution at the far end of the rotor stack.
///
/// The physical reflector connects contacts in pairs, so no letter can map
/// to itself and the mapping is its own inverse. Both properties are checked
/// at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reflector {
    wiring: Permutation,
}

impl Reflector {
    /// Validates `wiring` as a reflector.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidReflector`] if the wiring is not an
    /// involution or has a fixed point.
    pub fn new(wiring: Permutation) -> Result<Self> {
        if let Some(fixed) = wiring.fixed_points().next() {
            return Err(CipherError::reflector(format!(
                "{fixed} is wired to itself"
            )));
        }
        if let Some(open) = Letter::all().find(|&l| wiring.apply(wiring.apply(l)) != l) {
            return Err(CipherError::reflector(format!(
                "{open} maps to {} but {} does not map back",
                wiring.apply(open),
                wiring.apply(open)
            )));
        }
        Ok(Reflector { wiring })
    }

    /// Parses and validates a 26-letter reflector table.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidWiring`] if the table is not a
    /// permutation, or [`CipherError::InvalidReflector`] as for [`new`](Self::new).
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcipher::{Letter, Reflector};
    ///
    /// let ukw_b = Reflector::from_table("YRUHQSLDPXNGOKMIEBFZCWVJAT").unwrap();
    /// let a = Letter::from_char('A').unwrap();
    /// assert_eq!(ukw_b.reflect(a).to_char(), 'Y');
    ///
    /// assert!(Reflector::from_table("ABCDEFGHIJKLMNOPQRSTUVWXYZ").is_err());
    /// ```
    pub fn from_table(table: &str) -> Result<Self> {
        Self::new(Permutation::from_table(table)?)
    }

    /// Partner of `letter`; never `letter` itself.
    pub fn reflect(&self, letter: Letter) -> Letter {
        self.wiring.apply(letter)
    }

    /// The underlying involution.
    pub fn wiring(&self) -> &Permutation {
        &self.wiring
    }
}

impl Substitution for Reflector {
    fn forward(&self, letter: Letter) -> Letter {
        self.reflect(letter)
    }

    fn backward(&self, letter: Letter) -> Letter {
        self.reflect(letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UKW_B: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";

    #[test]
    fn test_reflect_is_involution() {
        let ukw = Reflector::from_table(UKW_B).unwrap();
        for l in Letter::all() {
            assert_ne!(ukw.reflect(l), l);
            assert_eq!(ukw.reflect(ukw.reflect(l)), l);
        }
    }

    #[test]
    fn test_fixed_point_rejected() {
        // Swap the A/Y pair for a self-loop on A and on Y.
        let table = "ARUHQSLDPXNGOKMIEBFZCWVJYT";
        let err = Reflector::from_table(table).unwrap_err();
        assert_eq!(
            err,
            CipherError::InvalidReflector("A is wired to itself".into())
        );
    }

    #[test]
    fn test_non_involution_rejected() {
        // Rotor I wiring is a permutation but not an involution.
        let err = Reflector::from_table("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap_err();
        assert!(matches!(err, CipherError::InvalidReflector(_)));
    }

    #[test]
    fn test_bad_table_is_wiring_error() {
        let err = Reflector::from_table("YRUHQ").unwrap_err();
        assert!(matches!(err, CipherError::InvalidWiring(_)));
    }
}
