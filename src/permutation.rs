//! Permutation: bidirectional 26-letter substitution table.
//!
//! The building block under every piece of machine wiring. A permutation
//! stores its forward table and the inverse computed once at construction,
//! so both directions are O(1) lookups.

use std::fmt;

use crate::error::{CipherError, Result};
use crate::utils::letter::{Letter, ALPHABET_LEN};

/// A two-way letter substitution.
///
/// Implemented by every static wiring component (permutation, plugboard,
/// reflector). `backward` undoes `forward`.
pub trait Substitution {
    /// Maps a letter along the entry direction of the wiring.
    fn forward(&self, letter: Letter) -> Letter;

    /// Maps a letter along the return direction of the wiring.
    fn backward(&self, letter: Letter) -> Letter;
}

/// Immutable bijection over the alphabet.
///
/// Invariant: `forward[inverse[x]] == x` for every letter `x`.
#[derive(Clone, PartialEq, Eq)]
pub struct Permutation {
    forward: [Letter; ALPHABET_LEN],
    inverse: [Letter; ALPHABET_LEN],
}

impl Permutation {
    /// Builds a permutation from a 26-letter table.
    ///
    /// Position `i` of `table` holds the image of the `i`-th letter, so
    /// `"EKMF..."` sends `A` to `E`, `B` to `K`, and so on.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidWiring`] if the table is not 26 letters
    /// long, uses a symbol outside `'A'..='Z'`, or repeats a target.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcipher::{Letter, Permutation};
    ///
    /// let rotor_i = Permutation::from_table("EKMFLGDQVZNTOWYHXUSPAIBRCJ").unwrap();
    /// let a = Letter::from_char('A').unwrap();
    /// assert_eq!(rotor_i.apply(a).to_char(), 'E');
    /// assert_eq!(rotor_i.apply_inverse(rotor_i.apply(a)), a);
    ///
    /// assert!(Permutation::from_table("ABC").is_err());
    /// ```
    pub fn from_table(table: &str) -> Result<Self> {
        let count = table.chars().count();
        if count != ALPHABET_LEN {
            return Err(CipherError::wiring(format!(
                "table {table:?} has {count} symbols, expected {ALPHABET_LEN}"
            )));
        }

        let mut images = [Letter::A; ALPHABET_LEN];
        for (slot, c) in images.iter_mut().zip(table.chars()) {
            *slot = Letter::from_char(c).map_err(|_| {
                CipherError::wiring(format!("table {table:?} contains {c:?}"))
            })?;
        }
        Self::from_letters(images)
    }

    /// Builds a permutation from a table of images.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidWiring`] if any letter is the image of
    /// two different letters.
    pub fn from_letters(images: [Letter; ALPHABET_LEN]) -> Result<Self> {
        let mut inverse: [Option<Letter>; ALPHABET_LEN] = [None; ALPHABET_LEN];
        for (source, &target) in Letter::all().zip(images.iter()) {
            if let Some(previous) = inverse[target.index()] {
                return Err(CipherError::wiring(format!(
                    "{previous} and {source} both map to {target}"
                )));
            }
            inverse[target.index()] = Some(source);
        }

        // 26 distinct targets out of 26 letters: every slot is filled.
        let mut inverse_table = [Letter::A; ALPHABET_LEN];
        for (slot, source) in inverse_table.iter_mut().zip(inverse.iter()) {
            if let Some(source) = source {
                *slot = *source;
            }
        }

        Ok(Permutation {
            forward: images,
            inverse: inverse_table,
        })
    }

    /// The permutation sending every letter to itself.
    pub fn identity() -> Self {
        let mut table = [Letter::A; ALPHABET_LEN];
        for (slot, letter) in table.iter_mut().zip(Letter::all()) {
            *slot = letter;
        }
        Permutation {
            forward: table,
            inverse: table,
        }
    }

    /// Image of `letter`.
    pub fn apply(&self, letter: Letter) -> Letter {
        self.forward[letter.index()]
    }

    /// Preimage of `letter`.
    pub fn apply_inverse(&self, letter: Letter) -> Letter {
        self.inverse[letter.index()]
    }

    /// True when the permutation equals its own inverse.
    pub fn is_involution(&self) -> bool {
        self.forward == self.inverse
    }

    /// Letters mapped onto themselves.
    pub fn fixed_points(&self) -> impl Iterator<Item = Letter> + '_ {
        Letter::all().filter(move |&letter| self.apply(letter) == letter)
    }

    /// The forward table as a 26-letter string.
    pub fn wiring(&self) -> String {
        self.forward.iter().map(|&l| l.to_char()).collect()
    }
}

impl Substitution for Permutation {
    fn forward(&self, letter: Letter) -> Letter {
        self.apply(letter)
    }

    fn backward(&self, letter: Letter) -> Letter {
        self.apply_inverse(letter)
    }
}

impl fmt::Debug for Permutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Permutation").field(&self.wiring()).finish()
    }
}
