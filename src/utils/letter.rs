//! The 26-letter alphabet the machine operates on.
//!
//! A [`Letter`] is a validated symbol `'A'..='Z'` stored as its index
//! `0..26`. Wiring lookups take and return `Letter`, which keeps every
//! substitution in the crate a total function once its inputs exist.

use std::fmt;

use crate::error::{CipherError, Result};

/// Number of symbols in the machine alphabet.
pub const ALPHABET_LEN: usize = 26;

/// One symbol of the machine alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Letter(u8);

impl Letter {
    /// The letter `A` (index 0).
    pub const A: Letter = Letter(0);

    /// Converts an upper-case ASCII letter.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidSymbol`] for anything outside `'A'..='Z'`,
    /// lower case included.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcipher::Letter;
    ///
    /// assert_eq!(Letter::from_char('C').unwrap().index(), 2);
    /// assert!(Letter::from_char('c').is_err());
    /// ```
    pub fn from_char(c: char) -> Result<Self> {
        if c.is_ascii_uppercase() {
            Ok(Letter(c as u8 - b'A'))
        } else {
            Err(CipherError::InvalidSymbol(c))
        }
    }

    /// Builds a letter from its alphabet index, or `None` past `25`.
    pub fn from_index(index: usize) -> Option<Self> {
        if index < ALPHABET_LEN {
            Some(Letter(index as u8))
        } else {
            None
        }
    }

    /// Builds a letter from any index, reduced modulo 26.
    pub fn wrapping(index: usize) -> Self {
        Letter((index % ALPHABET_LEN) as u8)
    }

    /// Alphabet index `0..26`.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The upper-case character for this letter.
    pub fn to_char(self) -> char {
        (b'A' + self.0) as char
    }

    /// Moves `by` places forward around the alphabet.
    pub fn shifted(self, by: usize) -> Self {
        Self::wrapping(self.index() + by % ALPHABET_LEN)
    }

    /// Moves `by` places backward around the alphabet.
    pub fn unshifted(self, by: usize) -> Self {
        Self::wrapping(self.index() + ALPHABET_LEN - by % ALPHABET_LEN)
    }

    /// Iterates `A..=Z` in order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN as u8).map(Letter)
    }
}

impl TryFrom<char> for Letter {
    type Error = CipherError;

    fn try_from(c: char) -> Result<Self> {
        Letter::from_char(c)
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> char {
        letter.to_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
