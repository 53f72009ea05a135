//! Plugboard (Steckerbrett): up to ten swapped letter pairs.
//!
//! The plugboard sits between the keyboard and the entry wheel and is
//! crossed twice per keystroke. Its mapping is an involution by
//! construction, so one `swap` serves both directions.

use std::fmt;

use crate::error::{CipherError, Result};
use crate::permutation::Substitution;
use crate::utils::letter::{Letter, ALPHABET_LEN};

/// Maximum number of cables on the historical plugboard.
pub const MAX_PAIRS: usize = 10;

/// Symmetric partial substitution applied before and after the rotors.
#[derive(Clone, PartialEq, Eq)]
pub struct Plugboard {
    wiring: [Letter; ALPHABET_LEN],
    pairs: Vec<(Letter, Letter)>,
}

impl Default for Plugboard {
    fn default() -> Self {
        Self::empty()
    }
}

impl Plugboard {
    /// A plugboard with no cables: every letter maps to itself.
    pub fn empty() -> Self {
        let mut wiring = [Letter::A; ALPHABET_LEN];
        for (slot, letter) in wiring.iter_mut().zip(Letter::all()) {
            *slot = letter;
        }
        Plugboard {
            wiring,
            pairs: Vec::new(),
        }
    }

    /// Builds a plugboard from two-letter pair strings such as `"AB"`.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidPlugboard`] if more than [`MAX_PAIRS`]
    /// pairs are given, a pair is not exactly two letters, a pair names the
    /// same letter twice, a letter is outside `'A'..='Z'`, or a letter
    /// appears in more than one pair.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcipher::{Letter, Plugboard};
    ///
    /// let board = Plugboard::new(&["AB", "CD"]).unwrap();
    /// let a = Letter::from_char('A').unwrap();
    /// assert_eq!(board.swap(a).to_char(), 'B');
    /// assert_eq!(board.swap(board.swap(a)), a);
    ///
    /// assert!(Plugboard::new(&["AB", "BC"]).is_err());
    /// ```
    pub fn new<S: AsRef<str>>(pairs: &[S]) -> Result<Self> {
        if pairs.len() > MAX_PAIRS {
            return Err(CipherError::plugboard(format!(
                "{} pairs given, at most {MAX_PAIRS} cables are available",
                pairs.len()
            )));
        }

        let mut board = Self::empty();
        for pair in pairs {
            let (a, b) = Self::parse_pair(pair.as_ref())?;
            for letter in [a, b] {
                if board.swap(letter) != letter {
                    return Err(CipherError::plugboard(format!(
                        "letter {letter} is used by more than one pair"
                    )));
                }
            }
            board.wiring[a.index()] = b;
            board.wiring[b.index()] = a;
            board.pairs.push((a, b));
        }
        Ok(board)
    }

    /// Parses a whitespace separated pair list, e.g. `"AV BS CG"`.
    ///
    /// An empty or blank string yields an empty plugboard.
    pub fn parse(spec: &str) -> Result<Self> {
        let pairs: Vec<&str> = spec.split_whitespace().collect();
        Self::new(&pairs)
    }

    fn parse_pair(pair: &str) -> Result<(Letter, Letter)> {
        let mut chars = pair.chars();
        let (Some(first), Some(second), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(CipherError::plugboard(format!(
                "pair {pair:?} must be exactly two letters"
            )));
        };
        let to_letter = |c: char| {
            Letter::from_char(c)
                .map_err(|_| CipherError::plugboard(format!("pair {pair:?} contains {c:?}")))
        };
        let (a, b) = (to_letter(first)?, to_letter(second)?);
        if a == b {
            return Err(CipherError::plugboard(format!(
                "pair {pair:?} connects a letter to itself"
            )));
        }
        Ok((a, b))
    }

    /// Returns the partner of `letter`, or `letter` itself when unplugged.
    pub fn swap(&self, letter: Letter) -> Letter {
        self.wiring[letter.index()]
    }

    /// Configured pairs in the order they were plugged.
    pub fn pairs(&self) -> &[(Letter, Letter)] {
        &self.pairs
    }

    /// True when no cable is plugged.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl Substitution for Plugboard {
    fn forward(&self, letter: Letter) -> Letter {
        self.swap(letter)
    }

    fn backward(&self, letter: Letter) -> Letter {
        self.swap(letter)
    }
}

impl fmt::Display for Plugboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (a, b)) in self.pairs.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{a}{b}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Plugboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Plugboard").field(&self.to_string()).finish()
    }
}
