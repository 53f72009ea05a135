//! Rotor: a single wired wheel with ring setting, position and notches.
//!
//! The signal enters a rotor through the contact under the current window
//! offset, crosses the fixed wiring, and leaves through the contact shifted
//! back by the same amount. The offset between wiring and alphabet ring is
//! `(position - ring_setting) mod 26` on both sides of the lookup.

use crate::error::{CipherError, Result};
use crate::permutation::Permutation;
use crate::utils::letter::{Letter, ALPHABET_LEN};

/// A rotor position or ring setting, given as an offset or as a letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    /// Numeric offset `0..=25`.
    Offset(u8),
    /// Window letter `'A'..='Z'`, `A` being offset 0.
    Letter(char),
}

impl Setting {
    /// Resolves to an offset `0..26`.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidSetting`] for offsets above 25 or
    /// characters outside `'A'..='Z'`.
    pub fn resolve(self) -> Result<Letter> {
        match self {
            Setting::Offset(offset) => Letter::from_index(offset as usize).ok_or_else(|| {
                CipherError::setting(format!("offset {offset} is outside 0..=25"))
            }),
            Setting::Letter(c) => Letter::from_char(c)
                .map_err(|_| CipherError::setting(format!("{c:?} is not a letter 'A'..='Z'"))),
        }
    }
}

impl From<u8> for Setting {
    fn from(offset: u8) -> Self {
        Setting::Offset(offset)
    }
}

impl From<char> for Setting {
    fn from(c: char) -> Self {
        Setting::Letter(c)
    }
}

impl From<Letter> for Setting {
    fn from(letter: Letter) -> Self {
        Setting::Offset(letter.index() as u8)
    }
}

/// One wheel of the rotor stack.
///
/// Wiring and notches are fixed at construction. Position and ring setting
/// are session configuration, set before each message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rotor {
    wiring: Permutation,
    notches: Vec<Letter>,
    position: Letter,
    ring_setting: Letter,
    stationary: bool,
}

impl Rotor {
    /// Creates a stepping rotor at position `A`, ring setting 0.
    ///
    /// `notches` are the window letters at which this rotor, when it is about
    /// to step, also drives the rotor to its left (rotor I: `Q`).
    pub fn new(wiring: Permutation, notches: &[Letter]) -> Self {
        let mut notches = notches.to_vec();
        notches.sort();
        notches.dedup();
        Rotor {
            wiring,
            notches,
            position: Letter::A,
            ring_setting: Letter::A,
            stationary: false,
        }
    }

    /// Creates a stepping rotor from a wiring table and a notch string.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidWiring`] for a bad table and
    /// [`CipherError::InvalidSetting`] for a notch outside `'A'..='Z'`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rotorcipher::Rotor;
    ///
    /// let mut rotor = Rotor::from_table("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q").unwrap();
    /// rotor.set_position('P').unwrap();
    /// assert!(!rotor.at_notch());
    /// assert!(rotor.step_forward());
    /// assert_eq!(rotor.window(), 'Q');
    /// ```
    pub fn from_table(wiring: &str, notches: &str) -> Result<Self> {
        let wiring = Permutation::from_table(wiring)?;
        let notches = notches
            .chars()
            .map(|c| {
                Letter::from_char(c).map_err(|_| {
                    CipherError::setting(format!("notch {c:?} is not a letter 'A'..='Z'"))
                })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(wiring, &notches))
    }

    /// Creates a rotor that is never driven and has no notch.
    ///
    /// Models the thin fourth wheel of the naval machine, which sits in the
    /// leftmost slot with no pawl to turn it.
    pub fn stationary(wiring: Permutation) -> Self {
        Rotor {
            stationary: true,
            ..Self::new(wiring, &[])
        }
    }

    /// Sets the ring setting (Ringstellung).
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidSetting`] outside `0..=25` / `'A'..='Z'`.
    pub fn set_ring_setting(&mut self, ring: impl Into<Setting>) -> Result<()> {
        self.ring_setting = ring.into().resolve()?;
        Ok(())
    }

    /// Sets the rotational position shown in the window.
    ///
    /// # Errors
    /// Returns [`CipherError::InvalidSetting`] outside `0..=25` / `'A'..='Z'`.
    pub fn set_position(&mut self, position: impl Into<Setting>) -> Result<()> {
        self.turn_to(position.into().resolve()?);
        Ok(())
    }

    pub(crate) fn turn_to(&mut self, position: Letter) {
        self.position = position;
    }

    /// Advances one place and reports whether the new position is a notch.
    pub fn step_forward(&mut self) -> bool {
        self.position = self.position.shifted(1);
        self.at_notch()
    }

    /// Whether the current position is one of the notch positions.
    pub fn at_notch(&self) -> bool {
        self.notches.contains(&self.position)
    }

    /// Signal path right to left, towards the reflector.
    pub fn encode_forward(&self, letter: Letter) -> Letter {
        let shift = self.shift();
        self.wiring.apply(letter.shifted(shift)).unshifted(shift)
    }

    /// Signal path left to right, back from the reflector.
    pub fn encode_backward(&self, letter: Letter) -> Letter {
        let shift = self.shift();
        self.wiring
            .apply_inverse(letter.shifted(shift))
            .unshifted(shift)
    }

    fn shift(&self) -> usize {
        (self.position.index() + ALPHABET_LEN - self.ring_setting.index()) % ALPHABET_LEN
    }

    /// Current position as an offset.
    pub fn position(&self) -> Letter {
        self.position
    }

    /// Current position as the window letter.
    pub fn window(&self) -> char {
        self.position.to_char()
    }

    /// Ring setting as an offset `0..26`.
    pub fn ring_setting(&self) -> u8 {
        self.ring_setting.index() as u8
    }

    /// Turnover positions, sorted.
    pub fn notches(&self) -> &[Letter] {
        &self.notches
    }

    /// True for a wheel no pawl ever drives.
    pub fn is_stationary(&self) -> bool {
        self.stationary
    }

    /// Wiring as seen at position `A`, ring setting 0.
    pub fn wiring(&self) -> &Permutation {
        &self.wiring
    }
}
