//! RotorStack: the mounted rotors and their stepping state machine.
//!
//! Rotors are stored left to right as seen through the windows. Stepping
//! is described right to left: rotor 0 is the rightmost (fast) rotor and
//! advances on every keystroke.
//!
//! ```text
//!   window:  [ n-1 ] ... [ 2 ] [ 1 ] [ 0 ]      ← keyboard side
//!   pawls:    p(n-1)      p2    p1    (ratchet)
//! ```
//!
//! Each movable rotor `i >= 1` carries a pawl resting on the notch ring of
//! rotor `i - 1`. When rotor `i - 1` shows a notch *before* the keystroke,
//! the pawl drops in and pushes both rotors `i` and `i - 1`. A middle rotor
//! sitting on its own notch is therefore pushed by the pawl on its left
//! even when the fast rotor did not carry: the double step.

use std::fmt;

use tracing::trace;

use crate::error::{CipherError, Result};
use crate::reflector::Reflector;
use crate::rotor::{Rotor, Setting};
use crate::utils::letter::Letter;

/// Ordered rotors, leftmost first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RotorStack {
    rotors: Vec<Rotor>,
}

impl RotorStack {
    /// Mounts `rotors`, given left to right.
    ///
    /// # Errors
    /// Returns [`CipherError::Configuration`] if no rotor is given or the
    /// rightmost rotor is stationary (nothing would ever move).
    pub fn new(rotors: Vec<Rotor>) -> Result<Self> {
        match rotors.last() {
            None => Err(CipherError::configuration("a rotor stack needs at least one rotor")),
            Some(fast) if fast.is_stationary() => Err(CipherError::configuration(
                "the rightmost rotor must be able to step",
            )),
            Some(_) => Ok(RotorStack { rotors }),
        }
    }

    /// Number of mounted rotors.
    pub fn rotor_count(&self) -> usize {
        self.rotors.len()
    }

    /// Mounted rotors, left to right.
    pub fn rotors(&self) -> &[Rotor] {
        &self.rotors
    }

    /// Sets every window, left to right.
    ///
    /// Validates the whole sequence before moving any rotor.
    ///
    /// # Errors
    /// [`CipherError::Configuration`] on a count mismatch,
    /// [`CipherError::InvalidSetting`] on a bad value.
    pub fn set_positions(&mut self, positions: &[Setting]) -> Result<()> {
        let resolved = self.resolve_all(positions, "positions")?;
        self.restore(&resolved);
        Ok(())
    }

    /// Turns the rotors to already validated window letters, left to right.
    pub(crate) fn restore(&mut self, positions: &[Letter]) {
        for (rotor, &position) in self.rotors.iter_mut().zip(positions) {
            rotor.turn_to(position);
        }
    }

    /// Window positions, left to right.
    pub fn window_letters(&self) -> Vec<Letter> {
        self.rotors.iter().map(Rotor::position).collect()
    }

    /// Sets every ring setting, left to right.
    ///
    /// # Errors
    /// [`CipherError::Configuration`] on a count mismatch,
    /// [`CipherError::InvalidSetting`] on a bad value.
    pub fn set_ring_settings(&mut self, rings: &[Setting]) -> Result<()> {
        let resolved = self.resolve_all(rings, "ring settings")?;
        for (rotor, ring) in self.rotors.iter_mut().zip(resolved) {
            rotor.set_ring_setting(ring)?;
        }
        Ok(())
    }

    fn resolve_all(&self, settings: &[Setting], what: &str) -> Result<Vec<Letter>> {
        if settings.len() != self.rotors.len() {
            return Err(CipherError::configuration(format!(
                "{} {what} given for {} rotors",
                settings.len(),
                self.rotors.len()
            )));
        }
        settings.iter().map(|s| s.resolve()).collect()
    }

    /// Window letters, left to right.
    pub fn positions(&self) -> String {
        self.rotors.iter().map(Rotor::window).collect()
    }

    /// Ring settings as offsets, left to right.
    pub fn ring_settings(&self) -> Vec<u8> {
        self.rotors.iter().map(Rotor::ring_setting).collect()
    }

    /// Advances the rotors for one keystroke.
    ///
    /// All notch states are sampled before any rotor moves.
    pub fn step(&mut self) {
        let count = self.rotors.len();
        // Indexed from the right: engaged[0] is the fast rotor.
        let engaged: Vec<bool> = self.rotors.iter().rev().map(Rotor::at_notch).collect();
        let has_pawl: Vec<bool> = self
            .rotors
            .iter()
            .rev()
            .map(|r| !r.is_stationary())
            .collect();

        let mut advance = vec![false; count];
        advance[0] = true;
        // Pawl i rests on the notch ring of rotor i - 1.
        let pawls = has_pawl.iter().skip(1).zip(&engaged);
        for (right, (&pawl, &notch)) in pawls.enumerate() {
            if pawl && notch {
                advance[right] = true;
                advance[right + 1] = true;
            }
        }

        for (rotor, &moves) in self.rotors.iter_mut().rev().zip(advance.iter()) {
            if moves && !rotor.is_stationary() {
                rotor.step_forward();
            }
        }
        trace!(positions = %self, "stepped");
    }

    /// Steps, then passes `letter` to the reflector and back.
    pub fn encode(&mut self, letter: Letter, reflector: &Reflector) -> Letter {
        self.step();
        self.transform(letter, reflector)
    }

    /// Signal path through the current positions without stepping.
    pub(crate) fn transform(&self, letter: Letter, reflector: &Reflector) -> Letter {
        let inward = self
            .rotors
            .iter()
            .rev()
            .fold(letter, |signal, rotor| rotor.encode_forward(signal));
        let reflected = reflector.reflect(inward);
        self.rotors
            .iter()
            .fold(reflected, |signal, rotor| rotor.encode_backward(signal))
    }
}

impl fmt::Display for RotorStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.positions())
    }
}
