//! CipherEngine: the complete machine.
//!
//! Composes the signal path
//!
//! ```text
//! key → Plugboard → entry wheel → RotorStack (right → left) → Reflector
//!     → RotorStack (left → right) → entry wheel → Plugboard → lamp
//! ```
//!
//! and steps the rotors once per keystroke before the signal flows. For any
//! fixed rotor position the path is an involution, which is why decoding is
//! encoding from the same start positions.

use tracing::debug;

use crate::error::{CipherError, Result};
use crate::permutation::{Permutation, Substitution};
use crate::plugboard::Plugboard;
use crate::reflector::Reflector;
use crate::rotor::{Rotor, Setting};
use crate::rotor_stack::RotorStack;
use crate::utils::letter::Letter;

/// Plain wiring data for one rotor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RotorTable {
    /// 26-letter wiring table.
    pub wiring: String,
    /// Notch letters, e.g. `"Q"` or `"ZM"`.
    pub notches: String,
    /// Never steps (naval thin wheel).
    pub stationary: bool,
}

impl RotorTable {
    pub fn new(wiring: impl Into<String>, notches: impl Into<String>) -> Self {
        RotorTable {
            wiring: wiring.into(),
            notches: notches.into(),
            stationary: false,
        }
    }

    pub fn stationary(wiring: impl Into<String>) -> Self {
        RotorTable {
            wiring: wiring.into(),
            notches: String::new(),
            stationary: true,
        }
    }

    fn build(&self) -> Result<Rotor> {
        if self.stationary {
            if !self.notches.is_empty() {
                return Err(CipherError::configuration(
                    "a stationary rotor cannot carry notches",
                ));
            }
            Ok(Rotor::stationary(Permutation::from_table(&self.wiring)?))
        } else {
            Rotor::from_table(&self.wiring, &self.notches)
        }
    }
}

/// Everything needed to wire a machine, as plain tables.
///
/// This is what configuration collaborators hand to the core.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MachineTables {
    /// Rotors left to right as mounted.
    pub rotors: Vec<RotorTable>,
    /// Reflector wiring table.
    pub reflector: String,
    /// Plugboard pairs such as `"AB"`.
    pub plugboard: Vec<String>,
    /// Entry wheel wiring; identity when absent.
    pub entry_wheel: Option<String>,
}

/// A configured rotor cipher machine.
///
/// Encoding mutates rotor positions: one instance must not be shared between
/// threads without external locking. Independent instances share nothing.
///
/// # Examples
///
/// ```
/// use rotorcipher::{CipherEngine, MachineTables, RotorTable};
///
/// let tables = MachineTables {
///     rotors: vec![
///         RotorTable::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q"),
///         RotorTable::new("AJDKSIRUXBLHWTMCQGZNPYFVOE", "E"),
///         RotorTable::new("BDFHJLCPRTXVZNYEIWGAKMUSQO", "V"),
///     ],
///     reflector: "YRUHQSLDPXNGOKMIEBFZCWVJAT".into(),
///     ..MachineTables::default()
/// };
///
/// let mut machine = CipherEngine::from_tables(&tables).unwrap();
/// machine.set_rotor_positions("AAA").unwrap();
/// let ciphertext = machine.encode_message("AAAAA").unwrap();
/// assert_eq!(ciphertext, "BDZGO");
///
/// machine.reset();
/// assert_eq!(machine.decode_message(&ciphertext).unwrap(), "AAAAA");
/// ```
#[derive(Debug, Clone)]
pub struct CipherEngine {
    plugboard: Plugboard,
    entry_wheel: Permutation,
    stack: RotorStack,
    reflector: Reflector,
    start_positions: Vec<Letter>,
}

impl CipherEngine {
    /// Assembles a machine from validated parts with an identity entry wheel.
    ///
    /// The current rotor positions become the reset point.
    pub fn new(plugboard: Plugboard, stack: RotorStack, reflector: Reflector) -> Self {
        let start_positions = stack.window_letters();
        debug!(
            rotors = stack.rotor_count(),
            positions = %stack,
            plugs = plugboard.pairs().len(),
            "cipher engine assembled"
        );
        CipherEngine {
            plugboard,
            entry_wheel: Permutation::identity(),
            stack,
            reflector,
            start_positions,
        }
    }

    /// Replaces the entry wheel (Eintrittswalze).
    pub fn with_entry_wheel(mut self, entry_wheel: Permutation) -> Self {
        self.entry_wheel = entry_wheel;
        self
    }

    /// Wires a machine from plain tables.
    ///
    /// # Errors
    /// Any construction error of the parts: [`CipherError::InvalidWiring`],
    /// [`CipherError::InvalidPlugboard`], [`CipherError::InvalidReflector`],
    /// [`CipherError::InvalidSetting`] or [`CipherError::Configuration`].
    pub fn from_tables(tables: &MachineTables) -> Result<Self> {
        let rotors = tables
            .rotors
            .iter()
            .map(RotorTable::build)
            .collect::<Result<Vec<_>>>()?;
        let stack = RotorStack::new(rotors)?;
        let reflector = Reflector::from_table(&tables.reflector)?;
        let plugboard = Plugboard::new(tables.plugboard.as_slice())?;
        let entry_wheel = match &tables.entry_wheel {
            Some(table) => Permutation::from_table(table)?,
            None => Permutation::identity(),
        };
        Ok(Self::new(plugboard, stack, reflector).with_entry_wheel(entry_wheel))
    }

    /// Sets the rotor windows, one letter per rotor, left to right, and makes
    /// them the reset point.
    ///
    /// # Errors
    /// [`CipherError::Configuration`] if the count differs from the number of
    /// rotors, [`CipherError::InvalidSetting`] for a non-letter.
    pub fn set_rotor_positions(&mut self, positions: &str) -> Result<()> {
        let settings: Vec<Setting> = positions.chars().map(Setting::from).collect();
        self.stack.set_positions(&settings)?;
        self.start_positions = self.stack.window_letters();
        debug!(positions = %self.stack, "rotor positions set");
        Ok(())
    }

    /// Sets the ring settings as offsets `0..=25`, left to right.
    ///
    /// # Errors
    /// [`CipherError::Configuration`] on a count mismatch,
    /// [`CipherError::InvalidSetting`] for a value above 25.
    pub fn set_ring_settings(&mut self, rings: &[u8]) -> Result<()> {
        let settings: Vec<Setting> = rings.iter().copied().map(Setting::from).collect();
        self.stack.set_ring_settings(&settings)?;
        debug!(rings = ?rings, "ring settings set");
        Ok(())
    }

    /// Returns the rotors to the last start positions.
    pub fn reset(&mut self) {
        self.stack.restore(&self.start_positions);
        debug!(positions = %self.stack, "rotors reset");
    }

    /// Enciphers one letter, stepping the rotors first.
    pub fn encode_letter(&mut self, letter: Letter) -> Letter {
        let entered = self.entry_wheel.forward(self.plugboard.forward(letter));
        let returned = self.stack.encode(entered, &self.reflector);
        self.plugboard.backward(self.entry_wheel.backward(returned))
    }

    /// Enciphers one character.
    ///
    /// # Errors
    /// [`CipherError::InvalidSymbol`] for anything outside `'A'..='Z'`; the
    /// rotors do not move in that case.
    pub fn encode_char(&mut self, c: char) -> Result<char> {
        let letter = Letter::from_char(c)?;
        Ok(self.encode_letter(letter).to_char())
    }

    /// Enciphers a message, stepping once per letter.
    ///
    /// Every character is checked before any rotor moves: one invalid symbol
    /// fails the whole call with no output and no state change.
    ///
    /// # Errors
    /// [`CipherError::InvalidSymbol`] for the first character outside
    /// `'A'..='Z'`.
    pub fn encode_message(&mut self, text: &str) -> Result<String> {
        let letters = text
            .chars()
            .map(Letter::from_char)
            .collect::<Result<Vec<_>>>()?;
        Ok(letters
            .into_iter()
            .map(|l| self.encode_letter(l).to_char())
            .collect())
    }

    /// Same operation as [`encode_message`](Self::encode_message): the
    /// machine is reciprocal. Reset the start positions first.
    pub fn decode_message(&mut self, text: &str) -> Result<String> {
        self.encode_message(text)
    }

    /// Current windows, left to right.
    pub fn rotor_positions(&self) -> String {
        self.stack.positions()
    }

    /// Ring settings as offsets, left to right.
    pub fn ring_settings(&self) -> Vec<u8> {
        self.stack.ring_settings()
    }

    pub fn rotor_count(&self) -> usize {
        self.stack.rotor_count()
    }

    pub fn plugboard(&self) -> &Plugboard {
        &self.plugboard
    }

    pub fn reflector(&self) -> &Reflector {
        &self.reflector
    }

    pub fn entry_wheel(&self) -> &Permutation {
        &self.entry_wheel
    }

    pub fn stack(&self) -> &RotorStack {
        &self.stack
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UKW_B: &str = "YRUHQSLDPXNGOKMIEBFZCWVJAT";
    const QWERTZ: &str = "QWERTZUIOASDFGHJKPYXCVBNML";

    fn army_tables() -> MachineTables {
        MachineTables {
            rotors: vec![
                RotorTable::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q"),
                RotorTable::new("AJDKSIRUXBLHWTMCQGZNPYFVOE", "E"),
                RotorTable::new("BDFHJLCPRTXVZNYEIWGAKMUSQO", "V"),
            ],
            reflector: UKW_B.to_string(),
            ..MachineTables::default()
        }
    }

    #[test]
    fn test_known_answer_single_letter() {
        let mut machine = CipherEngine::from_tables(&army_tables()).unwrap();
        assert_eq!(machine.encode_char('A').unwrap(), 'B');
        assert_eq!(machine.rotor_positions(), "AAB");
    }

    #[test]
    fn test_known_answer_ring_settings() {
        let mut machine = CipherEngine::from_tables(&army_tables()).unwrap();
        machine.set_ring_settings(&[1, 1, 1]).unwrap();
        assert_eq!(machine.encode_message("AAAAA").unwrap(), "EWTYX");
    }

    #[test]
    fn test_known_answer_plugboard() {
        let mut tables = army_tables();
        tables.plugboard = vec!["AB".to_string()];
        let mut machine = CipherEngine::from_tables(&tables).unwrap();
        assert_eq!(machine.encode_message("AAAAA").unwrap(), "BJLCS");
    }

    #[test]
    fn test_reset_returns_to_start() {
        let mut machine = CipherEngine::from_tables(&army_tables()).unwrap();
        machine.set_rotor_positions("QEV").unwrap();
        let first = machine.encode_message("HELLOWORLD").unwrap();
        assert_ne!(machine.rotor_positions(), "QEV");
        machine.reset();
        assert_eq!(machine.rotor_positions(), "QEV");
        assert_eq!(machine.decode_message(&first).unwrap(), "HELLOWORLD");
    }

    #[test]
    fn test_failed_reposition_keeps_reset_point() {
        let mut machine = CipherEngine::from_tables(&army_tables()).unwrap();
        machine.set_rotor_positions("ADT").unwrap();
        machine.encode_message("HELLO").unwrap();
        assert!(machine.set_rotor_positions("AB").is_err());
        assert!(machine.set_rotor_positions("AB?").is_err());
        machine.reset();
        assert_eq!(machine.rotor_positions(), "ADT");
    }

    #[test]
    fn test_reset_point_defaults_to_construction() {
        let mut machine = CipherEngine::from_tables(&army_tables()).unwrap();
        machine.encode_message("AAAAA").unwrap();
        machine.reset();
        assert_eq!(machine.rotor_positions(), "AAA");
        assert_eq!(machine.encode_message("AAAAA").unwrap(), "BDZGO");
    }

    #[test]
    fn test_invalid_symbol_aborts_without_stepping() {
        let mut machine = CipherEngine::from_tables(&army_tables()).unwrap();
        let err = machine.encode_message("HELLO WORLD").unwrap_err();
        assert_eq!(err, CipherError::InvalidSymbol(' '));
        assert_eq!(machine.rotor_positions(), "AAA");
        assert!(machine.encode_char('a').is_err());
        assert_eq!(machine.rotor_positions(), "AAA");
    }

    #[test]
    fn test_position_count_mismatch() {
        let mut machine = CipherEngine::from_tables(&army_tables()).unwrap();
        assert!(matches!(
            machine.set_rotor_positions("AB"),
            Err(CipherError::Configuration(_))
        ));
        assert!(matches!(
            machine.set_ring_settings(&[0, 0]),
            Err(CipherError::Configuration(_))
        ));
        assert!(matches!(
            machine.set_ring_settings(&[0, 0, 26]),
            Err(CipherError::InvalidSetting(_))
        ));
    }

    #[test]
    fn test_entry_wheel_round_trip() {
        let mut tables = MachineTables {
            rotors: vec![
                RotorTable::new("JGDQOXUSCAMIFRVTPNEWKBLZYH", "Z"),
                RotorTable::new("NTZPSFBOKMWRCJDIVLAEYUXHGQ", "Z"),
                RotorTable::new("JVIUBHTCDYAKEQZPOSGXNRMWFL", "Z"),
            ],
            reflector: "QYHOGNECVPUZTFDJAXWMKISRBL".to_string(),
            entry_wheel: Some(QWERTZ.to_string()),
            ..MachineTables::default()
        };
        let mut machine = CipherEngine::from_tables(&tables).unwrap();
        let ciphertext = machine.encode_message("HELLOWORLD").unwrap();
        assert_eq!(ciphertext, "NQAQIOZEBB");
        machine.reset();
        assert_eq!(machine.decode_message(&ciphertext).unwrap(), "HELLOWORLD");

        tables.entry_wheel = Some("ABC".to_string());
        assert!(matches!(
            CipherEngine::from_tables(&tables),
            Err(CipherError::InvalidWiring(_))
        ));
    }

    #[test]
    fn test_construction_errors_surface() {
        let mut tables = army_tables();
        tables.reflector = "ABCDEFGHIJKLMNOPQRSTUVWXYZ".to_string();
        assert!(matches!(
            CipherEngine::from_tables(&tables),
            Err(CipherError::InvalidReflector(_))
        ));

        let mut tables = army_tables();
        tables.plugboard = vec!["AB".into(), "BC".into()];
        assert!(matches!(
            CipherEngine::from_tables(&tables),
            Err(CipherError::InvalidPlugboard(_))
        ));

        let mut tables = army_tables();
        tables.rotors.clear();
        assert!(matches!(
            CipherEngine::from_tables(&tables),
            Err(CipherError::Configuration(_))
        ));

        let mut tables = army_tables();
        tables.rotors[0] = RotorTable {
            notches: "Q".into(),
            ..RotorTable::stationary(UKW_B)
        };
        assert!(matches!(
            CipherEngine::from_tables(&tables),
            Err(CipherError::Configuration(_))
        ));
    }
}
