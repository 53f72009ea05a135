//! Rotor cipher machine engine.
//!
//! Simulates the electromechanical rotor machines of the Enigma family: a
//! plugboard, an entry wheel, a stack of stepping rotors and a reflector
//! compose into one reciprocal substitution that changes with every
//! keystroke. Stepping reproduces the historical double-step anomaly.
//!
//! # Architecture
//!
//! ```text
//! Letter       (one validated symbol of the 26-letter alphabet)
//!     ↓
//! Permutation  (bijective wiring table, forward + inverse)
//!     ↓ used by
//! Plugboard · Rotor · Reflector   (Substitution: forward / backward)
//!     ↓ mounted in
//! RotorStack   (rotors left to right + pawl stepping state machine)
//!     ↓ composed by
//! CipherEngine (plugboard → entry wheel → stack ↔ reflector → back out)
//! ```
//!
//! The core only accepts plain tables ([`MachineTables`]). Named historical
//! components live in [`catalog`]; input clean-up and grouping in [`text`].
//!
//! # Examples
//!
//! Decipher with the catalogued naval three-rotor machine:
//!
//! ```
//! use rotorcipher::catalog::{MachineModel, MachineSettings};
//!
//! let settings = MachineSettings::new(MachineModel::M3, &["II", "IV", "V"], "B")
//!     .with_ring_settings(&[1, 20, 11])
//!     .with_positions("BLA")
//!     .with_plugboard("AV BS CG DL FU HZ IN KM OW RX");
//!
//! let mut machine = settings.build().unwrap();
//! let plain = machine.decode_message("EDPUDNRGYSZRCXNUYTPOMRMBOFKTBZREZKMLXLVE").unwrap();
//! assert_eq!(plain, "AUFKLXABTEILUNGXVONXKURTINOWAXKURTINOWAX");
//! ```
//!
//! Build a machine from raw tables:
//!
//! ```
//! use rotorcipher::{CipherEngine, MachineTables, RotorTable};
//!
//! let tables = MachineTables {
//!     rotors: vec![
//!         RotorTable::new("EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q"),
//!         RotorTable::new("AJDKSIRUXBLHWTMCQGZNPYFVOE", "E"),
//!         RotorTable::new("BDFHJLCPRTXVZNYEIWGAKMUSQO", "V"),
//!     ],
//!     reflector: "YRUHQSLDPXNGOKMIEBFZCWVJAT".into(),
//!     plugboard: vec!["AB".into()],
//!     entry_wheel: None,
//! };
//!
//! let mut machine = CipherEngine::from_tables(&tables).unwrap();
//! assert_eq!(machine.encode_message("AAAAA").unwrap(), "BJLCS");
//! ```

#![deny(clippy::all)]

pub mod catalog;
pub mod error;
pub mod text;
pub mod utils;

mod engine;
mod permutation;
mod plugboard;
mod reflector;
mod rotor;
mod rotor_stack;

pub use engine::{CipherEngine, MachineTables, RotorTable};
pub use error::{CipherError, Result};
pub use permutation::{Permutation, Substitution};
pub use plugboard::{Plugboard, MAX_PAIRS};
pub use reflector::Reflector;
pub use rotor::{Rotor, Setting};
pub use rotor_stack::RotorStack;
pub use utils::letter::{Letter, ALPHABET_LEN};
