//! Historical machine catalog.
//!
//! Turns named components ("rotor II", "reflector B") into the plain
//! [`MachineTables`] the core accepts. The core never reads this module:
//! everything here could equally come from a file or another program.

mod models;
mod settings;

pub use settings::MachineSettings;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;

use crate::engine::{MachineTables, RotorTable};
use crate::error::CipherError;

/// Errors raised while resolving or loading a machine description.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The resolved tables were rejected by the core.
    #[error(transparent)]
    Cipher(#[from] CipherError),

    /// A component name the model does not have.
    #[error("the {model} machine has no {kind} named {name:?}")]
    UnknownComponent {
        model: MachineModel,
        kind: &'static str,
        name: String,
    },

    /// Wrong number of rotors for the model.
    #[error("the {model} machine takes {expected} rotors, {actual} given")]
    SlotCount {
        model: MachineModel,
        expected: usize,
        actual: usize,
    },

    /// A thin wheel outside the leftmost slot, or a missing one.
    #[error("greek wheel placement: {0}")]
    GreekWheel(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Machine models with built-in wiring tables.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(ascii_case_insensitive)]
pub enum MachineModel {
    /// Naval three-rotor machine.
    M3,
    /// Naval four-rotor machine with a thin wheel and thin reflector.
    M4,
    /// Railway machine with a QWERTZ entry wheel.
    Rocket,
    /// Swiss commercial machine with a QWERTZ entry wheel.
    Swiss,
}

impl MachineModel {
    /// Built-in tables for this model.
    pub fn spec(self) -> &'static MachineSpec {
        match self {
            MachineModel::M3 => &models::M3,
            MachineModel::M4 => &models::M4,
            MachineModel::Rocket => &models::ROCKET,
            MachineModel::Swiss => &models::SWISS,
        }
    }
}

/// A named wiring table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComponentSpec {
    pub name: &'static str,
    pub wiring: &'static str,
    /// Empty for reflectors and thin wheels.
    pub notches: &'static str,
}

/// Everything a model offers.
#[derive(Debug)]
pub struct MachineSpec {
    pub model: MachineModel,
    pub year: u16,
    /// Number of rotors mounted at once.
    pub rotor_slots: usize,
    pub rotors: &'static [ComponentSpec],
    /// Thin wheels for the leftmost slot; empty on three-rotor models.
    pub greek_wheels: &'static [ComponentSpec],
    pub reflectors: &'static [ComponentSpec],
    pub entry_wheel: Option<&'static str>,
}

fn find<'a>(parts: &'a [ComponentSpec], name: &str) -> Option<&'a ComponentSpec> {
    parts.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl MachineSpec {
    pub fn rotor_names(&self) -> impl Iterator<Item = &'static str> {
        self.rotors.iter().map(|p| p.name)
    }

    pub fn greek_wheel_names(&self) -> impl Iterator<Item = &'static str> {
        self.greek_wheels.iter().map(|p| p.name)
    }

    pub fn reflector_names(&self) -> impl Iterator<Item = &'static str> {
        self.reflectors.iter().map(|p| p.name)
    }

    /// Resolves component names, rotors given left to right.
    ///
    /// On a model with thin wheels the leftmost name must be a thin wheel
    /// and no other slot may hold one.
    ///
    /// # Errors
    /// [`CatalogError::SlotCount`], [`CatalogError::UnknownComponent`] or
    /// [`CatalogError::GreekWheel`].
    pub fn tables<S: AsRef<str>>(
        &self,
        rotors: &[S],
        reflector: &str,
        plugboard: &[String],
    ) -> Result<MachineTables, CatalogError> {
        if rotors.len() != self.rotor_slots {
            return Err(CatalogError::SlotCount {
                model: self.model,
                expected: self.rotor_slots,
                actual: rotors.len(),
            });
        }

        let mut resolved = Vec::with_capacity(rotors.len());
        for (slot, name) in rotors.iter().map(AsRef::as_ref).enumerate() {
            let thin_slot = slot == 0 && !self.greek_wheels.is_empty();
            let table = match (find(self.rotors, name), find(self.greek_wheels, name)) {
                (Some(rotor), _) if !thin_slot => RotorTable::new(rotor.wiring, rotor.notches),
                (_, Some(wheel)) if thin_slot => RotorTable::stationary(wheel.wiring),
                (Some(_), _) => {
                    return Err(CatalogError::GreekWheel(format!(
                        "the leftmost {} slot takes a greek wheel, not rotor {name}",
                        self.model
                    )))
                }
                (_, Some(_)) => {
                    return Err(CatalogError::GreekWheel(format!(
                        "{name} only fits the leftmost slot"
                    )))
                }
                (None, None) => {
                    return Err(CatalogError::UnknownComponent {
                        model: self.model,
                        kind: if thin_slot { "greek wheel" } else { "rotor" },
                        name: name.to_string(),
                    })
                }
            };
            resolved.push(table);
        }

        let reflector = find(self.reflectors, reflector).ok_or_else(|| {
            CatalogError::UnknownComponent {
                model: self.model,
                kind: "reflector",
                name: reflector.to_string(),
            }
        })?;

        Ok(MachineTables {
            rotors: resolved,
            reflector: reflector.wiring.to_string(),
            plugboard: plugboard.to_vec(),
            entry_wheel: self.entry_wheel.map(str::to_string),
        })
    }
}
