//! Machine settings that can be saved and loaded as JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{CatalogError, MachineModel};
use crate::engine::CipherEngine;

/// A complete key sheet entry for one of the catalogued models.
///
/// ```json
/// {
///   "model": "M3",
///   "rotors": ["II", "IV", "V"],
///   "reflector": "B",
///   "positions": "BLA",
///   "ring_settings": [1, 20, 11],
///   "plugboard": ["AV", "BS", "CG"]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineSettings {
    pub model: MachineModel,
    /// Rotor names, left to right.
    pub rotors: Vec<String>,
    pub reflector: String,
    /// Window letters, left to right; all `A` when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub positions: Option<String>,
    /// Ring offsets `0..=25`, left to right; all 0 when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ring_settings: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub plugboard: Vec<String>,
}

impl MachineSettings {
    pub fn new(model: MachineModel, rotors: &[&str], reflector: &str) -> Self {
        MachineSettings {
            model,
            rotors: rotors.iter().map(|r| r.to_string()).collect(),
            reflector: reflector.to_string(),
            positions: None,
            ring_settings: None,
            plugboard: Vec::new(),
        }
    }

    pub fn with_positions(mut self, positions: &str) -> Self {
        self.positions = Some(positions.to_string());
        self
    }

    pub fn with_ring_settings(mut self, rings: &[u8]) -> Self {
        self.ring_settings = Some(rings.to_vec());
        self
    }

    /// Whitespace separated pairs, e.g. `"AV BS CG"`.
    pub fn with_plugboard(mut self, pairs: &str) -> Self {
        self.plugboard = pairs.split_whitespace().map(str::to_string).collect();
        self
    }

    /// Resolves the names and builds a machine at its start positions.
    ///
    /// # Errors
    /// Any [`CatalogError`] from name resolution, or
    /// [`CatalogError::Cipher`] when the core rejects the configuration.
    pub fn build(&self) -> Result<CipherEngine, CatalogError> {
        let tables = self
            .model
            .spec()
            .tables(self.rotors.as_slice(), &self.reflector, &self.plugboard)?;
        let mut engine = CipherEngine::from_tables(&tables)?;
        if let Some(rings) = &self.ring_settings {
            engine.set_ring_settings(rings)?;
        }
        if let Some(positions) = &self.positions {
            engine.set_rotor_positions(positions)?;
        }
        debug!(
            model = %self.model,
            rotors = ?self.rotors,
            reflector = %self.reflector,
            "machine built from settings"
        );
        Ok(engine)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, CatalogError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reads settings from a JSON file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(&path)?;
        let settings = Self::from_json_str(&content)?;
        debug!(path = ?path.as_ref(), "settings loaded");
        Ok(settings)
    }

    /// Writes settings as pretty printed JSON.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), CatalogError> {
        fs::write(&path, self.to_json()?)?;
        debug!(path = ?path.as_ref(), "settings saved");
        Ok(())
    }
}
