//! Error types for the rotor cipher core.
//!
//! Every variant is raised synchronously while a machine is being built or
//! configured, or while input symbols are checked. Nothing is silently
//! corrected: a misconfigured machine fails instead of producing a
//! plausible but wrong ciphertext.

use thiserror::Error;

/// Errors produced by the cipher core.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// A wiring table is not a bijection over the 26-letter alphabet.
    #[error("invalid wiring: {0}")]
    InvalidWiring(String),

    /// Plugboard pair list is malformed, oversized, or reuses a letter.
    #[error("invalid plugboard: {0}")]
    InvalidPlugboard(String),

    /// Reflector wiring is not a fixed-point-free involution.
    #[error("invalid reflector: {0}")]
    InvalidReflector(String),

    /// Ring setting or rotor position outside `0..=25` / `'A'..='Z'`.
    #[error("invalid setting: {0}")]
    InvalidSetting(String),

    /// Rotor count does not match the supplied positions or ring settings.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Input character outside the supported alphabet.
    #[error("invalid symbol {0:?}: only 'A'..='Z' can be enciphered")]
    InvalidSymbol(char),
}

/// Result alias used throughout the core.
pub type Result<T> = std::result::Result<T, CipherError>;

impl CipherError {
    pub(crate) fn wiring(msg: impl Into<String>) -> Self {
        Self::InvalidWiring(msg.into())
    }

    pub(crate) fn plugboard(msg: impl Into<String>) -> Self {
        Self::InvalidPlugboard(msg.into())
    }

    pub(crate) fn reflector(msg: impl Into<String>) -> Self {
        Self::InvalidReflector(msg.into())
    }

    pub(crate) fn setting(msg: impl Into<String>) -> Self {
        Self::InvalidSetting(msg.into())
    }

    pub(crate) fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
