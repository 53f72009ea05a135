//! Caller-side text handling around the core.
//!
//! The engine only accepts `'A'..='Z'`. What happens to lower case, spaces
//! and punctuation is a policy chosen here, by the caller, never inside the
//! engine.

use strum::{Display, EnumIter, EnumString};

use crate::engine::CipherEngine;
use crate::error::Result;
use crate::utils::letter::Letter;

/// Width of the traditional transmission groups.
pub const GROUP_WIDTH: usize = 5;

/// How non-letter input is treated before it reaches the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum SymbolPolicy {
    /// Hand the text over unchanged; any non `'A'..='Z'` symbol is an error.
    Strict,
    /// Upper-case letters and drop everything else.
    #[default]
    Skip,
    /// Upper-case letters and copy everything else through without stepping.
    Passthrough,
}

/// Enciphers `text` under `policy`.
///
/// # Errors
/// Under [`SymbolPolicy::Strict`], the engine's
/// [`InvalidSymbol`](crate::CipherError::InvalidSymbol). The other policies
/// never fail.
///
/// # Examples
///
/// ```
/// use rotorcipher::catalog::{MachineModel, MachineSettings};
/// use rotorcipher::text::{encode_with_policy, SymbolPolicy};
///
/// let settings = MachineSettings::new(MachineModel::M3, &["I", "II", "III"], "B");
/// let mut machine = settings.build().unwrap();
/// let out = encode_with_policy(&mut machine, "aa, aa!", SymbolPolicy::Passthrough).unwrap();
/// assert_eq!(out, "BD, ZG!");
/// ```
pub fn encode_with_policy(
    engine: &mut CipherEngine,
    text: &str,
    policy: SymbolPolicy,
) -> Result<String> {
    match policy {
        SymbolPolicy::Strict => engine.encode_message(text),
        SymbolPolicy::Skip => engine.encode_message(&normalize(text)),
        SymbolPolicy::Passthrough => Ok(text
            .chars()
            .map(|c| match Letter::from_char(c.to_ascii_uppercase()) {
                Ok(letter) => engine.encode_letter(letter).to_char(),
                Err(_) => c,
            })
            .collect()),
    }
}

/// Upper-cases ASCII letters and drops every other character.
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Splits `text` into space separated groups of `width`, ignoring any
/// whitespace already present.
///
/// A `width` of 0 returns the text with whitespace removed.
pub fn group(text: &str, width: usize) -> String {
    let compact: Vec<char> = text.chars().filter(|c| !c.is_whitespace()).collect();
    if width == 0 {
        return compact.into_iter().collect();
    }
    compact
        .chunks(width)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}
