//! Alphabet helpers shared by every wiring component.

pub mod letter;
