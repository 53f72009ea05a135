//! Property-based tests for the cipher core.
//!
//! These tests verify:
//! - Reciprocity: enciphering twice from the same start is the identity
//! - Determinism of independently built machines
//! - No letter ever enciphers to itself
//! - Plugboard and reflector involutions
//! - Permutation totality (inverse undoes forward on every letter)

use proptest::prelude::*;

use rotorcipher::{
    CipherEngine, Letter, MachineTables, Permutation, Plugboard, Reflector, RotorTable,
    ALPHABET_LEN,
};

const ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";

// =============================================================================
// Strategies
// =============================================================================

/// Any permutation of the alphabet, as a 26-letter table.
fn wiring_strategy() -> impl Strategy<Value = String> {
    Just(ALPHABET.chars().collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(|letters| letters.into_iter().collect())
}

/// Shuffled alphabet cut into `count` disjoint pairs.
fn pairs_strategy(count: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = Vec<String>> {
    (Just(ALPHABET.chars().collect::<Vec<_>>()).prop_shuffle(), count).prop_map(
        |(letters, count)| {
            letters
                .chunks(2)
                .take(count)
                .map(|pair| pair.iter().collect())
                .collect()
        },
    )
}

/// Fixed-point-free involution: thirteen disjoint swaps.
fn reflector_strategy() -> impl Strategy<Value = String> {
    pairs_strategy(13..=13).prop_map(|pairs| {
        let mut table = ['A'; ALPHABET_LEN];
        for pair in &pairs {
            let bytes = pair.as_bytes();
            table[(bytes[0] - b'A') as usize] = bytes[1] as char;
            table[(bytes[1] - b'A') as usize] = bytes[0] as char;
        }
        table.iter().collect()
    })
}

fn rotor_strategy() -> impl Strategy<Value = RotorTable> {
    (wiring_strategy(), "[A-Z]{1,2}")
        .prop_map(|(wiring, notches)| RotorTable::new(wiring, notches))
}

/// A random machine with one to five rotors, plus matching start positions
/// and ring settings.
fn machine_strategy() -> impl Strategy<Value = (MachineTables, String, Vec<u8>)> {
    (1usize..=5)
        .prop_flat_map(|count| {
            (
                prop::collection::vec(rotor_strategy(), count),
                reflector_strategy(),
                pairs_strategy(0..=10),
                prop::collection::vec(prop::char::range('A', 'Z'), count),
                prop::collection::vec(0u8..26, count),
            )
        })
        .prop_map(|(rotors, reflector, plugboard, positions, rings)| {
            let tables = MachineTables {
                rotors,
                reflector,
                plugboard,
                entry_wheel: None,
            };
            (tables, positions.into_iter().collect(), rings)
        })
}

fn build(tables: &MachineTables, positions: &str, rings: &[u8]) -> CipherEngine {
    let mut machine = CipherEngine::from_tables(tables).unwrap();
    machine.set_ring_settings(rings).unwrap();
    machine.set_rotor_positions(positions).unwrap();
    machine
}

// =============================================================================
// Engine properties
// =============================================================================

proptest! {
    /// Encode, reset, encode again: the message comes back.
    #[test]
    fn reciprocity(
        (tables, positions, rings) in machine_strategy(),
        message in "[A-Z]{0,200}",
    ) {
        let mut machine = build(&tables, &positions, &rings);
        let ciphertext = machine.encode_message(&message).unwrap();
        prop_assert_eq!(ciphertext.len(), message.len());
        machine.reset();
        prop_assert_eq!(machine.rotor_positions(), positions);
        prop_assert_eq!(machine.decode_message(&ciphertext).unwrap(), message);
    }

    /// Reciprocity also holds with a scrambled entry wheel.
    #[test]
    fn reciprocity_with_entry_wheel(
        (mut tables, positions, rings) in machine_strategy(),
        entry in wiring_strategy(),
        message in "[A-Z]{1,100}",
    ) {
        tables.entry_wheel = Some(entry);
        let mut machine = build(&tables, &positions, &rings);
        let ciphertext = machine.encode_message(&message).unwrap();
        machine.reset();
        prop_assert_eq!(machine.decode_message(&ciphertext).unwrap(), message);
    }

    /// Two machines built from the same configuration agree letter for letter.
    #[test]
    fn determinism(
        (tables, positions, rings) in machine_strategy(),
        message in "[A-Z]{0,100}",
    ) {
        let mut first = build(&tables, &positions, &rings);
        let mut second = build(&tables, &positions, &rings);
        prop_assert_eq!(
            first.encode_message(&message).unwrap(),
            second.encode_message(&message).unwrap()
        );
        prop_assert_eq!(first.rotor_positions(), second.rotor_positions());
    }

    /// The reflector has no fixed point, so neither has the machine.
    #[test]
    fn no_letter_encodes_to_itself(
        (tables, positions, rings) in machine_strategy(),
        message in "[A-Z]{1,100}",
    ) {
        let mut machine = build(&tables, &positions, &rings);
        let ciphertext = machine.encode_message(&message).unwrap();
        for (plain, cipher) in message.chars().zip(ciphertext.chars()) {
            prop_assert_ne!(plain, cipher);
        }
    }

    /// A message with one bad symbol leaves the rotors where they were.
    #[test]
    fn invalid_symbol_is_atomic(
        (tables, positions, rings) in machine_strategy(),
        head in "[A-Z]{0,20}",
        bad in "[a-z0-9 .,]",
        tail in "[A-Z]{0,20}",
    ) {
        let mut machine = build(&tables, &positions, &rings);
        let message = format!("{head}{bad}{tail}");
        prop_assert!(machine.encode_message(&message).is_err());
        prop_assert_eq!(machine.rotor_positions(), positions);
    }
}

// =============================================================================
// Component properties
// =============================================================================

proptest! {
    /// The inverse table undoes the forward table on every letter.
    #[test]
    fn permutation_is_total(table in wiring_strategy()) {
        let wiring = Permutation::from_table(&table).unwrap();
        prop_assert_eq!(wiring.wiring(), table);
        for letter in Letter::all() {
            prop_assert_eq!(wiring.apply_inverse(wiring.apply(letter)), letter);
            prop_assert_eq!(wiring.apply(wiring.apply_inverse(letter)), letter);
        }
    }

    /// Plugboard swaps are involutions and touch only the plugged letters.
    #[test]
    fn plugboard_is_involution(pairs in pairs_strategy(0..=10)) {
        let board = Plugboard::new(pairs.as_slice()).unwrap();
        prop_assert_eq!(board.pairs().len(), pairs.len());
        let plugged: String = pairs.concat();
        for letter in Letter::all() {
            prop_assert_eq!(board.swap(board.swap(letter)), letter);
            let moved = board.swap(letter) != letter;
            prop_assert_eq!(moved, plugged.contains(letter.to_char()));
        }
    }

    /// Valid reflectors are involutions without fixed points.
    #[test]
    fn reflector_has_no_fixed_points(table in reflector_strategy()) {
        let reflector = Reflector::from_table(&table).unwrap();
        for letter in Letter::all() {
            prop_assert_ne!(reflector.reflect(letter), letter);
            prop_assert_eq!(reflector.reflect(reflector.reflect(letter)), letter);
        }
    }

    /// Any permutation is accepted as a reflector exactly when it is a
    /// fixed-point-free involution.
    #[test]
    fn reflector_validation_matches_definition(table in wiring_strategy()) {
        let wiring = Permutation::from_table(&table).unwrap();
        let valid = wiring.is_involution() && wiring.fixed_points().next().is_none();
        prop_assert_eq!(Reflector::new(wiring).is_ok(), valid);
    }
}
