//! Wiring tables of the historical machines.

use super::{ComponentSpec, MachineModel, MachineSpec};

const fn part(name: &'static str, wiring: &'static str, notches: &'static str) -> ComponentSpec {
    ComponentSpec {
        name,
        wiring,
        notches,
    }
}

const QWERTZ_ENTRY: &str = "QWERTZUIOASDFGHJKPYXCVBNML";

const SERVICE_ROTORS: &[ComponentSpec] = &[
    part("I", "EKMFLGDQVZNTOWYHXUSPAIBRCJ", "Q"),
    part("II", "AJDKSIRUXBLHWTMCQGZNPYFVOE", "E"),
    part("III", "BDFHJLCPRTXVZNYEIWGAKMUSQO", "V"),
    part("IV", "ESOVPZJAYQUIRHXLNFTGKDCMWB", "J"),
    part("V", "VZBRGITYUPSDNHLXAWMJQOFECK", "Z"),
    part("VI", "JPGVOUMFYQBENHZRDKASXLICTW", "ZM"),
    part("VII", "NZJHGRCXMYSWBOUFAIVLPEKQDT", "ZM"),
    part("VIII", "FKQHTLXOCBJSPDZRAMEWNIUYGV", "ZM"),
];

pub(super) static M3: MachineSpec = MachineSpec {
    model: MachineModel::M3,
    year: 1938,
    rotor_slots: 3,
    rotors: SERVICE_ROTORS,
    greek_wheels: &[],
    reflectors: &[
        part("A", "EJMZALYXVBWFCRQUONTSPIKHGD", ""),
        part("B", "YRUHQSLDPXNGOKMIEBFZCWVJAT", ""),
        part("C", "FVPJIAOYEDRZXWGCTKUQSBNMHL", ""),
    ],
    entry_wheel: None,
};

pub(super) static M4: MachineSpec = MachineSpec {
    model: MachineModel::M4,
    year: 1939,
    rotor_slots: 4,
    rotors: SERVICE_ROTORS,
    greek_wheels: &[
        part("Beta", "LEYJVCNIXWPBQMDRTAKZGFUHOS", ""),
        part("Gamma", "FSOKANUERHMBTIYCWLQPZXVGJD", ""),
    ],
    reflectors: &[
        part("B-Thin", "ENKQAUYWJICOPBLMDXZVFTHRGS", ""),
        part("C-Thin", "RDOBJNTKVEHMLFCWZAXGYIPSUQ", ""),
    ],
    entry_wheel: None,
};

pub(super) static ROCKET: MachineSpec = MachineSpec {
    model: MachineModel::Rocket,
    year: 1941,
    rotor_slots: 3,
    rotors: &[
        part("I", "JGDQOXUSCAMIFRVTPNEWKBLZYH", "Z"),
        part("II", "NTZPSFBOKMWRCJDIVLAEYUXHGQ", "Z"),
        part("III", "JVIUBHTCDYAKEQZPOSGXNRMWFL", "Z"),
    ],
    greek_wheels: &[],
    reflectors: &[part("UKW", "QYHOGNECVPUZTFDJAXWMKISRBL", "")],
    entry_wheel: Some(QWERTZ_ENTRY),
};

pub(super) static SWISS: MachineSpec = MachineSpec {
    model: MachineModel::Swiss,
    year: 1939,
    rotor_slots: 3,
    rotors: &[
        part("I-K", "PEZUOHXSCVFMTBGLRINQJWAYDK", "Z"),
        part("II-K", "ZOUESYDKFWPCIQXHMVBLGNJRAT", "Z"),
        part("III-K", "EHRVXGAOBQUSIMZFLYNWKTPDJC", "Z"),
    ],
    greek_wheels: &[],
    reflectors: &[part("UKW-K", "IMETCGFRAYSQBZXWLHKDVUPOJN", "")],
    entry_wheel: Some(QWERTZ_ENTRY),
};
