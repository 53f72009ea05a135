use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

use rotorcipher::catalog::MachineModel;
use rotorcipher::text::SymbolPolicy;

/// Rotor cipher machine simulator
#[derive(Parser, Debug)]
#[command(name = "rotorcipher")]
#[command(about = "Simulates historical rotor cipher machines")]
#[command(version)]
pub struct Cli {
    /// Raise the log level (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encipher text; the machine is reciprocal, so this also deciphers
    #[command(visible_alias = "decode")]
    Encode(EncodeArgs),
    /// List the catalogued machine models and their components
    Models,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Text to process; read from stdin when absent
    pub text: Option<String>,

    /// JSON machine settings file (replaces --model, --rotors and --reflector)
    #[arg(short, long, conflicts_with_all = ["model", "rotors", "reflector"])]
    pub config: Option<PathBuf>,

    /// Machine model
    #[arg(short, long, default_value_t = MachineModel::M3)]
    pub model: MachineModel,

    /// Rotor names, left to right (e.g. "II IV V")
    #[arg(short, long, default_value = "I II III")]
    pub rotors: String,

    /// Reflector name
    #[arg(long, default_value = "B")]
    pub reflector: String,

    /// Start positions, one letter per rotor (e.g. "BLA")
    #[arg(short, long)]
    pub positions: Option<String>,

    /// Ring settings as offsets 0-25, comma separated (e.g. "1,20,11")
    #[arg(long, value_delimiter = ',')]
    pub rings: Option<Vec<u8>>,

    /// Plugboard pairs (e.g. "AV BS CG")
    #[arg(long)]
    pub plugs: Option<String>,

    /// Treatment of characters outside A-Z
    #[arg(long, default_value_t = SymbolPolicy::Skip)]
    pub policy: SymbolPolicy,

    /// Print the output in five-letter groups
    #[arg(short, long)]
    pub group: bool,
}

impl EncodeArgs {
    /// Rotor names split on whitespace or commas.
    pub fn rotor_names(&self) -> Vec<&str> {
        self.rotors
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|name| !name.is_empty())
            .collect()
    }
}
