//! rotorcipher - command line front end for the rotor cipher engine.

mod cli;

use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use strum::IntoEnumIterator;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use rotorcipher::catalog::{MachineModel, MachineSettings, MachineSpec};
use rotorcipher::text::{self, GROUP_WIDTH};

use crate::cli::{Cli, Commands, EncodeArgs};

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("rotorcipher={level}")));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Encode(args) => encode(&args),
        Commands::Models => {
            for model in MachineModel::iter() {
                print!("{}", describe_model(model.spec()));
            }
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// Settings from a JSON file or the component flags, with the per-message
/// key flags applied on top.
fn machine_settings(args: &EncodeArgs) -> Result<MachineSettings> {
    let mut settings = match &args.config {
        Some(path) => MachineSettings::load_from_file(path)
            .with_context(|| format!("failed to load machine settings from {}", path.display()))?,
        None => MachineSettings::new(args.model, &args.rotor_names(), &args.reflector),
    };
    if let Some(positions) = &args.positions {
        settings = settings.with_positions(positions);
    }
    if let Some(rings) = &args.rings {
        settings = settings.with_ring_settings(rings);
    }
    if let Some(plugs) = &args.plugs {
        settings = settings.with_plugboard(plugs);
    }
    Ok(settings)
}

fn encode(args: &EncodeArgs) -> Result<()> {
    let settings = machine_settings(args)?;
    let mut machine = settings.build().context("invalid machine configuration")?;
    info!(
        model = %settings.model,
        positions = %machine.rotor_positions(),
        "machine ready"
    );

    let input = match &args.text {
        Some(text) => text.clone(),
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read text from stdin")?;
            buffer
        }
    };

    let output = text::encode_with_policy(&mut machine, input.trim_end(), args.policy)
        .context("cannot encipher input")?;
    if args.group {
        println!("{}", text::group(&output, GROUP_WIDTH));
    } else {
        println!("{output}");
    }
    info!(positions = %machine.rotor_positions(), "done");
    Ok(())
}

fn describe_model(spec: &MachineSpec) -> String {
    let join = |names: Vec<&str>| names.join(" ");
    let mut out = format!(
        "{} ({}, {} rotors)\n  rotors:       {}\n",
        spec.model,
        spec.year,
        spec.rotor_slots,
        join(spec.rotor_names().collect())
    );
    if !spec.greek_wheels.is_empty() {
        out += &format!(
            "  greek wheels: {}\n",
            join(spec.greek_wheel_names().collect())
        );
    }
    out += &format!(
        "  reflectors:   {}\n",
        join(spec.reflector_names().collect())
    );
    if let Some(entry) = spec.entry_wheel {
        out += &format!("  entry wheel:  {entry}\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(argv: &[&str]) -> EncodeArgs {
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Encode(args) => args,
            Commands::Models => panic!("expected encode"),
        }
    }

    #[test]
    fn test_flags_build_the_machine() {
        let args = args(&[
            "rotorcipher",
            "encode",
            "--rotors",
            "II IV V",
            "--rings",
            "1,20,11",
            "--positions",
            "BLA",
            "--plugs",
            "AV BS CG DL FU HZ IN KM OW RX",
        ]);
        let mut machine = machine_settings(&args).unwrap().build().unwrap();
        assert_eq!(
            machine.decode_message("EDPUDNRGYSZRCXNU").unwrap(),
            "AUFKLXABTEILUNGX"
        );
    }

    #[test]
    fn test_config_file_with_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key.json");
        MachineSettings::new(MachineModel::M3, &["I", "II", "III"], "B")
            .with_positions("QEV")
            .save_to_file(&path)
            .unwrap();

        let path_arg = path.to_string_lossy().to_string();
        let args = args(&["rotorcipher", "encode", "--config", &path_arg, "-p", "AAA"]);
        let settings = machine_settings(&args).unwrap();
        assert_eq!(settings.positions.as_deref(), Some("AAA"));
        let mut machine = settings.build().unwrap();
        assert_eq!(machine.encode_message("AAAAA").unwrap(), "BDZGO");
    }

    #[test]
    fn test_missing_config_reports_path() {
        let args = args(&["rotorcipher", "encode", "--config", "/nonexistent/key.json"]);
        let err = machine_settings(&args).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/key.json"));
    }

    #[test]
    fn test_describe_model() {
        let text = describe_model(MachineModel::M4.spec());
        assert!(text.starts_with("M4 (1939, 4 rotors)\n"));
        assert!(text.contains("greek wheels: Beta Gamma"));
        assert!(text.contains("reflectors:   B-Thin C-Thin"));
        assert!(!text.contains("entry wheel"));

        let text = describe_model(MachineModel::Rocket.spec());
        assert!(text.contains("entry wheel:  QWERTZUIOASDFGHJKPYXCVBNML"));
    }
}
