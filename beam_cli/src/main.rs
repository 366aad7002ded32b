//! # Beamline CLI
//!
//! Solves a simply-supported beam described on the command line, or drives
//! the same model from an interactive text menu.

mod cli;
mod error;
mod logging;
mod report;
mod session;

use std::io;
use std::process;

use beam_core::{AnalysisSettings, Beam};
use clap::Parser;
use log::info;

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::session::Session;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        if let CliError::Beam(beam_error) = &e {
            if let Ok(json) = serde_json::to_string_pretty(beam_error) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet)?;

    let settings = AnalysisSettings::default()
        .with_reaction_mode(cli.mode)
        .with_sample_count(cli.samples);

    let length = match (cli.length, cli.interactive) {
        (Some(length), _) => length,
        (None, true) => 10.0,
        (None, false) => {
            return Err(CliError::Argument(
                "--length is required unless --interactive is given".to_string(),
            ))
        }
    };

    let mut beam = Beam::with_settings(length, settings);
    for command in cli.commands() {
        beam.apply(command)?;
    }
    info!(
        "beam of length {} with {} load(s), {} solver",
        beam.length(),
        beam.loads().len(),
        beam.settings().reaction_mode
    );

    if cli.interactive {
        let stdin = io::stdin();
        let mut session = Session::new(beam, stdin.lock(), io::stdout(), cli.stations);
        session.run()?;
        info!("session ended with {} load(s)", session.into_beam().loads().len());
        return Ok(());
    }

    let results = beam.analyze()?;
    if cli.json {
        println!("{}", report::render_json(&results)?);
    } else {
        print!("{}", report::render_text(&beam, &results, cli.stations)?);
    }
    Ok(())
}
