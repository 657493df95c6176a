//! hashfiles: fingerprint files and detect changes between snapshots

use std::process::ExitCode;

use clap::Parser;
use hashfiles_cli::logging::setup_logging;
use hashfiles_cli::{commands, Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    match run(cli.command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(command: Commands) -> anyhow::Result<ExitCode> {
    match command {
        Commands::Hash {
            base,
            paths,
            output,
            keep_going,
            hashing,
        } => {
            commands::hash::run(
                &base,
                &paths,
                output.as_deref(),
                keep_going,
                hashing.to_config(),
            )?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Diff { current, new, json } => {
            let result = commands::diff::run(&current, &new, json)?;
            Ok(ExitCode::from(commands::exit_status(&result)))
        }
        Commands::Status {
            base,
            snapshot,
            json,
            hashing,
        } => {
            let result = commands::status::run(&base, &snapshot, json, hashing.to_config())?;
            Ok(ExitCode::from(commands::exit_status(&result)))
        }
    }
}
