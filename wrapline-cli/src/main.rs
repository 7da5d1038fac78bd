mod args;
mod commands;
mod error;

use std::fs::File;
use std::process::ExitCode;

use clap::Parser;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::args::Cli;
use crate::error::CliError;

/// Trace shows every packed line and split, which `--verbose` asks for.
fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Trace
    } else {
        LevelFilter::Info
    }
}

fn init_logging(cli: &Cli) -> Result<(), CliError> {
    let Some(path) = &cli.log_file else {
        return Ok(());
    };

    let log_file = File::create(path)?;
    WriteLogger::init(log_level(cli.verbose), Config::default(), log_file)?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = init_logging(&cli).and_then(|()| commands::run(&cli.command));
    match result {
        Ok(output) => {
            println!("{}", output);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
