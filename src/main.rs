#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! kv-cli: store and look up id/name pairs in an append-only CSV file.

mod cli;
mod commands;
mod config;
mod store;
mod types;

use std::process::ExitCode;

use clap::Parser;

use cli::{Cli, resolve_format, write_error, write_output};
use store::CsvRepository;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = config::init_logging(cli.verbose) {
        eprintln!("Error: {err:#}");
        return ExitCode::from(2);
    }

    let format = resolve_format(cli.output, cli.json);
    let repo = CsvRepository::new(config::resolve_store_path(&cli.file));
    tracing::debug!(store = %repo.path().display(), "opened store");

    match commands::dispatch(&cli.command, &repo) {
        Ok(output) => {
            write_output(&output, format);
            ExitCode::SUCCESS
        }
        Err(err) => {
            write_error(&err, format);
            ExitCode::from(err.exit_code())
        }
    }
}
