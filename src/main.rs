#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! todoreport — fetch an employee's tasks from a REST API and export them.

mod api;
mod cli;
mod commands;
mod config;
mod report;
mod types;

use clap::Parser;
use clap::error::ErrorKind;

use cli::{Cli, OutputCtx, init_logging, usage_error, write_error};
use config::Config;
use report::FetchMode;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            init_logging(false);
            tracing::debug!(error = %err, "argument parsing failed");
            let usage = usage_error();
            write_error(&usage);
            std::process::exit(usage.exit_code());
        }
    };

    init_logging(cli.debug);

    let config = Config::new(&cli.base_url);
    let mode = if cli.expand {
        FetchMode::Expanded
    } else {
        FetchMode::Separate
    };
    let ctx = OutputCtx::new(cli.export, &cli.out_dir, cli.debug);

    if let Err(err) = commands::run(&cli.employee_id, &config, mode, &ctx) {
        write_error(&err);
        std::process::exit(err.exit_code());
    }
}
