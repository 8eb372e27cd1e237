mod cli;
mod complete;
mod validate;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.command {
        Command::ValidateCsv {
            path,
            expected_cols,
        } => validate::run(&path, expected_cols),
        Command::Complete {
            prompt,
            context,
            model,
            no_redact,
        } => {
            complete::run(&prompt, context.as_deref(), &model, !no_redact)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
