use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "claimwise", about = "claimwise insurance AI demo CLI")]
pub struct Cli {
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check that every row of a CSV dataset has the expected column count.
    ValidateCsv {
        path: PathBuf,
        expected_cols: usize,
    },
    /// Run the redacting completion client and print the response envelope.
    Complete {
        prompt: String,
        #[arg(long)]
        context: Option<String>,
        #[arg(long, default_value = "gpt-4o")]
        model: String,
        #[arg(long, default_value_t = false)]
        no_redact: bool,
    },
}
