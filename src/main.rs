//! Unified geosite-rs CLI.
//!
//! - `geosite-rs convert` - Convert rule sets to sing-box rule-set files
//!
//! The subcommand can also be run as the standalone `geosite-convert` binary.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

/// geosite-rs unified CLI.
#[derive(Parser)]
#[command(
    name = "geosite-rs",
    version,
    about = "Convert domain-list-community rule sets to sing-box rule-sets",
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert rule sets (batch or single-target, per config).
    #[command(name = "convert", alias = "run")]
    Convert(Box<geosite_convert::ConvertArgs>),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert(args) => geosite_convert::cli::run(*args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", geosite_convert::cli::describe_error(e.as_ref()));
            ExitCode::FAILURE
        }
    }
}
