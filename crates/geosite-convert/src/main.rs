//! geosite-convert standalone binary.

use std::process::ExitCode;

use clap::Parser;
use geosite_convert::{ConvertArgs, cli};

fn main() -> ExitCode {
    let args = ConvertArgs::parse();
    match cli::run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", cli::describe_error(e.as_ref()));
            ExitCode::FAILURE
        }
    }
}
