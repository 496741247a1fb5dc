//! CLI module for geosite-convert.
//!
//! This module provides the command-line interface that can be used either
//! as a standalone binary or as a subcommand of the main geosite-rs CLI.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use geosite_config::{
    CliOverrides, Config, LoggingConfig, apply_overrides, load_config, validate_config,
};
use geosite_core::{PROJECT_NAME, VERSION};
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::ConvertError;

/// geosite-convert CLI arguments.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "geosite-convert",
    version,
    about = "Convert domain-list-community rule sets to sing-box rule-set JSON"
)]
pub struct ConvertArgs {
    /// Config file path (json/yaml/toml); built-in defaults when omitted
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub overrides: CliOverrides,
}

/// Run a conversion with the given arguments.
///
/// This is the main entry point for the convert CLI, used by both the
/// standalone binary and the unified geosite-rs CLI.
pub fn run(args: ConvertArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    apply_overrides(&mut config, &args.overrides);
    validate_config(&config)?;

    init_tracing(&config.logging);
    info!(
        name = PROJECT_NAME,
        version = VERSION,
        mode = ?config.mode,
        data_dir = %config.source.data_dir,
        "starting conversion"
    );

    let report = crate::run(&config)?;
    info!(
        written = report.written.len(),
        failed = report.failed.len(),
        "conversion finished"
    );
    if !report.is_complete() {
        for failed in &report.failed {
            warn!(label = %failed.label, path = %failed.path.display(), error = %failed.error, "not written");
        }
        return Err(ConvertError::Incomplete {
            failed: report.failed.len(),
        }
        .into());
    }
    Ok(())
}

/// User-facing message for a failed run, with a hint for the fatal
/// corpus case.
pub fn describe_error(err: &(dyn std::error::Error + 'static)) -> String {
    match err.downcast_ref::<ConvertError>() {
        Some(e) if e.is_corpus_unavailable() => format!(
            "{e}\nhint: check `source.data_dir` in the config or pass --data-dir"
        ),
        _ => err.to_string(),
    }
}

/// Build the `EnvFilter` directive string from the base level and
/// per-module overrides.
fn filter_directives(config: &LoggingConfig) -> String {
    let mut filter_str = config.level.as_deref().unwrap_or("info").to_string();
    let mut modules: Vec<_> = config.filters.iter().collect();
    modules.sort();
    for (module, level) in modules {
        filter_str.push(',');
        filter_str.push_str(module);
        filter_str.push('=');
        filter_str.push_str(level);
    }
    filter_str
}

/// Initialize tracing subscriber with the given logging configuration.
///
/// Supports:
/// - `level`: Base log level (trace, debug, info, warn, error)
/// - `format`: Output format (json, pretty, compact). Default: pretty
/// - `output`: Output target (stdout, stderr). Default: stderr
/// - `filters`: Per-module log level overrides
fn init_tracing(config: &LoggingConfig) {
    let filter = EnvFilter::try_new(filter_directives(config))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let to_stdout = config.output.as_deref() == Some("stdout");
    let writer = move || -> Box<dyn io::Write> {
        if to_stdout {
            Box::new(io::stdout())
        } else {
            Box::new(io::stderr())
        }
    };

    let layer = match config.format.as_deref().unwrap_or("pretty") {
        "json" => fmt::layer().json().with_writer(writer).boxed(),
        "compact" => fmt::layer().compact().with_writer(writer).boxed(),
        _ => fmt::layer().with_writer(writer).boxed(),
    };

    // `run` is public, so an embedding process may have installed its own
    // subscriber already. Keep that one and note it there.
    if let Err(e) = tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()
    {
        debug!(error = %e, "tracing subscriber already installed, keeping it");
    }
}
