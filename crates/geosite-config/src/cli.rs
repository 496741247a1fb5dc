//! CLI override definitions and application logic.

use clap::Parser;

use crate::{Config, Mode};

#[derive(Debug, Clone, Parser, Default)]
pub struct CliOverrides {
    /// Override run mode
    #[arg(long, value_enum)]
    pub mode: Option<Mode>,
    /// Override corpus directory (one file per rule set)
    #[arg(long)]
    pub data_dir: Option<String>,
    /// Override output directory
    #[arg(long)]
    pub output_dir: Option<String>,
    /// Override rule-set format version written to output
    #[arg(long)]
    pub rule_set_version: Option<u8>,
    /// Seed rule sets (repeatable or comma-separated); implies single mode
    #[arg(long, num_args = 1.., value_delimiter = ',')]
    pub seed: Option<Vec<String>>,
    /// Output file stem for single mode
    #[arg(long)]
    pub name: Option<String>,
    /// Remove repeated domains before writing
    #[arg(long)]
    pub dedup: Option<bool>,
    /// Run batch mode on a thread pool
    #[arg(long)]
    pub parallel: Option<bool>,
    /// Worker threads for parallel batch mode (0 = one per CPU)
    #[arg(long)]
    pub jobs: Option<usize>,
    /// Override log level (trace/debug/info/warn/error)
    #[arg(long)]
    pub log_level: Option<String>,
}

pub fn apply_overrides(config: &mut Config, overrides: &CliOverrides) {
    if let Some(v) = &overrides.seed {
        config.single.seeds = v.clone();
        config.mode = Mode::Single;
    }
    // An explicit --mode wins over the one implied by --seed
    if let Some(v) = overrides.mode {
        config.mode = v;
    }
    if let Some(v) = &overrides.data_dir {
        config.source.data_dir = v.clone();
    }
    if let Some(v) = &overrides.output_dir {
        config.output.dir = v.clone();
    }
    if let Some(v) = overrides.rule_set_version {
        config.output.version = v;
    }
    if let Some(v) = &overrides.name {
        config.single.name = Some(v.clone());
    }
    if let Some(v) = overrides.dedup {
        config.output.dedup = v;
    }
    if let Some(v) = overrides.parallel {
        config.batch.parallel = v;
    }
    if let Some(v) = overrides.jobs {
        config.batch.jobs = v;
    }
    if let Some(v) = &overrides.log_level {
        config.logging.level = Some(v.clone());
    }
}
