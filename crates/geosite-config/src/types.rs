//! Configuration type definitions for the corpus, ignore policy, run mode,
//! output, batch execution and logging.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::defaults::*;

/// Top-level configuration. Every section has defaults, so an empty file
/// describes a batch conversion of the default corpus directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// How seeds are chosen.
    #[serde(default)]
    pub mode: Mode,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
    /// Seeds for single-target mode.
    #[serde(default)]
    pub single: SingleConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Run mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// One output file per top-level rule set of the corpus.
    #[default]
    Batch,
    /// One merged output file for an explicit seed list.
    Single,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Directory containing one file per rule set.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Names that are never read, neither as seeds nor as include targets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolicyConfig {
    /// Exact rule-set names to ignore.
    #[serde(default = "default_ignored_names")]
    pub ignore: Vec<String>,
    /// Rule-set name suffixes to ignore (e.g. ".md").
    #[serde(default = "default_excluded_suffixes")]
    pub exclude_suffixes: Vec<String>,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            ignore: default_ignored_names(),
            exclude_suffixes: default_excluded_suffixes(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SingleConfig {
    /// Rule sets resolved together into one output.
    #[serde(default)]
    pub seeds: Vec<String>,
    /// Output file stem. Default: the seeds joined with "+".
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving the generated rule-set files.
    #[serde(default = "default_output_dir")]
    pub dir: String,
    /// sing-box rule-set format version written into every file.
    #[serde(default = "default_rule_set_version")]
    pub version: u8,
    /// JSON indent width in spaces.
    #[serde(default = "default_json_indent")]
    pub indent: usize,
    /// Remove repeated domains before writing.
    #[serde(default = "default_output_dedup")]
    pub dedup: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            version: default_rule_set_version(),
            indent: default_json_indent(),
            dedup: default_output_dedup(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Run batch groups on a rayon thread pool.
    #[serde(default = "default_batch_parallel")]
    pub parallel: bool,
    /// Worker threads when parallel (0 = one per CPU).
    #[serde(default = "default_batch_jobs")]
    pub jobs: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel: default_batch_parallel(),
            jobs: default_batch_jobs(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error).
    pub level: Option<String>,
    /// Log format: json, pretty, or compact. Default: pretty.
    pub format: Option<String>,
    /// Output target: stdout or stderr. Default: stderr.
    pub output: Option<String>,
    /// Per-module log level filters (e.g., {"geosite_rules": "debug"}).
    #[serde(default)]
    pub filters: HashMap<String, String>,
}
