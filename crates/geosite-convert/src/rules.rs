//! Bridge between geosite-config and geosite-rules.
//!
//! Converts configuration into a resolver and a run mode.

use geosite_config::{Config, Mode};
use geosite_rules::{DirProvider, IgnorePolicy, Resolver, RuleSetName, RunMode};

/// Build a resolver reading from the configured corpus directory.
pub fn build_resolver(config: &Config) -> Resolver {
    let policy = IgnorePolicy::new(
        config.policy.ignore.iter().cloned(),
        config.policy.exclude_suffixes.iter().cloned(),
    );
    let mut builder = Resolver::builder(DirProvider::new(&config.source.data_dir));
    builder.set_policy(policy);
    builder.build()
}

/// Map the configured mode and seeds to a run mode.
pub fn run_mode(config: &Config) -> RunMode {
    match config.mode {
        Mode::Batch => RunMode::Batch,
        Mode::Single => RunMode::Single {
            seeds: config
                .single
                .seeds
                .iter()
                .map(|s| RuleSetName::from(s.trim()))
                .collect(),
        },
    }
}
