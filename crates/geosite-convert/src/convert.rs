//! Conversion runs: plan seed groups, resolve each, write its rule-set file.

use std::path::{Path, PathBuf};

use geosite_config::{Config, Mode};
use geosite_rules::{Resolver, SeedGroup};
use rayon::prelude::*;
use tracing::{error, info, info_span};

use crate::error::ConvertError;
use crate::output::{RuleSetFile, output_path, write_atomic};
use crate::rules::{build_resolver, run_mode};

/// A rule-set file that was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenRuleSet {
    pub label: String,
    pub path: PathBuf,
    pub suffix_count: usize,
    pub full_count: usize,
}

/// A rule-set file that could not be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedRuleSet {
    pub label: String,
    pub path: PathBuf,
    pub error: String,
}

/// Outcome of a conversion, in seed-group order.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub written: Vec<WrittenRuleSet>,
    pub failed: Vec<FailedRuleSet>,
}

impl Report {
    pub fn is_complete(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Run a conversion as described by `config`.
///
/// Fails up front only when seeds cannot be planned (corpus directory not
/// listable in batch mode). Per-file read problems are diagnostics, and
/// write failures are collected in the report while other groups proceed.
pub fn run(config: &Config) -> Result<Report, ConvertError> {
    let resolver = build_resolver(config);
    let groups = resolver.seed_groups(&run_mode(config))?;
    info!(
        count = groups.len(),
        data_dir = %config.source.data_dir,
        "found rule sets to process"
    );

    let output_dir = Path::new(&config.output.dir);
    let convert = |group: &SeedGroup| convert_group(&resolver, group, config, output_dir);

    let outcomes: Vec<_> = if config.mode == Mode::Batch && config.batch.parallel {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.batch.jobs)
            .build()?;
        info!(threads = pool.current_num_threads(), "running batch in parallel");
        pool.install(|| groups.par_iter().map(convert).collect())
    } else {
        groups.iter().map(convert).collect()
    };

    let mut report = Report::default();
    for outcome in outcomes {
        match outcome {
            Ok(written) => report.written.push(written),
            Err(failed) => report.failed.push(failed),
        }
    }
    Ok(report)
}

fn convert_group(
    resolver: &Resolver,
    group: &SeedGroup,
    config: &Config,
    output_dir: &Path,
) -> Result<WrittenRuleSet, FailedRuleSet> {
    let _span = info_span!("rule_set", label = %group.label).entered();

    let mut result = resolver.resolve_group(group);
    if config.output.dedup {
        result.dedup();
    }
    let suffix_count = result.suffix_domains.len();
    let full_count = result.full_domains.len();

    let stem = match (config.mode, &config.single.name) {
        (Mode::Single, Some(name)) => name.as_str(),
        _ => group.label.as_str(),
    };
    let path = output_path(output_dir, stem);
    let file = RuleSetFile::from_result(config.output.version, result);

    let written = file
        .to_json(config.output.indent)
        .map_err(ConvertError::from)
        .and_then(|bytes| write_atomic(&path, &bytes));

    match written {
        Ok(()) => {
            info!(
                path = %path.display(),
                suffix = suffix_count,
                full = full_count,
                "rule-set file written"
            );
            Ok(WrittenRuleSet {
                label: group.label.clone(),
                path,
                suffix_count,
                full_count,
            })
        }
        Err(e) => {
            error!(path = %path.display(), error = %e, "failed to write rule-set file");
            Err(FailedRuleSet {
                label: group.label.clone(),
                path,
                error: e.to_string(),
            })
        }
    }
}
