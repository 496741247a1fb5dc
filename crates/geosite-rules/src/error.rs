//! Error types for the rule-set resolver.

use std::path::PathBuf;

use thiserror::Error;

/// Failures reported by a content provider.
///
/// `NotFound` and `Read` concern a single rule set and never abort a
/// traversal. `CorpusUnavailable` means the corpus itself cannot be listed.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("rule set not found: {name} ({path})")]
    NotFound { name: String, path: PathBuf },

    #[error("failed to read rule set {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("corpus directory {path} is not accessible: {source}")]
    CorpusUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SourceError {
    /// True for the "no such rule set" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SourceError::NotFound { .. })
    }
}

/// Errors that can occur in the rule-set resolver.
#[derive(Error, Debug)]
pub enum RulesError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error("single-target mode needs at least one seed")]
    NoSeeds,
}
