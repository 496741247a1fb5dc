//! Conversion error types.

use std::path::PathBuf;

use geosite_config::ConfigError;
use geosite_rules::{RulesError, SourceError};

/// Conversion error type.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("config: {0}")]
    Config(#[from] ConfigError),
    #[error("rules: {0}")]
    Rules(RulesError),
    #[error(transparent)]
    CorpusUnavailable(SourceError),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("write {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("{failed} rule-set file(s) could not be written")]
    Incomplete { failed: usize },
}

impl From<RulesError> for ConvertError {
    fn from(e: RulesError) -> Self {
        match e {
            RulesError::Source(source @ SourceError::CorpusUnavailable { .. }) => {
                ConvertError::CorpusUnavailable(source)
            }
            e => ConvertError::Rules(e),
        }
    }
}

impl ConvertError {
    /// True when the corpus directory itself could not be reached.
    pub fn is_corpus_unavailable(&self) -> bool {
        matches!(self, ConvertError::CorpusUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn corpus_failure_gets_its_own_variant() {
        let err = ConvertError::from(RulesError::Source(SourceError::CorpusUnavailable {
            path: "data".into(),
            source: io::Error::from(io::ErrorKind::NotFound),
        }));
        assert!(err.is_corpus_unavailable());

        let err = ConvertError::from(RulesError::NoSeeds);
        assert!(matches!(err, ConvertError::Rules(RulesError::NoSeeds)));
        assert!(!err.is_corpus_unavailable());
    }
}
