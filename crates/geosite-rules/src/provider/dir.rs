//! Directory-backed rule-set provider.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::SourceError;
use crate::provider::{ContentProvider, split_lines};
use crate::rule::RuleSetName;

/// Provider that reads each rule set from `<root>/<name>`.
#[derive(Debug, Clone)]
pub struct DirProvider {
    root: PathBuf,
}

impl DirProvider {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory holding the rule-set files.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn unavailable(&self, source: std::io::Error) -> SourceError {
        SourceError::CorpusUnavailable {
            path: self.root.clone(),
            source,
        }
    }

    /// Location of the named rule set.
    pub fn path_of(&self, name: &RuleSetName) -> PathBuf {
        self.root.join(name.as_str())
    }
}

impl ContentProvider for DirProvider {
    fn lines(&self, name: &RuleSetName) -> Result<Vec<String>, SourceError> {
        let path = self.path_of(name);
        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(split_lines(&content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(SourceError::NotFound {
                name: name.to_string(),
                path,
            }),
            Err(e) => Err(SourceError::Read {
                name: name.to_string(),
                source: e,
            }),
        }
    }

    fn names(&self) -> Result<Vec<RuleSetName>, SourceError> {
        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root).map_err(|e| self.unavailable(e))? {
            let entry = entry.map_err(|e| self.unavailable(e))?;
            // Follows symlinks, so linked rule files still count.
            let is_file = std::fs::metadata(entry.path())
                .map(|m| m.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(RuleSetName::from(name)),
                Err(raw) => {
                    tracing::warn!(name = ?raw, "skipping rule set with non UTF-8 name");
                }
            }
        }
        names.sort();
        Ok(names)
    }

    fn ensure_available(&self) -> Result<(), SourceError> {
        std::fs::read_dir(&self.root)
            .map(drop)
            .map_err(|e| self.unavailable(e))
    }
}
