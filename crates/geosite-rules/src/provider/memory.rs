//! In-memory rule-set provider.

use std::io::{Error, ErrorKind};

use parking_lot::Mutex;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::error::SourceError;
use crate::provider::{ContentProvider, split_lines};
use crate::rule::RuleSetName;

/// Provider backed by a map of name to content.
///
/// A provider built with [`recording`](Self::recording) logs every `lines`
/// call, including calls for unknown names, so callers can check which rule
/// sets a run actually fetched. The default provider keeps no such log.
#[derive(Debug, Default)]
pub struct MemoryProvider {
    sets: FxHashMap<RuleSetName, String>,
    unreadable: FxHashSet<RuleSetName>,
    fetched: Option<Mutex<Vec<RuleSetName>>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provider that records the names passed to `lines`.
    pub fn recording() -> Self {
        Self {
            fetched: Some(Mutex::new(Vec::new())),
            ..Self::default()
        }
    }

    /// Add or replace a rule set.
    pub fn insert(&mut self, name: impl Into<RuleSetName>, content: impl Into<String>) {
        self.sets.insert(name.into(), content.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, name: impl Into<RuleSetName>, content: impl Into<String>) -> Self {
        self.insert(name, content);
        self
    }

    /// Make `name` fail to read, as a file with invalid content would.
    pub fn with_unreadable(mut self, name: impl Into<RuleSetName>) -> Self {
        self.unreadable.insert(name.into());
        self
    }

    /// Names passed to `lines`, in call order. Empty unless recording.
    pub fn fetched(&self) -> Vec<RuleSetName> {
        self.fetched
            .as_ref()
            .map(|log| log.lock().clone())
            .unwrap_or_default()
    }

    /// Forget recorded fetches.
    pub fn clear_fetched(&self) {
        if let Some(log) = &self.fetched {
            log.lock().clear();
        }
    }
}

impl ContentProvider for MemoryProvider {
    fn lines(&self, name: &RuleSetName) -> Result<Vec<String>, SourceError> {
        if let Some(log) = &self.fetched {
            log.lock().push(name.clone());
        }
        if self.unreadable.contains(name) {
            return Err(SourceError::Read {
                name: name.to_string(),
                source: Error::new(ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
            });
        }
        self.sets
            .get(name)
            .map(|content| split_lines(content))
            .ok_or_else(|| SourceError::NotFound {
                name: name.to_string(),
                path: name.as_str().into(),
            })
    }

    fn names(&self) -> Result<Vec<RuleSetName>, SourceError> {
        let mut names: Vec<_> = self.sets.keys().cloned().collect();
        names.sort();
        Ok(names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_and_recording() {
        let provider = MemoryProvider::recording().with("a", "a.com\nb.com");
        assert_eq!(provider.lines(&"a".into()).unwrap(), vec!["a.com", "b.com"]);
        assert!(provider.lines(&"b".into()).unwrap_err().is_not_found());
        assert_eq!(
            provider.fetched(),
            vec![RuleSetName::from("a"), RuleSetName::from("b")]
        );
        provider.clear_fetched();
        assert!(provider.fetched().is_empty());
    }

    #[test]
    fn default_provider_does_not_record() {
        let provider = MemoryProvider::new().with("a", "a.com");
        for _ in 0..3 {
            provider.lines(&"a".into()).unwrap();
        }
        assert!(provider.fetched().is_empty());
    }

    #[test]
    fn unreadable_set_is_read_error() {
        let provider = MemoryProvider::new()
            .with("bad", "bad.com")
            .with_unreadable("bad");
        let err = provider.lines(&"bad".into()).unwrap_err();
        assert!(matches!(err, SourceError::Read { ref name, .. } if name == "bad"));
    }

    #[test]
    fn names_are_sorted() {
        let provider = MemoryProvider::new().with("b", "").with("a", "");
        assert_eq!(
            provider.names().unwrap(),
            vec![RuleSetName::from("a"), RuleSetName::from("b")]
        );
    }
}
