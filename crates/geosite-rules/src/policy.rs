//! Ignore policy applied to rule-set names.

use rustc_hash::FxHashSet;

/// Names that are never read: exact matches and suffix exclusions.
///
/// The default policy ignores nothing.
#[derive(Debug, Clone, Default)]
pub struct IgnorePolicy {
    names: FxHashSet<String>,
    suffixes: Vec<String>,
}

impl IgnorePolicy {
    pub fn new<N, S>(names: N, suffixes: S) -> Self
    where
        N: IntoIterator,
        N::Item: Into<String>,
        S: IntoIterator,
        S::Item: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
            suffixes: suffixes
                .into_iter()
                .map(Into::into)
                .filter(|s: &String| !s.is_empty())
                .collect(),
        }
    }

    /// Whether `name` is listed exactly or ends with an excluded suffix.
    pub fn is_ignored(&self, name: &str) -> bool {
        self.names.contains(name) || self.suffixes.iter().any(|s| name.ends_with(s.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty() && self.suffixes.is_empty()
    }
}
