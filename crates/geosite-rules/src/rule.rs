//! Rule-set names, classified lines and resolution results.

use std::borrow::Borrow;
use std::fmt;

use rustc_hash::FxHashSet;

/// Identifier of a rule set, doubling as its lookup key in a
/// [`ContentProvider`](crate::provider::ContentProvider).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RuleSetName(String);

impl RuleSetName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RuleSetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for RuleSetName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RuleSetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for RuleSetName {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for RuleSetName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl From<&RuleSetName> for RuleSetName {
    fn from(name: &RuleSetName) -> Self {
        name.clone()
    }
}

/// Outcome of classifying one raw line of a rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedLine {
    /// Empty line, or a directive whose payload is empty.
    Blank,
    /// `# ...`
    Comment,
    /// `regexp:...`; regex rules have no counterpart in the output format.
    RegexIgnored,
    /// `include:<name>`
    Include(RuleSetName),
    /// `full:<domain>`, an exact-match domain.
    FullDomain(String),
    /// A bare domain, matching the domain and all of its subdomains.
    SuffixDomain(String),
}

/// Domains collected by one resolution run, in traversal order.
///
/// Values are kept exactly as encountered, so the same domain may appear
/// more than once when several included rule sets list it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolutionResult {
    pub suffix_domains: Vec<String>,
    pub full_domains: Vec<String>,
}

impl ResolutionResult {
    pub fn is_empty(&self) -> bool {
        self.suffix_domains.is_empty() && self.full_domains.is_empty()
    }

    /// Total number of collected values, repeats included.
    pub fn len(&self) -> usize {
        self.suffix_domains.len() + self.full_domains.len()
    }

    /// Drop repeated values from both sequences, keeping the first
    /// occurrence of each.
    pub fn dedup(&mut self) {
        dedup_in_order(&mut self.suffix_domains);
        dedup_in_order(&mut self.full_domains);
    }
}

fn dedup_in_order(values: &mut Vec<String>) {
    let mut seen = FxHashSet::default();
    values.retain(|v| seen.insert(v.clone()));
}
