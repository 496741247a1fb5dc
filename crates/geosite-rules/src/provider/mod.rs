//! Rule-set providers for loading rule-set content by name.

pub mod dir;
pub mod memory;

pub use dir::DirProvider;
pub use memory::MemoryProvider;

use crate::error::SourceError;
use crate::rule::RuleSetName;

/// Source of rule-set content.
///
/// Shared read-only between resolution runs, which may execute on
/// different threads in batch mode.
pub trait ContentProvider: Send + Sync {
    /// Lines of the named rule set, without line terminators.
    fn lines(&self, name: &RuleSetName) -> Result<Vec<String>, SourceError>;

    /// All top-level rule sets the provider knows about, sorted by name.
    fn names(&self) -> Result<Vec<RuleSetName>, SourceError>;

    /// Fails with `CorpusUnavailable` when the corpus itself cannot be
    /// reached, as opposed to a single rule set being absent.
    fn ensure_available(&self) -> Result<(), SourceError> {
        Ok(())
    }
}

impl<P: ContentProvider + ?Sized> ContentProvider for &P {
    fn lines(&self, name: &RuleSetName) -> Result<Vec<String>, SourceError> {
        (**self).lines(name)
    }

    fn names(&self) -> Result<Vec<RuleSetName>, SourceError> {
        (**self).names()
    }

    fn ensure_available(&self) -> Result<(), SourceError> {
        (**self).ensure_available()
    }
}

impl<P: ContentProvider + ?Sized> ContentProvider for std::sync::Arc<P> {
    fn lines(&self, name: &RuleSetName) -> Result<Vec<String>, SourceError> {
        (**self).lines(name)
    }

    fn names(&self) -> Result<Vec<RuleSetName>, SourceError> {
        (**self).names()
    }

    fn ensure_available(&self) -> Result<(), SourceError> {
        (**self).ensure_available()
    }
}

/// Split file content into lines, dropping `\n` / `\r\n` terminators.
pub(crate) fn split_lines(content: &str) -> Vec<String> {
    content.lines().map(str::to_string).collect()
}
