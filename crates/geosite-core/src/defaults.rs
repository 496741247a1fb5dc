//! Default configuration values.
//!
//! Centralized default constants for use across all crates.

// ============================================================================
// Corpus Defaults
// ============================================================================

/// Default directory holding one file per rule set.
pub const DEFAULT_DATA_DIR: &str = "domain-list-community/data";

/// Names that are never treated as rule sets, neither as seeds nor as
/// include targets. `all` aggregates the whole corpus.
pub const DEFAULT_IGNORED_NAMES: &[&str] =
    &["README.md", "README_CN.md", "README_EN.md", ".DS_Store", "all"];

/// File name suffixes that mark non-rule files.
pub const DEFAULT_EXCLUDED_SUFFIXES: &[&str] = &[".txt", ".md"];

// ============================================================================
// Output Defaults
// ============================================================================

/// sing-box source rule-set format version.
pub const DEFAULT_RULE_SET_VERSION: u8 = 3;
/// Default output directory.
pub const DEFAULT_OUTPUT_DIR: &str = ".";
/// Default JSON indent width in spaces.
pub const DEFAULT_JSON_INDENT: usize = 4;
/// Largest indent width accepted by validation.
pub const MAX_JSON_INDENT: usize = 16;
/// Extension appended to every generated rule-set file.
pub const OUTPUT_EXTENSION: &str = "json";
/// Output deduplication is off unless requested.
pub const DEFAULT_OUTPUT_DEDUP: bool = false;

// ============================================================================
// Batch Defaults
// ============================================================================

/// Batch groups run sequentially by default.
pub const DEFAULT_BATCH_PARALLEL: bool = false;
/// Worker count for parallel batches (0 = let rayon decide).
pub const DEFAULT_BATCH_JOBS: usize = 0;

// ============================================================================
// Single-Target Defaults
// ============================================================================

/// Separator used to build the label of a multi-seed single-target run.
pub const SEED_LABEL_SEPARATOR: &str = "+";
