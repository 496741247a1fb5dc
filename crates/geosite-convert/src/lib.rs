//! geosite-convert library.
//!
//! Turns a domain-list-community corpus into sing-box source rule-set
//! files. Batch mode writes one file per top-level rule set; single mode
//! merges an explicit seed list into one file.

pub mod cli;
mod convert;
mod error;
pub mod output;
mod rules;

pub use cli::ConvertArgs;
pub use convert::{FailedRuleSet, Report, WrittenRuleSet, run};
pub use error::ConvertError;
pub use rules::{build_resolver, run_mode};
