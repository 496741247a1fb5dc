//! Line-level parsing of domain-list-community rule sets.

pub mod classify;

pub use classify::{clean_content, classify};
