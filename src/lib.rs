//! # geosite-rs
//!
//! Converts the domain-list-community corpus into sing-box source
//! rule-set files.
//!
//! ## Crates
//!
//! - [`geosite_core`] - Shared default values
//! - [`geosite_rules`] - Line classification and include resolution
//! - [`geosite_config`] - Configuration loading and validation
//! - [`geosite_convert`] - Conversion runs, output writing and the CLI

pub use geosite_config as config;
pub use geosite_convert as convert;
pub use geosite_core as core;
pub use geosite_rules as rules;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use geosite_config::{Config, Mode, load_config, validate_config};
    pub use geosite_convert::{ConvertError, Report, run};
    pub use geosite_rules::{
        ContentProvider, DirProvider, IgnorePolicy, ResolutionResult, Resolver, RuleSetName,
        RunMode,
    };
}
