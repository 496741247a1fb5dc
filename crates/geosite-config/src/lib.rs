//! Configuration loading and CLI definitions.
//!
//! Config files may be JSON (with comments), YAML or TOML; the format is
//! chosen by extension. Command-line flags from [`CliOverrides`] are applied
//! on top of the loaded file before validation.

mod cli;
mod defaults;
mod loader;
mod types;
mod validate;

pub use cli::{CliOverrides, apply_overrides};
pub use loader::{ConfigError, load_config};
pub use types::*;
pub use validate::validate_config;
