//! Configuration validation logic.

use crate::defaults::max_json_indent;
use crate::loader::ConfigError;
use crate::{Config, Mode};

pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.source.data_dir.trim().is_empty() {
        return Err(ConfigError::Validation("source.data_dir is empty".into()));
    }
    if config.output.version == 0 {
        return Err(ConfigError::Validation(
            "output.version must be >= 1".into(),
        ));
    }
    if config.output.indent > max_json_indent() {
        return Err(ConfigError::Validation(format!(
            "output.indent too large (max {})",
            max_json_indent()
        )));
    }
    if config.mode == Mode::Single {
        if config.single.seeds.is_empty() {
            return Err(ConfigError::Validation(
                "single mode requires at least one entry in single.seeds".into(),
            ));
        }
        if config.single.seeds.iter().any(|s| s.trim().is_empty()) {
            return Err(ConfigError::Validation(
                "single.seeds must not contain blank names".into(),
            ));
        }
        if let Some(name) = &config.single.name
            && (name.trim().is_empty() || name.contains(['/', '\\']))
        {
            return Err(ConfigError::Validation(
                "single.name must be a non-empty file stem".into(),
            ));
        }
    }
    let valid_formats = ["json", "pretty", "compact"];
    if let Some(format) = &config.logging.format
        && !valid_formats.contains(&format.as_str())
    {
        return Err(ConfigError::Validation(format!(
            "logging.format must be one of: {:?}",
            valid_formats
        )));
    }
    let valid_outputs = ["stdout", "stderr"];
    if let Some(output) = &config.logging.output
        && !valid_outputs.contains(&output.as_str())
    {
        return Err(ConfigError::Validation(format!(
            "logging.output must be one of: {:?}",
            valid_outputs
        )));
    }
    Ok(())
}
