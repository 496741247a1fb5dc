//! Configuration file loading and error types.

use std::{fs, path::Path};

use crate::Config;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("yaml: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("unsupported config format")]
    UnsupportedFormat,
    #[error("validation: {0}")]
    Validation(String),
}

/// Load a config file, picking the format from its extension
/// (json/jsonc, yaml/yml, toml).
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let data = fs::read_to_string(path)?;
    match path.extension().and_then(|s| s.to_str()).unwrap_or("") {
        "json" | "jsonc" => {
            let stripped = json_comments::StripComments::new(data.as_bytes());
            Ok(serde_json::from_reader(stripped)?)
        }
        "yaml" | "yml" => Ok(serde_yaml::from_str(&data)?),
        "toml" => Ok(toml::from_str(&data)?),
        _ => Err(ConfigError::UnsupportedFormat),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Mode;

    fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "config.toml",
            r#"
[source]
data_dir = "/srv/data"

[policy]
ignore = ["all"]
exclude_suffixes = []
"#,
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.source.data_dir, "/srv/data");
        assert_eq!(config.policy.ignore, vec!["all"]);
        assert!(config.policy.exclude_suffixes.is_empty());
    }

    #[test]
    fn load_jsonc_with_comments() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "config.jsonc",
            r#"{
    // merged proxy list
    "mode": "single",
    "single": { "seeds": ["google"], "name": "proxy" }
}"#,
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.mode, Mode::Single);
        assert_eq!(config.single.name.as_deref(), Some("proxy"));
    }

    #[test]
    fn load_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(
            &dir,
            "config.yaml",
            "output:\n  dir: out\n  dedup: true\nbatch:\n  parallel: true\n  jobs: 4\n",
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.output.dir, "out");
        assert!(config.output.dedup);
        assert!(config.batch.parallel);
        assert_eq!(config.batch.jobs, 4);
    }

    #[test]
    fn example_config_is_valid() {
        let config: Config = toml::from_str(include_str!("../../../geosite.example.toml")).unwrap();
        crate::validate_config(&config).unwrap();
        assert_eq!(config.mode, Mode::Batch);
        assert_eq!(config.output.dir, "rule-set");
        assert_eq!(config.logging.filters.get("geosite_rules").map(String::as_str), Some("info"));
    }

    #[test]
    fn unknown_extension_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "config.ini", "");
        assert!(matches!(
            load_config(&path).unwrap_err(),
            ConfigError::UnsupportedFormat
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_config(dir.path().join("nope.toml")).unwrap_err(),
            ConfigError::Io(_)
        ));
    }
}
