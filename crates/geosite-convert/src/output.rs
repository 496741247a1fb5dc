//! sing-box source rule-set output.
//!
//! ```json
//! {
//!     "version": 3,
//!     "rules": [
//!         {
//!             "domain": ["www.example.com"],
//!             "domain_suffix": ["example.org"]
//!         }
//!     ]
//! }
//! ```

use std::path::{Path, PathBuf};

use geosite_rules::ResolutionResult;
use serde::{Deserialize, Serialize};
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::ConvertError;

/// A sing-box source rule-set file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSetFile {
    pub version: u8,
    pub rules: Vec<DomainRule>,
}

/// One headless rule holding exact and suffix domain matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainRule {
    /// Exact-match domains.
    pub domain: Vec<String>,
    /// Suffix-match domains.
    pub domain_suffix: Vec<String>,
}

impl RuleSetFile {
    /// Wrap a resolution result as a single-rule file.
    pub fn from_result(version: u8, result: ResolutionResult) -> Self {
        Self {
            version,
            rules: vec![DomainRule {
                domain: result.full_domains,
                domain_suffix: result.suffix_domains,
            }],
        }
    }

    /// Serialize with `indent` spaces per level; 0 gives compact output.
    /// Non-ASCII characters are written as-is.
    pub fn to_json(&self, indent: usize) -> Result<Vec<u8>, serde_json::Error> {
        if indent == 0 {
            return serde_json::to_vec(self);
        }
        let indent = vec![b' '; indent];
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&indent));
        self.serialize(&mut ser)?;
        Ok(buf)
    }
}

/// Output location for a rule set labelled `stem`.
pub fn output_path(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{stem}.{}", geosite_core::OUTPUT_EXTENSION))
}

/// Write `content` to `path` atomically (write-to-temp + rename), creating
/// the parent directory when needed.
///
/// On Windows, the destination is removed first since `rename` fails when
/// the target already exists.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<(), ConvertError> {
    let io_err = |source: std::io::Error| ConvertError::Output {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = path.with_file_name(tmp_name);
    std::fs::write(&tmp_path, content).map_err(io_err)?;
    #[cfg(target_os = "windows")]
    {
        let _ = std::fs::remove_file(path);
    }
    std::fs::rename(&tmp_path, path).map_err(io_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RuleSetFile {
        RuleSetFile::from_result(
            3,
            ResolutionResult {
                suffix_domains: vec!["example.org".into(), "例子.测试".into()],
                full_domains: vec!["www.example.com".into()],
            },
        )
    }

    #[test]
    fn four_space_layout() {
        let json = String::from_utf8(sample().to_json(4).unwrap()).unwrap();
        let expected = r#"{
    "version": 3,
    "rules": [
        {
            "domain": [
                "www.example.com"
            ],
            "domain_suffix": [
                "example.org",
                "例子.测试"
            ]
        }
    ]
}"#;
        assert_eq!(json, expected);
    }

    #[test]
    fn empty_lists_are_kept() {
        let file = RuleSetFile::from_result(3, ResolutionResult::default());
        let json = String::from_utf8(file.to_json(0).unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"version":3,"rules":[{"domain":[],"domain_suffix":[]}]}"#
        );
    }

    #[test]
    fn output_path_appends_extension() {
        assert_eq!(
            output_path(Path::new("out"), "category-ads"),
            PathBuf::from("out/category-ads.json")
        );
        // Dotted names keep their dots.
        assert_eq!(
            output_path(Path::new("out"), "apple.cn"),
            PathBuf::from("out/apple.cn.json")
        );
    }

    #[test]
    fn write_atomic_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/out/google.json");
        write_atomic(&path, b"{}").unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), b"{}");
        assert!(!dir.path().join("nested/out/google.json.tmp").exists());
    }

    #[test]
    fn write_atomic_replaces_existing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("google.json");
        std::fs::write(&path, "old").unwrap();
        write_atomic(&path, b"new").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "new");
    }
}
