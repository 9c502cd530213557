//! `config.example.yaml` reader.

use std::collections::BTreeSet;
use std::path::Path;

use serde_yaml::Value;

use crate::error::{SyncError, read_input};

/// Top-level key holding the setting defaults mapping.
pub const DEFAULTS_SECTION: &str = "app_settings_defaults";

/// Read the YAML config at `path` and collect the keys of its defaults mapping.
pub fn load_yaml_defaults(path: &Path) -> Result<BTreeSet<String>, SyncError> {
    let contents = read_input(path)?;
    parse_yaml_defaults(path, &contents)
}

/// Collect the keys under `app_settings_defaults` in YAML `contents`.
///
/// An empty document counts as an empty mapping. Merge keys (`<<: *anchor`)
/// are resolved before lookup. Non-string keys are skipped. Duplicate keys
/// are a parse error. `path` is only used in error messages.
pub fn parse_yaml_defaults(path: &Path, contents: &str) -> Result<BTreeSet<String>, SyncError> {
    let parse_error = |e: serde_yaml::Error| SyncError::YamlParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let document = if is_empty_document(contents) {
        Value::Null
    } else {
        let mut document = serde_yaml::from_str::<Value>(contents).map_err(parse_error)?;
        document.apply_merge().map_err(parse_error)?;
        document
    };

    let root = match document {
        Value::Null => return Err(missing_section(path)),
        Value::Mapping(mapping) => mapping,
        _ => {
            return Err(SyncError::NotAMapping {
                path: path.to_path_buf(),
            });
        }
    };

    let Some(Value::Mapping(section)) = root.get(DEFAULTS_SECTION) else {
        return Err(missing_section(path));
    };

    Ok(section
        .keys()
        .filter_map(Value::as_str)
        .map(ToString::to_string)
        .collect())
}

fn is_empty_document(contents: &str) -> bool {
    contents.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---"
    })
}

fn missing_section(path: &Path) -> SyncError {
    SyncError::MissingDefaultsSection {
        path: path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(contents: &str) -> Result<BTreeSet<String>, SyncError> {
        parse_yaml_defaults(Path::new("config.example.yaml"), contents)
    }

    #[test]
    fn test_collects_section_keys() {
        let keys = parse(
            "server:\n  addr: \":8080\"\napp_settings_defaults:\n  site_base_url: \"\"\n  feature_disable_models: false\n",
        )
        .expect("parse");
        let expected: BTreeSet<String> = ["feature_disable_models", "site_base_url"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_empty_section_is_allowed() {
        let keys = parse("app_settings_defaults: {}\n").expect("parse");
        assert!(keys.is_empty());
    }

    #[test]
    fn test_empty_document_lacks_section() {
        let error = parse("# only a comment\n\n").unwrap_err();
        assert!(matches!(error, SyncError::MissingDefaultsSection { .. }));
    }

    #[test]
    fn test_top_level_list_is_rejected() {
        let error = parse("- a\n- b\n").unwrap_err();
        assert!(matches!(error, SyncError::NotAMapping { .. }));
        assert_eq!(
            error.to_string(),
            "config.example.yaml top level must be a mapping"
        );
    }

    #[test]
    fn test_missing_section() {
        let error = parse("server:\n  addr: \":8080\"\n").unwrap_err();
        assert!(matches!(error, SyncError::MissingDefaultsSection { .. }));
    }

    #[test]
    fn test_section_must_be_a_mapping() {
        let error = parse("app_settings_defaults:\n  - site_base_url\n").unwrap_err();
        assert!(matches!(error, SyncError::MissingDefaultsSection { .. }));

        let error = parse("app_settings_defaults:\n").unwrap_err();
        assert!(matches!(error, SyncError::MissingDefaultsSection { .. }));
    }

    #[test]
    fn test_parse_error_names_file() {
        let error = parse("app_settings_defaults: [unclosed\n").unwrap_err();
        assert!(matches!(error, SyncError::YamlParse { .. }));
        assert!(error.to_string().starts_with("failed to parse config.example.yaml: "));
    }

    #[test]
    fn test_merge_keys_are_resolved() {
        let keys = parse(
            "base: &base\n  site_base_url: \"\"\n  admin_time_zone: UTC\napp_settings_defaults:\n  <<: *base\n  feature_disable_models: false\n",
        )
        .expect("parse");
        let expected: BTreeSet<String> = ["admin_time_zone", "feature_disable_models", "site_base_url"]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_invalid_merge_is_parse_error() {
        let error = parse("app_settings_defaults:\n  <<: not_a_mapping\n").unwrap_err();
        assert!(matches!(error, SyncError::YamlParse { .. }));
    }

    #[test]
    fn test_duplicate_keys_are_parse_error() {
        let error =
            parse("app_settings_defaults:\n  site_base_url: a\n  site_base_url: b\n").unwrap_err();
        assert!(matches!(error, SyncError::YamlParse { .. }));
    }

    #[test]
    fn test_non_string_keys_are_skipped() {
        let keys = parse("app_settings_defaults:\n  1: one\n  site_base_url: x\n").expect("parse");
        assert_eq!(keys.len(), 1);
        assert!(keys.contains("site_base_url"));
    }
}
