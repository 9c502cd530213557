//! Sources of declared setting defaults.
//!
//! A repository declares defaults either as `REALMS_APP_SETTINGS_DEFAULTS_*`
//! variables in `.env.example` or as keys of the `app_settings_defaults`
//! mapping in `config.example.yaml`. The two formats name keys differently:
//! dotenv prefixes and uppercases them, YAML uses them verbatim.

mod dotenv;
mod yaml;

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

pub use dotenv::{DEFAULTS_ENV_PREFIX, env_var_name, load_dotenv_keys, parse_dotenv_keys};
pub use yaml::{DEFAULTS_SECTION, load_yaml_defaults, parse_yaml_defaults};

use crate::error::SyncError;

/// File format of a defaults source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultsFormat {
    /// Line-oriented `KEY=value` file.
    Dotenv,
    /// YAML document with an `app_settings_defaults` mapping.
    Yaml,
}

impl DefaultsFormat {
    /// Path of this source relative to the repository root.
    #[must_use]
    pub const fn relative_path(self) -> &'static str {
        match self {
            Self::Dotenv => ".env.example",
            Self::Yaml => "config.example.yaml",
        }
    }

    /// The key a setting must have in this format.
    #[must_use]
    pub fn defaults_key(self, setting_key: &str) -> String {
        match self {
            Self::Dotenv => env_var_name(setting_key),
            Self::Yaml => setting_key.to_string(),
        }
    }
}

/// Keys declared by one defaults file.
///
/// # Invariants
///
/// - `keys` are stored in the file's own naming (env var names for dotenv)
#[derive(Debug, Clone)]
pub struct DefaultsSource {
    format: DefaultsFormat,
    path: PathBuf,
    keys: BTreeSet<String>,
}

impl DefaultsSource {
    /// Load the defaults file at `path`.
    pub fn load(format: DefaultsFormat, path: &Path) -> Result<Self, SyncError> {
        let keys = match format {
            DefaultsFormat::Dotenv => load_dotenv_keys(path)?,
            DefaultsFormat::Yaml => load_yaml_defaults(path)?,
        };
        Ok(Self {
            format,
            path: path.to_path_buf(),
            keys,
        })
    }

    /// Format of this source.
    #[must_use]
    pub const fn format(&self) -> DefaultsFormat {
        self.format
    }

    /// Declared keys, in the file's naming.
    #[must_use]
    pub const fn keys(&self) -> &BTreeSet<String> {
        &self.keys
    }

    /// Required setting keys without a default in this source, sorted.
    #[must_use]
    pub fn missing(&self, required: &BTreeSet<String>) -> Vec<String> {
        required
            .iter()
            .filter(|key| !self.keys.contains(&self.format.defaults_key(key)))
            .cloned()
            .collect()
    }

    /// Fail with every missing key if any required key lacks a default.
    pub fn ensure_covers(&self, required: &BTreeSet<String>) -> Result<(), SyncError> {
        let keys = self.missing(required);
        if keys.is_empty() {
            return Ok(());
        }
        let source = self.path.file_name().map_or_else(
            || self.path.display().to_string(),
            |name| name.to_string_lossy().into_owned(),
        );
        Err(SyncError::MissingDefaults { source, keys })
    }
}
