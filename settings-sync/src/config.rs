//! Checker configuration module.
//!
//! The checker runs without flags. Everything has a default, and a couple of
//! environment variables allow overriding them in CI.
//!
//! # Environment Variables
//!
//! - `SETTINGS_SYNC_REPO_ROOT`: Repository to check (default: parent of this crate's directory)
//! - `SETTINGS_SYNC_DEFAULTS_MODE`: `env`, `yaml` or `both` (default: `env`)
//!
//! # Invariants
//!
//! - Input paths are always fixed paths relative to `repo_root`
//! - `mode` always selects at least one defaults source

use std::path::{Path, PathBuf};

use crate::defaults::DefaultsFormat;

/// Relative path of the Go file declaring the `Setting*` constants.
pub const APP_SETTINGS_SOURCE: &str = "internal/store/app_settings.go";
/// Relative path of the admin settings template.
pub const SETTINGS_TEMPLATE: &str = "internal/admin/templates/settings.html";

const REPO_ROOT_VAR: &str = "SETTINGS_SYNC_REPO_ROOT";
const DEFAULTS_MODE_VAR: &str = "SETTINGS_SYNC_DEFAULTS_MODE";

/// Which defaults source(s) a run verifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DefaultsMode {
    /// `.env.example` with `REALMS_APP_SETTINGS_DEFAULTS_*` variables.
    #[default]
    Env,
    /// `config.example.yaml` with an `app_settings_defaults` mapping.
    Yaml,
    /// Both sources, dotenv first.
    Both,
}

impl DefaultsMode {
    /// The defaults formats checked in this mode, in check order.
    #[must_use]
    pub const fn formats(self) -> &'static [DefaultsFormat] {
        match self {
            Self::Env => &[DefaultsFormat::Dotenv],
            Self::Yaml => &[DefaultsFormat::Yaml],
            Self::Both => &[DefaultsFormat::Dotenv, DefaultsFormat::Yaml],
        }
    }

    /// Short name used in the success line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Env => "env",
            Self::Yaml => "yaml",
            Self::Both => "both",
        }
    }
}

impl std::str::FromStr for DefaultsMode {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "env" | "dotenv" => Ok(Self::Env),
            "yaml" | "yml" => Ok(Self::Yaml),
            "both" => Ok(Self::Both),
            _ => Err(ConfigError::InvalidValue {
                name: DEFAULTS_MODE_VAR.to_string(),
                message: format!("'{value}' is not one of env, yaml, both"),
            }),
        }
    }
}

/// Checker configuration.
///
/// # Post-conditions
///
/// - `repo_root` is set (it may not exist; reads fail later with a path)
#[derive(Debug, Clone)]
pub struct CheckConfig {
    /// Root of the repository being checked.
    pub repo_root: PathBuf,
    /// Defaults source(s) to verify.
    pub mode: DefaultsMode,
}

/// Error returned when loading configuration fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    InvalidValue { name: String, message: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { name, message } => {
                write!(f, "invalid value for {name}: {message}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl CheckConfig {
    /// Build a configuration for an explicit repository root.
    #[must_use]
    pub fn new(repo_root: impl Into<PathBuf>, mode: DefaultsMode) -> Self {
        Self {
            repo_root: repo_root.into(),
            mode,
        }
    }

    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `SETTINGS_SYNC_DEFAULTS_MODE` is set to an unknown mode.
    pub fn from_env() -> Result<Self, ConfigError> {
        let repo_root = Self::load_repo_root();
        let mode = Self::load_mode()?;
        Ok(Self { repo_root, mode })
    }

    /// Repository root baked in at build time: the parent of this crate's directory.
    #[must_use]
    pub fn default_repo_root() -> PathBuf {
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        manifest_dir
            .parent()
            .map_or_else(|| manifest_dir.to_path_buf(), Path::to_path_buf)
    }

    fn load_repo_root() -> PathBuf {
        std::env::var(REPO_ROOT_VAR)
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map_or_else(Self::default_repo_root, PathBuf::from)
    }

    fn load_mode() -> Result<DefaultsMode, ConfigError> {
        match std::env::var(DEFAULTS_MODE_VAR) {
            Ok(value) if !value.trim().is_empty() => value.parse(),
            _ => Ok(DefaultsMode::default()),
        }
    }

    /// Path of the Go source declaring setting keys.
    #[must_use]
    pub fn app_settings_path(&self) -> PathBuf {
        self.repo_root.join(APP_SETTINGS_SOURCE)
    }

    /// Path of the admin settings template.
    #[must_use]
    pub fn template_path(&self) -> PathBuf {
        self.repo_root.join(SETTINGS_TEMPLATE)
    }

    /// Path of the defaults file for `format`.
    #[must_use]
    pub fn defaults_path(&self, format: DefaultsFormat) -> PathBuf {
        self.repo_root.join(format.relative_path())
    }
}
