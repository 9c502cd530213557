//! The settings sync pipeline.
//!
//! A run is strictly sequential and fail-fast:
//!
//! 1. Extract `Setting*` keys from the Go source
//! 2. Narrow them to the keys that need defaults
//! 3. Verify each configured defaults source declares all of them
//! 4. Verify the admin template renders the startup config block
//!
//! The first failing step ends the run. Nothing is cached between runs, so
//! unchanged inputs always give the same result.

use std::collections::BTreeSet;

use crate::config::{CheckConfig, DefaultsMode};
use crate::defaults::DefaultsSource;
use crate::error::SyncError;
use crate::setting_keys::{read_setting_keys, required_keys};
use crate::template::check_template_marker;

/// Summary of a passing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckReport {
    /// Every key extracted from the Go source.
    pub setting_keys: BTreeSet<String>,
    /// Keys that were required to have defaults.
    pub required_keys: BTreeSet<String>,
    /// Defaults source(s) that were verified.
    pub mode: DefaultsMode,
}

impl CheckReport {
    /// The line printed to stdout on success.
    #[must_use]
    pub fn success_line(&self) -> String {
        format!(
            "OK: settings sync check passed ({} required keys, {})",
            self.required_keys.len(),
            self.mode.as_str()
        )
    }
}

/// Run every check against the repository described by `config`.
///
/// # Errors
///
/// Returns the first failure: an unreadable input, a malformed defaults
/// file, required keys without defaults, or a template without the marker.
pub fn run(config: &CheckConfig) -> Result<CheckReport, SyncError> {
    tracing::debug!("checking settings sync in {}", config.repo_root.display());

    let setting_keys = read_setting_keys(&config.app_settings_path())?;
    let required = required_keys(&setting_keys);
    tracing::debug!("{} of {} setting keys require defaults", required.len(), setting_keys.len());

    for &format in config.mode.formats() {
        let source = DefaultsSource::load(format, &config.defaults_path(format))?;
        tracing::debug!(
            "{} declares {} default keys",
            source.format().relative_path(),
            source.keys().len()
        );
        source.ensure_covers(&required)?;
    }

    check_template_marker(&config.template_path())?;

    Ok(CheckReport {
        setting_keys,
        required_keys: required,
        mode: config.mode,
    })
}
