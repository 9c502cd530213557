//! Setting key extraction and the required-key filter.
//!
//! Keys are pulled out of `internal/store/app_settings.go` with a regular
//! expression, not a Go parser. Any `Setting<Ident> = "<key>"` text matches,
//! whether it sits in a `const` block, a `var` block or a comment. Keep it a
//! heuristic: the result has to agree with what the CI script has always
//! extracted.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{SyncError, read_input};

/// Keys that always need a default, regardless of prefix.
pub const ALWAYS_REQUIRED_KEYS: [&str; 2] = ["site_base_url", "admin_time_zone"];

/// Every key with this prefix needs a default.
pub const REQUIRED_KEY_PREFIX: &str = "feature_disable_";

#[allow(clippy::expect_used)] // literal pattern
static SETTING_CONST_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\bSetting\w+\s*=\s*"([^"]+)""#).expect("setting constant pattern is valid")
});

/// Extract every string assigned to a `Setting*` identifier.
///
/// Returns the unique keys in sorted order.
#[must_use]
pub fn extract_setting_keys(source: &str) -> BTreeSet<String> {
    SETTING_CONST_RE
        .captures_iter(source)
        .filter_map(|captures| captures.get(1))
        .map(|key| key.as_str().to_string())
        .collect()
}

/// Read `path` and extract its setting keys.
pub fn read_setting_keys(path: &Path) -> Result<BTreeSet<String>, SyncError> {
    let source = read_input(path)?;
    let keys = extract_setting_keys(&source);
    tracing::debug!("extracted {} setting keys from {}", keys.len(), path.display());
    Ok(keys)
}

/// Whether `key` must have a declared default.
#[must_use]
pub fn is_required_key(key: &str) -> bool {
    ALWAYS_REQUIRED_KEYS.contains(&key) || key.starts_with(REQUIRED_KEY_PREFIX)
}

/// Narrow `keys` to the ones that must have a declared default.
#[must_use]
pub fn required_keys(keys: &BTreeSet<String>) -> BTreeSet<String> {
    keys.iter()
        .filter(|key| is_required_key(key))
        .cloned()
        .collect()
}
