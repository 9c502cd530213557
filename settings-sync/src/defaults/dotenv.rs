//! `.env.example` reader.
//!
//! Only key names matter here; values are never interpreted.

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{SyncError, read_input};

/// Prefix of the env vars that carry setting defaults.
pub const DEFAULTS_ENV_PREFIX: &str = "REALMS_APP_SETTINGS_DEFAULTS_";

/// Env var that declares the default for `setting_key`.
#[must_use]
pub fn env_var_name(setting_key: &str) -> String {
    format!("{DEFAULTS_ENV_PREFIX}{}", setting_key.to_ascii_uppercase())
}

/// Read the dotenv file at `path` and collect its keys.
pub fn load_dotenv_keys(path: &Path) -> Result<BTreeSet<String>, SyncError> {
    let contents = read_input(path)?;
    parse_dotenv_keys(path, &contents)
}

/// Collect the keys of dotenv `contents`.
///
/// Lines break at `\n`, `\r\n`, a lone `\r` and the other Unicode line
/// boundaries (vertical tab, form feed, `\x1c`-`\x1e`, NEL, U+2028, U+2029).
/// Blank lines and `#` comments are skipped and a leading `export ` is
/// dropped. Every other line must be `KEY=value` with a non-empty key.
/// `path` is only used in error messages.
pub fn parse_dotenv_keys(path: &Path, contents: &str) -> Result<BTreeSet<String>, SyncError> {
    let mut keys = BTreeSet::new();
    for (index, raw) in split_lines(contents).enumerate() {
        let line_number = index + 1;
        let mut line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some(rest) = line.strip_prefix("export ") {
            line = rest.trim();
        }
        let Some((key, _value)) = line.split_once('=') else {
            return Err(SyncError::MissingEquals {
                path: path.to_path_buf(),
                line: line_number,
            });
        };
        let key = key.trim();
        if key.is_empty() {
            return Err(SyncError::EmptyKey {
                path: path.to_path_buf(),
                line: line_number,
            });
        }
        keys.insert(key.to_string());
    }
    Ok(keys)
}

/// Split `contents` at every line boundary, treating `\r\n` as one.
fn split_lines(contents: &str) -> impl Iterator<Item = &str> {
    let mut rest = contents;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(end) = rest.find(is_line_boundary) else {
            let line = rest;
            rest = "";
            return Some(line);
        };
        let line = &rest[..end];
        let separator_len = if rest[end..].starts_with("\r\n") {
            2
        } else {
            rest[end..].chars().next().map_or(1, char::len_utf8)
        };
        rest = &rest[end + separator_len..];
        Some(line)
    })
}

const fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}
