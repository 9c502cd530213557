//! Error taxonomy for the settings sync check.
//!
//! Every variant is terminal: the checker stops at the first error and the
//! binary reports it as a single `ERROR:` line with exit status 1.

use std::path::PathBuf;

use crate::config::ConfigError;

/// Errors that can stop a settings sync run.
#[derive(Debug)]
pub enum SyncError {
    /// The checker configuration is invalid.
    Config(ConfigError),
    /// An input file could not be read.
    Io {
        /// The file that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// A dotenv line is neither blank, a comment, nor a `KEY=value` pair.
    MissingEquals {
        /// The dotenv file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
    },
    /// A dotenv line has nothing before its `=`.
    EmptyKey {
        /// The dotenv file.
        path: PathBuf,
        /// 1-based line number.
        line: usize,
    },
    /// The YAML config could not be parsed.
    YamlParse {
        /// The YAML file.
        path: PathBuf,
        /// Message from the YAML parser.
        message: String,
    },
    /// The YAML document is not a mapping at the top level.
    NotAMapping {
        /// The YAML file.
        path: PathBuf,
    },
    /// The YAML document has no `app_settings_defaults` mapping.
    MissingDefaultsSection {
        /// The YAML file.
        path: PathBuf,
    },
    /// Required setting keys have no declared default.
    MissingDefaults {
        /// Display name of the defaults source (`.env.example`, ...).
        source: String,
        /// Every missing key, sorted.
        keys: Vec<String>,
    },
    /// The admin template lacks the startup config display block.
    MissingTemplateMarker {
        /// The template file.
        path: PathBuf,
    },
}

impl std::fmt::Display for SyncError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(e) => write!(f, "invalid configuration: {e}"),
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::MissingEquals { path, line } => {
                write!(f, "{} line {line} is missing '='", path.display())
            }
            Self::EmptyKey { path, line } => {
                write!(f, "{} line {line} has an empty key", path.display())
            }
            Self::YamlParse { path, message } => {
                write!(f, "failed to parse {}: {message}", path.display())
            }
            Self::NotAMapping { path } => {
                write!(f, "{} top level must be a mapping", path.display())
            }
            Self::MissingDefaultsSection { path } => write!(
                f,
                "{} is missing the app_settings_defaults mapping",
                path.display()
            ),
            Self::MissingDefaults { source, keys } => write!(
                f,
                "{source} is missing app_settings_defaults entries: {}",
                keys.join(", ")
            ),
            Self::MissingTemplateMarker { path } => write!(
                f,
                "{} is missing the StartupConfigKeys display block",
                path.display()
            ),
        }
    }
}

impl std::error::Error for SyncError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
            Self::MissingEquals { .. }
            | Self::EmptyKey { .. }
            | Self::YamlParse { .. }
            | Self::NotAMapping { .. }
            | Self::MissingDefaultsSection { .. }
            | Self::MissingDefaults { .. }
            | Self::MissingTemplateMarker { .. } => None,
        }
    }
}

impl From<ConfigError> for SyncError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

/// Read a whole input file, attaching its path to any failure.
pub(crate) fn read_input(path: &std::path::Path) -> Result<String, SyncError> {
    std::fs::read_to_string(path).map_err(|source| SyncError::Io {
        path: path.to_path_buf(),
        source,
    })
}
