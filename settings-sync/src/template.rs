//! Admin settings template scan.
//!
//! The template must render the startup config keys block. Its presence is
//! detected by the literal `StartupConfigKeys` token; no HTML is parsed.

use std::path::Path;

use crate::error::{SyncError, read_input};

/// Token the settings template must contain.
pub const TEMPLATE_MARKER: &str = "StartupConfigKeys";

/// Whether template text references the startup config keys block.
#[must_use]
pub fn has_template_marker(template: &str) -> bool {
    template.contains(TEMPLATE_MARKER)
}

/// Read the template at `path` and require the marker token.
pub fn check_template_marker(path: &Path) -> Result<(), SyncError> {
    let template = read_input(path)?;
    if has_template_marker(&template) {
        Ok(())
    } else {
        Err(SyncError::MissingTemplateMarker {
            path: path.to_path_buf(),
        })
    }
}
