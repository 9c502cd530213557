// Keeps the startup settings of the Realms web app in sync across three files:
//
//  - `internal/store/app_settings.go` declares the setting keys
//  - `.env.example` / `config.example.yaml` declare their defaults
//  - `internal/admin/templates/settings.html` shows the startup config keys
//
// Life of a run:
// 1. Extract `Setting*` keys from the Go source
// 2. Keep the keys that must have defaults
// 3. Compare against the defaults source(s)
// 4. Look for the template marker
// 5. Report OK, or the first error

pub mod check;
pub mod config;
pub mod defaults;
pub mod error;
pub mod setting_keys;
pub mod template;
#[cfg(test)]
mod testing;

pub use check::{CheckReport, run};
pub use config::{CheckConfig, DefaultsMode};
pub use error::SyncError;
