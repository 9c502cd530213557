#![cfg_attr(test, allow(clippy::disallowed_methods))]
// Forbid unwrap() in production code; a CI gate must report, not panic.
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
use std::process::ExitCode;

use settings_sync::{CheckConfig, SyncError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> ExitCode {
    // Logs go to stderr so stdout only ever carries the OK line.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "settings_sync=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match check() {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::debug!("settings sync check failed: {e:?}");
            eprintln!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}

fn check() -> Result<String, SyncError> {
    let config = CheckConfig::from_env()?;
    tracing::info!(
        "Loaded configuration: repo_root={}, mode={}",
        config.repo_root.display(),
        config.mode.as_str()
    );
    let report = settings_sync::run(&config)?;
    tracing::debug!(
        "required keys: {}",
        report
            .required_keys
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    );
    tracing::debug!("{} setting keys declared in total", report.setting_keys.len());
    Ok(report.success_line())
}
