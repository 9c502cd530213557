use std::path::Path;

use tempfile::TempDir;

use crate::config::{APP_SETTINGS_SOURCE, SETTINGS_TEMPLATE};

pub const APP_SETTINGS_GO: &str = r#"package store

const SettingEmailVerificationEnable = "email_verification_enable"

const (
	SettingFeatureDisableWebTokens = "feature_disable_web_tokens"
	SettingFeatureDisableModels    = "feature_disable_models"
)

const SettingSiteBaseURL = "site_base_url"

const SettingAdminTimeZone = "admin_time_zone"

const (
	SettingSMTPServer = "smtp_server"
)
"#;

pub const ENV_EXAMPLE: &str = "# Realms example environment
REALMS_ADDR=:8080

export REALMS_APP_SETTINGS_DEFAULTS_SITE_BASE_URL=
REALMS_APP_SETTINGS_DEFAULTS_ADMIN_TIME_ZONE=Asia/Shanghai
REALMS_APP_SETTINGS_DEFAULTS_FEATURE_DISABLE_WEB_TOKENS=false
REALMS_APP_SETTINGS_DEFAULTS_FEATURE_DISABLE_MODELS=false
";

pub const CONFIG_EXAMPLE_YAML: &str = "server:
  addr: \":8080\"
app_settings_defaults:
  site_base_url: \"\"
  admin_time_zone: Asia/Shanghai
  feature_disable_web_tokens: false
  feature_disable_models: false
";

pub const SETTINGS_HTML: &str = "<section>
  {{range .StartupConfigKeys}}<code>{{.}}</code>{{end}}
</section>
";

/// A throwaway repository laid out the way the checker expects.
pub struct FixtureRepo {
    dir: TempDir,
}

impl FixtureRepo {
    /// Create a repository where every check passes in every mode.
    pub fn consistent() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let repo = Self { dir };
        repo.write(APP_SETTINGS_SOURCE, APP_SETTINGS_GO);
        repo.write(SETTINGS_TEMPLATE, SETTINGS_HTML);
        repo.write(".env.example", ENV_EXAMPLE);
        repo.write("config.example.yaml", CONFIG_EXAMPLE_YAML);
        repo
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `contents` to `relative`, creating parent directories.
    pub fn write(&self, relative: &str, contents: &str) {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create fixture directory");
        }
        std::fs::write(path, contents).expect("write fixture file");
    }

    pub fn remove(&self, relative: &str) {
        std::fs::remove_file(self.dir.path().join(relative)).expect("remove fixture file");
    }
}
