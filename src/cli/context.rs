use std::sync::OnceLock;

use crate::config::app_config::AppConfig;

static SETTINGS: OnceLock<AppConfig> = OnceLock::new();

/// Install the settings loaded at startup. Later calls are ignored.
pub fn init(config: AppConfig) {
    let _ = SETTINGS.set(config);
}

/// Current settings, or defaults if `init` was never called.
pub fn settings() -> &'static AppConfig {
    SETTINGS.get_or_init(AppConfig::default)
}
