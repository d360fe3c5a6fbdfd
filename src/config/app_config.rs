use chrono::format::{Item, StrftimeItems};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::errors::{KeyProfileError, Result};

/// Current format version supported by this build of keyprofile.
pub const CURRENT_FORMAT_VERSION: u32 = 1;

/// User settings read from `config.toml`.
///
/// Every section is optional; a missing file means defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Format version for backward compatibility. Defaults to 1 if missing.
    pub format_version: u32,
    pub display: DisplaySection,
    pub log: LogSection,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            format_version: CURRENT_FORMAT_VERSION,
            display: DisplaySection::default(),
            log: LogSection::default(),
        }
    }
}

impl AppConfig {
    /// Load settings.
    ///
    /// An explicit path must exist. Without one, the per-user config file
    /// is read if present, otherwise defaults are used.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.exists() {
                    return Err(KeyProfileError::InvalidConfig {
                        detail: format!("config file not found: {}", path.display()),
                    });
                }
                path.to_path_buf()
            }
            None => match default_config_path() {
                Some(path) if path.exists() => path,
                _ => return Ok(Self::default()),
            },
        };

        let content = std::fs::read_to_string(&path)?;
        Self::parse(&content).map_err(|e| match e {
            KeyProfileError::InvalidConfig { detail } => KeyProfileError::InvalidConfig {
                detail: format!("{}: {detail}", path.display()),
            },
            other => other,
        })
    }

    /// Parse and validate settings from TOML text.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| KeyProfileError::InvalidConfig {
            detail: format!("failed to parse config: {e}"),
        })?;

        if config.format_version > CURRENT_FORMAT_VERSION {
            return Err(KeyProfileError::InvalidConfig {
                detail: format!(
                    "format_version {} is newer than the supported version {CURRENT_FORMAT_VERSION}",
                    config.format_version
                ),
            });
        }

        if let Some(level) = &config.log.level
            && !LOG_LEVELS.contains(&level.to_lowercase().as_str())
        {
            return Err(KeyProfileError::InvalidConfig {
                detail: format!(
                    "unknown log level '{level}' (expected one of: {})",
                    LOG_LEVELS.join(", ")
                ),
            });
        }

        if StrftimeItems::new(&config.display.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(KeyProfileError::InvalidConfig {
                detail: format!(
                    "invalid date_format '{}' (use strftime syntax, e.g. \"%Y-%m-%d\")",
                    config.display.date_format
                ),
            });
        }

        Ok(config)
    }
}

/// `<config_dir>/keyprofile/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("keyprofile").join("config.toml"))
}

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// The `[display]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplaySection {
    /// strftime pattern for creation and expiry dates.
    pub date_format: String,
    pub color: bool,
}

impl Default for DisplaySection {
    fn default() -> Self {
        Self {
            date_format: "%-d %B %Y".into(),
            color: true,
        }
    }
}

/// The `[log]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSection {
    pub level: Option<String>,
}
