// ipscmon - platform/config.rs
//
// Platform directory resolution and config.toml loading with startup
// validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for ipscmon data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/ipscmon/).
    pub config_dir: PathBuf,

    /// Data directory for the persisted session.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be
    /// determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility — a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct RawConfig {
    /// `[loader]` section.
    loader: LoaderSection,
    /// `[ui]` section.
    ui: UiSection,
    /// `[export]` section.
    export: ExportSection,
    /// `[logging]` section.
    logging: LoggingSection,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct LoaderSection {
    skip_rows: Option<usize>,
    max_rows: Option<usize>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct UiSection {
    font_size: Option<f32>,
    gateway: Option<String>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct ExportSection {
    large_export_threshold: Option<usize>,
}

#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
struct LoggingSection {
    level: Option<String>,
}

/// Validated effective configuration (file values merged with defaults).
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub loader: LoaderConfigSection,
    pub ui: UiConfigSection,
    pub export: ExportConfigSection,
    pub logging: LoggingConfigSection,
}

#[derive(Debug, Clone)]
pub struct LoaderConfigSection {
    pub skip_rows: usize,
    pub max_rows: usize,
}

#[derive(Debug, Clone)]
pub struct UiConfigSection {
    pub font_size: f32,
    pub gateway: String,
}

#[derive(Debug, Clone)]
pub struct ExportConfigSection {
    pub large_export_threshold: usize,
}

#[derive(Debug, Clone)]
pub struct LoggingConfigSection {
    pub level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            loader: LoaderConfigSection {
                skip_rows: constants::DEFAULT_SKIP_ROWS,
                max_rows: constants::DEFAULT_MAX_ROWS,
            },
            ui: UiConfigSection {
                font_size: constants::DEFAULT_FONT_SIZE,
                gateway: constants::DEFAULT_GATEWAY.to_string(),
            },
            export: ExportConfigSection {
                large_export_threshold: constants::DEFAULT_LARGE_EXPORT_THRESHOLD,
            },
            logging: LoggingConfigSection { level: None },
        }
    }
}

/// Load and validate `config.toml` from the config directory.
///
/// A missing file yields the defaults; a malformed file or out-of-range
/// value is an error so misconfiguration is caught at startup rather than
/// silently ignored.
pub fn load_config(config_dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = config_dir.join(constants::CONFIG_FILE_NAME);
    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(AppConfig::default());
        }
        Err(e) => {
            return Err(ConfigError::Io {
                path,
                source: e,
            })
        }
    };

    let raw: RawConfig = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
        path: path.clone(),
        source: e,
    })?;

    validate(raw)
}

fn validate(raw: RawConfig) -> Result<AppConfig, ConfigError> {
    let mut config = AppConfig::default();

    if let Some(skip_rows) = raw.loader.skip_rows {
        if skip_rows > constants::MAX_SKIP_ROWS {
            return Err(out_of_range(
                "loader.skip_rows",
                skip_rows,
                format!("0..={}", constants::MAX_SKIP_ROWS),
            ));
        }
        config.loader.skip_rows = skip_rows;
    }

    if let Some(max_rows) = raw.loader.max_rows {
        if max_rows == 0 || max_rows > constants::ABSOLUTE_MAX_ROWS {
            return Err(out_of_range(
                "loader.max_rows",
                max_rows,
                format!("1..={}", constants::ABSOLUTE_MAX_ROWS),
            ));
        }
        config.loader.max_rows = max_rows;
    }

    if let Some(font_size) = raw.ui.font_size {
        if !(constants::MIN_FONT_SIZE..=constants::MAX_FONT_SIZE).contains(&font_size) {
            return Err(out_of_range(
                "ui.font_size",
                font_size,
                format!(
                    "{}..={}",
                    constants::MIN_FONT_SIZE,
                    constants::MAX_FONT_SIZE
                ),
            ));
        }
        config.ui.font_size = font_size;
    }

    if let Some(gateway) = raw.ui.gateway {
        config.ui.gateway = gateway;
    }

    if let Some(threshold) = raw.export.large_export_threshold {
        config.export.large_export_threshold = threshold;
    }

    config.logging.level = raw.logging.level;

    Ok(config)
}

fn out_of_range(field: &str, value: impl std::fmt::Display, expected: String) -> ConfigError {
    ConfigError::ValueOutOfRange {
        field: field.to_string(),
        value: value.to_string(),
        expected,
    }
}
