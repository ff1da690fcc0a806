// ZeroDecay - platform/config.rs
//
// Platform-specific config directory resolution and config.toml loading with
// startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.

use crate::util::constants;
use crate::util::error::ConfigError;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for ZeroDecay configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/zerodecay/ or %APPDATA%\ZeroDecay\config\)
    pub config_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to the current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            tracing::debug!(config = %config_dir.display(), "Platform paths resolved");
            Self { config_dir }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            Self {
                config_dir: PathBuf::from("."),
            }
        }
    }

    /// Location of config.toml inside `config_dir`.
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(constants::CONFIG_FILE_NAME)
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored so a newer config file still loads in an
/// older binary.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[monitoring]` section.
    pub monitoring: MonitoringSection,
    /// `[log]` section.
    pub log: LogSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme: "dark" or "light".
    pub theme: Option<String>,
}

/// `[monitoring]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct MonitoringSection {
    /// Gap between cards, both axes.
    pub card_spacing: Option<f32>,
    /// Margin around the card flow.
    pub panel_margin: Option<f32>,
    /// Show the per-card action buttons.
    pub show_action_buttons: Option<bool>,
}

/// `[log]` config section (the Log tab).
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LogSection {
    /// Lines retained before the oldest are dropped.
    pub max_lines: Option<usize>,
}

/// `[logging]` config section (console output).
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// Invalid values produce actionable warnings and fall back to defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    // -- UI --
    /// Dark mode (true) or light mode (false).
    pub dark_mode: bool,

    // -- Monitoring --
    pub card_spacing: f32,
    pub panel_margin: f32,
    pub show_action_buttons: bool,

    // -- Log tab --
    pub log_max_lines: usize,

    // -- Logging --
    /// Console logging level (for init before tracing is available).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dark_mode: true,
            card_spacing: constants::DEFAULT_CARD_SPACING,
            panel_margin: constants::DEFAULT_PANEL_MARGIN,
            show_action_buttons: true,
            log_max_lines: constants::DEFAULT_LOG_MAX_LINES,
            log_level: None,
        }
    }
}

/// Read and parse `path` without validating values.
pub fn read_raw_config(path: &Path) -> Result<RawConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::TomlParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal warnings.
/// If the file does not exist, returns defaults with no warnings (first run).
/// If the file is unreadable or unparseable, returns defaults with a warning;
/// the application still starts.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);
    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        tracing::debug!(path = %config_path.display(), "No config.toml found; using defaults");
        return (AppConfig::default(), warnings);
    }

    let raw = match read_raw_config(&config_path) {
        Ok(raw) => raw,
        Err(e) => {
            let msg = format!("{e}. Using defaults.");
            tracing::warn!("{}", msg);
            warnings.push(msg);
            return (AppConfig::default(), warnings);
        }
    };

    tracing::info!(path = %config_path.display(), "Loaded config.toml");

    let config = validate(raw, &mut warnings);

    if !warnings.is_empty() {
        tracing::warn!(
            count = warnings.len(),
            "Config validation produced warnings"
        );
    }

    (config, warnings)
}

/// Apply every valid value in `raw` over the defaults, accumulating a
/// warning for each rejected one.
pub fn validate(raw: RawConfig, warnings: &mut Vec<String>) -> AppConfig {
    let mut config = AppConfig::default();

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.dark_mode = true,
            "light" => config.dark_mode = false,
            other => warnings.push(format!(
                "[ui] theme = \"{other}\" is not recognised. Expected \"dark\" or \"light\". Using default (dark).",
            )),
        }
    }

    // -- Monitoring: gaps --
    if let Some(spacing) = raw.monitoring.card_spacing {
        match check_gap("[monitoring] card_spacing", spacing) {
            Ok(v) => config.card_spacing = v,
            Err(e) => warnings.push(format!(
                "{e}. Using default ({}).",
                constants::DEFAULT_CARD_SPACING
            )),
        }
    }
    if let Some(margin) = raw.monitoring.panel_margin {
        match check_gap("[monitoring] panel_margin", margin) {
            Ok(v) => config.panel_margin = v,
            Err(e) => warnings.push(format!(
                "{e}. Using default ({}).",
                constants::DEFAULT_PANEL_MARGIN
            )),
        }
    }
    if let Some(show) = raw.monitoring.show_action_buttons {
        config.show_action_buttons = show;
    }

    // -- Log tab: max_lines --
    if let Some(lines) = raw.log.max_lines {
        if (constants::MIN_LOG_MAX_LINES..=constants::ABSOLUTE_MAX_LOG_LINES).contains(&lines) {
            config.log_max_lines = lines;
        } else {
            let e = ConfigError::ValueOutOfRange {
                field: "[log] max_lines".to_string(),
                value: lines.to_string(),
                expected: format!(
                    "{}-{}",
                    constants::MIN_LOG_MAX_LINES,
                    constants::ABSOLUTE_MAX_LOG_LINES
                ),
            };
            warnings.push(format!(
                "{e}. Using default ({}).",
                constants::DEFAULT_LOG_MAX_LINES
            ));
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.to_lowercase());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    config
}

fn check_gap(field: &str, value: f32) -> Result<f32, ConfigError> {
    if (0.0..=constants::MAX_LAYOUT_GAP).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::ValueOutOfRange {
            field: field.to_string(),
            value: value.to_string(),
            expected: format!("0-{}", constants::MAX_LAYOUT_GAP),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(dir: &Path, body: &str) {
        fs::write(dir.join(constants::CONFIG_FILE_NAME), body).unwrap();
    }

    #[test]
    fn test_missing_file_gives_defaults_without_warnings() {
        let dir = tempfile::tempdir().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_valid_values_applied() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
[ui]
theme = "Light"

[monitoring]
card_spacing = 6.0
panel_margin = 0.0
show_action_buttons = false

[log]
max_lines = 250

[logging]
level = "DEBUG"
"#,
        );
        let (config, warnings) = load_config(dir.path());
        assert!(warnings.is_empty(), "{warnings:?}");
        assert!(!config.dark_mode);
        assert_eq!(config.card_spacing, 6.0);
        assert_eq!(config.panel_margin, 0.0);
        assert!(!config.show_action_buttons);
        assert_eq!(config.log_max_lines, 250);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn test_out_of_range_values_fall_back_with_warnings() {
        let dir = tempfile::tempdir().unwrap();
        write_config(
            dir.path(),
            r#"
[ui]
theme = "sepia"

[monitoring]
card_spacing = 500.0
panel_margin = -1.0

[log]
max_lines = 5

[logging]
level = "loud"
"#,
        );
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 5, "{warnings:?}");
        assert!(warnings.iter().any(|w| w.contains("card_spacing")));
        assert!(warnings.iter().any(|w| w.contains("[log] max_lines")));
    }

    #[test]
    fn test_unparseable_file_gives_defaults_with_warning() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[monitoring\ncard_spacing = ");
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config, AppConfig::default());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Config parse error"));
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "[future]\nfeature = true\n[ui]\nshiny = 1\n");
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config, AppConfig::default());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_read_raw_config_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_raw_config(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
