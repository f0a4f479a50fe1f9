//! TOML-based configuration for the `keystroke` binary.
//!
//! Reads `AppConfig` from an explicit path or from the platform-appropriate
//! config file:
//! - Windows:  `%APPDATA%\Keystroke\config.toml`
//! - Linux:    `~/.config/keystroke/config.toml`
//! - macOS:    `~/Library/Application Support/Keystroke/config.toml`
//!
//! Example:
//!
//! ```toml
//! [keyboard]
//! inter_key_delay_ms = 25
//! command_delay_ms = 800
//! start_delay_ms = 2000
//!
//! [logging]
//! log_level = "debug"
//! ```
//!
//! Every field has a default, so a missing file, a missing table, or a
//! missing key all fall back to the values below.

use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::keyboard::{KeyboardConfig, DEFAULT_INTER_KEY_DELAY_MS};

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level configuration stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub keyboard: KeyboardSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Typing cadence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyboardSettings {
    /// Pause after each typed character, in milliseconds.
    #[serde(default = "default_inter_key_delay_ms")]
    pub inter_key_delay_ms: u64,
    /// Pause after each complete command, in milliseconds.
    #[serde(default)]
    pub command_delay_ms: u64,
    /// Pause before the first keystroke, giving the user time to focus the
    /// target window.
    #[serde(default = "default_start_delay_ms")]
    pub start_delay_ms: u64,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingSettings {
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl KeyboardSettings {
    /// Converts the on-disk settings to the driver's timing config.
    pub fn to_keyboard_config(&self) -> KeyboardConfig {
        KeyboardConfig {
            inter_key_delay: Duration::from_millis(self.inter_key_delay_ms),
            command_delay: Duration::from_millis(self.command_delay_ms),
        }
    }

    pub fn start_delay(&self) -> Duration {
        Duration::from_millis(self.start_delay_ms)
    }
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_inter_key_delay_ms() -> u64 {
    DEFAULT_INTER_KEY_DELAY_MS
}
fn default_start_delay_ms() -> u64 {
    2000
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for KeyboardSettings {
    fn default() -> Self {
        Self {
            inter_key_delay_ms: default_inter_key_delay_ms(),
            command_delay_ms: 0,
            start_delay_ms: default_start_delay_ms(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Resolves the full path to the platform config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    platform_config_dir()
        .map(|dir| dir.join("config.toml"))
        .ok_or(ConfigError::NoPlatformConfigDir)
}

/// Loads `AppConfig` from the platform config file, returning
/// `AppConfig::default()` if the file does not yet exist.
///
/// # Errors
///
/// See [`load_config_from`]; additionally [`ConfigError::NoPlatformConfigDir`].
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&config_file_path()?)
}

/// Loads `AppConfig` from `path`, returning `AppConfig::default()` if the file
/// does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(source) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Loads `AppConfig` from a file the user named explicitly.
///
/// Unlike [`load_config_from`], a missing file is an error: a mistyped path
/// must not silently fall back to the defaults.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] if the file cannot be read (including "not
/// found"), and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_existing_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

/// Resolves the platform config directory for this application.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("Keystroke"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("keystroke"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("Keystroke")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_dir() -> PathBuf {
        std::env::temp_dir().join(format!("keystroke_test_{}", Uuid::new_v4()))
    }

    // ── Defaults ──────────────────────────────────────────────────────────────

    #[test]
    fn test_app_config_default_keyboard_timings() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.keyboard.inter_key_delay_ms, 25);
        assert_eq!(cfg.keyboard.command_delay_ms, 0);
        assert_eq!(cfg.keyboard.start_delay_ms, 2000);
    }

    #[test]
    fn test_logging_default_level_is_info() {
        assert_eq!(LoggingSettings::default().log_level, "info");
    }

    #[test]
    fn test_keyboard_settings_convert_to_driver_config() {
        // Arrange
        let settings = KeyboardSettings {
            inter_key_delay_ms: 40,
            command_delay_ms: 800,
            start_delay_ms: 0,
        };

        // Act
        let cfg = settings.to_keyboard_config();

        // Assert
        assert_eq!(cfg.inter_key_delay, Duration::from_millis(40));
        assert_eq!(cfg.command_delay, Duration::from_millis(800));
        assert_eq!(settings.start_delay(), Duration::ZERO);
    }

    #[test]
    fn test_default_settings_match_default_driver_config() {
        assert_eq!(
            KeyboardSettings::default().to_keyboard_config(),
            KeyboardConfig::default()
        );
    }

    // ── Parsing ───────────────────────────────────────────────────────────────

    #[test]
    fn test_empty_toml_uses_defaults() {
        let cfg: AppConfig = toml::from_str("").expect("deserialize empty");
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_partial_keyboard_table_overrides_defaults() {
        // Arrange
        let toml_str = r#"
[keyboard]
inter_key_delay_ms = 5
"#;

        // Act
        let cfg: AppConfig = toml::from_str(toml_str).expect("deserialize partial");

        // Assert
        assert_eq!(cfg.keyboard.inter_key_delay_ms, 5);
        // Unspecified fields keep their defaults
        assert_eq!(cfg.keyboard.start_delay_ms, 2000);
        assert_eq!(cfg.logging.log_level, "info");
    }

    #[test]
    fn test_invalid_toml_returns_parse_error() {
        // Arrange
        let dir = temp_dir();
        let path = dir.join("config.toml");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "[[[ not valid toml").unwrap();

        // Act
        let result = load_config_from(&path);

        // Assert
        assert!(matches!(result, Err(ConfigError::Parse(_))));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_wrong_value_type_returns_parse_error() {
        let result: Result<AppConfig, _> = toml::from_str("[keyboard]\ninter_key_delay_ms = \"fast\"");
        assert!(result.is_err());
    }

    // ── Loading ───────────────────────────────────────────────────────────────

    #[test]
    fn test_load_config_from_missing_file_returns_default() {
        let path = temp_dir().join("config.toml");

        let cfg = load_config_from(&path).expect("missing file is not an error");

        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn test_load_config_from_reads_written_file_via_temp_dir() {
        // Arrange
        let dir = temp_dir();
        let path = dir.join("config.toml");
        let mut cfg = AppConfig::default();
        cfg.keyboard.inter_key_delay_ms = 12;
        cfg.keyboard.command_delay_ms = 800;
        cfg.logging.log_level = "debug".to_string();
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, toml::to_string_pretty(&cfg).unwrap()).unwrap();

        // Act
        let loaded = load_config_from(&path).expect("load");
        let strict = load_existing_config(&path).expect("load existing");

        // Assert
        assert_eq!(loaded, cfg);
        assert_eq!(strict, cfg);

        // Cleanup
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_existing_config_missing_file_is_io_error() {
        let path = temp_dir().join("config.toml");

        let result = load_existing_config(&path);

        assert!(matches!(
            result,
            Err(ConfigError::Io { ref source, .. }) if source.kind() == std::io::ErrorKind::NotFound
        ));
    }

    #[test]
    fn test_load_existing_config_invalid_toml_is_parse_error() {
        let dir = temp_dir();
        let path = dir.join("config.toml");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "keyboard = 3\n[keyboard]").unwrap();

        assert!(matches!(
            load_existing_config(&path),
            Err(ConfigError::Parse(_))
        ));
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_load_config_from_directory_is_io_error() {
        let dir = temp_dir();
        std::fs::create_dir_all(&dir).unwrap();

        let result = load_config_from(&dir);

        assert!(matches!(result, Err(ConfigError::Io { .. })));
        std::fs::remove_dir_all(&dir).ok();
    }

    // ── Paths ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_config_file_path_ends_with_config_toml() {
        if let Ok(path) = config_file_path() {
            assert!(
                path.ends_with("config.toml"),
                "config file must be named config.toml, got {path:?}"
            );
            let parent = path.parent().and_then(Path::file_name).unwrap();
            assert!(parent.eq_ignore_ascii_case("keystroke"));
        }
        // NoPlatformConfigDir (e.g. in a stripped CI env) is also acceptable.
    }
}
