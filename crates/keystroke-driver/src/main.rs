//! `keystroke`: types its arguments into the focused window.
//!
//! # Architecture
//!
//! ```text
//! main()
//!  └─ Args::parse()              -- command line
//!  └─ Args::app_config()         -- TOML settings, defaults if absent
//!  └─ tracing subscriber         -- RUST_LOG, else configured level
//!  └─ Args::timings()            -- flags override configured delays
//!  └─ injector                   -- platform injector, or recording (--dry-run)
//!  └─ Keyboard::type_text()      -- after the start delay
//! ```
//!
//! The start delay exists because the terminal running `keystroke` has focus
//! when it starts; the user needs a moment to switch to the target window.
//! Dry runs touch no window and skip it.

use std::{path::PathBuf, sync::Arc, thread, time::Duration};

use anyhow::Context;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use keystroke_core::KeyCode;
use keystroke_driver::application::keyboard::{Keyboard, KeyboardConfig, PlatformKeyInjector};
use keystroke_driver::infrastructure::{
    key_injection::{default_injector, recording::RecordingKeyInjector},
    storage::config::{
        load_config, load_existing_config, AppConfig, ConfigError, KeyboardSettings,
    },
};

/// Type text as synthetic keyboard input.
#[derive(Debug, Parser)]
#[command(name = "keystroke", version, about)]
struct Args {
    /// Text to type.  Multiple arguments are joined with single spaces.
    #[arg(required = true)]
    text: Vec<String>,

    /// Path to a TOML config file (default: platform config directory).
    #[arg(long, env = "KEYSTROKE_CONFIG")]
    config: Option<PathBuf>,

    /// Pause between characters in milliseconds (overrides the config file).
    #[arg(long, env = "KEYSTROKE_DELAY_MS")]
    delay: Option<u64>,

    /// Pause before typing in milliseconds (overrides the config file).
    #[arg(long)]
    start_delay: Option<u64>,

    /// Tap Enter after the text.
    #[arg(long)]
    enter: bool,

    /// Record the key events and log them instead of injecting them.
    #[arg(long)]
    dry_run: bool,
}

impl Args {
    /// The text to type: all positional arguments joined by single spaces.
    fn text(&self) -> String {
        self.text.join(" ")
    }

    /// Loads the config file.
    ///
    /// An explicit `--config` path must exist.  The implicit platform path
    /// falls back to defaults when the file or the directory is missing.
    fn app_config(&self) -> anyhow::Result<AppConfig> {
        match &self.config {
            Some(path) => load_existing_config(path)
                .with_context(|| format!("loading config from {}", path.display())),
            None => match load_config() {
                Ok(cfg) => Ok(cfg),
                Err(ConfigError::NoPlatformConfigDir) => Ok(AppConfig::default()),
                Err(e) => Err(anyhow::Error::new(e).context("loading config")),
            },
        }
    }

    /// Resolves the driver timings and the start delay, command-line
    /// overrides taking precedence over `settings`.
    fn timings(&self, settings: &KeyboardSettings) -> (KeyboardConfig, Duration) {
        let mut keyboard = settings.to_keyboard_config();
        if let Some(ms) = self.delay {
            keyboard.inter_key_delay = Duration::from_millis(ms);
        }

        let start_delay = if self.dry_run {
            Duration::ZERO
        } else {
            self.start_delay
                .map(Duration::from_millis)
                .unwrap_or_else(|| settings.start_delay())
        };
        (keyboard, start_delay)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let config = args.app_config()?;

    // Initialise structured logging.  Level is overridden by `RUST_LOG`.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level)),
        )
        .init();

    let (keyboard_config, start_delay) = args.timings(&config.keyboard);

    let recorder = args.dry_run.then(|| Arc::new(RecordingKeyInjector::new()));
    let injector: Arc<dyn PlatformKeyInjector> = match &recorder {
        Some(recorder) => Arc::clone(recorder) as Arc<dyn PlatformKeyInjector>,
        None => default_injector().context("opening the platform key injector")?,
    };
    let keyboard = Keyboard::new(injector, keyboard_config);

    let text = args.text();
    info!(
        chars = text.chars().count(),
        ?start_delay,
        inter_key_delay = ?keyboard.inter_key_delay(),
        dry_run = args.dry_run,
        "focus the target window; typing starts after the start delay"
    );
    thread::sleep(start_delay);

    let summary = keyboard.type_text(&text);
    if args.enter {
        keyboard.tap(KeyCode::ENTER);
    }

    if summary.is_complete() {
        info!(typed = summary.typed, "done");
    } else {
        warn!(
            typed = summary.typed,
            skipped = ?summary.skipped,
            "done; some characters have no key mapping"
        );
    }

    if let Some(recorder) = recorder {
        for event in recorder.events() {
            info!(key = %event.key, direction = ?event.direction, "dry run");
        }
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> Args {
        Args::try_parse_from(argv).expect("valid arguments")
    }

    fn settings() -> KeyboardSettings {
        KeyboardSettings {
            inter_key_delay_ms: 40,
            command_delay_ms: 800,
            start_delay_ms: 1500,
        }
    }

    // ── Parsing ───────────────────────────────────────────────────────────────

    #[test]
    fn test_cli_requires_text() {
        assert!(Args::try_parse_from(["keystroke"]).is_err());
    }

    #[test]
    fn test_cli_joins_text_arguments_with_single_spaces() {
        let args = parse(&["keystroke", "a", "b"]);
        assert_eq!(args.text(), "a b");
    }

    #[test]
    fn test_cli_single_quoted_argument_is_kept_verbatim() {
        let args = parse(&["keystroke", "Hello,  World!"]);
        assert_eq!(args.text(), "Hello,  World!");
    }

    #[test]
    fn test_cli_flags_default_to_off() {
        let args = parse(&["keystroke", "x"]);
        assert!(!args.enter);
        assert!(!args.dry_run);
        assert_eq!(args.start_delay, None);
    }

    #[test]
    fn test_cli_enter_and_dry_run_flags() {
        let args = parse(&["keystroke", "--enter", "--dry-run", "x"]);
        assert!(args.enter);
        assert!(args.dry_run);
    }

    #[test]
    fn test_cli_rejects_non_numeric_delay() {
        assert!(Args::try_parse_from(["keystroke", "--delay", "fast", "x"]).is_err());
    }

    // ── Timing resolution ─────────────────────────────────────────────────────

    #[test]
    fn test_delay_flag_overrides_configured_inter_key_delay() {
        // Arrange
        let args = parse(&["keystroke", "--delay", "5", "x"]);

        // Act
        let (keyboard, _) = args.timings(&settings());

        // Assert
        assert_eq!(keyboard.inter_key_delay, Duration::from_millis(5));
        assert_eq!(keyboard.command_delay, Duration::from_millis(800));
    }

    #[test]
    fn test_start_delay_flag_overrides_configured_start_delay() {
        let args = parse(&["keystroke", "--start-delay", "0", "x"]);

        let (_, start_delay) = args.timings(&settings());

        assert_eq!(start_delay, Duration::ZERO);
    }

    #[test]
    fn test_configured_start_delay_used_without_flag() {
        let args = parse(&["keystroke", "x"]);

        let (_, start_delay) = args.timings(&settings());

        assert_eq!(start_delay, Duration::from_millis(1500));
    }

    #[test]
    fn test_dry_run_skips_start_delay() {
        let args = parse(&["keystroke", "--dry-run", "--start-delay", "3000", "x"]);

        let (_, start_delay) = args.timings(&settings());

        assert_eq!(start_delay, Duration::ZERO);
    }

    // ── Config loading ────────────────────────────────────────────────────────

    #[test]
    fn test_explicit_missing_config_path_is_an_error() {
        // Arrange
        let path = std::env::temp_dir()
            .join("keystroke_missing_config_dir")
            .join("no_such_config.toml");
        let args = parse(&["keystroke", "--config", path.to_str().unwrap(), "x"]);

        // Act
        let result = args.app_config();

        // Assert
        assert!(result.is_err(), "a mistyped --config path must not fall back to defaults");
    }

    #[test]
    fn test_explicit_config_path_is_loaded() {
        // Arrange
        let dir = std::env::temp_dir().join(format!("keystroke_cli_{}", std::process::id()));
        let path = dir.join("config.toml");
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(&path, "[keyboard]\ninter_key_delay_ms = 7\n").unwrap();
        let args = parse(&["keystroke", "--config", path.to_str().unwrap(), "x"]);

        // Act
        let config = args.app_config().unwrap();

        // Assert
        assert_eq!(config.keyboard.inter_key_delay_ms, 7);
        std::fs::remove_dir_all(&dir).ok();
    }
}
