//! Keyboard: turns keys and characters into press/release sequences.
//!
//! This use case sits at the application layer and delegates every event to a
//! [`PlatformKeyInjector`] trait object.  The platform-specific injectors are
//! in the infrastructure layer.
//!
//! # Failure policy
//!
//! | Operation    | Unmapped char        | Platform failure          |
//! |--------------|----------------------|---------------------------|
//! | `press`      | -                    | returned                  |
//! | `release`    | -                    | returned                  |
//! | `tap`        | -                    | logged, swallowed         |
//! | `simulate`   | `SymbolNotFound`     | logged, swallowed         |
//! | `type_text`  | logged, char skipped | logged, swallowed         |
//! | `chord`      | -                    | returned (modifier only)  |
//!
//! Nothing is retried.

use std::{sync::Arc, thread, time::Duration};

use keystroke_core::{lookup, KeyCode, KeymapError};
use thiserror::Error;
use tracing::{debug, warn};

/// Pause between characters when the caller does not configure one.
pub const DEFAULT_INTER_KEY_DELAY_MS: u64 = 25;

/// Error type for keyboard input operations.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("symbol not found: {0:?}")]
    SymbolNotFound(char),
    #[error("platform error: {0}")]
    Platform(String),
    #[error("unsupported key: {0}")]
    UnsupportedKey(KeyCode),
}

impl From<KeymapError> for InputError {
    fn from(err: KeymapError) -> Self {
        match err {
            KeymapError::CodeOutOfRange(key) => Self::UnsupportedKey(key),
        }
    }
}

/// Platform-agnostic key injection trait.
///
/// Each supported OS provides an implementation in the infrastructure layer.
#[cfg_attr(test, mockall::automock)]
pub trait PlatformKeyInjector: Send + Sync {
    /// Injects a key-down event.
    fn emit_key_down(&self, key: KeyCode) -> Result<(), InputError>;

    /// Injects a key-up event.
    fn emit_key_up(&self, key: KeyCode) -> Result<(), InputError>;
}

/// Timing settings for a [`Keyboard`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardConfig {
    /// Pause after every character typed by [`Keyboard::type_text`].
    pub inter_key_delay: Duration,
    /// Pause after a complete command ([`Keyboard::type_text`],
    /// [`Keyboard::chord`]) so the focused application can react.
    pub command_delay: Duration,
}

impl KeyboardConfig {
    /// Default timings with the given inter-key delay.
    pub fn with_inter_key_delay_ms(ms: u64) -> Self {
        Self {
            inter_key_delay: Duration::from_millis(ms),
            ..Self::default()
        }
    }
}

impl Default for KeyboardConfig {
    fn default() -> Self {
        Self {
            inter_key_delay: Duration::from_millis(DEFAULT_INTER_KEY_DELAY_MS),
            command_delay: Duration::ZERO,
        }
    }
}

/// Outcome of [`Keyboard::type_text`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypingSummary {
    /// Characters found in the table.  Platform failures while sending them
    /// are best-effort and do not reduce this count.
    pub typed: usize,
    /// Characters that had no table entry, in input order.
    pub skipped: Vec<char>,
}

impl TypingSummary {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// The keyboard driver.
///
/// Stateless apart from its timing configuration; every call is independent.
/// Calls block the current thread, including the configured delays.
pub struct Keyboard {
    injector: Arc<dyn PlatformKeyInjector>,
    config: KeyboardConfig,
}

impl Keyboard {
    /// Creates a keyboard that injects through `injector`.
    pub fn new(injector: Arc<dyn PlatformKeyInjector>, config: KeyboardConfig) -> Self {
        Self { injector, config }
    }

    pub fn config(&self) -> KeyboardConfig {
        self.config
    }

    pub fn inter_key_delay(&self) -> Duration {
        self.config.inter_key_delay
    }

    pub fn set_inter_key_delay(&mut self, delay: Duration) {
        self.config.inter_key_delay = delay;
    }

    pub fn command_delay(&self) -> Duration {
        self.config.command_delay
    }

    pub fn set_command_delay(&mut self, delay: Duration) {
        self.config.command_delay = delay;
    }

    /// Presses `key` and leaves it down.
    ///
    /// # Errors
    ///
    /// Returns the injector's error if the platform call fails.
    pub fn press(&self, key: KeyCode) -> Result<(), InputError> {
        debug!(%key, "key down");
        self.injector.emit_key_down(key)
    }

    /// Releases `key`.
    ///
    /// # Errors
    ///
    /// Returns the injector's error if the platform call fails.
    pub fn release(&self, key: KeyCode) -> Result<(), InputError> {
        debug!(%key, "key up");
        self.injector.emit_key_up(key)
    }

    /// Presses and immediately releases `key`.
    ///
    /// Best-effort: the release is sent even if the press failed, and
    /// failures are logged rather than returned.
    pub fn tap(&self, key: KeyCode) {
        if let Err(e) = self.press(key) {
            warn!(%key, "tap: key down failed: {e}");
        }
        if let Err(e) = self.release(key) {
            warn!(%key, "tap: key up failed: {e}");
        }
    }

    /// Types a single character.
    ///
    /// For shifted characters the modifier is held around the tap of the
    /// primary key: modifier down, primary down, primary up, modifier up.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::SymbolNotFound`] if `c` has no table entry; no
    /// event is injected in that case.
    pub fn simulate(&self, c: char) -> Result<(), InputError> {
        let seq = lookup(c).ok_or(InputError::SymbolNotFound(c))?;

        match seq.modifier {
            Some(modifier) => {
                if let Err(e) = self.press(modifier) {
                    warn!(%modifier, "modifier down failed for {c:?}: {e}");
                }
                self.tap(seq.primary);
                if let Err(e) = self.release(modifier) {
                    warn!(%modifier, "modifier up failed for {c:?}: {e}");
                }
            }
            None => self.tap(seq.primary),
        }
        Ok(())
    }

    /// Types `text` one character at a time.
    ///
    /// Unmapped characters are logged and skipped; the rest of the string is
    /// still typed.  The inter-key delay elapses after every character, then
    /// the command delay after the whole string.
    pub fn type_text(&self, text: &str) -> TypingSummary {
        let mut summary = TypingSummary::default();

        for c in text.chars() {
            match self.simulate(c) {
                Ok(()) => summary.typed += 1,
                Err(e) => {
                    warn!("{e}");
                    summary.skipped.push(c);
                }
            }
            thread::sleep(self.config.inter_key_delay);
        }

        debug!(
            typed = summary.typed,
            skipped = summary.skipped.len(),
            "finished typing"
        );
        self.pause_after_command();
        summary
    }

    /// Holds `modifier`, taps `key`, then releases `modifier` (e.g. Ctrl+S).
    ///
    /// # Errors
    ///
    /// Returns the error of the modifier press (nothing else is sent), or of
    /// the modifier release.
    pub fn chord(&self, modifier: KeyCode, key: KeyCode) -> Result<(), InputError> {
        self.press(modifier)?;
        self.tap(key);
        let released = self.release(modifier);
        self.pause_after_command();
        released
    }

    fn pause_after_command(&self) {
        if !self.config.command_delay.is_zero() {
            thread::sleep(self.config.command_delay);
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
