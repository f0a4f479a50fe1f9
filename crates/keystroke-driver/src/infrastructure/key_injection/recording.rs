//! Recording key injector for dry runs and tests.
//!
//! # Why a recording injector?
//!
//! The real injectors (`WindowsKeyInjector`, `XTestKeyInjector`) make OS API
//! calls that:
//!
//! - Require a desktop session to run.
//! - Actually press keys in whatever window has focus.
//! - Cannot be observed directly from Rust code.
//!
//! `RecordingKeyInjector` replaces the OS call with in-memory recording.  Each
//! event is pushed into a `Mutex<Vec<...>>` together with the instant it was
//! received, so callers can inspect exactly what was sent, in what order, and
//! how far apart.  The `keystroke` binary uses it for `--dry-run`.
//!
//! # `should_fail` flag
//!
//! Build with [`RecordingKeyInjector::failing`] to make every call return an
//! [`InputError::Platform`] without recording anything.

use std::{
    sync::{Mutex, PoisonError},
    time::Instant,
};

use keystroke_core::{KeyCode, KeyDirection};
use tracing::debug;

use crate::application::keyboard::{InputError, PlatformKeyInjector};

/// One injected event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordedKeyEvent {
    pub key: KeyCode,
    pub direction: KeyDirection,
    pub at: Instant,
}

/// An injector that records every event instead of calling the OS.
#[derive(Debug, Default)]
pub struct RecordingKeyInjector {
    events: Mutex<Vec<RecordedKeyEvent>>,
    should_fail: bool,
}

impl RecordingKeyInjector {
    /// Creates an injector with an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an injector whose every call fails.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// A snapshot of the events recorded so far.
    pub fn events(&self) -> Vec<RecordedKeyEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The recorded `(key, direction)` pairs without timestamps.
    pub fn key_sequence(&self) -> Vec<(KeyCode, KeyDirection)> {
        self.events()
            .into_iter()
            .map(|ev| (ev.key, ev.direction))
            .collect()
    }

    fn record(&self, key: KeyCode, direction: KeyDirection) -> Result<(), InputError> {
        if self.should_fail {
            return Err(InputError::Platform("recording injector set to fail".into()));
        }
        debug!(%key, ?direction, "recorded key event");
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(RecordedKeyEvent {
                key,
                direction,
                at: Instant::now(),
            });
        Ok(())
    }
}

impl PlatformKeyInjector for RecordingKeyInjector {
    fn emit_key_down(&self, key: KeyCode) -> Result<(), InputError> {
        self.record(key, KeyDirection::Down)
    }

    fn emit_key_up(&self, key: KeyCode) -> Result<(), InputError> {
        self.record(key, KeyDirection::Up)
    }
}
