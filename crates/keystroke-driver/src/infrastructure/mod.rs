//! Infrastructure layer for the driver.
//!
//! Contains OS-facing adapters and the configuration file.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `keystroke_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`key_injection`** – OS-specific implementations of `PlatformKeyInjector`.
//!   The correct implementation is selected at compile time using `#[cfg(target_os)]`.
//!   A `RecordingKeyInjector` is also provided for dry runs and tests.
//!
//! - **`storage`** – TOML configuration file for the `keystroke` binary.

pub mod key_injection;
pub mod storage;
