//! keystroke-driver library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does the driver do? (for beginners)
//!
//! Given a string, the driver types it into whatever window has keyboard
//! focus, exactly as if a user were pressing the keys:
//!
//! 1. Each character is looked up in the `keystroke-core` table to find its
//!    key and, for shifted characters, the Shift modifier.
//! 2. The modifier is held, the key is pressed and released, the modifier is
//!    released.
//! 3. The driver waits for the configured inter-key delay and moves on.
//!
//! The OS call at the bottom (`SendInput` on Windows, XTest on Linux) sits
//! behind the `PlatformKeyInjector` trait so the sequencing logic can be
//! tested without touching the real input stream.

/// Application layer: the keyboard driver.
pub mod application;

/// Infrastructure layer: OS injectors and configuration storage.
pub mod infrastructure;
