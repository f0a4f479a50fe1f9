//! Key identifiers and the character lookup table.
//!
//! Keys are addressed either by scan code or by virtual key; see
//! [`key_code`] for the distinction.  Named keys are associated constants on
//! [`KeyCode`] (`KeyCode::A`, `KeyCode::SHIFT`, `KeyCode::F13`, ...).

pub mod key_code;
pub mod native;
pub mod scan_code;
pub mod symbols;
pub mod virtual_key;
pub mod x11_keysym;

use thiserror::Error;

pub use key_code::{KeyCode, KeyKind, LEGACY_VIRTUAL_KEY_OFFSET};
pub use native::{KeyDirection, NativeKeyEvent};
pub use symbols::KeySequence;

/// Error type for key table and argument derivation operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeymapError {
    #[error("key code {0} does not fit the native event fields")]
    CodeOutOfRange(KeyCode),
}
