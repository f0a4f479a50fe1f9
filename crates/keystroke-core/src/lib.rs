//! # keystroke-core
//!
//! Key identifiers and the character-to-key table used to synthesise
//! keyboard input.  This crate has no dependencies on OS APIs; the injectors
//! that talk to the operating system live in `keystroke-driver`.
//!
//! # Overview (for beginners)
//!
//! Typing the character `$` on a US keyboard means holding Shift, tapping the
//! 4 key, and releasing Shift.  This crate answers the first half of that
//! problem: which keys does a character need?
//!
//! - **`keymap::key_code`** – [`KeyCode`], a key addressed either by hardware
//!   scan code or by OS virtual key.
//! - **`keymap::symbols`** – the lookup table from a printable ASCII character
//!   to its [`KeySequence`] (a primary key plus an optional modifier).
//! - **`keymap::native`** – the exact arguments handed to the native
//!   injection call for one press or release.

pub mod keymap;

pub use keymap::symbols::{lookup, symbols};
pub use keymap::{KeyCode, KeyDirection, KeyKind, KeySequence, KeymapError, NativeKeyEvent};
