//! Arguments of the native keyboard injection call.
//!
//! Windows injects a keyboard event from four values: a virtual-key byte, a
//! scan-code byte, a flag word and an extra-info pointer.  Both press and
//! release go through the same call; only the flags differ:
//!
//! | Flag                  | Value    | Set when                         |
//! |-----------------------|----------|----------------------------------|
//! | `KEYEVENTF_KEYUP`     | `0x0002` | the event is a release           |
//! | `KEYEVENTF_SCANCODE`  | `0x0008` | the key is addressed by scan code|
//!
//! The secondary byte is always the primary code plus `0x80`, truncated to a
//! byte.

use super::{key_code::KeyCode, KeymapError};

/// `KEYEVENTF_KEYUP`
pub const KEYEVENTF_KEYUP: u32 = 0x0002;
/// `KEYEVENTF_SCANCODE`
pub const KEYEVENTF_SCANCODE: u32 = 0x0008;

const SECONDARY_CODE_OFFSET: u8 = 0x80;

/// Whether an event presses or releases a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyDirection {
    Down,
    Up,
}

/// One call's worth of arguments for the native injection primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeKeyEvent {
    pub primary: u8,
    pub secondary: u8,
    pub flags: u32,
    pub extra_info: usize,
}

impl NativeKeyEvent {
    /// Derives the call arguments for pressing or releasing `key`.
    ///
    /// # Errors
    ///
    /// Returns [`KeymapError::CodeOutOfRange`] when the key value does not fit
    /// the byte-sized code fields.
    pub fn for_key(key: KeyCode, direction: KeyDirection) -> Result<Self, KeymapError> {
        let primary = u8::try_from(key.value()).map_err(|_| KeymapError::CodeOutOfRange(key))?;

        let mut flags = 0;
        if direction == KeyDirection::Up {
            flags |= KEYEVENTF_KEYUP;
        }
        if key.is_scan_code() {
            flags |= KEYEVENTF_SCANCODE;
        }

        Ok(Self {
            primary,
            secondary: primary.wrapping_add(SECONDARY_CODE_OFFSET),
            flags,
            extra_info: 0,
        })
    }

    pub fn is_release(&self) -> bool {
        self.flags & KEYEVENTF_KEYUP != 0
    }

    pub fn is_scan_code(&self) -> bool {
        self.flags & KEYEVENTF_SCANCODE != 0
    }
}
