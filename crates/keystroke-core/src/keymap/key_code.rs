//! Key identifiers.
//!
//! # Scan codes and virtual keys (for beginners)
//!
//! Windows can address a key in two ways:
//!
//! - A **scan code** names a *physical* key position (the A key is scan code
//!   30 on every PC keyboard, whatever letter is printed on it).
//! - A **virtual key** names a *logical* key defined by the OS (`VK_SHIFT` is
//!   0x10, `VK_F13` is 0x7C).  Keys that have no position on a standard
//!   keyboard, such as F13-F24 or the media keys, only exist as virtual keys.
//!
//! The injection call needs a different flag for each kind, so every
//! [`KeyCode`] carries its [`KeyKind`] next to the numeric value.
//!
//! # Legacy integer encoding
//!
//! Older key tables packed both kinds into one integer: values below `0xFFF`
//! were scan codes and virtual keys were stored as `vk + 0xFFF`.  That
//! encoding is only understood at the edges through
//! [`KeyCode::from_legacy`] and [`KeyCode::to_legacy`].

use std::fmt;

/// Offset added to virtual-key values in the legacy single-integer encoding.
pub const LEGACY_VIRTUAL_KEY_OFFSET: i32 = 0xFFF;

/// Addressing mode of a [`KeyCode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyKind {
    /// Hardware scan code (physical key position).
    ScanCode,
    /// OS virtual-key code (logical key).
    VirtualKey,
}

/// A key the injector can press or release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCode {
    kind: KeyKind,
    value: u16,
}

impl KeyCode {
    /// Creates a scan-code key.
    pub const fn scan(value: u16) -> Self {
        Self {
            kind: KeyKind::ScanCode,
            value,
        }
    }

    /// Creates a virtual-key key.
    pub const fn virtual_key(value: u16) -> Self {
        Self {
            kind: KeyKind::VirtualKey,
            value,
        }
    }

    pub const fn kind(self) -> KeyKind {
        self.kind
    }

    pub const fn value(self) -> u16 {
        self.value
    }

    pub const fn is_scan_code(self) -> bool {
        matches!(self.kind, KeyKind::ScanCode)
    }

    /// Decodes a key from the legacy single-integer encoding.
    ///
    /// Returns `None` for negative values and for values that do not fit a
    /// `u16` once the virtual-key offset is removed.
    pub fn from_legacy(code: i32) -> Option<Self> {
        if code < 0 {
            return None;
        }
        if code < LEGACY_VIRTUAL_KEY_OFFSET {
            u16::try_from(code).ok().map(Self::scan)
        } else {
            u16::try_from(code - LEGACY_VIRTUAL_KEY_OFFSET)
                .ok()
                .map(Self::virtual_key)
        }
    }

    /// Encodes the key in the legacy single-integer form.
    pub fn to_legacy(self) -> i32 {
        match self.kind {
            KeyKind::ScanCode => i32::from(self.value),
            KeyKind::VirtualKey => i32::from(self.value) + LEGACY_VIRTUAL_KEY_OFFSET,
        }
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            KeyKind::ScanCode => write!(f, "scan:{}", self.value),
            KeyKind::VirtualKey => write!(f, "vk:0x{:02X}", self.value),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_constructor_sets_scan_kind() {
        let key = KeyCode::scan(30);
        assert_eq!(key.kind(), KeyKind::ScanCode);
        assert_eq!(key.value(), 30);
        assert!(key.is_scan_code());
    }

    #[test]
    fn test_virtual_key_constructor_sets_virtual_kind() {
        let key = KeyCode::virtual_key(0x10);
        assert_eq!(key.kind(), KeyKind::VirtualKey);
        assert!(!key.is_scan_code());
    }

    #[test]
    fn test_same_value_different_kind_are_distinct() {
        // Scan code 0x10 (Q) and VK 0x10 (Shift) must never compare equal.
        assert_ne!(KeyCode::scan(0x10), KeyCode::virtual_key(0x10));
    }

    #[test]
    fn test_from_legacy_below_offset_is_scan_code() {
        assert_eq!(KeyCode::from_legacy(57), Some(KeyCode::scan(57)));
        assert_eq!(KeyCode::from_legacy(0xFFE), Some(KeyCode::scan(0xFFE)));
    }

    #[test]
    fn test_from_legacy_at_or_above_offset_is_virtual_key() {
        assert_eq!(
            KeyCode::from_legacy(0x10 + 0xFFF),
            Some(KeyCode::virtual_key(0x10))
        );
        assert_eq!(KeyCode::from_legacy(0xFFF), Some(KeyCode::virtual_key(0)));
    }

    #[test]
    fn test_from_legacy_rejects_negative_and_oversized() {
        assert_eq!(KeyCode::from_legacy(-1), None);
        assert_eq!(KeyCode::from_legacy(0xFFF + 0x1_0000), None);
    }

    #[test]
    fn test_to_legacy_adds_offset_only_for_virtual_keys() {
        assert_eq!(KeyCode::scan(2).to_legacy(), 2);
        assert_eq!(KeyCode::virtual_key(0xC0).to_legacy(), 0xC0 + 0xFFF);
    }

    #[test]
    fn test_display_shows_kind_and_value() {
        assert_eq!(KeyCode::scan(30).to_string(), "scan:30");
        assert_eq!(KeyCode::virtual_key(0x10).to_string(), "vk:0x10");
    }
}
