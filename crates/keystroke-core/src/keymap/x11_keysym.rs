//! Key identifiers to X11 keycodes and KeySyms, for the Linux injector.
//!
//! X11 values are defined in X11/keysymdef.h and X11/XF86keysym.h.
//!
//! # Scan codes on X11
//!
//! Under the evdev/libinput drivers the X server keycode is the kernel
//! `KEY_*` code plus 8, and the kernel codes for the main block are the PC
//! set 1 scan codes.  Scan-code keys therefore need no table, only the
//! offset.
//!
//! # Virtual keys on X11
//!
//! Virtual keys have no positional meaning, so they go through a KeySym which
//! the server resolves to a keycode with `XKeysymToKeycode`.  Keys without an
//! X11 equivalent (mouse buttons, IME, attention keys) return `None`.

use super::key_code::{KeyCode, KeyKind};

/// Offset between evdev key codes and X server keycodes.
pub const EVDEV_KEYCODE_OFFSET: u16 = 8;

/// Translates a scan-code key to an X server keycode.
///
/// Returns `None` for virtual keys and for codes past the 8-bit keycode range.
pub fn scan_code_to_x_keycode(key: KeyCode) -> Option<u8> {
    if key.kind() != KeyKind::ScanCode {
        return None;
    }
    key.value()
        .checked_add(EVDEV_KEYCODE_OFFSET)
        .and_then(|code| u8::try_from(code).ok())
}

/// Translates a virtual key to an X11 KeySym.
///
/// Returns `None` for scan-code keys and for virtual keys with no KeySym.
pub fn virtual_key_to_keysym(key: KeyCode) -> Option<u32> {
    if key.kind() != KeyKind::VirtualKey {
        return None;
    }
    match key.value() {
        // Modifiers
        0x10 | 0xA0 => Some(0xFFE1), // XK_Shift_L
        0xA1 => Some(0xFFE2),        // XK_Shift_R
        0x11 | 0xA2 => Some(0xFFE3), // XK_Control_L
        0xA3 => Some(0xFFE4),        // XK_Control_R
        0x12 | 0xA4 => Some(0xFFE9), // XK_Alt_L
        0xA5 => Some(0xFFEA),        // XK_Alt_R
        0x5B => Some(0xFFEB),        // XK_Super_L
        0x5C => Some(0xFFEC),        // XK_Super_R

        // Editing
        0x08 => Some(0xFF08), // XK_BackSpace
        0x0C => Some(0xFF0B), // XK_Clear
        0x13 => Some(0xFF13), // XK_Pause
        0x14 => Some(0xFFE5), // XK_Caps_Lock
        0x91 => Some(0xFF14), // XK_Scroll_Lock

        // Navigation
        0x21 => Some(0xFF55),        // XK_Prior
        0x22 => Some(0xFF56),        // XK_Next
        0x23 => Some(0xFF57),        // XK_End
        0x24 => Some(0xFF50),        // XK_Home
        0x25 => Some(0xFF51),        // XK_Left
        0x26 => Some(0xFF52),        // XK_Up
        0x27 => Some(0xFF53),        // XK_Right
        0x28 => Some(0xFF54),        // XK_Down
        0x29 => Some(0xFF60),        // XK_Select
        0x2A | 0x2C => Some(0xFF61), // XK_Print
        0x2B => Some(0xFF62),        // XK_Execute
        0x2D => Some(0xFF63),        // XK_Insert
        0x2E => Some(0xFFFF),        // XK_Delete
        0x2F => Some(0xFF6A),        // XK_Help

        // F13-F24 follow XK_F13 contiguously
        v @ 0x7C..=0x87 => Some(0xFFCA + u32::from(v - 0x7C)),

        // Browser, volume, media, launch (XF86 keysyms)
        0xA6 => Some(0x1008_FF26), // XF86XK_Back
        0xA7 => Some(0x1008_FF27), // XF86XK_Forward
        0xA8 => Some(0x1008_FF29), // XF86XK_Refresh
        0xA9 => Some(0x1008_FF28), // XF86XK_Stop
        0xAA => Some(0x1008_FF1B), // XF86XK_Search
        0xAB => Some(0x1008_FF30), // XF86XK_Favorites
        0xAC => Some(0x1008_FF18), // XF86XK_HomePage
        0xAD => Some(0x1008_FF12), // XF86XK_AudioMute
        0xAE => Some(0x1008_FF11), // XF86XK_AudioLowerVolume
        0xAF => Some(0x1008_FF13), // XF86XK_AudioRaiseVolume
        0xB0 => Some(0x1008_FF17), // XF86XK_AudioNext
        0xB1 => Some(0x1008_FF16), // XF86XK_AudioPrev
        0xB2 => Some(0x1008_FF15), // XF86XK_AudioStop
        0xB3 => Some(0x1008_FF14), // XF86XK_AudioPlay
        0xB4 => Some(0x1008_FF19), // XF86XK_Mail

        // OEM punctuation, US layout
        0xBA => Some(0x003B), // XK_semicolon
        0xBB => Some(0x003D), // XK_equal
        0xBC => Some(0x002C), // XK_comma
        0xBD => Some(0x002D), // XK_minus
        0xBE => Some(0x002E), // XK_period
        0xBF => Some(0x002F), // XK_slash
        0xC0 => Some(0x0060), // XK_grave
        0xDB => Some(0x005B), // XK_bracketleft
        0xDC => Some(0x005C), // XK_backslash
        0xDD => Some(0x005D), // XK_bracketright
        0xDE => Some(0x0027), // XK_apostrophe
        0xE2 => Some(0x003C), // XK_less

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::symbols::symbols;

    #[test]
    fn test_scan_code_gets_evdev_offset() {
        assert_eq!(scan_code_to_x_keycode(KeyCode::A), Some(38));
        assert_eq!(scan_code_to_x_keycode(KeyCode::ESC), Some(9));
        assert_eq!(scan_code_to_x_keycode(KeyCode::SPACE), Some(65));
    }

    #[test]
    fn test_scan_code_past_keycode_range_is_none() {
        assert_eq!(scan_code_to_x_keycode(KeyCode::scan(248)), None);
        assert_eq!(scan_code_to_x_keycode(KeyCode::scan(u16::MAX)), None);
    }

    #[test]
    fn test_virtual_key_has_no_scan_translation() {
        assert_eq!(scan_code_to_x_keycode(KeyCode::SHIFT), None);
    }

    #[test]
    fn test_scan_code_has_no_keysym() {
        assert_eq!(virtual_key_to_keysym(KeyCode::A), None);
    }

    #[test]
    fn test_modifiers_map_to_left_hand_keysyms() {
        assert_eq!(virtual_key_to_keysym(KeyCode::SHIFT), Some(0xFFE1));
        assert_eq!(virtual_key_to_keysym(KeyCode::CTRL), Some(0xFFE3));
        assert_eq!(virtual_key_to_keysym(KeyCode::LEFT_CONTROL), Some(0xFFE3));
        assert_eq!(virtual_key_to_keysym(KeyCode::LEFT_WIN), Some(0xFFEB));
    }

    #[test]
    fn test_f13_to_f24_map_contiguously() {
        assert_eq!(virtual_key_to_keysym(KeyCode::F13), Some(0xFFCA));
        assert_eq!(virtual_key_to_keysym(KeyCode::F24), Some(0xFFD5));
    }

    #[test]
    fn test_mouse_button_virtual_keys_are_unmapped() {
        assert_eq!(virtual_key_to_keysym(KeyCode::LEFT_BUTTON), None);
        assert_eq!(virtual_key_to_keysym(KeyCode::X_BUTTON_2), None);
    }

    #[test]
    fn test_every_table_key_is_reachable_on_x11() {
        for (c, seq) in symbols() {
            for key in seq.keys() {
                let reachable = scan_code_to_x_keycode(key).is_some()
                    || virtual_key_to_keysym(key).is_some();
                assert!(reachable, "{key} (from {c:?}) has no X11 translation");
            }
        }
    }
}
