//! Named virtual keys.
//!
//! Reference: Windows Virtual-Key Codes (winuser.h).
//! Only keys that have no useful scan-code form (modifiers addressed by name,
//! navigation cluster, F13-F24, OEM punctuation, media and browser keys) are
//! listed here; the main typing block lives in [`super::scan_code`].

use super::key_code::KeyCode;

impl KeyCode {
    // ── Modifiers ─────────────────────────────────────────────────────────────
    pub const SHIFT: Self = Self::virtual_key(0x10);
    pub const CTRL: Self = Self::virtual_key(0x11);
    pub const ALT: Self = Self::virtual_key(0x12);
    pub const LEFT_WIN: Self = Self::virtual_key(0x5B);
    pub const RIGHT_WIN: Self = Self::virtual_key(0x5C);
    pub const LEFT_SHIFT: Self = Self::virtual_key(0xA0);
    pub const RIGHT_SHIFT: Self = Self::virtual_key(0xA1);
    pub const LEFT_CONTROL: Self = Self::virtual_key(0xA2);
    pub const RIGHT_CONTROL: Self = Self::virtual_key(0xA3);
    pub const LEFT_MENU: Self = Self::virtual_key(0xA4);
    pub const RIGHT_MENU: Self = Self::virtual_key(0xA5);

    // ── Mouse buttons (addressable through the keyboard API) ─────────────────
    pub const LEFT_BUTTON: Self = Self::virtual_key(0x01);
    pub const RIGHT_BUTTON: Self = Self::virtual_key(0x02);
    pub const CANCEL: Self = Self::virtual_key(0x03);
    pub const MIDDLE_BUTTON: Self = Self::virtual_key(0x04);
    pub const X_BUTTON_1: Self = Self::virtual_key(0x05);
    pub const X_BUTTON_2: Self = Self::virtual_key(0x06);

    // ── Editing and IME ───────────────────────────────────────────────────────
    pub const BACK: Self = Self::virtual_key(0x08);
    pub const CLEAR: Self = Self::virtual_key(0x0C);
    pub const PAUSE: Self = Self::virtual_key(0x13);
    pub const CAPITAL: Self = Self::virtual_key(0x14);
    pub const KANA: Self = Self::virtual_key(0x15);
    pub const HANGUL: Self = Self::virtual_key(0x15);
    pub const JUNJA: Self = Self::virtual_key(0x17);
    pub const FINAL: Self = Self::virtual_key(0x18);
    pub const HANJA: Self = Self::virtual_key(0x19);
    pub const KANJI: Self = Self::virtual_key(0x19);
    pub const CONVERT: Self = Self::virtual_key(0x1C);
    pub const NON_CONVERT: Self = Self::virtual_key(0x1D);
    pub const ACCEPT: Self = Self::virtual_key(0x1E);
    pub const MODE_CHANGE: Self = Self::virtual_key(0x1F);

    // ── Navigation cluster ────────────────────────────────────────────────────
    pub const PAGE_UP: Self = Self::virtual_key(0x21);
    pub const PAGE_DOWN: Self = Self::virtual_key(0x22);
    pub const END: Self = Self::virtual_key(0x23);
    pub const HOME: Self = Self::virtual_key(0x24);
    pub const LEFT: Self = Self::virtual_key(0x25);
    pub const UP: Self = Self::virtual_key(0x26);
    pub const RIGHT: Self = Self::virtual_key(0x27);
    pub const DOWN: Self = Self::virtual_key(0x28);
    pub const SELECT: Self = Self::virtual_key(0x29);
    pub const PRINT: Self = Self::virtual_key(0x2A);
    pub const EXECUTE: Self = Self::virtual_key(0x2B);
    pub const SNAPSHOT: Self = Self::virtual_key(0x2C);
    pub const INSERT: Self = Self::virtual_key(0x2D);
    pub const DELETE: Self = Self::virtual_key(0x2E);
    pub const HELP: Self = Self::virtual_key(0x2F);

    // ── F13-F24 (no set-1 scan codes) ─────────────────────────────────────────
    pub const F13: Self = Self::virtual_key(0x7C);
    pub const F14: Self = Self::virtual_key(0x7D);
    pub const F15: Self = Self::virtual_key(0x7E);
    pub const F16: Self = Self::virtual_key(0x7F);
    pub const F17: Self = Self::virtual_key(0x80);
    pub const F18: Self = Self::virtual_key(0x81);
    pub const F19: Self = Self::virtual_key(0x82);
    pub const F20: Self = Self::virtual_key(0x83);
    pub const F21: Self = Self::virtual_key(0x84);
    pub const F22: Self = Self::virtual_key(0x85);
    pub const F23: Self = Self::virtual_key(0x86);
    pub const F24: Self = Self::virtual_key(0x87);

    pub const SCROLL: Self = Self::virtual_key(0x91);

    // ── Browser, volume, media, launch ────────────────────────────────────────
    pub const BROWSER_BACK: Self = Self::virtual_key(0xA6);
    pub const BROWSER_FORWARD: Self = Self::virtual_key(0xA7);
    pub const BROWSER_REFRESH: Self = Self::virtual_key(0xA8);
    pub const BROWSER_STOP: Self = Self::virtual_key(0xA9);
    pub const BROWSER_SEARCH: Self = Self::virtual_key(0xAA);
    pub const BROWSER_FAVORITES: Self = Self::virtual_key(0xAB);
    pub const BROWSER_HOME: Self = Self::virtual_key(0xAC);
    pub const VOLUME_MUTE: Self = Self::virtual_key(0xAD);
    pub const VOLUME_DOWN: Self = Self::virtual_key(0xAE);
    pub const VOLUME_UP: Self = Self::virtual_key(0xAF);
    pub const MEDIA_NEXT_TRACK: Self = Self::virtual_key(0xB0);
    pub const MEDIA_PREV_TRACK: Self = Self::virtual_key(0xB1);
    pub const MEDIA_STOP: Self = Self::virtual_key(0xB2);
    pub const MEDIA_PLAY_PAUSE: Self = Self::virtual_key(0xB3);
    pub const LAUNCH_MAIL: Self = Self::virtual_key(0xB4);
    pub const LAUNCH_MEDIA_SELECT: Self = Self::virtual_key(0xB5);
    pub const LAUNCH_APP_1: Self = Self::virtual_key(0xB6);
    pub const LAUNCH_APP_2: Self = Self::virtual_key(0xB7);

    // ── OEM punctuation (US layout meaning in comments) ──────────────────────
    pub const OEM_1: Self = Self::virtual_key(0xBA); // ;:
    pub const OEM_PLUS: Self = Self::virtual_key(0xBB);
    pub const OEM_COMMA: Self = Self::virtual_key(0xBC);
    pub const OEM_MINUS: Self = Self::virtual_key(0xBD);
    pub const OEM_PERIOD: Self = Self::virtual_key(0xBE);
    pub const OEM_2: Self = Self::virtual_key(0xBF); // /?
    pub const OEM_3: Self = Self::virtual_key(0xC0); // `~
    pub const OEM_4: Self = Self::virtual_key(0xDB); // [{
    pub const OEM_5: Self = Self::virtual_key(0xDC); // \|
    pub const OEM_6: Self = Self::virtual_key(0xDD); // ]}
    pub const OEM_7: Self = Self::virtual_key(0xDE); // '"
    pub const OEM_8: Self = Self::virtual_key(0xDF);
    pub const OEM_102: Self = Self::virtual_key(0xE2);

    pub const PROCESS_KEY: Self = Self::virtual_key(0xE5);
    pub const PACKET: Self = Self::virtual_key(0xE7);
    pub const ATTN: Self = Self::virtual_key(0xF6);
    pub const CRSEL: Self = Self::virtual_key(0xF7);
    pub const EXSEL: Self = Self::virtual_key(0xF8);
    pub const EREOF: Self = Self::virtual_key(0xF9);
    pub const PLAY: Self = Self::virtual_key(0xFA);
    pub const ZOOM: Self = Self::virtual_key(0xFB);
    pub const NONAME: Self = Self::virtual_key(0xFC);
    pub const PA1: Self = Self::virtual_key(0xFD);
    pub const OEM_CLEAR: Self = Self::virtual_key(0xFE);
}
