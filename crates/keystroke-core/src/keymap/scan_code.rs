//! Named scan-code keys (PC/AT set 1 make codes).
//!
//! Reference: Microsoft "Keyboard Scan Code Specification", set 1.
//! These values also match the Linux evdev `KEY_*` codes for the main block,
//! which the X11 injector relies on.

use super::key_code::KeyCode;

impl KeyCode {
    pub const RESERVED: Self = Self::scan(0);
    pub const ESC: Self = Self::scan(1);

    // ── Digit row ─────────────────────────────────────────────────────────────
    pub const DIGIT_1: Self = Self::scan(2);
    pub const DIGIT_2: Self = Self::scan(3);
    pub const DIGIT_3: Self = Self::scan(4);
    pub const DIGIT_4: Self = Self::scan(5);
    pub const DIGIT_5: Self = Self::scan(6);
    pub const DIGIT_6: Self = Self::scan(7);
    pub const DIGIT_7: Self = Self::scan(8);
    pub const DIGIT_8: Self = Self::scan(9);
    pub const DIGIT_9: Self = Self::scan(10);
    pub const DIGIT_0: Self = Self::scan(11);
    pub const MINUS: Self = Self::scan(12);
    pub const EQUAL: Self = Self::scan(13);
    pub const BACKSPACE: Self = Self::scan(14);
    pub const TAB: Self = Self::scan(15);

    // ── Letters ───────────────────────────────────────────────────────────────
    pub const Q: Self = Self::scan(16);
    pub const W: Self = Self::scan(17);
    pub const E: Self = Self::scan(18);
    pub const R: Self = Self::scan(19);
    pub const T: Self = Self::scan(20);
    pub const Y: Self = Self::scan(21);
    pub const U: Self = Self::scan(22);
    pub const I: Self = Self::scan(23);
    pub const O: Self = Self::scan(24);
    pub const P: Self = Self::scan(25);
    pub const LEFT_BRACE: Self = Self::scan(26);
    pub const RIGHT_BRACE: Self = Self::scan(27);
    pub const ENTER: Self = Self::scan(28);
    pub const A: Self = Self::scan(30);
    pub const S: Self = Self::scan(31);
    pub const D: Self = Self::scan(32);
    pub const F: Self = Self::scan(33);
    pub const G: Self = Self::scan(34);
    pub const H: Self = Self::scan(35);
    pub const J: Self = Self::scan(36);
    pub const K: Self = Self::scan(37);
    pub const L: Self = Self::scan(38);
    pub const SEMICOLON: Self = Self::scan(39);
    pub const APOSTROPHE: Self = Self::scan(40);
    pub const GRAVE: Self = Self::scan(41);
    pub const BACKSLASH: Self = Self::scan(43);
    pub const Z: Self = Self::scan(44);
    pub const X: Self = Self::scan(45);
    pub const C: Self = Self::scan(46);
    pub const V: Self = Self::scan(47);
    pub const B: Self = Self::scan(48);
    pub const N: Self = Self::scan(49);
    pub const M: Self = Self::scan(50);
    pub const COMMA: Self = Self::scan(51);
    pub const DOT: Self = Self::scan(52);
    pub const SLASH: Self = Self::scan(53);
    pub const KP_ASTERISK: Self = Self::scan(55);
    pub const SPACE: Self = Self::scan(57);
    pub const CAPS_LOCK: Self = Self::scan(58);

    // ── Function keys F1-F12 ──────────────────────────────────────────────────
    pub const F1: Self = Self::scan(59);
    pub const F2: Self = Self::scan(60);
    pub const F3: Self = Self::scan(61);
    pub const F4: Self = Self::scan(62);
    pub const F5: Self = Self::scan(63);
    pub const F6: Self = Self::scan(64);
    pub const F7: Self = Self::scan(65);
    pub const F8: Self = Self::scan(66);
    pub const F9: Self = Self::scan(67);
    pub const F10: Self = Self::scan(68);
    pub const F11: Self = Self::scan(87);
    pub const F12: Self = Self::scan(88);

    pub const NUM_LOCK: Self = Self::scan(69);
    pub const SCROLL_LOCK: Self = Self::scan(70);

    // ── Keypad ────────────────────────────────────────────────────────────────
    pub const KP_7: Self = Self::scan(71);
    pub const KP_8: Self = Self::scan(72);
    pub const KP_9: Self = Self::scan(73);
    pub const KP_MINUS: Self = Self::scan(74);
    pub const KP_4: Self = Self::scan(75);
    pub const KP_5: Self = Self::scan(76);
    pub const KP_6: Self = Self::scan(77);
    pub const KP_PLUS: Self = Self::scan(78);
    pub const KP_1: Self = Self::scan(79);
    pub const KP_2: Self = Self::scan(80);
    pub const KP_3: Self = Self::scan(81);
    pub const KP_0: Self = Self::scan(82);
    pub const KP_DOT: Self = Self::scan(83);
    pub const OEM_102_SCAN: Self = Self::scan(86);
}

/// Every named scan-code key, in ascending code order.
pub const NAMED_SCAN_CODES: &[KeyCode] = &[
    KeyCode::RESERVED,
    KeyCode::ESC,
    KeyCode::DIGIT_1,
    KeyCode::DIGIT_2,
    KeyCode::DIGIT_3,
    KeyCode::DIGIT_4,
    KeyCode::DIGIT_5,
    KeyCode::DIGIT_6,
    KeyCode::DIGIT_7,
    KeyCode::DIGIT_8,
    KeyCode::DIGIT_9,
    KeyCode::DIGIT_0,
    KeyCode::MINUS,
    KeyCode::EQUAL,
    KeyCode::BACKSPACE,
    KeyCode::TAB,
    KeyCode::Q,
    KeyCode::W,
    KeyCode::E,
    KeyCode::R,
    KeyCode::T,
    KeyCode::Y,
    KeyCode::U,
    KeyCode::I,
    KeyCode::O,
    KeyCode::P,
    KeyCode::LEFT_BRACE,
    KeyCode::RIGHT_BRACE,
    KeyCode::ENTER,
    KeyCode::A,
    KeyCode::S,
    KeyCode::D,
    KeyCode::F,
    KeyCode::G,
    KeyCode::H,
    KeyCode::J,
    KeyCode::K,
    KeyCode::L,
    KeyCode::SEMICOLON,
    KeyCode::APOSTROPHE,
    KeyCode::GRAVE,
    KeyCode::BACKSLASH,
    KeyCode::Z,
    KeyCode::X,
    KeyCode::C,
    KeyCode::V,
    KeyCode::B,
    KeyCode::N,
    KeyCode::M,
    KeyCode::COMMA,
    KeyCode::DOT,
    KeyCode::SLASH,
    KeyCode::KP_ASTERISK,
    KeyCode::SPACE,
    KeyCode::CAPS_LOCK,
    KeyCode::F1,
    KeyCode::F2,
    KeyCode::F3,
    KeyCode::F4,
    KeyCode::F5,
    KeyCode::F6,
    KeyCode::F7,
    KeyCode::F8,
    KeyCode::F9,
    KeyCode::F10,
    KeyCode::NUM_LOCK,
    KeyCode::SCROLL_LOCK,
    KeyCode::KP_7,
    KeyCode::KP_8,
    KeyCode::KP_9,
    KeyCode::KP_MINUS,
    KeyCode::KP_4,
    KeyCode::KP_5,
    KeyCode::KP_6,
    KeyCode::KP_PLUS,
    KeyCode::KP_1,
    KeyCode::KP_2,
    KeyCode::KP_3,
    KeyCode::KP_0,
    KeyCode::KP_DOT,
    KeyCode::OEM_102_SCAN,
    KeyCode::F11,
    KeyCode::F12,
];
