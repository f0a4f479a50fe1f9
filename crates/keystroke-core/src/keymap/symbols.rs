//! Character to key-sequence table (US layout, printable ASCII).
//!
//! # How this table works
//!
//! `SYMBOL_TABLE` is a compile-time array of 128 optional [`KeySequence`]
//! values indexed by ASCII code.  Position `b'a'` holds the A key, position
//! `b'A'` holds the A key plus Shift.  Every slot without a mapping (control
//! characters, DEL) stores `None`, and anything outside ASCII is rejected
//! before indexing.
//!
//! The only modifier the table ever uses is [`KeyCode::SHIFT`].

use super::key_code::KeyCode;

/// Keys that produce one character: a primary key and an optional modifier
/// held while the primary key is tapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySequence {
    pub primary: KeyCode,
    pub modifier: Option<KeyCode>,
}

impl KeySequence {
    /// A single key with no modifier.
    pub const fn plain(primary: KeyCode) -> Self {
        Self {
            primary,
            modifier: None,
        }
    }

    /// `primary` with Shift held.
    pub const fn shifted(primary: KeyCode) -> Self {
        Self {
            primary,
            modifier: Some(KeyCode::SHIFT),
        }
    }

    /// Number of keys involved (1 or 2).
    pub fn len(&self) -> usize {
        1 + usize::from(self.modifier.is_some())
    }

    /// Always `false`; present for symmetry with [`KeySequence::len`].
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The keys in table order: primary first, then the modifier.
    pub fn keys(&self) -> impl Iterator<Item = KeyCode> {
        std::iter::once(self.primary).chain(self.modifier)
    }
}

/// Looks up the key sequence that types `c`.
///
/// Returns `None` for characters the table does not cover.
pub fn lookup(c: char) -> Option<KeySequence> {
    if c.is_ascii() {
        SYMBOL_TABLE[c as usize]
    } else {
        None
    }
}

/// Iterates every mapped character with its key sequence, in ASCII order.
pub fn symbols() -> impl Iterator<Item = (char, KeySequence)> {
    SYMBOL_TABLE
        .iter()
        .enumerate()
        .filter_map(|(code, seq)| seq.map(|s| (char::from(code as u8), s)))
}

const SYMBOL_TABLE: [Option<KeySequence>; 128] = {
    let mut t: [Option<KeySequence>; 128] = [None; 128];

    t[b' ' as usize] = Some(KeySequence::plain(KeyCode::SPACE));
    t[b'`' as usize] = Some(KeySequence::plain(KeyCode::OEM_3));
    t[b'~' as usize] = Some(KeySequence::shifted(KeyCode::OEM_3));

    // ── Digit row ─────────────────────────────────────────────────────────────
    t[b'1' as usize] = Some(KeySequence::plain(KeyCode::DIGIT_1));
    t[b'!' as usize] = Some(KeySequence::shifted(KeyCode::DIGIT_1));
    t[b'2' as usize] = Some(KeySequence::plain(KeyCode::DIGIT_2));
    t[b'@' as usize] = Some(KeySequence::shifted(KeyCode::DIGIT_2));
    t[b'3' as usize] = Some(KeySequence::plain(KeyCode::DIGIT_3));
    t[b'#' as usize] = Some(KeySequence::shifted(KeyCode::DIGIT_3));
    t[b'4' as usize] = Some(KeySequence::plain(KeyCode::DIGIT_4));
    t[b'$' as usize] = Some(KeySequence::shifted(KeyCode::DIGIT_4));
    t[b'5' as usize] = Some(KeySequence::plain(KeyCode::DIGIT_5));
    t[b'%' as usize] = Some(KeySequence::shifted(KeyCode::DIGIT_5));
    t[b'6' as usize] = Some(KeySequence::plain(KeyCode::DIGIT_6));
    t[b'^' as usize] = Some(KeySequence::shifted(KeyCode::DIGIT_6));
    t[b'7' as usize] = Some(KeySequence::plain(KeyCode::DIGIT_7));
    t[b'&' as usize] = Some(KeySequence::shifted(KeyCode::DIGIT_7));
    t[b'8' as usize] = Some(KeySequence::plain(KeyCode::DIGIT_8));
    t[b'*' as usize] = Some(KeySequence::shifted(KeyCode::DIGIT_8));
    t[b'9' as usize] = Some(KeySequence::plain(KeyCode::DIGIT_9));
    t[b'(' as usize] = Some(KeySequence::shifted(KeyCode::DIGIT_9));
    t[b'0' as usize] = Some(KeySequence::plain(KeyCode::DIGIT_0));
    t[b')' as usize] = Some(KeySequence::shifted(KeyCode::DIGIT_0));

    // ── Punctuation ───────────────────────────────────────────────────────────
    t[b'-' as usize] = Some(KeySequence::plain(KeyCode::MINUS));
    t[b'_' as usize] = Some(KeySequence::shifted(KeyCode::MINUS));
    t[b'=' as usize] = Some(KeySequence::plain(KeyCode::EQUAL));
    t[b'+' as usize] = Some(KeySequence::shifted(KeyCode::EQUAL));
    t[b'[' as usize] = Some(KeySequence::plain(KeyCode::LEFT_BRACE));
    t[b'{' as usize] = Some(KeySequence::shifted(KeyCode::LEFT_BRACE));
    t[b']' as usize] = Some(KeySequence::plain(KeyCode::RIGHT_BRACE));
    t[b'}' as usize] = Some(KeySequence::shifted(KeyCode::RIGHT_BRACE));
    t[b'\\' as usize] = Some(KeySequence::plain(KeyCode::BACKSLASH));
    t[b'|' as usize] = Some(KeySequence::shifted(KeyCode::BACKSLASH));
    t[b';' as usize] = Some(KeySequence::plain(KeyCode::SEMICOLON));
    t[b':' as usize] = Some(KeySequence::shifted(KeyCode::SEMICOLON));
    t[b'\'' as usize] = Some(KeySequence::plain(KeyCode::APOSTROPHE));
    t[b'"' as usize] = Some(KeySequence::shifted(KeyCode::APOSTROPHE));
    t[b',' as usize] = Some(KeySequence::plain(KeyCode::COMMA));
    t[b'<' as usize] = Some(KeySequence::shifted(KeyCode::COMMA));
    t[b'.' as usize] = Some(KeySequence::plain(KeyCode::DOT));
    t[b'>' as usize] = Some(KeySequence::shifted(KeyCode::DOT));
    t[b'/' as usize] = Some(KeySequence::plain(KeyCode::SLASH));
    t[b'?' as usize] = Some(KeySequence::shifted(KeyCode::SLASH));

    // ── Letters: lowercase plain, uppercase shifted ───────────────────────────
    let letters: [(u8, KeyCode); 26] = [
        (b'a', KeyCode::A),
        (b'b', KeyCode::B),
        (b'c', KeyCode::C),
        (b'd', KeyCode::D),
        (b'e', KeyCode::E),
        (b'f', KeyCode::F),
        (b'g', KeyCode::G),
        (b'h', KeyCode::H),
        (b'i', KeyCode::I),
        (b'j', KeyCode::J),
        (b'k', KeyCode::K),
        (b'l', KeyCode::L),
        (b'm', KeyCode::M),
        (b'n', KeyCode::N),
        (b'o', KeyCode::O),
        (b'p', KeyCode::P),
        (b'q', KeyCode::Q),
        (b'r', KeyCode::R),
        (b's', KeyCode::S),
        (b't', KeyCode::T),
        (b'u', KeyCode::U),
        (b'v', KeyCode::V),
        (b'w', KeyCode::W),
        (b'x', KeyCode::X),
        (b'y', KeyCode::Y),
        (b'z', KeyCode::Z),
    ];
    let mut i = 0;
    while i < letters.len() {
        let (lower, key) = letters[i];
        t[lower as usize] = Some(KeySequence::plain(key));
        t[lower.to_ascii_uppercase() as usize] = Some(KeySequence::shifted(key));
        i += 1;
    }

    t
};
