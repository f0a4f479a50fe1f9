//! Integration tests for the typing pipeline.
//!
//! These exercise `Keyboard` end-to-end against the recording injector:
//! table lookup, modifier sequencing, and real inter-key sleeps.

use std::{
    sync::Arc,
    time::{Duration, Instant},
};

use keystroke_core::{KeyCode, KeyDirection};
use keystroke_driver::{
    application::keyboard::{InputError, Keyboard, KeyboardConfig},
    infrastructure::key_injection::recording::RecordingKeyInjector,
};

use KeyDirection::{Down, Up};

fn keyboard_with(config: KeyboardConfig) -> (Keyboard, Arc<RecordingKeyInjector>) {
    let injector = Arc::new(RecordingKeyInjector::new());
    let keyboard = Keyboard::new(Arc::clone(&injector) as _, config);
    (keyboard, injector)
}

fn no_delay() -> KeyboardConfig {
    KeyboardConfig {
        inter_key_delay: Duration::ZERO,
        command_delay: Duration::ZERO,
    }
}

#[test]
fn test_type_hi_taps_h_then_i() {
    let (kb, rec) = keyboard_with(no_delay());

    let summary = kb.type_text("hi");

    assert_eq!(summary.typed, 2);
    assert_eq!(
        rec.key_sequence(),
        vec![
            (KeyCode::H, Down),
            (KeyCode::H, Up),
            (KeyCode::I, Down),
            (KeyCode::I, Up),
        ]
    );
}

#[test]
fn test_inter_key_delay_elapses_between_characters() {
    // Arrange
    let delay = Duration::from_millis(30);
    let (kb, rec) = keyboard_with(KeyboardConfig {
        inter_key_delay: delay,
        command_delay: Duration::ZERO,
    });

    // Act
    let started = Instant::now();
    kb.type_text("hi");
    let elapsed = started.elapsed();

    // Assert – the gap between releasing 'h' and pressing 'i' is at least the
    // delay, and the delay also follows the last character.
    let events = rec.events();
    let h_up = events[1].at;
    let i_down = events[2].at;
    assert!(i_down.duration_since(h_up) >= delay);
    assert!(elapsed >= delay * 2);
}

#[test]
fn test_keyboard_built_from_delay_option_waits_that_long() {
    // Arrange
    let (kb, rec) = keyboard_with(KeyboardConfig::with_inter_key_delay_ms(20));
    assert_eq!(kb.config().inter_key_delay, Duration::from_millis(20));
    assert_eq!(kb.config().command_delay, Duration::ZERO);

    // Act
    kb.type_text("ab");

    // Assert
    let events = rec.events();
    assert_eq!(events.len(), 4);
    assert!(events[2].at.duration_since(events[1].at) >= Duration::from_millis(20));
}

#[test]
fn test_typed_count_includes_characters_whose_events_failed() {
    let injector = Arc::new(RecordingKeyInjector::failing());
    let kb = Keyboard::new(Arc::clone(&injector) as _, no_delay());

    let summary = kb.type_text("a\u{7}b");

    assert_eq!(summary.typed, 2);
    assert_eq!(summary.skipped, vec!['\u{7}']);
    assert!(injector.events().is_empty());
}

#[test]
fn test_command_delay_follows_type_text() {
    let command_delay = Duration::from_millis(40);
    let (kb, _rec) = keyboard_with(KeyboardConfig {
        inter_key_delay: Duration::ZERO,
        command_delay,
    });

    let started = Instant::now();
    kb.type_text("x");

    assert!(started.elapsed() >= command_delay);
}

#[test]
fn test_mixed_case_sentence_wraps_only_capitals_in_shift() {
    let (kb, rec) = keyboard_with(no_delay());

    kb.type_text("Hi!");

    assert_eq!(
        rec.key_sequence(),
        vec![
            (KeyCode::SHIFT, Down),
            (KeyCode::H, Down),
            (KeyCode::H, Up),
            (KeyCode::SHIFT, Up),
            (KeyCode::I, Down),
            (KeyCode::I, Up),
            (KeyCode::SHIFT, Down),
            (KeyCode::DIGIT_1, Down),
            (KeyCode::DIGIT_1, Up),
            (KeyCode::SHIFT, Up),
        ]
    );
}

#[test]
fn test_unmapped_character_is_skipped_and_typing_continues() {
    let (kb, rec) = keyboard_with(no_delay());

    let summary = kb.type_text("café ok");

    assert_eq!(summary.skipped, vec!['é']);
    assert_eq!(summary.typed, 6);
    // c, a, f, space, o, k: one press and one release each
    assert_eq!(rec.events().len(), 12);
}

#[test]
fn test_simulate_unmapped_records_nothing() {
    let (kb, rec) = keyboard_with(no_delay());

    let result = kb.simulate('\u{7}');

    assert!(matches!(result, Err(InputError::SymbolNotFound('\u{7}'))));
    assert!(rec.events().is_empty());
}

#[test]
fn test_type_text_survives_failing_platform() {
    let injector = Arc::new(RecordingKeyInjector::failing());
    let kb = Keyboard::new(Arc::clone(&injector) as _, no_delay());

    // Must not panic; failures are logged and swallowed.
    let summary = kb.type_text("abc");

    assert_eq!(summary.typed, 3);
    assert!(injector.events().is_empty());
}

#[test]
fn test_press_propagates_failure_from_platform() {
    let kb = Keyboard::new(Arc::new(RecordingKeyInjector::failing()), no_delay());

    assert!(matches!(
        kb.press(KeyCode::LEFT_WIN),
        Err(InputError::Platform(_))
    ));
    assert!(kb.release(KeyCode::LEFT_WIN).is_err());
}

#[test]
fn test_chord_ctrl_s() {
    let (kb, rec) = keyboard_with(no_delay());

    kb.chord(KeyCode::LEFT_CONTROL, KeyCode::S).unwrap();

    assert_eq!(
        rec.key_sequence(),
        vec![
            (KeyCode::LEFT_CONTROL, Down),
            (KeyCode::S, Down),
            (KeyCode::S, Up),
            (KeyCode::LEFT_CONTROL, Up),
        ]
    );
}

#[test]
fn test_tap_virtual_key() {
    let (kb, rec) = keyboard_with(no_delay());

    kb.tap(KeyCode::LEFT_WIN);

    assert_eq!(
        rec.key_sequence(),
        vec![(KeyCode::LEFT_WIN, Down), (KeyCode::LEFT_WIN, Up)]
    );
}
