//! Windows key injection via the SendInput API.
//!
//! Every press or release becomes one `KEYBDINPUT` built from the
//! [`NativeKeyEvent`] derived in `keystroke-core`: the primary code goes in
//! `wVk`, the secondary code in `wScan`, and the `KEYUP`/`SCANCODE` flags in
//! `dwFlags`.  This is the same argument layout as the legacy `keybd_event`
//! call, but `SendInput` reports failures: a return of zero means the event
//! was blocked (e.g. by UIPI) and the OS error is surfaced to the caller.

#![cfg(target_os = "windows")]

use keystroke_core::{KeyCode, KeyDirection, NativeKeyEvent};
use tracing::trace;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    SendInput, INPUT, INPUT_0, INPUT_KEYBOARD, KEYBDINPUT, KEYBD_EVENT_FLAGS, VIRTUAL_KEY,
};

use crate::application::keyboard::{InputError, PlatformKeyInjector};

/// Windows implementation of [`PlatformKeyInjector`] using SendInput.
///
/// Holds no native handle; `user32` is linked at build time.
pub struct WindowsKeyInjector;

impl WindowsKeyInjector {
    pub fn new() -> Self {
        Self
    }
}

impl Default for WindowsKeyInjector {
    fn default() -> Self {
        Self::new()
    }
}

impl PlatformKeyInjector for WindowsKeyInjector {
    fn emit_key_down(&self, key: KeyCode) -> Result<(), InputError> {
        send_key(NativeKeyEvent::for_key(key, KeyDirection::Down)?)
    }

    fn emit_key_up(&self, key: KeyCode) -> Result<(), InputError> {
        send_key(NativeKeyEvent::for_key(key, KeyDirection::Up)?)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn keyboard_input(event: &NativeKeyEvent) -> INPUT {
    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: VIRTUAL_KEY(u16::from(event.primary)),
                wScan: u16::from(event.secondary),
                dwFlags: KEYBD_EVENT_FLAGS(event.flags),
                time: 0,
                dwExtraInfo: event.extra_info,
            },
        },
    }
}

fn send_key(event: NativeKeyEvent) -> Result<(), InputError> {
    trace!(?event, "SendInput");
    let input = keyboard_input(&event);
    // SAFETY: input is a valid KEYBDINPUT structure on the stack
    let sent = unsafe { SendInput(&[input], std::mem::size_of::<INPUT>() as i32) };
    if sent == 0 {
        return Err(InputError::Platform(format!(
            "SendInput rejected key event: {}",
            windows::core::Error::from_win32()
        )));
    }
    Ok(())
}
