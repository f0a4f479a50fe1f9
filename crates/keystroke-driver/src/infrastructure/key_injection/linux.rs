//! Linux X11 key injection via the XTest extension.
//!
//! Uses `XTestFakeKeyEvent` to inject key events into the X11 session.
//!
//! # What is XTest? (for beginners)
//!
//! XTest is an X11 protocol extension that lets a process synthesize keyboard
//! and mouse events as if the user had physically interacted with the hardware.
//! These events are delivered to the currently focused window exactly like real
//! input.
//!
//! `XTestFakeKeyEvent(display, keycode, is_press, delay)` takes an X server
//! *keycode*, so both kinds of [`KeyCode`] are translated first:
//!
//! ```text
//! scan code   → + 8 (evdev offset)                         → X keycode
//! virtual key → KeySym → XKeysymToKeycode(display, keysym) → X keycode
//! ```
//!
//! # Display handle
//!
//! The display connection is opened once in [`XTestKeyInjector::open`] and
//! closed when the injector is dropped.  Xlib is not thread-safe, so every
//! use of the handle happens under a mutex.

use std::{
    os::raw::{c_int, c_uint, c_ulong},
    ptr::{self, NonNull},
    sync::{Mutex, PoisonError},
};

use keystroke_core::{
    keymap::x11_keysym::{scan_code_to_x_keycode, virtual_key_to_keysym},
    KeyCode, KeyDirection, KeyKind,
};
use tracing::{debug, info};
use x11::{xlib, xtest};

use crate::application::keyboard::{InputError, PlatformKeyInjector};

/// Passing `CurrentTime` (0) as the delay means "deliver immediately".
const CURRENT_TIME: c_ulong = 0;

struct DisplayHandle(NonNull<xlib::Display>);

// SAFETY: the pointer is only dereferenced by Xlib while the owning
// injector's mutex is held, so it is never used from two threads at once.
unsafe impl Send for DisplayHandle {}

/// Linux X11/XTest key injector.
pub struct XTestKeyInjector {
    display: Mutex<DisplayHandle>,
}

impl XTestKeyInjector {
    /// Connects to the X display named by `DISPLAY`.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Platform` if the X display cannot be opened.
    pub fn open() -> Result<Self, InputError> {
        // SAFETY: a null name selects the display from the DISPLAY variable
        let raw = unsafe { xlib::XOpenDisplay(ptr::null()) };
        let display = NonNull::new(raw).ok_or_else(|| {
            InputError::Platform("cannot open X display (is DISPLAY set?)".into())
        })?;
        info!("connected to X display for key injection");
        Ok(Self {
            display: Mutex::new(DisplayHandle(display)),
        })
    }

    fn emit(&self, key: KeyCode, direction: KeyDirection) -> Result<(), InputError> {
        let handle = self.display.lock().unwrap_or_else(PoisonError::into_inner);
        let display = handle.0.as_ptr();

        let keycode = match key.kind() {
            KeyKind::ScanCode => {
                scan_code_to_x_keycode(key).ok_or(InputError::UnsupportedKey(key))?
            }
            KeyKind::VirtualKey => {
                let keysym = virtual_key_to_keysym(key).ok_or(InputError::UnsupportedKey(key))?;
                // SAFETY: display is a live connection guarded by the mutex
                let code = unsafe { xlib::XKeysymToKeycode(display, xlib::KeySym::from(keysym)) };
                if code == 0 {
                    return Err(InputError::UnsupportedKey(key));
                }
                code
            }
        };

        let is_press = c_int::from(direction == KeyDirection::Down);
        debug!(%key, keycode, is_press, "XTestFakeKeyEvent");
        // SAFETY: display is a live connection guarded by the mutex
        let status = unsafe {
            let status =
                xtest::XTestFakeKeyEvent(display, c_uint::from(keycode), is_press, CURRENT_TIME);
            xlib::XFlush(display);
            status
        };
        if status == 0 {
            return Err(InputError::Platform(format!(
                "XTestFakeKeyEvent rejected keycode {keycode}"
            )));
        }
        Ok(())
    }
}

impl PlatformKeyInjector for XTestKeyInjector {
    fn emit_key_down(&self, key: KeyCode) -> Result<(), InputError> {
        self.emit(key, KeyDirection::Down)
    }

    fn emit_key_up(&self, key: KeyCode) -> Result<(), InputError> {
        self.emit(key, KeyDirection::Up)
    }
}

impl Drop for XTestKeyInjector {
    fn drop(&mut self) {
        let handle = self.display.get_mut().unwrap_or_else(PoisonError::into_inner);
        // SAFETY: the connection was opened in `open` and is closed exactly once
        unsafe {
            xlib::XCloseDisplay(handle.0.as_ptr());
        }
    }
}
