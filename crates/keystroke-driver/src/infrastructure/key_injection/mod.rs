//! Platform-specific key injectors.
//!
//! The correct implementation is selected at compile time via `#[cfg(target_os = ...)]`.
//! The X11 injector additionally needs the `xtest` cargo feature.

use std::sync::Arc;

use crate::application::keyboard::{InputError, PlatformKeyInjector};

pub mod recording;

#[cfg(target_os = "windows")]
pub mod windows;

#[cfg(all(target_os = "linux", feature = "xtest"))]
pub mod linux;

/// Creates the injector for the platform this binary was compiled for.
///
/// # Errors
///
/// Returns [`InputError::Platform`] when the native input facility cannot be
/// opened (e.g. no X display) or the platform has no injector.
pub fn default_injector() -> Result<Arc<dyn PlatformKeyInjector>, InputError> {
    #[cfg(target_os = "windows")]
    {
        let injector: Arc<dyn PlatformKeyInjector> = Arc::new(windows::WindowsKeyInjector::new());
        Ok(injector)
    }

    #[cfg(all(target_os = "linux", feature = "xtest"))]
    {
        let injector: Arc<dyn PlatformKeyInjector> = Arc::new(linux::XTestKeyInjector::open()?);
        Ok(injector)
    }

    #[cfg(not(any(
        target_os = "windows",
        all(target_os = "linux", feature = "xtest")
    )))]
    {
        Err(InputError::Platform(format!(
            "no key injector available for {} (on Linux, build with --features xtest)",
            std::env::consts::OS
        )))
    }
}
