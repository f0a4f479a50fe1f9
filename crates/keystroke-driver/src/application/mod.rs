//! Application layer use cases.
//!
//! - **`keyboard`** – The [`keyboard::Keyboard`] driver: maps characters to key
//!   sequences, sequences press/release events, and applies the inter-key
//!   delay.  The actual OS call is made by a
//!   [`keyboard::PlatformKeyInjector`] implementation that is injected at
//!   construction time.

pub mod keyboard;
