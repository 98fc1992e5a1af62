//! Camel pad firmware for RP2040.
//!
//! A small macro keyboard: every button recognizes single, double and long
//! presses and types the key combo (or combo sequence) bound to the gesture.
//!
//! # Hardware Configuration
//!
//! | Function | GPIO | Description |
//! |----------|------|-------------|
//! | Button 0 | 2    | Active low, internal pull-up |
//! | Button 1 | 3    | Active low, internal pull-up |
//! | Button 2 | 4    | Active low, internal pull-up |
//! | Button 3 | 5    | Active low, internal pull-up |
//!
//! # Architecture
//!
//! The firmware uses the Embassy async runtime:
//!
//! - **USB Task**: Manages the USB device stack
//! - **Poll Task**: Samples the buttons every 10 ms and runs gesture detection
//! - **Action Task** (`macro-keys`): Types the combos bound to fired gestures
//! - **Link Tasks** (`host-link`): Send button edges to the host, receive display text
//!
//! Fired gestures travel from the poll task to the action task through a
//! bounded [`Channel`](embassy_sync::channel::Channel), so a long sequence
//! never stalls detection and gestures are typed in the order they fired.
//!
//! # Modules
//!
//! - [`config`]: Compile-time timing and button bindings
//! - [`buttons`]: GPIO button input ([`GpioButtons`])
//! - [`usb_keyboard`]: USB HID keyboard output ([`UsbKeyboard`])
//! - [`usb_vendor`]: USB vendor HID report transport ([`UsbVendorTransport`])
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)
//! - **`macro-keys`** (default): USB keyboard image
//! - **`host-link`**: USB vendor HID image talking to the desktop companion
//!
//! # Re-exports
//!
//! This crate re-exports the public items of [`pad_core`] for convenience,
//! so consumers only need to depend on this crate.

#![no_std]

// Ensure exactly one image is selected
#[cfg(all(feature = "macro-keys", feature = "host-link"))]
compile_error!(
    "Cannot enable both `macro-keys` and `host-link` features - they share one USB interface slot"
);

#[cfg(not(any(feature = "macro-keys", feature = "host-link")))]
compile_error!("Enable one of the `macro-keys` or `host-link` features");

// Re-export core types for convenience
pub use pad_core::{
    ActionDispatcher, ActionSpec, ButtonEdge, ButtonInput, Combo, Gesture, GestureConfig,
    GestureEvent, HostLink, Instant, KeyEmitter, Keycode, OutputError, Pad, ReportTransport,
    TimingConfig, TransportError,
};

pub mod buttons;
pub mod config;
#[cfg(feature = "macro-keys")]
pub mod usb_keyboard;
#[cfg(feature = "host-link")]
pub mod usb_vendor;

pub use buttons::GpioButtons;
#[cfg(feature = "macro-keys")]
pub use usb_keyboard::{configure_usb_keyboard, UsbKeyboard};
#[cfg(feature = "host-link")]
pub use usb_vendor::{configure_usb_vendor, run_vendor_reader, InboundReports, UsbVendorTransport};

/// Current time on the pad's monotonic clock.
#[must_use]
pub fn now() -> Instant {
    Instant::from_millis(embassy_time::Instant::now().as_millis())
}
