//! Platform-agnostic gesture detection and key actions for the camel pad.
//!
//! This crate holds everything that does not touch hardware: it can be used
//! both on the RP2040 firmware and on host for testing.
//!
//! # Overview
//!
//! - [`timing`]: Clock type and gesture timing ([`Instant`], [`TimingConfig`])
//! - [`keys`]: HID keycodes, combos and key-string parsing ([`Keycode`], [`Combo`], [`parse_combo`])
//! - [`action`]: Gestures and their bindings ([`Gesture`], [`ActionSpec`], [`GestureConfig`])
//! - [`gesture`]: Per-button state machine ([`GestureDetector`])
//! - [`dispatch`]: Fires the action bound to a gesture ([`ActionDispatcher`])
//! - [`input`]: Button input trait and edge/level conversion ([`ButtonInput`])
//! - [`output`]: Key output trait ([`KeyEmitter`])
//! - [`pad`]: One detector per button ([`Pad`])
//! - [`link`]: Vendor HID host link ([`HostLink`], [`ReportTransport`])
//!
//! # Data Flow
//!
//! ```text
//! ButtonInput ──levels──► Pad (GestureDetector × N) ──GestureEvent──► ActionDispatcher ──Combo──► KeyEmitter
//!      │
//!      └──levels──► HostLink (EdgeDetector) ──button reports──► ReportTransport ──display text──► caller
//! ```
//!
//! # Example
//!
//! ```rust
//! use pad_core::{ActionSpec, Gesture, GestureConfig, Instant, Pad, TimingConfig, parse_combo};
//!
//! let copy = parse_combo("ctrl+c").unwrap();
//! let configs = [GestureConfig::EMPTY.with(Gesture::Press, ActionSpec::Combo(copy))];
//! let mut pad = Pad::new(TimingConfig::DEFAULT, &configs);
//!
//! pad.update(&[true], Instant::from_millis(0));
//! pad.update(&[false], Instant::from_millis(80));
//! let fired = pad.update(&[false], Instant::from_millis(380));
//! assert_eq!(fired[0].gesture, Gesture::Press);
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting and gesture trace logging

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod action;
pub mod dispatch;
pub mod gesture;
pub mod input;
pub mod keys;
pub mod link;
pub mod output;
pub mod pad;
pub mod timing;

// Re-export main types at crate root
pub use action::{ActionSpec, Gesture, GestureConfig};
pub use dispatch::{ActionDispatcher, SEQUENCE_ITEM_DELAY_MS};
pub use gesture::{GestureDetector, GestureState};
pub use input::{sample, ButtonEdge, ButtonInput, EdgeDetector, EdgeTracker};
pub use keys::{keycode_from_name, parse_combo, Combo, KeyParseError, Keycode, MAX_COMBO_KEYS};
pub use link::{HostLink, LinkError, ReportTransport, TransportError};
pub use output::{KeyEmitter, OutputError};
pub use pad::{GestureEvent, Pad};
pub use timing::{ConfigError, Instant, TimingConfig};

pub use pad_proto as proto;
