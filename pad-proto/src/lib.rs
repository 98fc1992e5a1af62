//! Vendor HID report format shared by the camel pad firmware and its host.
//!
//! Every message travels in a fixed 64-byte report. Byte 0 carries the
//! message type, the rest is payload padded with zeros. There is no length
//! field: the button report has a fixed layout and display text ends at the
//! first NUL byte (or at the end of the report).
//!
//! - **Types**: [`Report`], [`MessageType`], [`Message`], [`ButtonEvent`]
//! - **Encoding**: [`encode_button_event()`], [`encode_display_text()`]
//! - **Decoding**: [`decode()`], [`decode_text_lossy()`]
//!
//! # Wire Format
//!
//! ```text
//! Button event (device -> host):
//!   [0]=0x02  [1]=button_id  [2]=pressed (0|1)  [3..64]=0
//!
//! Display text (host -> device):
//!   [0]=0x01  [1..64]=UTF-8 text, NUL-terminated if shorter than 63 bytes
//! ```
//!
//! # Examples
//!
//! ```
//! use pad_proto::{decode, encode_button_event, encode_display_text, Message};
//!
//! let report = encode_button_event(3, true);
//! match decode(report.as_bytes()) {
//!     Some(Message::Button(event)) => {
//!         assert_eq!(event.button_id, 3);
//!         assert!(event.pressed);
//!     }
//!     _ => unreachable!(),
//! }
//!
//! let report = encode_display_text("Hi");
//! match decode(report.as_bytes()) {
//!     Some(Message::DisplayText(text)) => assert_eq!(text.as_str(), "Hi"),
//!     _ => unreachable!(),
//! }
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod decode;
pub mod encode;
mod text;
pub mod types;

pub use decode::{decode, ButtonEvent, Message};
pub use encode::{encode_button_event, encode_display_text};
pub use text::{decode_text_lossy, DisplayText, TEXT_CAPACITY};
pub use types::{MessageType, Report, MAX_TEXT_LEN, REPORT_SIZE};
