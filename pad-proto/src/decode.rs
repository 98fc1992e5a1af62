//! Report decoding.
//!
//! Decoding never fails in the error sense: anything that is not a
//! recognizable message decodes to `None` and is dropped by the caller.

use crate::text::{decode_text_lossy, DisplayText};
use crate::types::MessageType;

/// Minimum length of a button report (type, id, pressed).
const MIN_BUTTON_LEN: usize = 3;

/// A button edge as carried in a [`MessageType::Button`] report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    pub button_id: u8,
    pub pressed: bool,
}

/// A decoded report.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[must_use]
pub enum Message {
    /// Text for the pad display.
    DisplayText(DisplayText),
    /// Button press/release edge.
    Button(ButtonEvent),
}

/// Decode a received report.
///
/// - Empty input, unknown type tags and truncated button reports give `None`.
/// - Display text is decoded lossily (see [`decode_text_lossy`]).
/// - A button is pressed only when byte 2 is exactly `1`.
pub fn decode(data: &[u8]) -> Option<Message> {
    let (&tag, payload) = data.split_first()?;

    match MessageType::from_byte(tag)? {
        MessageType::DisplayText => Some(Message::DisplayText(decode_text_lossy(payload))),
        MessageType::Button => {
            if data.len() < MIN_BUTTON_LEN {
                return None;
            }
            Some(Message::Button(ButtonEvent {
                button_id: data[1],
                pressed: data[2] == 1,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{encode_button_event, encode_display_text};
    use crate::types::{Report, MAX_TEXT_LEN};

    #[test]
    fn test_button_round_trip() {
        for (id, pressed) in [(0u8, true), (5, false), (255, true)] {
            let report = encode_button_event(id, pressed);
            assert_eq!(
                decode(report.as_bytes()),
                Some(Message::Button(ButtonEvent {
                    button_id: id,
                    pressed
                }))
            );
        }
    }

    #[test]
    fn test_display_text_has_no_trailing_nuls() {
        let mut bytes = [0u8; 64];
        bytes[0] = 0x01;
        bytes[1] = b'H';
        bytes[2] = b'i';

        match decode(&bytes) {
            Some(Message::DisplayText(text)) => {
                assert_eq!(text.as_str(), "Hi");
                assert_eq!(text.len(), 2);
            }
            other => panic!("unexpected decode result: {:?}", other),
        }
    }

    #[test]
    fn test_display_text_invalid_utf8_does_not_fail() {
        let mut bytes = [0u8; 64];
        bytes[0] = 0x01;
        bytes[1..4].copy_from_slice(&[0xC3, 0x28, b'z']);

        match decode(&bytes) {
            Some(Message::DisplayText(text)) => {
                assert!(text.contains('\u{FFFD}'));
                assert!(text.ends_with("(z"));
            }
            other => panic!("unexpected decode result: {:?}", other),
        }
    }

    #[test]
    fn test_display_text_without_terminator() {
        let text = "0123456789012345678901234567890123456789012345678901234567890AB";
        assert_eq!(text.len(), MAX_TEXT_LEN);
        let report = encode_display_text(text);
        match decode(report.as_bytes()) {
            Some(Message::DisplayText(decoded)) => assert_eq!(decoded.as_str(), text),
            other => panic!("unexpected decode result: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_ignored() {
        let mut bytes = [0u8; 64];
        bytes[0] = 0x7E;
        assert_eq!(decode(&bytes), None);
        assert_eq!(decode(Report::zeroed().as_bytes()), None);
    }

    #[test]
    fn test_empty_report_ignored() {
        assert_eq!(decode(&[]), None);
    }

    #[test]
    fn test_short_button_report_ignored() {
        assert_eq!(decode(&[0x02, 1]), None);
    }

    #[test]
    fn test_button_pressed_requires_exact_one() {
        let decoded = decode(&[0x02, 4, 2]);
        assert_eq!(
            decoded,
            Some(Message::Button(ButtonEvent {
                button_id: 4,
                pressed: false
            }))
        );
    }
}
