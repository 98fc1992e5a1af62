//! Report encoding.
//!
//! Both encoders are infallible: the report layout is fixed and text that
//! does not fit is truncated on a character boundary.

use crate::types::{MessageType, Report, MAX_TEXT_LEN};

/// Encode a button press/release edge.
///
/// ```
/// use pad_proto::encode_button_event;
///
/// let report = encode_button_event(7, false);
/// assert_eq!(&report.as_bytes()[..3], &[0x02, 7, 0]);
/// ```
#[must_use]
pub fn encode_button_event(button_id: u8, pressed: bool) -> Report {
    let mut report = Report::with_type(MessageType::Button);
    let bytes = report.as_mut_bytes();
    bytes[1] = button_id;
    bytes[2] = u8::from(pressed);
    report
}

/// Encode text for the pad display.
///
/// The UTF-8 bytes are copied after the type byte. Text longer than
/// [`MAX_TEXT_LEN`] bytes is cut at the last character boundary that fits.
#[must_use]
pub fn encode_display_text(text: &str) -> Report {
    let mut end = text.len().min(MAX_TEXT_LEN);
    while !text.is_char_boundary(end) {
        end -= 1;
    }

    let mut report = Report::with_type(MessageType::DisplayText);
    report.as_mut_bytes()[1..=end].copy_from_slice(&text.as_bytes()[..end]);
    report
}
