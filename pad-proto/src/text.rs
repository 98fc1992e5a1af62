//! Lossy UTF-8 decoding into a fixed-capacity string.

use crate::types::MAX_TEXT_LEN;

/// Worst-case decoded size: every payload byte replaced by U+FFFD (3 bytes).
pub const TEXT_CAPACITY: usize = MAX_TEXT_LEN * 3;

/// Decoded display text.
pub type DisplayText = heapless::String<TEXT_CAPACITY>;

/// Decode a text payload, stopping at the first NUL byte.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD, so this never fails.
/// Input longer than [`MAX_TEXT_LEN`] is cut to that length first.
#[must_use]
pub fn decode_text_lossy(payload: &[u8]) -> DisplayText {
    let payload = &payload[..payload.len().min(MAX_TEXT_LEN)];
    let end = payload.iter().position(|&b| b == 0).unwrap_or(payload.len());

    let mut text = DisplayText::new();
    for chunk in payload[..end].utf8_chunks() {
        // Capacity covers the worst case, pushes cannot overflow.
        let _ = text.push_str(chunk.valid());
        if !chunk.invalid().is_empty() {
            let _ = text.push(char::REPLACEMENT_CHARACTER);
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stops_at_nul() {
        let text = decode_text_lossy(b"Hi\0\0\0junk");
        assert_eq!(text.as_str(), "Hi");
    }

    #[test]
    fn test_without_nul_uses_whole_payload() {
        let payload = [b'x'; MAX_TEXT_LEN];
        let text = decode_text_lossy(&payload);
        assert_eq!(text.len(), MAX_TEXT_LEN);
    }

    #[test]
    fn test_invalid_bytes_replaced() {
        let text = decode_text_lossy(&[b'o', b'k', 0xFF, b'!']);
        assert_eq!(text.as_str(), "ok\u{FFFD}!");
    }

    #[test]
    fn test_multibyte_preserved() {
        let text = decode_text_lossy("caf\u{e9} \u{1F42B}".as_bytes());
        assert_eq!(text.as_str(), "caf\u{e9} \u{1F42B}");
    }

    #[test]
    fn test_truncated_multibyte_at_end_is_replaced() {
        // First two bytes of a three-byte sequence
        let text = decode_text_lossy(&[b'a', 0xE2, 0x82]);
        assert_eq!(text.as_str(), "a\u{FFFD}");
    }

    #[test]
    fn test_all_invalid_fits_capacity() {
        let payload = [0x80u8; MAX_TEXT_LEN];
        let text = decode_text_lossy(&payload);
        assert_eq!(text.chars().count(), MAX_TEXT_LEN);
        assert!(text.chars().all(|c| c == char::REPLACEMENT_CHARACTER));
    }

    #[test]
    fn test_empty_payload() {
        assert!(decode_text_lossy(&[]).is_empty());
        assert!(decode_text_lossy(&[0; 8]).is_empty());
    }
}
