//! Report buffer and message type tags.

/// Size of every report exchanged over the vendor HID interface.
pub const REPORT_SIZE: usize = 64;

/// Largest text payload a display report can carry (everything after the type byte).
pub const MAX_TEXT_LEN: usize = REPORT_SIZE - 1;

/// Message type tag stored in byte 0 of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum MessageType {
    /// Text to show on the pad display (host -> device).
    DisplayText = 0x01,
    /// Button press/release edge (device -> host).
    Button = 0x02,
}

impl MessageType {
    /// Look up the message type for a tag byte.
    #[inline]
    #[must_use]
    pub const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0x01 => Some(Self::DisplayText),
            0x02 => Some(Self::Button),
            _ => None,
        }
    }

    /// The tag byte written at offset 0.
    #[inline]
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for MessageType {
    type Error = u8;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_byte(byte).ok_or(byte)
    }
}

/// A fixed-size, zero-padded HID report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Report([u8; REPORT_SIZE]);

impl Report {
    /// An all-zero report.
    #[must_use]
    pub const fn zeroed() -> Self {
        Self([0; REPORT_SIZE])
    }

    /// Create a report carrying only a message type tag.
    #[must_use]
    pub const fn with_type(message_type: MessageType) -> Self {
        let mut bytes = [0; REPORT_SIZE];
        bytes[0] = message_type.as_byte();
        Self(bytes)
    }

    /// Copy received bytes into a report.
    ///
    /// Short input is zero-padded, anything past [`REPORT_SIZE`] is dropped.
    #[must_use]
    pub fn from_slice(data: &[u8]) -> Self {
        let mut report = Self::zeroed();
        let len = data.len().min(REPORT_SIZE);
        report.0[..len].copy_from_slice(&data[..len]);
        report
    }

    /// The raw report bytes.
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; REPORT_SIZE] {
        &self.0
    }

    /// Mutable access to the raw bytes, for transports that read in place.
    #[inline]
    pub fn as_mut_bytes(&mut self) -> &mut [u8; REPORT_SIZE] {
        &mut self.0
    }

    /// The message type tag, if it is one we know.
    #[inline]
    #[must_use]
    pub const fn message_type(&self) -> Option<MessageType> {
        MessageType::from_byte(self.0[0])
    }

    /// Everything after the type byte.
    #[inline]
    #[must_use]
    pub fn payload(&self) -> &[u8] {
        &self.0[1..]
    }
}

impl Default for Report {
    fn default() -> Self {
        Self::zeroed()
    }
}

impl From<[u8; REPORT_SIZE]> for Report {
    fn from(bytes: [u8; REPORT_SIZE]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_type_tags() {
        assert_eq!(MessageType::DisplayText.as_byte(), 0x01);
        assert_eq!(MessageType::Button.as_byte(), 0x02);
        assert_eq!(MessageType::try_from(0x02), Ok(MessageType::Button));
        assert_eq!(MessageType::try_from(0x7F), Err(0x7F));
    }

    #[test]
    fn test_from_slice_pads_short_input() {
        let report = Report::from_slice(&[0x01, b'A']);
        assert_eq!(report.message_type(), Some(MessageType::DisplayText));
        assert_eq!(report.payload()[0], b'A');
        assert!(report.payload()[1..].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_from_slice_truncates_long_input() {
        let data = [0xAB; REPORT_SIZE + 10];
        let report = Report::from_slice(&data);
        assert_eq!(report.as_bytes(), &[0xAB; REPORT_SIZE]);
    }

    #[test]
    fn test_with_type_is_zero_padded() {
        let report = Report::with_type(MessageType::Button);
        assert_eq!(report.as_bytes()[0], 0x02);
        assert_eq!(report.payload().len(), MAX_TEXT_LEN);
        assert!(report.payload().iter().all(|&b| b == 0));
    }
}
