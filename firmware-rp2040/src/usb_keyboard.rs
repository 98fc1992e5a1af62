//! USB HID keyboard output.

use defmt::trace;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_usb::class::hid::{Config, HidBootProtocol, HidSubclass, HidWriter, State};
use embassy_usb::driver::EndpointError;
use embassy_usb::Builder;
use pad_core::{Combo, KeyEmitter, OutputError};
use usbd_hid::descriptor::{KeyboardReport, SerializedDescriptor};

/// Boot keyboard report size: modifiers, reserved, six keys.
pub const KEYBOARD_REPORT_SIZE: usize = 8;

pub type KeyboardWriter<'d> = HidWriter<'d, Driver<'d, USB>, KEYBOARD_REPORT_SIZE>;

const RELEASE_ALL: KeyboardReport = KeyboardReport {
    modifier: 0,
    reserved: 0,
    leds: 0,
    keycodes: [0; 6],
};

fn keyboard_report(combo: &Combo) -> KeyboardReport {
    KeyboardReport {
        modifier: combo.modifier_bits(),
        reserved: 0,
        leds: 0,
        keycodes: combo.key_bytes(),
    }
}

/// USB HID keyboard.
///
/// Every combo is sent as one report with all keys down, followed by an
/// all-released report.
pub struct UsbKeyboard<'d> {
    writer: KeyboardWriter<'d>,
    ready: bool,
}

impl<'d> UsbKeyboard<'d> {
    pub fn new(writer: KeyboardWriter<'d>) -> Self {
        Self {
            writer,
            ready: false,
        }
    }

    /// Wait until the device is ready (USB enumerated).
    pub async fn wait_ready(&mut self) {
        self.writer.ready().await;
        self.ready = true;
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    async fn write(&mut self, report: &KeyboardReport) -> Result<(), OutputError> {
        self.writer
            .write_serialize(report)
            .await
            .map_err(|e| match e {
                EndpointError::Disabled => OutputError::Disabled,
                EndpointError::BufferOverflow => OutputError::Io,
            })
    }
}

impl KeyEmitter for UsbKeyboard<'_> {
    async fn send(&mut self, combo: &Combo) -> Result<(), OutputError> {
        if !self.ready {
            return Err(OutputError::NotReady);
        }
        trace!("keys down: {}", combo);
        self.write(&keyboard_report(combo)).await?;
        self.write(&RELEASE_ALL).await
    }
}

/// Configure the boot keyboard HID class in the USB builder.
///
/// Returns the HID writer for use by the application.
pub fn configure_usb_keyboard<'d>(
    builder: &mut Builder<'d, Driver<'d, USB>>,
    state: &'d mut State<'d>,
) -> KeyboardWriter<'d> {
    let config = Config {
        report_descriptor: KeyboardReport::desc(),
        request_handler: None,
        poll_ms: 1,
        max_packet_size: KEYBOARD_REPORT_SIZE as u16,
        hid_subclass: HidSubclass::Boot,
        hid_boot_protocol: HidBootProtocol::Keyboard,
    };

    HidWriter::new(builder, state, config)
}
