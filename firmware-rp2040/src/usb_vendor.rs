//! USB vendor HID report transport.
//!
//! One 64-byte input report and one 64-byte output report on a vendor
//! usage page. The host opens the interface by VID/PID and usage page.

use defmt::warn;
use embassy_rp::peripherals::USB;
use embassy_rp::usb::Driver;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_usb::class::hid::{
    Config, HidBootProtocol, HidReader, HidReaderWriter, HidSubclass, HidWriter, ReadError, State,
};
use embassy_usb::driver::EndpointError;
use embassy_usb::Builder;
use pad_core::{ReportTransport, TransportError};
use pad_proto::{Report, REPORT_SIZE};

/// Received reports waiting to be decoded.
pub const INBOUND_DEPTH: usize = 4;

pub type InboundReports = Channel<CriticalSectionRawMutex, Report, INBOUND_DEPTH>;
pub type VendorReader<'d> = HidReader<'d, Driver<'d, USB>, REPORT_SIZE>;
pub type VendorWriter<'d> = HidWriter<'d, Driver<'d, USB>, REPORT_SIZE>;

/// Vendor-defined HID Report Descriptor (usage page 0xFF00).
pub const REPORT_DESCRIPTOR: &[u8] = &[
    0x06, 0x00, 0xFF, // Usage Page (Vendor Defined 0xFF00)
    0x09, 0x01, // Usage (0x01)
    0xA1, 0x01, // Collection (Application)
    //
    // --- Device -> host ---
    0x09, 0x02, //   Usage (0x02)
    0x15, 0x00, //   Logical Minimum (0)
    0x26, 0xFF, 0x00, //   Logical Maximum (255)
    0x75, 0x08, //   Report Size (8)
    0x95, 0x40, //   Report Count (64)
    0x81, 0x02, //   Input (Data, Variable, Absolute)
    //
    // --- Host -> device ---
    0x09, 0x03, //   Usage (0x03)
    0x15, 0x00, //   Logical Minimum (0)
    0x26, 0xFF, 0x00, //   Logical Maximum (255)
    0x75, 0x08, //   Report Size (8)
    0x95, 0x40, //   Report Count (64)
    0x91, 0x02, //   Output (Data, Variable, Absolute)
    //
    0xC0, // End Collection
];

/// Report transport over the vendor HID interface.
///
/// Sending writes the input endpoint directly. Receiving drains the queue
/// filled by [`run_vendor_reader`].
pub struct UsbVendorTransport<'d> {
    writer: VendorWriter<'d>,
    inbound: &'d InboundReports,
}

impl<'d> UsbVendorTransport<'d> {
    pub fn new(writer: VendorWriter<'d>, inbound: &'d InboundReports) -> Self {
        Self { writer, inbound }
    }

    /// Wait until the device is ready (USB enumerated).
    pub async fn wait_ready(&mut self) {
        self.writer.ready().await;
    }
}

impl ReportTransport for UsbVendorTransport<'_> {
    async fn send_report(&mut self, report: &Report) -> Result<(), TransportError> {
        self.writer
            .write(report.as_bytes())
            .await
            .map_err(|e| match e {
                EndpointError::Disabled => TransportError::Disabled,
                EndpointError::BufferOverflow => TransportError::Io,
            })
    }

    fn receive_report(&mut self) -> Option<Report> {
        self.inbound.try_receive().ok()
    }
}

/// Read output reports from the host forever, queueing each one.
///
/// Reports that arrive while the queue is full are dropped.
pub async fn run_vendor_reader(mut reader: VendorReader<'_>, inbound: &InboundReports) -> ! {
    let mut buf = [0u8; REPORT_SIZE];
    loop {
        match reader.read(&mut buf).await {
            Ok(len) => {
                if inbound.try_send(Report::from_slice(&buf[..len])).is_err() {
                    warn!("Inbound report queue full, dropping report");
                }
            }
            Err(ReadError::Disabled) => reader.ready().await,
            Err(e) => warn!("Vendor HID read error: {:?}", e),
        }
    }
}

/// Configure the vendor HID class in the USB builder.
///
/// Returns the reader and writer halves for use by the application.
pub fn configure_usb_vendor<'d>(
    builder: &mut Builder<'d, Driver<'d, USB>>,
    state: &'d mut State<'d>,
) -> (VendorReader<'d>, VendorWriter<'d>) {
    let config = Config {
        report_descriptor: REPORT_DESCRIPTOR,
        request_handler: None,
        poll_ms: 1,
        max_packet_size: REPORT_SIZE as u16,
        hid_subclass: HidSubclass::No,
        hid_boot_protocol: HidBootProtocol::None,
    };

    HidReaderWriter::<_, REPORT_SIZE, REPORT_SIZE>::new(builder, state, config).split()
}
