//! Host link over the vendor HID report channel.
//!
//! Outbound: button press/release edges, one report each.
//! Inbound: display text from the host. Unknown reports are dropped.

use core::future::Future;

use pad_proto::{decode, encode_button_event, Message, Report};

use crate::input::{ButtonEdge, EdgeDetector};

/// Error type for report transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportError {
    /// USB/communication I/O error.
    Io,
    /// Endpoint disabled by the host.
    Disabled,
}

/// Error type for host link operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkError {
    /// Button index does not fit the one-byte id of a button report.
    ButtonOutOfRange,
    /// Error from the underlying transport.
    Transport(TransportError),
}

impl From<TransportError> for LinkError {
    fn from(err: TransportError) -> Self {
        Self::Transport(err)
    }
}

impl core::fmt::Display for LinkError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ButtonOutOfRange => write!(f, "button index out of range for a report"),
            Self::Transport(TransportError::Io) => write!(f, "report transport I/O error"),
            Self::Transport(TransportError::Disabled) => write!(f, "report endpoint disabled"),
        }
    }
}

/// A channel of fixed-size reports to and from the host.
pub trait ReportTransport {
    /// Send one report, waiting for the endpoint if needed.
    fn send_report(&mut self, report: &Report) -> impl Future<Output = Result<(), TransportError>>;

    /// Take the next received report, if one is waiting. Never blocks.
    fn receive_report(&mut self) -> Option<Report>;
}

/// Pumps button edges to the host and decodes what the host sends back.
pub struct HostLink<T, const N: usize> {
    transport: T,
    edges: EdgeDetector<N>,
}

impl<T: ReportTransport, const N: usize> HostLink<T, N> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            edges: EdgeDetector::new(),
        }
    }

    /// Send one button edge.
    ///
    /// # Errors
    ///
    /// [`LinkError::ButtonOutOfRange`] if `button` does not fit in a byte,
    /// otherwise whatever the transport reports.
    pub async fn send_button_event(&mut self, edge: ButtonEdge) -> Result<(), LinkError> {
        let id = u8::try_from(edge.button).map_err(|_| LinkError::ButtonOutOfRange)?;
        self.transport
            .send_report(&encode_button_event(id, edge.pressed))
            .await?;
        Ok(())
    }

    /// Compare `levels` with the levels already delivered and send one report
    /// per change.
    ///
    /// Returns the number of reports sent. Every change is attempted even
    /// after a failure, and the first error is returned. A button whose report
    /// failed keeps its old level, so the next call sends it again.
    pub async fn send_levels(&mut self, levels: &[bool; N]) -> Result<usize, LinkError> {
        let mut sent = 0;
        let mut first_error = None;
        for edge in self.edges.pending(levels) {
            match self.send_button_event(edge).await {
                Ok(()) => {
                    self.edges.record(edge);
                    sent += 1;
                }
                Err(e) => {
                    // Retrying cannot fix an id that does not fit the report
                    if e == LinkError::ButtonOutOfRange {
                        self.edges.record(edge);
                    }
                    first_error.get_or_insert(e);
                }
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(sent),
        }
    }

    /// Decode the next inbound report, skipping anything unrecognized.
    pub fn poll_inbound(&mut self) -> Option<Message> {
        while let Some(report) = self.transport.receive_report() {
            if let Some(message) = decode(report.as_bytes()) {
                return Some(message);
            }
        }
        None
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Decompose the link into its transport.
    pub fn into_transport(self) -> T {
        self.transport
    }
}
