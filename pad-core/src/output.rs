//! Key emitter trait and error types.

use core::future::Future;

use crate::keys::Combo;

/// Error type for key output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputError {
    /// USB/communication I/O error.
    Io,
    /// Device not ready (e.g., USB not enumerated).
    NotReady,
    /// Endpoint disabled by the host.
    Disabled,
}

impl core::fmt::Display for OutputError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Io => write!(f, "key output I/O error"),
            Self::NotReady => write!(f, "key output not ready"),
            Self::Disabled => write!(f, "key output endpoint disabled"),
        }
    }
}

/// Async trait for anything that can type a key combination.
///
/// One call to [`send`](KeyEmitter::send) is one key-down of every key in
/// the combo followed by the release of all of them. Implementations must
/// not allocate.
pub trait KeyEmitter {
    /// Press and release `combo`.
    fn send(&mut self, combo: &Combo) -> impl Future<Output = Result<(), OutputError>>;
}

impl<E: KeyEmitter> KeyEmitter for &mut E {
    fn send(&mut self, combo: &Combo) -> impl Future<Output = Result<(), OutputError>> {
        (**self).send(combo)
    }
}
