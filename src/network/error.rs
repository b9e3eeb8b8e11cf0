//! Common error types for network operations

use core::fmt;

/// A common error type for network operations.
///
/// This enum defines the failures the HTTP helper can report. It is designed to
/// be simple and portable for `no_std` environments, so socket-specific errors
/// are collapsed into [`Error::ReadError`] and [`Error::WriteError`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// Every connection attempt failed.
    ConnectionTimeout,
    /// No response byte arrived within the read window.
    ResponseTimeout,
    /// The response did not fit in the caller's buffer.
    BufferOverflow,
    /// A request was attempted while the socket is not connected.
    NotConnected,
    /// A request line or body exceeds its fixed bound.
    TooLong,
    /// An error occurred during a write operation.
    WriteError,
    /// An error occurred during a read operation.
    ReadError,
    /// The socket refused to close.
    CloseError,
    /// A value could not be serialized or a config blob could not be parsed.
    SerializeError,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Error::ConnectionTimeout => "server connection timeout",
            Error::ResponseTimeout => "server response timeout",
            Error::BufferOverflow => "response buffer overflow",
            Error::NotConnected => "not connected",
            Error::TooLong => "request exceeds buffer bound",
            Error::WriteError => "socket write failed",
            Error::ReadError => "socket read failed",
            Error::CloseError => "socket close failed",
            Error::SerializeError => "serialization failed",
        };
        f.write_str(msg)
    }
}

impl core::error::Error for Error {}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::ConnectionTimeout => defmt::write!(f, "ConnectionTimeout"),
            Error::ResponseTimeout => defmt::write!(f, "ResponseTimeout"),
            Error::BufferOverflow => defmt::write!(f, "BufferOverflow"),
            Error::NotConnected => defmt::write!(f, "NotConnected"),
            Error::TooLong => defmt::write!(f, "TooLong"),
            Error::WriteError => defmt::write!(f, "WriteError"),
            Error::ReadError => defmt::write!(f, "ReadError"),
            Error::CloseError => defmt::write!(f, "CloseError"),
            Error::SerializeError => defmt::write!(f, "SerializeError"),
        }
    }
}
