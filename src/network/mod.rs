//! A stream socket abstraction for embedded systems
//!
//! The HTTP helper never talks to a radio or a TCP stack directly. It consumes
//! the small surface below, which the platform's networking library (a WiFi
//! module driver, an AT-command modem, `std::net` on a host) implements for its
//! own socket type.
//!

#![deny(unsafe_code)]

/// Common error types for network operations
pub mod error;

/// Application layer protocols built on the socket traits
pub mod application;

/// `std::net` adapter for hosts and integration tests
#[cfg(feature = "std")]
pub mod std_net;

/// Re-exports of common traits
pub mod prelude {
    pub use super::{Close, Connect, Read, Socket, Write};
}

/// Inbound half of a stream socket.
pub trait Read {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Number of bytes that can be read right now without blocking.
    fn available(&mut self) -> Result<usize, Self::Error>;
    /// Read already buffered data into `buf`, returning the number of bytes copied.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error>;
}

/// Outbound half of a stream socket.
pub trait Write {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Write data to the socket, returning the number of bytes accepted.
    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error>;
    /// Flush the write buffer
    fn flush(&mut self) -> Result<(), Self::Error>;
}

/// Closing a socket leaves the object reusable for a later `connect`.
pub trait Close {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Close the connection
    fn close(&mut self) -> Result<(), Self::Error>;
}

/// Establishing a connection on an existing socket object.
pub trait Connect {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Open a connection to `host` (an IP literal or a name the platform resolves).
    fn connect(&mut self, host: &str, port: u16) -> Result<(), Self::Error>;
    /// Whether the connection is currently open.
    fn is_connected(&mut self) -> bool;
}

/// A duplex, connection-oriented stream socket.
pub trait Socket: Read + Write + Close + Connect {}

impl<T: Socket + ?Sized> Read for &mut T {
    type Error = <T as Read>::Error;

    fn available(&mut self) -> Result<usize, Self::Error> {
        Read::available(&mut **self)
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        Read::read(&mut **self, buf)
    }
}

impl<T: Socket + ?Sized> Write for &mut T {
    type Error = <T as Write>::Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        Write::write(&mut **self, buf)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Write::flush(&mut **self)
    }
}

impl<T: Socket + ?Sized> Close for &mut T {
    type Error = <T as Close>::Error;

    fn close(&mut self) -> Result<(), Self::Error> {
        Close::close(&mut **self)
    }
}

impl<T: Socket + ?Sized> Connect for &mut T {
    type Error = <T as Connect>::Error;

    fn connect(&mut self, host: &str, port: u16) -> Result<(), Self::Error> {
        Connect::connect(&mut **self, host, port)
    }

    fn is_connected(&mut self) -> bool {
        Connect::is_connected(&mut **self)
    }
}

// Lets a client borrow a socket the firmware keeps owning.
impl<T: Socket + ?Sized> Socket for &mut T {}
