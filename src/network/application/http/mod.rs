//! HTTP/1.1 request helper for embedded systems.
//!
//! This module provides a lightweight HTTP client designed for boards whose
//! networking library hands out a stream socket (connect, available, read,
//! write, close) and nothing more. It writes request heads, reads whatever the
//! server sends back into a caller-owned buffer, and leaves parsing to the
//! caller.
//!
//! # Features
//!
//! - Bounded connection retries with a fixed pause
//! - GET, raw-payload POST, form POST and JSON POST
//! - Fixed-size buffers with an explicit [`TooLong`](crate::network::error::Error::TooLong)
//!   error instead of silent truncation
//! - Timeout-bounded response reads with a configurable completion rule
//!
//! Status lines, headers, chunked bodies and TLS are not handled.
//!
//! # Usage
//!
//! ```rust,no_run
//! use r4_http::network::application::http::{Client, Param};
//! # use r4_http::network::{Close, Connect, Read, Socket, Write};
//! # struct Board;
//! # impl Read for Board {
//! #     type Error = ();
//! #     fn available(&mut self) -> Result<usize, Self::Error> { Ok(0) }
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
//! # }
//! # impl Write for Board {
//! #     type Error = ();
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl Close for Board {
//! #     type Error = ();
//! #     fn close(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl Connect for Board {
//! #     type Error = ();
//! #     fn connect(&mut self, _host: &str, _port: u16) -> Result<(), Self::Error> { Ok(()) }
//! #     fn is_connected(&mut self) -> bool { true }
//! # }
//! # impl Socket for Board {}
//! # struct Delay;
//! # impl r4_http::time::DelayNs for Delay { fn delay_ns(&mut self, _ns: u32) {} }
//! # struct Millis(u64);
//! # impl r4_http::time::Clock for Millis { fn now_ms(&mut self) -> u64 { self.0 += 1; self.0 } }
//!
//! let mut client = Client::new(Board, Delay, Millis(0));
//! client.connect("192.168.1.20", 8080)?;
//! client.post_form(
//!     "192.168.1.20",
//!     "/readings",
//!     &[Param::new("temp", "21.5"), Param::new("hum", "40")],
//! )?;
//!
//! let mut response = [0u8; 512];
//! let len = client.read_response(&mut response)?;
//! client.disconnect(true)?;
//! # let _ = len;
//! # Ok::<(), r4_http::network::error::Error>(())
//! ```

/// HTTP client implementation and supporting types.
///
/// Contains the main [`Client`](client::Client) struct.
pub mod client;

/// Client options and the response read policy.
pub mod config;

/// Form-urlencoded body encoding.
pub mod form;

pub use client::{Client, State};
pub use config::{Config, ReadPolicy};
pub use form::Param;
