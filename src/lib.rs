//! # r4-http - HTTP request helper for microcontroller boards
//!
//! A small, blocking HTTP/1.1 client for boards such as the Arduino UNO R4 WiFi
//! whose networking library exposes a stream socket and nothing more. The
//! helper connects with bounded retries, writes GET/POST requests and reads the
//! raw response into a fixed-size buffer until the server pauses or a timeout
//! elapses. Parsing the response is left to the caller.
//!
//! ## Features
//!
//! ### Network
//! - **Socket traits**: the minimal connect/available/read/write/close surface
//!   a platform socket must provide
//! - **HTTP Client**: GET, raw POST, form POST and JSON POST over any socket
//! - **`std` adapter**: a `TcpStream`-backed socket for hosts and tests
//!
//! ### Time
//! - A millisecond [`Clock`](time::Clock) for read windows and
//!   [`embedded_hal`] delays for retry pauses
//!
//! ### Utilities
//! - Random float generation for simulated sensor readings
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! r4-http = "0.1.0"
//! ```
//!
//! ### Basic HTTP Client Example
//!
//! ```rust,no_run
//! use r4_http::network::application::http::Client;
//! # use r4_http::network::{Close, Connect, Read, Socket, Write};
//! # struct WifiSocket;
//! # impl Read for WifiSocket {
//! #     type Error = ();
//! #     fn available(&mut self) -> Result<usize, Self::Error> { Ok(0) }
//! #     fn read(&mut self, _buf: &mut [u8]) -> Result<usize, Self::Error> { Ok(0) }
//! # }
//! # impl Write for WifiSocket {
//! #     type Error = ();
//! #     fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> { Ok(buf.len()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl Close for WifiSocket {
//! #     type Error = ();
//! #     fn close(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # impl Connect for WifiSocket {
//! #     type Error = ();
//! #     fn connect(&mut self, _host: &str, _port: u16) -> Result<(), Self::Error> { Ok(()) }
//! #     fn is_connected(&mut self) -> bool { true }
//! # }
//! # impl Socket for WifiSocket {}
//! # struct Delay;
//! # impl r4_http::time::DelayNs for Delay { fn delay_ns(&mut self, _ns: u32) {} }
//! # struct Millis(u64);
//! # impl r4_http::time::Clock for Millis { fn now_ms(&mut self) -> u64 { self.0 += 1; self.0 } }
//!
//! let mut client = Client::new(WifiSocket, Delay, Millis(0));
//! client.connect("example.com", 80)?;
//! client.get("example.com", "/api/data")?;
//!
//! let mut buffer = [0u8; 1024];
//! let len = client.read_response(&mut buffer)?;
//! client.disconnect(true)?;
//! # let _ = len;
//! # Ok::<(), r4_http::network::error::Error>(())
//! ```
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based IoT devices (Raspberry Pi, etc.)
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable the `TcpStream` socket adapter and std clocks (default: disabled)
//! - `defmt`: Log through defmt for embedded debugging
//! - `log`: Log through the `log` facade

#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

// Must come first so the logging macros are visible to every module below.
mod fmt;

/// Network abstraction layer: socket traits, errors and the HTTP client.
pub mod network;

/// Clocks and delays for the blocking retry and read loops.
pub mod time;

/// Helpers for firmware built on this crate.
pub mod util;
