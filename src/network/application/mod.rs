//! # Application Layer Network Protocols
//!
//! Protocol clients that work with any type implementing
//! [`Socket`](crate::network::Socket). They use fixed-size buffers and report
//! failures through [`Error`](crate::network::error::Error).

/// HTTP client implementation.
///
/// Provides a simple HTTP/1.1 request helper suitable for embedded systems,
/// supporting GET and POST with raw, form and JSON bodies.
pub mod http;
