//! `application/x-www-form-urlencoded` bodies.
//!
//! Pairs are joined as `key=value&key=value`. No percent-encoding is applied;
//! keys and values must already be encoded by the caller.

use crate::network::error::Error;
use heapless::Vec;

/// Content type sent with form bodies.
pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A single form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Param<'a> {
    /// Field name.
    pub key: &'a str,
    /// Field value.
    pub value: &'a str,
}

impl<'a> Param<'a> {
    /// Create a field.
    pub const fn new(key: &'a str, value: &'a str) -> Self {
        Self { key, value }
    }
}

impl<'a> From<(&'a str, &'a str)> for Param<'a> {
    fn from((key, value): (&'a str, &'a str)) -> Self {
        Self { key, value }
    }
}

/// Encode `params` into a bounded buffer.
///
/// Returns [`Error::TooLong`] when the encoded body does not fit in `N` bytes.
pub fn encode<const N: usize>(params: &[Param<'_>]) -> Result<Vec<u8, N>, Error> {
    let mut body = Vec::new();
    for (i, param) in params.iter().enumerate() {
        if i > 0 {
            body.push(b'&').map_err(|_| Error::TooLong)?;
        }
        body.extend_from_slice(param.key.as_bytes()).map_err(|_| Error::TooLong)?;
        body.push(b'=').map_err(|_| Error::TooLong)?;
        body.extend_from_slice(param.value.as_bytes()).map_err(|_| Error::TooLong)?;
    }
    Ok(body)
}
