use super::config::{Config, ReadPolicy};
use super::form::{self, Param};
use crate::network::error::Error;
use crate::network::{Close, Connect, Read, Socket, Write};
use crate::time::{Clock, DelayNs};
use core::fmt::{self, Write as _};
use heapless::{String, Vec};
use serde::Serialize;

/// Longest single request line, CRLF excluded.
pub const MAX_LINE_LEN: usize = 256;
/// Longest request head (request line, headers and the blank line).
pub const MAX_HEAD_LEN: usize = 1024;
/// Longest body built by [`Client::post_form`] and [`Client::post_json`].
pub const MAX_BODY_LEN: usize = 1024;
/// Content type sent by [`Client::post_json`].
pub const JSON_CONTENT_TYPE: &str = "application/json";

const CRLF: &[u8] = b"\r\n";
const SCRATCH_LEN: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Method {
    Get,
    Post,
}

impl Method {
    fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

/// Connection state as reported by the socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// No open connection; requests are refused.
    Disconnected,
    /// Connected; requests may be sent.
    Connected,
}

/// A blocking HTTP/1.1 client over a single stream socket.
///
/// Use strictly in the order `connect`, one request, `read_response`,
/// `disconnect`. The socket, the retry delay and the clock are injected so the
/// same client runs on a board and against fakes in tests.
#[derive(Debug)]
pub struct Client<S, D, K> {
    socket: S,
    delay: D,
    clock: K,
    config: Config,
}

impl<S, D, K> Client<S, D, K>
where
    S: Socket,
    D: DelayNs,
    K: Clock,
{
    /// Create a client with [`Config::default`].
    pub fn new(socket: S, delay: D, clock: K) -> Self {
        Self::with_config(socket, delay, clock, Config::default())
    }

    /// Create a client with explicit options.
    pub fn with_config(socket: S, delay: D, clock: K, config: Config) -> Self {
        Self {
            socket,
            delay,
            clock,
            config,
        }
    }

    /// The active options.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Borrow the underlying socket.
    pub fn socket(&self) -> &S {
        &self.socket
    }

    /// Mutably borrow the underlying socket.
    pub fn socket_mut(&mut self) -> &mut S {
        &mut self.socket
    }

    /// Give the socket back.
    pub fn into_inner(self) -> S {
        self.socket
    }

    /// Whether the socket reports an open connection.
    pub fn is_connected(&mut self) -> bool {
        self.socket.is_connected()
    }

    /// Current connection state.
    pub fn state(&mut self) -> State {
        if self.is_connected() {
            State::Connected
        } else {
            State::Disconnected
        }
    }

    /// Connect to `host:port`, retrying with a fixed pause.
    ///
    /// Makes up to [`Config::connect_attempts`] attempts and returns on the
    /// first success. Wireless links routinely need a few tries, but the total
    /// wait is bounded by `attempts * connect_retry_delay_ms`.
    pub fn connect(&mut self, host: &str, port: u16) -> Result<(), Error> {
        let attempts = self.config.attempts();
        for attempt in 1..=attempts {
            if self.socket.connect(host, port).is_ok() {
                debug!("connected to {}:{} on attempt {}", host, port, attempt);
                return Ok(());
            }

            warn!("connect attempt {} of {} to {} failed", attempt, attempts, host);
            if attempt < attempts {
                self.delay.delay_ms(self.config.connect_retry_delay_ms);
            }
        }

        error!("server connection timeout");
        Err(Error::ConnectionTimeout)
    }

    /// Close the connection.
    ///
    /// With `flush`, unread inbound bytes are drained first so a later
    /// connection on the same socket object does not see stale data. Returns the
    /// number of bytes discarded.
    pub fn disconnect(&mut self, flush: bool) -> Result<usize, Error> {
        let drained = if flush { self.drain() } else { Ok(0) };
        // The socket is closed even when draining fails.
        let closed = self.socket.close().map_err(|_| Error::CloseError);
        let drained = drained?;
        closed?;
        debug!("disconnected, {} unread bytes discarded", drained);
        Ok(drained)
    }

    /// [`Client::disconnect`] with `flush = true`.
    pub fn disconnect_flushed(&mut self) -> Result<usize, Error> {
        self.disconnect(true)
    }

    /// Send a GET request.
    pub fn get(&mut self, host: &str, path: &str) -> Result<(), Error> {
        self.send(Method::Get, host, path, None)
    }

    /// Send a POST request with a pre-built payload.
    pub fn post(
        &mut self,
        host: &str,
        path: &str,
        payload: &[u8],
        content_type: &str,
    ) -> Result<(), Error> {
        self.send(Method::Post, host, path, Some((content_type, payload)))
    }

    /// Send a POST request with a form-encoded body.
    pub fn post_form(&mut self, host: &str, path: &str, params: &[Param<'_>]) -> Result<(), Error> {
        let body = form::encode::<MAX_BODY_LEN>(params)?;
        self.post(host, path, &body, form::CONTENT_TYPE)
    }

    /// Send a POST request with `value` serialized as JSON.
    pub fn post_json<T>(&mut self, host: &str, path: &str, value: &T) -> Result<(), Error>
    where
        T: Serialize + ?Sized,
    {
        let mut body = [0u8; MAX_BODY_LEN];
        let len = serde_json_core::to_slice(value, &mut body).map_err(|e| match e {
            serde_json_core::ser::Error::BufferFull => Error::TooLong,
            #[allow(unreachable_patterns)]
            _ => Error::SerializeError,
        })?;
        self.post(host, path, &body[..len], JSON_CONTENT_TYPE)
    }

    /// Read the raw response into `buf` and null-terminate it.
    ///
    /// At most `buf.len() - 1` bytes are accepted. Completion follows
    /// [`Config::read_policy`]; the whole call is bounded by
    /// [`Config::response_timeout_ms`]. Returns the number of bytes read, so
    /// `buf[n] == 0` on success.
    ///
    /// Under the default [`ReadPolicy::FirstPause`] the call returns as soon as
    /// the socket has nothing buffered, which does not honor `Content-Length`.
    pub fn read_response(&mut self, buf: &mut [u8]) -> Result<usize, Error> {
        let Some(limit) = buf.len().checked_sub(1) else {
            error!("response buffer overflow");
            return Err(Error::BufferOverflow);
        };

        let timeout = u64::from(self.config.response_timeout_ms);
        let idle_gap = u64::from(self.config.idle_gap_ms);
        let start = self.clock.now_ms();
        let mut last_rx = start;
        let mut index = 0;

        loop {
            loop {
                let available = self.socket.available().map_err(|_| Error::ReadError)?;
                if available == 0 {
                    break;
                }
                if index >= limit {
                    buf[index] = 0;
                    error!("response buffer overflow");
                    return Err(Error::BufferOverflow);
                }

                let want = available.min(limit - index);
                let n = self
                    .socket
                    .read(&mut buf[index..index + want])
                    .map_err(|_| Error::ReadError)?;
                if n == 0 {
                    break;
                }
                index += n;
                last_rx = self.clock.now_ms();
            }

            if index > 0 {
                let complete = match self.config.read_policy {
                    ReadPolicy::FirstPause => true,
                    ReadPolicy::IdleGap => self.clock.elapsed_ms(last_rx) >= idle_gap,
                    ReadPolicy::PeerClose => !self.socket.is_connected(),
                };
                if complete {
                    break;
                }
            }

            if self.clock.elapsed_ms(start) >= timeout {
                if index == 0 {
                    error!("server response timeout");
                    return Err(Error::ResponseTimeout);
                }
                warn!("read window elapsed with {} bytes buffered", index);
                break;
            }
        }

        buf[index] = 0;
        debug!("read {} response bytes", index);
        Ok(index)
    }

    fn send(
        &mut self,
        method: Method,
        host: &str,
        path: &str,
        body: Option<(&str, &[u8])>,
    ) -> Result<(), Error> {
        if !self.socket.is_connected() {
            warn!("{} {} skipped: not connected", method.as_str(), path);
            return Err(Error::NotConnected);
        }

        // The head is built in full before anything is written, so an
        // over-long line never leaves a partial request on the wire.
        let head = self.build_head(method, host, path, body)?;
        self.write_all(&head)?;
        if let Some((_, payload)) = body {
            self.write_all(payload)?;
        }
        self.socket.flush().map_err(|_| Error::WriteError)?;

        debug!("{} {} sent to {}", method.as_str(), path, host);
        Ok(())
    }

    fn build_head(
        &self,
        method: Method,
        host: &str,
        path: &str,
        body: Option<(&str, &[u8])>,
    ) -> Result<Vec<u8, MAX_HEAD_LEN>, Error> {
        let mut head = Vec::new();
        push_line(&mut head, format_args!("{} {} HTTP/1.1", method.as_str(), path))?;
        push_line(&mut head, format_args!("Host: {}", host))?;
        push_line(
            &mut head,
            format_args!("User-Agent: {}", self.config.user_agent),
        )?;
        if !self.config.keep_alive {
            push_line(&mut head, format_args!("Connection: close"))?;
        }
        if let Some((content_type, payload)) = body {
            push_line(&mut head, format_args!("Content-Type: {}", content_type))?;
            push_line(&mut head, format_args!("Content-Length: {}", payload.len()))?;
        }
        head.extend_from_slice(CRLF).map_err(|_| Error::TooLong)?;
        Ok(head)
    }

    fn write_all(&mut self, mut buf: &[u8]) -> Result<(), Error> {
        while !buf.is_empty() {
            match self.socket.write(buf) {
                Ok(0) | Err(_) => return Err(Error::WriteError),
                Ok(n) => buf = &buf[n..],
            }
        }
        Ok(())
    }

    fn drain(&mut self) -> Result<usize, Error> {
        let timeout = u64::from(self.config.response_timeout_ms);
        let start = self.clock.now_ms();
        let mut scratch = [0u8; SCRATCH_LEN];
        let mut drained = 0;

        loop {
            let available = self.socket.available().map_err(|_| Error::ReadError)?;
            if available == 0 {
                break;
            }
            if self.clock.elapsed_ms(start) >= timeout {
                warn!("drain stopped after {} bytes, peer still sending", drained);
                break;
            }

            let want = available.min(scratch.len());
            let n = self
                .socket
                .read(&mut scratch[..want])
                .map_err(|_| Error::ReadError)?;
            if n == 0 {
                break;
            }
            drained += n;
        }

        Ok(drained)
    }
}

/// Format one header line into `head`, followed by CRLF.
fn push_line<const N: usize>(head: &mut Vec<u8, N>, args: fmt::Arguments<'_>) -> Result<(), Error> {
    let mut line: String<MAX_LINE_LEN> = String::new();
    line.write_fmt(args).map_err(|_| Error::TooLong)?;
    head.extend_from_slice(line.as_bytes()).map_err(|_| Error::TooLong)?;
    head.extend_from_slice(CRLF).map_err(|_| Error::TooLong)
}
