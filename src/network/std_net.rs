//! [`Socket`](super::Socket) over [`std::net::TcpStream`].
//!
//! Lets the HTTP helper run on a host (Raspberry Pi class devices, CI) with the
//! same semantics as on a board: `available` reports what the kernel already
//! buffered and never blocks.

use super::error::Error;
use super::{Close, Connect, Read, Socket, Write};
use std::io::{self, Read as StdRead, Write as StdWrite};
use std::net::{Shutdown, TcpStream};
use std::time::Duration;

const PEEK_LEN: usize = 1536;

/// A reusable TCP socket object.
#[derive(Debug, Default)]
pub struct TcpSocket {
    stream: Option<TcpStream>,
    peer_closed: bool,
    connect_timeout: Option<Duration>,
}

impl TcpSocket {
    /// A socket with no connection yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound each connection attempt; `None` uses the OS default.
    pub fn with_connect_timeout(timeout: Duration) -> Self {
        Self {
            connect_timeout: Some(timeout),
            ..Self::default()
        }
    }

    fn stream(&mut self) -> Result<&mut TcpStream, Error> {
        self.stream.as_mut().ok_or(Error::NotConnected)
    }
}

impl Read for TcpSocket {
    type Error = Error;

    fn available(&mut self) -> Result<usize, Self::Error> {
        let stream = self.stream()?;
        stream
            .set_nonblocking(true)
            .map_err(|_| Error::ReadError)?;
        let mut peek = [0u8; PEEK_LEN];
        let result = stream.peek(&mut peek);
        stream
            .set_nonblocking(false)
            .map_err(|_| Error::ReadError)?;

        match result {
            Ok(0) => {
                self.peer_closed = true;
                Ok(0)
            }
            Ok(n) => Ok(n),
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => Ok(0),
            Err(_) => Err(Error::ReadError),
        }
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.stream()?.read(buf).map_err(|_| Error::ReadError)
    }
}

impl Write for TcpSocket {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.stream()?.write(buf).map_err(|_| Error::WriteError)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.stream()?.flush().map_err(|_| Error::WriteError)
    }
}

impl Close for TcpSocket {
    type Error = Error;

    fn close(&mut self) -> Result<(), Self::Error> {
        self.peer_closed = false;
        match self.stream.take() {
            Some(stream) => match stream.shutdown(Shutdown::Both) {
                Ok(()) => Ok(()),
                // The peer may already have torn the connection down.
                Err(e) if e.kind() == io::ErrorKind::NotConnected => Ok(()),
                Err(_) => Err(Error::CloseError),
            },
            None => Ok(()),
        }
    }
}

impl Connect for TcpSocket {
    type Error = Error;

    fn connect(&mut self, host: &str, port: u16) -> Result<(), Self::Error> {
        let stream = match self.connect_timeout {
            Some(timeout) => {
                use std::net::ToSocketAddrs;
                let addr = (host, port)
                    .to_socket_addrs()
                    .map_err(|_| Error::ConnectionTimeout)?
                    .next()
                    .ok_or(Error::ConnectionTimeout)?;
                TcpStream::connect_timeout(&addr, timeout)
            }
            None => TcpStream::connect((host, port)),
        }
        .map_err(|_| Error::ConnectionTimeout)?;

        stream.set_nodelay(true).map_err(|_| Error::WriteError)?;
        self.stream = Some(stream);
        self.peer_closed = false;
        Ok(())
    }

    fn is_connected(&mut self) -> bool {
        if self.stream.is_none() || self.peer_closed {
            return false;
        }
        // A zero-length peek marks the peer as gone.
        match self.available() {
            Ok(_) => !self.peer_closed,
            Err(_) => false,
        }
    }
}

impl Socket for TcpSocket {}
