//! Fake socket, clock and delay for exercising the HTTP client without a network

#![allow(dead_code)]

use r4_http::network::error::Error;
use r4_http::network::{Close, Connect, Read, Socket, Write};
use r4_http::time::{Clock, DelayNs};
use std::cell::Cell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Milliseconds shared by the fake socket, clock and delay.
pub type Time = Rc<Cell<u64>>;

pub fn time() -> Time {
    Rc::new(Cell::new(0))
}

/// Socket whose inbound data arrives in scripted packets at fixed times.
#[derive(Debug)]
pub struct MockSocket {
    time: Time,
    packets: VecDeque<(u64, Vec<u8>)>,
    rx: VecDeque<u8>,
    pub connected: bool,
    /// Number of connect calls that fail before one succeeds.
    pub failing_connects: usize,
    /// Peer closes once every scripted packet has been read.
    pub close_when_done: bool,
    /// Every read call fails.
    pub failing_reads: bool,
    /// Largest chunk a single write accepts.
    pub max_write: usize,
    pub written: Vec<u8>,
    pub write_calls: usize,
    pub connect_calls: usize,
    pub read_calls: usize,
    pub bytes_read: usize,
    pub close_calls: usize,
}

impl MockSocket {
    pub fn new(time: &Time) -> Self {
        Self {
            time: time.clone(),
            packets: VecDeque::new(),
            rx: VecDeque::new(),
            connected: false,
            failing_connects: 0,
            close_when_done: false,
            failing_reads: false,
            max_write: usize::MAX,
            written: Vec::new(),
            write_calls: 0,
            connect_calls: 0,
            read_calls: 0,
            bytes_read: 0,
            close_calls: 0,
        }
    }

    /// A socket that is already connected.
    pub fn connected(time: &Time) -> Self {
        let mut socket = Self::new(time);
        socket.connected = true;
        socket
    }

    /// Schedule `data` to become readable at `at_ms`.
    pub fn push_packet(&mut self, at_ms: u64, data: &[u8]) {
        self.packets.push_back((at_ms, data.to_vec()));
    }

    pub fn written_str(&self) -> &str {
        std::str::from_utf8(&self.written).unwrap()
    }

    fn pump(&mut self) {
        let now = self.time.get();
        while let Some((at, _)) = self.packets.front() {
            if *at > now {
                break;
            }
            let (_, data) = self.packets.pop_front().unwrap();
            self.rx.extend(data);
        }
        if self.close_when_done && self.packets.is_empty() && self.rx.is_empty() {
            self.connected = false;
        }
    }
}

impl Read for MockSocket {
    type Error = Error;

    fn available(&mut self) -> Result<usize, Self::Error> {
        self.pump();
        Ok(self.rx.len())
    }

    fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        self.read_calls += 1;
        if self.failing_reads {
            return Err(Error::ReadError);
        }
        self.pump();
        let len = buf.len().min(self.rx.len());
        for slot in buf.iter_mut().take(len) {
            *slot = self.rx.pop_front().unwrap();
        }
        self.bytes_read += len;
        Ok(len)
    }
}

impl Write for MockSocket {
    type Error = Error;

    fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        if !self.connected {
            return Err(Error::NotConnected);
        }
        self.write_calls += 1;
        let len = buf.len().min(self.max_write);
        self.written.extend_from_slice(&buf[..len]);
        Ok(len)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl Close for MockSocket {
    type Error = Error;

    fn close(&mut self) -> Result<(), Self::Error> {
        self.close_calls += 1;
        self.connected = false;
        Ok(())
    }
}

impl Connect for MockSocket {
    type Error = Error;

    fn connect(&mut self, _host: &str, _port: u16) -> Result<(), Self::Error> {
        self.connect_calls += 1;
        if self.failing_connects > 0 {
            self.failing_connects -= 1;
            return Err(Error::ConnectionTimeout);
        }
        self.connected = true;
        Ok(())
    }

    fn is_connected(&mut self) -> bool {
        self.pump();
        self.connected
    }
}

impl Socket for MockSocket {}

/// Clock that advances by `step` milliseconds on every reading.
#[derive(Debug)]
pub struct MockClock {
    time: Time,
    step: u64,
}

impl MockClock {
    pub fn new(time: &Time) -> Self {
        Self {
            time: time.clone(),
            step: 1,
        }
    }
}

impl Clock for MockClock {
    fn now_ms(&mut self) -> u64 {
        let now = self.time.get() + self.step;
        self.time.set(now);
        now
    }
}

/// Delay that records each pause and moves shared time forward.
#[derive(Debug)]
pub struct MockDelay {
    time: Time,
    pub pauses_ms: Vec<u32>,
}

impl MockDelay {
    pub fn new(time: &Time) -> Self {
        Self {
            time: time.clone(),
            pauses_ms: Vec::new(),
        }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.time.set(self.time.get() + u64::from(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.pauses_ms.push(ms);
        self.time.set(self.time.get() + u64::from(ms));
    }
}
