//! Time sources for the blocking poll loops.
//!
//! Retry sleeps go through [`embedded_hal::delay::DelayNs`], which every HAL
//! already implements. Elapsed-time checks go through [`Clock`], the equivalent
//! of a board's `millis()` counter.

pub use embedded_hal::delay::DelayNs;

/// A monotonic millisecond counter.
pub trait Clock {
    /// Milliseconds since an arbitrary, fixed origin.
    fn now_ms(&mut self) -> u64;

    /// Milliseconds elapsed since `start`, a value previously returned by [`Clock::now_ms`].
    fn elapsed_ms(&mut self, start: u64) -> u64 {
        self.now_ms().saturating_sub(start)
    }
}

impl<T: Clock + ?Sized> Clock for &mut T {
    fn now_ms(&mut self) -> u64 {
        (**self).now_ms()
    }
}

/// [`Clock`] backed by [`std::time::Instant`].
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    origin: std::time::Instant,
}

#[cfg(feature = "std")]
impl StdClock {
    /// Start counting from now.
    pub fn new() -> Self {
        Self {
            origin: std::time::Instant::now(),
        }
    }
}

#[cfg(feature = "std")]
impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "std")]
impl Clock for StdClock {
    fn now_ms(&mut self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// [`DelayNs`] backed by [`std::thread::sleep`].
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

#[cfg(feature = "std")]
impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(ns as u64));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(ms as u64));
    }
}
