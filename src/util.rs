//! Small helpers shared by firmware built on this crate.

use rand_core::RngCore;

/// Produce a random floating point number in `[min, max]`.
///
/// The generator must already be seeded; on boards without a hardware RNG a
/// seed from the millisecond counter is the usual choice.
///
/// ```rust
/// use rand_core::{RngCore, impls};
/// # struct Zero;
/// # impl RngCore for Zero {
/// #     fn next_u32(&mut self) -> u32 { 0 }
/// #     fn next_u64(&mut self) -> u64 { 0 }
/// #     fn fill_bytes(&mut self, dest: &mut [u8]) { impls::fill_bytes_via_next(self, dest) }
/// #     fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
/// #         self.fill_bytes(dest);
/// #         Ok(())
/// #     }
/// # }
/// let mut rng = Zero;
/// let reading = r4_http::util::rand_float(&mut rng, 18.0, 26.0);
/// assert_eq!(reading, 18.0);
/// ```
pub fn rand_float<R: RngCore + ?Sized>(rng: &mut R, min: f32, max: f32) -> f32 {
    let unit = rng.next_u32() as f32 / u32::MAX as f32;
    min + unit * (max - min)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_rand_float_bounds() {
        let mut low = StepRng::new(0, 0);
        assert_eq!(rand_float(&mut low, -5.0, 5.0), -5.0);

        let mut high = StepRng::new(u32::MAX as u64, 0);
        assert_eq!(rand_float(&mut high, -5.0, 5.0), 5.0);
    }

    #[test]
    fn test_rand_float_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..1000 {
            let value = rand_float(&mut rng, 10.0, 20.0);
            assert!((10.0..=20.0).contains(&value), "out of range: {}", value);
        }
    }
}
