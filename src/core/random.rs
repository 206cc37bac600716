//! Xorshift32 - small deterministic random source
//!
//! Same generator the engine has always used for per-frame randomness.
//! Good enough for seeding soups; not for anything cryptographic.

use crate::core::clock;

/// Replacement seed, xorshift never leaves the all-zero state.
const FALLBACK_SEED: u32 = 0x9E37_79B9;

#[derive(Clone, Debug)]
pub struct Xorshift32 {
    state: u32,
}

impl Xorshift32 {
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { FALLBACK_SEED } else { seed };
        Self { state }
    }

    /// Seed from the wall clock (browser `Date.now()` under wasm32).
    pub fn from_clock() -> Self {
        Self::new(clock_seed())
    }

    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform sample in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        self.next_u32() as f64 / (u32::MAX as f64 + 1.0)
    }
}

/// Fold the millisecond clock into 32 bits, sub-millisecond digits included.
fn clock_seed() -> u32 {
    let now = clock::now_ms();
    let millis = now as u64;
    let micros = (now.fract() * 1000.0) as u64;
    (millis ^ (millis >> 32) ^ (micros << 16)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_seed_is_replaced() {
        let mut rng = Xorshift32::new(0);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Xorshift32::new(42);
        let mut b = Xorshift32::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn next_f64_stays_in_unit_interval() {
        let mut rng = Xorshift32::new(7);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v));
        }
    }
}
