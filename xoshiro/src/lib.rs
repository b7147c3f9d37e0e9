//! xoshiro256++ (Blackman & Vigna, <https://prng.di.unimi.it/>) with the
//! bounded draws randnum needs: unbiased integers over any `i64` range and
//! 53-bit floats in [0, 1).

use std::time::{SystemTime, UNIX_EPOCH};

/// SplitMix64 increment
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// Scale factor mapping a 53-bit integer onto [0, 1).
const F64_UNIT: f64 = 1.0 / (1u64 << 53) as f64;

/// Advance a SplitMix64 counter and return its next mixed output.
fn splitmix64(counter: &mut u64) -> u64 {
    *counter = counter.wrapping_add(GOLDEN_GAMMA);
    let mixed = (*counter ^ (*counter >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    let mixed = (mixed ^ (mixed >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    mixed ^ (mixed >> 31)
}

/// Seedable xoshiro256++ generator.
///
/// The same seed always yields the same sequence, on every platform.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Xoshiro256PlusPlus {
    s: [u64; 4],
}

impl Xoshiro256PlusPlus {
    /// Expand a 64-bit seed into the 256-bit state with SplitMix64.
    pub fn seed_from_u64(seed: u64) -> Self {
        let mut counter = seed;
        Self {
            s: std::array::from_fn(|_| splitmix64(&mut counter)),
        }
    }

    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let [a, b, c, d] = self.s;
        let output = a.wrapping_add(d).rotate_left(23).wrapping_add(a);

        let c = c ^ a;
        let d = d ^ b;
        self.s = [a ^ d, b ^ c, c ^ (b << 17), d.rotate_left(45)];

        output
    }

    /// Float uniformly distributed in [0, 1), always a multiple of 2^-53.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * F64_UNIT
    }

    /// Unbiased value in [0, n) by Lemire's multiply-and-reject method.
    ///
    /// # Panics
    ///
    /// Panics if `n` is zero.
    pub fn next_below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "next_below called with an empty range");

        if n.is_power_of_two() {
            return self.next_u64() & (n - 1);
        }

        let threshold = n.wrapping_neg() % n;
        loop {
            let product = u128::from(self.next_u64()) * u128::from(n);
            if product as u64 >= threshold {
                return (product >> 64) as u64;
            }
        }
    }

    /// Value uniformly distributed in the inclusive range [low, high].
    ///
    /// Works over the whole `i64` domain, including `i64::MIN..=i64::MAX`.
    ///
    /// # Panics
    ///
    /// Panics if `low > high`.
    pub fn next_in_range(&mut self, low: i64, high: i64) -> i64 {
        assert!(low <= high, "next_in_range called with low > high");

        // Distance fits in u64 even when the signed difference overflows
        let distance = (high as u64).wrapping_sub(low as u64);
        match distance.checked_add(1) {
            Some(span) => low.wrapping_add(self.next_below(span) as i64),
            None => self.next_u64() as i64,
        }
    }
}

/// Seed derived from the system clock (nanosecond resolution).
///
/// Read once per run and handed to [`Xoshiro256PlusPlus::seed_from_u64`], so
/// a run can always be replayed by passing the same value explicitly.
pub fn entropy_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or(0)
}
