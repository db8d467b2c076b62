use crate::foundation::core::Seed;

/// Deterministic xorshift32 stream keyed by a 64-bit [`Seed`].
///
/// Owned by exactly one generation run and advanced through `&mut self`. Not `Clone`.
#[derive(Debug)]
pub struct RandomStream {
    state: u32,
    draws: u64,
}

impl RandomStream {
    /// Mix both key halves into a 32-bit state.
    ///
    /// The halves are combined asymmetrically before two avalanche rounds; related keys
    /// (`lo == hi`, all-zero vs all-one) land far apart.
    pub fn new(seed: Seed) -> Self {
        let (lo, hi) = seed.halves();

        let mut x = lo ^ 0x9e37_79b9;
        x = x.wrapping_add((hi ^ 0x85eb_ca6b).wrapping_mul(0xc2b2_ae35));
        x = (x ^ (x >> 16)).wrapping_mul(0x7feb_352d);
        x = (x ^ (x >> 15)).wrapping_mul(0x846c_a68b);
        x ^= x >> 16;

        Self { state: x, draws: 0 }
    }

    /// Advance one xorshift32 step and return the raw 32-bit state.
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        self.draws += 1;
        x
    }

    /// Uniform float in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Uniform float in `[-1, 1)`.
    pub fn next_signed(&mut self) -> f64 {
        self.next_f64() * 2.0 - 1.0
    }

    /// Uniform integer in the inclusive range `[min, max]`.
    pub fn int_in(&mut self, min: i64, max: i64) -> i64 {
        (self.next_f64() * (max - min + 1) as f64).floor() as i64 + min
    }

    /// Uniformly pick one element of a non-empty list.
    pub fn pick<T: Copy, const N: usize>(&mut self, items: &[T; N]) -> T {
        const { assert!(N > 0, "pick requires a non-empty list") };
        items[self.int_in(0, N as i64 - 1) as usize]
    }

    /// `true` with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Number of draws taken so far.
    pub fn draws(&self) -> u64 {
        self.draws
    }
}

#[cfg(test)]
#[path = "../../tests/unit/random/stream.rs"]
mod tests;
