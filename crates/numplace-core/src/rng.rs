//! Seeded pseudo-random numbers for reproducible puzzles.
//!
//! [`SeedRng`] is a two-stage construction: an arbitrary seed string is
//! folded into 32 bits with multiply/rotate/XOR mixing, and that integer
//! drives a 32-bit counter-based generator (mulberry32). Neither stage is
//! cryptographic; the fold exists only to disperse arbitrary seed text
//! evenly across the state space.
//!
//! One generator instance is consumed sequentially for every random decision
//! within a generation or play session, so a seed string always reproduces
//! the same puzzle. [`SeedRng`] implements [`rand::RngCore`], which makes
//! `rand`'s Fisher–Yates [`shuffle`](rand::seq::SliceRandom::shuffle) draw
//! from the same deterministic stream as [`next_f64`](SeedRng::next_f64) and
//! [`next_index`](SeedRng::next_index).
//!
//! # Examples
//!
//! ```
//! use numplace_core::SeedRng;
//! use rand::seq::SliceRandom as _;
//!
//! let mut a = SeedRng::from_seed("morning puzzle");
//! let mut b = SeedRng::from_seed("morning puzzle");
//!
//! let mut deck: Vec<u8> = (0..16).collect();
//! let mut other = deck.clone();
//! deck.shuffle(&mut a);
//! other.shuffle(&mut b);
//! assert_eq!(deck, other);
//! ```

use rand::RngCore;

/// A deterministic 32-bit generator seeded from a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedRng {
    state: u32,
}

impl SeedRng {
    /// Creates a generator from a seed string.
    ///
    /// Seed parsing is total: any string is acceptable, including the empty
    /// string. The string's UTF-16 code units are folded in order, so the
    /// fold is order-dependent.
    #[must_use]
    pub fn from_seed(seed: &str) -> Self {
        let mut h: u32 = 1_779_033_703;
        for unit in seed.encode_utf16() {
            h = (h ^ u32::from(unit)).wrapping_mul(3_432_918_353);
            h = h.rotate_left(13);
        }
        h = (h ^ (h >> 16)).wrapping_mul(2_246_822_507);
        h = (h ^ (h >> 13)).wrapping_mul(3_266_489_909);
        h ^= h >> 16;
        Self { state: h }
    }

    /// Advances the counter and scrambles it into the next output word.
    fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x6D2B_79F5);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next value, uniform in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.step()) / 4_294_967_296.0
    }

    /// Next index, uniform in `[0, bound)`. This is the draw behind
    /// hint-cell selection.
    ///
    /// # Panics
    ///
    /// Panics if `bound` is 0.
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[expect(clippy::cast_precision_loss)]
    pub fn next_index(&mut self, bound: usize) -> usize {
        assert!(bound > 0, "bound must be positive");
        (self.next_f64() * bound as f64) as usize
    }
}

impl RngCore for SeedRng {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let lo = u64::from(self.step());
        let hi = u64::from(self.step());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
