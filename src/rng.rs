// This file is part of Credforge.
//
// Copyright (c) 2026  Credforge Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Randomness sources consumed by the generators.

use crate::error::GenerationError;
use chacha20::ChaCha20;
use chacha20::cipher::{KeyIvInit, StreamCipher};
use zeroize::Zeroizing;

const KEY_LEN: usize = 32;
const BUFFER_LEN: usize = 1024;

/// A uniformly distributed source of random 32-bit words.
///
/// Only [`next_u32`](RandomSource::next_u32) is required; everything else is
/// derived from it without bias. A source shared between threads must be
/// synchronized by the caller.
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;

    fn next_u64(&mut self) -> u64 {
        (u64::from(self.next_u32()) << 32) | u64::from(self.next_u32())
    }

    /// Uniform integer in `[0, bound)`. `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "below() called with an empty range");
        let bound = bound as u64;
        if bound <= 1 {
            return 0;
        }

        // Largest multiple of `bound` that fits in 32 bits; draws above it are rejected.
        let span = u64::from(u32::MAX) + 1;
        if bound > span {
            let zone = u64::MAX - (u64::MAX % bound);
            loop {
                let draw = self.next_u64();
                if draw < zone {
                    return (draw % bound) as usize;
                }
            }
        }

        let zone = span - (span % bound);
        loop {
            let draw = u64::from(self.next_u32());
            if draw < zone {
                return (draw % bound) as usize;
            }
        }
    }

    /// Uniform integer in `[low, high]`.
    fn range_inclusive(&mut self, low: usize, high: usize) -> usize {
        debug_assert!(low <= high);
        low + self.below(high - low + 1)
    }

    /// Uniform float in `[0, 1)` with 53 bits of precision.
    fn unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform element of a non-empty slice.
    fn pick<T: Copy>(&mut self, items: &[T]) -> T
    where
        Self: Sized,
    {
        items[self.below(items.len())]
    }

    /// Fisher-Yates shuffle; every permutation is equally likely.
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.below(i + 1);
            items.swap(i, j);
        }
    }
}

/// ChaCha20 keystream used as a cryptographically secure random source.
///
/// The keystream is buffered in a zeroizing buffer and refilled when
/// exhausted.
pub struct KeystreamRng {
    cipher: ChaCha20,
    buffer: Zeroizing<Vec<u8>>,
    pos: usize,
}

impl KeystreamRng {
    /// Keys the stream from the operating system CSPRNG.
    pub fn from_entropy() -> Result<Self, GenerationError> {
        let mut key = Zeroizing::new([0u8; KEY_LEN]);
        getrandom::fill(&mut key[..])
            .map_err(|e| GenerationError::EntropyUnavailable(e.to_string()))?;
        Ok(Self::from_seed(*key))
    }

    /// Deterministic stream: the same seed always yields the same output.
    pub fn from_seed(seed: [u8; KEY_LEN]) -> Self {
        let key = Zeroizing::new(seed);
        let mut cipher = ChaCha20::new((&*key).into(), &[0u8; 12].into());

        let mut buffer = Zeroizing::new(vec![0u8; BUFFER_LEN]);
        cipher.apply_keystream(&mut buffer);

        Self {
            cipher,
            buffer,
            pos: 0,
        }
    }

    fn refill(&mut self) {
        self.buffer.iter_mut().for_each(|b| *b = 0);
        self.cipher.apply_keystream(&mut self.buffer);
        self.pos = 0;
    }
}

impl RandomSource for KeystreamRng {
    fn next_u32(&mut self) -> u32 {
        if self.pos + 4 > self.buffer.len() {
            self.refill();
        }

        let word = u32::from_le_bytes([
            self.buffer[self.pos],
            self.buffer[self.pos + 1],
            self.buffer[self.pos + 2],
            self.buffer[self.pos + 3],
        ]);
        self.pos += 4;
        word
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seeded_stream_deterministic() {
        let mut a = KeystreamRng::from_seed([7u8; 32]);
        let mut b = KeystreamRng::from_seed([7u8; 32]);

        let first: Vec<u32> = (0..600).map(|_| a.next_u32()).collect();
        let second: Vec<u32> = (0..600).map(|_| b.next_u32()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let mut a = KeystreamRng::from_seed([1u8; 32]);
        let mut b = KeystreamRng::from_seed([2u8; 32]);

        let first: Vec<u32> = (0..16).map(|_| a.next_u32()).collect();
        let second: Vec<u32> = (0..16).map(|_| b.next_u32()).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn test_refill_continues_stream() {
        let mut rng = KeystreamRng::from_seed([3u8; 32]);
        // Crosses several buffer boundaries.
        let words: HashSet<u32> = (0..BUFFER_LEN).map(|_| rng.next_u32()).collect();
        assert!(words.len() > BUFFER_LEN - 4, "keystream repeated after refill");
    }

    #[test]
    fn test_below_in_range() {
        let mut rng = KeystreamRng::from_seed([9u8; 32]);
        for bound in [1usize, 2, 7, 10, 26, 90, 100, 1000] {
            for _ in 0..500 {
                assert!(rng.below(bound) < bound);
            }
        }
    }

    #[test]
    fn test_below_covers_every_value() {
        let mut rng = KeystreamRng::from_seed([11u8; 32]);
        let seen: HashSet<usize> = (0..2000).map(|_| rng.below(10)).collect();
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn test_range_inclusive_bounds() {
        let mut rng = KeystreamRng::from_seed([12u8; 32]);
        let seen: HashSet<usize> = (0..5000).map(|_| rng.range_inclusive(10, 99)).collect();
        assert_eq!(seen.iter().min(), Some(&10));
        assert_eq!(seen.iter().max(), Some(&99));
    }

    #[test]
    fn test_unit_interval() {
        let mut rng = KeystreamRng::from_seed([13u8; 32]);
        for _ in 0..1000 {
            let x = rng.unit();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut rng = KeystreamRng::from_seed([14u8; 32]);
        let mut items: Vec<u8> = (0..50).collect();
        rng.shuffle(&mut items);

        let mut sorted = items.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..50).collect::<Vec<u8>>());
        assert_ne!(items, sorted, "shuffle of 50 items left them in order");
    }

    #[test]
    fn test_from_entropy() {
        let mut a = KeystreamRng::from_entropy().unwrap();
        let mut b = KeystreamRng::from_entropy().unwrap();
        assert_ne!(a.next_u64(), b.next_u64());
    }
}
