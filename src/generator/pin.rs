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

use crate::config::PinConfig;
use crate::error::GenerationError;
use crate::rng::RandomSource;
use zeroize::Zeroizing;

/// Upper bound on whole-PIN redraws before the rejection strategy gives up.
pub const MAX_PIN_ATTEMPTS: usize = 100_000;

/// Longest PIN for which rejection sampling is used with both constraints on.
pub const REJECTION_MAX_LENGTH: usize = 5;

const DIGIT_COUNT: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinStrategy {
    /// Draw whole PINs and discard any that break a constraint.
    Rejection,
    /// Build digit by digit from the candidates the previous digit allows.
    Constructive,
}

impl PinStrategy {
    /// Rejection sampling is only tractable while the acceptance rate stays
    /// high: for short PINs, or with at most one constraint. Everything else
    /// is built constructively.
    pub fn select(config: &PinConfig) -> Self {
        if config.avoid_repeats && config.avoid_sequences && config.length > REJECTION_MAX_LENGTH {
            PinStrategy::Constructive
        } else {
            PinStrategy::Rejection
        }
    }
}

pub fn generate_pin<R: RandomSource>(
    config: &PinConfig,
    rng: &mut R,
) -> Result<Zeroizing<String>, GenerationError> {
    let strategy = PinStrategy::select(config);
    tracing::debug!(?strategy, length = config.length, "generating PIN");

    let digits = match strategy {
        PinStrategy::Constructive => build_constructive(config.length, rng),
        PinStrategy::Rejection => build_rejection(config, rng)?,
    };

    let result: String = digits.iter().map(|d| char::from(b'0' + d)).collect();
    Ok(Zeroizing::new(result))
}

fn build_constructive<R: RandomSource>(length: usize, rng: &mut R) -> Zeroizing<Vec<u8>> {
    let mut pin: Zeroizing<Vec<u8>> = Zeroizing::new(Vec::with_capacity(length));
    let mut candidates = Vec::with_capacity(DIGIT_COUNT as usize);

    for _ in 0..length {
        candidates.clear();
        candidates.extend(0..DIGIT_COUNT);

        if let Some(&prev) = pin.last() {
            candidates.retain(|&d| d != prev && d + 1 != prev && d != prev + 1);
        }

        // Unreachable with 10 digits (at most 3 are removed); kept as the documented fallback.
        if candidates.is_empty() {
            tracing::warn!("no digit satisfies the PIN constraints, relaxing for one draw");
            candidates.extend(0..DIGIT_COUNT);
        }

        pin.push(rng.pick(&candidates));
    }

    pin
}

fn build_rejection<R: RandomSource>(
    config: &PinConfig,
    rng: &mut R,
) -> Result<Zeroizing<Vec<u8>>, GenerationError> {
    let mut pin = Zeroizing::new(vec![0u8; config.length]);

    for attempt in 1..=MAX_PIN_ATTEMPTS {
        for digit in pin.iter_mut() {
            *digit = rng.below(DIGIT_COUNT as usize) as u8;
        }

        if satisfies(&pin, config) {
            if attempt > 1 {
                tracing::debug!(attempt, "PIN accepted after rejections");
            }
            return Ok(pin);
        }
    }

    tracing::warn!(
        attempts = MAX_PIN_ATTEMPTS,
        length = config.length,
        "PIN rejection sampling exhausted"
    );
    Err(GenerationError::ConstraintUnsatisfiable {
        attempts: MAX_PIN_ATTEMPTS,
    })
}

fn satisfies(pin: &[u8], config: &PinConfig) -> bool {
    pin.windows(2).all(|pair| {
        let (a, b) = (pair[0], pair[1]);
        !(config.avoid_repeats && a == b) && !(config.avoid_sequences && a.abs_diff(b) == 1)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::KeystreamRng;
    use proptest::prelude::*;

    fn digits(pin: &str) -> Vec<u8> {
        pin.bytes().map(|b| b - b'0').collect()
    }

    #[test]
    fn test_strategy_selection() {
        let both = |length| PinConfig {
            length,
            avoid_repeats: true,
            avoid_sequences: true,
        };
        assert_eq!(PinStrategy::select(&both(4)), PinStrategy::Rejection);
        assert_eq!(PinStrategy::select(&both(5)), PinStrategy::Rejection);
        assert_eq!(PinStrategy::select(&both(6)), PinStrategy::Constructive);
        assert_eq!(PinStrategy::select(&both(12)), PinStrategy::Constructive);

        let repeats_only = PinConfig {
            avoid_sequences: false,
            ..both(12)
        };
        assert_eq!(PinStrategy::select(&repeats_only), PinStrategy::Rejection);
    }

    #[test]
    fn test_pin_length_and_digits() {
        let mut rng = KeystreamRng::from_seed([1u8; 32]);
        for length in 4..=12 {
            let config = PinConfig {
                length,
                ..Default::default()
            };
            let pin = generate_pin(&config, &mut rng).unwrap();
            assert_eq!(pin.len(), length);
            assert!(pin.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn test_unconstrained_pin() {
        let config = PinConfig {
            length: 12,
            avoid_repeats: false,
            avoid_sequences: false,
        };
        let mut rng = KeystreamRng::from_seed([2u8; 32]);
        let pin = generate_pin(&config, &mut rng).unwrap();
        assert_eq!(pin.len(), 12);
    }

    #[test]
    fn test_constructive_excludes_neighbours() {
        let mut rng = KeystreamRng::from_seed([3u8; 32]);
        for _ in 0..200 {
            let pin = build_constructive(12, &mut rng);
            for pair in pin.windows(2) {
                assert!(pair[0].abs_diff(pair[1]) > 1, "{:?}", &pin[..]);
            }
        }
    }

    #[test]
    fn test_satisfies() {
        let both = PinConfig::default();
        assert!(satisfies(&[1, 3, 5, 7], &both));
        assert!(!satisfies(&[1, 1, 5, 7], &both));
        assert!(!satisfies(&[1, 2, 5, 7], &both));
        assert!(!satisfies(&[9, 8, 5, 7], &both));
        // No wraparound between 9 and 0.
        assert!(satisfies(&[9, 0, 9, 0], &both));

        let repeats_only = PinConfig {
            avoid_sequences: false,
            ..both
        };
        assert!(satisfies(&[1, 2, 3, 4], &repeats_only));
    }

    /// Source that always returns the same word.
    struct Constant(u32);

    impl RandomSource for Constant {
        fn next_u32(&mut self) -> u32 {
            self.0
        }
    }

    #[test]
    fn test_rejection_gives_up_after_max_attempts() {
        let config = PinConfig {
            length: 4,
            avoid_repeats: true,
            avoid_sequences: false,
        };
        assert_eq!(PinStrategy::select(&config), PinStrategy::Rejection);

        // Every draw is "0000", which always repeats.
        let result = generate_pin(&config, &mut Constant(0));
        match result {
            Err(GenerationError::ConstraintUnsatisfiable { attempts }) => {
                assert_eq!(attempts, MAX_PIN_ATTEMPTS);
            }
            other => panic!("unexpected result: {:?}", other.map(|pin| pin.len())),
        }
    }

    #[test]
    fn test_empty_pin() {
        let config = PinConfig {
            length: 0,
            ..Default::default()
        };
        let mut rng = KeystreamRng::from_seed([4u8; 32]);
        assert_eq!(*generate_pin(&config, &mut rng).unwrap(), "");
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(128))]

        #[test]
        fn prop_avoid_repeats(
            seed in any::<[u8; 32]>(),
            length in 4usize..=12,
            sequences in any::<bool>(),
        ) {
            let config = PinConfig {
                length,
                avoid_repeats: true,
                avoid_sequences: sequences,
            };
            let mut rng = KeystreamRng::from_seed(seed);
            let pin = digits(&generate_pin(&config, &mut rng).unwrap());

            prop_assert_eq!(pin.len(), length);
            for pair in pin.windows(2) {
                prop_assert_ne!(pair[0], pair[1]);
            }
        }

        #[test]
        fn prop_avoid_sequences(
            seed in any::<[u8; 32]>(),
            length in 4usize..=12,
            repeats in any::<bool>(),
        ) {
            let config = PinConfig {
                length,
                avoid_repeats: repeats,
                avoid_sequences: true,
            };
            let mut rng = KeystreamRng::from_seed(seed);
            let pin = digits(&generate_pin(&config, &mut rng).unwrap());

            for pair in pin.windows(2) {
                prop_assert_ne!(pair[0].abs_diff(pair[1]), 1);
            }
        }
    }
}
