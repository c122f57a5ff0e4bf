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

//! The five credential generators and mode dispatch.
//!
//! Each generator is a plain function of an immutable configuration and a
//! [`RandomSource`]. [`generate`] validates the configuration's bounds and
//! picks the generator for its mode.

pub mod passphrase;
pub mod pattern;
pub mod pin;
pub mod pronounceable;
pub mod random;

pub use passphrase::generate_passphrase;
pub use pattern::generate_pattern;
pub use pin::{generate_pin, PinStrategy, MAX_PIN_ATTEMPTS};
pub use pronounceable::generate_pronounceable;
pub use random::{generate_random, CharacterPool};

use crate::config::{GenerationConfig, Mode, BATCH_SIZE};
use crate::error::GenerationError;
use crate::rng::RandomSource;
use zeroize::Zeroizing;

/// A generated credential. The text is wiped from memory when dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credential {
    pub text: Zeroizing<String>,
    pub mode: Mode,
}

impl Credential {
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

pub fn generate<R: RandomSource>(
    config: &GenerationConfig,
    rng: &mut R,
) -> Result<Credential, GenerationError> {
    config.validate()?;

    let text = match config {
        GenerationConfig::Random(c) => generate_random(c, rng)?,
        GenerationConfig::Pronounceable(c) => generate_pronounceable(c, rng),
        GenerationConfig::Pin(c) => generate_pin(c, rng)?,
        GenerationConfig::Passphrase(c) => generate_passphrase(c, rng)?,
        GenerationConfig::Pattern(c) => generate_pattern(c, rng),
    };

    Ok(Credential {
        text,
        mode: config.mode(),
    })
}

/// Generates `count` independent credentials with the same configuration.
pub fn generate_batch<R: RandomSource>(
    config: &GenerationConfig,
    count: usize,
    rng: &mut R,
) -> Result<Vec<Credential>, GenerationError> {
    if !BATCH_SIZE.contains(&count) {
        return Err(GenerationError::BatchSizeOutOfRange {
            count,
            min: *BATCH_SIZE.start(),
            max: *BATCH_SIZE.end(),
        });
    }

    (0..count).map(|_| generate(config, rng)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        PassphraseConfig, PatternConfig, PinConfig, PronounceableConfig, RandomConfig,
    };
    use crate::rng::KeystreamRng;

    #[test]
    fn test_dispatch_sets_mode() {
        let mut rng = KeystreamRng::from_seed([1u8; 32]);
        let configs: Vec<GenerationConfig> = vec![
            RandomConfig::default().into(),
            PronounceableConfig::default().into(),
            PinConfig::default().into(),
            PassphraseConfig::default().into(),
            PatternConfig::default().into(),
        ];

        for config in configs {
            let credential = generate(&config, &mut rng).unwrap();
            assert_eq!(credential.mode, config.mode());
            assert!(!credential.is_empty());
        }
    }

    #[test]
    fn test_dispatch_validates_length() {
        let mut rng = KeystreamRng::from_seed([2u8; 32]);
        let config = GenerationConfig::Random(RandomConfig {
            length: 4,
            ..Default::default()
        });

        assert!(matches!(
            generate(&config, &mut rng),
            Err(GenerationError::LengthOutOfRange { mode: Mode::Random, .. })
        ));
    }

    #[test]
    fn test_dispatch_propagates_generator_error() {
        let mut rng = KeystreamRng::from_seed([3u8; 32]);
        let config = GenerationConfig::Random(RandomConfig {
            use_lowercase: false,
            use_uppercase: false,
            use_digits: false,
            use_special: false,
            ..Default::default()
        });

        assert!(matches!(
            generate(&config, &mut rng),
            Err(GenerationError::NoCharacterClassSelected)
        ));
    }

    #[test]
    fn test_batch() {
        let mut rng = KeystreamRng::from_seed([4u8; 32]);
        let config = GenerationConfig::Pin(PinConfig::default());

        let batch = generate_batch(&config, 10, &mut rng).unwrap();
        assert_eq!(batch.len(), 10);
        assert!(batch.iter().all(|c| c.len() == 6));
    }

    #[test]
    fn test_batch_bounds() {
        let mut rng = KeystreamRng::from_seed([5u8; 32]);
        let config = GenerationConfig::Pattern(PatternConfig::default());

        assert!(matches!(
            generate_batch(&config, 0, &mut rng),
            Err(GenerationError::BatchSizeOutOfRange { count: 0, .. })
        ));
        assert!(matches!(
            generate_batch(&config, 11, &mut rng),
            Err(GenerationError::BatchSizeOutOfRange { count: 11, .. })
        ));
    }

    #[test]
    fn test_credential_len_counts_chars() {
        let credential = Credential {
            text: Zeroizing::new("ü-ü".to_string()),
            mode: Mode::Pattern,
        };
        assert_eq!(credential.len(), 3);
        assert_eq!(credential.as_str(), "ü-ü");
    }
}
