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

//! Per-mode generation settings and their accepted ranges.

use crate::error::GenerationError;
use std::fmt;
use std::ops::RangeInclusive;

pub const RANDOM_LENGTH: RangeInclusive<usize> = 8..=64;
pub const PRONOUNCEABLE_LENGTH: RangeInclusive<usize> = 8..=20;
pub const PIN_LENGTH: RangeInclusive<usize> = 4..=12;
pub const PASSPHRASE_WORDS: RangeInclusive<usize> = 3..=8;
pub const BATCH_SIZE: RangeInclusive<usize> = 1..=10;

pub const DEFAULT_RANDOM_LENGTH: usize = 16;
pub const DEFAULT_PRONOUNCEABLE_LENGTH: usize = 10;
pub const DEFAULT_PIN_LENGTH: usize = 6;
pub const DEFAULT_PASSPHRASE_WORDS: usize = 4;
pub const DEFAULT_PATTERN: &str = "aaaA-999#";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    Random,
    Pronounceable,
    Pin,
    Passphrase,
    Pattern,
}

impl Mode {
    pub fn display_name(self) -> &'static str {
        match self {
            Mode::Random => "Random",
            Mode::Pronounceable => "Pronounceable",
            Mode::Pin => "PIN",
            Mode::Passphrase => "Passphrase",
            Mode::Pattern => "Custom Pattern",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    #[default]
    Hyphen,
    Underscore,
    Period,
    Space,
    Comma,
    Colon,
    Semicolon,
    Exclamation,
}

impl Separator {
    pub const ALL: [Separator; 8] = [
        Separator::Hyphen,
        Separator::Underscore,
        Separator::Period,
        Separator::Space,
        Separator::Comma,
        Separator::Colon,
        Separator::Semicolon,
        Separator::Exclamation,
    ];

    pub fn as_char(self) -> char {
        match self {
            Separator::Hyphen => '-',
            Separator::Underscore => '_',
            Separator::Period => '.',
            Separator::Space => ' ',
            Separator::Comma => ',',
            Separator::Colon => ':',
            Separator::Semicolon => ';',
            Separator::Exclamation => '!',
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RandomConfig {
    pub length: usize,
    pub use_lowercase: bool,
    pub use_uppercase: bool,
    pub use_digits: bool,
    pub use_special: bool,
    pub exclude_similar: bool,
    pub exclude_ambiguous: bool,
    pub ensure_all_types: bool,
}

impl Default for RandomConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_RANDOM_LENGTH,
            use_lowercase: true,
            use_uppercase: true,
            use_digits: true,
            use_special: true,
            exclude_similar: false,
            exclude_ambiguous: false,
            ensure_all_types: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PronounceableConfig {
    pub length: usize,
    pub capitalize: bool,
    pub add_number: bool,
    pub add_special: bool,
}

impl Default for PronounceableConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_PRONOUNCEABLE_LENGTH,
            capitalize: true,
            add_number: true,
            add_special: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinConfig {
    pub length: usize,
    pub avoid_repeats: bool,
    pub avoid_sequences: bool,
}

impl Default for PinConfig {
    fn default() -> Self {
        Self {
            length: DEFAULT_PIN_LENGTH,
            avoid_repeats: true,
            avoid_sequences: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassphraseConfig {
    pub word_count: usize,
    pub separator: Separator,
    pub capitalize_words: bool,
    pub add_number: bool,
}

impl Default for PassphraseConfig {
    fn default() -> Self {
        Self {
            word_count: DEFAULT_PASSPHRASE_WORDS,
            separator: Separator::Hyphen,
            capitalize_words: false,
            add_number: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternConfig {
    pub pattern: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_PATTERN.to_string(),
        }
    }
}

/// One generation request. Built fresh per request and only ever borrowed
/// by the generators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationConfig {
    Random(RandomConfig),
    Pronounceable(PronounceableConfig),
    Pin(PinConfig),
    Passphrase(PassphraseConfig),
    Pattern(PatternConfig),
}

impl GenerationConfig {
    pub fn mode(&self) -> Mode {
        match self {
            GenerationConfig::Random(_) => Mode::Random,
            GenerationConfig::Pronounceable(_) => Mode::Pronounceable,
            GenerationConfig::Pin(_) => Mode::Pin,
            GenerationConfig::Passphrase(_) => Mode::Passphrase,
            GenerationConfig::Pattern(_) => Mode::Pattern,
        }
    }

    /// Checks the length (or word count) against the mode's accepted range.
    /// Patterns have no length bound.
    pub fn validate(&self) -> Result<(), GenerationError> {
        let (actual, range) = match self {
            GenerationConfig::Random(c) => (c.length, RANDOM_LENGTH),
            GenerationConfig::Pronounceable(c) => (c.length, PRONOUNCEABLE_LENGTH),
            GenerationConfig::Pin(c) => (c.length, PIN_LENGTH),
            GenerationConfig::Passphrase(c) => (c.word_count, PASSPHRASE_WORDS),
            GenerationConfig::Pattern(_) => return Ok(()),
        };

        if range.contains(&actual) {
            Ok(())
        } else {
            Err(GenerationError::LengthOutOfRange {
                mode: self.mode(),
                min: *range.start(),
                max: *range.end(),
                actual,
            })
        }
    }
}

impl From<RandomConfig> for GenerationConfig {
    fn from(config: RandomConfig) -> Self {
        GenerationConfig::Random(config)
    }
}

impl From<PronounceableConfig> for GenerationConfig {
    fn from(config: PronounceableConfig) -> Self {
        GenerationConfig::Pronounceable(config)
    }
}

impl From<PinConfig> for GenerationConfig {
    fn from(config: PinConfig) -> Self {
        GenerationConfig::Pin(config)
    }
}

impl From<PassphraseConfig> for GenerationConfig {
    fn from(config: PassphraseConfig) -> Self {
        GenerationConfig::Passphrase(config)
    }
}

impl From<PatternConfig> for GenerationConfig {
    fn from(config: PatternConfig) -> Self {
        GenerationConfig::Pattern(config)
    }
}
