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

pub mod breach;
pub mod charset;
pub mod config;
pub mod error;
pub mod generator;
pub mod history;
pub mod rng;
pub mod strength;
pub mod wordlist;

pub use breach::{simulate_breach_check, BreachVerdict};
pub use charset::CharacterClass;
pub use config::{
    GenerationConfig, Mode, PassphraseConfig, PatternConfig, PinConfig, PronounceableConfig,
    RandomConfig, Separator,
};
pub use error::GenerationError;
pub use generator::{
    generate, generate_batch, generate_passphrase, generate_pattern, generate_pin,
    generate_pronounceable, generate_random, Credential,
};
pub use history::{export_credentials, export_filename, History, HistoryEntry};
pub use rng::{KeystreamRng, RandomSource};
pub use strength::{score, StrengthCategory, StrengthReport};
pub use wordlist::{get_wordlist, wordlist_size};
