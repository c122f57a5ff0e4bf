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

use crate::charset::{CONSONANTS, SPECIAL, VOWELS};
use crate::config::PronounceableConfig;
use crate::rng::RandomSource;
use zeroize::Zeroizing;

/// Room left after the consonant/vowel body for the optional suffixes.
const SUFFIX_RESERVE: usize = 4;

/// Builds a consonant/vowel alternating credential.
///
/// The numeric suffix is the plain decimal value in `0..=99`, not
/// zero-padded, and the suffixes are appended after the body rather than
/// replacing it. The result is therefore often one or two characters shorter
/// than `config.length`; it is never longer.
pub fn generate_pronounceable<R: RandomSource>(
    config: &PronounceableConfig,
    rng: &mut R,
) -> Zeroizing<String> {
    let length = config.length;
    let mut password = Zeroizing::new(String::with_capacity(length + 2));

    while password.len() < length.saturating_sub(SUFFIX_RESERVE) {
        password.push(char::from(rng.pick(CONSONANTS)));
        password.push(char::from(rng.pick(VOWELS)));
    }
    password.truncate(length);

    if config.capitalize {
        let first = 1.min(password.len());
        password[..first].make_ascii_uppercase();
    }

    if config.add_number && password.len() < length {
        password.truncate(length.saturating_sub(2));
        let number = rng.range_inclusive(0, 99);
        password.push_str(&number.to_string());
    }

    if config.add_special && password.len() < length {
        password.truncate(length.saturating_sub(1));
        password.push(char::from(rng.pick(SPECIAL)));
    }

    password
}
