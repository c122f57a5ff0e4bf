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

use crate::config::PassphraseConfig;
use crate::error::GenerationError;
use crate::rng::RandomSource;
use crate::wordlist::{get_wordlist, wordlist_size};
use zeroize::Zeroizing;

pub fn generate_passphrase<R: RandomSource>(
    config: &PassphraseConfig,
    rng: &mut R,
) -> Result<Zeroizing<String>, GenerationError> {
    let wordlist = get_wordlist();
    let wordlist_len = wordlist_size();

    if config.word_count > wordlist_len {
        return Err(GenerationError::InsufficientDictionarySize {
            requested: config.word_count,
            available: wordlist_len,
        });
    }

    // Partial Fisher-Yates: the first `word_count` slots end up a uniform
    // sample without replacement.
    let mut indices: Vec<usize> = (0..wordlist_len).collect();
    for i in 0..config.word_count {
        let j = i + rng.below(wordlist_len - i);
        indices.swap(i, j);
    }

    let mut words: Vec<Zeroizing<String>> = indices[..config.word_count]
        .iter()
        .map(|&index| Zeroizing::new(wordlist[index].to_string()))
        .collect();

    if config.capitalize_words {
        for word in words.iter_mut() {
            capitalize(word);
        }
    }

    let separator = config.separator.as_char().to_string();
    let mut passphrase = Zeroizing::new(
        words
            .iter()
            .map(|word| word.as_str())
            .collect::<Vec<_>>()
            .join(&separator),
    );

    if config.add_number {
        let number = rng.range_inclusive(10, 99);
        passphrase.push_str(&separator);
        passphrase.push_str(&number.to_string());
    }

    Ok(passphrase)
}

/// Uppercases the first letter and lowercases the rest.
fn capitalize(word: &mut String) {
    word.make_ascii_lowercase();
    if let Some(first) = word.get_mut(..1) {
        first.make_ascii_uppercase();
    }
}
