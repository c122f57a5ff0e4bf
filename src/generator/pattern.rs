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

use crate::charset::{ANY, DIGITS, LOWERCASE, SPECIAL, UPPERCASE};
use crate::config::PatternConfig;
use crate::rng::RandomSource;
use zeroize::Zeroizing;

/// Alphabet a pattern token expands to, or `None` for a literal.
fn token_alphabet(token: char) -> Option<&'static [u8]> {
    match token {
        'a' => Some(LOWERCASE),
        'A' => Some(UPPERCASE),
        '9' => Some(DIGITS),
        '#' => Some(SPECIAL),
        'x' => Some(ANY),
        _ => None,
    }
}

/// Expands `a`, `A`, `9`, `#` and `x`; every other character is kept as is.
pub fn generate_pattern<R: RandomSource>(config: &PatternConfig, rng: &mut R) -> Zeroizing<String> {
    let mut password = Zeroizing::new(String::with_capacity(config.pattern.len()));

    for token in config.pattern.chars() {
        match token_alphabet(token) {
            Some(alphabet) => password.push(char::from(rng.pick(alphabet))),
            None => password.push(token),
        }
    }

    password
}
