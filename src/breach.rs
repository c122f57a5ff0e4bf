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

//! Simulated breach classification.
//!
//! **This is not a breach-database lookup.** No network request is made and
//! no real breach corpus is consulted. The verdict comes from a handful of
//! static rules plus a random 5% "hit" for everything else, and the hash
//! prefix in a positive message is for display only. Do not use it as a
//! security control.

use crate::rng::RandomSource;
use blake2::{Blake2b512, Digest};
use regex::Regex;
use std::sync::OnceLock;

/// Chance that a string passing every static rule is reported as breached.
pub const SIMULATED_HIT_RATE: f64 = 0.05;

pub const HASH_PREFIX_LEN: usize = 5;

/// Short lowercase-only strings are flagged below this length.
const SIMPLE_LOWERCASE_MAX: usize = 8;

const COMMON_PASSWORDS: [&str; 10] = [
    "password",
    "123456",
    "qwerty",
    "admin",
    "welcome",
    "password123",
    "abc123",
    "letmein",
    "monkey",
    "1234567890",
];

pub const COMMON_MESSAGE: &str = "This password is commonly used and has likely been breached.";
pub const SIMPLE_LOWERCASE_MESSAGE: &str = "Simple lowercase passwords are easily cracked.";
pub const NUMERIC_MESSAGE: &str = "Numeric-only passwords are easily cracked.";
pub const WORD_NUMBER_MESSAGE: &str = "Simple word+number patterns are commonly breached.";
pub const CLEAN_MESSAGE: &str = "No breaches found for this password.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreachVerdict {
    pub breached: bool,
    pub message: String,
}

impl BreachVerdict {
    fn breached(message: impl Into<String>) -> Self {
        Self {
            breached: true,
            message: message.into(),
        }
    }
}

struct Rules {
    lowercase: Regex,
    numeric: Regex,
    word_number: Regex,
}

static RULES: OnceLock<Rules> = OnceLock::new();

fn rules() -> &'static Rules {
    RULES.get_or_init(|| Rules {
        lowercase: Regex::new(r"^[a-z]+$").expect("valid lowercase rule"),
        numeric: Regex::new(r"^[0-9]+$").expect("valid numeric rule"),
        word_number: Regex::new(r"^[a-z]+[0-9]{1,2}$").expect("valid word+number rule"),
    })
}

/// Uppercase hex BLAKE2b-512 digest of `text`.
pub fn display_hash(text: &str) -> String {
    Blake2b512::digest(text.as_bytes())
        .iter()
        .map(|b| format!("{:02X}", b))
        .collect()
}

/// Classifies `text` as likely breached. The first matching rule wins:
///
/// 1. case-insensitive match against a short list of notorious passwords;
/// 2. lowercase letters only and shorter than 8 characters;
/// 3. digits only;
/// 4. lowercase letters followed by one or two digits;
/// 5. otherwise a single random draw with a 5% hit rate.
///
/// Only the last rule consumes randomness, so the verdict for strings
/// caught by rules 1 to 4 is deterministic.
pub fn simulate_breach_check<R: RandomSource>(text: &str, rng: &mut R) -> BreachVerdict {
    let lowered = text.to_lowercase();
    if COMMON_PASSWORDS.iter().any(|common| *common == lowered) {
        return BreachVerdict::breached(COMMON_MESSAGE);
    }

    let rules = rules();

    if rules.lowercase.is_match(text) && text.chars().count() < SIMPLE_LOWERCASE_MAX {
        return BreachVerdict::breached(SIMPLE_LOWERCASE_MESSAGE);
    }

    if rules.numeric.is_match(text) {
        return BreachVerdict::breached(NUMERIC_MESSAGE);
    }

    if rules.word_number.is_match(text) {
        return BreachVerdict::breached(WORD_NUMBER_MESSAGE);
    }

    let hash = display_hash(text);
    if rng.unit() < SIMULATED_HIT_RATE {
        tracing::debug!("simulated breach hit");
        return BreachVerdict::breached(format!(
            "This password appears in a data breach. Hash prefix: {}...",
            &hash[..HASH_PREFIX_LEN]
        ));
    }

    BreachVerdict {
        breached: false,
        message: CLEAN_MESSAGE.to_string(),
    }
}
