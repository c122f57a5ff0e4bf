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

#[cfg(test)]
const EXPECTED_SHA256: &str = "e44983e9645c52d1647c3972d0a4aec592c7d02fa3739836fcbd5d2ab6a2538f";

/// Common English words used for passphrases. Fixed at build time.
#[rustfmt::skip]
const WORDLIST: [&str; 100] = [
    "time", "year", "people", "way", "day", "man", "thing", "woman", "life", "child",
    "world", "school", "state", "family", "student", "group", "country", "problem", "hand", "part",
    "place", "case", "week", "company", "system", "program", "question", "work", "government", "number",
    "night", "point", "home", "water", "room", "mother", "area", "money", "story", "fact",
    "month", "lot", "right", "study", "book", "eye", "job", "word", "business", "issue",
    "side", "kind", "head", "house", "service", "friend", "father", "power", "hour", "game",
    "line", "end", "member", "law", "car", "city", "community", "name", "president", "team",
    "minute", "idea", "kid", "body", "information", "back", "parent", "face", "others", "level",
    "office", "door", "health", "person", "art", "war", "history", "party", "result", "change",
    "morning", "reason", "research", "girl", "guy", "moment", "air", "teacher", "force", "education",
];

pub fn get_wordlist() -> &'static [&'static str] {
    &WORDLIST
}

pub fn wordlist_size() -> usize {
    WORDLIST.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Digest, Sha256};
    use std::collections::HashSet;

    #[test]
    fn test_wordlist_size() {
        assert_eq!(wordlist_size(), 100);
        assert_eq!(get_wordlist().len(), wordlist_size());
    }

    #[test]
    fn test_wordlist_unique() {
        let unique: HashSet<_> = get_wordlist().iter().collect();
        assert_eq!(unique.len(), wordlist_size(), "Wordlist contains duplicates");
    }

    #[test]
    fn test_wordlist_format() {
        for (i, word) in get_wordlist().iter().enumerate() {
            assert!(!word.is_empty(), "Word {} is empty", i + 1);
            assert!(
                word.bytes().all(|b| b.is_ascii_lowercase()),
                "Word {} ({:?}) is not lowercase ASCII",
                i + 1,
                word
            );
        }
    }

    #[test]
    fn test_wordlist_integrity() {
        let mut hasher = Sha256::new();
        for word in get_wordlist() {
            hasher.update(word.as_bytes());
            hasher.update(b"\n");
        }
        let result = format!("{:x}", hasher.finalize());

        assert_eq!(
            result, EXPECTED_SHA256,
            "Wordlist SHA-256 mismatch; list may have been edited"
        );
    }
}
