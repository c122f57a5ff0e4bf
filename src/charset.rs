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

//! Fixed alphabets shared by every generator.

pub const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
pub const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const DIGITS: &[u8] = b"0123456789";
pub const SPECIAL: &[u8] = b"!@#$%^&*()_+-=[]{}|;:,.<>?/~";

/// Characters easily confused with one another in many fonts.
pub const SIMILAR: &[u8] = b"il1Lo0O";
/// Punctuation that is awkward to read aloud or type in some shells.
pub const AMBIGUOUS: &[u8] = b"{}[]()/\\'\"`~,;:.<>";

pub const VOWELS: &[u8] = b"aeiou";
pub const CONSONANTS: &[u8] = b"bcdfghjklmnpqrstvwxyz";

/// Union of the four class alphabets, used by the `x` pattern token.
pub const ANY: &[u8] =
    b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%^&*()_+-=[]{}|;:,.<>?/~";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digit,
    Special,
}

impl CharacterClass {
    /// Order in which required characters are drawn. When a credential is
    /// too short to hold one of each, the classes at the end are dropped.
    pub const PRIORITY: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digit,
        CharacterClass::Special,
    ];

    pub fn alphabet(self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Digit => DIGITS,
            CharacterClass::Special => SPECIAL,
        }
    }

    /// Alphabet with the requested exclusions applied.
    ///
    /// Similar-character exclusion applies to letters and digits only;
    /// ambiguous-character exclusion applies to the special class only.
    pub fn filtered(self, exclude_similar: bool, exclude_ambiguous: bool) -> Vec<u8> {
        let excluded: &[u8] = match self {
            CharacterClass::Special if exclude_ambiguous => AMBIGUOUS,
            CharacterClass::Special => &[],
            _ if exclude_similar => SIMILAR,
            _ => &[],
        };

        self.alphabet()
            .iter()
            .copied()
            .filter(|c| !excluded.contains(c))
            .collect()
    }

    pub fn contains(self, c: char) -> bool {
        c.is_ascii() && self.alphabet().contains(&(c as u8))
    }
}
