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

//! Heuristic strength scoring for arbitrary strings.

use std::collections::HashSet;
use std::fmt;

pub const GOOD_LENGTH: usize = 12;
pub const ACCEPTABLE_LENGTH: usize = 8;

pub const STRONG_THRESHOLD: i32 = 60;
pub const MODERATE_THRESHOLD: i32 = 40;

pub const TOO_SHORT: &str = "Password is too short";
pub const MISSING_LOWERCASE: &str = "Missing lowercase letters";
pub const MISSING_UPPERCASE: &str = "Missing uppercase letters";
pub const MISSING_DIGITS: &str = "Missing numbers";
pub const MISSING_SPECIAL: &str = "Missing special characters";
pub const REPEATING: &str = "Contains repeating characters";
pub const LOW_VARIETY: &str = "Low character variety";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthCategory {
    Weak,
    Moderate,
    Strong,
}

impl StrengthCategory {
    pub fn from_score(score: i32) -> Self {
        if score >= STRONG_THRESHOLD {
            StrengthCategory::Strong
        } else if score >= MODERATE_THRESHOLD {
            StrengthCategory::Moderate
        } else {
            StrengthCategory::Weak
        }
    }
}

impl fmt::Display for StrengthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrengthCategory::Weak => "Weak",
            StrengthCategory::Moderate => "Moderate",
            StrengthCategory::Strong => "Strong",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrengthReport {
    pub score: i32,
    pub category: StrengthCategory,
    /// Triggered findings only, in rule order.
    pub feedback: Vec<&'static str>,
}

impl StrengthReport {
    /// Highest reachable score: 25 + 10 + 10 + 10 + 15.
    pub const MAX_SCORE: i32 = 70;
}

/// Scores `text` with an additive rubric. Pure and deterministic.
///
/// Length counts characters, not bytes. The score is not clamped.
pub fn score(text: &str) -> StrengthReport {
    let chars: Vec<char> = text.chars().collect();
    let length = chars.len();

    let mut score = 0;
    let mut feedback = Vec::new();

    if length >= GOOD_LENGTH {
        score += 25;
    } else if length >= ACCEPTABLE_LENGTH {
        score += 15;
    } else {
        feedback.push(TOO_SHORT);
    }

    let checks: [(fn(&char) -> bool, i32, &'static str); 4] = [
        (char::is_ascii_lowercase, 10, MISSING_LOWERCASE),
        (char::is_ascii_uppercase, 10, MISSING_UPPERCASE),
        (char::is_ascii_digit, 10, MISSING_DIGITS),
        (|c| !c.is_ascii_alphanumeric(), 15, MISSING_SPECIAL),
    ];

    for (present, points, missing) in checks {
        if chars.iter().any(present) {
            score += points;
        } else {
            feedback.push(missing);
        }
    }

    if chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2]) {
        score -= 10;
        feedback.push(REPEATING);
    }

    // Fewer than 75% distinct characters.
    let distinct = chars.iter().collect::<HashSet<_>>().len();
    if distinct * 4 < length * 3 {
        score -= 5;
        feedback.push(LOW_VARIETY);
    }

    StrengthReport {
        score,
        category: StrengthCategory::from_score(score),
        feedback,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_classes_acceptable_length() {
        let report = score("Abc123!@#");
        assert_eq!(report.score, 60);
        assert_eq!(report.category, StrengthCategory::Strong);
        assert!(report.feedback.is_empty());
    }

    #[test]
    fn test_repeated_lowercase() {
        let report = score("aaaaaaaa");
        assert_eq!(report.score, 10);
        assert_eq!(report.category, StrengthCategory::Weak);
        assert_eq!(
            report.feedback,
            vec![
                MISSING_UPPERCASE,
                MISSING_DIGITS,
                MISSING_SPECIAL,
                REPEATING,
                LOW_VARIETY
            ]
        );
    }

    #[test]
    fn test_max_score() {
        let report = score("Tr0ub4dor&3xyz");
        assert_eq!(report.score, StrengthReport::MAX_SCORE);
        assert_eq!(report.category, StrengthCategory::Strong);
    }

    #[test]
    fn test_empty_string() {
        let report = score("");
        assert_eq!(report.score, 0);
        assert_eq!(report.category, StrengthCategory::Weak);
        assert_eq!(
            report.feedback,
            vec![
                TOO_SHORT,
                MISSING_LOWERCASE,
                MISSING_UPPERCASE,
                MISSING_DIGITS,
                MISSING_SPECIAL
            ]
        );
    }

    #[test]
    fn test_can_go_negative() {
        // Short, no classes but special, triple repeat, low variety.
        let report = score("!!!");
        assert_eq!(report.score, 15 - 10 - 5);

        let report = score("ééééé");
        assert_eq!(report.score, 0);
        assert_eq!(report.category, StrengthCategory::Weak);
    }

    #[test]
    fn test_moderate_band() {
        // 12+ chars, lowercase and digits only, all distinct enough.
        let report = score("abcdefgh1234");
        assert_eq!(report.score, 45);
        assert_eq!(report.category, StrengthCategory::Moderate);
        assert_eq!(report.feedback, vec![MISSING_UPPERCASE, MISSING_SPECIAL]);
    }

    #[test]
    fn test_category_thresholds() {
        assert_eq!(StrengthCategory::from_score(60), StrengthCategory::Strong);
        assert_eq!(StrengthCategory::from_score(59), StrengthCategory::Moderate);
        assert_eq!(StrengthCategory::from_score(40), StrengthCategory::Moderate);
        assert_eq!(StrengthCategory::from_score(39), StrengthCategory::Weak);
        assert_eq!(StrengthCategory::from_score(-15), StrengthCategory::Weak);
    }

    #[test]
    fn test_variety_boundary() {
        // 3 distinct of 4 is exactly 75%: no penalty.
        assert!(!score("aabc").feedback.contains(&LOW_VARIETY));
        // 2 distinct of 4 is below.
        assert!(score("aabb").feedback.contains(&LOW_VARIETY));
    }

    #[test]
    fn test_non_ascii_counts_as_special() {
        let report = score("ü");
        assert!(!report.feedback.contains(&MISSING_SPECIAL));
    }

    #[test]
    fn test_pure() {
        for text in ["", "password", "Abc123!@#", "correct-horse-battery-staple"] {
            assert_eq!(score(text), score(text));
        }
    }
}
