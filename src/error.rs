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

use crate::config::Mode;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Errors a generation request can fail with.
///
/// Every variant is local to a single call; callers are expected to
/// re-prompt for a different configuration.
#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Please select at least one character type")]
    NoCharacterClassSelected,

    #[error("Requested {requested} distinct words but the dictionary only has {available}")]
    InsufficientDictionarySize {
        requested: usize,
        available: usize,
    },

    #[error("No PIN satisfied the constraints after {attempts} attempts")]
    ConstraintUnsatisfiable { attempts: usize },

    #[error("{mode} length must be between {min} and {max}, got {actual}")]
    LengthOutOfRange {
        mode: Mode,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("Batch size must be between {min} and {max}, got {count}")]
    BatchSizeOutOfRange {
        count: usize,
        min: usize,
        max: usize,
    },

    #[error("OS entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Generated bytes were not valid UTF-8: {0}")]
    InvalidUtf8(#[from] FromUtf8Error),
}
