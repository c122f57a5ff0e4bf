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

//! Caller-owned generation history and the plaintext export formats.

use crate::config::Mode;
use crate::generator::Credential;
use chrono::NaiveDateTime;
use zeroize::Zeroizing;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const FILENAME_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

pub const CREDENTIALS_EXPORT_PREFIX: &str = "passwords";
pub const HISTORY_EXPORT_PREFIX: &str = "password_history";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub text: Zeroizing<String>,
    pub timestamp: NaiveDateTime,
    pub length: usize,
    pub mode: Mode,
}

impl HistoryEntry {
    /// `text | Mode | YYYY-MM-DD HH:MM:SS`
    pub fn export_line(&self) -> String {
        format!(
            "{} | {} | {}",
            self.text.as_str(),
            self.mode,
            self.timestamp.format(TIMESTAMP_FORMAT)
        )
    }
}

/// Append-only log of generated credentials, in generation order.
#[derive(Debug, Default, Clone)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, credential: &Credential, timestamp: NaiveDateTime) {
        self.entries.push(HistoryEntry {
            text: credential.text.clone(),
            timestamp,
            length: credential.len(),
            mode: credential.mode,
        });
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// One pipe-delimited line per entry, newline separated.
    pub fn export(&self) -> Zeroizing<String> {
        Zeroizing::new(
            self.entries
                .iter()
                .map(HistoryEntry::export_line)
                .collect::<Vec<_>>()
                .join("\n"),
        )
    }
}

/// One credential per line, newline separated.
pub fn export_credentials(credentials: &[Credential]) -> Zeroizing<String> {
    Zeroizing::new(
        credentials
            .iter()
            .map(Credential::as_str)
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

/// `<prefix>_YYYYMMDD_HHMMSS.txt`
pub fn export_filename(prefix: &str, timestamp: NaiveDateTime) -> String {
    format!(
        "{}_{}.txt",
        prefix,
        timestamp.format(FILENAME_TIMESTAMP_FORMAT)
    )
}
