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

use crate::charset::{AMBIGUOUS, CharacterClass};
use crate::config::RandomConfig;
use crate::error::GenerationError;
use crate::rng::RandomSource;
use zeroize::Zeroizing;

/// Character pool for a random credential, plus the filtered alphabet of
/// each enabled class in priority order.
pub struct CharacterPool {
    pub pool: Zeroizing<Vec<u8>>,
    pub classes: Vec<(CharacterClass, Vec<u8>)>,
}

impl CharacterPool {
    pub fn build(config: &RandomConfig) -> Self {
        let enabled = [
            config.use_lowercase,
            config.use_uppercase,
            config.use_digits,
            config.use_special,
        ];

        let mut pool = Zeroizing::new(Vec::new());
        let mut classes = Vec::with_capacity(4);

        for (class, _) in CharacterClass::PRIORITY
            .into_iter()
            .zip(enabled)
            .filter(|(_, on)| *on)
        {
            let filtered = class.filtered(config.exclude_similar, config.exclude_ambiguous);
            pool.extend_from_slice(&filtered);
            classes.push((class, filtered));
        }

        if config.exclude_ambiguous {
            pool.retain(|c| !AMBIGUOUS.contains(c));
        }

        Self { pool, classes }
    }

    pub fn len(&self) -> usize {
        self.pool.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pool.is_empty()
    }
}

pub fn generate_random<R: RandomSource>(
    config: &RandomConfig,
    rng: &mut R,
) -> Result<Zeroizing<String>, GenerationError> {
    let pool = CharacterPool::build(config);
    if pool.is_empty() {
        return Err(GenerationError::NoCharacterClassSelected);
    }

    tracing::debug!(
        pool_size = pool.len(),
        classes = pool.classes.len(),
        length = config.length,
        "building random credential"
    );

    // One representative per class; classes whose alphabet was filtered empty are skipped.
    let mut required: Vec<u8> = pool
        .classes
        .iter()
        .filter(|(_, alphabet)| !alphabet.is_empty())
        .map(|(_, alphabet)| rng.pick(alphabet))
        .collect();

    let mut bytes = Zeroizing::new(Vec::with_capacity(config.length));

    if config.ensure_all_types && !required.is_empty() {
        required.truncate(config.length);

        for _ in 0..config.length - required.len() {
            bytes.push(rng.pick(&pool.pool));
        }
        bytes.extend_from_slice(&required);
        rng.shuffle(&mut bytes);
    } else {
        for _ in 0..config.length {
            bytes.push(rng.pick(&pool.pool));
        }
    }

    let result = String::from_utf8(bytes.to_vec())?;

    Ok(Zeroizing::new(result))
}
