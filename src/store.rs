// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::collections::BTreeMap;

use crate::error::Fallible;
use crate::types::date::Date;
use crate::types::progress::ProgressRecord;

/// Keyed storage for progress records, one per character.
///
/// Writes replace the whole record. There is no coordination across keys:
/// callers that might update the same character concurrently must
/// serialize those updates themselves.
pub trait ProgressStore {
    /// Retrieve a character's record, if it has one.
    fn get(&self, character: &str) -> Fallible<Option<ProgressRecord>>;

    /// Insert or replace the record for `record.character`.
    fn put(&mut self, record: &ProgressRecord) -> Fallible<()>;

    /// Every record due on or before `date`, ordered by due date and then
    /// by character.
    fn due_on_or_before(&self, date: Date) -> Fallible<Vec<ProgressRecord>>;

    /// Every record, ordered by character.
    fn all(&self) -> Fallible<Vec<ProgressRecord>>;

    /// Delete every record.
    fn clear(&mut self) -> Fallible<()>;
}

/// A progress store that lives in memory.
#[derive(Default)]
pub struct MemoryStore {
    records: BTreeMap<String, ProgressRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ProgressStore for MemoryStore {
    fn get(&self, character: &str) -> Fallible<Option<ProgressRecord>> {
        Ok(self.records.get(character).cloned())
    }

    fn put(&mut self, record: &ProgressRecord) -> Fallible<()> {
        record.validate()?;
        self.records.insert(record.character.clone(), record.clone());
        Ok(())
    }

    fn due_on_or_before(&self, date: Date) -> Fallible<Vec<ProgressRecord>> {
        let mut due: Vec<ProgressRecord> = self
            .records
            .values()
            .filter(|record| record.due <= date)
            .cloned()
            .collect();
        due.sort_by(|a, b| a.due.cmp(&b.due).then_with(|| a.character.cmp(&b.character)));
        Ok(due)
    }

    fn all(&self) -> Fallible<Vec<ProgressRecord>> {
        Ok(self.records.values().cloned().collect())
    }

    fn clear(&mut self) -> Fallible<()> {
        self.records.clear();
        Ok(())
    }
}
