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

//! Lesson and review flows: load a record, run it through the scheduler,
//! store the result.

use serde::Serialize;

use crate::error::Fallible;
use crate::error::fail;
use crate::srs;
use crate::store::ProgressStore;
use crate::types::date::Date;
use crate::types::lesson_step::LessonStep;
use crate::types::progress::ProgressRecord;
use crate::types::status::Status;
use crate::types::timestamp::Timestamp;

/// Record the completion of a lesson step. A character with no record yet
/// starts from the defaults.
pub fn complete_step(
    store: &mut impl ProgressStore,
    character: &str,
    step: LessonStep,
    now: Timestamp,
) -> Fallible<ProgressRecord> {
    let record = match store.get(character)? {
        Some(record) => record,
        None => ProgressRecord::new(character, now.date()),
    };
    let record = srs::complete_step(&record, step, now);
    store.put(&record)?;
    log::info!(
        "'{character}' completed {step} ({}/{}).",
        record.step,
        LessonStep::ALL.len()
    );
    Ok(record)
}

/// Record the outcome of a review.
pub fn record_review(
    store: &mut impl ProgressStore,
    character: &str,
    correct: bool,
    now: Timestamp,
) -> Fallible<ProgressRecord> {
    let record = match store.get(character)? {
        Some(record) => record,
        None => return fail(format!("'{character}' has not been started.")),
    };
    let record = srs::calculate_next_review(&record, correct, now);
    store.put(&record)?;
    Ok(record)
}

/// Characters waiting to be reviewed: started, and due by `today`.
pub fn review_queue(store: &impl ProgressStore, today: Date) -> Fallible<Vec<ProgressRecord>> {
    let due = store.due_on_or_before(today)?;
    Ok(due
        .into_iter()
        .filter(|record| record.status != Status::New)
        .collect())
}

/// Characters due by `today` that are not yet mastered.
pub fn today_reviews(store: &impl ProgressStore, today: Date) -> Fallible<Vec<ProgressRecord>> {
    let due = store.due_on_or_before(today)?;
    Ok(due
        .into_iter()
        .filter(|record| record.status != Status::Mastered)
        .collect())
}

#[derive(Serialize, PartialEq, Eq, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    /// Characters in the catalog.
    pub total: usize,
    /// Characters past the `new` status.
    pub learned: usize,
    pub mastered: usize,
    /// Size of today's review queue.
    pub due_today: usize,
    /// Characters due by today that are not yet mastered, started or not.
    pub reviews_today: usize,
}

pub fn stats(store: &impl ProgressStore, total: usize, today: Date) -> Fallible<Stats> {
    let all = store.all()?;
    let learned = all.iter().filter(|r| r.status != Status::New).count();
    let mastered = all.iter().filter(|r| r.status == Status::Mastered).count();
    let due_today = review_queue(store, today)?.len();
    let reviews_today = today_reviews(store, today)?.len();
    Ok(Stats {
        total,
        learned,
        mastered,
        due_today,
        reviews_today,
    })
}
