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

//! Review scheduling.
//!
//! Intervals follow a fixed table while the current interval is one of its
//! keys, matched exactly. Any other interval grows by the ease factor. An
//! interval of 30 is not a key, so from there on growth is multiplicative.

use crate::types::lesson_step::LESSON_STEP_COUNT;
use crate::types::lesson_step::LessonStep;
use crate::types::progress::ProgressRecord;
use crate::types::status::Status;
use crate::types::timestamp::Timestamp;

/// The ease of a character that has never been reviewed.
pub const INITIAL_EASE: f64 = 2.5;

/// The lowest ease a character can fall to.
pub const MIN_EASE: f64 = 1.3;

/// The highest ease a character can climb to.
pub const MAX_EASE: f64 = 3.0;

/// Added to the ease on a correct answer.
pub const EASE_BONUS: f64 = 0.1;

/// Subtracted from the ease on a wrong answer.
pub const EASE_PENALTY: f64 = 0.2;

/// Characters whose interval reaches this many days are mastered.
pub const MASTERED_INTERVAL: u32 = 30;

/// The longest interval, in days. Growth stops here.
pub const MAX_INTERVAL: u32 = 36500;

/// Schedule the next review of a character after a review outcome.
///
/// The returned record has a new interval, ease, due date, status, and
/// last review time. The character and lesson step are carried over.
pub fn calculate_next_review(
    record: &ProgressRecord,
    correct: bool,
    now: Timestamp,
) -> ProgressRecord {
    let (interval, ease) = if correct {
        let interval = grow_interval(record.interval, record.ease);
        let ease = (record.ease + EASE_BONUS).min(MAX_EASE);
        (interval, ease)
    } else {
        let ease = (record.ease - EASE_PENALTY).max(MIN_EASE);
        (1, ease)
    };
    let status = if interval >= MASTERED_INTERVAL {
        Status::Mastered
    } else {
        Status::Reviewing
    };
    let due = now.date().add_days(interval);

    debug_assert!(
        (1..=MAX_INTERVAL).contains(&interval),
        "interval {interval} is out of range"
    );
    debug_assert!(
        (MIN_EASE..=MAX_EASE).contains(&ease),
        "ease {ease} is out of range"
    );

    log::debug!(
        "Scheduled '{}' ({}): interval {} -> {}, ease {} -> {}, due {}.",
        record.character,
        if correct { "correct" } else { "wrong" },
        record.interval,
        interval,
        record.ease,
        ease,
        due
    );

    ProgressRecord {
        character: record.character.clone(),
        status,
        due,
        ease,
        interval,
        last_at: Some(now),
        step: record.step,
    }
}

/// The interval after a correct answer.
fn grow_interval(interval: u32, ease: f64) -> u32 {
    match interval {
        1 => 3,
        3 => 7,
        7 => 14,
        14 => 30,
        _ => {
            let grown = (interval as f64 * ease).round();
            if grown >= MAX_INTERVAL as f64 {
                MAX_INTERVAL
            } else {
                grown as u32
            }
        }
    }
}

/// Record that a lesson step was completed.
///
/// The step counter only moves forward. When a new character finishes
/// the last step it enters the review cycle as though it had just been
/// answered correctly once.
pub fn complete_step(record: &ProgressRecord, step: LessonStep, now: Timestamp) -> ProgressRecord {
    let new_step = record.step.max(step.index() + 1);

    if new_step >= LESSON_STEP_COUNT && record.status == Status::New {
        log::debug!("'{}' finished its first lesson.", record.character);
        let learning = ProgressRecord {
            status: Status::Learning,
            step: new_step,
            ..record.clone()
        };
        return calculate_next_review(&learning, true, now);
    }

    let status = match record.status {
        Status::New => Status::Learning,
        status => status,
    };
    ProgressRecord {
        status,
        step: new_step,
        ..record.clone()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use chrono::Utc;

    use super::*;
    use crate::types::date::Date;

    fn now() -> Timestamp {
        Timestamp::new(Utc.with_ymd_and_hms(2024, 5, 1, 18, 30, 0).unwrap())
    }

    fn today() -> Date {
        "2024-05-01".parse().unwrap()
    }

    fn fresh() -> ProgressRecord {
        ProgressRecord::new("木", today())
    }

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_first_correct_review() {
        let next = calculate_next_review(&fresh(), true, now());
        assert_eq!(next.interval, 3);
        assert_eq!(next.ease, 2.6);
        assert_eq!(next.status, Status::Reviewing);
        assert_eq!(next.due.to_string(), "2024-05-04");
        assert_eq!(next.last_at, Some(now()));
        assert_eq!(next.character, "木");
        assert_eq!(next.step, 0);
    }

    #[test]
    fn test_correct_chain_follows_table() {
        let mut record = fresh();
        let mut intervals = Vec::new();
        let mut statuses = Vec::new();
        for _ in 0..4 {
            record = calculate_next_review(&record, true, now());
            intervals.push(record.interval);
            statuses.push(record.status);
        }
        assert_eq!(intervals, vec![3, 7, 14, 30]);
        assert_eq!(
            statuses,
            vec![
                Status::Reviewing,
                Status::Reviewing,
                Status::Reviewing,
                Status::Mastered
            ]
        );
        assert!(approx(record.ease, 2.9));
        assert_eq!(record.due.to_string(), "2024-05-31");
    }

    #[test]
    fn test_thirty_days_grows_by_ease() {
        let record = ProgressRecord {
            interval: 30,
            ease: 2.9,
            status: Status::Mastered,
            ..fresh()
        };
        let next = calculate_next_review(&record, true, now());
        // round(30 * 2.9), with the ease from before the update.
        assert_eq!(next.interval, 87);
        assert_eq!(next.ease, 3.0);
        assert_eq!(next.status, Status::Mastered);
    }

    #[test]
    fn test_off_table_interval_is_not_snapped() {
        // 5 lies between table keys; it must not be treated as 3 or 7.
        let record = ProgressRecord {
            interval: 5,
            ease: 1.3,
            ..fresh()
        };
        let next = calculate_next_review(&record, true, now());
        assert_eq!(next.interval, 7); // round(6.5)
        let record = ProgressRecord {
            interval: 2,
            ease: 1.3,
            ..fresh()
        };
        let next = calculate_next_review(&record, true, now());
        assert_eq!(next.interval, 3); // round(2.6)
    }

    #[test]
    fn test_interval_growth_is_capped() {
        let record = ProgressRecord {
            interval: 20000,
            ease: 2.0,
            status: Status::Mastered,
            ..fresh()
        };
        let next = calculate_next_review(&record, true, now());
        assert_eq!(next.interval, MAX_INTERVAL);

        let record = ProgressRecord {
            interval: MAX_INTERVAL,
            ease: MAX_EASE,
            status: Status::Mastered,
            ..fresh()
        };
        assert!(record.validate().is_ok());
        let next = calculate_next_review(&record, true, now());
        assert_eq!(next.interval, MAX_INTERVAL);
        assert_eq!(next.status, Status::Mastered);
        assert_eq!(next.due, today().add_days(MAX_INTERVAL));
        assert!(next.validate().is_ok());
    }

    #[test]
    fn test_ease_capped_at_max() {
        let record = ProgressRecord {
            ease: 2.95,
            ..fresh()
        };
        let next = calculate_next_review(&record, true, now());
        assert_eq!(next.ease, MAX_EASE);
    }

    #[test]
    fn test_wrong_answer_resets_interval() {
        let record = ProgressRecord {
            interval: 14,
            ease: 2.5,
            status: Status::Reviewing,
            ..fresh()
        };
        let next = calculate_next_review(&record, false, now());
        assert_eq!(next.interval, 1);
        assert!(approx(next.ease, 2.3));
        assert_eq!(next.status, Status::Reviewing);
        assert_eq!(next.due.to_string(), "2024-05-02");
    }

    #[test]
    fn test_wrong_answer_demotes_mastered() {
        let record = ProgressRecord {
            interval: 87,
            ease: 3.0,
            status: Status::Mastered,
            ..fresh()
        };
        let next = calculate_next_review(&record, false, now());
        assert_eq!(next.status, Status::Reviewing);
        assert_eq!(next.interval, 1);
        assert!(approx(next.ease, 2.8));
    }

    #[test]
    fn test_ease_floored_at_min() {
        let record = ProgressRecord {
            ease: 1.4,
            ..fresh()
        };
        let next = calculate_next_review(&record, false, now());
        assert_eq!(next.ease, MIN_EASE);
        let next = calculate_next_review(&next, false, now());
        assert_eq!(next.ease, MIN_EASE);
    }

    #[test]
    fn test_outputs_stay_in_domain() {
        let eases = [1.3, 1.45, 2.0, 2.5, 2.95, 3.0];
        let intervals = [1, 2, 3, 4, 7, 14, 15, 29, 30, 31, 100, 365, 20000, MAX_INTERVAL];
        for ease in eases {
            for interval in intervals {
                for correct in [true, false] {
                    let record = ProgressRecord {
                        ease,
                        interval,
                        status: Status::Reviewing,
                        ..fresh()
                    };
                    let next = calculate_next_review(&record, correct, now());
                    assert!(next.validate().is_ok());
                    assert_eq!(next.status == Status::Mastered, next.interval >= 30);
                }
            }
        }
    }

    #[test]
    fn test_input_is_untouched() {
        let record = fresh();
        let before = record.clone();
        let _ = calculate_next_review(&record, true, now());
        let _ = complete_step(&record, LessonStep::Quiz, now());
        assert_eq!(record, before);
    }

    #[test]
    fn test_first_step_starts_learning() {
        let next = complete_step(&fresh(), LessonStep::Intro, now());
        assert_eq!(next.step, 1);
        assert_eq!(next.status, Status::Learning);
        assert_eq!(next.interval, 1);
        assert_eq!(next.due, today());
        assert_eq!(next.last_at, None);
    }

    #[test]
    fn test_step_is_monotonic() {
        let mut record = fresh();
        for (input, expected) in [
            (LessonStep::Trace, 4),
            (LessonStep::Decompose, 4),
            (LessonStep::Words, 5),
            (LessonStep::Intro, 5),
        ] {
            let before = record.step;
            record = complete_step(&record, input, now());
            assert_eq!(record.step, before.max(input.index() + 1));
            assert_eq!(record.step, expected);
        }
    }

    #[test]
    fn test_finishing_lesson_seeds_first_review() {
        let record = ProgressRecord { step: 5, ..fresh() };
        let next = complete_step(&record, LessonStep::Quiz, now());
        assert_eq!(next.step, 6);
        assert_eq!(next.status, Status::Reviewing);
        assert_eq!(next.interval, 3);
        assert_eq!(next.ease, 2.6);
        assert_eq!(next.due.to_string(), "2024-05-04");
        assert_eq!(next.last_at, Some(now()));
    }

    #[test]
    fn test_finishing_lesson_while_learning_does_not_schedule() {
        let record = ProgressRecord {
            step: 5,
            status: Status::Learning,
            ..fresh()
        };
        let next = complete_step(&record, LessonStep::Quiz, now());
        assert_eq!(next.step, 6);
        assert_eq!(next.status, Status::Learning);
        assert_eq!(next.interval, 1);
        assert_eq!(next.last_at, None);
    }

    #[test]
    fn test_repeating_a_step_is_idempotent() {
        let once = complete_step(&fresh(), LessonStep::Stroke, now());
        let twice = complete_step(&once, LessonStep::Stroke, now());
        assert_eq!(once, twice);

        let done = complete_step(&ProgressRecord { step: 5, ..fresh() }, LessonStep::Quiz, now());
        let again = complete_step(&done, LessonStep::Quiz, now());
        assert_eq!(again.step, 6);
        assert_eq!(again.status, Status::Reviewing);
        assert_eq!(again.interval, done.interval);
    }

    #[test]
    fn test_reviewing_status_survives_step_completion() {
        let record = ProgressRecord {
            status: Status::Mastered,
            step: 6,
            interval: 30,
            ..fresh()
        };
        let next = complete_step(&record, LessonStep::Intro, now());
        assert_eq!(next.status, Status::Mastered);
        assert_eq!(next.step, 6);
    }
}
