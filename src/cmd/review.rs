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

use std::io::BufRead;
use std::io::Write;
use std::io::stdin;
use std::io::stdout;

use crate::catalog::Catalog;
use crate::collection::Collection;
use crate::error::Fallible;
use crate::error::fail;
use crate::lesson::record_review;
use crate::lesson::review_queue;
use crate::store::ProgressStore;
use crate::types::date::Date;
use crate::types::timestamp::Timestamp;

pub fn review_collection(
    directory: Option<String>,
    today: Option<Date>,
    mark: Option<(String, bool)>,
) -> Fallible<()> {
    let mut coll = Collection::new(directory)?;
    let now = Timestamp::now();
    match mark {
        Some((character, correct)) => {
            if coll.catalog.get(&character).is_none() {
                return fail(format!("'{character}' is not in the catalog."));
            }
            let record = record_review(&mut coll.db, &character, correct, now)?;
            println!("{record}");
        }
        None => {
            let today = today.unwrap_or(now.date());
            let summary = run_session(
                &mut coll.db,
                &coll.catalog,
                today,
                now,
                stdin().lock(),
                stdout().lock(),
            )?;
            log::debug!(
                "Session ended: {} reviewed, {} correct.",
                summary.reviewed,
                summary.correct
            );
        }
    }
    Ok(())
}

#[derive(PartialEq, Eq, Debug)]
pub struct SessionSummary {
    pub reviewed: usize,
    pub correct: usize,
}

/// Walk through the review queue, asking whether each character was
/// remembered. Stops at the end of the queue, on `q`, or at end of input.
pub fn run_session<R: BufRead, W: Write>(
    store: &mut impl ProgressStore,
    catalog: &Catalog,
    today: Date,
    now: Timestamp,
    mut input: R,
    mut output: W,
) -> Fallible<SessionSummary> {
    let queue = review_queue(store, today)?;
    let mut summary = SessionSummary {
        reviewed: 0,
        correct: 0,
    };
    if queue.is_empty() {
        writeln!(output, "Nothing to review today.")?;
        return Ok(summary);
    }
    writeln!(output, "{} characters to review.", queue.len())?;
    'queue: for record in queue {
        match catalog.get(&record.character) {
            Some(c) => writeln!(output, "\n{}  {}  {}", c.character, c.pinyin, c.meaning)?,
            None => writeln!(output, "\n{}", record.character)?,
        }
        let correct = loop {
            write!(output, "Remembered? [y/n/q] ")?;
            output.flush()?;
            let mut line = String::new();
            if input.read_line(&mut line)? == 0 {
                break 'queue;
            }
            match line.trim() {
                "y" | "Y" => break true,
                "n" | "N" => break false,
                "q" | "Q" => break 'queue,
                _ => writeln!(output, "Please answer y or n.")?,
            }
        };
        let next = record_review(store, &record.character, correct, now)?;
        summary.reviewed += 1;
        if correct {
            summary.correct += 1;
        }
        writeln!(output, "Next review on {} ({}).", next.due, next.status)?;
    }
    writeln!(
        output,
        "\nReviewed {}, remembered {}.",
        summary.reviewed, summary.correct
    )?;
    Ok(summary)
}
