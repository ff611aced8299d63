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

use crate::collection::Collection;
use crate::error::Fallible;
use crate::error::fail;
use crate::lesson::complete_step;
use crate::types::lesson_step::LessonStep;
use crate::types::timestamp::Timestamp;

pub fn learn_step(directory: Option<String>, character: &str, step: LessonStep) -> Fallible<()> {
    let mut coll = Collection::new(directory)?;
    if coll.catalog.get(character).is_none() {
        return fail(format!("'{character}' is not in the catalog."));
    }
    let record = complete_step(&mut coll.db, character, step, Timestamp::now())?;
    println!("{} done.", step.title());
    println!("{record}");
    if let Some(next) = LessonStep::from_index(step.index() + 1) {
        println!("Next: {} ({})", next.title(), next);
    }
    Ok(())
}
