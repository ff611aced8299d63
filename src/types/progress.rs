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

use std::fmt::Display;
use std::fmt::Formatter;

use serde::Deserialize;
use serde::Serialize;

use crate::error::Fallible;
use crate::error::corrupt;
use crate::srs::INITIAL_EASE;
use crate::srs::MAX_EASE;
use crate::srs::MAX_INTERVAL;
use crate::srs::MIN_EASE;
use crate::types::date::Date;
use crate::types::lesson_step::LESSON_STEP_COUNT;
use crate::types::status::Status;
use crate::types::timestamp::Timestamp;

/// A learner's progress on one character.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    /// The character this record tracks. Unique per store.
    #[serde(rename = "char")]
    pub character: String,
    pub status: Status,
    /// The date on which the character becomes eligible for review.
    pub due: Date,
    /// Growth factor for intervals past the fixed step table.
    pub ease: f64,
    /// Days until the next review.
    pub interval: u32,
    /// When the character was last reviewed, if ever.
    #[serde(with = "empty_as_none")]
    pub last_at: Option<Timestamp>,
    /// The number of lesson steps completed, counting from the start.
    pub step: u8,
}

impl ProgressRecord {
    /// The record of a character that has never been started.
    pub fn new(character: impl Into<String>, today: Date) -> Self {
        Self {
            character: character.into(),
            status: Status::New,
            due: today,
            ease: INITIAL_EASE,
            interval: 1,
            last_at: None,
            step: 0,
        }
    }

    /// Check the field domains. Records read from storage go through this
    /// before the engine sees them.
    pub fn validate(&self) -> Fallible<()> {
        if self.character.is_empty() {
            return corrupt("progress record has an empty character.");
        }
        if !(MIN_EASE..=MAX_EASE).contains(&self.ease) {
            return corrupt(format!(
                "ease {} of '{}' is outside [{MIN_EASE}, {MAX_EASE}].",
                self.ease, self.character
            ));
        }
        if self.interval < 1 {
            return corrupt(format!("interval of '{}' is zero.", self.character));
        }
        if self.interval > MAX_INTERVAL {
            return corrupt(format!(
                "interval {} of '{}' is longer than {MAX_INTERVAL} days.",
                self.interval, self.character
            ));
        }
        if self.step > LESSON_STEP_COUNT {
            return corrupt(format!(
                "step {} of '{}' is past the last lesson step.",
                self.step, self.character
            ));
        }
        Ok(())
    }
}

impl Display for ProgressRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} step {}/{}, due {}, interval {}d, ease {:.2}",
            self.character,
            self.status,
            self.step,
            LESSON_STEP_COUNT,
            self.due,
            self.interval,
            self.ease
        )
    }
}

/// `lastAt` is the empty string until the first review.
mod empty_as_none {
    use serde::Deserialize;
    use serde::Deserializer;
    use serde::Serializer;

    use crate::types::timestamp::Timestamp;

    pub fn serialize<S>(value: &Option<Timestamp>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ts) => serializer.serialize_str(&ts.to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Timestamp>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let string = String::deserialize(deserializer)?;
        if string.is_empty() {
            Ok(None)
        } else {
            string.parse().map(Some).map_err(serde::de::Error::custom)
        }
    }
}
