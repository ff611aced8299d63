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

use rusqlite::ToSql;
use rusqlite::types::FromSql;
use rusqlite::types::FromSqlError;
use rusqlite::types::FromSqlResult;
use rusqlite::types::ToSqlOutput;
use rusqlite::types::ValueRef;
use serde::Deserialize;
use serde::Serialize;

use crate::error::ErrorReport;
use crate::error::corrupt;

/// Where a character is in its lifecycle.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// No lesson step completed yet.
    New,
    /// Working through the lesson steps.
    Learning,
    /// In the review cycle.
    Reviewing,
    /// Review interval has reached a month or more.
    Mastered,
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::New => "new",
            Status::Learning => "learning",
            Status::Reviewing => "reviewing",
            Status::Mastered => "mastered",
        }
    }
}

impl TryFrom<String> for Status {
    type Error = ErrorReport;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            "new" => Ok(Status::New),
            "learning" => Ok(Status::Learning),
            "reviewing" => Ok(Status::Reviewing),
            "mastered" => Ok(Status::Mastered),
            _ => corrupt(format!("Invalid status: {}", value)),
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ToSql for Status {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Status {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let string: String = FromSql::column_result(value)?;
        Status::try_from(string).map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}
