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

use rusqlite::Connection;
use rusqlite::OptionalExtension;
use rusqlite::Row;
use rusqlite::Transaction;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::settings::Settings;
use crate::store::ProgressStore;
use crate::types::date::Date;
use crate::types::progress::ProgressRecord;
use crate::types::status::Status;
use crate::types::timestamp::Timestamp;

/// The key the settings record is stored under.
const SETTINGS_KEY: &str = "user-preferences";

const SELECT_PROGRESS: &str =
    "select char, status, due, ease, interval, last_at, step from progress";

/// The SQLite-backed progress store.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn new(database_path: &str) -> Fallible<Self> {
        let mut conn = Connection::open(database_path)?;
        {
            let tx = conn.transaction()?;
            if !probe_schema_exists(&tx)? {
                log::debug!("Creating schema in {database_path}.");
                tx.execute_batch(include_str!("schema.sql"))?;
                tx.commit()?;
            }
        }
        Ok(Self { conn })
    }

    /// The number of progress records.
    pub fn count(&self) -> Fallible<usize> {
        let count: i64 = self
            .conn
            .query_row("select count(*) from progress;", [], |row| row.get(0))?;
        Ok(count as usize)
    }

    /// Give every character without a record a fresh one, due `today`.
    /// Existing records are left alone. Returns how many were created.
    pub fn seed<'a>(
        &mut self,
        characters: impl IntoIterator<Item = &'a str>,
        today: Date,
    ) -> Fallible<usize> {
        let tx = self.conn.transaction()?;
        let mut created = 0;
        for character in characters {
            let record = ProgressRecord::new(character, today);
            record.validate()?;
            let sql = "insert into progress (char, status, due, ease, interval, last_at, step) values (?, ?, ?, ?, ?, ?, ?) on conflict (char) do nothing;";
            created += tx.execute(sql, record_params(&record))?;
        }
        tx.commit()?;
        if created > 0 {
            log::info!("Created {created} new progress records.");
        }
        Ok(created)
    }

    /// Load the settings record, or the defaults if none has been saved.
    pub fn get_settings(&self) -> Fallible<Settings> {
        let sql = "select value from settings where key = ?;";
        let value: Option<String> = self
            .conn
            .query_row(sql, [SETTINGS_KEY], |row| row.get(0))
            .optional()?;
        match value {
            Some(json) => serde_json::from_str(&json).map_err(|e| {
                ErrorReport::integrity(format!("invalid stored settings: {e}"))
            }),
            None => Ok(Settings::default()),
        }
    }

    pub fn save_settings(&mut self, settings: &Settings) -> Fallible<()> {
        let json = serde_json::to_string(settings)?;
        let sql = "insert into settings (key, value) values (?, ?) on conflict (key) do update set value = excluded.value;";
        self.conn.execute(sql, (SETTINGS_KEY, json))?;
        Ok(())
    }

    fn query(&self, sql: &str, params: impl rusqlite::Params) -> Fallible<Vec<ProgressRecord>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(read_record(row)?);
        }
        Ok(records)
    }
}

impl ProgressStore for Database {
    fn get(&self, character: &str) -> Fallible<Option<ProgressRecord>> {
        let sql = format!("{SELECT_PROGRESS} where char = ?;");
        let mut records = self.query(&sql, [character])?;
        Ok(records.pop())
    }

    fn put(&mut self, record: &ProgressRecord) -> Fallible<()> {
        record.validate()?;
        log::debug!("Saving progress of '{}'.", record.character);
        let sql = "insert into progress (char, status, due, ease, interval, last_at, step) values (?, ?, ?, ?, ?, ?, ?) on conflict (char) do update set status = excluded.status, due = excluded.due, ease = excluded.ease, interval = excluded.interval, last_at = excluded.last_at, step = excluded.step;";
        self.conn.execute(sql, record_params(record))?;
        Ok(())
    }

    fn due_on_or_before(&self, date: Date) -> Fallible<Vec<ProgressRecord>> {
        // Dates are stored as `YYYY-MM-DD`, so string comparison is date
        // comparison.
        let sql = format!("{SELECT_PROGRESS} where due <= ? order by due, char;");
        self.query(&sql, [date])
    }

    fn all(&self) -> Fallible<Vec<ProgressRecord>> {
        let sql = format!("{SELECT_PROGRESS} order by char;");
        self.query(&sql, [])
    }

    fn clear(&mut self) -> Fallible<()> {
        let deleted = self.conn.execute("delete from progress;", [])?;
        log::info!("Deleted {deleted} progress records.");
        Ok(())
    }
}

type RecordParams<'a> = (&'a str, Status, Date, f64, u32, String, u8);

fn record_params(record: &ProgressRecord) -> RecordParams<'_> {
    let last_at = match record.last_at {
        Some(ts) => ts.to_string(),
        None => String::new(),
    };
    (
        &record.character,
        record.status,
        record.due,
        record.ease,
        record.interval,
        last_at,
        record.step,
    )
}

fn read_record(row: &Row) -> Fallible<ProgressRecord> {
    let character: String = row.get(0)?;
    let status: Status = row.get(1)?;
    let due: Date = row.get(2)?;
    let ease: f64 = row.get(3)?;
    let interval: i64 = row.get(4)?;
    let last_at: String = row.get(5)?;
    let step: i64 = row.get(6)?;

    let interval = u32::try_from(interval).map_err(|_| {
        ErrorReport::integrity(format!("interval {interval} of '{character}' is negative."))
    })?;
    let step = u8::try_from(step)
        .map_err(|_| ErrorReport::integrity(format!("step {step} of '{character}' is invalid.")))?;
    let last_at: Option<Timestamp> = if last_at.is_empty() {
        None
    } else {
        let ts = last_at.parse().map_err(|e| {
            ErrorReport::integrity(format!("last review time of '{character}': {e}"))
        })?;
        Some(ts)
    };

    let record = ProgressRecord {
        character,
        status,
        due,
        ease,
        interval,
        last_at,
        step,
    };
    record.validate()?;
    Ok(record)
}

fn probe_schema_exists(tx: &Transaction) -> Fallible<bool> {
    let sql = "select count(*) from sqlite_master where type='table' AND name=?;";
    let count: i64 = tx.query_row(sql, ["progress"], |row| row.get(0))?;
    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use tempfile::tempdir;

    use super::*;
    use crate::error::ErrorKind;
    use crate::settings::Theme;
    use crate::settings::TraceLevel;
    use crate::store::contract;

    fn open() -> Fallible<(TempDir, Database)> {
        let dir = tempdir()?;
        let path = dir.path().join("hanzi.db");
        let db = Database::new(path.to_str().unwrap())?;
        Ok((dir, db))
    }

    fn today() -> Date {
        "2024-05-01".parse().unwrap()
    }

    #[test]
    fn test_round_trip() -> Fallible<()> {
        let (_dir, mut db) = open()?;
        contract::round_trip(&mut db)
    }

    #[test]
    fn test_due_boundary() -> Fallible<()> {
        let (_dir, mut db) = open()?;
        contract::due_boundary(&mut db)
    }

    #[test]
    fn test_clear() -> Fallible<()> {
        let (_dir, mut db) = open()?;
        contract::clear(&mut db)
    }

    #[test]
    fn test_reopen_keeps_data() -> Fallible<()> {
        let dir = tempdir()?;
        let path = dir.path().join("hanzi.db");
        let path = path.to_str().unwrap();
        {
            let mut db = Database::new(path)?;
            db.put(&ProgressRecord::new("月", today()))?;
        }
        let db = Database::new(path)?;
        assert_eq!(db.get("月")?, Some(ProgressRecord::new("月", today())));
        Ok(())
    }

    #[test]
    fn test_seed_skips_existing() -> Fallible<()> {
        let (_dir, mut db) = open()?;
        let mut started = ProgressRecord::new("大", today());
        started.step = 2;
        started.status = Status::Learning;
        db.put(&started)?;

        let created = db.seed(["大", "小", "中"], today())?;
        assert_eq!(created, 2);
        assert_eq!(db.count()?, 3);
        assert_eq!(db.get("大")?, Some(started));
        assert_eq!(db.get("小")?, Some(ProgressRecord::new("小", today())));

        assert_eq!(db.seed(["大", "小", "中"], today())?, 0);
        Ok(())
    }

    #[test]
    fn test_malformed_row_is_integrity_error() -> Fallible<()> {
        let (_dir, db) = open()?;
        db.conn.execute(
            "insert into progress (char, status, due, ease, interval, last_at, step) values ('田', 'reviewing', 'soon', 2.5, 1, '', 0);",
            [],
        )?;
        let err = db.get("田").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Integrity);

        db.conn.execute(
            "update progress set due = '2024-05-01', last_at = 'yesterday' where char = '田';",
            [],
        )?;
        let err = db.all().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Integrity);
        Ok(())
    }

    #[test]
    fn test_settings_default_and_update() -> Fallible<()> {
        let (_dir, mut db) = open()?;
        assert_eq!(db.get_settings()?, Settings::default());
        let settings = Settings {
            show_pinyin: false,
            auto_play: true,
            trace_level: TraceLevel::Hard,
            theme: Theme::Dark,
        };
        db.save_settings(&settings)?;
        assert_eq!(db.get_settings()?, settings);
        let settings = Settings {
            theme: Theme::Light,
            ..settings
        };
        db.save_settings(&settings)?;
        assert_eq!(db.get_settings()?, settings);
        Ok(())
    }

    #[test]
    fn test_clear_keeps_settings() -> Fallible<()> {
        let (_dir, mut db) = open()?;
        let settings = Settings {
            show_pinyin: false,
            ..Settings::default()
        };
        db.save_settings(&settings)?;
        db.seed(["山"], today())?;
        db.clear()?;
        assert_eq!(db.count()?, 0);
        assert_eq!(db.get_settings()?, settings);
        Ok(())
    }
}
