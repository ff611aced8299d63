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

use std::env::current_dir;
use std::path::PathBuf;
use std::time::Instant;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::db::Database;
use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::error::fail;
use crate::types::date::Date;

/// A collection directory: its configuration, catalog, and progress
/// database.
pub struct Collection {
    pub directory: PathBuf,
    pub config: Config,
    pub db: Database,
    pub catalog: Catalog,
}

impl Collection {
    pub fn new(directory: Option<String>) -> Fallible<Self> {
        let directory = resolve_directory(directory)?;
        let config = Config::load(&directory)?;

        let db_path: PathBuf = directory.join(&config.database);
        let db_path: &str = db_path
            .to_str()
            .ok_or_else(|| ErrorReport::new("invalid path"))?;
        let db: Database = Database::new(db_path)?;

        let catalog = {
            log::debug!("Loading catalog...");
            let start = Instant::now();
            let catalog = Catalog::load(&directory.join(&config.catalog))?;
            let duration = start.elapsed().as_millis();
            log::debug!("Catalog loaded in {duration}ms.");
            catalog
        };

        Ok(Self {
            directory,
            config,
            db,
            catalog,
        })
    }

    /// Make sure every catalog character has a progress record.
    pub fn seed(&mut self, today: Date) -> Fallible<usize> {
        let characters = self.catalog.characters().iter().map(|c| c.character.as_str());
        self.db.seed(characters, today)
    }
}

/// The collection directory to use: the given one, or the current one.
pub fn resolve_directory(directory: Option<String>) -> Fallible<PathBuf> {
    let directory: PathBuf = match directory {
        Some(dir) => PathBuf::from(dir),
        None => current_dir()?,
    };
    if directory.exists() {
        Ok(directory.canonicalize()?)
    } else {
        fail("directory does not exist.")
    }
}
