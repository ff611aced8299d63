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

use std::fs::read_to_string;
use std::path::Path;

use serde::Deserialize;

use crate::error::Fallible;

/// The name of the optional configuration file in a collection directory.
pub const CONFIG_FILE: &str = "hanzi.toml";

/// Per-collection configuration. Paths are relative to the collection
/// directory.
#[derive(Clone, PartialEq, Eq, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The character catalog.
    pub catalog: String,
    /// The progress database.
    pub database: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog: "chars.json".to_string(),
            database: "hanzi.db".to_string(),
        }
    }
}

impl Config {
    /// Read `hanzi.toml` from the directory, falling back to the defaults
    /// when it is absent.
    pub fn load(directory: &Path) -> Fallible<Self> {
        let path = directory.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        log::debug!("Reading configuration from {}.", path.display());
        let content = read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Fallible<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() -> Fallible<()> {
        let dir = tempdir()?;
        assert_eq!(Config::load(dir.path())?, Config::default());
        Ok(())
    }

    #[test]
    fn test_partial_file() -> Fallible<()> {
        let config = Config::parse("database = \"progress.sqlite3\"\n")?;
        assert_eq!(config.catalog, "chars.json");
        assert_eq!(config.database, "progress.sqlite3");
        Ok(())
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let result = Config::parse("catalogue = \"chars.json\"\n");
        assert!(result.is_err());
    }
}
