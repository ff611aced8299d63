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

use std::collections::HashSet;
use std::fmt::Display;
use std::fmt::Formatter;
use std::fs::read_to_string;
use std::path::Path;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::types::character::Character;

/// The curriculum: every character that can be learned, in lesson order.
pub struct Catalog {
    characters: Vec<Character>,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Error,
    Warning,
}

/// Something wrong with a catalog entry.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Problem {
    pub severity: Severity,
    /// The offending character, or its position if it has none.
    pub entry: String,
    pub message: String,
}

impl Display for Problem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{label}: {}: {}", self.entry, self.message)
    }
}

impl Catalog {
    pub fn new(characters: Vec<Character>) -> Self {
        Self { characters }
    }

    pub fn load(path: &Path) -> Fallible<Self> {
        if !path.exists() {
            return Err(ErrorReport::new(format!(
                "catalog {} does not exist.",
                path.display()
            )));
        }
        let content = read_to_string(path)?;
        let characters: Vec<Character> = serde_json::from_str(&content).map_err(|e| {
            ErrorReport::integrity(format!("invalid catalog {}: {e}", path.display()))
        })?;
        log::debug!("Loaded {} characters from the catalog.", characters.len());
        Ok(Self { characters })
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn get(&self, character: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.character == character)
    }

    /// Check every entry, returning the problems found.
    pub fn validate(&self) -> Vec<Problem> {
        let mut problems = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();
        for (index, c) in self.characters.iter().enumerate() {
            let entry = if c.character.is_empty() {
                format!("#{}", index + 1)
            } else {
                c.character.clone()
            };
            let mut error = |message: String| {
                problems.push(Problem {
                    severity: Severity::Error,
                    entry: entry.clone(),
                    message,
                })
            };
            if c.character.is_empty() {
                error("missing character.".to_string());
            } else if !seen.insert(&c.character) {
                error("duplicate character.".to_string());
            }
            if c.pinyin.trim().is_empty() {
                error("missing pinyin.".to_string());
            }
            if c.strokes == 0 {
                error("stroke count must be positive.".to_string());
            }
            for (i, card) in c.word_cards.iter().enumerate() {
                if card.word.is_empty() || card.hint.is_empty() {
                    error(format!("word card {i} is missing its word or hint."));
                }
            }
            if c.quiz.similar_chars.len() < 2 {
                error("quiz needs at least two similar characters.".to_string());
            }
            let warning = if c.audio.is_empty() {
                Some("no audio.".to_string())
            } else if !c.audio.starts_with("http") {
                Some(format!("audio '{}' does not look like a URL.", c.audio))
            } else {
                None
            };
            if let Some(message) = warning {
                problems.push(Problem {
                    severity: Severity::Warning,
                    entry,
                    message,
                });
            }
        }
        problems
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Catalog {
        Catalog::new(serde_json::from_str(json).unwrap())
    }

    #[test]
    fn test_load_fixture() -> Fallible<()> {
        let catalog = Catalog::load(Path::new("./test/chars.json"))?;
        assert!(!catalog.is_empty());
        assert!(catalog.get("山").is_some());
        assert!(catalog.get("龘").is_none());
        assert!(catalog.validate().iter().all(|p| p.severity == Severity::Warning));
        Ok(())
    }

    #[test]
    fn test_missing_file() {
        assert!(Catalog::load(Path::new("./test/nope.json")).is_err());
    }

    #[test]
    fn test_optional_fields_default() {
        let catalog = parse(r#"[{"char": "人", "pinyin": "rén", "strokes": 2}]"#);
        let c = &catalog.characters()[0];
        assert!(c.components.is_empty());
        assert!(c.quiz.similar_chars.is_empty());
    }

    #[test]
    fn test_validate_reports_errors_and_warnings() {
        let catalog = parse(
            r#"[
                {"char": "人", "pinyin": "rén", "strokes": 2, "audio": "https://example.com/ren.mp3",
                 "quiz": {"similarChars": ["入", "八"]}},
                {"char": "人", "pinyin": "", "strokes": 0, "audio": "ren.mp3",
                 "wordCards": [{"word": "大人", "img": ""}],
                 "quiz": {"similarChars": ["入"]}}
            ]"#,
        );
        let problems = catalog.validate();
        let errors: Vec<&str> = problems
            .iter()
            .filter(|p| p.severity == Severity::Error)
            .map(|p| p.message.as_str())
            .collect();
        assert_eq!(
            errors,
            vec![
                "duplicate character.",
                "missing pinyin.",
                "stroke count must be positive.",
                "word card 0 is missing its word or hint.",
                "quiz needs at least two similar characters.",
            ]
        );
        let warnings: Vec<&Problem> = problems
            .iter()
            .filter(|p| p.severity == Severity::Warning)
            .collect();
        assert_eq!(warnings.len(), 1);
        assert_eq!(
            warnings[0].to_string(),
            "warning: 人: audio 'ren.mp3' does not look like a URL."
        );
    }
}
