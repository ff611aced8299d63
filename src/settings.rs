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

use clap::ValueEnum;
use serde::Deserialize;
use serde::Serialize;

/// Display and practice preferences. Scheduling never looks at these.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub show_pinyin: bool,
    pub auto_play: bool,
    pub trace_level: TraceLevel,
    pub theme: Theme,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_pinyin: true,
            auto_play: true,
            trace_level: TraceLevel::Medium,
            theme: Theme::Light,
        }
    }
}

/// How closely a tracing has to follow the model strokes.
#[derive(ValueEnum, Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceLevel {
    Easy,
    Medium,
    Hard,
}

#[derive(ValueEnum, Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Display for Settings {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let trace_level = match self.trace_level {
            TraceLevel::Easy => "easy",
            TraceLevel::Medium => "medium",
            TraceLevel::Hard => "hard",
        };
        let theme = match self.theme {
            Theme::Light => "light",
            Theme::Dark => "dark",
        };
        writeln!(f, "show pinyin: {}", self.show_pinyin)?;
        writeln!(f, "auto play:   {}", self.auto_play)?;
        writeln!(f, "trace level: {trace_level}")?;
        write!(f, "theme:       {theme}")
    }
}
