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

use crate::collection::Collection;
use crate::error::Fallible;
use crate::lesson::Stats;
use crate::lesson::stats;
use crate::types::timestamp::Timestamp;

#[derive(ValueEnum, Clone)]
pub enum StatsFormat {
    /// Plain text output.
    Text,
    /// JSON output.
    Json,
}

impl Display for StatsFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            StatsFormat::Text => write!(f, "text"),
            StatsFormat::Json => write!(f, "json"),
        }
    }
}

pub fn print_stats(directory: Option<String>, format: StatsFormat) -> Fallible<()> {
    let coll = Collection::new(directory)?;
    let today = Timestamp::now().date();
    let stats: Stats = stats(&coll.db, coll.catalog.len(), today)?;
    match format {
        StatsFormat::Text => {
            println!("{}", render_text(&stats));
        }
        StatsFormat::Json => {
            let stats_json = serde_json::to_string_pretty(&stats)?;
            println!("{}", stats_json);
        }
    }
    Ok(())
}

fn render_text(stats: &Stats) -> String {
    let percent = if stats.total == 0 {
        0
    } else {
        (stats.learned as f64 / stats.total as f64 * 100.0).round() as usize
    };
    format!(
        "learned:  {}/{} ({percent}%)\nmastered: {}\ndue:      {}\nreviews:  {}",
        stats.learned, stats.total, stats.mastered, stats.due_today, stats.reviews_today
    )
}
