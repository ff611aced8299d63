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

use clap::Parser;

use crate::cmd::check::check_catalog;
use crate::cmd::due::list_due;
use crate::cmd::export::export_collection;
use crate::cmd::init::init_collection;
use crate::cmd::learn::learn_step;
use crate::cmd::reset::reset_progress;
use crate::cmd::review::review_collection;
use crate::cmd::settings::SettingsUpdate;
use crate::cmd::settings::update_settings;
use crate::cmd::stats::StatsFormat;
use crate::cmd::stats::print_stats;
use crate::error::Fallible;
use crate::error::fail;
use crate::settings::Theme;
use crate::settings::TraceLevel;
use crate::types::date::Date;
use crate::types::lesson_step::LessonStep;

#[derive(Parser)]
#[command(version, about, long_about = None)]
enum Command {
    /// Create a progress record for every character in the catalog.
    Init {
        /// Optional path to the collection directory.
        directory: Option<String>,
    },
    /// Mark a lesson step as completed.
    Learn {
        /// The character being learned.
        character: String,
        /// The step that was completed.
        step: LessonStep,
        /// Optional path to the collection directory.
        directory: Option<String>,
    },
    /// Review the characters that are due.
    Review {
        /// Optional path to the collection directory.
        directory: Option<String>,
        /// Treat this date (YYYY-MM-DD) as today when picking characters.
        #[arg(long)]
        today: Option<Date>,
        /// Record a single outcome for this character instead of starting a
        /// session.
        #[arg(long = "char")]
        character: Option<String>,
        /// The character was remembered.
        #[arg(long, requires = "character", conflicts_with = "incorrect")]
        correct: bool,
        /// The character was forgotten.
        #[arg(long, requires = "character")]
        incorrect: bool,
    },
    /// List the characters that are due for review.
    Due {
        /// Optional path to the collection directory.
        directory: Option<String>,
        /// Treat this date (YYYY-MM-DD) as today.
        #[arg(long)]
        today: Option<Date>,
    },
    /// Print progress statistics.
    Stats {
        /// Optional path to the collection directory.
        directory: Option<String>,
        /// Output format.
        #[arg(long, default_value_t = StatsFormat::Text)]
        format: StatsFormat,
    },
    /// Export progress and settings as JSON.
    Export {
        /// Optional path to the collection directory.
        directory: Option<String>,
    },
    /// Check the catalog for errors.
    Check {
        /// Optional path to the collection directory.
        directory: Option<String>,
    },
    /// Print, and optionally change, the settings.
    Settings {
        /// Optional path to the collection directory.
        directory: Option<String>,
        #[arg(long)]
        show_pinyin: Option<bool>,
        #[arg(long)]
        auto_play: Option<bool>,
        #[arg(long)]
        trace_level: Option<TraceLevel>,
        #[arg(long)]
        theme: Option<Theme>,
    },
    /// Delete all progress.
    Reset {
        /// Optional path to the collection directory.
        directory: Option<String>,
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
}

pub fn entrypoint() -> Fallible<()> {
    let cli: Command = Command::parse();
    match cli {
        Command::Init { directory } => init_collection(directory),
        Command::Learn {
            character,
            step,
            directory,
        } => learn_step(directory, &character, step),
        Command::Review {
            directory,
            today,
            character,
            correct,
            incorrect,
        } => {
            let mark = match (character, correct, incorrect) {
                (None, _, _) => None,
                (Some(character), true, false) => Some((character, true)),
                (Some(character), false, true) => Some((character, false)),
                (Some(_), _, _) => return fail("pass one of --correct or --incorrect."),
            };
            review_collection(directory, today, mark)
        }
        Command::Due { directory, today } => list_due(directory, today),
        Command::Stats { directory, format } => print_stats(directory, format),
        Command::Export { directory } => export_collection(directory),
        Command::Check { directory } => check_catalog(directory),
        Command::Settings {
            directory,
            show_pinyin,
            auto_play,
            trace_level,
            theme,
        } => {
            let update = SettingsUpdate {
                show_pinyin,
                auto_play,
                trace_level,
                theme,
            };
            update_settings(directory, update)
        }
        Command::Reset { directory, yes } => reset_progress(directory, yes),
    }
}
