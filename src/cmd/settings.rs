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
use crate::settings::Settings;
use crate::settings::Theme;
use crate::settings::TraceLevel;

/// Fields to change. `None` leaves a field as it is.
#[derive(Default)]
pub struct SettingsUpdate {
    pub show_pinyin: Option<bool>,
    pub auto_play: Option<bool>,
    pub trace_level: Option<TraceLevel>,
    pub theme: Option<Theme>,
}

impl SettingsUpdate {
    fn is_empty(&self) -> bool {
        self.show_pinyin.is_none()
            && self.auto_play.is_none()
            && self.trace_level.is_none()
            && self.theme.is_none()
    }

    fn apply(self, settings: Settings) -> Settings {
        Settings {
            show_pinyin: self.show_pinyin.unwrap_or(settings.show_pinyin),
            auto_play: self.auto_play.unwrap_or(settings.auto_play),
            trace_level: self.trace_level.unwrap_or(settings.trace_level),
            theme: self.theme.unwrap_or(settings.theme),
        }
    }
}

pub fn update_settings(directory: Option<String>, update: SettingsUpdate) -> Fallible<()> {
    let mut coll = Collection::new(directory)?;
    let mut settings = coll.db.get_settings()?;
    if !update.is_empty() {
        settings = update.apply(settings);
        coll.db.save_settings(&settings)?;
        log::info!("Settings saved.");
    }
    println!("{settings}");
    Ok(())
}
