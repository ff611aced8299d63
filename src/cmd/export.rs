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

use serde::Serialize;

use crate::collection::Collection;
use crate::error::Fallible;
use crate::settings::Settings;
use crate::store::ProgressStore;
use crate::types::progress::ProgressRecord;

pub fn export_collection(directory: Option<String>) -> Fallible<()> {
    let coll: Collection = Collection::new(directory)?;
    let export: Export = get_export(&coll)?;
    let json: String = serde_json::to_string_pretty(&export)?;
    println!("{json}");
    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Export {
    progress: Vec<ProgressRecord>,
    settings: Settings,
}

fn get_export(coll: &Collection) -> Fallible<Export> {
    let progress: Vec<ProgressRecord> = coll.db.all()?;
    let settings: Settings = coll.db.get_settings()?;
    Ok(Export { progress, settings })
}
