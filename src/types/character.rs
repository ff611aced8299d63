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

use serde::Deserialize;
use serde::Serialize;

/// A catalog entry: the static content of one character lesson.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    #[serde(rename = "char")]
    pub character: String,
    pub pinyin: String,
    pub strokes: u32,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub story: String,
    #[serde(default)]
    pub stroke_order: String,
    #[serde(default)]
    pub evolution: Vec<String>,
    #[serde(default)]
    pub audio: String,
    #[serde(default)]
    pub components: Vec<Component>,
    #[serde(default)]
    pub word_cards: Vec<WordCard>,
    #[serde(default)]
    pub quiz: Quiz,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Component {
    pub part: String,
    #[serde(default)]
    pub meaning: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WordCard {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub img: String,
    #[serde(default)]
    pub hint: String,
}

#[derive(Clone, Default, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    #[serde(default)]
    pub similar_chars: Vec<String>,
}
