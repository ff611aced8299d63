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

/// The six fixed stages of a character lesson, in order.
#[derive(ValueEnum, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum LessonStep {
    /// Meet the character: meaning and pronunciation.
    Intro,
    /// Break it into components.
    Decompose,
    /// Watch the stroke order.
    Stroke,
    /// Trace it.
    Trace,
    /// Learn words that use it.
    Words,
    /// Pick it out among similar characters.
    Quiz,
}

/// The number of lesson steps. A record whose `step` equals this has
/// completed the whole lesson.
pub const LESSON_STEP_COUNT: u8 = 6;

impl LessonStep {
    pub const ALL: [LessonStep; LESSON_STEP_COUNT as usize] = [
        LessonStep::Intro,
        LessonStep::Decompose,
        LessonStep::Stroke,
        LessonStep::Trace,
        LessonStep::Words,
        LessonStep::Quiz,
    ];

    /// Zero-based position in the lesson.
    pub fn index(self) -> u8 {
        self as u8
    }

    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    pub fn id(self) -> &'static str {
        match self {
            LessonStep::Intro => "intro",
            LessonStep::Decompose => "decompose",
            LessonStep::Stroke => "stroke",
            LessonStep::Trace => "trace",
            LessonStep::Words => "words",
            LessonStep::Quiz => "quiz",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            LessonStep::Intro => "认识汉字",
            LessonStep::Decompose => "结构分析",
            LessonStep::Stroke => "笔画顺序",
            LessonStep::Trace => "临摹练习",
            LessonStep::Words => "词汇学习",
            LessonStep::Quiz => "知识检测",
        }
    }
}

impl Display for LessonStep {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
