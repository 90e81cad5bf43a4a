// Copyright 2020 Zachary Stewart
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
//! Languages that a [`ComputerGame`](crate::product::ComputerGame) can be described in.
use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::product::Part;

/// Language used for the attribute labels and the literal values the builders assign.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Locale {
    English,
    Ukrainian,
}

impl Locale {
    /// All supported locales.
    pub const ALL: &'static [Locale] = &[Locale::English, Locale::Ukrainian];

    /// Short language code for this locale.
    pub fn code(self) -> &'static str {
        match self {
            Locale::English => "en",
            Locale::Ukrainian => "uk",
        }
    }

    /// Header line that opens a formatted game configuration.
    pub fn header(self) -> &'static str {
        match self {
            Locale::English => "--- Configuration ---",
            Locale::Ukrainian => "--- Конфігурація Гри ---",
        }
    }

    /// Label for the given part, padded so that values line up across lines.
    pub fn label(self, part: Part) -> &'static str {
        match (self, part) {
            (Locale::English, Part::Graphics) => "Graphics:  ",
            (Locale::English, Part::Sound) => "Sound:     ",
            (Locale::English, Part::StoryLine) => "Storyline: ",
            (Locale::Ukrainian, Part::Graphics) => "Графіка: ",
            (Locale::Ukrainian, Part::Sound) => "Звук:    ",
            (Locale::Ukrainian, Part::StoryLine) => "Сюжет:   ",
        }
    }

    /// Leading words of the line announcing a newly constructed game.
    pub fn created(self) -> &'static str {
        match self {
            Locale::English => "Created game",
            Locale::Ukrainian => "Створено гру",
        }
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::English
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.code())
    }
}

/// Error returned when text does not name a known [`Locale`].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown locale {0:?}, expected \"en\" or \"uk\"")]
pub struct ParseLocaleError(String);

impl ParseLocaleError {
    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl FromStr for Locale {
    type Err = ParseLocaleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "eng" | "english" => Ok(Locale::English),
            "uk" | "ua" | "ukr" | "ukrainian" => Ok(Locale::Ukrainian),
            _ => Err(ParseLocaleError(s.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_case_insensitively() {
        assert_eq!("en".parse(), Ok(Locale::English));
        assert_eq!("English".parse(), Ok(Locale::English));
        assert_eq!(" UK ".parse(), Ok(Locale::Ukrainian));
        assert_eq!("ua".parse(), Ok(Locale::Ukrainian));
    }

    #[test]
    fn rejects_unknown_language() {
        let err = "fr".parse::<Locale>().unwrap_err();
        assert_eq!(err.input(), "fr");
    }

    #[test]
    fn display_round_trips_through_code() {
        for &locale in Locale::ALL {
            assert_eq!(locale.to_string().parse(), Ok(locale));
        }
    }

    #[test]
    fn english_labels_share_a_width() {
        let widths: Vec<_> = Part::ORDER
            .iter()
            .map(|&part| Locale::English.label(part).chars().count())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}
