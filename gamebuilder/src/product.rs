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
//! The product assembled by the builders: a computer game configuration.
use std::fmt;

use enumflags2::BitFlags;

use crate::locale::Locale;

/// The separately buildable parts of a [`ComputerGame`].
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Part {
    Graphics = 0b001,
    Sound = 0b010,
    StoryLine = 0b100,
}

impl Part {
    /// Parts in the order they are built and displayed.
    pub const ORDER: &'static [Part] = &[Part::Graphics, Part::Sound, Part::StoryLine];
}

/// A computer game configuration. Each attribute is free text and may be left unset if
/// the step that builds it never ran.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ComputerGame {
    graphics: Option<String>,
    sound: Option<String>,
    story_line: Option<String>,
}

impl ComputerGame {
    /// Create a game with no attributes set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_graphics(&mut self, graphics: impl Into<String>) {
        self.graphics = Some(graphics.into());
    }

    pub fn set_sound(&mut self, sound: impl Into<String>) {
        self.sound = Some(sound.into());
    }

    pub fn set_story_line(&mut self, story_line: impl Into<String>) {
        self.story_line = Some(story_line.into());
    }

    /// Set the given part to `value`, replacing any previous value.
    pub fn set(&mut self, part: Part, value: impl Into<String>) {
        match part {
            Part::Graphics => self.set_graphics(value),
            Part::Sound => self.set_sound(value),
            Part::StoryLine => self.set_story_line(value),
        }
    }

    /// The graphics description, if it has been set.
    pub fn graphics(&self) -> Option<&str> {
        self.graphics.as_deref()
    }

    /// The sound description, if it has been set.
    pub fn sound(&self) -> Option<&str> {
        self.sound.as_deref()
    }

    /// The storyline description, if it has been set.
    pub fn story_line(&self) -> Option<&str> {
        self.story_line.as_deref()
    }

    /// Get the value of the given part, if it has been set.
    pub fn get(&self, part: Part) -> Option<&str> {
        match part {
            Part::Graphics => self.graphics(),
            Part::Sound => self.sound(),
            Part::StoryLine => self.story_line(),
        }
    }

    /// Set of parts which have not been set yet.
    pub fn missing(&self) -> BitFlags<Part> {
        let mut missing = BitFlags::empty();
        for &part in Part::ORDER {
            if self.get(part).is_none() {
                missing.insert(part);
            }
        }
        missing
    }

    /// Returns true if every part has been set.
    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    /// Get a display helper that formats this game with the labels of the given locale.
    pub fn localized(&self, locale: Locale) -> Localized {
        Localized { game: self, locale }
    }
}

impl fmt::Display for ComputerGame {
    /// Formats with English labels.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.localized(Locale::English), f)
    }
}

/// Display helper that prints a [`ComputerGame`] as a labeled block: a header line
/// followed by one line per part. Unset parts print as empty values.
#[derive(Debug, Copy, Clone)]
pub struct Localized<'a> {
    game: &'a ComputerGame,
    locale: Locale,
}

impl fmt::Display for Localized<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}", self.locale.header())?;
        for &part in Part::ORDER {
            writeln!(
                f,
                "{}{}",
                self.locale.label(part),
                self.game.get(part).unwrap_or("")
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_game() -> ComputerGame {
        let mut game = ComputerGame::new();
        game.set_graphics("Ultra 4K, Ray Tracing");
        game.set_sound("Dolby Atmos 7.1 Surround");
        game.set_story_line("Epic saga with nonlinear plot");
        game
    }

    #[test]
    fn new_game_is_missing_every_part() {
        let game = ComputerGame::new();
        assert_eq!(game.missing(), BitFlags::all());
        assert!(!game.is_complete());
        assert_eq!(game.graphics(), None);
    }

    #[test]
    fn setters_fill_in_parts() {
        let mut game = ComputerGame::new();
        game.set_sound("mono");
        assert_eq!(game.sound(), Some("mono"));
        assert_eq!(game.missing(), Part::Graphics | Part::StoryLine);

        game.set(Part::Graphics, "vector");
        game.set(Part::StoryLine, "");
        assert!(game.is_complete());
        assert_eq!(game.get(Part::StoryLine), Some(""));
    }

    #[test]
    fn setting_twice_replaces_value() {
        let mut game = ComputerGame::new();
        game.set_graphics("old");
        game.set_graphics("new");
        assert_eq!(game.graphics(), Some("new"));
    }

    #[test]
    fn formats_labeled_block() {
        assert_eq!(
            full_game().to_string(),
            "--- Configuration ---\n\
             Graphics:  Ultra 4K, Ray Tracing\n\
             Sound:     Dolby Atmos 7.1 Surround\n\
             Storyline: Epic saga with nonlinear plot\n"
        );
    }

    #[test]
    fn formatting_is_deterministic() {
        let game = full_game();
        assert_eq!(game.to_string(), game.to_string());
        assert_eq!(game.to_string(), full_game().to_string());
    }

    #[test]
    fn unset_parts_format_as_empty() {
        let mut game = ComputerGame::new();
        game.set_sound("8-bit");
        let text = game.localized(Locale::Ukrainian).to_string();
        assert_eq!(
            text,
            "--- Конфігурація Гри ---\nГрафіка: \nЗвук:    8-bit\nСюжет:   \n"
        );
    }
}
