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
//! The concrete builders: a high-budget AAA production and a minimal indie production.
use std::{fmt, str::FromStr};

use thiserror::Error;

use crate::{
    builder::{GameBuilder, Workbench},
    locale::Locale,
    product::{ComputerGame, Part},
};

/// Identifies one of the concrete builders provided by this crate.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Variant {
    /// Blockbuster production, built by [`TripleAGameBuilder`].
    TripleA,
    /// Small independent production, built by [`IndieGameBuilder`].
    Indie,
}

impl Variant {
    /// All variants, in the order the default program builds them.
    pub const ALL: &'static [Variant] = &[Variant::TripleA, Variant::Indie];

    /// Project title shown when announcing a game of this variant.
    pub fn title(self) -> &'static str {
        match self {
            Variant::TripleA => "AAA Project",
            Variant::Indie => "Indie Project",
        }
    }

    /// The fixed value this variant's builder assigns to the given part.
    pub fn literal(self, locale: Locale, part: Part) -> &'static str {
        match (self, locale, part) {
            (Variant::TripleA, _, Part::Graphics) => "Ultra 4K, Ray Tracing",
            (Variant::TripleA, _, Part::Sound) => "Dolby Atmos 7.1 Surround",
            (Variant::TripleA, Locale::English, Part::StoryLine) => {
                "Epic saga with nonlinear plot"
            }
            (Variant::TripleA, Locale::Ukrainian, Part::StoryLine) => {
                "Епічна сага з нелінійним сюжетом"
            }
            (Variant::Indie, Locale::English, Part::Graphics) => "Pixel art (retro style)",
            (Variant::Indie, Locale::Ukrainian, Part::Graphics) => "Піксель-арт (Retro Style)",
            (Variant::Indie, Locale::English, Part::Sound) => "8-bit chiptune stereo",
            (Variant::Indie, Locale::Ukrainian, Part::Sound) => "8-bit Chiptune Stereo",
            (Variant::Indie, Locale::English, Part::StoryLine) => "Short philosophical story",
            (Variant::Indie, Locale::Ukrainian, Part::StoryLine) => {
                "Коротка філософська історія"
            }
        }
    }

    /// Create the builder for this variant, assigning values in the given locale.
    pub fn builder(self, locale: Locale) -> Box<dyn GameBuilder> {
        match self {
            Variant::TripleA => Box::new(TripleAGameBuilder::with_locale(locale)),
            Variant::Indie => Box::new(IndieGameBuilder::with_locale(locale)),
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Variant::TripleA => "aaa",
            Variant::Indie => "indie",
        })
    }
}

/// Error returned when text does not name a known [`Variant`].
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("unknown game variant {0:?}, expected \"aaa\" or \"indie\"")]
pub struct ParseVariantError(String);

impl ParseVariantError {
    /// The text that failed to parse.
    pub fn input(&self) -> &str {
        &self.0
    }
}

impl FromStr for Variant {
    type Err = ParseVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "aaa" | "triplea" | "triple-a" | "blockbuster" => Ok(Variant::TripleA),
            "indie" => Ok(Variant::Indie),
            _ => Err(ParseVariantError(s.to_owned())),
        }
    }
}

#[cfg(feature = "rng_gen")]
mod rng_gen {
    use rand::{
        distributions::{Distribution, Standard},
        Rng,
    };

    use super::Variant;

    impl Distribution<Variant> for Standard {
        fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Variant {
            if rng.gen() {
                Variant::TripleA
            } else {
                Variant::Indie
            }
        }
    }
}

/// Builds a blockbuster game: top-end graphics and sound with an epic story.
#[derive(Debug, Default)]
pub struct TripleAGameBuilder {
    locale: Locale,
    bench: Workbench,
}

impl TripleAGameBuilder {
    /// Create a builder which assigns English values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder which assigns values in the given locale.
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            locale,
            bench: Workbench::new(),
        }
    }

    /// The game currently being built, if any.
    pub fn in_progress(&self) -> Option<&ComputerGame> {
        self.bench.peek()
    }

    fn literal(&self, part: Part) -> &'static str {
        Variant::TripleA.literal(self.locale, part)
    }
}

impl GameBuilder for TripleAGameBuilder {
    fn create_new_game(&mut self) {
        self.bench.start();
    }

    fn build_graphics(&mut self) {
        let graphics = self.literal(Part::Graphics);
        self.bench.current().set_graphics(graphics);
    }

    fn build_sound(&mut self) {
        let sound = self.literal(Part::Sound);
        self.bench.current().set_sound(sound);
    }

    fn build_story_line(&mut self) {
        let story_line = self.literal(Part::StoryLine);
        self.bench.current().set_story_line(story_line);
    }

    fn get_game(&mut self) -> ComputerGame {
        self.bench.take()
    }
}

/// Builds a small indie game: retro pixel art, chiptune sound and a short story.
#[derive(Debug, Default)]
pub struct IndieGameBuilder {
    locale: Locale,
    bench: Workbench,
}

impl IndieGameBuilder {
    /// Create a builder which assigns English values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder which assigns values in the given locale.
    pub fn with_locale(locale: Locale) -> Self {
        Self {
            locale,
            bench: Workbench::new(),
        }
    }

    /// The game currently being built, if any.
    pub fn in_progress(&self) -> Option<&ComputerGame> {
        self.bench.peek()
    }

    fn literal(&self, part: Part) -> &'static str {
        Variant::Indie.literal(self.locale, part)
    }
}

impl GameBuilder for IndieGameBuilder {
    fn create_new_game(&mut self) {
        self.bench.start();
    }

    fn build_graphics(&mut self) {
        let graphics = self.literal(Part::Graphics);
        self.bench.current().set_graphics(graphics);
    }

    fn build_sound(&mut self) {
        let sound = self.literal(Part::Sound);
        self.bench.current().set_sound(sound);
    }

    fn build_story_line(&mut self) {
        let story_line = self.literal(Part::StoryLine);
        self.bench.current().set_story_line(story_line);
    }

    fn get_game(&mut self) -> ComputerGame {
        self.bench.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_fill_only_their_own_part() {
        let mut builder = IndieGameBuilder::new();
        builder.create_new_game();
        builder.build_sound();
        let game = builder.in_progress().unwrap();
        assert_eq!(game.sound(), Some("8-bit chiptune stereo"));
        assert_eq!(game.missing(), Part::Graphics | Part::StoryLine);
    }

    #[test]
    fn get_game_returns_partial_game() {
        let mut builder = TripleAGameBuilder::new();
        builder.create_new_game();
        builder.build_graphics();
        let game = builder.get_game();
        assert_eq!(game.graphics(), Some("Ultra 4K, Ray Tracing"));
        assert_eq!(game.sound(), None);
        assert!(builder.in_progress().is_none());
    }

    #[test]
    fn create_new_game_discards_progress() {
        let mut builder = TripleAGameBuilder::new();
        builder.create_new_game();
        builder.build_graphics();
        builder.build_sound();
        builder.create_new_game();
        assert_eq!(builder.get_game(), ComputerGame::new());
    }

    #[test]
    fn step_without_create_starts_a_game() {
        let mut builder = IndieGameBuilder::new();
        builder.build_story_line();
        assert_eq!(
            builder.get_game().story_line(),
            Some("Short philosophical story")
        );
    }

    #[test]
    fn get_game_without_any_step_is_empty() {
        assert_eq!(IndieGameBuilder::new().get_game(), ComputerGame::new());
    }

    #[test]
    fn ukrainian_builders_use_original_wording() {
        let mut builder = TripleAGameBuilder::with_locale(Locale::Ukrainian);
        builder.create_new_game();
        builder.build_story_line();
        assert_eq!(
            builder.get_game().story_line(),
            Some("Епічна сага з нелінійним сюжетом")
        );

        let mut builder = Variant::Indie.builder(Locale::Ukrainian);
        builder.create_new_game();
        builder.build_graphics();
        assert_eq!(
            builder.get_game().graphics(),
            Some("Піксель-арт (Retro Style)")
        );
    }

    #[test]
    fn variants_parse_aliases() {
        assert_eq!("AAA".parse(), Ok(Variant::TripleA));
        assert_eq!("triple-a".parse(), Ok(Variant::TripleA));
        assert_eq!("indie".parse(), Ok(Variant::Indie));
        assert_eq!(
            "mmo".parse::<Variant>().unwrap_err().input(),
            "mmo"
        );
        for &variant in Variant::ALL {
            assert_eq!(variant.to_string().parse(), Ok(variant));
        }
    }

    #[cfg(feature = "rng_gen")]
    #[test]
    fn random_variants_cover_both() {
        use rand::{rngs::mock::StepRng, Rng};

        let mut rng = StepRng::new(0, u64::MAX / 3);
        let drawn: Vec<Variant> = (0..8).map(|_| rng.gen()).collect();
        assert!(drawn.contains(&Variant::TripleA));
        assert!(drawn.contains(&Variant::Indie));
    }
}
