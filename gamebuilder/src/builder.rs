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
//! The steps a builder must provide to assemble a [`ComputerGame`].
use std::any;

use crate::product::ComputerGame;

pub use self::variants::{IndieGameBuilder, ParseVariantError, TripleAGameBuilder, Variant};

pub mod variants;

/// Set of construction steps that assemble a [`ComputerGame`]. The steps are run in a
/// fixed order by a [`GameDirector`](crate::director::GameDirector), but may also be
/// called directly.
pub trait GameBuilder {
    /// Discard any game in progress and start a fresh one.
    fn create_new_game(&mut self);

    /// Fill in the graphics of the game in progress.
    fn build_graphics(&mut self);

    /// Fill in the sound of the game in progress.
    fn build_sound(&mut self);

    /// Fill in the storyline of the game in progress.
    fn build_story_line(&mut self);

    /// Hand off the game in progress, whether or not every step has run. The builder is
    /// left without a game in progress afterwards.
    fn get_game(&mut self) -> ComputerGame;

    /// Name used to identify this builder in logs.
    fn name(&self) -> &'static str {
        any::type_name::<Self>()
    }
}

impl<B: GameBuilder + ?Sized> GameBuilder for Box<B> {
    fn create_new_game(&mut self) {
        (**self).create_new_game()
    }

    fn build_graphics(&mut self) {
        (**self).build_graphics()
    }

    fn build_sound(&mut self) {
        (**self).build_sound()
    }

    fn build_story_line(&mut self) {
        (**self).build_story_line()
    }

    fn get_game(&mut self) -> ComputerGame {
        (**self).get_game()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Holds the game a builder is currently working on.
#[derive(Debug, Default)]
pub struct Workbench {
    game: Option<ComputerGame>,
}

impl Workbench {
    /// Create a workbench with no game in progress.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any game in progress with a fresh one.
    pub fn start(&mut self) {
        self.game = Some(ComputerGame::new());
    }

    /// Get the game in progress, starting a fresh one if there is none.
    pub fn current(&mut self) -> &mut ComputerGame {
        self.game.get_or_insert_with(ComputerGame::new)
    }

    /// Get the game in progress without starting one.
    pub fn peek(&self) -> Option<&ComputerGame> {
        self.game.as_ref()
    }

    /// Remove the game in progress. If no game was started, returns an empty game.
    pub fn take(&mut self) -> ComputerGame {
        self.game.take().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_discards_previous_game() {
        let mut bench = Workbench::new();
        bench.current().set_sound("loud");
        bench.start();
        assert_eq!(bench.peek(), Some(&ComputerGame::new()));
    }

    #[test]
    fn current_starts_a_game_when_empty() {
        let mut bench = Workbench::new();
        assert!(bench.peek().is_none());
        bench.current().set_graphics("ascii");
        assert_eq!(bench.peek().and_then(|game| game.graphics()), Some("ascii"));
    }

    #[test]
    fn take_leaves_bench_empty() {
        let mut bench = Workbench::new();
        bench.current().set_story_line("twist");
        let game = bench.take();
        assert_eq!(game.story_line(), Some("twist"));
        assert!(bench.peek().is_none());
        assert_eq!(bench.take(), ComputerGame::new());
    }

    #[test]
    fn boxed_builder_forwards_name() {
        let boxed: Box<dyn GameBuilder> = Box::new(TripleAGameBuilder::new());
        assert!(boxed.name().ends_with("TripleAGameBuilder"));
    }
}
