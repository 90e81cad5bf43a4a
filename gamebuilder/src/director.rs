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
//! Runs the fixed sequence of construction steps against whichever builder is bound.
use tracing::{debug, warn};

use crate::{builder::GameBuilder, product::ComputerGame};

pub use self::errors::ConstructError;

mod errors;

/// Orchestrates construction of a [`ComputerGame`]. The director owns no game itself; it
/// asks its current builder to create a game, build each part in order, and hand the
/// result back. The builder can be replaced between constructions.
#[derive(Default)]
pub struct GameDirector {
    /// Builder used for the next construction, if one is bound.
    builder: Option<Box<dyn GameBuilder>>,
}

impl GameDirector {
    /// Create a director with no builder bound.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a director bound to the given builder.
    pub fn with_builder<B: GameBuilder + 'static>(builder: B) -> Self {
        Self {
            builder: Some(Box::new(builder)),
        }
    }

    /// Bind the given builder, returning the previously bound builder if any.
    pub fn set_builder<B: GameBuilder + 'static>(
        &mut self,
        builder: B,
    ) -> Option<Box<dyn GameBuilder>> {
        self.builder.replace(Box::new(builder))
    }

    /// Unbind the current builder, returning it if there was one.
    pub fn clear_builder(&mut self) -> Option<Box<dyn GameBuilder>> {
        self.builder.take()
    }

    /// Returns true if a builder is bound.
    pub fn has_builder(&self) -> bool {
        self.builder.is_some()
    }

    /// Construct a game with the bound builder: create a new game, build graphics,
    /// sound, and storyline, then return the finished game. Fails without running any
    /// step if no builder is bound.
    pub fn construct_game(&mut self) -> Result<ComputerGame, ConstructError> {
        let builder = match self.builder.as_mut() {
            Some(builder) => builder,
            None => {
                warn!("attempted to construct a game with no builder set");
                return Err(ConstructError::BuilderNotSet);
            }
        };
        let name = builder.name();

        debug!(builder = name, "creating new game");
        builder.create_new_game();
        debug!(builder = name, "building graphics");
        builder.build_graphics();
        debug!(builder = name, "building sound");
        builder.build_sound();
        debug!(builder = name, "building storyline");
        builder.build_story_line();

        let game = builder.get_game();
        debug!(builder = name, complete = game.is_complete(), "game constructed");
        Ok(game)
    }
}

impl std::fmt::Debug for GameDirector {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("GameDirector")
            .field("builder", &self.builder.as_ref().map(|builder| builder.name()))
            .finish()
    }
}
