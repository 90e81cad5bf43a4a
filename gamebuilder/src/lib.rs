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
//! Assembles [`ComputerGame`] configurations with the builder pattern.
//!
//! A [`GameDirector`] runs a fixed sequence of steps (create a game, build graphics,
//! build sound, build storyline, hand the game back) against whichever [`GameBuilder`]
//! is bound to it. The crate ships two builders, [`TripleAGameBuilder`] and
//! [`IndieGameBuilder`], which fill in every part with fixed values in the chosen
//! [`Locale`].
//!
//! ```
//! use gamebuilder::{GameDirector, IndieGameBuilder, TripleAGameBuilder};
//!
//! let mut director = GameDirector::with_builder(TripleAGameBuilder::new());
//! let blockbuster = director.construct_game()?;
//! assert_eq!(blockbuster.sound(), Some("Dolby Atmos 7.1 Surround"));
//!
//! director.set_builder(IndieGameBuilder::new());
//! let indie = director.construct_game()?;
//! assert_eq!(indie.sound(), Some("8-bit chiptune stereo"));
//! # Ok::<(), gamebuilder::ConstructError>(())
//! ```

pub use self::{
    builder::{GameBuilder, IndieGameBuilder, TripleAGameBuilder, Variant},
    director::{ConstructError, GameDirector},
    locale::Locale,
    product::{ComputerGame, Part},
};

pub mod builder;
pub mod director;
pub mod locale;
pub mod product;
