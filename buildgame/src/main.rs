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
use std::io::{self, BufRead, Write};

use clap::{App, Arg, ArgMatches};
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use gamebuilder::{
    builder::ParseVariantError, locale::ParseLocaleError, ConstructError, GameDirector, Locale,
    Variant,
};

/// Anything that can stop the program before both games are printed.
#[derive(Debug, Error)]
enum AppError {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error(transparent)]
    Construct(#[from] ConstructError),
    #[error(transparent)]
    Locale(#[from] ParseLocaleError),
    #[error(transparent)]
    Variant(#[from] ParseVariantError),
}

/// Options selected on the command line.
#[derive(Debug, PartialEq)]
struct Config {
    /// Language for labels and values.
    locale: Locale,
    /// Variants to build, in order.
    variants: Vec<Variant>,
    /// Wait for the user before exiting.
    pause: bool,
}

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let matches = app().get_matches();
    let config = parse_config(&matches, &mut rand::thread_rng())?;
    debug!(?config, "parsed command line");

    let stdout = io::stdout();
    run(&config, &mut stdout.lock())?;

    if config.pause {
        eprint!("Press Enter to exit...");
        io::stderr().flush()?;
        io::stdin().lock().read_line(&mut String::new())?;
    }
    Ok(())
}

/// Command line definition.
fn app() -> App<'static, 'static> {
    App::new("buildgame")
        .version("1.0")
        .author("Zachary Stewart <zachary@zstewart.com>")
        .about("Assembles computer game configurations with a director and builders.")
        .arg(
            Arg::with_name("lang")
                .short("l")
                .long("lang")
                .value_name("LANG")
                .help("language of the printed configurations")
                .takes_value(true)
                .possible_values(&["en", "english", "uk", "ua", "ukrainian"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("builder")
                .short("b")
                .long("builder")
                .value_name("VARIANT")
                .help("builder variants to run, in order (default: aaa,indie)")
                .takes_value(true)
                .multiple(true)
                .use_delimiter(true)
                .possible_values(&["aaa", "triple-a", "indie", "random", "rand"])
                .case_insensitive(true),
        )
        .arg(
            Arg::with_name("pause")
                .short("p")
                .long("pause")
                .help("wait for Enter before exiting"),
        )
}

/// Turn matched arguments into a [`Config`], drawing from `rng` for random variants.
fn parse_config(matches: &ArgMatches, rng: &mut impl Rng) -> Result<Config, AppError> {
    let locale = match matches.value_of("lang") {
        Some(lang) => lang.parse::<Locale>()?,
        None => Locale::default(),
    };
    let variants = match matches.values_of("builder") {
        Some(values) => values
            .map(|value| match value.to_ascii_lowercase().as_str() {
                "random" | "rand" => Ok(rng.gen::<Variant>()),
                other => other.parse::<Variant>(),
            })
            .collect::<Result<Vec<_>, ParseVariantError>>()?,
        None => Variant::ALL.to_vec(),
    };
    Ok(Config {
        locale,
        variants,
        pause: matches.is_present("pause"),
    })
}

/// Construct one game per configured variant through a single director, printing each.
fn run(config: &Config, out: &mut impl Write) -> Result<(), AppError> {
    let mut director = GameDirector::new();
    for (number, &variant) in config.variants.iter().enumerate() {
        info!(%variant, locale = %config.locale, "constructing game");
        director.set_builder(variant.builder(config.locale));
        let game = director.construct_game()?;

        writeln!(
            out,
            "{} #{} ({}):",
            config.locale.created(),
            number + 1,
            variant.title()
        )?;
        writeln!(out, "{}", game.localized(config.locale))?;
    }
    Ok(())
}
