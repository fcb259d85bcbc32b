/*
 * Copyright 2021 Constantin A. <emoji.builder@c1710.de>
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 * You may obtain a copy of the License at
 *
 *     http://www.apache.org/licenses/LICENSE-2.0
 *
 * Unless required by applicable law or agreed to in writing, software
 * distributed under the License is distributed on an "AS IS" BASIS,
 * WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 * See the License for the specific language governing permissions and
 * limitations under the License.
 */

use std::fs::File;
use std::io;
use std::io::BufWriter;
use std::process::exit;

use clap::{crate_version, App, Arg, ArgMatches};
use log::{error, info};

use emoji_registry_gen::codegen;
use emoji_registry_gen::registry::emoji_registry::{EmojiRegistry, RegistryParser};
use emoji_registry_gen::registry::errors::RegistryError;
#[cfg(feature = "online")]
use emoji_registry_gen::registry::online;

fn main() {
    env_logger::init();
    let matches = app().get_matches();
    if let Err(error) = run(&matches) {
        error!("{:?}", error);
        exit(1);
    }
}

fn app() -> App<'static, 'static> {
    let input = Arg::with_name("input")
        .help("The emoji-test.txt file to parse")
        .value_name("FILE")
        .index(1);
    #[cfg(feature = "online")]
    let input = input.required_unless("online");
    #[cfg(not(feature = "online"))]
    let input = input.required(true);

    let app = App::new("emoji-registry-gen")
        .version(crate_version!())
        .about("Generates the emoji database source table from Unicode® emoji-test.txt data")
        .arg(input)
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .value_name("FILE")
                .takes_value(true)
                .help("Writes the generated table to a file instead of standard output"),
        )
        .arg(
            Arg::with_name("all-statuses")
                .long("all-statuses")
                .help("Keeps entries of any qualification status instead of only fully-qualified ones"),
        );
    #[cfg(feature = "online")]
    let app = app.arg(
        Arg::with_name("online")
            .long("online")
            .value_name("VERSION")
            .takes_value(true)
            .conflicts_with("input")
            .help("Fetches emoji-test.txt for the given emoji version (e.g. 13.0) from unicode.org"),
    );
    app
}

fn run(matches: &ArgMatches) -> Result<(), RegistryError> {
    let registry = load_registry(matches)?;
    info!(
        "Parsed {} emojis in {} groups",
        registry.len(),
        registry.groups().len()
    );
    match matches.value_of("output") {
        Some(path) => {
            let file = File::create(path)?;
            codegen::render(&registry, &mut BufWriter::new(file))?;
        }
        None => {
            let stdout = io::stdout();
            codegen::render(&registry, &mut stdout.lock())?;
        }
    }
    Ok(())
}

fn load_registry(matches: &ArgMatches) -> Result<EmojiRegistry, RegistryError> {
    let parser = if matches.is_present("all-statuses") {
        RegistryParser::new().accept_all_statuses()
    } else {
        RegistryParser::new()
    };
    #[cfg(feature = "online")]
    {
        if let Some(raw_version) = matches.value_of("online") {
            let version = match parse_version(raw_version) {
                Some(version) => version,
                None => {
                    error!("Invalid emoji version: {} (expected e.g. 13.0)", raw_version);
                    exit(1);
                }
            };
            return online::load_online_registry_with(parser, version);
        }
    }
    // clap enforces the input file unless --online was given, which returned above
    let path = matches
        .value_of("input")
        .expect("You need to specify an emoji-test.txt file");
    parser.parse_file(path)
}

#[cfg(feature = "online")]
fn parse_version(version: &str) -> Option<(u32, u32)> {
    use itertools::Itertools;

    let (major, minor) = version.splitn(2, '.').collect_tuple()?;
    Some((major.parse().ok()?, minor.parse().ok()?))
}
