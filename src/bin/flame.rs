// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use clap::{App, Arg, ArgMatches};
use std::path::PathBuf;
use std::str::FromStr;

use flame::config::{parse_size, DEFAULT_OUTPUT, DEFAULT_SEED, DEFAULT_SIZE};
use flame::{FlameError, RenderConfig, Variant};

fn validate_range<T: FromStr + PartialOrd>(
    s: &str,
    low: T,
    high: T,
    isnotanumber_err: &str,
    isnotinrange_err: &str,
) -> Result<(), String> {
    match T::from_str(s) {
        Ok(i) => {
            if i >= low && i <= high {
                Ok(())
            } else {
                Err(isnotinrange_err.to_string())
            }
        }
        Err(_) => Err(isnotanumber_err.to_string()),
    }
}

const OUTPUT: &str = "output";
const SIZE: &str = "size";
const ITERATIONS: &str = "iterations";
const SEED: &str = "seed";
const VARIANT: &str = "variant";

fn args<'a>(default_size: &'a str, default_seed: &'a str) -> ArgMatches<'a> {
    App::new("flame")
        .version("0.1.0")
        .about("Fractal flame renderer")
        .arg(
            Arg::with_name(OUTPUT)
                .long(OUTPUT)
                .short("o")
                .takes_value(true)
                .default_value(DEFAULT_OUTPUT)
                .help("Output file; .ppm is written as plain-text P3"),
        )
        .arg(
            Arg::with_name(SIZE)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value(default_size)
                .validator(|s| {
                    parse_size(&s)
                        .map(|_| ())
                        .map_err(|_| "Could not parse output image size".to_string())
                })
                .help("Size of output image, WIDTHxHEIGHT"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .validator(|s| {
                    validate_range(
                        &s,
                        0,
                        usize::max_value(),
                        "Could not parse iteration count",
                        "Iteration count out of range",
                    )
                })
                .help("Rounds of the chaos game [default: 10000000, or 100000 for sierpinski]"),
        )
        .arg(
            Arg::with_name(SEED)
                .long(SEED)
                .short("S")
                .takes_value(true)
                .default_value(default_seed)
                .validator(|s| {
                    validate_range(
                        &s,
                        0,
                        u64::max_value(),
                        "Could not parse seed",
                        "Seed out of range",
                    )
                })
                .help("Seed for the random generator"),
        )
        .arg(
            Arg::with_name(VARIANT)
                .long(VARIANT)
                .short("v")
                .takes_value(true)
                .possible_values(&["flame", "sierpinski"])
                .default_value("flame")
                .help("Which transform table to render"),
        )
        .get_matches()
}

fn config(matches: &ArgMatches) -> Result<RenderConfig, FlameError> {
    let variant = Variant::from_str(matches.value_of(VARIANT).unwrap_or("flame"))?;
    let mut config = RenderConfig::for_variant(variant);

    if let Some(size) = matches.value_of(SIZE) {
        let (width, height) = parse_size(size)?;
        config.width = width;
        config.height = height;
    }
    if let Some(iterations) = matches.value_of(ITERATIONS) {
        config.iterations = usize::from_str(iterations).map_err(|_| FlameError::Parse {
            what: "iteration count",
            value: iterations.to_string(),
        })?;
    }
    if let Some(seed) = matches.value_of(SEED) {
        config.seed = u64::from_str(seed).map_err(|_| FlameError::Parse {
            what: "seed",
            value: seed.to_string(),
        })?;
    }
    if let Some(output) = matches.value_of(OUTPUT) {
        config.output = PathBuf::from(output);
    }
    Ok(config)
}

fn main() {
    env_logger::init();

    let default_size = format!("{}x{}", DEFAULT_SIZE, DEFAULT_SIZE);
    let default_seed = DEFAULT_SEED.to_string();
    let matches = args(&default_size, &default_seed);

    if let Err(e) = config(&matches).and_then(|config| flame::run(&config)) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
