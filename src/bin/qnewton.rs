// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

extern crate clap;
extern crate env_logger;
#[macro_use]
extern crate failure;
extern crate num_cpus;
extern crate qnf;

use clap::{App, Arg, ArgMatches};
use failure::Error;
use qnf::{PpmSink, Renderer, Setup};
use std::path::Path;
use std::str::FromStr;

fn parse_pair<T>(s: &str, separator: char) -> Option<(T, T)>
where
    T: FromStr,
{
    match s.find(separator) {
        None => None,
        Some(index) => match (T::from_str(&s[..index]), T::from_str(&s[index + 1..])) {
            (Ok(l), Ok(r)) => Some((l, r)),
            _ => None,
        },
    }
}

fn validate_pair<T: FromStr>(s: &str, separator: char, err: &str) -> Result<(), String> {
    match parse_pair::<T>(s, separator) {
        Some(_) => Ok(()),
        None => Err(err.to_string()),
    }
}

fn validate_range<T: FromStr + Ord>(
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

const OUTPUT_DIR: &str = "output-dir";
const PREFIX: &str = "prefix";
const SIZE: &str = "size";
const WINDOW: &str = "window";
const FRAMES: &str = "frames";
const ITERATIONS: &str = "iterations";
const THREADS: &str = "threads";
const ANIMATE: &str = "animate";

fn args<'a>() -> ArgMatches<'a> {
    let max_threads = num_cpus::get();

    App::new("qnewton")
        .version("0.1.0")
        .about("Renders Newton's method fractals for q^3 - 1 over rotating slices of the quaternions")
        .arg(
            Arg::with_name(OUTPUT_DIR)
                .required(false)
                .long(OUTPUT_DIR)
                .short("o")
                .takes_value(true)
                .default_value(".")
                .help("Directory the frames are written to"),
        )
        .arg(
            Arg::with_name(PREFIX)
                .required(false)
                .long(PREFIX)
                .short("p")
                .takes_value(true)
                .default_value("fractal")
                .help("File name prefix of each frame"),
        )
        .arg(
            Arg::with_name(SIZE)
                .required(false)
                .long(SIZE)
                .short("s")
                .takes_value(true)
                .default_value("1024x1024")
                .validator(|s| validate_pair::<u16>(&s, 'x', "Could not parse output image size"))
                .help("Size of each frame"),
        )
        .arg(
            Arg::with_name(WINDOW)
                .required(false)
                .long(WINDOW)
                .short("w")
                .takes_value(true)
                .allow_hyphen_values(true)
                .default_value("-3.0,3.0")
                .validator(|s| validate_pair::<f64>(&s, ',', "Could not parse sample window"))
                .help("Start and end of the real window covered by both axes"),
        )
        .arg(
            Arg::with_name(FRAMES)
                .required(false)
                .long(FRAMES)
                .short("f")
                .takes_value(true)
                .default_value("100")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1000,
                        "Could not parse frame count",
                        "Frame count must be between 1 and 1000",
                    )
                })
                .help("Number of frames in one full turn"),
        )
        .arg(
            Arg::with_name(ITERATIONS)
                .required(false)
                .long(ITERATIONS)
                .short("i")
                .takes_value(true)
                .default_value("32")
                .validator(|s| {
                    validate_range(
                        &s,
                        1,
                        1024,
                        "Could not parse iteration count",
                        "Iteration count must be between 1 and 1024",
                    )
                })
                .help("Maximum Newton steps per pixel"),
        )
        .arg(
            Arg::with_name(THREADS)
                .required(false)
                .long(THREADS)
                .short("t")
                .takes_value(true)
                .default_value("1")
                .validator(move |s| {
                    validate_range(
                        &s,
                        1,
                        max_threads,
                        "Could not parse thread count",
                        &format!("Thread count must be between 1 and {}", max_threads),
                    )
                })
                .help("Number of threads to use in the renderer"),
        )
        .arg(
            Arg::with_name(ANIMATE)
                .required(false)
                .long(ANIMATE)
                .short("a")
                .takes_value(true)
                .help("Assemble the frames into this file with ffmpeg, then delete them"),
        )
        .get_matches()
}

// clap has already run every validator, so the values below parse.
fn setup_from(matches: &ArgMatches) -> Result<Setup, Error> {
    let size: (u16, u16) = parse_pair(matches.value_of(SIZE).unwrap_or_default(), 'x')
        .ok_or_else(|| format_err!("Error parsing image dimensions"))?;
    let window: (f64, f64) = parse_pair(matches.value_of(WINDOW).unwrap_or_default(), ',')
        .ok_or_else(|| format_err!("Error parsing sample window"))?;
    Ok(Setup {
        width: size.0 as usize,
        height: size.1 as usize,
        start: window.0,
        end: window.1,
        frames: usize::from_str(matches.value_of(FRAMES).unwrap_or_default())?,
        max_iterations: usize::from_str(matches.value_of(ITERATIONS).unwrap_or_default())?,
        ..Setup::default()
    })
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let setup = setup_from(matches)?;
    let threads = usize::from_str(matches.value_of(THREADS).unwrap_or_default())?;
    let renderer = Renderer::new(setup)?;
    let mut sink = PpmSink::new(
        matches.value_of(OUTPUT_DIR).unwrap_or_default(),
        matches.value_of(PREFIX).unwrap_or_default(),
    );
    renderer.render(&mut sink, threads)?;
    if let Some(output) = matches.value_of(ANIMATE) {
        sink.animate(Path::new(output))?;
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let matches = args();
    if let Err(e) = run(&matches) {
        eprintln!("Render failure: {}", e);
        std::process::exit(1);
    }
}
