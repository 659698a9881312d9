/*
cli_options.rs

Copyright 2026 Hervé Quatremain

This file is part of Gridquiz.

Gridquiz is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Gridquiz is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Gridquiz. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options and run the batch generation.
//!
//! # Examples
//!
//! Generate the default batch (grid sizes 3, 6, ..., 33) into the `quiz` and
//! `solution` directories:
//!
//! ```
//! $ gridquiz
//! ```
//!
//! Generate a reproducible batch of small sparse mazes:
//!
//! ```
//! $ gridquiz --start 3 --end 12 --keep-probability 0.6 --seed 42
//! ```

use clap::Parser;
use log::debug;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::env;
use std::path::PathBuf;

use crate::batch;
use crate::batch::{BatchConfig, BatchSummary};

/// Generate grid-maze quiz and solution images.
#[derive(Parser)]
#[command(about, long_about = None, version)]
struct Args {
    /// First grid size
    #[arg(long, default_value_t = 3)]
    start: usize,

    /// Last grid size, included
    #[arg(long, default_value_t = 33)]
    end: usize,

    /// Grid size increment
    #[arg(long, default_value_t = 3)]
    step: usize,

    /// Probability that a puzzle has a solution path
    #[arg(short = 'p', long, default_value_t = 0.5)]
    path_probability: f64,

    /// Probability that an edge of the lattice survives the thinning
    #[arg(short = 'k', long, default_value_t = 0.8)]
    keep_probability: f64,

    /// Minimum endpoint distance, as a ratio of the grid size
    #[arg(short = 'r', long, default_value_t = 0.5)]
    min_distance_ratio: f64,

    /// Seed for the random generator, for reproducible batches
    #[arg(short, long)]
    seed: Option<u64>,

    /// Directory for the quiz images
    #[arg(long, default_value = "quiz")]
    quiz_dir: PathBuf,

    /// Directory for the solution images
    #[arg(long, default_value = "solution")]
    solution_dir: PathBuf,

    /// File receiving the JSON run manifest
    #[arg(long, default_value = "manifest.json")]
    manifest_file: PathBuf,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse the command-line options and run the batch generation.
///
/// The returned value is the process exit code.
pub fn run() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    if let Err(msg) = validate(&args) {
        eprintln!("Error: {msg}");
        return 1;
    }

    // A seeded generator replays the exact same batch; without a seed, the
    // generator starts from entropy but the seed is logged for replay.
    let seed: u64 = match args.seed {
        Some(s) => s,
        None => rand::rng().next_u64(),
    };
    debug!("Random seed: {seed}");
    let mut rng: StdRng = StdRng::seed_from_u64(seed);

    let config: BatchConfig = BatchConfig {
        start: args.start,
        end: args.end,
        step: args.step,
        path_probability: args.path_probability,
        keep_probability: args.keep_probability,
        min_distance_ratio: args.min_distance_ratio,
        quiz_dir: args.quiz_dir,
        solution_dir: args.solution_dir,
        manifest_file: args.manifest_file,
    };

    match batch::generate(&config, &mut rng) {
        Ok(summary) => {
            print_summary(&summary, seed);
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

/// Verify the option preconditions before any file is created.
fn validate(args: &Args) -> Result<(), String> {
    if args.start == 0 {
        return Err(String::from("the first grid size must be at least 1"));
    }
    if args.step == 0 {
        return Err(String::from("the grid size increment must be at least 1"));
    }
    if args.end < args.start {
        return Err(format!(
            "the last grid size ({}) is smaller than the first ({})",
            args.end, args.start
        ));
    }
    if !(0.0..=1.0).contains(&args.path_probability) {
        return Err(format!(
            "the path probability must be between 0 and 1, not {}",
            args.path_probability
        ));
    }
    if !(0.0..=1.0).contains(&args.keep_probability) {
        return Err(format!(
            "the keep probability must be between 0 and 1, not {}",
            args.keep_probability
        ));
    }
    if args.min_distance_ratio <= 0.0 || args.min_distance_ratio > 1.0 {
        return Err(format!(
            "the minimum distance ratio must be greater than 0 and at most 1, not {}",
            args.min_distance_ratio
        ));
    }
    Ok(())
}

/// Print the batch statistics.
fn print_summary(summary: &BatchSummary, seed: u64) {
    println!(
        "
generated puzzles = {}
        with path = {}
       degenerate = {}
             seed = {}",
        summary.generated, summary.with_path, summary.degenerate, seed
    );
}
