/*
batch.rs

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

//! Generate the quiz and solution images for a range of grid sizes.

use log::{debug, info};
use rand::Rng;
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::draw;
use crate::generator::graph::{Graph, Node};
use crate::generator::{endpoints, lattice, sculpt, thinning};
use crate::manifest;
use crate::manifest::PuzzleRecord;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum BatchError {
    /// The grid size increment is zero.
    InvalidStep,

    /// The path probability is outside `[0, 1]`.
    InvalidPathProbability(f64),

    /// The minimum distance ratio is outside `(0, 1]`.
    InvalidDistanceRatio(f64),
}

impl fmt::Display for BatchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BatchError::InvalidStep => {
                write!(f, "The grid size increment must be at least 1")
            }
            BatchError::InvalidPathProbability(p) => {
                write!(f, "The path probability must be between 0 and 1, not {p}")
            }
            BatchError::InvalidDistanceRatio(r) => {
                write!(
                    f,
                    "The minimum distance ratio must be greater than 0 and at most 1, not {r}"
                )
            }
        }
    }
}

impl Error for BatchError {}

/// Parameters of a batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    /// First grid size.
    pub start: usize,

    /// Last grid size, included.
    pub end: usize,

    /// Grid size increment.
    pub step: usize,

    /// Probability that an instance is generated with a solution path.
    pub path_probability: f64,

    /// Probability that the thinning stage keeps a lattice edge.
    pub keep_probability: f64,

    /// Minimum endpoint distance, as a ratio of the grid size.
    pub min_distance_ratio: f64,

    /// Directory for the quiz images.
    pub quiz_dir: PathBuf,

    /// Directory for the solution images.
    pub solution_dir: PathBuf,

    /// File receiving the JSON run manifest.
    pub manifest_file: PathBuf,
}

/// Statistics of a completed batch run.
#[derive(Debug, Default, PartialEq)]
pub struct BatchSummary {
    /// Number of generated puzzles.
    pub generated: usize,

    /// Number of puzzles generated with a solution path.
    pub with_path: usize,

    /// Number of puzzles with a degenerate endpoint pair.
    pub degenerate: usize,
}

/// Generate the quizzes and solutions for the configured grid sizes.
///
/// For each grid size, the pipeline builds the full lattice, thins it, picks
/// the endpoint pair, and then either traces the solution path or carves the
/// graph until no path remains. Each finished puzzle is rendered twice: the
/// quiz image without the solution, and the solution image with the path
/// drawn (or nothing drawn when the endpoints are disconnected).
///
/// # Errors
///
/// The function returns an error if the configuration violates a
/// precondition, or if a directory, image, or the manifest cannot be
/// written. Randomness-driven degenerate puzzles are recorded in the
/// manifest, not reported as errors.
pub fn generate<R: Rng>(config: &BatchConfig, rng: &mut R) -> Result<BatchSummary, Box<dyn Error>> {
    // Check the preconditions that the pipeline stages do not check
    // themselves, before any file is created. The thinning and lattice
    // stages validate their own parameters.
    if config.step == 0 {
        return Err(Box::new(BatchError::InvalidStep));
    }
    if !(0.0..=1.0).contains(&config.path_probability) {
        return Err(Box::new(BatchError::InvalidPathProbability(
            config.path_probability,
        )));
    }
    if config.min_distance_ratio <= 0.0 || config.min_distance_ratio > 1.0 {
        return Err(Box::new(BatchError::InvalidDistanceRatio(
            config.min_distance_ratio,
        )));
    }

    fs::create_dir_all(&config.quiz_dir)?;
    fs::create_dir_all(&config.solution_dir)?;

    let mut summary: BatchSummary = BatchSummary::default();
    let mut records: Vec<PuzzleRecord> = Vec::new();

    for n in (config.start..=config.end).step_by(config.step) {
        debug!("Generating the {n}x{n} puzzle");
        let mut graph: Graph = lattice::build(n)?;

        let has_path: bool = rng.random_bool(config.path_probability);
        thinning::thin(&mut graph, config.keep_probability, has_path, rng)?;
        let (start_node, end_node) =
            endpoints::select_distant_pair(&graph, config.min_distance_ratio, rng);

        let path: Vec<Node> = if has_path {
            sculpt::trace_path(&graph, start_node, end_node)
        } else {
            let removed: usize = sculpt::carve_no_path(&mut graph, start_node, end_node, rng);
            debug!("Carved {removed} edges to disconnect {start_node} and {end_node}");
            Vec::new()
        };

        draw::render(
            &graph,
            start_node,
            end_node,
            &[],
            &config.quiz_dir.join("q"),
            n,
            has_path,
        )?;
        draw::render(
            &graph,
            start_node,
            end_node,
            &path,
            &config.solution_dir.join("s"),
            n,
            has_path,
        )?;

        let degenerate: bool = start_node == end_node;
        summary.generated += 1;
        if has_path {
            summary.with_path += 1;
        }
        if degenerate {
            summary.degenerate += 1;
        }
        records.push(PuzzleRecord {
            grid_size: n,
            has_path,
            start: start_node,
            end: end_node,
            path_nodes: path.len(),
            degenerate,
        });
    }

    manifest::save(&config.manifest_file, &records)?;
    info!(
        "Generated {} puzzles ({} with a path, {} degenerate)",
        summary.generated, summary.with_path, summary.degenerate
    );
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::env;

    fn test_config(name: &str) -> BatchConfig {
        let dir: PathBuf = env::temp_dir().join(name);
        BatchConfig {
            start: 3,
            end: 9,
            step: 3,
            path_probability: 0.5,
            keep_probability: 0.8,
            min_distance_ratio: 0.5,
            quiz_dir: dir.join("quiz"),
            solution_dir: dir.join("solution"),
            manifest_file: dir.join("manifest.json"),
        }
    }

    #[test]
    fn invalid_config_fails_fast_without_output() {
        let base: BatchConfig = test_config("gridquiz-batch-invalid-test");
        let mut rng: StdRng = StdRng::seed_from_u64(1);

        let mut config: BatchConfig = base.clone();
        config.path_probability = 1.5;
        let err: Box<dyn Error> = generate(&config, &mut rng).unwrap_err();
        assert_eq!(
            err.downcast_ref::<BatchError>(),
            Some(&BatchError::InvalidPathProbability(1.5))
        );

        let mut config: BatchConfig = base.clone();
        config.step = 0;
        let err: Box<dyn Error> = generate(&config, &mut rng).unwrap_err();
        assert_eq!(err.downcast_ref::<BatchError>(), Some(&BatchError::InvalidStep));

        let mut config: BatchConfig = base.clone();
        config.min_distance_ratio = 0.0;
        let err: Box<dyn Error> = generate(&config, &mut rng).unwrap_err();
        assert_eq!(
            err.downcast_ref::<BatchError>(),
            Some(&BatchError::InvalidDistanceRatio(0.0))
        );

        // The preconditions are checked before any directory is created
        assert!(!base.quiz_dir.exists());
        assert!(!base.solution_dir.exists());
    }

    #[test]
    fn batch_generates_every_size_and_the_manifest() {
        let config: BatchConfig = test_config("gridquiz-batch-test");
        let mut rng: StdRng = StdRng::seed_from_u64(42);
        let summary: BatchSummary = generate(&config, &mut rng).unwrap();
        assert_eq!(summary.generated, 3);

        let records: Vec<PuzzleRecord> = manifest::load(&config.manifest_file).unwrap();
        assert_eq!(records.len(), 3);
        let sizes: Vec<usize> = records.iter().map(|r| r.grid_size).collect();
        assert_eq!(sizes, vec![3, 6, 9]);
        for record in &records {
            let suffix: &str = if record.has_path { "path" } else { "no_path" };
            let n: usize = record.grid_size;
            assert!(
                config
                    .quiz_dir
                    .join(format!("q_{n}x{n}_{suffix}.png"))
                    .exists()
            );
            assert!(
                config
                    .solution_dir
                    .join(format!("s_{n}x{n}_{suffix}.png"))
                    .exists()
            );
            if !record.has_path {
                assert_eq!(record.path_nodes, 0);
            }
        }
        fs::remove_dir_all(env::temp_dir().join("gridquiz-batch-test")).unwrap();
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let config_a: BatchConfig = test_config("gridquiz-batch-seed-a");
        let config_b: BatchConfig = test_config("gridquiz-batch-seed-b");
        let mut rng_a: StdRng = StdRng::seed_from_u64(7);
        let mut rng_b: StdRng = StdRng::seed_from_u64(7);
        generate(&config_a, &mut rng_a).unwrap();
        generate(&config_b, &mut rng_b).unwrap();

        let records_a: Vec<PuzzleRecord> = manifest::load(&config_a.manifest_file).unwrap();
        let records_b: Vec<PuzzleRecord> = manifest::load(&config_b.manifest_file).unwrap();
        assert_eq!(records_a, records_b);

        fs::remove_dir_all(env::temp_dir().join("gridquiz-batch-seed-a")).unwrap();
        fs::remove_dir_all(env::temp_dir().join("gridquiz-batch-seed-b")).unwrap();
    }
}
