/*
manifest.rs

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

//! Save the run manifest.
//!
//! The manifest lists every puzzle of a batch run in JSON format, by using
//! [`serde`]. It records the parameters that determine the instance and the
//! quality flags, so that a batch can be audited without opening the images.

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::generator::graph::Node;

/// One generated puzzle in the run manifest.
#[derive(Serialize, Deserialize, Debug, PartialEq)]
pub struct PuzzleRecord {
    /// Grid size N of the N×N puzzle.
    pub grid_size: usize,

    /// Whether the puzzle was generated with a solution path.
    pub has_path: bool,

    /// Starting endpoint.
    pub start: Node,

    /// Ending endpoint.
    pub end: Node,

    /// Number of nodes in the solution path (0 when there is no path).
    pub path_nodes: usize,

    /// Whether the endpoint selection degraded to the degenerate pair.
    /// Degenerate instances are kept in the batch but make poor puzzles.
    pub degenerate: bool,
}

/// Save the manifest for a batch run.
///
/// # Errors
///
/// The function returns an error if the file cannot be written.
pub fn save(manifest_file: &Path, records: &[PuzzleRecord]) -> Result<(), Box<dyn Error>> {
    let file: File = File::create(manifest_file)?;
    let mut writer: BufWriter<File> = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, records)?;
    writer.flush()?;
    debug!(
        "Wrote {} records to {}",
        records.len(),
        manifest_file.display()
    );
    Ok(())
}

/// Load a previously saved manifest.
///
/// # Errors
///
/// The function returns an error if the file cannot be read or parsed.
pub fn load(manifest_file: &Path) -> Result<Vec<PuzzleRecord>, Box<dyn Error>> {
    let file: File = File::open(manifest_file)?;
    let reader: BufReader<File> = BufReader::new(file);
    let records: Vec<PuzzleRecord> = serde_json::from_reader(reader)?;
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    #[test]
    fn save_and_load_round_trip() {
        let dir: PathBuf = env::temp_dir().join("gridquiz-manifest-test");
        fs::create_dir_all(&dir).unwrap();
        let manifest_file: PathBuf = dir.join("manifest.json");

        let records: Vec<PuzzleRecord> = vec![
            PuzzleRecord {
                grid_size: 6,
                has_path: true,
                start: Node::new(0, 0),
                end: Node::new(5, 5),
                path_nodes: 11,
                degenerate: false,
            },
            PuzzleRecord {
                grid_size: 3,
                has_path: false,
                start: Node::new(1, 1),
                end: Node::new(1, 1),
                path_nodes: 0,
                degenerate: true,
            },
        ];
        save(&manifest_file, &records).unwrap();
        assert_eq!(load(&manifest_file).unwrap(), records);
        fs::remove_file(&manifest_file).unwrap();
    }
}
