/*
thinning.rs

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

//! Randomly remove edges from the lattice to sculpt the maze.

use log::debug;
use rand::Rng;
use std::error::Error;
use std::fmt;

use super::graph::{Graph, Node};

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum ThinningError {
    /// The keep probability is outside `[0, 1]`.
    InvalidProbability(f64),
}

impl fmt::Display for ThinningError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ThinningError::InvalidProbability(p) => {
                write!(f, "The keep probability must be between 0 and 1, not {p}")
            }
        }
    }
}

impl Error for ThinningError {}

/// Thin the graph connectivity at random.
///
/// The function first removes every edge whose endpoints are not Manhattan
/// adjacent, so that the grid-adjacency invariant holds whatever graph the
/// caller built. It then keeps each remaining edge with probability
/// `keep_probability` and removes the others.
///
/// With `ensure_connected`, a repair pass then merges the connected
/// components back into one by adding an edge between a random node of each
/// of the first two components, until a single component remains. Repair
/// edges are shortcuts that can violate grid adjacency; the renderer filters
/// them out with [`Node::is_adjacent`].
///
/// # Errors
///
/// The function returns an error if `keep_probability` is outside `[0, 1]`.
pub fn thin<R: Rng>(
    graph: &mut Graph,
    keep_probability: f64,
    ensure_connected: bool,
    rng: &mut R,
) -> Result<(), ThinningError> {
    if !(0.0..=1.0).contains(&keep_probability) {
        return Err(ThinningError::InvalidProbability(keep_probability));
    }

    // Remove non-immediate neighbor edges first
    for (u, v) in graph.edges() {
        if !u.is_adjacent(&v) {
            graph.remove_edge(u, v);
        }
    }

    // Randomly remove edges
    let mut removed: usize = 0;
    for (u, v) in graph.edges() {
        if rng.random::<f64>() > keep_probability {
            graph.remove_edge(u, v);
            removed += 1;
        }
    }
    debug!(
        "Thinning removed {removed} edges, {} remain",
        graph.num_edges()
    );

    if ensure_connected {
        repair_connectivity(graph, rng);
    }
    Ok(())
}

/// Merge the connected components until a single one remains.
///
/// Each pass adds one edge between the first two components and therefore
/// reduces the component count by one, so the loop runs at most
/// `components - 1` times.
fn repair_connectivity<R: Rng>(graph: &mut Graph, rng: &mut R) {
    loop {
        let components: Vec<Vec<Node>> = graph.connected_components();
        if components.len() <= 1 {
            break;
        }
        let u: Node = components[0][rng.random_range(0..components[0].len())];
        let v: Node = components[1][rng.random_range(0..components[1].len())];
        debug!(
            "Connecting components with a repair edge {u}-{v} ({} components left)",
            components.len()
        );
        graph.add_edge(u, v);
    }
}
