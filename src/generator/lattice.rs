/*
lattice.rs

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

//! Build the base N×N grid lattice.

use std::error::Error;
use std::fmt;

use super::graph::{Graph, Node};

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum LatticeError {
    /// The requested grid size is zero.
    EmptyGrid,
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LatticeError::EmptyGrid => write!(f, "The grid size must be at least 1"),
        }
    }
}

impl Error for LatticeError {}

/// Build the N×N grid lattice.
///
/// Every node is connected to its horizontal and vertical neighbors within
/// bounds. There is no wraparound.
///
/// # Errors
///
/// The function returns an error if `n` is zero.
pub fn build(n: usize) -> Result<Graph, LatticeError> {
    if n == 0 {
        return Err(LatticeError::EmptyGrid);
    }

    let mut graph: Graph = Graph::new(n, n);
    for row in 0..n {
        for col in 0..n {
            let node: Node = Node::new(row, col);
            graph.add_node(node);
            // Only the east and south neighbors, so that each lattice edge is
            // created once
            if col + 1 < n {
                graph.add_edge(node, Node::new(row, col + 1));
            }
            if row + 1 < n {
                graph.add_edge(node, Node::new(row + 1, col));
            }
        }
    }
    Ok(graph)
}
