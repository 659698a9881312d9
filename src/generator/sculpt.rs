/*
sculpt.rs

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

//! Produce the puzzle solution: either the shortest path between the
//! endpoints, or a graph where no such path remains.

use log::debug;
use rand::Rng;

use super::graph::{Graph, Node};

/// Return the shortest path between the endpoints.
///
/// The returned path includes both endpoints. An empty path means that the
/// endpoints are disconnected; that never happens after connectivity repair.
pub fn trace_path(graph: &Graph, start: Node, end: Node) -> Vec<Node> {
    graph.shortest_path(start, end).unwrap_or_default()
}

/// Destroy the paths between the endpoints.
///
/// As long as a path connects the endpoints, the function computes its
/// shortest form, weights each of its edges with a Gaussian centered on the
/// path's midpoint, samples one edge from that distribution, and removes it.
/// Edges near the middle of the path are far more likely to be removed than
/// edges near either endpoint, which carves dead ends that look walkable.
///
/// When the shortest remaining path is down to 2 edges or fewer, the function
/// gives up without removing it and reports success anyway. The puzzle is
/// then marked as having no path even though a short one may survive; this
/// reproduces the accepted approximation of the reference generator.
///
/// The number of removed edges is returned. Each iteration removes one edge
/// from a finite set, so the loop always terminates.
pub fn carve_no_path<R: Rng>(graph: &mut Graph, start: Node, end: Node, rng: &mut R) -> usize {
    let mut removed: usize = 0;

    while let Some(path) = graph.shortest_path(start, end) {
        if path.len() <= 3 {
            debug!(
                "Keeping a residual path of {} nodes between {start} and {end}",
                path.len()
            );
            break;
        }

        let edges: Vec<(Node, Node)> = path.windows(2).map(|w| (w[0], w[1])).collect();
        let weights: Vec<f64> = gaussian_weights(edges.len());
        let (u, v) = edges[pick_weighted(&weights, rng)];
        debug!("Removing edge {u}-{v} from a {}-edge path", edges.len());
        graph.remove_edge(u, v);
        removed += 1;
    }
    removed
}

/// Weight for each edge of a `k`-edge path: a Gaussian centered on the
/// midpoint `k / 2` (integer division) with `sigma = k / 6`.
fn gaussian_weights(k: usize) -> Vec<f64> {
    let sigma: f64 = k as f64 / 6.0;
    let center: f64 = (k / 2) as f64;
    (0..k)
        .map(|i| {
            let z: f64 = (i as f64 - center) / sigma;
            (-0.5 * z * z).exp()
        })
        .collect()
}

/// Sample an index from the weighted distribution: a single uniform draw
/// mapped through the cumulative weights with a binary search.
fn pick_weighted<R: Rng>(weights: &[f64], rng: &mut R) -> usize {
    let mut total: f64 = 0.0;
    let cumulative: Vec<f64> = weights
        .iter()
        .map(|w| {
            total += w;
            total
        })
        .collect();
    let draw: f64 = rng.random::<f64>() * total;
    cumulative
        .partition_point(|c| *c <= draw)
        .min(weights.len() - 1)
}
