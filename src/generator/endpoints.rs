/*
endpoints.rs

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

//! Select the two endpoints of the puzzle.

use log::{debug, warn};
use rand::Rng;
use std::collections::HashMap;

use super::graph::{Graph, Node};

/// Select two distant nodes to use as the puzzle endpoints.
///
/// The function picks a uniformly-random start node, runs a breadth-first
/// search from it, and returns the farthest reachable node whose hop distance
/// is at least `min_distance_ratio * min(height, width)`. When several nodes
/// share the maximum distance, the one with the lowest row, then column,
/// wins, so that a seeded run always selects the same pair.
///
/// When no node qualifies (the start node is isolated, or its component is
/// smaller than the distance threshold), the function degrades to a neighbor
/// of the start node at hop distance greater than 1, and finally to the
/// degenerate pair `(start, start)`. Degenerate pairs make low-quality
/// puzzles; they are logged but never an error.
pub fn select_distant_pair<R: Rng>(
    graph: &Graph,
    min_distance_ratio: f64,
    rng: &mut R,
) -> (Node, Node) {
    let nodes: &[Node] = graph.nodes();
    let start: Node = nodes[rng.random_range(0..nodes.len())];
    let distances: HashMap<Node, usize> = graph.bfs_distances(start);
    let threshold: f64 = min_distance_ratio * graph.height.min(graph.width) as f64;

    let mut max_distance: usize = 0;
    let mut farthest: Node = start;
    for (node, distance) in &distances {
        if *distance as f64 >= threshold
            && (*distance > max_distance || (*distance == max_distance && *node < farthest))
        {
            max_distance = *distance;
            farthest = *node;
        }
    }

    if farthest != start {
        debug!("Endpoints {start} and {farthest}, {max_distance} hops apart");
        return (start, farthest);
    }

    // The whole component is below the distance threshold. Degrade to a
    // neighbor that is more than one hop away, then to the start node itself.
    for neighbor in graph.neighbors(start) {
        if distances.get(neighbor).is_some_and(|d| *d > 1) {
            warn!("Degraded endpoint pair {start}-{neighbor}: component too small");
            return (start, *neighbor);
        }
    }
    warn!("Degenerate endpoint pair ({start}, {start}): low-quality puzzle");
    (start, start)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{lattice, thinning};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn full_lattice_meets_the_distance_floor() {
        for seed in 0..20 {
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let graph: Graph = lattice::build(6).unwrap();
            let (start, end) = select_distant_pair(&graph, 0.5, &mut rng);
            let distance: usize = graph.bfs_distances(start)[&end];
            assert!(distance >= 3, "seed {seed}: distance {distance} below floor");
        }
    }

    #[test]
    fn connected_thinned_graph_meets_the_distance_floor() {
        for seed in 0..20 {
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let mut graph: Graph = lattice::build(9).unwrap();
            thinning::thin(&mut graph, 0.8, true, &mut rng).unwrap();
            let (start, end) = select_distant_pair(&graph, 0.5, &mut rng);
            if start != end {
                let distance: usize = graph.bfs_distances(start)[&end];
                assert!(distance >= 5, "seed {seed}: distance {distance} below floor");
            }
        }
    }

    #[test]
    fn edgeless_graph_returns_the_degenerate_pair() {
        let mut rng: StdRng = StdRng::seed_from_u64(7);
        let mut graph: Graph = lattice::build(3).unwrap();
        thinning::thin(&mut graph, 0.0, false, &mut rng).unwrap();
        let (start, end) = select_distant_pair(&graph, 0.5, &mut rng);
        assert_eq!(start, end);
    }

    #[test]
    fn tie_break_picks_the_lowest_node() {
        // Star around (1, 1): the four leaves are all at distance 1
        let mut graph: Graph = Graph::new(3, 3);
        let center: Node = Node::new(1, 1);
        for leaf in [
            Node::new(0, 1),
            Node::new(1, 0),
            Node::new(1, 2),
            Node::new(2, 1),
        ] {
            graph.add_edge(center, leaf);
        }

        // Force the start node onto the center by searching for a seed that
        // selects it, then check the deterministic tie-break
        for seed in 0..100 {
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            let (start, end) = select_distant_pair(&graph, 0.2, &mut rng);
            if start == center {
                assert_eq!(end, Node::new(0, 1));
                return;
            }
        }
        panic!("no seed selected the center node");
    }
}
