/*
graph.rs

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

//! Nodes, edges, and searches in the puzzle graph.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet, VecDeque};
use std::fmt;

/// A grid cell, identified by its row and column.
///
/// Nodes are ordered row first and then column, so that sorting a node list
/// gives the row-major order. Searches rely on this order for reproducible
/// results.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Node {
    pub row: usize,
    pub col: usize,
}

impl Node {
    /// Create a [`Node`] object.
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
        }
    }

    /// Manhattan distance to the other node.
    pub fn manhattan_distance(&self, other: &Node) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Whether the other node is a direct horizontal or vertical neighbor on
    /// the grid.
    ///
    /// Connectivity repair can add edges between nodes that are not adjacent.
    /// The renderer uses this method to skip those edges when it draws the
    /// maze lattice.
    pub fn is_adjacent(&self, other: &Node) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Undirected graph over grid cells.
///
/// The edges are stored as an adjacency map. For each node, the
/// [`std::collections::HashMap`] stores the list of the adjacent nodes, in
/// both directions. The grid dimensions travel with the graph so that the
/// later stages do not need a separate parameter.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Graph {
    /// Number of rows in the grid.
    pub height: usize,

    /// Number of columns in the grid.
    pub width: usize,

    /// All the nodes, in insertion order (row major for lattices).
    nodes: Vec<Node>,

    /// For each node, the list of its adjacent nodes.
    adjacency: HashMap<Node, Vec<Node>>,
}

impl Graph {
    /// Create an empty [`Graph`] object with the given dimensions.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            nodes: Vec::with_capacity(height * width),
            adjacency: HashMap::with_capacity(height * width),
        }
    }

    /// Add a node without any edge. Adding a node twice has no effect.
    pub fn add_node(&mut self, node: Node) {
        if !self.adjacency.contains_key(&node) {
            self.adjacency.insert(node, Vec::new());
            self.nodes.push(node);
        }
    }

    /// Return all the nodes, in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of nodes in the graph.
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Add an undirected edge between the given nodes.
    ///
    /// Both nodes are added to the graph if not already present. Adding an
    /// existing edge has no effect.
    pub fn add_edge(&mut self, node1: Node, node2: Node) {
        self.add_node(node1);
        self.add_node(node2);
        if let Some(a) = self.adjacency.get_mut(&node1)
            && !a.contains(&node2)
        {
            a.push(node2);
        }
        if let Some(a) = self.adjacency.get_mut(&node2)
            && !a.contains(&node1)
        {
            a.push(node1);
        }
    }

    /// Remove the undirected edge between the given nodes, if it exists.
    pub fn remove_edge(&mut self, node1: Node, node2: Node) {
        if let Some(a) = self.adjacency.get_mut(&node1) {
            a.retain(|n| *n != node2);
        }
        if let Some(a) = self.adjacency.get_mut(&node2) {
            a.retain(|n| *n != node1);
        }
    }

    /// Whether an edge connects the given nodes.
    pub fn has_edge(&self, node1: Node, node2: Node) -> bool {
        match self.adjacency.get(&node1) {
            Some(a) => a.contains(&node2),
            None => false,
        }
    }

    /// Return the nodes adjacent to the given node.
    pub fn neighbors(&self, node: Node) -> &[Node] {
        match self.adjacency.get(&node) {
            Some(a) => a,
            None => &[],
        }
    }

    /// Return every undirected edge exactly once, as ordered node pairs.
    pub fn edges(&self) -> Vec<(Node, Node)> {
        let mut edges: Vec<(Node, Node)> = Vec::new();
        for node in &self.nodes {
            if let Some(a) = self.adjacency.get(node) {
                for neighbor in a.iter().filter(|n| *node < **n) {
                    edges.push((*node, *neighbor));
                }
            }
        }
        edges
    }

    /// Number of undirected edges in the graph.
    pub fn num_edges(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Compute the hop distance from the start node to every reachable node
    /// with a breadth-first search.
    pub fn bfs_distances(&self, start: Node) -> HashMap<Node, usize> {
        let mut distances: HashMap<Node, usize> = HashMap::new();
        let mut queue: VecDeque<Node> = VecDeque::new();

        if !self.adjacency.contains_key(&start) {
            return distances;
        }
        distances.insert(start, 0);
        queue.push_back(start);
        while let Some(node) = queue.pop_front() {
            let d: usize = distances[&node];
            for neighbor in self.neighbors(node) {
                if !distances.contains_key(neighbor) {
                    distances.insert(*neighbor, d + 1);
                    queue.push_back(*neighbor);
                }
            }
        }
        distances
    }

    /// Return a shortest path (by hop count) from start to end, both nodes
    /// included, or [`None`] if end is not reachable from start.
    pub fn shortest_path(&self, start: Node, end: Node) -> Option<Vec<Node>> {
        if !self.adjacency.contains_key(&start) || !self.adjacency.contains_key(&end) {
            return None;
        }
        if start == end {
            return Some(vec![start]);
        }

        let mut predecessor: HashMap<Node, Node> = HashMap::new();
        let mut queue: VecDeque<Node> = VecDeque::new();

        predecessor.insert(start, start);
        queue.push_back(start);
        'search: while let Some(node) = queue.pop_front() {
            for neighbor in self.neighbors(node) {
                if !predecessor.contains_key(neighbor) {
                    predecessor.insert(*neighbor, node);
                    if *neighbor == end {
                        break 'search;
                    }
                    queue.push_back(*neighbor);
                }
            }
        }

        if !predecessor.contains_key(&end) {
            return None;
        }

        // Walk the predecessor chain back from the end node
        let mut path: Vec<Node> = vec![end];
        let mut node: Node = end;
        while node != start {
            node = predecessor[&node];
            path.push(node);
        }
        path.reverse();
        Some(path)
    }

    /// Whether a path connects the given nodes.
    pub fn has_path(&self, start: Node, end: Node) -> bool {
        self.bfs_distances(start).contains_key(&end)
    }

    /// Return the connected components, each as a node list.
    ///
    /// Components are discovered in node insertion order, and the nodes
    /// within a component are listed in visitation order.
    pub fn connected_components(&self) -> Vec<Vec<Node>> {
        let mut components: Vec<Vec<Node>> = Vec::new();
        let mut visited: HashSet<Node> = HashSet::with_capacity(self.nodes.len());

        for node in &self.nodes {
            if visited.contains(node) {
                continue;
            }
            let mut component: Vec<Node> = Vec::new();
            let mut queue: VecDeque<Node> = VecDeque::new();
            visited.insert(*node);
            queue.push_back(*node);
            while let Some(n) = queue.pop_front() {
                component.push(n);
                for neighbor in self.neighbors(n) {
                    if visited.insert(*neighbor) {
                        queue.push_back(*neighbor);
                    }
                }
            }
            components.push(component);
        }
        components
    }

    /// Whether the graph forms a single connected component.
    pub fn is_connected(&self) -> bool {
        match self.nodes.first() {
            Some(n) => self.bfs_distances(*n).len() == self.nodes.len(),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_graph(len: usize) -> Graph {
        let mut graph: Graph = Graph::new(1, len);
        for col in 1..len {
            graph.add_edge(Node::new(0, col - 1), Node::new(0, col));
        }
        graph
    }

    #[test]
    fn manhattan_distance_and_adjacency() {
        let a: Node = Node::new(2, 3);
        assert_eq!(a.manhattan_distance(&Node::new(2, 3)), 0);
        assert_eq!(a.manhattan_distance(&Node::new(0, 0)), 5);
        assert!(a.is_adjacent(&Node::new(1, 3)));
        assert!(a.is_adjacent(&Node::new(2, 4)));
        assert!(!a.is_adjacent(&Node::new(1, 4)));
        assert!(!a.is_adjacent(&a));
    }

    #[test]
    fn edges_are_symmetric_and_deduplicated() {
        let mut graph: Graph = Graph::new(2, 2);
        let a: Node = Node::new(0, 0);
        let b: Node = Node::new(0, 1);
        graph.add_edge(a, b);
        graph.add_edge(b, a);
        assert_eq!(graph.num_edges(), 1);
        assert_eq!(graph.neighbors(a), &[b]);
        assert_eq!(graph.neighbors(b), &[a]);

        graph.remove_edge(a, b);
        assert_eq!(graph.num_edges(), 0);
        assert!(!graph.has_edge(a, b));
        assert!(!graph.has_edge(b, a));
        // The nodes survive the edge removal
        assert_eq!(graph.num_nodes(), 2);
    }

    #[test]
    fn bfs_distances_on_a_path() {
        let graph: Graph = path_graph(5);
        let distances = graph.bfs_distances(Node::new(0, 0));
        assert_eq!(distances.len(), 5);
        for col in 0..5 {
            assert_eq!(distances[&Node::new(0, col)], col);
        }
    }

    #[test]
    fn shortest_path_endpoints_and_length() {
        let graph: Graph = path_graph(4);
        let path: Vec<Node> = graph
            .shortest_path(Node::new(0, 0), Node::new(0, 3))
            .unwrap();
        assert_eq!(path.first(), Some(&Node::new(0, 0)));
        assert_eq!(path.last(), Some(&Node::new(0, 3)));
        assert_eq!(path.len(), 4);
        for pair in path.windows(2) {
            assert!(graph.has_edge(pair[0], pair[1]));
        }
    }

    #[test]
    fn shortest_path_trivial_and_unreachable() {
        let mut graph: Graph = path_graph(3);
        let isolated: Node = Node::new(0, 9);
        graph.add_node(isolated);
        assert_eq!(
            graph.shortest_path(isolated, isolated),
            Some(vec![isolated])
        );
        assert_eq!(graph.shortest_path(Node::new(0, 0), isolated), None);
        assert!(!graph.has_path(Node::new(0, 0), isolated));
    }

    #[test]
    fn components_and_connectivity() {
        let mut graph: Graph = path_graph(3);
        assert!(graph.is_connected());
        assert_eq!(graph.connected_components().len(), 1);

        graph.add_edge(Node::new(0, 7), Node::new(0, 8));
        assert!(!graph.is_connected());
        let components: Vec<Vec<Node>> = graph.connected_components();
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].len(), 3);
        assert_eq!(components[1].len(), 2);
    }
}
