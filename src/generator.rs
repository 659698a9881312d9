/*
generator.rs

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

//! Generate random grid-maze puzzles.
//!
//! A puzzle starts as the full N×N grid lattice built by [`lattice::build`].
//! The [`thinning::thin`] function then removes lattice edges at random;
//! when the puzzle must have a solution, the same function repairs the
//! connectivity so that a single component remains.
//!
//! The [`endpoints::select_distant_pair`] function picks the two endpoints
//! that the player must connect, as far apart as the thinned graph allows.
//!
//! The solution comes from the [`sculpt`] module:
//!
//! * For a puzzle with a solution, [`sculpt::trace_path`] returns the
//!   shortest path between the endpoints.
//!
//! * For a puzzle without a solution, [`sculpt::carve_no_path`] repeatedly
//!   removes a center-biased random edge from the current shortest path
//!   until the endpoints are disconnected.
//!
//! Every randomized step takes the random generator as a parameter, so a
//! seeded [`rand::rngs::StdRng`] replays a whole batch deterministically.

pub mod endpoints;
pub mod graph;
pub mod lattice;
pub mod sculpt;
pub mod thinning;
