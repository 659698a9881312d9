/*
draw.rs

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

//! Draw the puzzle and save it as a PNG image.

use image::{ImageBuffer, Rgb, RgbImage};
use log::debug;
use std::error::Error;
use std::path::{Path, PathBuf};

use crate::generator::graph::{Graph, Node};

// Distance in pixels between two adjacent node centers.
const CELL_SPACING: u32 = 24;

// Margin in pixels around the maze.
const MARGIN: u32 = 24;

// Half sizes of the drawn elements. The lattice nodes and edges are thin; the
// solution path and the endpoints are drawn bigger, on top of the lattice.
const NODE_HALF: u32 = 2;
const EDGE_HALF: u32 = 1;
const PATH_NODE_HALF: u32 = 4;
const PATH_EDGE_HALF: u32 = 4;
const ENDPOINT_HALF: u32 = 5;

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const LATTICE: Rgb<u8> = Rgb([0, 0, 0]);
const PATH: Rgb<u8> = Rgb([220, 40, 40]);
const ENDPOINT: Rgb<u8> = Rgb([40, 160, 60]);

/// Draw the puzzle and save it as a PNG image.
///
/// The image shows the lattice in black, the solution path (if any) in red,
/// and the two endpoints in green. Only grid-adjacent edges belong to the
/// maze lattice; connectivity repair shortcuts are skipped.
///
/// The image file is named `{prefix}_{n}x{n}_path.png` or
/// `{prefix}_{n}x{n}_no_path.png`, with `prefix` the provided file prefix,
/// which can include a directory. The function returns the path of the
/// written file.
///
/// # Errors
///
/// The function returns an error if the image cannot be written.
pub fn render(
    graph: &Graph,
    start: Node,
    end: Node,
    path: &[Node],
    file_prefix: &Path,
    grid_size: usize,
    has_path: bool,
) -> Result<PathBuf, Box<dyn Error>> {
    let path_suffix: &str = if has_path { "path" } else { "no_path" };
    let filename: PathBuf = PathBuf::from(format!(
        "{}_{grid_size}x{grid_size}_{path_suffix}.png",
        file_prefix.display()
    ));

    let side: u32 = 2 * MARGIN + (grid_size.max(1) as u32 - 1) * CELL_SPACING;
    let mut img: RgbImage = ImageBuffer::from_pixel(side, side, BACKGROUND);

    // Lattice edges, skipping the connectivity repair shortcuts
    for (u, v) in graph.edges() {
        if u.is_adjacent(&v) {
            draw_edge(&mut img, u, v, EDGE_HALF, LATTICE);
        }
    }
    for node in graph.nodes() {
        draw_square(&mut img, *node, NODE_HALF, LATTICE);
    }

    // Solution path on top of the lattice
    for pair in path.windows(2) {
        draw_edge(&mut img, pair[0], pair[1], PATH_EDGE_HALF, PATH);
    }
    for node in path {
        draw_square(&mut img, *node, PATH_NODE_HALF, PATH);
    }

    draw_square(&mut img, start, ENDPOINT_HALF, ENDPOINT);
    draw_square(&mut img, end, ENDPOINT_HALF, ENDPOINT);

    img.save(&filename)?;
    debug!("Wrote {}", filename.display());
    Ok(filename)
}

/// Pixel coordinates of the node center.
fn node_center(node: Node) -> (u32, u32) {
    (
        MARGIN + node.col as u32 * CELL_SPACING,
        MARGIN + node.row as u32 * CELL_SPACING,
    )
}

/// Fill the axis-aligned rectangle between two corners, both included.
fn fill_rect(img: &mut RgbImage, x0: u32, y0: u32, x1: u32, y1: u32, color: Rgb<u8>) {
    for y in y0..=y1.min(img.height() - 1) {
        for x in x0..=x1.min(img.width() - 1) {
            img.put_pixel(x, y, color);
        }
    }
}

/// Draw a filled square of the given half size centered on the node.
fn draw_square(img: &mut RgbImage, node: Node, half: u32, color: Rgb<u8>) {
    let (cx, cy) = node_center(node);
    fill_rect(
        img,
        cx.saturating_sub(half),
        cy.saturating_sub(half),
        cx + half,
        cy + half,
        color,
    );
}

/// Draw a horizontal or vertical edge as a thick line between the node
/// centers.
fn draw_edge(img: &mut RgbImage, u: Node, v: Node, half: u32, color: Rgb<u8>) {
    let (ux, uy) = node_center(u);
    let (vx, vy) = node_center(v);
    let x0: u32 = ux.min(vx);
    let x1: u32 = ux.max(vx);
    let y0: u32 = uy.min(vy);
    let y1: u32 = uy.max(vy);
    fill_rect(
        img,
        x0.saturating_sub(half),
        y0.saturating_sub(half),
        x1 + half,
        y1 + half,
        color,
    );
}
