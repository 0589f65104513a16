// SPDX-License-Identifier: MIT
//
// Copyright (c) 2025 Alexandre Severino
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in
// all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

#![allow(dead_code)]

use drape::Mesh;

/// 3x3 grid, elevation `z = x + 2y`.
///
/// ```text
/// 6-7-8
/// |\|\|
/// 3-4-5
/// |\|\|
/// 0-1-2
/// ```
pub fn grid_vertices() -> Vec<[f64; 3]> {
    let mut vertices = Vec::with_capacity(9);
    for y in 0..3 {
        for x in 0..3 {
            let (x, y) = (x as f64, y as f64);
            vertices.push([x, y, x + 2.0 * y]);
        }
    }
    vertices
}

/// Two counter-clockwise triangles per cell, split along the `\` diagonal.
pub fn grid_triangles() -> Vec<[usize; 3]> {
    let mut triangles = Vec::with_capacity(8);
    for row in 0..2 {
        for col in 0..2 {
            let v = row * 3 + col;
            triangles.push([v, v + 1, v + 3]);
            triangles.push([v + 1, v + 4, v + 3]);
        }
    }
    triangles
}

pub fn grid() -> Mesh {
    Mesh::new(&grid_triangles(), &grid_vertices()).unwrap()
}

/// Elevation of the planar grid surface.
pub fn grid_z(x: f64, y: f64) -> f64 {
    x + 2.0 * y
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-12,
        "expected {expected}, got {actual}"
    );
}
