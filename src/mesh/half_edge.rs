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

use crate::geometry::{Point2, SegmentOps};
use crate::mesh::basic_types::{EdgeKey, HalfEdgeId, TriangleId};

/// One directed edge `(from, to)` of one triangle.
///
/// Every triangle owns its own three half-edges; the neighbour's half-edge
/// over the same vertices, in reverse order, is the `flip`. A half-edge
/// without a flip lies on the mesh boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct HalfEdge {
    pub vertices: [usize; 2],
    pub points: [Point2; 2],
    pub key: EdgeKey,
    pub flip_key: EdgeKey,
    pub triangle: TriangleId,
    pub flip: Option<HalfEdgeId>,
}

impl HalfEdge {
    pub fn new(triangle: TriangleId, from: usize, to: usize, points: [Point2; 2]) -> Self {
        let key = EdgeKey::new(from, to);
        Self {
            vertices: [from, to],
            points,
            key,
            flip_key: key.reversed(),
            triangle,
            flip: None,
        }
    }

    pub fn is_boundary(&self) -> bool {
        self.flip.is_none()
    }
}

impl SegmentOps for HalfEdge {
    fn a(&self) -> &Point2 {
        &self.points[0]
    }

    fn b(&self) -> &Point2 {
        &self.points[1]
    }
}
