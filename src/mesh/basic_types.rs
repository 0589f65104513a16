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

use std::fmt;

/// Index of a triangle in its mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TriangleId(pub usize);

impl fmt::Display for TriangleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Half-edge handle: the triangle that owns it and its slot (0, 1 or 2).
/// Slot `i` runs from the triangle's vertex `i` to vertex `(i + 1) % 3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HalfEdgeId {
    pub triangle: TriangleId,
    pub slot: usize,
}

impl HalfEdgeId {
    pub fn new(triangle: TriangleId, slot: usize) -> Self {
        Self { triangle, slot }
    }
}

/// Directed edge key, written `from-to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    pub from: usize,
    pub to: usize,
}

impl EdgeKey {
    pub fn new(from: usize, to: usize) -> Self {
        Self { from, to }
    }

    /// Key of the flip edge.
    pub fn reversed(&self) -> Self {
        Self::new(self.to, self.from)
    }
}

impl fmt::Display for EdgeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

/// Where a point sits relative to one triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// On the vertex in this slot (within tolerance).
    Vertex(usize),
    /// Strictly inside the span of the half-edge in this slot.
    Edge(usize),
    Interior,
    Outside,
}

/// A problem found by [`Mesh::validate`](crate::mesh::Mesh::validate).
#[derive(Debug, Clone, PartialEq)]
pub enum MeshIssue {
    /// `e.flip.flip != e`.
    AsymmetricFlip { edge: HalfEdgeId },
    /// `e.flip.key != e.flip_key`.
    FlipKeyMismatch { edge: HalfEdgeId },
    /// Vertices wound clockwise; nothing is ever inside this triangle.
    ClockwiseTriangle { triangle: TriangleId },
    /// Zero-area triangle; elevation interpolation is undefined on it.
    DegenerateTriangle { triangle: TriangleId },
    /// Two triangles share a directed edge, so at most one of them is paired.
    DuplicateDirectedEdge { key: EdgeKey, triangles: [TriangleId; 2] },
}
