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

use crate::geometry::{Point2, Point3, SegmentOps};
use crate::kernel::orient2d;
use crate::mesh::basic_types::{HalfEdgeId, Location, TriangleId};
use crate::mesh::half_edge::HalfEdge;

/// Absolute per-axis tolerance used to decide that a point sits on a vertex.
pub const DEFAULT_VERTEX_TOLERANCE: f64 = 1e-4;

/// A mesh triangle `(v0, v1, v2)` with its three half-edges
/// `e0 = (v0, v1)`, `e1 = (v1, v2)`, `e2 = (v2, v0)`.
///
/// Triangles are expected to be wound counter-clockwise, so that the interior
/// is on the negative-orientation side of each half-edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Triangle {
    pub id: TriangleId,
    pub vertices: [usize; 3],
    pub points: [Point3; 3],
    pub edges: [HalfEdge; 3],
}

impl Triangle {
    pub fn new(id: TriangleId, vertices: [usize; 3], points: [Point3; 3]) -> Self {
        let edge = |i: usize| {
            let j = (i + 1) % 3;
            HalfEdge::new(
                id,
                vertices[i],
                vertices[j],
                [points[i].xy(), points[j].xy()],
            )
        };
        Self {
            id,
            vertices,
            points,
            edges: [edge(0), edge(1), edge(2)],
        }
    }

    /// Stand-alone triangle with vertex indices `0, 1, 2`.
    pub fn from_points(points: [Point3; 3]) -> Self {
        Self::new(TriangleId(0), [0, 1, 2], points)
    }

    pub fn half_edge(&self, slot: usize) -> &HalfEdge {
        &self.edges[slot]
    }

    pub fn half_edge_id(&self, slot: usize) -> HalfEdgeId {
        HalfEdgeId::new(self.id, slot)
    }

    pub(crate) fn set_flip(&mut self, slot: usize, flip: HalfEdgeId) {
        self.edges[slot].flip = Some(flip);
    }

    /// Orientation of `v0, v1, v2`; negative for a counter-clockwise triangle.
    pub fn orientation(&self) -> f64 {
        orient2d(&self.points[0].xy(), &self.points[1].xy(), &self.points[2].xy())
    }

    /// Strictly inside: points on an edge or a vertex are not inside.
    pub fn is_inside(&self, p: &Point2) -> bool {
        self.edges.iter().all(|e| e.orientation(p) < 0.0)
    }

    /// First half-edge, in slot order, whose supporting line contains `p`.
    pub fn is_on_edge(&self, p: &Point2) -> Option<usize> {
        self.edges.iter().position(|e| e.is_on_edge(p))
    }

    /// Slot of the vertex within `tolerance` of `p` on both axes.
    ///
    /// A point equal to a vertex is always on it, even for a zero tolerance.
    pub fn is_on_vertex(&self, p: &Point2, tolerance: f64) -> Option<usize> {
        self.points.iter().position(|v| {
            let v = v.xy();
            v == *p || v.approx_eq(p, tolerance)
        })
    }

    /// First half-edge, in slot order, that `segment` crosses or touches,
    /// with the intersection point. Only `<segment.a, segment.b]` is tested.
    pub fn intersects_edge<S: SegmentOps + ?Sized>(&self, segment: &S) -> Option<(usize, Point2)> {
        self.intersects_other_edges(None, segment)
    }

    /// Like [`intersects_edge`](Self::intersects_edge) but skips the half-edge
    /// in slot `exclude`, typically the one the walk just entered through.
    pub fn intersects_other_edges<S: SegmentOps + ?Sized>(
        &self,
        exclude: Option<usize>,
        segment: &S,
    ) -> Option<(usize, Point2)> {
        self.edges
            .iter()
            .enumerate()
            .filter(|(slot, _)| Some(*slot) != exclude)
            .find_map(|(slot, e)| e.intersects_edge(segment).map(|p| (slot, p)))
    }

    /// Classifies `p` as vertex, edge, interior or outside, in that priority.
    ///
    /// Edge hits require `p` to lie strictly within an edge's span, so points
    /// on the extension of an edge are `Outside`.
    pub fn classify(&self, p: &Point2, vertex_tolerance: f64) -> Location {
        if let Some(slot) = self.is_on_vertex(p, vertex_tolerance) {
            return Location::Vertex(slot);
        }
        if let Some(slot) = self.edges.iter().position(|e| e.intersects_point(p)) {
            return Location::Edge(slot);
        }
        if self.is_inside(p) {
            Location::Interior
        } else {
            Location::Outside
        }
    }

    /// Barycentric interpolation of the vertex elevations at `p`.
    ///
    /// Valid for points inside the triangle or on its boundary. A zero-area
    /// triangle yields NaN.
    pub fn elevation(&self, p: &Point2) -> f64 {
        let [p0, p1, p2] = &self.points;

        let vec0 = Point2::new(p1.x - p0.x, p1.y - p0.y);
        let vec1 = Point2::new(p2.x - p0.x, p2.y - p0.y);
        let vec2 = Point2::new(p.x - p0.x, p.y - p0.y);

        let d00 = vec0.dot(&vec0);
        let d01 = vec0.dot(&vec1);
        let d11 = vec1.dot(&vec1);
        let d20 = vec2.dot(&vec0);
        let d21 = vec2.dot(&vec1);
        let denom = d00 * d11 - d01 * d01;

        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        let u = 1.0 - v - w;

        u * p0.z + v * p1.z + w * p2.z
    }
}
