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

use crate::geometry::Point2;
use crate::kernel::{orient2d, segment_intersection};

/// Queries shared by oriented segments: mesh half-edges and path segments.
pub trait SegmentOps {
    fn a(&self) -> &Point2;
    fn b(&self) -> &Point2;

    /// Orientation of `p` relative to `a->b`: negative if counter-clockwise,
    /// positive if clockwise, zero if collinear.
    fn orientation(&self, p: &Point2) -> f64 {
        orient2d(self.a(), self.b(), p)
    }

    /// True if `p` is on the supporting line of this segment.
    fn is_on_edge(&self, p: &Point2) -> bool {
        self.orientation(p) == 0.0
    }

    /// True if `p` is collinear and strictly between the two endpoints.
    fn intersects_point(&self, p: &Point2) -> bool {
        if self.orientation(p) != 0.0 {
            return false;
        }
        // vectors from each endpoint to p point in opposite directions
        let v0 = p - self.a();
        let v1 = p - self.b();
        v0.dot(&v1) < 0.0
    }

    /// Crossing or touching point of `other` against this segment.
    ///
    /// Only the interval `<other.a, other.b]` is tested: `other.a` is never
    /// reported as a touching point, so a path walked segment by segment does
    /// not rediscover the crossing it started from. Endpoint-endpoint
    /// coincidences are not reported either.
    fn intersects_edge<S: SegmentOps + ?Sized>(&self, other: &S) -> Option<Point2> {
        let d1 = self.orientation(other.a());
        let d2 = self.orientation(other.b());
        let d3 = other.orientation(self.a());
        let d4 = other.orientation(self.b());

        if d1 * d2 < 0.0 && d3 * d4 < 0.0 {
            return segment_intersection(self.a(), self.b(), other.a(), other.b());
        }

        if d2 == 0.0 && self.intersects_point(other.b()) {
            return Some(*other.b());
        }
        if d3 == 0.0 && other.intersects_point(self.a()) {
            return Some(*self.a());
        }
        if d4 == 0.0 && other.intersects_point(self.b()) {
            return Some(*self.b());
        }

        None
    }
}

/// A free oriented segment, e.g. one step of a path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment2 {
    pub a: Point2,
    pub b: Point2,
}

impl Segment2 {
    pub fn new(a: Point2, b: Point2) -> Self {
        Self { a, b }
    }

    pub fn inverse(&self) -> Self {
        Self::new(self.b, self.a)
    }
}

impl SegmentOps for Segment2 {
    fn a(&self) -> &Point2 {
        &self.a
    }

    fn b(&self) -> &Point2 {
        &self.b
    }
}
