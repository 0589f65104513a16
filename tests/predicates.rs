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

use drape::{HalfEdge, Point2, Segment2, SegmentOps, TriangleId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn half_edge(a: [f64; 2], b: [f64; 2]) -> HalfEdge {
    HalfEdge::new(TriangleId(0), 0, 1, [a.into(), b.into()])
}

fn segment(a: [f64; 2], b: [f64; 2]) -> Segment2 {
    Segment2::new(a.into(), b.into())
}

#[test]
fn orientation_zero_iff_on_edge() {
    let mut rng = StdRng::seed_from_u64(11);
    let e = half_edge([-1.0, -0.5], [2.0, 1.0]);
    for _ in 0..1000 {
        // half of the samples on the supporting line, as far as f64 allows
        let p = if rng.random_bool(0.5) {
            let t: f64 = rng.random_range(-3.0..3.0);
            Point2::new(-1.0 + 3.0 * t, -0.5 + 1.5 * t)
        } else {
            Point2::new(rng.random_range(-5.0..5.0), rng.random_range(-5.0..5.0))
        };
        assert_eq!(e.orientation(&p) == 0.0, e.is_on_edge(&p));
    }
}

#[test]
fn point_on_edge_span() {
    let e = half_edge([0.0, 0.0], [10.0, 0.0]);
    assert!(e.intersects_point(&Point2::new(3.0, 0.0)));
    // collinear, past the endpoint
    assert!(!e.intersects_point(&Point2::new(13.0, 0.0)));
    // endpoints are not strictly between
    assert!(!e.intersects_point(&Point2::new(10.0, 0.0)));

    let diagonal = half_edge([10.0, 0.0], [0.0, 10.0]);
    assert!(!diagonal.intersects_point(&Point2::new(20.0, -10.0)));
}

#[test]
fn crossing_at_edge_endpoint() {
    let e = half_edge([0.0, 0.0], [4.0, 0.0]);
    let other = segment([4.0, 4.0], [4.0, -4.0]);
    assert_eq!(e.intersects_edge(&other), Some(Point2::new(4.0, 0.0)));
}

#[test]
fn proper_crossing_is_exact() {
    let e = half_edge([0.0, 0.0], [3.0, 3.0]);
    let other = segment([0.0, 1.0], [3.0, 0.0]);
    // lines meet at (0.75, 0.75)
    assert_eq!(e.intersects_edge(&other), Some(Point2::new(0.75, 0.75)));
}

#[test]
fn diagonal_crossing_of_the_long_edge() {
    // first edge of the [0,0],[10,0],[0,10] triangle
    let e = half_edge([0.0, 0.0], [10.0, 0.0]);
    let other = segment([0.0, 6.0], [10.0, -4.0]);
    assert_eq!(e.intersects_edge(&other), Some(Point2::new(6.0, 0.0)));

    // same segment, but (6, 0) lies past the end of a shorter edge
    let short = half_edge([0.0, 0.0], [4.0, 0.0]);
    assert_eq!(short.intersects_edge(&other), None);
}

#[test]
fn non_intersecting() {
    let e = half_edge([0.0, 0.0], [4.0, 0.0]);
    assert_eq!(e.intersects_edge(&segment([0.0, 10.0], [10.0, 10.0])), None);
}

#[test]
fn only_the_far_endpoint_is_tested() {
    let e = half_edge([0.0, 0.0], [4.0, 0.0]);

    // segment ends on e: reported
    let arriving = segment([1.0, 2.0], [1.0, 0.0]);
    assert_eq!(e.intersects_edge(&arriving), Some(Point2::new(1.0, 0.0)));

    // segment starts on e: not reported
    let leaving = segment([1.0, 0.0], [1.0, -2.0]);
    assert_eq!(e.intersects_edge(&leaving), None);
}

#[test]
fn swapping_roles_changes_the_tested_start() {
    let e = half_edge([0.0, 0.0], [4.0, 0.0]);
    let s = half_edge([2.0, 0.0], [2.0, 3.0]);
    // s starts on e, so e does not see it
    assert_eq!(e.intersects_edge(&s), None);
    // from s's side, s.a is one of its own endpoints and lies inside e
    assert_eq!(s.intersects_edge(&e), Some(Point2::new(2.0, 0.0)));
    let through = half_edge([2.0, -3.0], [2.0, 3.0]);
    assert_eq!(e.intersects_edge(&through), Some(Point2::new(2.0, 0.0)));
}

#[test]
fn shared_vertex_is_not_an_intersection() {
    let e = half_edge([0.0, 0.0], [4.0, 0.0]);
    let other = half_edge([4.0, 0.0], [0.0, 4.0]);
    assert_eq!(e.intersects_edge(&other), None);
    assert_eq!(other.intersects_edge(&e), None);
}
