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

use rug::Rational;

use crate::geometry::Point2;
use crate::kernel::orientation::exact_to_f64;

/// Intersection of the lines through `p->q` and `r->s`, evaluated with
/// rationals and rounded once to `f64`.
///
/// `d = (p.x - q.x)(r.y - s.y) - (p.y - q.y)(r.x - s.x)`; the point is
/// `((u1 * u2x - u3x * u4) / d, (u1 * u2y - u3y * u4) / d)` where `u1` and `u4`
/// are the cross products of each segment's endpoints.
///
/// Returns `None` for parallel or collinear input (`d == 0`) and for
/// non-finite coordinates. Callers are expected to have established a proper
/// crossing with orientation signs first.
pub fn segment_intersection(p: &Point2, q: &Point2, r: &Point2, s: &Point2) -> Option<Point2> {
    let [px, py, qx, qy, rx, ry, sx, sy] = [p.x, p.y, q.x, q.y, r.x, r.y, s.x, s.y]
        .map(Rational::from_f64);
    let (px, py, qx, qy) = (px?, py?, qx?, qy?);
    let (rx, ry, sx, sy) = (rx?, ry?, sx?, sy?);

    let u3x = Rational::from(&px - &qx);
    let u3y = Rational::from(&py - &qy);
    let u2x = Rational::from(&rx - &sx);
    let u2y = Rational::from(&ry - &sy);

    let d = Rational::from(&u3x * &u2y) - Rational::from(&u3y * &u2x);
    if d.cmp0().is_eq() {
        return None;
    }

    let u1 = Rational::from(&px * &qy) - Rational::from(&py * &qx);
    let u4 = Rational::from(&rx * &sy) - Rational::from(&ry * &sx);

    let x = (Rational::from(&u1 * &u2x) - Rational::from(&u3x * &u4)) / &d;
    let y = (Rational::from(&u1 * &u2y) - Rational::from(&u3y * &u4)) / &d;

    Some(Point2::new(exact_to_f64(&x), exact_to_f64(&y)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossing_segments() {
        let res = segment_intersection(
            &Point2::new(0.0, 0.0),
            &Point2::new(2.0, 2.0),
            &Point2::new(0.0, 2.0),
            &Point2::new(2.0, 0.0),
        );
        assert_eq!(res, Some(Point2::new(1.0, 1.0)));
    }

    #[test]
    fn parallel_lines_have_no_point() {
        let res = segment_intersection(
            &Point2::new(0.0, 0.0),
            &Point2::new(1.0, 0.0),
            &Point2::new(0.0, 1.0),
            &Point2::new(1.0, 1.0),
        );
        assert_eq!(res, None);
    }

    #[test]
    fn supporting_lines_meet_outside_the_segments() {
        let res = segment_intersection(
            &Point2::new(0.0, 0.0),
            &Point2::new(4.0, 0.0),
            &Point2::new(0.0, 6.0),
            &Point2::new(10.0, -4.0),
        );
        assert_eq!(res, Some(Point2::new(6.0, 0.0)));
    }
}
