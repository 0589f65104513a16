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

use std::cmp::Ordering;

use num_traits::Zero;
use rug::Rational;

use crate::geometry::Point2;

/// Unit roundoff of `f64` (2^-53).
const HALF_EPSILON: f64 = f64::EPSILON / 2.0;

/// Relative error bound of the floating-point orientation determinant.
/// When the approximate value is smaller than this bound times the magnitude
/// of its two products, its sign cannot be trusted.
const CCW_ERROR_BOUND: f64 = (3.0 + 16.0 * HALF_EPSILON) * HALF_EPSILON;

/// Turning direction of three points, classified from an orientation value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    CounterClockwise,
    Collinear,
    Clockwise,
}

impl Orientation {
    /// Classifies an orientation value. Negative values are counter-clockwise,
    /// positive ones clockwise. NaN classifies as collinear.
    pub fn of<T: Zero + PartialOrd>(value: T) -> Self {
        let zero = T::zero();
        if value < zero {
            Orientation::CounterClockwise
        } else if value > zero {
            Orientation::Clockwise
        } else {
            Orientation::Collinear
        }
    }
}

/// Returns:
/// - <0 if a->b->p are oriented counter-clockwise
/// - >0 if clockwise
/// - =0 if p is collinear with a->b
///
/// The floating-point determinant is used when its sign is certified by the
/// error bound; otherwise it is re-evaluated exactly with rationals. The sign
/// of the result is always exact for finite inputs.
pub fn orient2d(a: &Point2, b: &Point2, p: &Point2) -> f64 {
    let det_left = (a.x - p.x) * (b.y - p.y);
    let det_right = (a.y - p.y) * (b.x - p.x);
    let det = det_right - det_left;

    let det_sum = if det_left > 0.0 {
        if det_right <= 0.0 {
            return det;
        }
        det_left + det_right
    } else if det_left < 0.0 {
        if det_right >= 0.0 {
            return det;
        }
        -det_left - det_right
    } else {
        return det;
    };

    let error_bound = CCW_ERROR_BOUND * det_sum;
    if det >= error_bound || -det >= error_bound {
        return det;
    }

    match orient2d_exact(a, b, p) {
        Some(exact) => exact_to_f64(&exact),
        // non-finite input, nothing better to offer
        None => det,
    }
}

/// Exact orientation determinant, same sign convention as [`orient2d`].
/// Returns `None` if any coordinate is not finite.
pub fn orient2d_exact(a: &Point2, b: &Point2, p: &Point2) -> Option<Rational> {
    let ax = Rational::from_f64(a.x)?;
    let ay = Rational::from_f64(a.y)?;
    let bx = Rational::from_f64(b.x)?;
    let by = Rational::from_f64(b.y)?;
    let px = Rational::from_f64(p.x)?;
    let py = Rational::from_f64(p.y)?;

    let det_left = Rational::from(&ax - &px) * Rational::from(&by - &py);
    let det_right = Rational::from(&ay - &py) * Rational::from(&bx - &px);
    Some(det_right - det_left)
}

/// Rounds an exact value to `f64` without letting a non-zero value collapse to zero.
pub(crate) fn exact_to_f64(value: &Rational) -> f64 {
    let approx = value.to_f64();
    match value.cmp0() {
        Ordering::Equal => 0.0,
        Ordering::Greater if approx == 0.0 => f64::MIN_POSITIVE,
        Ordering::Less if approx == 0.0 => -f64::MIN_POSITIVE,
        _ => approx,
    }
}
