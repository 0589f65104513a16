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
use std::ops::Sub;

/// A point in the plane.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point2 {
    pub x: f64,
    pub y: f64,
}

impl Point2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn dot(&self, other: &Point2) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// True if both coordinates are within `eps` of `other`'s.
    pub fn approx_eq(&self, other: &Point2, eps: f64) -> bool {
        (self.x - other.x).abs() < eps && (self.y - other.y).abs() < eps
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<[f64; 2]> for Point2 {
    fn from(coords: [f64; 2]) -> Self {
        Point2::new(coords[0], coords[1])
    }
}

impl From<Point2> for [f64; 2] {
    fn from(p: Point2) -> Self {
        [p.x, p.y]
    }
}

impl<'a, 'b> Sub<&'b Point2> for &'a Point2 {
    type Output = Point2;
    fn sub(self, rhs: &'b Point2) -> Point2 {
        Point2 {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl Sub for Point2 {
    type Output = Point2;
    fn sub(self, rhs: Point2) -> Point2 {
        &self - &rhs
    }
}

/// A mesh vertex: planar position plus elevation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Projection onto the XY plane.
    pub fn xy(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }
}

impl From<[f64; 3]> for Point3 {
    fn from(coords: [f64; 3]) -> Self {
        Point3::new(coords[0], coords[1], coords[2])
    }
}

impl From<Point3> for [f64; 3] {
    fn from(p: Point3) -> Self {
        [p.x, p.y, p.z]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sub_and_dot() {
        let a = Point2::new(3.0, 4.0);
        let b = Point2::new(1.0, 1.0);
        let d = a - b;
        assert_eq!(d, Point2::new(2.0, 3.0));
        assert_eq!(d.dot(&Point2::new(1.0, -1.0)), -1.0);
    }

    #[test]
    fn projection_drops_elevation() {
        let p = Point3::from([1.5, -2.0, 7.0]);
        assert_eq!(p.xy(), Point2::new(1.5, -2.0));
        assert_eq!(<[f64; 3]>::from(p), [1.5, -2.0, 7.0]);
    }

    #[test]
    fn approx_eq_is_per_axis() {
        let a = Point2::new(0.0, 10.0);
        assert!(a.approx_eq(&Point2::new(0.00005, 9.99995), 1e-4));
        assert!(!a.approx_eq(&Point2::new(0.0002, 10.0), 1e-4));
    }
}
