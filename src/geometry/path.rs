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

use std::ops::Index;

use crate::geometry::Point2;

/// One path coordinate. `elevation` is filled in when the tracer resolves it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathVertex {
    pub position: Point2,
    pub elevation: Option<f64>,
}

impl PathVertex {
    pub fn new(position: Point2) -> Self {
        Self {
            position,
            elevation: None,
        }
    }

    pub fn draped(position: Point2, elevation: f64) -> Self {
        Self {
            position,
            elevation: Some(elevation),
        }
    }

    /// `[x, y, z]` once the elevation is known.
    pub fn xyz(&self) -> Option<[f64; 3]> {
        self.elevation
            .map(|z| [self.position.x, self.position.y, z])
    }
}

/// An ordered, growable polyline. The tracer mutates it in place: every
/// vertex receives an elevation and crossing points are spliced in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Path {
    vertices: Vec<PathVertex>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_xy<I>(coords: I) -> Self
    where
        I: IntoIterator<Item = [f64; 2]>,
    {
        coords.into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&PathVertex> {
        self.vertices.get(index)
    }

    pub fn vertices(&self) -> &[PathVertex] {
        &self.vertices
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathVertex> {
        self.vertices.iter()
    }

    pub fn push(&mut self, vertex: PathVertex) {
        self.vertices.push(vertex);
    }

    /// Inserts `vertex` at `index`, shifting every later vertex by one.
    pub fn insert(&mut self, index: usize, vertex: PathVertex) {
        self.vertices.insert(index, vertex);
    }

    pub(crate) fn set_elevation(&mut self, index: usize, elevation: f64) {
        if let Some(v) = self.vertices.get_mut(index) {
            v.elevation = Some(elevation);
        }
    }

    /// True if every vertex carries an elevation.
    pub fn is_draped(&self) -> bool {
        self.vertices.iter().all(|v| v.elevation.is_some())
    }

    /// `[x, y, z]` triples, or `None` while any vertex lacks an elevation.
    pub fn to_xyz(&self) -> Option<Vec<[f64; 3]>> {
        self.vertices.iter().map(PathVertex::xyz).collect()
    }
}

impl FromIterator<[f64; 2]> for Path {
    fn from_iter<I: IntoIterator<Item = [f64; 2]>>(iter: I) -> Self {
        Self {
            vertices: iter
                .into_iter()
                .map(|c| PathVertex::new(c.into()))
                .collect(),
        }
    }
}

impl From<Vec<[f64; 2]>> for Path {
    fn from(coords: Vec<[f64; 2]>) -> Self {
        Self::from_xy(coords)
    }
}

impl Index<usize> for Path {
    type Output = PathVertex;

    fn index(&self, index: usize) -> &PathVertex {
        &self.vertices[index]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathVertex;
    type IntoIter = std::slice::Iter<'a, PathVertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}
