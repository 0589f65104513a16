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

//! Drapes 2D polylines onto 2.5D triangulated surfaces.
//!
//! A [`Mesh`] is built from vertex index triples and `[x, y, z]` vertices.
//! A [`Tracer`] then walks a [`Path`] across it, triangle to triangle,
//! inserting a vertex wherever the path crosses a mesh edge and giving every
//! path vertex the elevation of the surface underneath it.
//!
//! Orientation tests are exact: a floating-point filter falls back to
//! arbitrary-precision rationals when its sign is uncertain.

pub mod error;
pub mod geometry;
pub mod kernel;
pub mod mesh;
pub mod trace;

pub use error::{DrapeError, MeshError, Result, TraceError};
pub use geometry::{Path, PathVertex, Point2, Point3, Segment2, SegmentOps};
pub use mesh::{EdgeKey, HalfEdge, HalfEdgeId, Location, Mesh, MeshIssue, Triangle, TriangleId};
pub use trace::{TraceConfig, TraceReport, Tracer, drape};

/// Builds a mesh and drapes one path over it with the default configuration.
pub fn drape_path(
    triangles: &[[usize; 3]],
    vertices: &[[f64; 3]],
    path: &[[f64; 2]],
) -> Result<Vec<[f64; 3]>> {
    let mesh = Mesh::new(triangles, vertices)?;
    let mut path = Path::from_xy(path.iter().copied());
    drape(&mesh, &mut path)?;
    Ok(path
        .iter()
        .filter_map(PathVertex::xyz)
        .collect())
}
