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

use thiserror::Error;

use crate::geometry::Point2;
use crate::mesh::{EdgeKey, TriangleId};

pub type Result<T> = std::result::Result<T, DrapeError>;

/// Errors raised while building a mesh.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeshError {
    #[error(
        "face {face} references vertex {index} in slot {slot}, but the mesh has {vertex_count} vertices"
    )]
    MalformedMesh {
        face: usize,
        slot: usize,
        index: usize,
        vertex_count: usize,
    },

    #[error("face {face} repeats a vertex index")]
    DegenerateFace { face: usize },
}

/// Errors that stop a trace. None of them are recovered; the path is left
/// as far as the walk got.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TraceError {
    #[error("path start {point} is not inside any triangle")]
    StartPointOutsideMesh { point: Point2 },

    #[error(
        "path vertex {index} lands on mesh vertex {vertex}; continuing through a vertex fan is not supported ({} candidate triangles)",
        .candidates.len()
    )]
    UnsupportedVertexLanding {
        index: usize,
        vertex: usize,
        candidates: Vec<TriangleId>,
    },

    #[error("path vertex {index} is outside triangle {triangle} but no edge crossing was found")]
    MissingCrossing { index: usize, triangle: TriangleId },

    #[error("path leaves the mesh across boundary edge {edge} at {point}")]
    PathExitsMesh {
        index: usize,
        edge: EdgeKey,
        point: Point2,
    },

    #[error("segment ending at path vertex {index} produced more than {limit} crossings")]
    WalkDiverged { index: usize, limit: usize },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DrapeError {
    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Trace(#[from] TraceError),
}
