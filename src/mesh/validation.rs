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

use crate::kernel::Orientation;
use crate::mesh::basic_types::MeshIssue;
use crate::mesh::mesh::Mesh;

impl Mesh {
    /// Consistency report for the built mesh. An empty list means every
    /// flip pairing is symmetric and every triangle is wound counter-clockwise
    /// with non-zero area.
    ///
    /// Nothing is repaired; the tracer may still fail on meshes with issues.
    pub fn validate(&self) -> Vec<MeshIssue> {
        let mut issues = Vec::new();

        for triangle in self.triangles() {
            match Orientation::of(triangle.orientation()) {
                Orientation::CounterClockwise => {}
                Orientation::Clockwise => issues.push(MeshIssue::ClockwiseTriangle {
                    triangle: triangle.id,
                }),
                Orientation::Collinear => issues.push(MeshIssue::DegenerateTriangle {
                    triangle: triangle.id,
                }),
            }

            for slot in 0..3 {
                let edge = triangle.half_edge(slot);
                let Some(flip_id) = edge.flip else {
                    continue;
                };
                let flip = self.half_edge(flip_id);
                if flip.flip != Some(triangle.half_edge_id(slot)) {
                    issues.push(MeshIssue::AsymmetricFlip {
                        edge: triangle.half_edge_id(slot),
                    });
                }
                if flip.key != edge.flip_key {
                    issues.push(MeshIssue::FlipKeyMismatch {
                        edge: triangle.half_edge_id(slot),
                    });
                }
            }
        }

        issues.extend(
            self.duplicate_edges
                .iter()
                .map(|&(key, triangles)| MeshIssue::DuplicateDirectedEdge { key, triangles }),
        );
        issues
    }
}
